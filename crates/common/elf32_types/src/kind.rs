use core::fmt;

use bitflags::bitflags;
use strum::{EnumMessage as _, FromRepr, IntoStaticStr};

/// Defines a classification of a raw header field.
///
/// Known values map to `Known($kind)`; every other value is kept as
/// `Unknown(raw)` so it can still be reported.
macro_rules! classification {
    ($(#[$meta:meta])* $vis:vis enum $name:ident($kind:ident: $raw:ty);) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            Known($kind),
            Unknown($raw),
        }

        impl $name {
            #[must_use]
            pub fn from_raw(raw: $raw) -> Self {
                $kind::from_repr(raw).map_or(Self::Unknown(raw), Self::Known)
            }

            #[must_use]
            pub fn raw(self) -> $raw {
                match self {
                    Self::Known(kind) => kind as $raw,
                    Self::Unknown(raw) => raw,
                }
            }

            /// Returns the symbolic name of the value, or `"UNKNOWN"`.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    Self::Known(kind) => kind.into(),
                    Self::Unknown(_) => "UNKNOWN",
                }
            }

            /// Returns the human readable description of the value.
            #[must_use]
            pub fn description(self) -> &'static str {
                match self {
                    Self::Known(kind) => kind.get_message().unwrap_or("Unknown"),
                    Self::Unknown(_) => "Unknown",
                }
            }

            #[must_use]
            pub fn is_known(self) -> bool {
                matches!(self, Self::Known(_))
            }
        }

        impl From<$kind> for $name {
            fn from(kind: $kind) -> Self {
                Self::Known(kind)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Known(_) => f.write_str(self.description()),
                    Self::Unknown(raw) => write!(f, "Unknown ({raw})"),
                }
            }
        }
    };
}

/// Object file type (`e_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr, strum::EnumMessage)]
#[repr(u16)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FileKind {
    #[strum(message = "None")]
    None = 0,
    #[strum(message = "Relocatable")]
    Relocatable = 1,
    #[strum(message = "Executable")]
    Executable = 2,
    #[strum(message = "Shared object")]
    Shared = 3,
    #[strum(message = "Core")]
    Core = 4,
}

classification! {
    /// Classified `e_type` of a file header.
    pub enum FileType(FileKind: u16);
}

/// Target architecture (`e_machine`).
///
/// Only the most popular machines are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr, strum::EnumMessage)]
#[repr(u16)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MachineKind {
    #[strum(message = "None")]
    None = 0,
    #[strum(message = "SPARC")]
    Sparc = 2,
    #[strum(message = "Intel 80386")]
    I386 = 3,
    #[strum(message = "Motorola 68000")]
    M68k = 4,
    #[strum(message = "MIPS RS3000")]
    Mips = 8,
    #[strum(message = "HPPA")]
    Parisc = 15,
    #[strum(message = "PowerPC")]
    Ppc = 20,
    #[strum(message = "PowerPC 64-bit")]
    Ppc64 = 21,
    #[strum(message = "IBM S390")]
    S390 = 22,
    #[strum(message = "ARM")]
    Arm = 40,
    #[strum(message = "Digital Alpha")]
    FakeAlpha = 41,
    #[strum(message = "SPARC v9 64-bit")]
    SparcV9 = 43,
    #[strum(message = "IA64")]
    Ia64 = 50,
}

classification! {
    /// Classified `e_machine` of a file header.
    pub enum Machine(MachineKind: u16);
}

/// Section type (`sh_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr, strum::EnumMessage)]
#[repr(u32)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionKind {
    #[strum(message = "Null (no associated section)")]
    Null = 0,
    #[strum(message = "Program information")]
    Progbits = 1,
    #[strum(message = "Symbol table")]
    Symtab = 2,
    #[strum(message = "String table")]
    Strtab = 3,
    #[strum(message = "Relocation entries with explicit addends")]
    Rela = 4,
    #[strum(message = "Symbol hash table")]
    Hash = 5,
    #[strum(message = "Dynamic linking information")]
    Dynamic = 6,
    #[strum(message = "Note section")]
    Note = 7,
    #[strum(message = "Empty section (NOBITS)")]
    Nobits = 8,
    #[strum(message = "Relocation entries w/o explicit addends")]
    Rel = 9,
    #[strum(message = "Symbols for dynamic linking")]
    Dynsym = 11,
    #[strum(message = "Array of pointers to initialization functions")]
    InitArray = 14,
    #[strum(message = "Array of pointers to termination functions")]
    FiniArray = 15,
    #[strum(message = "Array of pointers to preinit functions")]
    PreinitArray = 16,
    #[strum(message = "Provided symbol versions")]
    GnuVerdef = 0x6fff_fffd,
    #[strum(message = "Required symbol versions")]
    GnuVerneed = 0x6fff_fffe,
    #[strum(message = "Symbol version table")]
    GnuVersym = 0x6fff_ffff,
}

classification! {
    /// Classified `sh_type` of a section header.
    pub enum SectionType(SectionKind: u32);
}

bitflags! {
    /// Section attribute flags (`sh_flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct SectionFlags: u32 {
        /// Contains writable data
        const WRITE = 0x1;
        /// Occupies memory during execution
        const ALLOC = 0x2;
        /// Contains executable code
        const EXECINSTR = 0x4;
    }
}

impl SectionFlags {
    /// Returns descriptions of the known flags that are set.
    pub fn descriptions(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::WRITE, "Section contains writable data"),
            (Self::ALLOC, "Section occupies memory"),
            (Self::EXECINSTR, "Section contains executable code"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, desc)| desc)
    }
}
