//! Data types for 32-bit ELF files.
//!
//! The layout of the parts of a file that are inspected:
//!
//! | offset    | size                    | content              | type                              |
//! |-----------|-------------------------|----------------------|-----------------------------------|
//! | 0         | 52                      | File header          | [`Elf32FileHeader`]               |
//! | `e_shoff` | `e_shnum * e_shentsize` | Section header table | array of [`Elf32SectionHeader`]   |
//!
//! All multi-byte fields are stored in the byte order declared by the
//! identification bytes of the file header. The raw fields of the structs in
//! this crate keep that file order; the accessor methods take a [`ByteOrder`]
//! and return values in host order.

#![cfg_attr(not(test), no_std)]

use dataview::Pod;
use strum::Display;

pub use self::kind::{
    FileKind, FileType, Machine, MachineKind, SectionFlags, SectionKind, SectionType,
};

mod kind;

/// Number of identification bytes at the start of the file header.
pub const EI_NIDENT: usize = 16;

/// Index of the file class byte in the identification bytes.
pub const EI_CLASS: usize = 4;

/// Index of the data encoding byte in the identification bytes.
pub const EI_DATA: usize = 5;

/// Index of the file version byte in the identification bytes.
pub const EI_VERSION: usize = 6;

/// `"\x7FELF"`
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// 32-bit objects.
pub const ELFCLASS32: u8 = 1;
/// 64-bit objects.
pub const ELFCLASS64: u8 = 2;

/// Two's complement, little-endian.
pub const ELFDATA2LSB: u8 = 1;
/// Two's complement, big-endian.
pub const ELFDATA2MSB: u8 = 2;

/// Current ELF version.
pub const EV_CURRENT: u8 = 1;

/// Byte order of the multi-byte fields of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ByteOrder {
    #[strum(serialize = "little-endian")]
    Little,
    #[strum(serialize = "big-endian")]
    Big,
}

impl ByteOrder {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Determines the byte order from the data encoding identification byte.
    ///
    /// Anything but [`ELFDATA2LSB`] is treated as big-endian.
    #[must_use]
    pub const fn from_ident_data(data: u8) -> Self {
        if data == ELFDATA2LSB {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Returns `true` if values in this byte order have to be swapped to be
    /// used on the host.
    #[must_use]
    pub fn needs_swap(self) -> bool {
        self != Self::NATIVE
    }

    /// Converts a raw `u16` in this byte order to host order.
    #[must_use]
    pub const fn u16(self, raw: u16) -> u16 {
        match self {
            Self::Little => u16::from_le(raw),
            Self::Big => u16::from_be(raw),
        }
    }

    /// Converts a raw `u32` in this byte order to host order.
    #[must_use]
    pub const fn u32(self, raw: u32) -> u32 {
        match self {
            Self::Little => u32::from_le(raw),
            Self::Big => u32::from_be(raw),
        }
    }

    /// Converts a host order `u16` to this byte order.
    #[must_use]
    pub const fn raw_u16(self, value: u16) -> u16 {
        match self {
            Self::Little => value.to_le(),
            Self::Big => value.to_be(),
        }
    }

    /// Converts a host order `u32` to this byte order.
    #[must_use]
    pub const fn raw_u32(self, value: u32) -> u32 {
        match self {
            Self::Little => value.to_le(),
            Self::Big => value.to_be(),
        }
    }
}

/// ELF32 file header (`Elf32_Ehdr`).
#[repr(C)]
#[derive(Debug, Clone, Pod)]
pub struct Elf32FileHeader {
    /// Identification bytes. Not affected by byte order.
    pub ident: [u8; EI_NIDENT],
    /// Object file type
    pub ty: u16,
    /// Architecture
    pub machine: u16,
    /// Object file version
    pub version: u32,
    /// Entry point virtual address
    pub entry: u32,
    /// Program header table file offset
    pub phoff: u32,
    /// Section header table file offset
    pub shoff: u32,
    /// Processor-specific flags
    pub flags: u32,
    /// ELF header size in bytes
    pub ehsize: u16,
    /// Program header table entry size
    pub phentsize: u16,
    /// Program header table entry count
    pub phnum: u16,
    /// Section header table entry size
    pub shentsize: u16,
    /// Section header table entry count
    pub shnum: u16,
    /// Section header string table index
    pub shstrndx: u16,
}
const _: () = const { assert!(size_of::<Elf32FileHeader>() == 52) };

impl Elf32FileHeader {
    /// Returns `true` if the identification bytes start with [`ELF_MAGIC`].
    #[must_use]
    pub fn has_magic(&self) -> bool {
        self.ident[..ELF_MAGIC.len()] == ELF_MAGIC
    }

    /// Returns the file class identification byte.
    #[must_use]
    pub const fn class(&self) -> u8 {
        self.ident[EI_CLASS]
    }

    /// Returns the byte order declared by the data encoding byte.
    #[must_use]
    pub const fn byte_order(&self) -> ByteOrder {
        ByteOrder::from_ident_data(self.ident[EI_DATA])
    }

    #[must_use]
    pub fn file_type(&self, order: ByteOrder) -> FileType {
        FileType::from_raw(order.u16(self.ty))
    }

    #[must_use]
    pub fn machine(&self, order: ByteOrder) -> Machine {
        Machine::from_raw(order.u16(self.machine))
    }

    #[must_use]
    pub const fn entry(&self, order: ByteOrder) -> u32 {
        order.u32(self.entry)
    }

    #[must_use]
    pub const fn shoff(&self, order: ByteOrder) -> u32 {
        order.u32(self.shoff)
    }

    #[must_use]
    pub const fn shentsize(&self, order: ByteOrder) -> u16 {
        order.u16(self.shentsize)
    }

    #[must_use]
    pub const fn shnum(&self, order: ByteOrder) -> u16 {
        order.u16(self.shnum)
    }
}

/// ELF32 section header (`Elf32_Shdr`).
#[repr(C)]
#[derive(Debug, Clone, Pod)]
pub struct Elf32SectionHeader {
    /// Section name (string table index)
    pub name: u32,
    /// Section type
    pub ty: u32,
    /// Section flags
    pub flags: u32,
    /// Section virtual address at execution
    pub addr: u32,
    /// Section file offset
    pub offset: u32,
    /// Section size in bytes
    pub size: u32,
    /// Link to another section
    pub link: u32,
    /// Additional section information
    pub info: u32,
    /// Section alignment
    pub addralign: u32,
    /// Entry size if section holds table
    pub entsize: u32,
}
const _: () = const { assert!(size_of::<Elf32SectionHeader>() == 40) };

impl Elf32SectionHeader {
    /// Size of a section header entry in the file.
    pub const SIZE: usize = size_of::<Self>();

    #[must_use]
    pub fn section_type(&self, order: ByteOrder) -> SectionType {
        SectionType::from_raw(order.u32(self.ty))
    }

    #[must_use]
    pub const fn section_flags(&self, order: ByteOrder) -> SectionFlags {
        SectionFlags::from_bits_retain(order.u32(self.flags))
    }

    #[must_use]
    pub const fn offset(&self, order: ByteOrder) -> u32 {
        order.u32(self.offset)
    }

    #[must_use]
    pub const fn addr(&self, order: ByteOrder) -> u32 {
        order.u32(self.addr)
    }

    #[must_use]
    pub const fn size(&self, order: ByteOrder) -> u32 {
        order.u32(self.size)
    }
}
