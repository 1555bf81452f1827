#![no_std]

/// Maximum number of section headers a file may declare.
///
/// Files declaring more sections are treated as malformed.
pub const MAX_SECTIONS: usize = 256;

/// Conventional image base of little-endian 32-bit executables (i386).
pub const LITTLE_ENDIAN_IMAGE_BASE: u32 = 0x0804_8000;

/// Conventional image base of big-endian 32-bit executables.
pub const BIG_ENDIAN_IMAGE_BASE: u32 = 0x0001_0000;

/// Detection name reported for structurally broken executables.
pub const BROKEN_EXECUTABLE: &str = "Broken.Executable";
