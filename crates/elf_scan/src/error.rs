use std::{collections::TryReserveError, io};

use elf32_types::Elf32SectionHeader;
use elfscan_params::{BROKEN_EXECUTABLE, MAX_SECTIONS};

use crate::{ScanOptions, Verdict};

/// Reason why a file is not handled by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotElfReason {
    #[error("can't read file header: {0}")]
    ShortHeader(io::ErrorKind),
    #[error("not an ELF file")]
    BadMagic,
    #[error("unsupported file class {0}")]
    UnsupportedClass(u8),
}

/// Structural anomaly of a 32-bit ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Anomaly {
    #[error("suspicious number of sections: {count} (maximum {})", MAX_SECTIONS)]
    ExcessiveSectionCount { count: u16 },
    #[error(
        "section header entry size {size} does not match {}",
        Elf32SectionHeader::SIZE
    )]
    MalformedSectionHeaderSize { size: u16 },
    #[error("can't seek to section header table at offset {offset}")]
    TruncatedSectionTable { offset: u32 },
    #[error("can't read section header {index}: {kind}")]
    TruncatedSectionHeader { index: usize, kind: io::ErrorKind },
}

impl Anomaly {
    /// Returns `true` if the anomaly is a malformed header field.
    ///
    /// Truncation anomalies are not format errors; unless broken executables
    /// are detected, they are treated as clean.
    #[must_use]
    pub fn is_format_error(self) -> bool {
        match self {
            Self::ExcessiveSectionCount { .. } | Self::MalformedSectionHeaderSize { .. } => true,
            Self::TruncatedSectionTable { .. } | Self::TruncatedSectionHeader { .. } => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    NotElf(#[from] NotElfReason),
    #[error(transparent)]
    Anomaly(#[from] Anomaly),
    #[error("can't allocate memory for section headers")]
    OutOfMemory(#[from] TryReserveError),
}

impl ScanError {
    /// Converts the error into the verdict reported to the caller.
    #[must_use]
    pub fn verdict(&self, options: ScanOptions) -> Verdict {
        match self {
            Self::NotElf(_) => Verdict::Clean,
            Self::OutOfMemory(_) => Verdict::ResourceError,
            Self::Anomaly(_) if options.detect_broken.is_enabled() => Verdict::Suspicious {
                name: BROKEN_EXECUTABLE,
            },
            Self::Anomaly(anomaly) if anomaly.is_format_error() => Verdict::FormatError,
            Self::Anomaly(_) => Verdict::Clean,
        }
    }
}
