use core::fmt;

/// Outcome of scanning a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing was found.
    ///
    /// This does not mean the file is a well-formed ELF file; parsing may
    /// have stopped early.
    Clean,
    /// A structural anomaly was found and reported as a detection.
    Suspicious { name: &'static str },
    /// A structural anomaly was found but not reported as a detection.
    FormatError,
    /// Memory for the section header table could not be allocated.
    ResourceError,
}

impl Verdict {
    #[must_use]
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }

    /// Returns the detection name if the file was reported as suspicious.
    #[must_use]
    pub fn detection(self) -> Option<&'static str> {
        match self {
            Self::Suspicious { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => f.write_str("CLEAN"),
            Self::Suspicious { name } => write!(f, "{name} FOUND"),
            Self::FormatError => f.write_str("FORMAT ERROR"),
            Self::ResourceError => f.write_str("OUT OF MEMORY"),
        }
    }
}
