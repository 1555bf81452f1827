use strum::{Display, EnumString};

/// Whether structurally broken executables are reported as detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DetectBroken {
    Enabled,
    #[default]
    Disabled,
}

impl DetectBroken {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl From<bool> for DetectBroken {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Options controlling how anomalies found while scanning are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub detect_broken: DetectBroken,
}

impl ScanOptions {
    #[must_use]
    pub fn with_detect_broken(mut self, detect_broken: impl Into<DetectBroken>) -> Self {
        self.detect_broken = detect_broken.into();
        self
    }
}
