use derive_more::Display;

const SKIP_SECOND_SELECT: u8 = 0x01;
const VAS_SUPPORT: u8 = 0x02;

/// Smart Tap capabilities bitmap (`DF62`) of the `OSE.VAS.01` directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SmartTapCapabilities {
    #[display("No extra capabilities from bitmap")]
    NoExtra,
    #[display("Allow skipping second select")]
    SkipSecondSelect,
    #[display("VAS support")]
    VasSupport,
    #[display("VAS support and allow skipping second select")]
    VasSupportAndSkipSecondSelect,
}

impl SmartTapCapabilities {
    /// Decode the bitmap. Values with bits beyond the two known ones are not
    /// recognised and yield `None`.
    pub const fn from_bitmap(bitmap: u8) -> Option<Self> {
        match bitmap {
            0 => Some(Self::NoExtra),
            SKIP_SECOND_SELECT => Some(Self::SkipSecondSelect),
            VAS_SUPPORT => Some(Self::VasSupport),
            0x03 => Some(Self::VasSupportAndSkipSecondSelect),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::NoExtra => 0,
            Self::SkipSecondSelect => SKIP_SECOND_SELECT,
            Self::VasSupport => VAS_SUPPORT,
            Self::VasSupportAndSkipSecondSelect => SKIP_SECOND_SELECT | VAS_SUPPORT,
        }
    }

    pub const fn allows_skipping_second_select(self) -> bool {
        self.bits() & SKIP_SECOND_SELECT != 0
    }

    pub const fn supports_vas(self) -> bool {
        self.bits() & VAS_SUPPORT != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bitmap() {
        assert_eq!(
            SmartTapCapabilities::from_bitmap(0),
            Some(SmartTapCapabilities::NoExtra)
        );
        assert_eq!(
            SmartTapCapabilities::from_bitmap(3),
            Some(SmartTapCapabilities::VasSupportAndSkipSecondSelect)
        );
        assert_eq!(SmartTapCapabilities::from_bitmap(4), None);
        assert_eq!(SmartTapCapabilities::from_bitmap(0xFF), None);
    }

    #[test]
    fn test_flags() {
        let both = SmartTapCapabilities::VasSupportAndSkipSecondSelect;
        assert!(both.supports_vas());
        assert!(both.allows_skipping_second_select());

        assert!(SmartTapCapabilities::VasSupport.supports_vas());
        assert!(!SmartTapCapabilities::VasSupport.allows_skipping_second_select());
        assert!(!SmartTapCapabilities::NoExtra.supports_vas());
    }

    #[test]
    fn test_display() {
        assert_eq!(SmartTapCapabilities::VasSupport.to_string(), "VAS support");
        assert_eq!(
            SmartTapCapabilities::SkipSecondSelect.to_string(),
            "Allow skipping second select"
        );
    }
}
