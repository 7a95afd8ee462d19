use derive_more::Display;

use crate::Error;

const PAYMENT_ENABLED: u8 = 0x80;
const PAYMENT_REQUESTED: u8 = 0x40;
const PASS_ENABLED: u8 = 0x08;
const PASS_REQUESTED: u8 = 0x04;

/// Transaction mode advertised by the wallet in the transaction detail bitmap (`C1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TransactionMode {
    #[display("Payment and Pass enabled and requested")]
    PaymentAndPassRequested,
    #[display("Payment enabled and requested, Pass enabled")]
    PaymentRequestedPassEnabled,
    #[display("Payment enabled and requested")]
    PaymentRequested,
    #[display("Payment enabled, Pass enabled and requested")]
    PaymentEnabledPassRequested,
    #[display("Payment enabled, Pass enabled")]
    PaymentAndPassEnabled,
    #[display("Payment enabled")]
    PaymentEnabled,
    #[display("Pass enabled and requested")]
    PassRequested,
    #[display("Pass enabled")]
    PassEnabled,
}

impl TransactionMode {
    /// Raw bitmap value
    pub const fn bits(self) -> u8 {
        match self {
            Self::PaymentAndPassRequested => 0xCC,
            Self::PaymentRequestedPassEnabled => 0xC8,
            Self::PaymentRequested => 0xC0,
            Self::PaymentEnabledPassRequested => 0x8C,
            Self::PaymentAndPassEnabled => 0x88,
            Self::PaymentEnabled => 0x80,
            Self::PassRequested => 0x0C,
            Self::PassEnabled => 0x08,
        }
    }

    pub const fn payment_enabled(self) -> bool {
        self.bits() & PAYMENT_ENABLED != 0
    }

    pub const fn payment_requested(self) -> bool {
        self.bits() & PAYMENT_REQUESTED != 0
    }

    pub const fn pass_enabled(self) -> bool {
        self.bits() & PASS_ENABLED != 0
    }

    pub const fn pass_requested(self) -> bool {
        self.bits() & PASS_REQUESTED != 0
    }
}

impl TryFrom<u8> for TransactionMode {
    type Error = Error;

    fn try_from(bitmap: u8) -> Result<Self, Self::Error> {
        match bitmap {
            0xCC => Ok(Self::PaymentAndPassRequested),
            0xC8 => Ok(Self::PaymentRequestedPassEnabled),
            0xC0 => Ok(Self::PaymentRequested),
            0x8C => Ok(Self::PaymentEnabledPassRequested),
            0x88 => Ok(Self::PaymentAndPassEnabled),
            0x80 => Ok(Self::PaymentEnabled),
            0x0C => Ok(Self::PassRequested),
            0x08 => Ok(Self::PassEnabled),
            other => Err(Error::InvalidTransactionMode(other)),
        }
    }
}

impl From<TransactionMode> for u8 {
    fn from(mode: TransactionMode) -> Self {
        mode.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes() {
        assert_eq!(
            TransactionMode::try_from(0x80).unwrap().to_string(),
            "Payment enabled"
        );
        assert_eq!(
            TransactionMode::try_from(0x0C).unwrap().to_string(),
            "Pass enabled and requested"
        );
        assert_eq!(
            TransactionMode::try_from(0xCC).unwrap().to_string(),
            "Payment and Pass enabled and requested"
        );
    }

    #[test]
    fn test_every_valid_bitmap_round_trips() {
        let valid: Vec<u8> = (0..=u8::MAX)
            .filter(|b| TransactionMode::try_from(*b).is_ok())
            .collect();
        assert_eq!(valid, vec![0x08, 0x0C, 0x80, 0x88, 0x8C, 0xC0, 0xC8, 0xCC]);

        for bitmap in valid {
            assert_eq!(u8::from(TransactionMode::try_from(bitmap).unwrap()), bitmap);
        }
    }

    #[test]
    fn test_invalid_mode() {
        assert!(matches!(
            TransactionMode::try_from(0x05),
            Err(Error::InvalidTransactionMode(0x05))
        ));
        assert!(matches!(
            TransactionMode::try_from(0x00),
            Err(Error::InvalidTransactionMode(0x00))
        ));
    }

    #[test]
    fn test_flags() {
        let mode = TransactionMode::PaymentRequestedPassEnabled;
        assert!(mode.payment_enabled());
        assert!(mode.payment_requested());
        assert!(mode.pass_enabled());
        assert!(!mode.pass_requested());

        let mode = TransactionMode::PassRequested;
        assert!(!mode.payment_enabled());
        assert!(mode.pass_requested());
    }
}
