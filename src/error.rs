use crate::domain::denomination::Denomination;
use crate::domain::money::Money;
use crate::domain::product::ProductCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("We do not accept that coin: {denomination}")]
    ChangeRejected { denomination: Denomination },
    #[error("{message} (code {code})")]
    OutOfStock { code: u16, message: String },
    #[error("Insufficient change: {shortfall} more required (code {code})")]
    InsufficientChange { code: u16, shortfall: Money },
    #[error("Unable to return exact change of {owed} (code {code})")]
    ChangeUnavailable { code: u16, owed: Money },
    #[error("Machine is powered off")]
    PoweredOff,
    #[error("Denomination listed more than once: {0}")]
    DuplicateDenomination(Denomination),
    #[error("Accepted denominations must not be empty")]
    EmptyAcceptedSet,
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductCode),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl VendingError {
    pub const OUT_OF_STOCK: u16 = 100;
    pub const INSUFFICIENT_CHANGE: u16 = 101;
    pub const CHANGE_UNAVAILABLE: u16 = 102;
    pub const CHANGE_REJECTED: u16 = 103;
    pub const POWERED_OFF: u16 = 104;

    pub fn out_of_stock() -> Self {
        Self::OutOfStock {
            code: Self::OUT_OF_STOCK,
            message: "Sorry this product is out of stock".to_string(),
        }
    }

    pub fn insufficient_change(shortfall: Money) -> Self {
        Self::InsufficientChange {
            code: Self::INSUFFICIENT_CHANGE,
            shortfall,
        }
    }

    pub fn change_unavailable(owed: Money) -> Self {
        Self::ChangeUnavailable {
            code: Self::CHANGE_UNAVAILABLE,
            owed,
        }
    }

    /// Machine-defined code for customer-facing failures.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::OutOfStock { code, .. }
            | Self::InsufficientChange { code, .. }
            | Self::ChangeUnavailable { code, .. } => Some(*code),
            Self::ChangeRejected { .. } => Some(Self::CHANGE_REJECTED),
            Self::PoweredOff => Some(Self::POWERED_OFF),
            _ => None,
        }
    }

    /// True when the customer can carry on with the machine after this error.
    pub fn is_recoverable(&self) -> bool {
        self.code().is_some()
    }
}

pub type Result<T> = std::result::Result<T, VendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_carry_codes() {
        assert_eq!(VendingError::out_of_stock().code(), Some(100));
        assert_eq!(
            VendingError::insufficient_change(Money::new(20)).code(),
            Some(101)
        );
        assert_eq!(VendingError::change_unavailable(Money::new(5)).code(), Some(102));
        assert_eq!(VendingError::PoweredOff.code(), Some(104));
        assert!(VendingError::PoweredOff.is_recoverable());
    }

    #[test]
    fn test_ambient_errors_are_not_recoverable() {
        let err = VendingError::from(std::io::Error::other("disk"));
        assert_eq!(err.code(), None);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_out_of_stock_message() {
        let err = VendingError::out_of_stock();
        assert_eq!(err.to_string(), "Sorry this product is out of stock (code 100)");
    }
}
