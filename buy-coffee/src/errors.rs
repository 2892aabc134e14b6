use multiversx_sc::api::{ErrorApi, ErrorApiImpl};

pub static EMPTY_NAME_ERR_MSG: &[u8] = b"Name cannot be empty";
pub static NAME_TOO_LONG_ERR_MSG: &[u8] = b"Name too long (max 100 chars)";
pub static MESSAGE_TOO_LONG_ERR_MSG: &[u8] = b"Message too long (max 500 chars)";
pub static ZERO_IDR_AMOUNT_ERR_MSG: &[u8] = b"IDR amount must be greater than zero";
pub static INSUFFICIENT_PAYMENT_ERR_MSG: &[u8] = b"Insufficient EGLD sent";
pub static NO_FUNDS_ERR_MSG: &[u8] = b"No funds to withdraw";
pub static NOT_OWNER_ERR_MSG: &[u8] = b"Only owner can call this function";
pub static RATE_OUT_OF_BOUNDS_ERR_MSG: &[u8] = b"Rate must be between 1000 and 100000";
pub static INVALID_PRICE_FEED_ADDRESS_ERR_MSG: &[u8] = b"Invalid price feed address";
pub static PRICE_FEED_NOT_INITIALIZED_ERR_MSG: &[u8] = b"Price feed not initialized";
pub static INVALID_PRICE_ERR_MSG: &[u8] = b"Invalid price from oracle";
pub static INVALID_PRICE_DECIMALS_ERR_MSG: &[u8] = b"Invalid price feed decimals";

/// Internal grouping of failures. Only the message reaches the caller on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputValidation,
    Payment,
    AccessControl,
    Config,
    Oracle,
}

/// Every way a call into the contract can be rejected.
/// Raised at the endpoint boundary, which aborts and rolls back the whole transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoffeeError {
    EmptyName,
    NameTooLong,
    MessageTooLong,
    ZeroIdrAmount,
    InsufficientPayment,
    NoFundsToWithdraw,
    NotOwner,
    RateOutOfBounds,
    InvalidPriceFeedAddress,
    PriceFeedNotInitialized,
    InvalidPrice,
    InvalidPriceDecimals,
}

impl CoffeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoffeeError::EmptyName
            | CoffeeError::NameTooLong
            | CoffeeError::MessageTooLong
            | CoffeeError::ZeroIdrAmount => ErrorKind::InputValidation,
            CoffeeError::InsufficientPayment | CoffeeError::NoFundsToWithdraw => {
                ErrorKind::Payment
            }
            CoffeeError::NotOwner => ErrorKind::AccessControl,
            CoffeeError::RateOutOfBounds | CoffeeError::InvalidPriceFeedAddress => {
                ErrorKind::Config
            }
            CoffeeError::PriceFeedNotInitialized
            | CoffeeError::InvalidPrice
            | CoffeeError::InvalidPriceDecimals => ErrorKind::Oracle,
        }
    }

    pub fn message(&self) -> &'static [u8] {
        match self {
            CoffeeError::EmptyName => EMPTY_NAME_ERR_MSG,
            CoffeeError::NameTooLong => NAME_TOO_LONG_ERR_MSG,
            CoffeeError::MessageTooLong => MESSAGE_TOO_LONG_ERR_MSG,
            CoffeeError::ZeroIdrAmount => ZERO_IDR_AMOUNT_ERR_MSG,
            CoffeeError::InsufficientPayment => INSUFFICIENT_PAYMENT_ERR_MSG,
            CoffeeError::NoFundsToWithdraw => NO_FUNDS_ERR_MSG,
            CoffeeError::NotOwner => NOT_OWNER_ERR_MSG,
            CoffeeError::RateOutOfBounds => RATE_OUT_OF_BOUNDS_ERR_MSG,
            CoffeeError::InvalidPriceFeedAddress => INVALID_PRICE_FEED_ADDRESS_ERR_MSG,
            CoffeeError::PriceFeedNotInitialized => PRICE_FEED_NOT_INITIALIZED_ERR_MSG,
            CoffeeError::InvalidPrice => INVALID_PRICE_ERR_MSG,
            CoffeeError::InvalidPriceDecimals => INVALID_PRICE_DECIMALS_ERR_MSG,
        }
    }

    pub fn signal<M: ErrorApi>(self) -> ! {
        M::error_api_impl().signal_error(self.message())
    }
}

pub trait OrSignal<T> {
    /// Unwraps the value or fails the current transaction with the error's message.
    fn or_signal<M: ErrorApi>(self) -> T;
}

impl<T> OrSignal<T> for Result<T, CoffeeError> {
    fn or_signal<M: ErrorApi>(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => err.signal::<M>(),
        }
    }
}
