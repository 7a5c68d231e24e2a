use thiserror::Error;

/// Failures surfaced by storefront interactions. Pages render the `Display`
/// text inline next to the control that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("No part found with id `{0}`")]
    UnknownPart(String),

    #[error("No order found with number `{0}`")]
    UnknownOrder(String),

    #[error("Promo code `{0}` is not valid")]
    InvalidPromoCode(String),

    #[error("Promo code {0} is already applied")]
    PromoAlreadyApplied(String),

    #[error("Unknown sort option `{0}`")]
    UnknownSortOrder(String),

    #[error("Unknown deal type `{0}`")]
    UnknownDealType(String),

    #[error("Type a message or attach an image first")]
    EmptyMessage,

    #[error("You can attach at most {0} images")]
    TooManyAttachments(usize),

    #[error("Year must be between {min} and {max}")]
    InvalidYear { min: i32, max: i32 },

    #[error("A VIN has exactly 17 characters, got {0}")]
    InvalidVin(usize),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

pub type MarketResult<T> = Result<T, MarketError>;
