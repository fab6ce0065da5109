use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode cart items: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a persisted cart document was discarded as a whole.
///
/// This is the explicit "start with an empty cart" branch of decoding, not a
/// failure the user ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFallback {
    #[error("nothing stored")]
    Missing,
    #[error("stored cart is not valid JSON: {0}")]
    Malformed(String),
    #[error("stored cart is not a JSON array")]
    NotAnArray,
}

/// Checkout failures. The `Display` text is the notice shown to the shopper.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Please select at least one item to checkout")]
    NothingSelected,
    #[error("Error saving cart data. Please try again.")]
    Storage(#[source] StorageError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cart config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid cart config: {0}")]
    Invalid(String),
}
