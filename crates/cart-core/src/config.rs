//! Page-level settings. Every field has a default, so an absent or partial
//! config document is fine.

use crate::error::ConfigError;
use crate::price::DEFAULT_CURRENCY_SYMBOL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartConfig {
    /// Storage key of the live cart mirror.
    pub cart_key: String,
    /// Storage key of the checkout snapshot.
    pub checkout_key: String,
    pub checkout_page: String,
    pub product_page: String,
    pub currency_symbol: String,
    /// How long the "added to cart" toast stays up.
    pub toast_ms: u32,
    /// Scroll offset past which the back-to-top control shows.
    pub back_to_top_threshold: f64,
    /// `tracing` filter directive, e.g. `"info"` or `"cart_core=debug"`.
    pub log_filter: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            cart_key: "cartItems".to_owned(),
            checkout_key: "checkoutItems".to_owned(),
            checkout_page: "checkout.html".to_owned(),
            product_page: "product.html".to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            toast_ms: 1800,
            back_to_top_threshold: 240.0,
            log_filter: "info".to_owned(),
        }
    }
}

impl CartConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_key.trim().is_empty() || self.checkout_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty".into()));
        }
        if self.cart_key == self.checkout_key {
            return Err(ConfigError::Invalid(
                "cart and checkout storage keys must differ".into(),
            ));
        }
        if self.checkout_page.trim().is_empty() || self.product_page.trim().is_empty() {
            return Err(ConfigError::Invalid("page links must not be empty".into()));
        }
        if !self.back_to_top_threshold.is_finite() {
            return Err(ConfigError::Invalid(
                "backToTopThreshold must be a finite number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() -> anyhow::Result<()> {
        assert_eq!(CartConfig::from_json("{}")?, CartConfig::default());
        Ok(())
    }

    #[test]
    fn partial_document_overrides_fields() -> anyhow::Result<()> {
        let config = CartConfig::from_json(r#"{"currencySymbol":"$","toastMs":500}"#)?;
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.toast_ms, 500);
        assert_eq!(config.cart_key, "cartItems");
        Ok(())
    }

    #[test]
    fn rejects_clashing_keys() {
        let err = CartConfig::from_json(r#"{"checkoutKey":"cartItems"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            CartConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CartConfig::from_json(r#"{"toastMs":"slow"}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
