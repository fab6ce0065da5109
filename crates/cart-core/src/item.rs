use serde::{Deserialize, Serialize};

/// One cart line. Two lines are the same product iff `name` and `price` match
/// exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "checked")]
    pub selected: bool,
}

impl LineItem {
    /// A fresh, selected line with quantity 1.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
            selected: true,
        }
    }

    pub fn matches(&self, name: &str, price: f64) -> bool {
        self.name == name && self.price == price
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
