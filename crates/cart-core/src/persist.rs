//! Strict decoding of the persisted cart document.
//!
//! The document as a whole either decodes to a list or falls back to an empty
//! cart with a stated reason. Within a valid list, entries without a string
//! `name` and a non-negative numeric `price` are dropped and counted.

use crate::error::DecodeFallback;
use crate::item::LineItem;
use serde_json::Value;
use serde_json::value::RawValue;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCart {
    pub items: Vec<LineItem>,
    pub dropped: usize,
}

pub fn decode_items(raw: Option<&str>) -> Result<DecodedCart, DecodeFallback> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(DecodeFallback::Missing),
    };
    let document: &RawValue =
        serde_json::from_str(raw).map_err(|err| DecodeFallback::Malformed(err.to_string()))?;
    // Entries stay raw until decoded one by one, so a number outside f64 range
    // only costs its own entry.
    let entries: Vec<&RawValue> =
        serde_json::from_str(document.get()).map_err(|_| DecodeFallback::NotAnArray)?;

    let total = entries.len();
    let items: Vec<LineItem> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_str::<Value>(entry.get()).ok())
        .filter_map(|entry| decode_entry(&entry))
        .collect();
    Ok(DecodedCart {
        dropped: total - items.len(),
        items,
    })
}

pub fn encode_items(items: &[LineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

fn decode_entry(value: &Value) -> Option<LineItem> {
    let entry = value.as_object()?;
    let name = entry.get("name")?.as_str()?;
    let price = entry.get("price")?.as_f64()?;
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    let quantity = entry.get("qty").map_or(1, normalize_quantity);
    let selected = !matches!(entry.get("checked"), Some(Value::Bool(false)));

    Some(LineItem {
        name: name.to_owned(),
        price,
        quantity,
        selected,
    })
}

/// Whole quantities of at least 1; anything else reads as 1.
fn normalize_quantity(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(q) if q.is_finite() && q >= 1.0 => q.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_is_fallback() {
        assert_eq!(decode_items(None), Err(DecodeFallback::Missing));
        assert_eq!(decode_items(Some("")), Err(DecodeFallback::Missing));
    }

    #[test]
    fn malformed_json_is_fallback() {
        assert!(matches!(
            decode_items(Some("[{\"name\":")),
            Err(DecodeFallback::Malformed(_))
        ));
    }

    #[test]
    fn non_array_document_is_fallback() {
        assert_eq!(
            decode_items(Some(r#"{"name":"Burger","price":120}"#)),
            Err(DecodeFallback::NotAnArray)
        );
        assert_eq!(decode_items(Some("null")), Err(DecodeFallback::NotAnArray));
    }

    #[test]
    fn entries_without_name_or_price_are_dropped() -> anyhow::Result<()> {
        let raw = r#"[
            {"name":"Burger","price":120,"qty":2,"checked":true},
            {"name":"Fries"},
            {"price":50},
            {"name":42,"price":50},
            {"name":"Cola","price":"35"},
            {"name":"Refund","price":-10},
            null,
            "Burger"
        ]"#;
        let decoded = decode_items(Some(raw))?;
        assert_eq!(decoded.items, vec![LineItem {
            name: "Burger".into(),
            price: 120.0,
            quantity: 2,
            selected: true,
        }]);
        assert_eq!(decoded.dropped, 7);
        Ok(())
    }

    #[test]
    fn out_of_range_number_drops_only_its_entry() -> anyhow::Result<()> {
        let raw = r#"[
            {"name":"Burger","price":120,"qty":2},
            {"name":"Tea","price":50,"qty":1e400},
            {"name":"Cake","price":1e400}
        ]"#;
        let decoded = decode_items(Some(raw))?;
        assert_eq!(decoded.items, vec![LineItem {
            name: "Burger".into(),
            price: 120.0,
            quantity: 2,
            selected: true,
        }]);
        assert_eq!(decoded.dropped, 2);
        Ok(())
    }

    #[test]
    fn quantity_and_selection_are_normalized() -> anyhow::Result<()> {
        let raw = r#"[
            {"name":"A","price":1},
            {"name":"B","price":1,"qty":0},
            {"name":"C","price":1,"qty":-4},
            {"name":"D","price":1,"qty":"3"},
            {"name":"E","price":1,"qty":2.7},
            {"name":"F","price":1,"qty":"lots"},
            {"name":"G","price":1,"checked":false},
            {"name":"H","price":1,"checked":"false"},
            {"name":"I","price":1,"checked":null}
        ]"#;
        let decoded = decode_items(Some(raw))?;
        let quantities: Vec<u32> = decoded.items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 1, 1, 3, 2, 1, 1, 1, 1]);
        let selected: Vec<bool> = decoded.items.iter().map(|i| i.selected).collect();
        assert_eq!(
            selected,
            vec![true, true, true, true, true, true, false, true, true]
        );
        assert_eq!(decoded.dropped, 0);
        Ok(())
    }

    #[test]
    fn encode_then_decode_is_stable() -> anyhow::Result<()> {
        let items = vec![
            LineItem::new("Burger", 120.0),
            LineItem {
                name: "Iced \"Tea\"".into(),
                price: 75.5,
                quantity: 3,
                selected: false,
            },
        ];
        let encoded = encode_items(&items)?;
        let decoded = decode_items(Some(&encoded))?;
        assert_eq!(decoded.items, items);
        assert_eq!(encode_items(&decoded.items)?, encoded);
        Ok(())
    }
}
