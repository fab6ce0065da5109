//! Render projection of the cart.

use crate::item::LineItem;
use crate::price::format_price;
use html_escape::encode_quoted_attribute;

#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub index: usize,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<LineView>,
    /// Sum of `price × quantity` over selected lines only.
    pub subtotal: f64,
    pub subtotal_display: String,
    /// Badge count: quantity summed over every line, selected or not.
    pub total_quantity: u64,
    /// Checked iff the cart is non-empty and every line is selected.
    pub all_selected: bool,
}

impl CartView {
    pub fn project(items: &[LineItem], currency_symbol: &str) -> Self {
        let subtotal: f64 = items
            .iter()
            .filter(|item| item.selected)
            .map(LineItem::line_total)
            .sum();
        let total_quantity = items.iter().map(|item| u64::from(item.quantity)).sum();
        let all_selected = !items.is_empty() && items.iter().all(|item| item.selected);

        let lines = items
            .iter()
            .enumerate()
            .map(|(index, item)| LineView {
                index,
                name: item.name.clone(),
                unit_price: format_price(item.price, currency_symbol),
                quantity: item.quantity,
                selected: item.selected,
            })
            .collect();

        Self {
            lines,
            subtotal,
            subtotal_display: format_price(subtotal, currency_symbol),
            total_quantity,
            all_selected,
        }
    }

    pub fn to_html(&self) -> String {
        self.lines.iter().map(LineView::to_html).collect()
    }
}

impl LineView {
    /// Markup for one `.cart-item` row. Controls carry `data-idx` so the list
    /// can dispatch clicks by delegation.
    pub fn to_html(&self) -> String {
        let idx = self.index;
        let name = encode_quoted_attribute(&self.name);
        let price = encode_quoted_attribute(&self.unit_price);
        let checked = if self.selected { " checked" } else { "" };
        format!(
            concat!(
                r#"<div class="cart-item">"#,
                r#"<input type="checkbox" class="cart-checkbox" data-idx="{idx}"{checked} aria-label="Select {name}">"#,
                r#"<div class="cart-item-main">"#,
                r#"<div class="cart-item-title">{name}</div>"#,
                r#"<div class="cart-item-price">{price} each</div>"#,
                r#"</div>"#,
                r#"<div class="cart-item-actions">"#,
                r#"<div class="qty-control" data-idx="{idx}">"#,
                r#"<button class="qty-btn qty-minus" type="button">-</button>"#,
                r#"<span class="qty-value">{qty}</span>"#,
                r#"<button class="qty-btn qty-plus" type="button">+</button>"#,
                r#"</div>"#,
                r#"<button class="cart-item-remove" aria-label="Remove {name}" data-idx="{idx}">×</button>"#,
                r#"</div>"#,
                r#"</div>"#,
            ),
            idx = idx,
            checked = checked,
            name = name,
            price = price,
            qty = self.quantity,
        )
    }
}
