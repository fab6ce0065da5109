//! Links from a product card to the product detail page.

use crate::price::parse_price;
use url::Url;

pub const IMAGE_PARAM: &str = "img";
pub const PRICE_PARAM: &str = "price";

/// Where a store card should lead.
#[derive(Debug, Clone, Default)]
pub struct CardLink<'a> {
    /// The card's own link (`data-link`), relative to the current page.
    pub link: Option<&'a str>,
    /// Image reference (`data-image`).
    pub image: Option<&'a str>,
    /// Price text from `data-price` or the visible price.
    pub price_text: &'a str,
}

/// Resolve a card's detail-page URL against `page_href`.
///
/// A blank link falls back to `default_page`. The image is carried when
/// present and the price only when it reads as a positive amount.
pub fn product_detail_url(
    page_href: &str,
    card: &CardLink<'_>,
    default_page: &str,
) -> Result<String, url::ParseError> {
    let base = Url::parse(page_href)?;
    let link = card
        .link
        .filter(|link| !link.trim().is_empty())
        .unwrap_or(default_page);
    let mut target = base.join(link)?;

    if let Some(image) = card.image.filter(|image| !image.is_empty()) {
        set_param(&mut target, IMAGE_PARAM, image);
    }
    let price = parse_price(card.price_text);
    if price > 0.0 {
        set_param(&mut target, PRICE_PARAM, &price.to_string());
    }
    Ok(target.into())
}

fn set_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
}
