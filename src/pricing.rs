// Prices shown on the purchase buttons. Checkout itself is not wired up.

pub const CLIP_LIST_PRICE: f64 = 10.0;
pub const BUNDLE_DISCOUNT: f64 = 0.5;

/// Price of buying `clip_count` clips together (a full drive or a collection).
pub fn bundle_price(clip_count: usize) -> f64 {
    clip_count as f64 * CLIP_LIST_PRICE * BUNDLE_DISCOUNT
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "N/A".to_string(),
    }
}
