//! Class and style helpers shared by the tier view components.

use crate::domain::TierKind;

/// CSS class for a rarity label, e.g. `rarity-legendary`.
pub fn rarity_class(label: &str) -> String {
    let slug = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "rarity-unknown".to_string()
    } else {
        format!("rarity-{slug}")
    }
}

pub fn item_card_class(rarity: &str) -> String {
    format!("tier-item {}", rarity_class(rarity))
}

pub fn tier_label_style(kind: TierKind) -> String {
    kind.color()
        .map(|color| format!("background-color: {color};"))
        .unwrap_or_default()
}

/// Item value as shown on a card; whole numbers drop the fraction.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
