use dioxus::prelude::*;

use crate::{
    domain::{Item, Tier, TierKind},
    ui::{
        components::{crafting_tooltip::HoverState, item_card::ItemCard},
        theme,
    },
};

/// An item together with its catalog position. The position keys the card,
/// since ids may repeat or be missing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub position: usize,
    pub item: Item,
}

impl PlacedItem {
    pub fn from_tier(tier: &Tier<'_>) -> Vec<Self> {
        tier.entries()
            .map(|(position, item)| PlacedItem {
                position,
                item: item.clone(),
            })
            .collect()
    }
}

#[component]
pub fn TierRow(
    kind: TierKind,
    items: Vec<PlacedItem>,
    on_hover: EventHandler<Option<HoverState>>,
) -> Element {
    let count = items.len();
    let label_style = theme::tier_label_style(kind);

    rsx! {
        div { class: "tier-row",
            div { class: "tier-label", style: "{label_style}",
                span { class: "tier-name",
                    "{kind.name()}"
                    span { class: "tier-count", "{count} items" }
                }
            }
            div { class: "tier-items",
                for placed in items {
                    ItemCard { key: "{placed.position}", item: placed.item.clone(), tier: kind, on_hover }
                }
            }
        }
    }
}

/// Everything no tier claimed.
#[component]
pub fn SellSection(items: Vec<PlacedItem>, on_hover: EventHandler<Option<HoverState>>) -> Element {
    rsx! {
        div { class: "unassigned-section",
            h2 { class: "unassigned-title", "{TierKind::Sell.name()}" }
            div { class: "unassigned-items",
                for placed in items {
                    ItemCard { key: "{placed.position}", item: placed.item.clone(), tier: TierKind::Sell, on_hover }
                }
            }
        }
    }
}
