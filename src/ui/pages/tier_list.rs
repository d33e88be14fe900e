use dioxus::prelude::*;

use crate::{
    app::persist_filters,
    domain::{classify, AppState, CatalogState, Station, TierKind},
    ui::components::{
        crafting_tooltip::{CraftingTooltip, HoverState},
        filter_bar::FilterBar,
        tier_row::{PlacedItem, SellSection, TierRow},
        toast::ToastMessage,
    },
};

#[component]
pub fn TierListPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut hovered = use_signal(|| None::<HoverState>);

    let (catalog, filters) = state.with(|st| (st.catalog.clone(), st.filters.clone()));

    let items = match catalog {
        CatalogState::Loading => {
            return rsx! { h2 { "Loading..." } };
        }
        CatalogState::Failed(message) => {
            return rsx! { h2 { "Error: {message}" } };
        }
        CatalogState::Ready(items) => items,
    };

    let classification = classify(&items, &filters);
    let rows = TierKind::RANKED
        .into_iter()
        .map(|kind| (kind, PlacedItem::from_tier(classification.tier(kind))))
        .collect::<Vec<_>>();
    let sell_items = PlacedItem::from_tier(&classification.sell);

    let on_filter_change = move |(station, value): (Station, String)| {
        hovered.set(None);
        let snapshot = state.with_mut(|st| st.set_filter(station, value));
        persist_filters(&snapshot, toasts);
    };
    let on_hover = move |hover: Option<HoverState>| hovered.set(hover);

    rsx! {
        FilterBar { filters, on_change: on_filter_change }
        div { class: "tiers",
            for (kind, tier_items) in rows {
                TierRow { key: "{kind.id()}", kind, items: tier_items, on_hover }
            }
        }
        SellSection { items: sell_items, on_hover }
        if let Some(hover) = hovered() {
            CraftingTooltip { hover }
        }
    }
}

