use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    domain::{Item, TierKind},
    ui::{
        components::crafting_tooltip::{CardBounds, HoverState},
        theme,
    },
};

#[component]
pub fn ItemCard(item: Item, tier: TierKind, on_hover: EventHandler<Option<HoverState>>) -> Element {
    let mut image_failed = use_signal(|| false);
    let mut card = use_signal(|| None::<Rc<MountedData>>);
    let mut pointer_inside = use_signal(|| false);
    let class = theme::item_card_class(&item.rarity);
    let value = theme::format_value(item.value);
    let hover_item = (tier == TierKind::Crafting && item.is_craftable()).then(|| item.clone());

    rsx! {
        div {
            class: "{class}",
            onmounted: move |evt: MountedEvent| card.set(Some(evt.data())),
            onmouseenter: move |evt: MouseEvent| {
                pointer_inside.set(true);
                let Some(source) = hover_item.clone() else {
                    return;
                };
                let point = evt.client_coordinates();
                let mounted = card();
                spawn(async move {
                    let rect = match mounted {
                        Some(mounted) => mounted.get_client_rect().await.ok(),
                        None => None,
                    };
                    // The pointer may have left while the rect was measured.
                    if !pointer_inside() {
                        return;
                    }
                    let hover = match rect {
                        Some(rect) => HoverState::above_card(
                            &source,
                            CardBounds {
                                left: rect.origin.x,
                                top: rect.origin.y,
                                width: rect.size.width,
                            },
                        ),
                        None => HoverState::for_item(&source, point.x, point.y),
                    };
                    on_hover.call(hover);
                });
            },
            onmouseleave: move |_| {
                pointer_inside.set(false);
                on_hover.call(None);
            },
            if !image_failed() {
                img {
                    class: "tier-item-image",
                    src: "{item.image}",
                    alt: "{item.name}",
                    onerror: move |_| image_failed.set(true),
                }
            }
            span { class: "tier-item-name", "{item.name}" }
            span { class: "tier-item-value", "{value}" }
        }
    }
}
