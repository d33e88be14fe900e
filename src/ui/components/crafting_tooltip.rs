use dioxus::prelude::*;

use crate::domain::{crafting_outputs, Item};

/// Vertical gap between the card's top edge and the tooltip's bottom edge.
const TOOLTIP_OFFSET: f64 = 10.0;

/// Viewport rectangle of a hovered card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl CardBounds {
    /// Horizontal centre of the card's top edge.
    pub fn anchor(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top)
    }
}

/// What the tooltip shows and where.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverState {
    pub outputs: Vec<String>,
    pub x: f64,
    pub y: f64,
}

impl HoverState {
    /// Tooltip centred above the hovered card.
    pub fn above_card(item: &Item, bounds: CardBounds) -> Option<Self> {
        let (x, y) = bounds.anchor();
        Self::for_item(item, x, y)
    }

    /// Tooltip anchored at `(x, y)`. `None` when the item crafts into nothing.
    pub fn for_item(item: &Item, x: f64, y: f64) -> Option<Self> {
        let outputs = crafting_outputs(item)
            .into_iter()
            .map(|output| output.name.clone())
            .collect::<Vec<_>>();
        if outputs.is_empty() {
            return None;
        }
        Some(Self {
            outputs,
            x,
            y: y - TOOLTIP_OFFSET,
        })
    }
}

#[component]
pub fn CraftingTooltip(hover: HoverState) -> Element {
    rsx! {
        div {
            class: "tooltip",
            style: "left: {hover.x}px; top: {hover.y}px;",
            div { class: "tooltip-header", "Crafts Into:" }
            div { class: "tooltip-content",
                for (index, name) in hover.outputs.iter().enumerate() {
                    div { key: "{index}", class: "tooltip-item", "{name}" }
                }
            }
        }
    }
}
