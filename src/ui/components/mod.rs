pub mod crafting_tooltip;
pub mod filter_bar;
pub mod item_card;
pub mod tier_row;
pub mod toast;
