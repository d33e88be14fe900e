//! Item catalog model and tier classification live here.

pub mod app_state;
pub mod filters;
pub mod item;
pub mod station;
pub mod tiers;

pub use app_state::{AppState, CatalogState};
pub use filters::FilterState;
pub use item::Item;
pub use station::Station;
pub use tiers::{classify, crafting_outputs, Tier, TierKind};
