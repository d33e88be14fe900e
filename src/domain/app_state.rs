#![allow(dead_code)]

use super::{filters::FilterState, item::Item, station::Station};

/// Progress of the one-shot catalog load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Vec<Item>),
    Failed(String),
}

/// State owned by the root view and shared through context.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub filters: FilterState,
}

impl AppState {
    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn apply_catalog(&mut self, items: Vec<Item>) {
        self.catalog = CatalogState::Ready(items);
    }

    pub fn apply_catalog_error(&mut self, message: impl Into<String>) {
        self.catalog = CatalogState::Failed(message.into());
    }

    /// Updates one station and returns the filters to persist.
    pub fn set_filter(&mut self, station: Station, value: impl Into<String>) -> FilterState {
        self.filters.set(station, value);
        self.filters.clone()
    }

    pub fn items(&self) -> &[Item] {
        match &self.catalog {
            CatalogState::Ready(items) => items,
            _ => &[],
        }
    }
}
