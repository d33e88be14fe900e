use dioxus::{prelude::*, signals::Signal};
use tracing::{error, warn};

use crate::{
    domain::{AppState, FilterState, Item},
    infra::catalog::{load_catalog, CatalogError, CatalogSource},
    ui::{
        components::toast::{push_toast, Toast, ToastMessage},
        pages::TierListPage,
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_filters, save_filters},
    },
};

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::with_filters(load_filters()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let _catalog = use_resource(move || async move { fetch_catalog(state).await });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { TierListPage {} }
        Toast {}
    }
}

/// Writes the filter selection to disk. Failures leave the in-memory
/// selection in place and raise a warning toast.
pub fn persist_filters(filters: &FilterState, toasts: Signal<Vec<ToastMessage>>) {
    if let Err(err) = save_filters(filters) {
        warn!(%err, "failed to persist filter selection");
        push_toast(
            toasts,
            format!("Could not save filter selection: {err}"),
        );
    }
}

async fn fetch_catalog(mut state: Signal<AppState>) -> Option<usize> {
    match resolve_and_load().await {
        Ok(items) => {
            let count = items.len();
            state.with_mut(|st| st.apply_catalog(items));
            Some(count)
        }
        Err(err) => {
            error!(%err, "failed to load item catalog");
            state.with_mut(|st| st.apply_catalog_error(err.to_string()));
            None
        }
    }
}

async fn resolve_and_load() -> Result<Vec<Item>, CatalogError> {
    let source = CatalogSource::from_env()?;
    load_catalog(&source).await
}
