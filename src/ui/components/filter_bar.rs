use dioxus::prelude::*;

use crate::domain::{FilterState, Station};

/// One dropdown per station. Emits the station and the raw option value.
#[component]
pub fn FilterBar(filters: FilterState, on_change: EventHandler<(Station, String)>) -> Element {
    rsx! {
        div { class: "filters-container",
            for station in Station::ALL {
                FilterSelect {
                    key: "{station.filter_key()}",
                    station,
                    value: filters.raw(station).to_string(),
                    on_change,
                }
            }
        }
    }
}

#[component]
fn FilterSelect(
    station: Station,
    value: String,
    on_change: EventHandler<(Station, String)>,
) -> Element {
    let options = station
        .levels()
        .map(|level| level.to_string())
        .collect::<Vec<_>>();

    rsx! {
        div { class: "filter-group",
            label { "{station.label()}:" }
            select {
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call((station, evt.value())),
                for level in options {
                    option {
                        key: "{level}",
                        value: "{level}",
                        selected: level == value,
                        "Level {level}"
                    }
                }
            }
        }
    }
}
