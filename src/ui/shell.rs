use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "tiermaker-container",
            h1 { class: "title", "{APP_NAME}" }
            p { class: "version", "{version_label()}" }
            {children}
        }
    }
}
