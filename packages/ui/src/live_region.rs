//! Screen-reader status announcements.

use dioxus::prelude::*;

const VISUALLY_HIDDEN: &str =
    "position: absolute; left: -9999px; top: auto; width: 1px; height: 1px; overflow: hidden;";

/// A visually hidden `aria-live` region. Each new `message` replaces the last.
#[component]
pub fn LiveRegion(message: String) -> Element {
    rsx! {
        div {
            id: "live-region",
            "aria-live": "polite",
            style: VISUALLY_HIDDEN,
            "{message}"
        }
    }
}
