use dioxus::prelude::*;

use store::LoginConfig;
use ui::{AuthProvider, SignInView};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGIN_TOML: &str = include_str!("../login.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(LOGIN_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config,
            SignInView {}
        }
    }
}

/// Parse the embedded config, falling back to defaults on error.
fn load_config(text: &str) -> LoginConfig {
    LoginConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", LoginConfig::filename(), e);
        LoginConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(load_config(LOGIN_TOML), LoginConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(load_config("[submit"), LoginConfig::default());
    }
}
