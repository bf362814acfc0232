use std::sync::OnceLock;

use dioxus::prelude::*;
use shared_types::{AppConfig, AppError, PortalSettings};

mod logging;
mod routes;
mod session;
mod storage;

use routes::Route;
use session::SessionContext;
use storage::BrowserStorage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

static CONFIG: OnceLock<(AppConfig, Option<AppError>)> = OnceLock::new();

/// Portal configuration embedded from the workspace `config.toml`.
fn portal_config() -> &'static AppConfig {
    &CONFIG
        .get_or_init(|| AppConfig::from_toml_or_default(include_str!("../../../config.toml")))
        .0
}

fn main() {
    let config = portal_config();
    logging::init(config.portal.log_level);

    if let Some((_, Some(e))) = CONFIG.get() {
        tracing::warn!(error = %e, "config.toml rejected, falling back to defaults");
    }

    tracing::info!(
        title = %config.portal.title,
        storage = ?config.portal.storage,
        log_level = config.portal.log_level.as_str(),
        "starting portal"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = portal_config().portal.clone();

    // Restoring reads storage synchronously, so the router below never sees
    // an unrestored session.
    use_context_provider(|| SessionContext::restore(BrowserStorage::new(settings.storage)));
    let settings: PortalSettings = use_context_provider(|| settings);

    rsx! {
        document::Title { "{settings.title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
