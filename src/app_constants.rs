//! Shared constants of the desktop shell.
//!
//! Everything with a cross-module contract lives here: window identity,
//! default geometry, the content-layer event vocabulary and the state-file
//! locations.

pub(crate) const PRODUCT_NAME: &str = "Zulip";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_ENTRY: &str = "main.html";

pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub(crate) const MIN_WINDOW_WIDTH: f64 = 600.0;
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 400.0;

// Events the content layer listens for. These names are part of the bridge
// contract with `renderer/main.js` and must stay byte-stable.
pub(crate) const TRAY_EVENT: &str = "tray";
pub(crate) const DESTROY_TRAY_EVENT: &str = "destroytray";
pub(crate) const RELOAD_EVENT: &str = "reload";
pub(crate) const BACK_EVENT: &str = "back";
pub(crate) const FORWARD_EVENT: &str = "forward";

/// Engine portion of the webview user agent; the identifying prefix is
/// composed in front of it at window creation.
pub(crate) const WEBVIEW_BASE_USER_AGENT: &str =
    "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko)";

pub(crate) const CONFIG_FILE_NAME: &str = "window-state.json";
/// Overrides the config file path wholesale, for tests and portable setups.
pub(crate) const CONFIG_FILE_ENV: &str = "ZULIP_DESKTOP_CONFIG";

pub(crate) const DESKTOP_LOG_FILE: &str = "zulip-desktop.log";
pub(crate) const DESKTOP_LOG_DIR_ENV: &str = "ZULIP_DESKTOP_LOG_DIR";
