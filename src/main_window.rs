//! Creation and event wiring of the single application window.
//!
//! The Tauri window registry is the owning slot for the window handle:
//! `get_webview_window(MAIN_WINDOW_LABEL)` is `Some` exactly while the
//! window lives, and every creation path re-uses an existing window instead
//! of making a second one.

use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    append_desktop_log, user_agent, window_config, DESTROY_TRAY_EVENT, MAIN_WINDOW_ENTRY,
    MAIN_WINDOW_LABEL, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, PRODUCT_NAME,
    WEBVIEW_BASE_USER_AGENT,
};

pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    if let Some(existing) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        // At most one live window, ever.
        return Ok(existing);
    }

    let store = app_handle.state::<window_config::ConfigStore>();
    let window_state = window_config::load_window_state(&store);

    let user_agent = user_agent::compose_user_agent(
        &app_handle.package_info().version.to_string(),
        user_agent::detect_os_label(),
        WEBVIEW_BASE_USER_AGENT,
    );

    let navigation_app_handle = app_handle.clone();
    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(MAIN_WINDOW_ENTRY.into()),
    )
    .title(PRODUCT_NAME)
    .inner_size(f64::from(window_state.width), f64::from(window_state.height))
    .min_inner_size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    .visible(false)
    .user_agent(&user_agent)
    .on_navigation(move |url| {
        // The in-page tray is stale once the page navigates away.
        emit_destroy_tray(&navigation_app_handle, append_desktop_log);
        append_desktop_log(&format!("main window navigating to {url}"));
        true
    });

    if window_state.x.is_some() || window_state.y.is_some() {
        builder = builder.position(
            f64::from(window_state.x.unwrap_or(0)),
            f64::from(window_state.y.unwrap_or(0)),
        );
    }

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    if window_state.maximized {
        if let Err(error) = window.maximize() {
            append_desktop_log(&format!("failed to restore maximized state: {error}"));
        }
    }

    append_desktop_log(&format!(
        "main window created at {}x{}, user agent: {}",
        window_state.width, window_state.height, user_agent
    ));

    Ok(window)
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
}

/// Second-instance path: unminimize, show, focus. Failures degrade to the
/// window staying in its prior state, never to an error surface.
pub(crate) fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if window.is_minimized().unwrap_or(false) {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to unminimize main window: {error}"));
        }
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("reload_main_window skipped: main window not found");
        return;
    };
    if let Err(error) = window.reload() {
        log(&format!("failed to reload main window: {error}"));
    }
}

/// Emits an event to the main window. Returns false when no window exists;
/// emit failures are logged and count as delivered.
pub(crate) fn emit_to_main_window<F>(app_handle: &AppHandle, event: &str, log: F) -> bool
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        return false;
    };
    if let Err(error) = window.emit(event, ()) {
        log(&format!("failed to emit {event} to content layer: {error}"));
    }
    true
}

pub(crate) fn emit_destroy_tray<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if !emit_to_main_window(app_handle, DESTROY_TRAY_EVENT, &log) {
        log("destroytray skipped: main window not found");
    }
}
