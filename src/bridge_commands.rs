//! Inbound IPC surface for the content layer.
//!
//! Tauri does not surface page-level failure details (load errors,
//! certificate validation results, title changes) to the shell by itself,
//! so the content layer reports them through these commands and the shell
//! reacts exactly as it would to the corresponding host events.

use tauri::{AppHandle, Manager};
use url::Url;

use crate::{
    append_desktop_log, badge, certificate_policy, connectivity, main_window, MAIN_WINDOW_LABEL,
};

/// Title change report. The window keeps its fixed title; the report only
/// feeds the badge translator.
#[tauri::command]
pub(crate) fn shell_report_title(app_handle: AppHandle, title: String) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("title report ignored: main window not found");
        return;
    };
    badge::update_badge(&window, &title, append_desktop_log);
}

/// Load-failure report. Async so the blocking recovery dialog runs off the
/// main thread.
#[tauri::command]
pub(crate) async fn shell_report_load_failure(app_handle: AppHandle, error_description: String) {
    connectivity::handle_load_failure(&app_handle, &error_description);
}

/// Certificate validation failure report; returns whether to proceed.
#[tauri::command]
pub(crate) fn shell_report_certificate_error(url: String, error: String) -> bool {
    let host = Url::parse(&url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| "<unparseable url>".to_string());

    match certificate_policy::decide_certificate_error(&url, &error) {
        certificate_policy::CertificateDecision::Accept => {
            append_desktop_log(&format!(
                "accepting certificate error for {host}: {error}"
            ));
            true
        }
    }
}

/// The content layer's "reload-main" request.
#[tauri::command]
pub(crate) fn shell_reload_main(app_handle: AppHandle) {
    append_desktop_log("content layer requested main window reload");
    main_window::reload_main_window(&app_handle, append_desktop_log);
}
