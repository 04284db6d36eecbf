//! Classification of content-load failures and the interactive recovery
//! flow for the connectivity-related ones.
//!
//! Only network-absence classes get recovery UI. Everything else is logged
//! and dropped; the content layer is expected to render its own error state
//! for server-side failures.

use std::sync::atomic::Ordering;

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{append_desktop_log, main_window, FlagGuard, ShellState};

/// Load-failure descriptions treated as "no network". The vocabulary comes
/// from the Chromium error namespace the content layer reports.
pub(crate) const CONNECTIVITY_ERRORS: [&str; 5] = [
    "ERR_INTERNET_DISCONNECTED",
    "ERR_PROXY_CONNECTION_FAILED",
    "ERR_CONNECTION_RESET",
    "ERR_NOT_CONNECTED",
    "ERR_NAME_NOT_RESOLVED",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadFailureKind {
    Connectivity,
    Other,
}

pub(crate) fn classify_load_failure(description: &str) -> LoadFailureKind {
    if CONNECTIVITY_ERRORS.contains(&description) {
        LoadFailureKind::Connectivity
    } else {
        LoadFailureKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureDisposition {
    PresentDialog,
    DropBecauseDialogOpen,
    LogOnly,
}

pub(crate) fn decide_failure_disposition(
    kind: LoadFailureKind,
    dialog_open: bool,
) -> FailureDisposition {
    match kind {
        LoadFailureKind::Other => FailureDisposition::LogOnly,
        LoadFailureKind::Connectivity if dialog_open => FailureDisposition::DropBecauseDialogOpen,
        LoadFailureKind::Connectivity => FailureDisposition::PresentDialog,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecoveryChoice {
    Retry,
    Close,
}

/// Entry point for a load-failure report. Must run off the main thread: the
/// recovery dialog blocks until the user picks a button.
pub(crate) fn handle_load_failure(app_handle: &AppHandle, description: &str) {
    let kind = classify_load_failure(description);
    let state = app_handle.state::<ShellState>();
    let dialog_open = state.connectivity_dialog_open.load(Ordering::Acquire);

    match decide_failure_disposition(kind, dialog_open) {
        FailureDisposition::LogOnly => {
            append_desktop_log(&format!(
                "page load failed, not connectivity related: {description}"
            ));
        }
        FailureDisposition::DropBecauseDialogOpen => {
            append_desktop_log("connectivity dialog already open, dropping duplicate report");
        }
        FailureDisposition::PresentDialog => {
            append_desktop_log(&format!("connectivity error reported: {description}"));
            // Re-checked atomically; a racing report loses here and is dropped.
            let Some(guard) = FlagGuard::try_set(&state.connectivity_dialog_open) else {
                append_desktop_log("connectivity dialog already open, dropping duplicate report");
                return;
            };

            let choice = present_recovery_dialog(app_handle);
            drop(guard);

            apply_recovery_choice(app_handle, choice);
        }
    }
}

fn present_recovery_dialog(app_handle: &AppHandle) -> RecoveryChoice {
    let retry = app_handle
        .dialog()
        .message("No internet available! Try again?")
        .title("Internet connection problem")
        .kind(MessageDialogKind::Warning)
        .buttons(MessageDialogButtons::OkCancelCustom(
            "Try again".to_string(),
            "Close".to_string(),
        ))
        .blocking_show();

    if retry {
        RecoveryChoice::Retry
    } else {
        RecoveryChoice::Close
    }
}

pub(crate) fn apply_recovery_choice(app_handle: &AppHandle, choice: RecoveryChoice) {
    match choice {
        RecoveryChoice::Retry => {
            append_desktop_log("user chose retry after connectivity error");
            main_window::reload_main_window(app_handle, append_desktop_log);
            // The in-page tray is stale after a reload.
            main_window::emit_destroy_tray(app_handle, append_desktop_log);
        }
        RecoveryChoice::Close => {
            append_desktop_log("user chose close after connectivity error, exiting");
            app_handle.exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_load_failure_matches_whole_connectivity_set() {
        for description in CONNECTIVITY_ERRORS {
            assert_eq!(
                classify_load_failure(description),
                LoadFailureKind::Connectivity,
                "{description} should classify as connectivity"
            );
        }
    }

    #[test]
    fn classify_load_failure_leaves_other_errors_alone() {
        assert_eq!(
            classify_load_failure("ERR_FILE_NOT_FOUND"),
            LoadFailureKind::Other
        );
        assert_eq!(classify_load_failure("ERR_ABORTED"), LoadFailureKind::Other);
        assert_eq!(classify_load_failure(""), LoadFailureKind::Other);
    }

    #[test]
    fn classify_load_failure_is_exact_match_only() {
        assert_eq!(
            classify_load_failure("err_internet_disconnected"),
            LoadFailureKind::Other
        );
        assert_eq!(
            classify_load_failure("ERR_INTERNET_DISCONNECTED "),
            LoadFailureKind::Other
        );
    }

    #[test]
    fn decide_failure_disposition_presents_dialog_once() {
        assert_eq!(
            decide_failure_disposition(LoadFailureKind::Connectivity, false),
            FailureDisposition::PresentDialog
        );
        assert_eq!(
            decide_failure_disposition(LoadFailureKind::Connectivity, true),
            FailureDisposition::DropBecauseDialogOpen
        );
    }

    #[test]
    fn decide_failure_disposition_logs_non_connectivity_failures() {
        assert_eq!(
            decide_failure_disposition(LoadFailureKind::Other, false),
            FailureDisposition::LogOnly
        );
        assert_eq!(
            decide_failure_disposition(LoadFailureKind::Other, true),
            FailureDisposition::LogOnly
        );
    }
}
