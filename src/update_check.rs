//! Auto-update check, gated by platform and build mode and run at most once
//! per process, after the first page finishes loading.
//!
//! Updater failures are logged and never surfaced: a missing release feed
//! or an offline check is normal, not an error the user can act on.

use std::sync::atomic::Ordering;

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tauri_plugin_updater::UpdaterExt;

use crate::{append_desktop_log, user_agent::OsLabel, ShellState, PRODUCT_NAME};

/// Updates ship only for macOS and Windows, and never from a development
/// build.
pub(crate) fn should_check_for_updates(os_label: OsLabel, dev_build: bool) -> bool {
    if dev_build {
        return false;
    }
    matches!(
        os_label,
        OsLabel::Mac | OsLabel::Windows7 | OsLabel::Windows10
    )
}

pub(crate) fn spawn_update_check(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if state.update_check_started.swap(true, Ordering::SeqCst) {
        return;
    }

    if !should_check_for_updates(
        crate::user_agent::detect_os_label(),
        cfg!(debug_assertions),
    ) {
        append_desktop_log("update check skipped: unsupported platform or development build");
        return;
    }

    let task_app_handle = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        run_update_check(task_app_handle).await;
    });
}

async fn run_update_check(app_handle: AppHandle) {
    let current_version = app_handle.package_info().version.to_string();

    let updater = match app_handle.updater() {
        Ok(updater) => updater,
        Err(error) => {
            append_desktop_log(&format!("failed to initialize updater: {error}"));
            return;
        }
    };

    match updater.check().await {
        Ok(Some(update)) => {
            let new_version = update.version.to_string();
            append_desktop_log(&format!(
                "update available: current={current_version} latest={new_version}"
            ));

            let should_install = app_handle
                .dialog()
                .message(format!(
                    "{PRODUCT_NAME} {new_version} is available. Download and install it now?"
                ))
                .title("Update available")
                .kind(MessageDialogKind::Info)
                .buttons(MessageDialogButtons::YesNo)
                .blocking_show();

            if !should_install {
                append_desktop_log("user deferred the update");
                return;
            }

            let downloaded_bytes = match update.download(|_, _| {}, || {}).await {
                Ok(bytes) => bytes,
                Err(error) => {
                    append_desktop_log(&format!("failed to download update: {error}"));
                    return;
                }
            };

            if let Err(error) = update.install(&downloaded_bytes) {
                append_desktop_log(&format!("failed to install update: {error}"));
                return;
            }

            append_desktop_log(&format!(
                "update {new_version} installed, restarting application"
            ));
            app_handle.request_restart();
        }
        Ok(None) => {
            append_desktop_log(&format!("no update available, current={current_version}"));
        }
        Err(error) => {
            // Normal when no release has been published or the machine is
            // offline; log and move on.
            append_desktop_log(&format!("update check failed, ignoring: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_check_runs_on_mac_and_windows_release_builds() {
        assert!(should_check_for_updates(OsLabel::Mac, false));
        assert!(should_check_for_updates(OsLabel::Windows7, false));
        assert!(should_check_for_updates(OsLabel::Windows10, false));
    }

    #[test]
    fn update_check_never_runs_on_linux() {
        assert!(!should_check_for_updates(OsLabel::Linux, false));
        assert!(!should_check_for_updates(OsLabel::Linux, true));
    }

    #[test]
    fn update_check_never_runs_in_development_builds() {
        assert!(!should_check_for_updates(OsLabel::Mac, true));
        assert!(!should_check_for_updates(OsLabel::Windows10, true));
    }
}
