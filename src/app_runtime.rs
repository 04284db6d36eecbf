//! Top-level lifecycle wiring: plugin setup, window/page event dispatch and
//! the run-event state machine over {no-window, window-active}.

use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, main_window, menu_setup, shortcuts, update_check, window_config,
    ShellState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_desktop_log("desktop process starting");

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            // The second process exits on its own; this runs in the original
            // one and brings the existing window forward.
            append_desktop_log("second instance launch detected, focusing existing window");
            main_window::focus_main_window(app_handle, append_desktop_log);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::shell_report_title,
            crate::bridge_commands::shell_report_load_failure,
            crate::bridge_commands::shell_report_certificate_error,
            crate::bridge_commands::shell_reload_main,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            let store = window.app_handle().state::<window_config::ConfigStore>();
            match event {
                WindowEvent::Resized(size) => {
                    let maximized = window.is_maximized().unwrap_or(false);
                    if let Err(error) = window_config::persist_window_size(
                        &store,
                        size.width,
                        size.height,
                        maximized,
                    ) {
                        append_desktop_log(&format!("failed to persist window size: {error}"));
                    }
                }
                WindowEvent::Moved(position) => {
                    let maximized = window.is_maximized().unwrap_or(false);
                    if let Err(error) = window_config::persist_window_position(
                        &store,
                        position.x,
                        position.y,
                        maximized,
                    ) {
                        append_desktop_log(&format!("failed to persist window position: {error}"));
                    }
                }
                WindowEvent::Destroyed => {
                    append_desktop_log("main window destroyed");
                }
                _ => {}
            }
        })
        .on_page_load(|webview, payload| {
            if webview.window().label() != MAIN_WINDOW_LABEL {
                return;
            }

            match payload.event() {
                PageLoadEvent::Started => {
                    // Early show. Together with the show on Finished this is
                    // a double-show safeguard: the window must never be left
                    // invisible because one of the two signals did not fire.
                    main_window::show_main_window(webview.app_handle(), append_desktop_log);
                }
                PageLoadEvent::Finished => {
                    append_desktop_log(&format!("page load finished: {}", payload.url()));
                    main_window::show_main_window(webview.app_handle(), append_desktop_log);
                    update_check::spawn_update_check(webview.app_handle());
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();

            let config_path = window_config::default_config_path(&app_handle);
            app.manage(window_config::ConfigStore::open(config_path));

            if let Err(error) = menu_setup::install_application_menu(&app_handle) {
                append_desktop_log(&format!("failed to install application menu: {error}"));
            }

            main_window::create_main_window(&app_handle)?;

            if let Err(error) = shortcuts::register_all(&app_handle) {
                append_desktop_log(&format!("failed to register window shortcuts: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code: None, api, .. } => {
                // All windows closed. Shortcuts must not outlive the window;
                // on macOS the app stays resident until the next Reopen.
                shortcuts::unregister_all(app_handle, append_desktop_log);
                append_desktop_log("all windows closed");
                #[cfg(target_os = "macos")]
                api.prevent_exit();
                #[cfg(not(target_os = "macos"))]
                let _ = api;
            }
            RunEvent::Exit => {
                // Second teardown alongside the all-closed path; unregister
                // is idempotent.
                shortcuts::unregister_all(app_handle, append_desktop_log);
                append_desktop_log("desktop process exiting");
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_none() {
                    match main_window::create_main_window(app_handle) {
                        Ok(_) => {
                            if let Err(error) = shortcuts::register_all(app_handle) {
                                append_desktop_log(&format!(
                                    "failed to re-register window shortcuts: {error}"
                                ));
                            }
                        }
                        Err(error) => {
                            append_desktop_log(&format!("failed to recreate main window: {error}"));
                        }
                    }
                } else {
                    main_window::focus_main_window(app_handle, append_desktop_log);
                }
            }
            _ => {}
        });
}
