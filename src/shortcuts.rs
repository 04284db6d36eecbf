//! Fixed accelerator table bound to the main window, registered as a set at
//! window creation and torn down as a set on both the all-windows-closed and
//! process-exit transitions.

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use crate::{append_desktop_log, main_window, BACK_EVENT, FORWARD_EVENT, RELOAD_EVENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortcutAction {
    Reload,
    Back,
    Forward,
}

impl ShortcutAction {
    pub(crate) fn content_event(self) -> &'static str {
        match self {
            ShortcutAction::Reload => RELOAD_EVENT,
            ShortcutAction::Back => BACK_EVENT,
            ShortcutAction::Forward => FORWARD_EVENT,
        }
    }
}

pub(crate) const SHORTCUT_TABLE: [(&str, ShortcutAction); 3] = [
    ("CommandOrControl+KeyR", ShortcutAction::Reload),
    ("CommandOrControl+BracketLeft", ShortcutAction::Back),
    ("CommandOrControl+BracketRight", ShortcutAction::Forward),
];

pub(crate) fn register_all(app_handle: &AppHandle) -> Result<(), String> {
    for (accelerator, action) in SHORTCUT_TABLE {
        app_handle
            .global_shortcut()
            .on_shortcut(accelerator, move |app, _shortcut, event| {
                if event.state != ShortcutState::Pressed {
                    return;
                }
                dispatch_action(app, action, append_desktop_log);
            })
            .map_err(|error| format!("Failed to register shortcut {accelerator}: {error}"))?;
    }
    Ok(())
}

/// Forwards the action to the content layer. Inert when the main window is
/// gone: a shortcut must have no effect once its window has closed.
pub(crate) fn dispatch_action<F>(app_handle: &AppHandle, action: ShortcutAction, log: F)
where
    F: Fn(&str),
{
    let event = action.content_event();
    if !main_window::emit_to_main_window(app_handle, event, &log) {
        log(&format!("shortcut {event} ignored: main window not found"));
    }
}

/// Removes the whole registration set. Idempotent: a second teardown sees
/// an empty set and succeeds, so the all-windows-closed and process-exit
/// transitions can both run it.
pub(crate) fn unregister_all<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    run_teardown(
        || {
            app_handle
                .global_shortcut()
                .unregister_all()
                .map_err(|error| error.to_string())
        },
        log,
    );
}

/// Teardown never propagates: a failed unregister is logged and the exit
/// path continues.
fn run_teardown<U, F>(unregister: U, log: F)
where
    U: FnOnce() -> Result<(), String>,
    F: Fn(&str),
{
    if let Err(error) = unregister() {
        log(&format!("failed to unregister window shortcuts: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_table_covers_reload_back_forward() {
        let actions: Vec<ShortcutAction> =
            SHORTCUT_TABLE.iter().map(|(_, action)| *action).collect();
        assert_eq!(
            actions,
            vec![
                ShortcutAction::Reload,
                ShortcutAction::Back,
                ShortcutAction::Forward
            ]
        );
    }

    #[test]
    fn shortcut_table_accelerators_are_unique() {
        for (i, (left, _)) in SHORTCUT_TABLE.iter().enumerate() {
            for (right, _) in SHORTCUT_TABLE.iter().skip(i + 1) {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn content_event_maps_every_action() {
        assert_eq!(ShortcutAction::Reload.content_event(), RELOAD_EVENT);
        assert_eq!(ShortcutAction::Back.content_event(), BACK_EVENT);
        assert_eq!(ShortcutAction::Forward.content_event(), FORWARD_EVENT);
    }

    #[test]
    fn teardown_twice_clears_the_set_and_logs_nothing() {
        use std::cell::RefCell;

        let registered: RefCell<Vec<&str>> =
            RefCell::new(SHORTCUT_TABLE.iter().map(|(accelerator, _)| *accelerator).collect());
        let logged: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let log = |line: &str| logged.borrow_mut().push(line.to_string());

        run_teardown(
            || {
                registered.borrow_mut().clear();
                Ok(())
            },
            &log,
        );
        assert!(registered.borrow().is_empty());

        // Second teardown over the now-empty set must also succeed.
        run_teardown(
            || {
                registered.borrow_mut().clear();
                Ok(())
            },
            &log,
        );
        assert!(registered.borrow().is_empty());
        assert!(logged.borrow().is_empty());
    }

    #[test]
    fn teardown_logs_and_swallows_failures() {
        use std::cell::RefCell;

        let logged: RefCell<Vec<String>> = RefCell::new(Vec::new());
        run_teardown(
            || Err("registry unavailable".to_string()),
            |line| logged.borrow_mut().push(line.to_string()),
        );

        assert_eq!(logged.borrow().len(), 1);
        assert!(logged.borrow()[0].contains("registry unavailable"));
    }
}
