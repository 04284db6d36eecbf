//! Translates window titles like `"Zulip (3)"` into badge counts.
//!
//! The dock badge is macOS-only; the in-page tray representation gets the
//! count on every platform via the `tray` event. Titles without the product
//! token are not forwarded at all (early return, matching the upstream
//! behavior rather than forwarding a zero).

use tauri::{Emitter, WebviewWindow};

use crate::{PRODUCT_NAME, TRAY_EVENT};

/// First `(<digits>)` run in the title. A token-bearing title without one
/// means "no unreads", count 0.
fn first_parenthesized_count(title: &str) -> Option<u32> {
    let bytes = title.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'(' {
            let mut j = i + 1;
            let mut value: u64 = 0;
            let mut digits = 0;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                value = value.saturating_mul(10).saturating_add(u64::from(bytes[j] - b'0'));
                digits += 1;
                j += 1;
            }
            if digits > 0 && j < bytes.len() && bytes[j] == b')' {
                return Some(value.min(u64::from(u32::MAX)) as u32);
            }
        }
        i += 1;
    }
    None
}

pub(crate) fn badge_count_for_title(title: &str) -> Option<u32> {
    if !title.contains(PRODUCT_NAME) {
        return None;
    }
    Some(first_parenthesized_count(title).unwrap_or(0))
}

pub(crate) fn update_badge<F>(window: &WebviewWindow, title: &str, log: F)
where
    F: Fn(&str),
{
    let Some(count) = badge_count_for_title(title) else {
        return;
    };

    #[cfg(target_os = "macos")]
    {
        let dock_count = if count > 0 { Some(i64::from(count)) } else { None };
        if let Err(error) = window.set_badge_count(dock_count) {
            log(&format!("failed to update dock badge count: {error}"));
        }
    }

    if let Err(error) = window.emit(TRAY_EVENT, count) {
        log(&format!("failed to forward badge count to content layer: {error}"));
    }
}
