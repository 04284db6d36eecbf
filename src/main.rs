#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod badge;
mod bridge_commands;
mod certificate_policy;
mod connectivity;
mod logging;
mod main_window;
mod menu_setup;
mod shortcuts;
mod update_check;
mod user_agent;
mod window_config;

pub(crate) use app_constants::*;
pub(crate) use app_types::{FlagGuard, ShellState};
pub(crate) use logging::append_desktop_log;

fn main() {
    app_runtime::run();
}
