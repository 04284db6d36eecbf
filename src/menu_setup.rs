//! Builds and installs the application menu. The shell only installs the
//! ready-made menu object; none of the entries carry app business logic.

use tauri::{
    menu::{MenuBuilder, SubmenuBuilder},
    AppHandle,
};

pub(crate) fn install_application_menu(app_handle: &AppHandle) -> Result<(), String> {
    let file_menu = SubmenuBuilder::new(app_handle, "File")
        .close_window()
        .separator()
        .quit()
        .build()
        .map_err(|error| format!("Failed to build File menu: {error}"))?;

    let edit_menu = SubmenuBuilder::new(app_handle, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .build()
        .map_err(|error| format!("Failed to build Edit menu: {error}"))?;

    let view_menu = SubmenuBuilder::new(app_handle, "View")
        .fullscreen()
        .build()
        .map_err(|error| format!("Failed to build View menu: {error}"))?;

    let window_menu = SubmenuBuilder::new(app_handle, "Window")
        .minimize()
        .maximize()
        .build()
        .map_err(|error| format!("Failed to build Window menu: {error}"))?;

    let menu = MenuBuilder::new(app_handle)
        .items(&[&file_menu, &edit_menu, &view_menu, &window_menu])
        .build()
        .map_err(|error| format!("Failed to build application menu: {error}"))?;

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;

    Ok(())
}
