//! Window capture-exclusion Tauri commands

use crate::affinity::{self, AffinityMutator, PlatformMutator, WindowHandle};
use crate::bridge;
use crate::utils::error::{BridgeResult, ErrorResponse};
use serde_json::Value;
use tauri::{Runtime, Window};

/// Positional binding behind `setWindowExcludeFromCapture(handle, exclude)`.
///
/// A missing `args` key counts as zero arguments.
#[tauri::command]
pub fn set_window_exclude_from_capture(args: Option<Vec<Value>>) -> Result<bool, ErrorResponse> {
    bridge::set_window_exclude_from_capture(&args.unwrap_or_default()).map_err(ErrorResponse::from)
}

/// Toggle capture exclusion for the window that sent the command
#[tauri::command]
pub fn set_current_window_exclude_from_capture<R: Runtime>(
    window: Window<R>,
    exclude: bool,
) -> Result<bool, ErrorResponse> {
    let handle = native_handle(&window)?;
    Ok(toggle_window_with(&PlatformMutator, handle, exclude))
}

/// A window without a native handle can't be toggled and reports `false`
pub(crate) fn toggle_window_with<M: AffinityMutator>(
    mutator: &M,
    handle: Option<WindowHandle>,
    exclude: bool,
) -> bool {
    match handle {
        Some(handle) => affinity::set_window_exclude_from_capture_with(mutator, handle, exclude),
        None => false,
    }
}

/// Native handle of a Tauri window, `None` where windows have no `HWND`
pub(crate) fn native_handle<R: Runtime>(window: &Window<R>) -> BridgeResult<Option<WindowHandle>> {
    #[cfg(target_os = "windows")]
    {
        let hwnd = window.hwnd()?;
        Ok(Some(WindowHandle::from_raw(hwnd.0 as isize as i64)))
    }

    #[cfg(not(target_os = "windows"))]
    {
        tracing::debug!("No native handle for window '{}'", window.label());
        Ok(None)
    }
}
