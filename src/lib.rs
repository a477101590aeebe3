//! Capture exclusion - keep application windows out of screen captures.
//!
//! Exposes `setWindowExcludeFromCapture(handle, exclude)` to the host
//! runtime. On Windows this sets the window's display affinity; other
//! platforms report `false`.
//!
//! ```ignore
//! tauri::Builder::default()
//!     .plugin(tauri_plugin_capture_exclusion::init())
//! ```

pub mod affinity;
pub mod bridge;
pub mod commands;
pub mod config;
pub mod utils;

pub use affinity::{set_window_exclude_from_capture, DisplayAffinity, WindowHandle};
pub use config::Config;
pub use utils::error::{BridgeError, BridgeResult, ErrorResponse};

use affinity::{AffinityMutator, PlatformMutator};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

const PLUGIN_NAME: &str = "capture-exclusion";

/// Initialize the plugin
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::window::set_window_exclude_from_capture,
            commands::window::set_current_window_exclude_from_capture,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            tracing::debug!(
                "Capture exclusion configured for windows: {:?}",
                config.exclude_windows
            );
            app.manage(config);
            Ok(())
        })
        .on_window_ready(|window| {
            if let Some(config) = window.try_state::<Config>() {
                exclude_on_startup_with(&PlatformMutator, &config, window.label(), || {
                    commands::window::native_handle(&window)
                });
            }
        })
        .build()
}

/// Excludes a newly created window when its label is listed in `excludeWindows`.
///
/// Returns the platform result, or `None` when the window isn't listed or its
/// handle can't be resolved. The handle is only looked up for listed windows.
fn exclude_on_startup_with<M, F>(
    mutator: &M,
    config: &Config,
    label: &str,
    resolve_handle: F,
) -> Option<bool>
where
    M: AffinityMutator,
    F: FnOnce() -> BridgeResult<Option<WindowHandle>>,
{
    if !config.excludes(label) {
        return None;
    }

    let handle = match resolve_handle() {
        Ok(Some(handle)) => handle,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!("Failed to get native handle for window '{}': {}", label, e);
            return None;
        }
    };

    let excluded = affinity::set_window_exclude_from_capture_with(mutator, handle, true);
    if excluded {
        tracing::info!("Excluded window '{}' ({}) from screen capture", label, handle);
    } else {
        tracing::warn!(
            "Could not exclude window '{}' ({}) from screen capture; it may appear in recordings",
            label,
            handle
        );
    }
    Some(excluded)
}
