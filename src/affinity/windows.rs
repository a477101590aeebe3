//! Win32 display affinity
//!
//! `WDA_EXCLUDEFROMCAPTURE` needs Windows 10 2004. Earlier releases treat it
//! like `WDA_MONITOR` on their own, so no version check happens here.

use super::{AffinityMutator, DisplayAffinity, WindowHandle};
use std::ffi::c_void;
use windows::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::{
        SetWindowDisplayAffinity, WDA_EXCLUDEFROMCAPTURE, WDA_MONITOR, WDA_NONE,
        WINDOW_DISPLAY_AFFINITY,
    },
};

impl From<DisplayAffinity> for WINDOW_DISPLAY_AFFINITY {
    fn from(affinity: DisplayAffinity) -> Self {
        match affinity {
            DisplayAffinity::None => WDA_NONE,
            DisplayAffinity::Monitor => WDA_MONITOR,
            DisplayAffinity::ExcludeFromCapture => WDA_EXCLUDEFROMCAPTURE,
        }
    }
}

/// Calls `SetWindowDisplayAffinity` directly on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Mutator;

impl AffinityMutator for Win32Mutator {
    fn set_display_affinity(&self, handle: WindowHandle, affinity: DisplayAffinity) -> bool {
        let hwnd = HWND(handle.as_raw() as isize as *mut c_void);

        match unsafe { SetWindowDisplayAffinity(hwnd, affinity.into()) } {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "SetWindowDisplayAffinity({}, {:?}) failed: {}",
                    handle,
                    affinity,
                    e
                );
                false
            }
        }
    }
}
