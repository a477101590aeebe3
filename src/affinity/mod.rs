//! Window display affinity
//!
//! Toggles whether a window's contents show up in screen captures taken by
//! other processes. The Win32 implementation lives in `windows`; every other
//! platform gets a stub that always reports failure.

use std::fmt;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod stub;

#[cfg(target_os = "windows")]
pub use self::windows::Win32Mutator as PlatformMutator;

#[cfg(not(target_os = "windows"))]
pub use self::stub::StubMutator as PlatformMutator;

/// Opaque native window handle (an `HWND` on Windows).
///
/// Never created, destroyed or checked for liveness here; a stale handle is
/// handed to the platform as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(i64);

impl WindowHandle {
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Display affinity codes understood by the windowing subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DisplayAffinity {
    /// No restriction; the window is captured normally
    None = 0x00,
    /// Legacy affinity: the window renders black in captures.
    /// Older systems apply this when asked for `ExcludeFromCapture`.
    Monitor = 0x01,
    /// The window is left out of captures but stays visible on screen
    ExcludeFromCapture = 0x11,
}

impl DisplayAffinity {
    pub fn for_exclusion(exclude: bool) -> Self {
        if exclude {
            Self::ExcludeFromCapture
        } else {
            Self::None
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Applies a display affinity to a native window.
///
/// Returns `true` when the platform accepted the change. Failure reasons are
/// not distinguished.
pub trait AffinityMutator {
    fn set_display_affinity(&self, handle: WindowHandle, affinity: DisplayAffinity) -> bool;
}

/// Exclude (`true`) or re-include (`false`) a window in screen captures
/// using the current platform's mutator.
pub fn set_window_exclude_from_capture(handle: WindowHandle, exclude: bool) -> bool {
    set_window_exclude_from_capture_with(&PlatformMutator, handle, exclude)
}

pub fn set_window_exclude_from_capture_with<M: AffinityMutator>(
    mutator: &M,
    handle: WindowHandle,
    exclude: bool,
) -> bool {
    mutator.set_display_affinity(handle, DisplayAffinity::for_exclusion(exclude))
}
