//! Display affinity is a Win32 concept; elsewhere every call fails.

use super::{AffinityMutator, DisplayAffinity, WindowHandle};

#[derive(Debug, Clone, Copy, Default)]
pub struct StubMutator;

impl AffinityMutator for StubMutator {
    fn set_display_affinity(&self, handle: WindowHandle, affinity: DisplayAffinity) -> bool {
        tracing::warn!(
            "Display affinity {:?} for window {} not supported on {}",
            affinity,
            handle,
            std::env::consts::OS
        );
        false
    }
}
