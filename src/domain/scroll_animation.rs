use serde::{Deserialize, Serialize};

/// Settings handed to the external animate-on-scroll library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAnimationSettings {
    /// Animate each element only the first time it scrolls into view
    pub once: bool,
    pub duration_ms: u32,
    pub offset_px: u32,
}

impl Default for ScrollAnimationSettings {
    fn default() -> Self {
        Self {
            once: true,
            duration_ms: 800,
            offset_px: 100,
        }
    }
}
