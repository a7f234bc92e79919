use serde::{Deserialize, Serialize};

use crate::core::timer::TimerId;
use crate::domain::NodeId;

/// Events as the host delivers them, before any document lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawEvent {
    /// The document finished parsing (`DOMContentLoaded`)
    Ready,
    Click { target: NodeId },
    Scroll,
    Resize,
    TimerFired { timer: TimerId },
}

impl RawEvent {
    /// Scroll and timer events arrive often; keep them out of info logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawEvent::Scroll | RawEvent::TimerFired { .. })
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;
    use crate::core::timer::TimerOwner;

    #[test]
    fn test_frequent_detection() {
        assert!(RawEvent::Scroll.is_frequent());
        assert!(RawEvent::TimerFired {
            timer: TimerId::new(TimerOwner::Carousel, 0)
        }
        .is_frequent());
        assert!(!RawEvent::Ready.is_frequent());
        assert!(!RawEvent::Click { target: NodeId(3) }.is_frequent());
    }

    #[test]
    fn test_raw_event_serialization() -> Result<()> {
        let event = RawEvent::Click { target: NodeId(4) };
        let serialized = serde_json::to_string(&event)?;
        assert_eq!(serialized, r#"{"type":"click","target":4}"#);
        let deserialized: RawEvent = serde_json::from_str(&serialized)?;
        assert_eq!(event, deserialized);
        Ok(())
    }
}
