use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Component that owns a timer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimerOwner {
    PageLoader,
    Carousel,
}

/// Identity of one scheduled timer
///
/// Owners hand out a fresh `seq` whenever they (re)start a timer, so a tick
/// delivered after its timer was replaced can be told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId {
    pub owner: TimerOwner,
    pub seq: u32,
}

impl TimerId {
    pub fn new(owner: TimerOwner, seq: u32) -> Self {
        Self { owner, seq }
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.seq)
    }
}
