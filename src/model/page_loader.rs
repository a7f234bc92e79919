//! Load splash sequencing
//!
//! `Visible --delay--> Fading --fade--> Hidden`, driven by two timeouts. There
//! is no way back and no cancellation.

use strum::Display;

use crate::core::cmd::Cmd;
use crate::core::timer::{TimerId, TimerOwner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoaderPhase {
    Visible,
    Fading,
    Hidden,
}

pub enum Message {
    Started,
    TimerFired(TimerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoader {
    phase: LoaderPhase,
    pending: Option<TimerId>,
    started: bool,
    delay_ms: u64,
    fade_ms: u64,
}

impl PageLoader {
    pub fn new(delay_ms: u64, fade_ms: u64) -> Self {
        Self {
            phase: LoaderPhase::Visible,
            pending: None,
            started: false,
            delay_ms,
            fade_ms,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::Started if !self.started => {
                self.started = true;
                self.schedule(0, self.delay_ms)
            }
            Message::Started => vec![],
            Message::TimerFired(timer) if self.pending == Some(timer) => {
                self.pending = None;
                match self.phase {
                    LoaderPhase::Visible => {
                        self.phase = LoaderPhase::Fading;
                        self.schedule(1, self.fade_ms)
                    }
                    LoaderPhase::Fading => {
                        self.phase = LoaderPhase::Hidden;
                        vec![]
                    }
                    LoaderPhase::Hidden => vec![],
                }
            }
            Message::TimerFired(_) => vec![],
        }
    }

    fn schedule(&mut self, seq: u32, delay_ms: u64) -> Vec<Cmd> {
        let timer = TimerId::new(TimerOwner::PageLoader, seq);
        self.pending = Some(timer);
        vec![Cmd::StartTimeout { timer, delay_ms }]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut loader = PageLoader::new(300, 500);
        assert_eq!(loader.phase(), LoaderPhase::Visible);

        let delay = TimerId::new(TimerOwner::PageLoader, 0);
        assert_eq!(
            loader.update(Message::Started),
            vec![Cmd::StartTimeout {
                timer: delay,
                delay_ms: 300
            }]
        );
        assert_eq!(loader.phase(), LoaderPhase::Visible);

        let fade = TimerId::new(TimerOwner::PageLoader, 1);
        assert_eq!(
            loader.update(Message::TimerFired(delay)),
            vec![Cmd::StartTimeout {
                timer: fade,
                delay_ms: 500
            }]
        );
        assert_eq!(loader.phase(), LoaderPhase::Fading);

        assert!(loader.update(Message::TimerFired(fade)).is_empty());
        assert_eq!(loader.phase(), LoaderPhase::Hidden);
    }

    #[test]
    fn test_started_twice_does_not_retrigger() {
        let mut loader = PageLoader::new(300, 500);
        assert_eq!(loader.update(Message::Started).len(), 1);
        assert!(loader.update(Message::Started).is_empty());
    }

    #[test]
    fn test_foreign_timers_are_ignored() {
        let mut loader = PageLoader::new(300, 500);
        loader.update(Message::Started);

        let foreign = TimerId::new(TimerOwner::Carousel, 0);
        assert!(loader.update(Message::TimerFired(foreign)).is_empty());
        assert_eq!(loader.phase(), LoaderPhase::Visible);

        // The fade timer cannot fire before the delay timer
        let fade = TimerId::new(TimerOwner::PageLoader, 1);
        assert!(loader.update(Message::TimerFired(fade)).is_empty());
        assert_eq!(loader.phase(), LoaderPhase::Visible);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(LoaderPhase::Fading.to_string(), "fading");
    }
}
