//! Testimonial carousel state
//!
//! Index arithmetic and the autoplay timer lifecycle. Positioning is derived
//! from `current_index` and the last measured slide width; the presentation
//! component turns that into a track transform.

use crate::core::cmd::Cmd;
use crate::core::timer::{TimerId, TimerOwner};

pub enum Message {
    /// Mounted; start autoplay
    Started,
    /// The autoplay interval fired
    AutoplayTicked(TimerId),
    /// The user pressed the next control
    NextClicked,
    /// The user pressed the previous control
    PreviousClicked,
    /// The first slide was (re)measured
    SlideWidthMeasured(f64),
    /// Torn down; stop autoplay
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    current_index: usize,
    slide_count: usize,
    slide_width: f64,
    autoplay_period_ms: u64,
    autoplay: Option<TimerId>,
    next_seq: u32,
}

impl Carousel {
    pub fn new(slide_count: usize, autoplay_period_ms: u64) -> Self {
        Self {
            current_index: 0,
            slide_count,
            slide_width: 0.0,
            autoplay_period_ms,
            autoplay: None,
            next_seq: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// The live autoplay timer, if autoplay is running
    pub fn autoplay(&self) -> Option<TimerId> {
        self.autoplay
    }

    /// Horizontal distance the track is shifted left, in pixels
    pub fn offset(&self) -> f64 {
        self.current_index as f64 * self.slide_width
    }

    /// Move to the following slide, wrapping after the last one
    pub fn next(&mut self) {
        if self.slide_count > 1 {
            self.current_index = (self.current_index + 1) % self.slide_count;
        }
    }

    /// Move to the preceding slide, wrapping before the first one
    pub fn prev(&mut self) {
        if self.slide_count > 1 {
            self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        }
    }

    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::Started => self.restart_autoplay(),
            Message::AutoplayTicked(timer) => {
                if self.autoplay == Some(timer) {
                    self.next();
                } else {
                    tracing::debug!("ignoring stale autoplay tick {timer}");
                }
                vec![]
            }
            Message::NextClicked => {
                self.next();
                self.restart_autoplay()
            }
            Message::PreviousClicked => {
                self.prev();
                self.restart_autoplay()
            }
            Message::SlideWidthMeasured(width) => {
                self.slide_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
                vec![]
            }
            Message::Stopped => self.autoplay.take().map_or_else(Vec::new, |timer| {
                vec![Cmd::CancelTimer { timer }]
            }),
        }
    }

    /// Cancel the running interval (if any) and start a fresh one, so user
    /// interaction resets the autoplay clock
    fn restart_autoplay(&mut self) -> Vec<Cmd> {
        let mut cmds = Vec::with_capacity(2);
        if let Some(timer) = self.autoplay.take() {
            cmds.push(Cmd::CancelTimer { timer });
        }
        let timer = TimerId::new(TimerOwner::Carousel, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.autoplay = Some(timer);
        cmds.push(Cmd::StartInterval {
            timer,
            period_ms: self.autoplay_period_ms,
        });
        cmds
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    fn test_next_n_times_returns_to_start(#[case] slides: usize) {
        for start in 0..slides {
            let mut carousel = Carousel::new(slides, 7000);
            for _ in 0..start {
                carousel.next();
            }
            assert_eq!(carousel.current_index(), start);

            for _ in 0..slides {
                carousel.next();
            }
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn test_prev_inverts_next(#[case] slides: usize) {
        for start in 0..slides {
            let mut carousel = Carousel::new(slides, 7000);
            for _ in 0..start {
                carousel.next();
            }
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.current_index(), start);

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(4, 7000);
        carousel.prev();
        assert_eq!(carousel.current_index(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_degenerate_counts_do_not_move(#[case] slides: usize) {
        let mut carousel = Carousel::new(slides, 7000);
        carousel.update(Message::NextClicked);
        carousel.update(Message::PreviousClicked);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_started_schedules_interval() {
        let mut carousel = Carousel::new(3, 7000);
        let cmds = carousel.update(Message::Started);
        let timer = TimerId::new(TimerOwner::Carousel, 0);
        assert_eq!(
            cmds,
            vec![Cmd::StartInterval {
                timer,
                period_ms: 7000
            }]
        );
        assert_eq!(carousel.autoplay(), Some(timer));
    }

    #[test]
    fn test_manual_navigation_resets_autoplay() {
        let mut carousel = Carousel::new(3, 7000);
        carousel.update(Message::Started);

        let cmds = carousel.update(Message::NextClicked);
        let old = TimerId::new(TimerOwner::Carousel, 0);
        let new = TimerId::new(TimerOwner::Carousel, 1);
        assert_eq!(
            cmds,
            vec![
                Cmd::CancelTimer { timer: old },
                Cmd::StartInterval {
                    timer: new,
                    period_ms: 7000
                },
            ]
        );
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.autoplay(), Some(new));
    }

    #[test]
    fn test_repeated_clicks_keep_one_timer() {
        let mut carousel = Carousel::new(3, 7000);
        let mut live = HashSet::new();
        let mut apply = |cmds: Vec<Cmd>| {
            for cmd in cmds {
                match cmd {
                    Cmd::StartInterval { timer, .. } => {
                        live.insert(timer);
                    }
                    Cmd::CancelTimer { timer } => {
                        live.remove(&timer);
                    }
                    _ => {}
                }
            }
        };

        apply(carousel.update(Message::Started));
        for i in 0..10 {
            let message = if i % 3 == 0 {
                Message::PreviousClicked
            } else {
                Message::NextClicked
            };
            apply(carousel.update(message));
        }
        assert_eq!(live.len(), 1);
        assert_eq!(live.into_iter().next(), carousel.autoplay());
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut carousel = Carousel::new(3, 7000);
        carousel.update(Message::Started);
        let stale = TimerId::new(TimerOwner::Carousel, 0);
        carousel.update(Message::NextClicked);

        carousel.update(Message::AutoplayTicked(stale));
        assert_eq!(carousel.current_index(), 1);

        let live = carousel.autoplay().expect("autoplay running");
        carousel.update(Message::AutoplayTicked(live));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_offset_follows_measured_width() {
        let mut carousel = Carousel::new(3, 7000);
        carousel.update(Message::SlideWidthMeasured(640.0));
        carousel.next();
        carousel.next();
        assert_eq!(carousel.offset(), 1280.0);

        carousel.update(Message::SlideWidthMeasured(320.0));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.offset(), 640.0);

        carousel.update(Message::SlideWidthMeasured(f64::NAN));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_stopped_cancels_once() {
        let mut carousel = Carousel::new(3, 7000);
        carousel.update(Message::Started);
        let timer = TimerId::new(TimerOwner::Carousel, 0);

        assert_eq!(carousel.update(Message::Stopped), vec![Cmd::CancelTimer { timer }]);
        assert!(carousel.update(Message::Stopped).is_empty());
        assert_eq!(carousel.autoplay(), None);
    }
}
