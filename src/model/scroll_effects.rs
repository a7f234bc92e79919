use crate::core::cmd::Cmd;

/// Scroll offsets past which the visual states switch on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub header: f64,
    pub back_to_top: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header: 100.0,
            back_to_top: 500.0,
        }
    }
}

pub enum Message {
    Scrolled { y: f64 },
    BackToTopClicked,
}

/// Header style and back-to-top visibility as a function of scroll offset
///
/// No hysteresis: both flags depend only on the latest offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollEffects {
    thresholds: ScrollThresholds,
    header_visible: bool,
    back_to_top_visible: bool,
}

impl ScrollEffects {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::Scrolled { y } => {
                self.header_visible = y > self.thresholds.header;
                self.back_to_top_visible = y > self.thresholds.back_to_top;
                vec![]
            }
            Message::BackToTopClicked => vec![Cmd::ScrollToTop { smooth: true }],
        }
    }
}
