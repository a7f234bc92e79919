use crate::core::cmd::Cmd;

pub enum Message {
    OpenRequested,
    CloseRequested,
    /// A link inside the menu was followed
    LinkFollowed,
}

/// Off-canvas menu state. Opening locks page scroll, closing releases it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closing an already-closed menu, or opening an open one, emits nothing.
    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::OpenRequested if !self.open => {
                self.open = true;
                vec![Cmd::LockScroll]
            }
            Message::CloseRequested | Message::LinkFollowed if self.open => {
                self.open = false;
                vec![Cmd::UnlockScroll]
            }
            _ => vec![],
        }
    }
}
