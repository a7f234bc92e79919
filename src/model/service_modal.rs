use std::sync::Arc;

use crate::core::cmd::Cmd;
use crate::domain::{ServiceCatalog, ServiceDetail};

pub enum Message {
    CardClicked { service_id: String },
    CloseClicked,
    /// A click landed on the overlay itself, outside the content box
    OverlayClicked,
}

/// Which service, if any, the modal is showing
#[derive(Debug, Clone)]
pub struct ServiceModal {
    catalog: Arc<ServiceCatalog>,
    open: Option<String>,
}

impl ServiceModal {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            catalog,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The detail currently displayed
    pub fn current(&self) -> Option<&ServiceDetail> {
        self.open.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn update(&mut self, message: Message) -> Vec<Cmd> {
        match message {
            Message::CardClicked { service_id } => {
                if !self.catalog.contains(&service_id) {
                    tracing::debug!("no service detail for `{service_id}`");
                    return vec![];
                }
                let was_open = self.open.replace(service_id).is_some();
                if was_open {
                    vec![]
                } else {
                    vec![Cmd::LockScroll]
                }
            }
            Message::CloseClicked | Message::OverlayClicked => match self.open.take() {
                Some(_) => vec![Cmd::UnlockScroll],
                None => vec![],
            },
        }
    }
}
