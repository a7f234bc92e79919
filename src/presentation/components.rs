//! Component collection and management

use std::sync::Arc;

use crate::{
    core::{cmd::Cmd, event::Event},
    infrastructure::{config::Config, dom::Document},
};

pub mod carousel;
pub mod mobile_nav;
pub mod nav_highlight;
pub mod page_loader;
pub mod scroll_effects;
pub mod service_modal;

pub use carousel::CarouselComponent;
pub use mobile_nav::MobileNavComponent;
pub use nav_highlight::NavHighlightComponent;
pub use page_loader::PageLoaderComponent;
pub use scroll_effects::ScrollEffectsComponent;
pub use service_modal::ServiceModalComponent;

/// A mounted page feature
///
/// Components are built by a `mount` constructor that returns `None` when the
/// elements they need are missing from the document, so a mounted component
/// can assume its required nodes exist.
pub trait Component {
    fn name(&self) -> &'static str;

    /// Commands to run right after mounting
    fn init(&mut self, _doc: &dyn Document) -> Vec<Cmd> {
        vec![]
    }

    fn update(&mut self, event: &Event, doc: &dyn Document) -> Vec<Cmd>;

    /// Teardown commands
    fn dispose(&mut self) -> Vec<Cmd> {
        vec![]
    }
}

/// Collection of all components
///
/// Each slot is `None` when that feature's markup is absent from the page.
#[derive(Debug, Default)]
pub struct Components {
    pub page_loader: Option<PageLoaderComponent>,
    pub nav_highlight: Option<NavHighlightComponent>,
    pub scroll_effects: Option<ScrollEffectsComponent>,
    pub mobile_nav: Option<MobileNavComponent>,
    pub service_modal: Option<ServiceModalComponent>,
    pub carousel: Option<CarouselComponent>,
}

impl Components {
    /// Mount every component whose markup is present
    pub fn mount(doc: &dyn Document, config: &Config) -> Self {
        let components = Self {
            page_loader: PageLoaderComponent::mount(doc, &config.page_loader),
            nav_highlight: NavHighlightComponent::mount(doc, &config.navigation.home_page),
            scroll_effects: ScrollEffectsComponent::mount(doc, config.scroll.into()),
            mobile_nav: MobileNavComponent::mount(doc),
            service_modal: ServiceModalComponent::mount(doc, Arc::new(config.services.clone())),
            carousel: CarouselComponent::mount(doc, config.carousel.autoplay_ms),
        };
        tracing::info!("mounted components: {:?}", components.names());
        components
    }

    /// Mounted components in dispatch order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn Component> + '_ {
        let Self {
            page_loader,
            nav_highlight,
            scroll_effects,
            mobile_nav,
            service_modal,
            carousel,
        } = self;
        [
            page_loader.as_mut().map(|c| c as &mut dyn Component),
            nav_highlight.as_mut().map(|c| c as &mut dyn Component),
            scroll_effects.as_mut().map(|c| c as &mut dyn Component),
            mobile_nav.as_mut().map(|c| c as &mut dyn Component),
            service_modal.as_mut().map(|c| c as &mut dyn Component),
            carousel.as_mut().map(|c| c as &mut dyn Component),
        ]
        .into_iter()
        .flatten()
    }

    /// Names of the mounted components in dispatch order
    pub fn names(&self) -> Vec<&'static str> {
        let Self {
            page_loader,
            nav_highlight,
            scroll_effects,
            mobile_nav,
            service_modal,
            carousel,
        } = self;
        [
            page_loader.as_ref().map(|c| c.name()),
            nav_highlight.as_ref().map(|c| c.name()),
            scroll_effects.as_ref().map(|c| c.name()),
            mobile_nav.as_ref().map(|c| c.name()),
            service_modal.as_ref().map(|c| c.name()),
            carousel.as_ref().map(|c| c.name()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn init(&mut self, doc: &dyn Document) -> Vec<Cmd> {
        self.iter_mut().flat_map(|c| c.init(doc)).collect()
    }

    pub fn update(&mut self, event: &Event, doc: &dyn Document) -> Vec<Cmd> {
        self.iter_mut().flat_map(|c| c.update(event, doc)).collect()
    }

    pub fn dispose(&mut self) -> Vec<Cmd> {
        self.iter_mut().flat_map(|c| c.dispose()).collect()
    }
}
