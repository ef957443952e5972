use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::DomError;
use crate::navigation::{AnchorSurface, Section, SectionNavigator};

/// The live document.
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { document })
    }
}

impl AnchorSurface for DocumentSurface {
    type Anchor = Element;

    fn find_anchor(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn align_top(&self, anchor: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Navigator over the live document, if there is one.
pub fn navigator() -> Result<SectionNavigator<DocumentSurface>, DomError> {
    DocumentSurface::new().map(SectionNavigator::new)
}

/// Scrolls the live document to `section`; a no-op outside a browser.
pub fn scroll_to(section: Section) {
    match navigator() {
        Ok(navigator) => navigator.scroll_to(section),
        Err(err) => log::warn!("cannot scroll to {}: {err}", section.id()),
    }
}
