use log::debug;

/// In-page regions the navigation can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Services,
    HowItWorks,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Services,
        Section::HowItWorks,
        Section::Contact,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::HowItWorks => "how-it-works",
            Section::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Services => "Services",
            Section::HowItWorks => "How It Works",
            Section::Contact => "Contact",
        }
    }
}

/// A document that can find regions by id and scroll them into place.
pub trait AnchorSurface {
    type Anchor;

    fn find_anchor(&self, id: &str) -> Option<Self::Anchor>;

    /// Smoothly scrolls so the anchor's top edge meets the viewport top.
    fn align_top(&self, anchor: &Self::Anchor);
}

pub struct SectionNavigator<S> {
    surface: S,
}

impl<S: AnchorSurface> SectionNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Fire-and-forget; unknown ids are ignored.
    pub fn scroll_to_section(&self, id: &str) {
        match self.surface.find_anchor(id) {
            Some(anchor) => self.surface.align_top(&anchor),
            None => debug!("no section with id {id:?}, not scrolling"),
        }
    }

    pub fn scroll_to(&self, section: Section) {
        self.scroll_to_section(section.id());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeSurface {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeSurface {
        fn with_sections() -> Self {
            Self {
                ids: Section::ALL.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::default(),
            }
        }
    }

    impl AnchorSurface for &FakeSurface {
        type Anchor = String;

        fn find_anchor(&self, id: &str) -> Option<String> {
            self.ids.iter().any(|known| *known == id).then(|| id.to_string())
        }

        fn align_top(&self, anchor: &String) {
            self.scrolled.borrow_mut().push(anchor.clone());
        }
    }

    #[test]
    fn scrolls_known_sections() {
        let surface = FakeSurface::with_sections();
        let navigator = SectionNavigator::new(&surface);
        navigator.scroll_to(Section::Contact);
        navigator.scroll_to_section("about");
        assert_eq!(*surface.scrolled.borrow(), ["contact", "about"]);
    }

    #[test]
    fn unknown_id_is_a_no_op_and_later_calls_still_work() {
        let surface = FakeSurface::with_sections();
        let navigator = SectionNavigator::new(&surface);
        navigator.scroll_to_section("pricing");
        assert!(surface.scrolled.borrow().is_empty());

        navigator.scroll_to_section("services");
        assert_eq!(*surface.scrolled.borrow(), ["services"]);
    }

    #[test]
    fn ids_are_unique_anchor_safe_slugs() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["about", "services", "how-it-works", "contact"]);
        for id in &ids {
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{id}");
        }
    }
}
