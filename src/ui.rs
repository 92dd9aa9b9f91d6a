//! UI state and the actions that change it.
//!
//! The whole view is a function of one [`UiState`] value plus the carousel
//! positions. State never mutates in place: [`UiState::apply`] takes an
//! [`Action`] and returns the next state together with any side effects the
//! host should perform (open a link, scroll to the top).

use crate::config::BookingConfig;
use crate::links::OutboundLink;

/// The four routed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Services,
    Gallery,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Services, Page::Gallery, Page::Contact];

    /// Route id, also accepted by the `render` command.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }

    /// Output file name in the generated site.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Services => "services.html",
            Self::Gallery => "gallery.html",
            Self::Contact => "contact.html",
        }
    }
}

/// A navigation entry: one of the pages, or the external map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Page(Page),
    Location,
}

impl NavTarget {
    /// Entries of the header and mobile menus, in display order.
    pub const MENU: [NavTarget; 5] = [
        NavTarget::Page(Page::Home),
        NavTarget::Page(Page::Services),
        NavTarget::Page(Page::Gallery),
        NavTarget::Page(Page::Contact),
        NavTarget::Location,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Page(page) => page.label(),
            Self::Location => "Location",
        }
    }
}

/// Scroll offset past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub page: Page,
    pub menu_open: bool,
    /// Selected a la carte category on the services page.
    pub active_tab: usize,
    /// Expanded FAQ entry, at most one.
    pub open_faq: Option<usize>,
    /// Header has scrolled past [`SCROLL_THRESHOLD`].
    pub scrolled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(NavTarget),
    ToggleMenu,
    SelectTab(usize),
    ToggleFaq(usize),
    /// Window scrolled to this vertical offset.
    Scrolled(u32),
    BookWhatsApp,
    BookEmail,
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Open(OutboundLink),
    ScrollToTop,
}

impl UiState {
    /// Initial state for a page, as served to a fresh visitor.
    pub fn on(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Compute the next state. Index bounds for tabs and FAQs are the
    /// caller's concern; see [`crate::session::Session::dispatch`].
    pub fn apply(self, action: Action, booking: &BookingConfig) -> (UiState, Vec<Effect>) {
        match action {
            Action::Navigate(NavTarget::Page(page)) => {
                let next = if page == self.page {
                    UiState {
                        menu_open: false,
                        ..self
                    }
                } else {
                    UiState {
                        page,
                        menu_open: false,
                        active_tab: 0,
                        open_faq: None,
                        ..self
                    }
                };
                (next, vec![Effect::ScrollToTop])
            }
            Action::Navigate(NavTarget::Location) => (
                UiState {
                    menu_open: false,
                    ..self
                },
                vec![Effect::Open(OutboundLink::map_search(booking))],
            ),
            Action::ToggleMenu => (
                UiState {
                    menu_open: !self.menu_open,
                    ..self
                },
                Vec::new(),
            ),
            Action::SelectTab(index) => (
                UiState {
                    active_tab: index,
                    ..self
                },
                Vec::new(),
            ),
            Action::ToggleFaq(index) => {
                let open_faq = if self.open_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
                (UiState { open_faq, ..self }, Vec::new())
            }
            Action::Scrolled(offset) => (
                UiState {
                    scrolled: offset > SCROLL_THRESHOLD,
                    ..self
                },
                Vec::new(),
            ),
            Action::BookWhatsApp => (
                self,
                vec![Effect::Open(OutboundLink::whatsapp(booking))],
            ),
            Action::BookEmail => (self, vec![Effect::Open(OutboundLink::mail(booking))]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: UiState, action: Action) -> (UiState, Vec<Effect>) {
        state.apply(action, &BookingConfig::default())
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = UiState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu_open);
        assert_eq!(state.active_tab, 0);
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn navigate_switches_page_closes_menu_and_scrolls() {
        let (state, _) = apply(UiState::default(), Action::ToggleMenu);
        let (state, effects) = apply(state, Action::Navigate(NavTarget::Page(Page::Gallery)));
        assert_eq!(state.page, Page::Gallery);
        assert!(!state.menu_open);
        assert_eq!(effects, vec![Effect::ScrollToTop]);
    }

    #[test]
    fn navigate_away_resets_page_local_state() {
        let state = UiState {
            page: Page::Services,
            active_tab: 3,
            open_faq: Some(1),
            ..UiState::default()
        };
        let (state, _) = apply(state, Action::Navigate(NavTarget::Page(Page::Contact)));
        assert_eq!(state.active_tab, 0);
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn navigate_to_same_page_keeps_page_local_state() {
        let state = UiState {
            page: Page::Services,
            active_tab: 2,
            ..UiState::default()
        };
        let (state, _) = apply(state, Action::Navigate(NavTarget::Page(Page::Services)));
        assert_eq!(state.active_tab, 2);
    }

    #[test]
    fn location_opens_map_without_changing_page() {
        let state = UiState {
            page: Page::Services,
            menu_open: true,
            ..UiState::default()
        };
        let (next, effects) = apply(state, Action::Navigate(NavTarget::Location));
        assert_eq!(next.page, Page::Services);
        assert!(!next.menu_open);
        assert_eq!(
            effects,
            vec![Effect::Open(OutboundLink::MapSearch(
                BookingConfig::default().map_search
            ))]
        );
    }

    #[test]
    fn toggle_menu_flips() {
        let (state, _) = apply(UiState::default(), Action::ToggleMenu);
        assert!(state.menu_open);
        let (state, _) = apply(state, Action::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn toggle_faq_opens_switches_and_closes() {
        let (state, _) = apply(UiState::on(Page::Services), Action::ToggleFaq(1));
        assert_eq!(state.open_faq, Some(1));
        let (state, _) = apply(state, Action::ToggleFaq(2));
        assert_eq!(state.open_faq, Some(2));
        let (state, _) = apply(state, Action::ToggleFaq(2));
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn scrolled_past_threshold() {
        let (state, _) = apply(UiState::default(), Action::Scrolled(50));
        assert!(!state.scrolled);
        let (state, _) = apply(state, Action::Scrolled(51));
        assert!(state.scrolled);
        let (state, _) = apply(state, Action::Scrolled(0));
        assert!(!state.scrolled);
    }

    #[test]
    fn booking_actions_emit_links() {
        let (_, effects) = apply(UiState::default(), Action::BookWhatsApp);
        assert_eq!(
            effects,
            vec![Effect::Open(OutboundLink::WhatsApp("1234567890".into()))]
        );
        let (_, effects) = apply(UiState::default(), Action::BookEmail);
        assert_eq!(
            effects,
            vec![Effect::Open(OutboundLink::Mail("hello@theparlour.com".into()))]
        );
    }

    #[test]
    fn page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
        assert_eq!(Page::from_id("location"), None);
    }
}
