//! A visitor's view of the site: UI state plus the mounted page's carousels.
//!
//! Carousels live exactly as long as their page is showing. Navigating to a
//! different page cancels every carousel of the old page before the new
//! page's carousels are mounted, so no timer outlives the view that owns
//! it. Navigating to the page already showing keeps everything as is. If
//! the new page's carousels cannot be built, the old page stays mounted.

use crate::autoplay::AutoCarousel;
use crate::carousel::{Carousel, CarouselError};
use crate::config::SiteConfig;
use crate::content::{CATEGORIES, CarouselId, FAQS};
use crate::generate::{SlidePositions, render_view};
use crate::ui::{Action, Effect, Page, UiState};
use maud::Markup;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    #[error("Tab {index} out of range ({count} categories)")]
    TabOutOfRange { index: usize, count: usize },
    #[error("FAQ {index} out of range ({count} questions)")]
    FaqOutOfRange { index: usize, count: usize },
    #[error("Carousel '{0}' is not mounted on the current page")]
    NotMounted(&'static str),
}

#[derive(Debug)]
pub struct Session {
    config: SiteConfig,
    state: UiState,
    mounted: Vec<(CarouselId, AutoCarousel)>,
}

impl Session {
    /// Open a session on `page` and mount its carousels.
    ///
    /// Pages with auto-advancing carousels must be opened inside a tokio
    /// runtime.
    pub fn open(config: SiteConfig, page: Page) -> Result<Self, SessionError> {
        let mounted = start(prepare(&config, page)?);
        Ok(Self {
            config,
            state: UiState::on(page),
            mounted,
        })
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The mounted carousel `id`, for arrows, dots and subscriptions.
    pub fn carousel(&self, id: CarouselId) -> Result<&AutoCarousel, SessionError> {
        self.mounted
            .iter()
            .find(|(mounted, _)| *mounted == id)
            .map(|(_, carousel)| carousel)
            .ok_or(SessionError::NotMounted(id.slug()))
    }

    pub fn mounted(&self) -> impl Iterator<Item = CarouselId> + '_ {
        self.mounted.iter().map(|(id, _)| *id)
    }

    /// Apply a UI action. Page changes remount carousels; the returned
    /// effects are for the host to carry out.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>, SessionError> {
        match action {
            Action::SelectTab(index) if index >= CATEGORIES.len() => {
                return Err(SessionError::TabOutOfRange {
                    index,
                    count: CATEGORIES.len(),
                });
            }
            Action::ToggleFaq(index) if index >= FAQS.len() => {
                return Err(SessionError::FaqOutOfRange {
                    index,
                    count: FAQS.len(),
                });
            }
            _ => {}
        }

        let (next, effects) = self.state.apply(action, &self.config.booking);
        if next.page != self.state.page {
            // Build the new page's carousels before tearing down the old
            // ones, so a failure leaves the current page mounted.
            let carousels = prepare(&self.config, next.page)?;
            self.unmount();
            self.mounted = start(carousels);
        }
        self.state = next;
        Ok(effects)
    }

    /// Current slide of every mounted carousel.
    pub fn positions(&self) -> SlidePositions {
        let mut positions = SlidePositions::default();
        for (id, carousel) in &self.mounted {
            positions.set(*id, carousel.current());
        }
        positions
    }

    /// Render the current state, with live carousel positions.
    pub fn render(&self) -> Markup {
        render_view(&self.config, &self.state, &self.positions())
    }

    fn unmount(&mut self) {
        for (id, carousel) in self.mounted.drain(..) {
            carousel.cancel();
            debug!(carousel = id.slug(), "unmounted");
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Fresh rotation state for every carousel of `page`, not yet running.
fn prepare(
    config: &SiteConfig,
    page: Page,
) -> Result<Vec<(CarouselId, Carousel)>, CarouselError> {
    CarouselId::on_page(page)
        .map(|id| {
            let carousel = id.carousel(&config.carousels).inspect_err(|e| {
                warn!(carousel = id.slug(), error = %e, "cannot mount carousel");
            })?;
            Ok((id, carousel))
        })
        .collect()
}

fn start(carousels: Vec<(CarouselId, Carousel)>) -> Vec<(CarouselId, AutoCarousel)> {
    carousels
        .into_iter()
        .map(|(id, carousel)| {
            debug!(carousel = id.slug(), page = id.page().id(), "mounted");
            (id, AutoCarousel::start(carousel))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::OutboundLink;
    use crate::ui::NavTarget;
    use std::time::Duration;
    use tokio::time::sleep;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn goto(page: Page) -> Action {
        Action::Navigate(NavTarget::Page(page))
    }

    #[tokio::test(start_paused = true)]
    async fn home_mounts_hero_rotator() {
        let session = Session::open(SiteConfig::default(), Page::Home).unwrap();
        assert_eq!(session.mounted().collect::<Vec<_>>(), vec![CarouselId::Hero]);

        sleep(ms(5_100)).await;
        assert_eq!(session.carousel(CarouselId::Hero).unwrap().current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn navigating_away_cancels_old_carousels() {
        let mut session = Session::open(SiteConfig::default(), Page::Home).unwrap();
        let hero = session.carousel(CarouselId::Hero).unwrap().subscribe();

        sleep(ms(5_100)).await;
        assert_eq!(*hero.borrow(), 1);

        session.dispatch(goto(Page::Services)).unwrap();
        assert_eq!(
            session.carousel(CarouselId::Hero).unwrap_err(),
            SessionError::NotMounted("hero")
        );

        sleep(ms(30_500)).await;
        assert_eq!(*hero.borrow(), 1);
        // mounted at t = 5100, the testimonials rotator has ticked 5 times: 5 mod 3 = 2
        assert_eq!(
            session.carousel(CarouselId::Testimonials).unwrap().current(),
            2
        );
    }

    #[tokio::test(start_paused = true)]
    async fn returning_to_a_page_starts_fresh() {
        let mut session = Session::open(SiteConfig::default(), Page::Home).unwrap();
        sleep(ms(10_100)).await;
        assert_eq!(session.carousel(CarouselId::Hero).unwrap().current(), 2);

        session.dispatch(goto(Page::Contact)).unwrap();
        assert_eq!(session.mounted().count(), 0);
        session.dispatch(goto(Page::Home)).unwrap();
        assert_eq!(session.carousel(CarouselId::Hero).unwrap().current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn same_page_navigation_keeps_carousels() {
        let mut session = Session::open(SiteConfig::default(), Page::Home).unwrap();
        sleep(ms(5_100)).await;
        session.dispatch(goto(Page::Home)).unwrap();
        assert_eq!(session.carousel(CarouselId::Hero).unwrap().current(), 1);
    }

    #[test]
    fn gallery_carousels_are_manual() {
        let session = Session::open(SiteConfig::default(), Page::Gallery).unwrap();
        let offers = session.carousel(CarouselId::Offers).unwrap();
        assert_eq!(offers.previous(), Ok(2));
        assert_eq!(session.positions().get(CarouselId::Offers), 2);
        assert_eq!(session.positions().get(CarouselId::Ambiance), 0);
    }

    #[test]
    fn tab_and_faq_bounds_are_checked() {
        let mut session = Session::open(SiteConfig::default(), Page::Contact).unwrap();
        session.dispatch(Action::SelectTab(5)).unwrap();
        assert_eq!(session.state().active_tab, 5);
        assert_eq!(
            session.dispatch(Action::SelectTab(6)),
            Err(SessionError::TabOutOfRange { index: 6, count: 6 })
        );
        assert_eq!(session.state().active_tab, 5);
        assert_eq!(
            session.dispatch(Action::ToggleFaq(4)),
            Err(SessionError::FaqOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn location_is_an_effect_not_a_page() {
        let mut session = Session::open(SiteConfig::default(), Page::Contact).unwrap();
        let effects = session
            .dispatch(Action::Navigate(NavTarget::Location))
            .unwrap();
        assert_eq!(session.state().page, Page::Contact);
        assert!(matches!(
            effects.as_slice(),
            [crate::ui::Effect::Open(OutboundLink::MapSearch(_))]
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_navigation_keeps_current_page_mounted() {
        let mut config = SiteConfig::default();
        config.carousels.testimonial_interval_ms = 0;
        let mut session = Session::open(config, Page::Home).unwrap();
        sleep(ms(5_100)).await;

        let err = session.dispatch(goto(Page::Services)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Carousel(CarouselError::InvalidConfig(_))
        ));
        assert_eq!(session.state().page, Page::Home);

        let hero = session.carousel(CarouselId::Hero).unwrap();
        assert!(hero.is_live());
        assert_eq!(hero.current(), 1);
        sleep(ms(5_000)).await;
        assert_eq!(hero.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn render_reflects_live_positions() {
        let session = Session::open(SiteConfig::default(), Page::Home).unwrap();
        sleep(ms(5_100)).await;
        let html = session.render().into_string();
        assert!(html.contains(r#"data-index="1""#));
    }
}
