//! # Parlour
//!
//! Site generator for The Parlour, a boutique beauty salon. Four pages
//! (home, services, gallery, contact) are rendered to static HTML, and a
//! small runtime models what a visitor sees while browsing: navigation, the
//! mobile menu, tabs, the FAQ and five slide carousels.
//!
//! # The Rotating Index Controller
//!
//! Every carousel on the site is the same state machine: a current index
//! over a fixed number of slides, with wraparound in both directions and
//! optional timed advance.
//!
//! ```text
//! carousel   pure index arithmetic (next, previous, jump_to, tick)
//! autoplay   owns one carousel plus its timer; cancel stops all updates
//! session    mounts a page's carousels and cancels them on navigation
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Index state machine with wraparound |
//! | [`autoplay`] | Timer-driven advance on tokio, cancellable with no stray ticks |
//! | [`session`] | Live view: UI state plus the mounted page's carousels |
//! | [`ui`] | Pages, navigation targets, UI actions and their effects |
//! | [`links`] | WhatsApp, email and map links, and where each one opens |
//! | [`content`] | Marketing copy, imagery and carousel definitions |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, CSS palette |
//! | [`generate`] | Maud templates and the static site build |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Carousels Are Scoped to Their Page
//!
//! A carousel's timer lives exactly as long as the page that shows it.
//! Leaving a page cancels its carousels before the next page mounts, and a
//! tick that races a cancel is discarded rather than applied. Returning to a
//! page starts its carousels again from the first slide.
//!
//! ## Static Output, Same Templates
//!
//! The build writes each page in its initial state. The same templates
//! render a [`session::Session`] at any point in time, so what a visitor
//! would see after a few seconds on the home page is one function call away.
//! In the browser, `carousel.js` drives the carousels using the JSON each
//! carousel root carries in `data-carousel`.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod content;
pub mod generate;
pub mod links;
pub mod output;
pub mod session;
pub mod ui;
