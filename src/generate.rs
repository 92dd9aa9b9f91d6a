//! HTML site generation.
//!
//! Renders the salon site with [maud](https://maud.lambda.xyz/). Every page is
//! a pure function of the site config, a [`UiState`] and the current slide
//! of each carousel, so the same templates serve both the static build
//! (each page in its initial state) and live [`crate::session::Session`]
//! rendering.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero rotator, offers, philosophy, ritual,
//!   expertise scroller, trends, director's note
//! - **Services** (`/services.html`): signature experiences, tabbed a la carte
//!   menu, standards, FAQ, testimonial rotator
//! - **Gallery** (`/gallery.html`): ambiance, client looks and offer carousels
//! - **Contact** (`/contact.html`): address, hours and booking cards
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── services.html
//! ├── gallery.html
//! ├── contact.html
//! ├── carousel.js          # Client-side carousels, tabs, FAQ, header
//! └── ...                  # Contents of the source assets/ directory
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (palette injected from config)
//! - `static/carousel.js`: Browser-side rotation with the same wraparound
//!   and teardown rules as [`crate::carousel`]
//!
//! Each carousel root carries its configuration as JSON in `data-carousel`
//! and its current slide in `data-index`.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, CarouselId, OfferFooter, Slide, image_url};
use crate::links::OutboundLink;
use crate::ui::{NavTarget, Page, UiState};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/carousel.js");

/// Source directory copied verbatim to the output root.
pub const ASSETS_DIR: &str = "assets";

/// Current slide of each carousel. Unset carousels are on their first slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlidePositions(HashMap<CarouselId, usize>);

impl SlidePositions {
    pub fn get(&self, id: CarouselId) -> usize {
        self.0.get(&id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: CarouselId, index: usize) {
        self.0.insert(id, index);
    }
}

/// What a build wrote, for CLI reporting.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub pages: Vec<Page>,
    /// Files copied from the assets directory.
    pub assets: usize,
}

/// Load `config.toml` from `source_dir` and build the site into `output_dir`.
pub fn generate(source_dir: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source_dir)?;
    generate_site(&config, source_dir, output_dir)
}

/// Build the site from an already-resolved config.
pub fn generate_site(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    for page in Page::ALL {
        let html = render_view(config, &UiState::on(page), &SlidePositions::default());
        let path = output_dir.join(page.file_name());
        fs::write(&path, html.into_string())?;
        info!(page = page.id(), path = %path.display(), "generated page");
        pages.push(page);
    }

    fs::write(output_dir.join("carousel.js"), JS)?;

    let assets = copy_assets(&source_dir.join(ASSETS_DIR), output_dir)?;
    if assets > 0 {
        info!(count = assets, "copied assets");
    }

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        pages,
        assets,
    })
}

fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dst = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Inline stylesheet: config palette followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC)
}

// ============================================================================
// Shell
// ============================================================================

/// Render a complete HTML document for `state`.
pub fn render_view(config: &SiteConfig, state: &UiState, positions: &SlidePositions) -> Markup {
    let title = match state.page {
        Page::Home => config.salon.name.clone(),
        page => format!("{} · {}", page.label(), config.salon.name),
    };

    let body = match state.page {
        Page::Home => home_page(config, positions),
        Page::Services => services_page(config, state, positions),
        Page::Gallery => gallery_page(config, positions),
        Page::Contact => contact_page(config),
    };

    let content = html! {
        (site_header(config, state))
        main class={ "page page-" (state.page.id()) } {
            (body)
        }
        (site_footer(config))
    };

    base_document(&title, &site_css(config), content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script src="carousel.js" defer {}
            }
        }
    }
}

fn flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

/// An `<a>` for an outbound link, opening where the link says it should.
fn outbound(link: &OutboundLink, class: &str, label: Markup) -> Markup {
    html! {
        a class=(class) href=(link.href()) target=[link.html_target()] rel=[link.html_rel()] {
            (label)
        }
    }
}

fn nav_link(config: &SiteConfig, target: NavTarget, current: Page) -> Markup {
    match target {
        NavTarget::Page(page) => html! {
            a.nav-link.current[page == current] href=(page.file_name()) { (page.label()) }
        },
        NavTarget::Location => outbound(
            &OutboundLink::map_search(&config.booking),
            "nav-link",
            html! { (target.label()) },
        ),
    }
}

/// Header with desktop nav and the checkbox-driven mobile menu.
fn site_header(config: &SiteConfig, state: &UiState) -> Markup {
    html! {
        header.site-header.scrolled[state.scrolled] {
            div.header-inner {
                a.brand href=(Page::Home.file_name()) { (config.salon.brand_mark()) }
                nav.site-nav {
                    @for target in NavTarget::MENU {
                        (nav_link(config, target, state.page))
                    }
                }
                input.nav-toggle type="checkbox" id="nav-toggle" checked[state.menu_open];
                label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.nav-panel {
                    @for target in NavTarget::MENU {
                        (nav_link(config, target, state.page))
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    let salon = &config.salon;
    html! {
        footer.site-footer {
            div.footer-grid {
                div {
                    h3.footer-brand { (salon.brand_mark()) }
                    p {
                        "Dedicated to the craft of hairdressing and the art of relaxation. "
                        "Est. " (salon.established) "."
                    }
                    div.social {
                        @for network in content::SOCIAL_NETWORKS {
                            a.social-link href="#" { (network) }
                        }
                    }
                }
                div {
                    h4 { "Visit Us" }
                    @for line in &salon.address {
                        p { (line) }
                    }
                    p { (salon.email) }
                }
                div {
                    h4 { "Hours" }
                    @for hours in &salon.hours {
                        p { span.hours-days { (hours.days) } " " (hours.time) }
                    }
                }
            }
            div.footer-bottom {
                p { "© " (salon.established) " " (salon.name) " Salon. All rights reserved." }
                p { "Designed with style." }
            }
        }
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// Booking call-to-action variants used at the bottom of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStyle {
    /// Dark band, WhatsApp and email (home).
    Luxury,
    /// Light band with pill buttons (services).
    Minimal,
    /// Photo backdrop, WhatsApp only (gallery).
    Image,
}

fn booking_cta(config: &SiteConfig, style: BookingStyle) -> Markup {
    let whatsapp = OutboundLink::whatsapp(&config.booking);
    let mail = OutboundLink::mail(&config.booking);

    match style {
        BookingStyle::Luxury => html! {
            section.cta.cta-luxury {
                h2 { "Ready for your transformation?" }
                p {
                    "Appointments are exclusively booked via direct message to ensure a "
                    "personalized experience from the very start."
                }
                div.cta-actions {
                    (outbound(&whatsapp, "btn btn-light", html! { "Book via WhatsApp" }))
                    (outbound(&mail, "btn btn-outline", html! { "Book via Email" }))
                }
            }
        },
        BookingStyle::Minimal => html! {
            section.cta.cta-minimal {
                span.kicker { "Secure Your Spot" }
                h2 { "Start Your Journey With Us" }
                div.cta-actions {
                    (outbound(&whatsapp, "btn btn-pill btn-whatsapp", html! { "WhatsApp" }))
                    (outbound(&mail, "btn btn-pill btn-dark", html! { "Email Us" }))
                }
            }
        },
        BookingStyle::Image => html! {
            section.cta.cta-image {
                img.cta-backdrop src=(image_url(content::BOOKING_BACKDROP, 2574)) alt="" loading="lazy";
                div.cta-body {
                    h2 { "Create Your Moment" }
                    p { "Let's craft the perfect look for you." }
                    div.cta-actions {
                        (outbound(&whatsapp, "btn btn-glass", html! { "Message on WhatsApp" }))
                    }
                }
            }
        },
    }
}

fn section_heading(kicker: Option<&str>, title: &str) -> Markup {
    html! {
        div.section-heading {
            @if let Some(kicker) = kicker {
                span.kicker { (kicker) }
            }
            h2 { (title) }
        }
    }
}

/// Carousel root carrying its rotation config for `carousel.js`.
fn carousel(
    config: &SiteConfig,
    id: CarouselId,
    positions: &SlidePositions,
    class: &str,
    slides: impl FnOnce(usize) -> Markup,
) -> Markup {
    let current = positions.get(id);
    let interval = id.interval_ms(&config.carousels);
    let settings = serde_json::json!({
        "length": id.slide_count(),
        "autoAdvance": interval.is_some(),
        "intervalMs": interval.unwrap_or(0),
    })
    .to_string();

    html! {
        div class={ "carousel " (class) } id={ "carousel-" (id.slug()) } data-carousel=(settings) data-index=(current) {
            (slides(current))
        }
    }
}

fn carousel_dots(len: usize, current: usize) -> Markup {
    html! {
        div.carousel-dots {
            @for i in 0..len {
                button.dot.active[i == current] type="button" data-slide=(i) aria-label={ "Show slide " (i + 1) } {}
            }
        }
    }
}

fn carousel_arrows() -> Markup {
    html! {
        div.carousel-arrows {
            button.carousel-arrow type="button" data-step="prev" aria-label="Previous" { "‹" }
            button.carousel-arrow type="button" data-step="next" aria-label="Next" { "›" }
        }
    }
}

/// Translated strip of slides; only the current one is in view.
fn slide_track(current: usize, slides: Markup) -> Markup {
    html! {
        div.carousel-track style={ "transform: translateX(-" (current * 100) "%)" } {
            (slides)
        }
    }
}

fn image_slides(slides: &[Slide], current: usize) -> Markup {
    slide_track(
        current,
        html! {
            @for (i, slide) in slides.iter().enumerate() {
                figure.slide.active[i == current] aria-hidden=(flag(i != current)) {
                    img src=(image_url(slide.image, 2574)) alt=(slide.title) loading="lazy";
                    figcaption {
                        h3 { (slide.title) }
                        p { (slide.subtitle) }
                    }
                }
            }
        },
    )
}

// ============================================================================
// Page Renderers
// ============================================================================

fn home_page(config: &SiteConfig, positions: &SlidePositions) -> Markup {
    let services = Page::Services.file_name();

    html! {
        div.hero-grid {
            (carousel(config, CarouselId::Hero, positions, "hero", |current| html! {
                @for (i, slide) in content::HERO_SLIDES.iter().enumerate() {
                    div.hero-slide.active[i == current] aria-hidden=(flag(i != current)) {
                        img src=(image_url(slide.image, 2574)) alt=(slide.title);
                        div.hero-overlay {
                            h2.hero-kicker { "Welcome to " (config.salon.name) }
                            h1.hero-title { (slide.title) }
                            p.hero-subtitle { (slide.subtitle) }
                            a.btn.btn-light href=(services) { "View Menu" }
                        }
                    }
                }
                (carousel_dots(content::HERO_SLIDES.len(), current))
            }))
            div.side-offers {
                @for offer in content::SIDE_OFFERS {
                    a.side-offer.dark[offer.dark] href=(services) {
                        img src=(image_url(offer.image, 2669)) alt="" loading="lazy";
                        div.side-offer-body {
                            h3.kicker { (offer.kicker) }
                            p.side-offer-headline { (offer.headline) }
                            p { (offer.blurb) }
                            @match offer.footer {
                                OfferFooter::Code(code) => {
                                    span.code { "CODE: " (code) }
                                }
                                OfferFooter::Prompt(prompt) => {
                                    span.prompt { (prompt) }
                                }
                            }
                        }
                    }
                }
            }
        }

        section.philosophy {
            h3 { "Our Philosophy" }
            p { (content::PHILOSOPHY) }
        }

        section.ritual {
            @for step in content::RITUAL {
                div.ritual-step {
                    h4 { (step.title) }
                    p { (step.text) }
                }
            }
        }

        section.expertise {
            div.section-heading {
                h3 { "Our Expertise" }
                p { "Discover our range of premium hair services." }
            }
            div.scroller id="expertise" {
                button.scroller-arrow type="button" data-scroll="left" aria-label="Scroll left" { "‹" }
                button.scroller-arrow type="button" data-scroll="right" aria-label="Scroll right" { "›" }
                div.scroller-track {
                    @for card in content::FEATURED_SERVICES {
                        a.service-card href=(services) {
                            img src=(image_url(card.image, 2670)) alt=(card.title) loading="lazy";
                            div.service-card-body {
                                h4 { (card.title) }
                                p { (card.description) }
                                span.explore { "Explore →" }
                            }
                        }
                    }
                }
            }
        }

        section.trends {
            div.trends-header {
                (section_heading(Some("The Edit"), "Trending Now"))
                a.link-underline href=(Page::Gallery.file_name()) { "View Gallery →" }
            }
            div.trends-grid {
                @for trend in content::TRENDS {
                    article.trend {
                        img src=(image_url(trend.image, 2670)) alt=(trend.title) loading="lazy";
                        span.kicker { (trend.category) }
                        h4 { (trend.title) }
                        p { (trend.blurb) }
                    }
                }
            }
        }

        section.director {
            img src=(image_url(content::DIRECTOR.image, 2678)) alt="Director" loading="lazy";
            div.director-note {
                h3 { (content::DIRECTOR.headline) }
                p { (content::DIRECTOR.body) }
                span.signature { (content::DIRECTOR.signature) }
            }
        }

        (booking_cta(config, BookingStyle::Luxury))
    }
}

fn services_page(config: &SiteConfig, state: &UiState, positions: &SlidePositions) -> Markup {
    html! {
        header.page-header {
            h1 { "Service Menu" }
            p {
                "Curated treatments designed to enhance your natural beauty. We invite you to "
                "explore our comprehensive menu of services, each performed with precision and care."
            }
        }

        section.signatures {
            (section_heading(Some("Curated For You"), "Signature Experiences"))
            div.signature-grid {
                @for sig in content::SIGNATURES {
                    article.signature {
                        div.signature-image {
                            img src=(image_url(sig.image, 2574)) alt=(sig.title) loading="lazy";
                            span.badge { "Top Pick" }
                        }
                        h3 { (sig.title) }
                        div.price { (sig.price) }
                        p { (sig.description) }
                    }
                }
            }
        }

        section.menu {
            (section_heading(None, "A La Carte Menu"))
            div.tabs id="service-tabs" {
                div.tab-list role="tablist" {
                    @for (i, category) in content::CATEGORIES.iter().enumerate() {
                        button.tab.active[i == state.active_tab] type="button" role="tab" data-tab=(i) aria-selected=(flag(i == state.active_tab)) {
                            (category.title)
                        }
                    }
                }
                @for (i, category) in content::CATEGORIES.iter().enumerate() {
                    div.tab-panel role="tabpanel" data-panel=(i) hidden[i != state.active_tab] {
                        div.tab-image {
                            img src=(image_url(category.image, 2684)) alt=(category.title) loading="lazy";
                            h2 { (category.title) }
                        }
                        div.service-list {
                            @for service in category.services {
                                div.service-item {
                                    div.service-line {
                                        h3 { (service.name) }
                                        span.price { (service.price) }
                                    }
                                    p { (service.description) }
                                }
                            }
                            p.note { "Consultations are complimentary. Prices may vary by stylist." }
                        }
                    }
                }
            }
        }

        section.standards {
            div {
                (section_heading(Some("Why Choose Us"), "Our Standard of Excellence"))
                @for standard in content::STANDARDS {
                    div.standard {
                        h4 { (standard.title) }
                        p { (standard.text) }
                    }
                }
            }
            img src=(image_url(content::STANDARDS_IMAGE, 2811)) alt="Salon Interior" loading="lazy";
        }

        section.faq {
            (section_heading(None, "Frequently Asked Questions"))
            div.faq-list id="faq" {
                @for (i, faq) in content::FAQS.iter().enumerate() {
                    details.faq-item open[state.open_faq == Some(i)] data-faq=(i) {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
        }

        section.testimonials {
            div.section-heading {
                h2 { "Client Love" }
                div.stars aria-label="5 stars" { "★★★★★" }
            }
            (carousel(config, CarouselId::Testimonials, positions, "testimonial-card", |current| html! {
                @for (i, review) in content::REVIEWS.iter().enumerate() {
                    div.review.active[i == current] aria-hidden=(flag(i != current)) {
                        blockquote { "\"" (review.text) "\"" }
                        cite {
                            span.author { (review.author) }
                            span.role { (review.role) }
                        }
                    }
                }
                (carousel_dots(content::REVIEWS.len(), current))
            }))
        }

        (booking_cta(config, BookingStyle::Minimal))
    }
}

fn gallery_page(config: &SiteConfig, positions: &SlidePositions) -> Markup {
    html! {
        header.page-header {
            h1 { "The Gallery" }
            p {
                "Step into our world. A visual journey through our luxurious sanctuary, our "
                "premium services, and the beautiful women we are privileged to serve."
            }
        }

        section.gallery-section {
            (section_heading(Some("Our Atmosphere"), "The Sanctuary & Services"))
            p.lead {
                "Immerse yourself in an atmosphere of tranquility and luxury. From our sun-drenched "
                "lounge to our private spa suites, every corner is meticulously designed for your "
                "relaxation. Experience the art of beauty in a space that feels like a retreat from the city."
            }
            (carousel(config, CarouselId::Ambiance, positions, "image-carousel", |current| html! {
                (image_slides(content::AMBIANCE_SLIDES, current))
                (carousel_arrows())
                (carousel_dots(content::AMBIANCE_SLIDES.len(), current))
            }))
        }

        section.gallery-section.align-end {
            (section_heading(Some("Client Diaries"), "Real Transformations"))
            p.lead {
                "The true measure of our craft is the smile of a satisfied client. Witness the "
                "artistry of our stylists through these real transformations. Whether it's a bold "
                "new color or a subtle refinement, we unlock the confidence and radiance in every woman."
            }
            (carousel(config, CarouselId::ClientLooks, positions, "image-carousel", |current| html! {
                (image_slides(content::CLIENT_SLIDES, current))
                (carousel_arrows())
                (carousel_dots(content::CLIENT_SLIDES.len(), current))
            }))
        }

        section.gallery-section.offers {
            div.section-heading {
                h2 { "Current Exclusives" }
                p { "Limited time opportunities to treat yourself." }
            }
            (carousel(config, CarouselId::Offers, positions, "offer-carousel", |current| html! {
                (slide_track(current, html! {
                    @for (i, offer) in content::OFFER_SLIDES.iter().enumerate() {
                        div.slide.offer-slide.active[i == current] aria-hidden=(flag(i != current)) {
                            img src=(image_url(offer.image, 2684)) alt="" loading="lazy";
                            div.offer-card {
                                span.badge { "Special Offer" }
                                h3 { (offer.title) }
                                p { (offer.description) }
                                div.code { "CODE: " (offer.code) }
                            }
                        }
                    }
                }))
                (carousel_arrows())
            }))
        }

        (booking_cta(config, BookingStyle::Image))
    }
}

fn contact_page(config: &SiteConfig) -> Markup {
    let salon = &config.salon;
    let whatsapp = OutboundLink::whatsapp(&config.booking);
    let mail = OutboundLink::mail(&config.booking);

    html! {
        div.contact-grid {
            div.contact-info {
                h1 { "Get in Touch" }
                p.lead { "We'd love to hear from you. Book an appointment, ask a question, or just say hello." }
                dl {
                    dt { "Location" }
                    dd {
                        @for (i, line) in salon.address.iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                    dt { "Phone" }
                    dd { (salon.phone) }
                    dt { "Email" }
                    dd { (salon.email) }
                    dt { "Hours" }
                    dd {
                        @for (i, hours) in salon.hours.iter().enumerate() {
                            @if i > 0 { br; }
                            (hours.days) ": " (hours.time)
                        }
                    }
                }
            }
            div.contact-booking {
                h3 { "Book Your Appointment" }
                p { "We handle all our bookings directly to provide you with the best personal service." }
                (outbound(&whatsapp, "booking-card booking-whatsapp", html! {
                    h4 { "WhatsApp Us" }
                    p { "Instant response for quick bookings." }
                }))
                (outbound(&mail, "booking-card booking-email", html! {
                    h4 { "Email Us" }
                    p { "Perfect for detailed inquiries." }
                }))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
