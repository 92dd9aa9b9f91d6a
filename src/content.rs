//! Marketing copy and imagery for every page.
//!
//! Everything here is fixed display data. Business details that change per
//! deployment (address, phone, booking targets) come from
//! [`crate::config::SiteConfig`] instead.
//!
//! The five carousels on the site are identified by [`CarouselId`], which
//! ties each one to its page, its slide count and its timing.

use crate::carousel::{Carousel, CarouselError};
use crate::config::CarouselsConfig;
use crate::ui::Page;

/// Build the full stock-image URL for an Unsplash photo id.
pub fn image_url(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w={width}&auto=format&fit=crop")
}

/// Footer social links, by network name.
pub const SOCIAL_NETWORKS: &[&str] = &["Instagram", "Facebook", "Twitter"];

// ============================================================================
// Carousels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    /// Home page hero rotator (auto-advancing).
    Hero,
    /// Services page "Client Love" rotator (auto-advancing).
    Testimonials,
    /// Gallery "The Sanctuary & Services" images (arrows only).
    Ambiance,
    /// Gallery "Real Transformations" images (arrows only).
    ClientLooks,
    /// Gallery "Current Exclusives" offers (arrows only).
    Offers,
}

impl CarouselId {
    pub const ALL: [CarouselId; 5] = [
        CarouselId::Hero,
        CarouselId::Testimonials,
        CarouselId::Ambiance,
        CarouselId::ClientLooks,
        CarouselId::Offers,
    ];

    /// Name used in the CLI and in HTML `id` attributes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Testimonials => "testimonials",
            Self::Ambiance => "ambiance",
            Self::ClientLooks => "client-looks",
            Self::Offers => "offers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// The page this carousel is mounted with.
    pub fn page(self) -> Page {
        match self {
            Self::Hero => Page::Home,
            Self::Testimonials => Page::Services,
            Self::Ambiance | Self::ClientLooks | Self::Offers => Page::Gallery,
        }
    }

    pub fn slide_count(self) -> usize {
        match self {
            Self::Hero => HERO_SLIDES.len(),
            Self::Testimonials => REVIEWS.len(),
            Self::Ambiance => AMBIANCE_SLIDES.len(),
            Self::ClientLooks => CLIENT_SLIDES.len(),
            Self::Offers => OFFER_SLIDES.len(),
        }
    }

    /// Display titles of each slide, in order.
    pub fn slide_titles(self) -> Vec<&'static str> {
        match self {
            Self::Hero => HERO_SLIDES.iter().map(|s| s.title).collect(),
            Self::Testimonials => REVIEWS.iter().map(|r| r.author).collect(),
            Self::Ambiance => AMBIANCE_SLIDES.iter().map(|s| s.title).collect(),
            Self::ClientLooks => CLIENT_SLIDES.iter().map(|s| s.title).collect(),
            Self::Offers => OFFER_SLIDES.iter().map(|s| s.title).collect(),
        }
    }

    /// Auto-advance interval, or `None` for arrow-only carousels.
    pub fn interval_ms(self, config: &CarouselsConfig) -> Option<u64> {
        match self {
            Self::Hero => Some(config.hero_interval_ms),
            Self::Testimonials => Some(config.testimonial_interval_ms),
            Self::Ambiance | Self::ClientLooks | Self::Offers => None,
        }
    }

    /// Fresh rotation state for this carousel, positioned on the first slide.
    pub fn carousel(self, config: &CarouselsConfig) -> Result<Carousel, CarouselError> {
        match self.interval_ms(config) {
            Some(ms) => Carousel::new(self.slide_count(), true, ms),
            None => Carousel::manual(self.slide_count()),
        }
    }

    /// Carousels mounted together with `page`, in render order.
    pub fn on_page(page: Page) -> impl Iterator<Item = CarouselId> {
        Self::ALL.into_iter().filter(move |id| id.page() == page)
    }
}

// ============================================================================
// Home
// ============================================================================

/// Stock photos are stored as Unsplash photo ids; see [`image_url`].
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        image: "photo-1633681926022-84c23e8cb2d6",
        title: "Effortless Beauty",
        subtitle: "For the modern woman.",
    },
    Slide {
        image: "photo-1560066984-12186d30e9d7",
        title: "Expert Styling",
        subtitle: "Find your signature look.",
    },
    Slide {
        image: "photo-1522337660859-02fbefca4702",
        title: "Luxury Spa",
        subtitle: "Relax. Rejuvenate. Refresh.",
    },
];

/// What sits at the bottom of a side offer card.
#[derive(Debug, Clone, Copy)]
pub enum OfferFooter {
    Code(&'static str),
    Prompt(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct SideOffer {
    pub image: &'static str,
    pub kicker: &'static str,
    pub headline: &'static str,
    pub blurb: &'static str,
    pub footer: OfferFooter,
    /// Dark card on light text, or the reverse.
    pub dark: bool,
}

pub const SIDE_OFFERS: &[SideOffer] = &[
    SideOffer {
        image: "photo-1562322140-8baeececf3df",
        kicker: "First Time Visit?",
        headline: "Get 20% Off",
        blurb: "On your first haircut or color service.",
        footer: OfferFooter::Code("NEW20"),
        dark: true,
    },
    SideOffer {
        image: "photo-1519699047748-40ba526a6f78",
        kicker: "Bridal Season",
        headline: "Book Early",
        blurb: "Secure your date for 2024 weddings now.",
        footer: OfferFooter::Prompt("Inquire Now"),
        dark: false,
    },
];

pub const PHILOSOPHY: &str = "We believe that a salon visit is a sacred ritual of self-care. \
It is a pause in your busy life, and a chance to feel empowered and radiant. \
Our stylists are artists, dedicated to enhancing your unique feminine style.";

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

pub const RITUAL: &[Feature] = &[
    Feature {
        title: "Connect",
        text: "Every appointment begins with a one-on-one consultation to understand your lifestyle, hair type, and personal aesthetic.",
    },
    Feature {
        title: "Unwind",
        text: "Sink into our chairs and enjoy a signature scalp massage and premium refreshments while we work our magic.",
    },
    Feature {
        title: "Reveal",
        text: "Walk out feeling refreshed, confident, and equipped with the knowledge to maintain your new look at home.",
    },
];

/// Card in the home page "Our Expertise" scroller.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURED_SERVICES: &[Card] = &[
    Card {
        image: "photo-1616394584738-fc6e612e71b9",
        title: "Skin Services",
        description: "Rejuvenating facials and advanced skincare treatments for a radiant, healthy glow.",
    },
    Card {
        image: "photo-1604654894610-df63bc536371",
        title: "Nail Services",
        description: "Luxury manicures and pedicures featuring premium polish and intricate nail art.",
    },
    Card {
        image: "photo-1487412720507-e7ab37603c6f",
        title: "Bridal Makeup",
        description: "Flawless, long-lasting makeup application tailored specifically for your special day.",
    },
    Card {
        image: "photo-1562322140-8baeececf3df",
        title: "Hair Styling",
        description: "From precision cuts to bespoke coloring, our experts completely transform your look.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Trend {
    pub image: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const TRENDS: &[Trend] = &[
    Trend {
        image: "photo-1519014816548-bf5fe059e98b",
        category: "Hair Health",
        title: "The Glass Hair Trend",
        blurb: "Achieving that impossible mirror-like shine is easier than you think with our new keratin treatments.",
    },
    Trend {
        image: "photo-1616394584738-fc6e612e71b9",
        category: "Skincare",
        title: "The Sustainable Glow",
        blurb: "Why we're switching to 100% plant-based facial oils for that dewy, natural summer look.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub image: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
    pub signature: &'static str,
}

pub const DIRECTOR: Quote = Quote {
    image: "photo-1595476108010-b4d1f102b1b1",
    headline: "\"We don't just change how you look. We change how you feel.\"",
    body: "Beauty is deeply personal. It's about finding that balance between what's trending and what feels authentically you. My team and I are here to guide you on that journey.",
    signature: "Elena Voss, Creative Director",
};

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub image: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub const SIGNATURES: &[Signature] = &[
    Signature {
        image: "photo-1560066984-12186d30e9d7",
        title: "The Executive Escape",
        price: "$145",
        description: "Perfect for the busy professional. Includes a blowout, gel manicure, and express facial in under 90 minutes.",
    },
    Signature {
        image: "photo-1469334031218-e382a71b716b",
        title: "Bridal Radiance",
        price: "$350",
        description: "A trial run for hair and makeup plus a deep conditioning treatment to prep your locks for the big day.",
    },
    Signature {
        image: "photo-1544161515-4ab6ce6db874",
        title: "The Weekend Reboot",
        price: "$210",
        description: "Recharge with a full body aromatherapy massage followed by our signature scalp spa ritual.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

/// One tab of the a la carte menu.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub title: &'static str,
    pub image: &'static str,
    pub services: &'static [Service],
}

const fn service(name: &'static str, price: &'static str, description: &'static str) -> Service {
    Service {
        name,
        price,
        description,
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        title: "Hair Services",
        image: "photo-1560869713-7d0a29430803",
        services: &[
            service("Haircut & Style", "$45-75", "Professional haircuts tailored to your face shape and style preferences."),
            service("Hair Coloring", "$80-150", "Vibrant hair color treatments with expert application."),
            service("Hair Smoothening", "$100-200", "Keratin treatments for smooth, shiny, healthy hair."),
            service("Hair Spa", "$60-100", "Deep conditioning and rejuvenating hair spa treatments."),
        ],
    },
    Category {
        title: "Skin Care",
        image: "photo-1616394584738-fc6e612e71b9",
        services: &[
            service("Facial Treatment", "$65-120", "Customized facials tailored to your unique skin type."),
            service("Deep Cleansing", "$55-95", "Professional deep cleansing and pore treatment."),
            service("Skin Rejuvenation", "$100-180", "Advanced treatments to restore skin's natural glow."),
            service("Chemical Peel", "$75-150", "Safe and effective skin resurfacing treatment."),
        ],
    },
    Category {
        title: "Nail Care",
        image: "photo-1604654894610-df63bc536371",
        services: &[
            service("Manicure", "$30-50", "Classic or gel manicure with complete nail care."),
            service("Pedicure", "$35-60", "Relaxing pedicure with foot massage and care."),
            service("Nail Art", "$40-80", "Creative and artistic nail design services."),
            service("Nail Extension", "$50-100", "Professional nail extensions with various styles."),
        ],
    },
    Category {
        title: "Makeup Services",
        image: "photo-1487412720507-e7ab37603c6f",
        services: &[
            service("Party Makeup", "$50-100", "Glamorous makeup for parties and special events."),
            service("Bridal Makeup", "$150-300", "Comprehensive bridal makeup package for your special day."),
            service("Makeup Tutorial", "$60-90", "Professional makeup tips and application training."),
            service("SFX Makeup", "$80-200", "Special effects makeup for events and productions."),
        ],
    },
    Category {
        title: "Spa & Wellness",
        image: "photo-1544161515-4ab6ce6db874",
        services: &[
            service("Body Massage", "$70-120", "Relaxing full body massage therapy."),
            service("Aromatherapy", "$80-130", "Therapeutic massage with essential oils."),
            service("Facial Massage", "$45-75", "Rejuvenating facial and neck massage."),
            service("Sauna Session", "$25-40", "Relaxing sauna experience for detox and wellness."),
        ],
    },
    Category {
        title: "Bridal Packages",
        image: "photo-1469334031218-e382a71b716b",
        services: &[
            service("Full Bridal Package", "$500-1000", "Complete bridal preparation with all services included."),
            service("Pre-Wedding Package", "$300-600", "Multi-session preparation leading up to the wedding."),
            service("Bridal Party Package", "$400-800", "Makeup and styling for the entire bridal party."),
            service("Reception Touch-up", "$100-200", "Professional touch-ups throughout the day."),
        ],
    },
];

pub const STANDARDS: &[Feature] = &[
    Feature {
        title: "Organic & Sustainable",
        text: "We carefully select products that are kind to you and the planet. No harsh chemicals, just pure, effective ingredients.",
    },
    Feature {
        title: "Hygiene First",
        text: "We adhere to hospital-grade sanitation protocols. Your safety and comfort are our absolute priority.",
    },
    Feature {
        title: "Expert Artists",
        text: "Our team undergoes continuous advanced training to stay ahead of trends and techniques.",
    },
];

pub const STANDARDS_IMAGE: &str = "photo-1527799820374-dcf8d9d4a388";

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do I need to book a consultation first?",
        answer: "For color corrections and bridal services, a consultation is required. For cuts and basic styling, you can book directly.",
    },
    Faq {
        question: "What brands do you use?",
        answer: "We exclusively use Oribe, Kevin Murphy, and sustainable organic lines for our skincare treatments.",
    },
    Faq {
        question: "What is your cancellation policy?",
        answer: "We ask for 24 hours notice for all cancellations. Late cancellations may be subject to a 50% service fee.",
    },
    Faq {
        question: "Do you offer group bookings?",
        answer: "Yes! We love hosting bridal parties and girls' days out. Please email us to coordinate large groups.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        text: "The only place I trust with my hair. The atmosphere is calming, the coffee is great, and the cut is always perfect.",
        author: "Sarah J. Miller",
        role: "Loyal Client",
    },
    Review {
        text: "I booked the bridal package for my big day and felt absolutely radiant. The team is so professional and kind.",
        author: "Emily R. Chen",
        role: "Bride",
    },
    Review {
        text: "Best facial I've had in the city. My skin was glowing for weeks afterwards. Highly recommend the rejuvenation treatment.",
        author: "Jessica T.",
        role: "Skincare Enthusiast",
    },
];

// ============================================================================
// Gallery
// ============================================================================

pub const AMBIANCE_SLIDES: &[Slide] = &[
    Slide {
        image: "photo-1633681926022-84c23e8cb2d6",
        title: "The Sanctuary",
        subtitle: "A modern oasis designed for your ultimate relaxation.",
    },
    Slide {
        image: "photo-1560066984-12186d30e9d7",
        title: "Artistry in Motion",
        subtitle: "Watch our master stylists craft your perfect look.",
    },
    Slide {
        image: "photo-1554519934-e32b1629d9ee",
        title: "Premium Care",
        subtitle: "We use only the finest organic treatments for your hair and skin.",
    },
    Slide {
        image: "photo-1522337360788-8b13dee7a37e",
        title: "Spa Suites",
        subtitle: "Private rooms for facials and therapeutic massages.",
    },
];

pub const CLIENT_SLIDES: &[Slide] = &[
    Slide {
        image: "photo-1580618672591-eb180b1a973f",
        title: "Blonde Ambition",
        subtitle: "A stunning balayage transformation.",
    },
    Slide {
        image: "photo-1487412720507-e7ab37603c6f",
        title: "Bridal Elegance",
        subtitle: "Timeless makeup for the perfect day.",
    },
    Slide {
        image: "photo-1519699047748-40ba526a6f78",
        title: "Rich Brunette",
        subtitle: "Deep gloss and volume treatments.",
    },
    Slide {
        image: "photo-1492106087820-71f171ce71d0",
        title: "Sun-Kissed Glow",
        subtitle: "Natural highlights and soft waves.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct OfferSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub const OFFER_SLIDES: &[OfferSlide] = &[
    OfferSlide {
        image: "photo-1560869713-7d0a29430803",
        title: "New Client Special",
        description: "Enjoy 20% off your first cut and color service.",
        code: "WELCOME20",
    },
    OfferSlide {
        image: "photo-1580618672591-eb180b1a973f",
        title: "Refer a Friend",
        description: "Both you and your friend receive a complimentary deep conditioning treatment.",
        code: "FRIENDSHIP",
    },
    OfferSlide {
        image: "photo-1492106087820-71f171ce71d0",
        title: "Spring Refresh",
        description: "Book a balayage package and get a free gloss upgrade.",
        code: "SPRINGGLOW",
    },
];

pub const BOOKING_BACKDROP: &str = "photo-1521590832169-7dad1a9b708c";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_carousel_has_slides() {
        for id in CarouselId::ALL {
            assert!(id.slide_count() >= 1, "{:?}", id);
            assert_eq!(id.slide_titles().len(), id.slide_count());
        }
    }

    #[test]
    fn slugs_round_trip() {
        for id in CarouselId::ALL {
            assert_eq!(CarouselId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(CarouselId::from_slug("carousel"), None);
    }

    #[test]
    fn rotators_auto_advance_and_gallery_is_manual() {
        let config = CarouselsConfig::default();
        let hero = CarouselId::Hero.carousel(&config).unwrap();
        assert!(hero.auto_advance());
        assert_eq!(hero.interval_ms(), 5000);
        assert_eq!(hero.len(), 3);

        let reviews = CarouselId::Testimonials.carousel(&config).unwrap();
        assert_eq!(reviews.interval_ms(), 6000);

        for id in [CarouselId::Ambiance, CarouselId::ClientLooks, CarouselId::Offers] {
            assert!(!id.carousel(&config).unwrap().auto_advance());
        }
    }

    #[test]
    fn carousels_grouped_by_page() {
        assert_eq!(CarouselId::on_page(Page::Home).collect::<Vec<_>>(), vec![CarouselId::Hero]);
        assert_eq!(
            CarouselId::on_page(Page::Gallery).collect::<Vec<_>>(),
            vec![CarouselId::Ambiance, CarouselId::ClientLooks, CarouselId::Offers]
        );
        assert_eq!(CarouselId::on_page(Page::Contact).count(), 0);
    }

    #[test]
    fn every_category_lists_four_services() {
        assert_eq!(CATEGORIES.len(), 6);
        for cat in CATEGORIES {
            assert_eq!(cat.services.len(), 4, "{}", cat.title);
        }
    }

    #[test]
    fn image_url_builds_unsplash_link() {
        assert_eq!(
            image_url("photo-1", 800),
            "https://images.unsplash.com/photo-1?q=80&w=800&auto=format&fit=crop"
        );
    }
}
