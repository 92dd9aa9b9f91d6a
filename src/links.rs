//! Outbound booking and location links.
//!
//! The site never talks to a backend. Booking means handing the visitor off
//! to WhatsApp or their mail client, and "Location" opens a map search.
//! These are fire-and-forget: nothing is awaited and nothing is reported if
//! the browser cannot handle the scheme.

use crate::config::BookingConfig;

/// Where the browser should open a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A new tab or window (`target="_blank"`).
    NewContext,
    /// Replace the current page (mail links hand off to the mail client).
    CurrentContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundLink {
    /// WhatsApp chat with the salon's number, digits only.
    WhatsApp(String),
    Mail(String),
    /// Absolute map-search URL.
    MapSearch(String),
}

impl OutboundLink {
    pub fn whatsapp(booking: &BookingConfig) -> Self {
        Self::WhatsApp(booking.whatsapp.clone())
    }

    pub fn mail(booking: &BookingConfig) -> Self {
        Self::Mail(booking.email.clone())
    }

    pub fn map_search(booking: &BookingConfig) -> Self {
        Self::MapSearch(booking.map_search.clone())
    }

    pub fn href(&self) -> String {
        match self {
            Self::WhatsApp(phone) => format!("https://wa.me/{phone}"),
            Self::Mail(address) => format!("mailto:{address}"),
            Self::MapSearch(url) => url.clone(),
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Self::WhatsApp(_) | Self::MapSearch(_) => Target::NewContext,
            Self::Mail(_) => Target::CurrentContext,
        }
    }

    /// HTML `target` attribute value, if any.
    pub fn html_target(&self) -> Option<&'static str> {
        match self.target() {
            Target::NewContext => Some("_blank"),
            Target::CurrentContext => None,
        }
    }

    /// HTML `rel` attribute value, if any.
    pub fn html_rel(&self) -> Option<&'static str> {
        match self.target() {
            Target::NewContext => Some("noopener"),
            Target::CurrentContext => None,
        }
    }
}
