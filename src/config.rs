//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The salon's
//! contact details, booking targets, carousel timing and colors all live
//! here; the marketing copy itself is in [`crate::content`].
//!
//! ## Config File Location
//!
//! Place `config.toml` in the site source directory:
//!
//! ```text
//! site/
//! ├── config.toml              # Overrides stock defaults
//! └── assets/                  # Copied verbatim to the output root
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [salon]
//! name = "The Parlour"
//! established = 2024
//! address = ["123 Vintage Avenue", "Stylist District, NY 10012"]
//! phone = "(212) 555-0199"
//! email = "hello@theparlour.com"
//!
//! [[salon.hours]]
//! days = "Tue - Fri"
//! time = "10am - 7pm"
//!
//! [booking]
//! whatsapp = "1234567890"   # Digits only, used for https://wa.me/<number>
//! email = "hello@theparlour.com"
//! map_search = "https://www.google.com/maps/search/Beauty+Parlour+Covent+Garden+London"
//!
//! [carousels]
//! hero_interval_ms = 5000
//! testimonial_interval_ms = 6000
//!
//! [colors]
//! background = "#fafaf9"
//! surface = "#ffffff"
//! text = "#1c1917"
//! text_muted = "#78716c"
//! accent = "#1c1917"
//! whatsapp = "#16a34a"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [booking]
//! whatsapp = "447700900123"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults describing The Parlour. User config files need
/// only specify the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Business identity shown in the header, footer and contact page.
    pub salon: SalonConfig,
    /// Targets for the WhatsApp, email and location links.
    pub booking: BookingConfig,
    /// Auto-advance timing for the rotating carousels.
    pub carousels: CarouselsConfig,
    /// Palette emitted as CSS custom properties.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.salon.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "salon.name must not be empty".into(),
            ));
        }
        let phone = &self.booking.whatsapp;
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "booking.whatsapp must be digits only (international format, no +)".into(),
            ));
        }
        if !self.booking.email.contains('@') {
            return Err(ConfigError::Validation(
                "booking.email must be an email address".into(),
            ));
        }
        match url::Url::parse(&self.booking.map_search) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {}
            _ => {
                return Err(ConfigError::Validation(
                    "booking.map_search must be an absolute http(s) URL".into(),
                ));
            }
        }
        if self.carousels.hero_interval_ms == 0 || self.carousels.testimonial_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousels intervals must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Business identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalonConfig {
    pub name: String,
    /// Year shown as "Est." in the footer.
    pub established: u16,
    /// Postal address, one entry per line.
    pub address: Vec<String>,
    /// Phone number as displayed (free-form).
    pub phone: String,
    /// Public contact address shown in the footer and contact page.
    pub email: String,
    /// Opening hours, in display order.
    pub hours: Vec<OpeningHours>,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            name: "The Parlour".to_string(),
            established: 2024,
            address: vec![
                "123 Vintage Avenue".to_string(),
                "Stylist District, NY 10012".to_string(),
            ],
            phone: "(212) 555-0199".to_string(),
            email: "hello@theparlour.com".to_string(),
            hours: vec![
                OpeningHours::new("Tue - Fri", "10am - 7pm"),
                OpeningHours::new("Saturday", "9am - 5pm"),
                OpeningHours::new("Sun - Mon", "Closed"),
            ],
        }
    }
}

impl SalonConfig {
    /// Upper-cased brand mark used in the header, e.g. `THE PARLOUR.`
    pub fn brand_mark(&self) -> String {
        format!("{}.", self.name.to_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpeningHours {
    pub days: String,
    pub time: String,
}

impl OpeningHours {
    pub fn new(days: &str, time: &str) -> Self {
        Self {
            days: days.to_string(),
            time: time.to_string(),
        }
    }
}

/// Booking hand-off targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// WhatsApp number in international format, digits only.
    pub whatsapp: String,
    /// Address used for `mailto:` booking links.
    pub email: String,
    /// Map search URL opened by the "Location" nav entry.
    pub map_search: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            whatsapp: "1234567890".to_string(),
            email: "hello@theparlour.com".to_string(),
            map_search: "https://www.google.com/maps/search/Beauty+Parlour+Covent+Garden+London"
                .to_string(),
        }
    }
}

/// Auto-advance timing. The gallery carousels are arrow-only and have no
/// interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselsConfig {
    pub hero_interval_ms: u64,
    pub testimonial_interval_ms: u64,
}

impl Default for CarouselsConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            testimonial_interval_ms: 6000,
        }
    }
}

/// Site palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Cards and light sections.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary copy, captions, labels.
    pub text_muted: String,
    /// Dark sections, buttons, active tab marker.
    pub accent: String,
    /// WhatsApp call-to-action buttons.
    pub whatsapp: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#fafaf9".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1c1917".to_string(),
            text_muted: "#78716c".to_string(),
            accent: "#1c1917".to_string(),
            whatsapp: "#16a34a".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   overlay `hours` array replaces the stock hours rather than appending.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# The Parlour site configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Each key only needs to be present if you want to change it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Salon identity (header, footer, contact page)
# ---------------------------------------------------------------------------
[salon]
name = "The Parlour"

# Year shown as "Est." in the footer.
established = 2024

# Postal address, one entry per line.
address = ["123 Vintage Avenue", "Stylist District, NY 10012"]

# Phone number exactly as it should be displayed.
phone = "(212) 555-0199"

email = "hello@theparlour.com"

# Opening hours, in display order. Replacing one entry replaces the list.
[[salon.hours]]
days = "Tue - Fri"
time = "10am - 7pm"

[[salon.hours]]
days = "Saturday"
time = "9am - 5pm"

[[salon.hours]]
days = "Sun - Mon"
time = "Closed"

# ---------------------------------------------------------------------------
# Booking links
# ---------------------------------------------------------------------------
[booking]
# WhatsApp number in international format, digits only (no +, no spaces).
whatsapp = "1234567890"

# Address used for "Book via Email" mailto: links.
email = "hello@theparlour.com"

# Opened in a new tab by the "Location" navigation entry.
map_search = "https://www.google.com/maps/search/Beauty+Parlour+Covent+Garden+London"

# ---------------------------------------------------------------------------
# Carousels
# ---------------------------------------------------------------------------
[carousels]
# Milliseconds between automatic advances. Must be positive.
hero_interval_ms = 5000
testimonial_interval_ms = 6000

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#fafaf9"
surface = "#ffffff"
text = "#1c1917"
text_muted = "#78716c"    # Captions, labels, secondary copy
accent = "#1c1917"        # Dark sections, buttons, active tab
whatsapp = "#16a34a"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-whatsapp: {whatsapp};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        whatsapp = colors.whatsapp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_describes_the_parlour() {
        let config = SiteConfig::default();
        assert_eq!(config.salon.name, "The Parlour");
        assert_eq!(config.salon.brand_mark(), "THE PARLOUR.");
        assert_eq!(config.salon.hours.len(), 3);
        assert_eq!(config.booking.whatsapp, "1234567890");
        assert_eq!(config.carousels.hero_interval_ms, 5000);
        assert_eq!(config.carousels.testimonial_interval_ms, 6000);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[booking]
whatsapp = "447700900123"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.booking.whatsapp, "447700900123");
        // Defaults preserved
        assert_eq!(config.booking.email, "hello@theparlour.com");
        assert_eq!(config.salon.name, "The Parlour");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.accent = "#4a044e".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent: #4a044e"));
        assert!(css.contains("--color-whatsapp: #16a34a"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.salon.name, "The Parlour");
        assert_eq!(config.colors.background, "#fafaf9");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[salon]
name = "Studio Lune"
established = 2019

[carousels]
hero_interval_ms = 8000
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.salon.name, "Studio Lune");
        assert_eq!(config.salon.established, 2019);
        assert_eq!(config.carousels.hero_interval_ms, 8000);
        // Unspecified values are defaults
        assert_eq!(config.carousels.testimonial_interval_ms, 6000);
        assert_eq!(config.salon.phone, "(212) 555-0199");
    }

    #[test]
    fn overlay_hours_replace_stock_hours() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[[salon.hours]]
days = "Every day"
time = "9am - 9pm"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(
            config.salon.hours,
            vec![OpeningHours::new("Every day", "9am - 9pm")]
        );
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[salon\nname = ").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[carousels]
hero_interval_ms = 0
"##,
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[booking]
whatsapp = "1"
email = "a@b.c"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[booking]
email = "x@y.z"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["booking"]["whatsapp"].as_str(), Some("1"));
        assert_eq!(merged["booking"]["email"].as_str(), Some("x@y.z"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("address = [\"a\", \"b\"]").unwrap();
        let overlay: toml::Value = toml::from_str("address = [\"c\"]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["address"].as_array().map(|a| a.len()), Some(1));
    }

    // =========================================================================
    // Unknown keys and validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[booking]
whatsap = "123"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[thumbnails]\nsize = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_whatsapp_rejects_formatting() {
        let mut config = SiteConfig::default();
        config.booking.whatsapp = "+1 234 567".to_string();
        assert!(config.validate().is_err());
        config.booking.whatsapp = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_email_needs_at_sign() {
        let mut config = SiteConfig::default();
        config.booking.email = "theparlour.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_map_search_must_be_http_url() {
        let mut config = SiteConfig::default();
        config.booking.map_search = "maps/search".to_string();
        assert!(config.validate().is_err());
        config.booking.map_search = "javascript:alert(1)".to_string();
        assert!(config.validate().is_err());
        config.booking.map_search = "https://maps.example.com/?q=salon".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_testimonial_interval_zero() {
        let mut config = SiteConfig::default();
        config.carousels.testimonial_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_name() {
        let mut config = SiteConfig::default();
        config.salon.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value = toml::from_str(stock_config_toml()).expect("stock config must parse");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let from_stock: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(from_stock.salon.name, defaults.salon.name);
        assert_eq!(from_stock.salon.address, defaults.salon.address);
        assert_eq!(from_stock.salon.hours, defaults.salon.hours);
        assert_eq!(from_stock.booking.whatsapp, defaults.booking.whatsapp);
        assert_eq!(from_stock.booking.map_search, defaults.booking.map_search);
        assert_eq!(
            from_stock.carousels.hero_interval_ms,
            defaults.carousels.hero_interval_ms
        );
        assert_eq!(from_stock.colors.whatsapp, defaults.colors.whatsapp);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        let table = val.as_table().unwrap();
        for section in ["salon", "booking", "carousels", "colors"] {
            assert!(table.contains_key(section), "missing {section}");
        }
    }
}
