//! CLI output formatting.
//!
//! Output is an inventory of the site rather than a file listing: pages are
//! shown by position and label, with their output file and carousels as
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Salon
//!     The Parlour (est. 2024)
//!     WhatsApp: https://wa.me/1234567890
//!     Email: mailto:hello@theparlour.com
//!
//! Pages
//! 001 Home → index.html
//!     hero: 3 slides, every 5000ms
//! 002 Services → services.html
//!     testimonials: 3 slides, every 6000ms
//! ...
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Home → index.html
//! 002 Services → services.html
//! ...
//!
//! Generated 4 pages, 2 assets into dist
//! ```
//!
//! ## Rotate
//!
//! ```text
//! hero 1/3 Effortless Beauty
//! hero 2/3 Expert Styling
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::SiteConfig;
use crate::content::CarouselId;
use crate::generate::{ASSETS_DIR, GenerateReport};
use crate::links::OutboundLink;
use crate::ui::Page;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn page_line(position: usize, page: Page) -> String {
    format!("{} {} → {}", format_index(position), page.label(), page.file_name())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// One carousel as a context line: slide count and timing.
fn carousel_line(config: &SiteConfig, id: CarouselId) -> String {
    let timing = match id.interval_ms(&config.carousels) {
        Some(ms) => format!("every {ms}ms"),
        None => "manual".to_string(),
    };
    format!(
        "{}{}: {}, {}",
        indent(1),
        id.slug(),
        plural(id.slide_count(), "slide", "slides"),
        timing
    )
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = vec![
        "Salon".to_string(),
        format!(
            "{}{} (est. {})",
            indent(1),
            config.salon.name,
            config.salon.established
        ),
        format!(
            "{}WhatsApp: {}",
            indent(1),
            OutboundLink::whatsapp(&config.booking).href()
        ),
        format!(
            "{}Email: {}",
            indent(1),
            OutboundLink::mail(&config.booking).href()
        ),
        String::new(),
        "Pages".to_string(),
    ];

    for (i, page) in Page::ALL.into_iter().enumerate() {
        lines.push(page_line(i + 1, page));
        for id in CarouselId::on_page(page) {
            lines.push(carousel_line(config, id));
        }
    }

    let has_config = source_root.join("config.toml").is_file();
    let has_assets = source_root.join(ASSETS_DIR).is_dir();
    lines.push(String::new());
    lines.push("Config".to_string());
    if has_config {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    if has_assets {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }

    lines
}

pub fn print_check_output(config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| page_line(i + 1, *page))
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} into {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.assets, "asset", "assets"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Rotate
// ============================================================================

/// A carousel position, 1-based for display, with the slide's title.
pub fn format_rotation(id: CarouselId, index: usize) -> String {
    let title = id.slide_titles().get(index).copied().unwrap_or("");
    format!("{} {}/{} {}", id.slug(), index + 1, id.slide_count(), title)
}

pub fn print_rotation(id: CarouselId, index: usize) {
    println!("{}", format_rotation(id, index));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "page", "pages"), "1 page");
        assert_eq!(plural(0, "page", "pages"), "0 pages");
    }

    #[test]
    fn check_lists_pages_with_carousels() {
        let tmp = TempDir::new().unwrap();
        let lines = format_check_output(&SiteConfig::default(), tmp.path());

        assert_eq!(lines[0], "Salon");
        assert!(lines.contains(&"    WhatsApp: https://wa.me/1234567890".to_string()));
        assert!(lines.contains(&"001 Home → index.html".to_string()));
        assert!(lines.contains(&"    hero: 3 slides, every 5000ms".to_string()));
        assert!(lines.contains(&"    testimonials: 3 slides, every 6000ms".to_string()));
        assert!(lines.contains(&"    offers: 3 slides, manual".to_string()));
        assert!(lines.contains(&"004 Contact → contact.html".to_string()));
        assert_eq!(lines.last().unwrap(), "    (stock defaults)");
    }

    #[test]
    fn check_shows_config_sources() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "").unwrap();
        fs::create_dir(tmp.path().join("assets")).unwrap();
        let lines = format_check_output(&SiteConfig::default(), tmp.path());
        let tail: Vec<_> = lines.iter().rev().take(2).rev().cloned().collect();
        assert_eq!(tail, vec!["    config.toml", "    assets/"]);
    }

    #[test]
    fn check_reflects_configured_intervals() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.carousels.hero_interval_ms = 8000;
        let lines = format_check_output(&config, tmp.path());
        assert!(lines.contains(&"    hero: 3 slides, every 8000ms".to_string()));
    }

    #[test]
    fn generate_summary() {
        let report = GenerateReport {
            output_dir: PathBuf::from("dist"),
            pages: Page::ALL.to_vec(),
            assets: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "001 Home → index.html");
        assert_eq!(lines[3], "004 Contact → contact.html");
        assert_eq!(lines.last().unwrap(), "Generated 4 pages, 1 asset into dist");
    }

    #[test]
    fn rotation_is_one_based() {
        assert_eq!(format_rotation(CarouselId::Hero, 0), "hero 1/3 Effortless Beauty");
        assert_eq!(
            format_rotation(CarouselId::Testimonials, 2),
            "testimonials 3/3 Jessica T."
        );
    }
}
