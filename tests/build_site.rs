//! Integration test: build a full site from a source directory with a
//! config overlay and assets, then check what landed in the output.

use parlour::config;
use parlour::generate;
use parlour::ui::Page;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r##"
[salon]
name = "Studio Nine"
established = 2019

[booking]
whatsapp = "447700900123"
email = "book@studionine.example"

[carousels]
hero_interval_ms = 7000

[colors]
accent = "#3b0764"
"##;

fn source_dir() -> TempDir {
    let src = TempDir::new().unwrap();
    fs::write(src.path().join("config.toml"), CONFIG).unwrap();
    let assets = src.path().join("assets");
    fs::create_dir_all(assets.join("fonts")).unwrap();
    fs::write(assets.join("favicon.ico"), b"ico").unwrap();
    fs::write(assets.join("fonts/serif.woff2"), b"woff").unwrap();
    src
}

#[test]
fn builds_every_page_with_config_applied() {
    let src = source_dir();
    let out = TempDir::new().unwrap();

    let report = generate::generate(src.path(), out.path()).unwrap();
    assert_eq!(report.pages.len(), 4);
    assert_eq!(report.assets, 2);

    for page in Page::ALL {
        let html = fs::read_to_string(out.path().join(page.file_name())).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"), "{}", page.id());
        assert!(html.contains("STUDIO NINE."), "{}", page.id());
        assert!(html.contains("--color-accent: #3b0764"), "{}", page.id());
        assert!(html.contains("Est. 2019."), "{}", page.id());
    }

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains("https://wa.me/447700900123"));
    assert!(home.contains("mailto:book@studionine.example"));
    assert!(home.contains("&quot;intervalMs&quot;:7000"));

    let services = fs::read_to_string(out.path().join("services.html")).unwrap();
    assert!(services.contains("&quot;intervalMs&quot;:6000"));

    let gallery = fs::read_to_string(out.path().join("gallery.html")).unwrap();
    assert!(gallery.contains("&quot;autoAdvance&quot;:false"));

    assert!(out.path().join("carousel.js").is_file());
    assert!(out.path().join("favicon.ico").is_file());
    assert!(out.path().join("fonts/serif.woff2").is_file());
}

#[test]
fn stock_config_builds_same_site_as_no_config() {
    let bare = TempDir::new().unwrap();
    let stocked = TempDir::new().unwrap();
    fs::write(stocked.path().join("config.toml"), config::stock_config_toml()).unwrap();

    let out_bare = TempDir::new().unwrap();
    let out_stocked = TempDir::new().unwrap();
    generate::generate(bare.path(), out_bare.path()).unwrap();
    generate::generate(stocked.path(), out_stocked.path()).unwrap();

    for page in Page::ALL {
        let a = fs::read_to_string(out_bare.path().join(page.file_name())).unwrap();
        let b = fs::read_to_string(out_stocked.path().join(page.file_name())).unwrap();
        assert_eq!(a, b, "{}", page.id());
    }
}

#[test]
fn unknown_config_keys_fail_the_build() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("config.toml"), "[salon]\nnmae = \"typo\"\n").unwrap();

    let err = generate::generate(src.path(), out.path()).unwrap_err();
    assert!(err.to_string().contains("nmae"), "{err}");
    assert!(!out.path().join("index.html").exists());
}
