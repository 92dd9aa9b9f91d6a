use clap::{Parser, Subcommand};
use parlour::autoplay::AutoCarousel;
use parlour::config::{self, SiteConfig};
use parlour::content::{self, CarouselId};
use parlour::generate::{self, SlidePositions};
use parlour::output;
use parlour::ui::{Action, Page, UiState};
use std::error::Error;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parlour")]
#[command(about = "Site generator for The Parlour beauty salon")]
#[command(long_about = "\
Site generator for The Parlour beauty salon

Renders the home, services, gallery and contact pages to static HTML.
Business details, booking targets, carousel timing and colors come from an
optional config.toml in the source directory.

Source structure:

  site/
  ├── config.toml     # Site config (optional, merged over stock defaults)
  └── assets/         # Static assets (favicon, fonts) → copied to output root

Run 'parlour gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Source directory holding config.toml and assets/
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render all pages into the output directory
    Build,
    /// Validate config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print one page, in a given UI state, to stdout
    Render {
        /// home, services, gallery or contact
        page: String,
        /// Render with the mobile menu open
        #[arg(long)]
        menu_open: bool,
        /// Selected a la carte tab (services page)
        #[arg(long, default_value_t = 0)]
        tab: usize,
        /// Expanded FAQ entry (services page)
        #[arg(long)]
        faq: Option<usize>,
    },
    /// Run a carousel and print each slide as it becomes current
    Rotate {
        /// hero, testimonials, ambiance, client-looks or offers
        carousel: String,
        /// Number of advances before stopping
        #[arg(long, default_value_t = 3)]
        ticks: usize,
    },
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config, &cli.source);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Render {
            page,
            menu_open,
            tab,
            faq,
        } => {
            let page = Page::from_id(&page).ok_or_else(|| format!("Unknown page '{page}'"))?;
            let site_config = config::load_config(&cli.source)?;
            let state = render_state(&site_config, page, menu_open, tab, faq)?;
            let html = generate::render_view(&site_config, &state, &SlidePositions::default());
            println!("{}", html.into_string());
        }
        Command::Rotate { carousel, ticks } => {
            let id = CarouselId::from_slug(&carousel)
                .ok_or_else(|| format!("Unknown carousel '{carousel}'"))?;
            let site_config = config::load_config(&cli.source)?;
            rotate(&site_config, id, ticks)?;
        }
    }

    Ok(())
}

/// Build the UI state for `render` by replaying the equivalent actions.
fn render_state(
    config: &SiteConfig,
    page: Page,
    menu_open: bool,
    tab: usize,
    faq: Option<usize>,
) -> Result<UiState, Box<dyn Error>> {
    let categories = content::CATEGORIES.len();
    if tab >= categories {
        return Err(format!("Tab {tab} out of range ({categories} categories)").into());
    }
    let questions = content::FAQS.len();
    if let Some(faq) = faq.filter(|&i| i >= questions) {
        return Err(format!("FAQ {faq} out of range ({questions} questions)").into());
    }
    if page != Page::Services && (tab != 0 || faq.is_some()) {
        warn!(page = page.id(), "--tab and --faq only apply to the services page");
    }

    let mut state = UiState::on(page);
    let mut actions = vec![Action::SelectTab(tab)];
    if menu_open {
        actions.push(Action::ToggleMenu);
    }
    if let Some(faq) = faq {
        actions.push(Action::ToggleFaq(faq));
    }
    for action in actions {
        (state, _) = state.apply(action, &config.booking);
    }
    Ok(state)
}

/// Mount a carousel on a current-thread runtime and print `ticks` advances.
///
/// Auto-advancing carousels are driven by their timer; arrow-only ones are
/// stepped with `next`.
fn rotate(config: &SiteConfig, id: CarouselId, ticks: usize) -> Result<(), Box<dyn Error>> {
    let carousel = id.carousel(&config.carousels)?;
    let timed = carousel.auto_advance();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let rotator = AutoCarousel::start(carousel);
        let mut updates = rotator.subscribe();
        output::print_rotation(id, *updates.borrow_and_update());

        for _ in 0..ticks {
            let index = if timed {
                updates.changed().await?;
                *updates.borrow_and_update()
            } else {
                rotator.next()?
            };
            output::print_rotation(id, index);
        }

        rotator.cancel();
        Ok::<(), Box<dyn Error>>(())
    })
}
