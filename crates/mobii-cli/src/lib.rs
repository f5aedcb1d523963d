//! MobiiWrap CLI
//!
//! Command definitions and page output for the `mobii` binary.
//!
//! ```text
//! mobii [--config PATH] [--json] <COMMAND>
//!
//!   home                          landing page
//!   about                         company page
//!   products [--query Q] [--category C] [--sort LABEL]
//!   product <ID> [--image N] [--next N] [--prev N] [--color C]
//!                [--zoom-at X,Y] [--add-to-cart] [--await-dismiss]
//!   route <PATH>                  page for a storefront path
//! ```
//!
//! Exit codes: `0` page shown, `1` product or path not found, `2` setup error.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mobii_catalog::{Category, SortKey};
use mobii_detail::{DetailOutcome, ViewEvent};
use mobii_pages::{NotFoundPage, Page, Storefront, StorefrontConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable switching log output to JSON lines
pub const LOG_JSON_ENV: &str = "MOBII_LOG_JSON";

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Page shown
    Success,
    /// Product id or path matched nothing
    NotFound,
    /// Configuration or catalog could not be loaded
    Failure,
}

impl Exit {
    /// Numeric exit code
    #[inline]
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NotFound => 1,
            Self::Failure => 2,
        }
    }
}

/// Build the command-line interface
#[must_use]
pub fn command() -> Command {
    Command::new("mobii")
        .version(mobii_pages::VERSION)
        .about("MobiiWrap storefront")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print pages as JSON"),
        )
        .subcommand(Command::new("home").about("Show the landing page"))
        .subcommand(Command::new("about").about("Show the company page"))
        .subcommand(
            Command::new("products")
                .about("Show the product listing")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .help("Search text matched against names and descriptions"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Category filter (\"All\" for every category)"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .short('s')
                        .help("Sort order: newest, price-low-to-high, price-high-to-low, most-popular"),
                ),
        )
        .subcommand(
            Command::new("product")
                .about("Show a product's detail page")
                .arg(Arg::new("id").required(true).help("Product id"))
                .arg(
                    Arg::new("image")
                        .long("image")
                        .value_parser(value_parser!(usize))
                        .help("Select a gallery image by index"),
                )
                .arg(
                    Arg::new("next")
                        .long("next")
                        .default_value("0")
                        .value_parser(value_parser!(usize))
                        .help("Advance the carousel N times"),
                )
                .arg(
                    Arg::new("prev")
                        .long("prev")
                        .default_value("0")
                        .value_parser(value_parser!(usize))
                        .help("Move the carousel back N times"),
                )
                .arg(Arg::new("color").long("color").help("Select a color variant"))
                .arg(
                    Arg::new("zoom-at")
                        .long("zoom-at")
                        .value_parser(parse_point)
                        .help("Zoom the main image at X,Y percent"),
                )
                .arg(
                    Arg::new("add-to-cart")
                        .long("add-to-cart")
                        .action(ArgAction::SetTrue)
                        .help("Press \"Add to Cart\""),
                )
                .arg(
                    Arg::new("await-dismiss")
                        .long("await-dismiss")
                        .action(ArgAction::SetTrue)
                        .requires("add-to-cart")
                        .help("Wait for the cart notification to clear and show the page again"),
                ),
        )
        .subcommand(
            Command::new("route")
                .about("Show the page for a storefront path")
                .arg(Arg::new("path").required(true).help("Path such as /products/1")),
        )
}

/// Parse `X,Y` into a pair of percentages
fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {value:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate {part:?}: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Load the config file, or defaults when none is given
///
/// # Errors
/// Returns error if the file cannot be read or is invalid
pub fn load_config(path: Option<&Path>) -> anyhow::Result<StorefrontConfig> {
    match path {
        Some(path) => StorefrontConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(StorefrontConfig::default()),
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Output goes to
/// stderr so page output on stdout stays clean.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(err) = result {
        eprintln!("warning: tracing already initialized: {err}");
    }
}

/// Whether `MOBII_LOG_JSON` asks for JSON logs
#[must_use]
pub fn log_json_from_env() -> bool {
    std::env::var(LOG_JSON_ENV)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false)
}

/// Run the selected subcommand against a storefront, writing pages to `out`
///
/// # Errors
/// Returns error if output cannot be written or serialized
pub async fn run<W: Write>(
    matches: &ArgMatches,
    store: &Storefront,
    out: &mut W,
) -> anyhow::Result<Exit> {
    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("home", _)) => {
            emit(out, &Page::Home(store.home()), json)?;
            Ok(Exit::Success)
        }
        Some(("about", _)) => {
            emit(out, &Page::About(store.about()), json)?;
            Ok(Exit::Success)
        }
        Some(("products", args)) => {
            let mut state = store.listing_state();
            if let Some(text) = args.get_one::<String>("query") {
                state.set_text(text.as_str());
            }
            if let Some(category) = args.get_one::<String>("category") {
                state.set_category(Category::from_label(category));
            }
            if let Some(sort) = args.get_one::<String>("sort") {
                state.set_sort(SortKey::from_label(sort));
            }
            emit(out, &Page::Products(store.products(&state)), json)?;
            Ok(Exit::Success)
        }
        Some(("product", args)) => product(args, store, out, json).await,
        Some(("route", args)) => {
            let path = args
                .get_one::<String>("path")
                .context("missing path argument")?;
            match store.resolve(path) {
                Ok(page) => {
                    emit(out, &page, json)?;
                    Ok(if page.is_not_found() {
                        Exit::NotFound
                    } else {
                        Exit::Success
                    })
                }
                Err(err) if err.is_request_error() => {
                    tracing::warn!(%path, %err, "unroutable path");
                    writeln!(out, "{err}")?;
                    Ok(Exit::NotFound)
                }
                Err(err) => Err(err.into()),
            }
        }
        _ => anyhow::bail!("no command given"),
    }
}

async fn product<W: Write>(
    args: &ArgMatches,
    store: &Storefront,
    out: &mut W,
    json: bool,
) -> anyhow::Result<Exit> {
    let id = args.get_one::<String>("id").context("missing id argument")?;

    let mut visit = match store.open_product(id) {
        DetailOutcome::Found(visit) => visit,
        DetailOutcome::NotFound(id) => {
            emit(out, &Page::NotFound(NotFoundPage::for_id(id.as_str())), json)?;
            return Ok(Exit::NotFound);
        }
    };

    if let Some(&index) = args.get_one::<usize>("image") {
        if !visit.select_image(index) {
            tracing::warn!(index, "no such image, keeping the current one");
        }
    }
    let images = visit.selection().image_count().max(1);
    for _ in 0..args.get_one::<usize>("next").copied().unwrap_or(0) % images {
        visit.next_image();
    }
    for _ in 0..args.get_one::<usize>("prev").copied().unwrap_or(0) % images {
        visit.prev_image();
    }
    if let Some(color) = args.get_one::<String>("color") {
        if !visit.select_color(color) {
            tracing::warn!(%color, "no such color, keeping the current one");
        }
    }
    if let Some(&(x, y)) = args.get_one::<(f64, f64)>("zoom-at") {
        visit.apply(ViewEvent::Zoom(true));
        visit.apply(ViewEvent::Pointer {
            x,
            y,
            width: 100.0,
            height: 100.0,
        });
    }
    if args.get_flag("add-to-cart") {
        visit.add_to_cart();
    }

    emit(out, &Page::Detail(Box::new(store.detail_page(&visit))), json)?;

    if args.get_flag("await-dismiss") && visit.notification_active() {
        let mut changes = visit.notification().subscribe();
        changes
            .wait_for(|active| !*active)
            .await
            .context("notification timer went away")?;
        tracing::info!("cart notification dismissed");
        emit(out, &Page::Detail(Box::new(store.detail_page(&visit))), json)?;
    }

    Ok(Exit::Success)
}

fn emit<W: Write>(out: &mut W, page: &Page, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", page.to_json()?)?;
    } else {
        write!(out, "{page}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("25,75.5").unwrap(), (25.0, 75.5));
        assert_eq!(parse_point(" 1 , 2 ").unwrap(), (1.0, 2.0));
        assert!(parse_point("25").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Exit::Success.code(), 0);
        assert_eq!(Exit::NotFound.code(), 1);
        assert_eq!(Exit::Failure.code(), 2);
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }
}
