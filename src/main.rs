//! d3-tip: classify tooltip links and resolve them against the live service.
//!
//! Usage:
//!   d3-tip classify <url>          # Print the tooltip request as JSON
//!   d3-tip fetch-url <url>         # Print the outbound fetch URL(s)
//!   d3-tip hover <url>             # Hover a link and print what the panel shows
//!   d3-tip config show|set|path    # Inspect or change persisted settings

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use d3_tooltips::gateway::HttpGateway;
use d3_tooltips::tooltip::placement::{Rect, Size, place_panel};
use d3_tooltips::tooltip::surface::LOADING_HTML;
use d3_tooltips::tooltip::{HoverTarget, PresentationSurface, TooltipController, TooltipKind};
use d3_tooltips::{Error, Result, TooltipConfig};

/// Extra wait on top of the fetch timeout before `hover` gives up.
const HOVER_GRACE: Duration = Duration::from_millis(500);

#[derive(Parser)]
#[command(name = "d3-tip")]
#[command(about = "Diablo III tooltip link resolver")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a link and print the resulting request
    Classify { url: String },

    /// Print the content-service URL(s) a link would be fetched from
    FetchUrl { url: String },

    /// Hover a link against the live service and print what gets shown
    Hover { url: String },

    /// Show or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show,
    /// Set one key and save
    Set { key: String, value: String },
    /// Print the config file location
    Path,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => TooltipConfig::load_from(path),
        None => TooltipConfig::load(),
    };

    let result = match cli.command {
        Commands::Classify { url } => classify(&config, &url),
        Commands::FetchUrl { url } => fetch_urls(&config, &url),
        Commands::Hover { url } => hover(&config, &url),
        Commands::Config { action } => run_config(config, action),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn classify(config: &TooltipConfig, url: &str) -> Result<()> {
    let router = d3_tooltips::tooltip::UrlRouter::new(&config.site_domain, &config.product)?;
    match router.classify(url) {
        Some(request) => println!("{}", serde_json::to_string_pretty(&request)?),
        None => println!("not a tooltip link"),
    }
    Ok(())
}

fn fetch_urls(config: &TooltipConfig, url: &str) -> Result<()> {
    let router = d3_tooltips::tooltip::UrlRouter::new(&config.site_domain, &config.product)?;
    let request = router
        .classify(url)
        .ok_or_else(|| Error::Other(format!("not a tooltip link: {url}")))?;

    let parts = if request.kind == TooltipKind::SkillAndRune {
        [request.skill_part(), request.rune_part()].into_iter().flatten().collect()
    } else {
        vec![request]
    };
    for part in parts {
        match part.fetch_url(&config.service_base, &config.format_suffix) {
            Some(fetch) => println!("{}", fetch),
            None => println!("{}: never fetched", part.kind),
        }
    }
    Ok(())
}

// ── Hover ────────────────────────────────────────────────────────────

/// Prints panel updates to stdout, placed against a notional 1280x800 page.
#[derive(Default)]
struct StdoutSurface {
    resolved: bool,
}

impl PresentationSurface for StdoutSurface {
    fn show(&mut self, anchor: &HoverTarget, html: &str) {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let at = place_panel(anchor.bounds, Size { width: 360.0, height: 240.0 }, viewport);
        if html == LOADING_HTML {
            println!("[loading at {:.0},{:.0}]", at.x, at.y);
            return;
        }
        self.resolved = true;
        println!("[show at {:.0},{:.0}]\n{}", at.x, at.y, html);
    }

    fn hide(&mut self) {
        println!("[hide]");
    }
}

fn hover(config: &TooltipConfig, url: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(hover_loop(config, url))
}

async fn hover_loop(config: &TooltipConfig, url: &str) -> Result<()> {
    let (gateway, mut completions) = HttpGateway::new(config);
    let mut controller = TooltipController::from_config(config, gateway, StdoutSurface::default())?;

    let target = HoverTarget::new(1, url).with_bounds(Rect::new(600.0, 400.0, 120.0, 18.0));
    controller.on_hover_enter(target.clone());
    if controller.hover().current().is_none() {
        return Err(Error::Other(format!("not a tooltip link: {url}")));
    }

    let give_up = tokio::time::Instant::now()
        + Duration::from_millis(config.fetch_timeout_ms)
        + HOVER_GRACE;

    while !controller.surface().resolved {
        let loading = controller.loading_deadline().map(tokio::time::Instant::from_std);
        tokio::select! {
            Some(response) = completions.recv() => controller.on_fetch_response(response),
            _ = tokio::time::sleep_until(loading.unwrap_or(give_up)), if loading.is_some() => {
                controller.poll_timers(Instant::now());
            }
            _ = tokio::time::sleep_until(give_up) => {
                tracing::warn!(
                    "Gave up with {} fetch(es) unanswered",
                    controller.outstanding_fetches()
                );
                break;
            }
        }
    }

    controller.on_hover_leave(&target);
    Ok(())
}

// ── Config ───────────────────────────────────────────────────────────

fn run_config(mut config: TooltipConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&config)?),
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} = {} ({})", key, value, config.path().display());
        }
        ConfigAction::Path => println!("{}", config.path().display()),
    }
    Ok(())
}
