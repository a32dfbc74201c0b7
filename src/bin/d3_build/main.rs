//! d3-build: roll a random Diablo III build.
//!
//! Usage:
//!   d3-build                           # Random class, standard mode
//!   d3-build --class monk --elective   # Any six monk skills
//!   d3-build --seed 42 --html          # Reproducible roll as tooltip-ready HTML

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use d3_tooltips::TooltipConfig;
use d3_tooltips::build::{self, Build, BuildOptions, CLASSES, SiteLinks, rune_index};

#[derive(Parser)]
#[command(name = "d3-build")]
#[command(about = "Random Diablo III build generator")]
struct Cli {
    /// Class tag (barbarian, crusader, demon-hunter, monk, witch-doctor, wizard)
    #[arg(short, long)]
    class: Option<String>,

    /// Pick any six skills instead of one per group
    #[arg(short, long)]
    elective: bool,

    /// Elective mode: put a primary skill on the left mouse button
    #[arg(long)]
    force_primary: bool,

    /// Allow "No Rune" selections
    #[arg(long)]
    allow_no_rune: bool,

    /// Allow at most one wizard armor
    #[arg(long)]
    wizard_armor_exclusion: bool,

    /// Also roll paragon priorities
    #[arg(long)]
    paragon: bool,

    /// Seed for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    /// Print HTML with tooltip-ready links instead of text
    #[arg(long)]
    html: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let options = BuildOptions {
        class: cli.class,
        elective: cli.elective,
        force_primary: cli.force_primary,
        allow_no_rune: cli.allow_no_rune,
        wizard_armor_exclusion: cli.wizard_armor_exclusion,
        paragon: cli.paragon,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let build = match build::generate(&options, &mut rng) {
        Ok(build) => build,
        Err(e) => {
            eprintln!("Error: {}", e);
            let tags: Vec<&str> = CLASSES.iter().map(|c| c.tag).collect();
            eprintln!("Known classes: {}", tags.join(", "));
            std::process::exit(1);
        }
    };

    if cli.html {
        let site = SiteLinks::from_config(&TooltipConfig::load());
        print!("{}", build::render_html(&build, &site));
    } else {
        print_text(&build);
    }
}

fn print_text(build: &Build) {
    let class = build.class;
    println!("Random {} Build ({})", class.name, build.mode.label());
    println!("Calculator: {}", build.calculator_code());
    if build.exhausted {
        println!("(ran out of tries; build may break a rule)");
    }

    println!("\nSkills:");
    for (code, rune) in build.slots() {
        let Some(skill) = class.actives.get(&code) else {
            continue;
        };
        let group = class.group_of(code).map_or("?", |g| class.groups[g]);
        let rune_name = rune_index(rune).map_or("No Rune", |i| skill.runes[i]);
        println!("  ({}) {} -- {}", group, skill.name, rune_name);
    }

    println!("\nPassives:");
    for code in build.passives.chars() {
        if let Some(name) = class.passives.get(&code) {
            println!("  {}", name);
        }
    }

    if !build.paragon.is_empty() {
        println!("\nParagon:");
        for priority in &build.paragon {
            println!("  {}: {}", priority.category, priority.order.join(" > "));
        }
    }
}
