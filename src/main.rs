//! Interactive route planning prompt loop

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use roundtrip::{LocationCatalog, RoundtripConfig, Tour, plan_route};

/// Command-line options, parsed by hand
struct CliArgs {
    config_path: Option<PathBuf>,
    locations_file: Option<PathBuf>,
    json_output: bool,
}

fn parse_args() -> Result<Option<CliArgs>> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs {
        config_path: None,
        locations_file: None,
        json_output: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--json" => parsed.json_output = true,
            "--config" => {
                let value = args.next().context("--config requires a path")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--locations" => {
                let value = args.next().context("--locations requires a path")?;
                parsed.locations_file = Some(PathBuf::from(value));
            }
            other => {
                anyhow::bail!("Unknown argument: {other} (see --help)");
            }
        }
    }
    Ok(Some(parsed))
}

fn print_usage() {
    println!(
        "roundtrip {} - shortest round-trip route planner\n\n\
         Usage: roundtrip [OPTIONS]\n\n\
         Options:\n\
           --locations <path>  Use a locations file instead of the built-in map\n\
           --config <path>     Use a specific configuration file\n\
           --json              Render planned routes as JSON\n\
           -h, --help          Show this help",
        roundtrip::VERSION
    );
}

fn init_tracing(config: &RoundtripConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(args: &CliArgs, config: &RoundtripConfig) -> Result<LocationCatalog> {
    let path = args
        .locations_file
        .as_ref()
        .or(config.catalog.locations_file.as_ref());
    match path {
        Some(path) => LocationCatalog::load(path)
            .with_context(|| format!("Failed to load locations from {}", path.display())),
        None => LocationCatalog::builtin().context("Built-in location map is invalid"),
    }
}

/// Prompt on stdout and read one line; `None` on end of input.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn render_tour(tour: &Tour, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(tour)?);
        return Ok(());
    }

    println!("\nBest route (round trip {:.2}):", tour.total_distance);
    for stop in tour.stops.iter().skip(1) {
        println!("  {}", stop.render_name());
    }
    println!("  {}", tour.start().render_name());
    Ok(())
}

fn run(args: &CliArgs, config: &RoundtripConfig) -> Result<()> {
    let catalog = load_catalog(args, config)?;
    println!(
        "roundtrip v{} - {} known locations",
        roundtrip::VERSION,
        catalog.len()
    );

    loop {
        let Some(visit_line) = prompt_line(
            "\nEnter locations to visit (can be shortened, space separation, Ctrl+C to quit):\n",
        )?
        else {
            break;
        };
        let visit_queries: Vec<String> =
            visit_line.split_whitespace().map(String::from).collect();
        if visit_queries.is_empty() {
            continue;
        }

        let default_start = &config.catalog.default_start;
        let Some(start_line) =
            prompt_line(&format!("\nStart & End location (if blank, {default_start:?}):\n"))?
        else {
            break;
        };
        let start_query = if start_line.is_empty() {
            default_start.as_str()
        } else {
            start_line.as_str()
        };

        match plan_route(&catalog, start_query, &visit_queries) {
            Ok(tour) => render_tour(&tour, args.json_output)?,
            Err(err) => println!("Error: {err}"),
        }
    }

    println!("\nStopping.");
    Ok(())
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let config = RoundtripConfig::load_from_path(args.config_path.clone())?;
    init_tracing(&config);
    run(&args, &config)
}
