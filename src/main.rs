//! Command line support for trusker-planner.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use trusker_planner::feed::{FileFeed, write_feed};
use trusker_planner::generator::{GeneratorConfig, generate};
use trusker_planner::http_feed::{HttpFeedClient, HttpFeedConfig};
use trusker_planner::report::{RouteReport, Summary};
use trusker_planner::traits::LegRepository;
use trusker_planner::{PairingMode, PlanOptions, WorkerState, plan};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the next courses of a trusker.
    Plan(PlanArgs),
    /// Write a synthetic request feed.
    Generate(GenerateArgs),
}

#[derive(Args)]
struct PlanArgs {
    /// Request feed (GeoJSON feature collection).
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    orders: Option<PathBuf>,

    /// Fetch the request feed over HTTP.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Current time, e.g. 2017-07-15T12:00:01Z. Defaults to the system clock.
    #[arg(long)]
    now: Option<Timestamp>,

    /// JSON file with planning options; flags below override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long)]
    horizon_minutes: Option<i64>,

    #[arg(long)]
    price_min: Option<i64>,

    #[arg(long)]
    price_max: Option<i64>,

    /// Maximum distance between grouped courses, in meters.
    #[arg(long)]
    distance_max_group: Option<f64>,

    /// Maximum idle time between grouped courses, in seconds.
    #[arg(long)]
    time_max_group_secs: Option<i64>,

    #[arg(long)]
    time_distance_factor: Option<f64>,

    /// Group with the closest partner instead of the first one found.
    #[arg(long)]
    best_fit: bool,

    /// Print the route as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(short, long, default_value = "orders.json")]
    output: PathBuf,

    #[arg(short = 'n', long, default_value_t = 200)]
    count: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Day to generate requests for. Defaults to today.
    #[arg(long)]
    day: Option<Date>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    debug!("Verbose level: {}", cli.verbose);

    match cli.command {
        Commands::Plan(args) => run_plan(args),
        Commands::Generate(args) => run_generate(args),
    }
}

fn run_plan(args: PlanArgs) -> anyhow::Result<()> {
    let options = plan_options(&args)?;
    trace!("Planning options: {:?}", options);

    let points = match (&args.orders, &args.url) {
        (Some(path), _) => FileFeed::new(path).points()?,
        (None, Some(url)) => {
            let config = HttpFeedConfig {
                url: url.clone(),
                timeout_secs: args.timeout_secs,
            };
            HttpFeedClient::new(config)?.points()?
        }
        (None, None) => anyhow::bail!("either --orders or --url is required"),
    };

    let now = args.now.unwrap_or_else(Timestamp::now);
    let worker = WorkerState::new(args.lat, args.lng, now.as_millisecond());
    info!(points = points.len(), %now, "planning");

    let route = plan(&points, worker, &options)?;

    if args.json {
        println!("{}", RouteReport::from_route(&route)?.to_json_pretty()?);
    } else {
        print!("{}", Summary::new(&route, now)?);
    }
    Ok(())
}

fn plan_options(args: &PlanArgs) -> anyhow::Result<PlanOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PlanOptions::from_json_str(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlanOptions::default(),
    };

    if let Some(minutes) = args.horizon_minutes {
        options.horizon_ms = minutes
            .checked_mul(60 * 1000)
            .with_context(|| format!("--horizon-minutes {minutes} is out of range"))?;
    }
    if let Some(price) = args.price_min {
        options.price_min = price;
    }
    if let Some(price) = args.price_max {
        options.price_max = price;
    }
    if let Some(meters) = args.distance_max_group {
        options.distance_max_group_m = meters;
    }
    if let Some(secs) = args.time_max_group_secs {
        options.time_max_group_ms = secs
            .checked_mul(1000)
            .with_context(|| format!("--time-max-group-secs {secs} is out of range"))?;
    }
    if let Some(factor) = args.time_distance_factor {
        options.time_distance_factor = factor;
    }
    if args.best_fit {
        options.pairing = PairingMode::BestFit;
    }

    options.validate()?;
    Ok(options)
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let day_start = match args.day {
        Some(day) => day.to_zoned(TimeZone::system())?.timestamp(),
        None => Zoned::now().start_of_day()?.timestamp(),
    };

    let config = GeneratorConfig {
        order_count: args.count,
        ..GeneratorConfig::paris(day_start)
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let collection = generate(&config, &mut rng);
    write_feed(&args.output, &collection)?;
    println!("Courses written to {}", args.output.display());
    Ok(())
}
