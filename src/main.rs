use chrono::{Local, Timelike};
use clap::Parser;
use skyphase::classifier::render_day_band;
use skyphase::moment::parse_zone;
use skyphase::{Classifier, LocalMoment};

/// skyphase — solar phase and season classifier.
///
/// Computes the prevailing light condition (sunrise, golden hour, high
/// noon, blue hour, night, polar states) for any position and moment,
/// plus the astronomical season.
///
/// Examples:
///   skyphase --lat 59.33 --lon 18.07 --tz Europe/Stockholm
///   skyphase --lat 40.7 --lon -74.0 --date 2026-03-20 --time 12:00 --utc-offset -5
///   skyphase --lat -33.87 --lon 151.21 --season-only
///   skyphase --serve --port 8080
#[derive(Parser)]
#[command(name = "skyphase", version, about, long_about = None)]
struct Cli {
    /// Latitude (-90 to 90).
    #[arg(long, allow_hyphen_values = true, required_unless_present = "serve")]
    lat: Option<f64>,

    /// Longitude (-180 to 180).
    #[arg(long, allow_hyphen_values = true, required_unless_present = "serve")]
    lon: Option<f64>,

    /// Date (YYYY-MM-DD). Defaults to today.
    #[arg(long, short = 'd')]
    date: Option<String>,

    /// Time (HH:MM). Defaults to now.
    #[arg(long, short = 't')]
    time: Option<String>,

    /// IANA timezone for offset resolution (e.g. Europe/Oslo).
    /// Without --tz or --utc-offset the machine's local zone is used.
    #[arg(long)]
    tz: Option<String>,

    /// Fixed UTC offset in hours east of UTC. Overrides --tz.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,

    /// Print only the season for the given latitude and date.
    #[arg(long)]
    season_only: bool,

    /// Run the HTTP API server instead of a one-shot classification.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(skyphase::server::start(&cli.host, cli.port));
        return;
    }

    // required_unless_present guarantees these in one-shot mode.
    let (lat, lon) = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            eprintln!("Error: --lat and --lon are required");
            std::process::exit(1);
        }
    };

    let mut classifier = Classifier::new(lat, lon).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(hours) = cli.utc_offset {
        classifier = classifier.with_utc_offset(hours);
    } else if let Some(ref name) = cli.tz {
        let tz = parse_zone(name).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        classifier = classifier.with_zone(tz);
    }

    let now = Local::now();
    let date = cli.date.unwrap_or_else(|| now.date_naive().to_string());
    let time = cli
        .time
        .unwrap_or_else(|| format!("{:02}:{:02}", now.hour(), now.minute()));

    let moment = LocalMoment::parse(&date, &time).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if cli.season_only {
        use chrono::Datelike;
        let season = skyphase::resolve_season(lat, moment.date.month0()).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        println!("{}", season);
        return;
    }

    let report = classifier.classify_moment(&moment);
    let geometry = classifier.geometry_for(&moment);

    // Band to stderr, JSON to stdout.
    eprint!("{}", render_day_band(&report, &geometry));
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
