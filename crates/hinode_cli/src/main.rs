use std::path::PathBuf;

use clap::Parser;
use hinode_core::{Body, Calculator, EventKind, GeoLocation, RiseSetResult};
use hinode_time::{
    parse_yyyymmdd, zone_offset, CivilTime, TableConfig, TimeTables, JST_OFFSET_HOURS,
};

#[derive(Parser)]
#[command(
    name = "hinode",
    about = "Sunrise, sunset, moonrise, moonset and transits for one civil day"
)]
struct Cli {
    /// Civil date (YYYYMMDD)
    date: String,
    /// Latitude in degrees (north positive)
    #[arg(allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(allow_negative_numbers = true)]
    lon: f64,
    /// Height above sea level in meters
    height: f64,
    /// Path to the leap-second table
    #[arg(long, default_value = "LEAP_SEC.txt")]
    leap_seconds: PathBuf,
    /// Path to the DUT1 table
    #[arg(long, default_value = "DUT1.txt")]
    dut1: PathBuf,
    /// Civil zone offset in hours east of UTC
    #[arg(long, default_value_t = JST_OFFSET_HOURS, allow_negative_numbers = true)]
    utc_offset: f64,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let civil = parse_civil(&cli.date, cli.utc_offset).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    });
    let location = GeoLocation::new(cli.lat, cli.lon, cli.height).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let tables = TimeTables::load(&TableConfig {
        leap_seconds_path: cli.leap_seconds,
        dut1_path: cli.dut1,
    })
    .unwrap_or_else(|e| {
        eprintln!("Failed to load time tables: {e}");
        std::process::exit(1);
    });

    let calc = Calculator::new(civil, location, &tables).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let events = calc.compute_all().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!("{}", header(&calc));
    for (body, kind) in REPORT_ORDER {
        println!("{}", event_line(body, kind, events.get(body, kind)));
    }
}

fn parse_civil(date: &str, utc_offset: f64) -> Result<CivilTime, hinode_time::TimeError> {
    CivilTime::midnight(parse_yyyymmdd(date)?, zone_offset(utc_offset)?)
}

/// Rise, transit, set for each body.
const REPORT_ORDER: [(Body, EventKind); 6] = [
    (Body::Sun, EventKind::Rise),
    (Body::Sun, EventKind::Transit),
    (Body::Sun, EventKind::Set),
    (Body::Moon, EventKind::Rise),
    (Body::Moon, EventKind::Transit),
    (Body::Moon, EventKind::Set),
];

fn header(calc: &Calculator) -> String {
    let loc = calc.location();
    let ns = if loc.latitude_deg < 0.0 { 'S' } else { 'N' };
    let ew = if loc.longitude_deg < 0.0 { 'W' } else { 'E' };
    let midnight = calc.midnight();
    format!(
        "[{} UTC{} {:.4}{ns} {:.4}{ew} {:.4}m]",
        midnight.date(),
        midnight.offset(),
        loc.latitude_deg.abs(),
        loc.longitude_deg.abs(),
        loc.height_m,
    )
}

fn event_label(body: Body, kind: EventKind) -> &'static str {
    match (body, kind) {
        (Body::Sun, EventKind::Rise) => "Sunrise",
        (Body::Sun, EventKind::Set) => "Sunset",
        (Body::Sun, EventKind::Transit) => "Sun transit",
        (Body::Moon, EventKind::Rise) => "Moonrise",
        (Body::Moon, EventKind::Set) => "Moonset",
        (Body::Moon, EventKind::Transit) => "Moon transit",
    }
}

fn event_line(body: Body, kind: EventKind, result: &RiseSetResult) -> String {
    let label = event_label(body, kind);
    let angle_name = if kind.reports_azimuth() { "azimuth" } else { "altitude" };
    match result {
        RiseSetResult::Event {
            instant, angle_deg, ..
        } => format!(
            "{label:<12} {} ({angle_name:>8} {angle_deg:>6.2}°)",
            instant.clock_string()
        ),
        RiseSetResult::NotWithinDay { .. } => {
            format!("{label:<12} --:--:-- ({angle_name:>8} ---.--°)")
        }
        RiseSetResult::NeverRises => {
            format!("{label:<12} --:--:-- ({angle_name:>8} ---.--°) never rises")
        }
        RiseSetResult::NeverSets => {
            format!("{label:<12} --:--:-- ({angle_name:>8} ---.--°) never sets")
        }
    }
}
