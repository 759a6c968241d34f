use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use gochara_base::{ALL_GRAHAS, Graha, deg_to_dms, nakshatra_from_longitude, rashi_from_longitude};
use gochara_timeline::{TransitLane, annual_timeline};

#[derive(Parser)]
#[command(name = "gochara", about = "Gochara transit timeline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Annual transit timeline for a set of grahas
    Transits {
        /// Target year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Graha to include, repeatable (default: Sun, Moon, Jupiter, Saturn)
        #[arg(long = "graha")]
        grahas: Vec<String>,
        /// Include all nine grahas
        #[arg(long)]
        all: bool,
    },
}

/// Initial body set of the timeline view.
const DEFAULT_GRAHAS: [Graha; 4] = [Graha::Surya, Graha::Chandra, Graha::Guru, Graha::Shani];

fn parse_graha_name(s: &str) -> Graha {
    Graha::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid graha name: {s}");
        eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
        std::process::exit(1);
    })
}

fn print_lane(lane: &TransitLane) {
    println!(
        "{} ({}) - {} segments",
        lane.graha.name(),
        lane.graha.english_name(),
        lane.segments.len()
    );
    for seg in &lane.segments {
        println!(
            "  {} -> {}  {:>3}d  {:<11} {:<17} pada {}  ({:.4} deg)",
            seg.start.format("%Y-%m-%d"),
            seg.end.format("%Y-%m-%d"),
            seg.duration_days(),
            seg.rashi.western_name(),
            seg.nakshatra.name(),
            seg.pada,
            seg.start_longitude_deg
        );
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
            println!(
                "Code {}  #{}  Tattva {} ({})",
                info.rashi.code(),
                info.rashi.number(),
                info.rashi.tattva().name(),
                info.rashi.tattva().english_name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra.number(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
            println!(
                "Ruler: {} ({})",
                info.nakshatra.ruler().name(),
                info.nakshatra.ruler().english_name()
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }

        Commands::Transits { year, grahas, all } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let selected: Vec<Graha> = if all {
                ALL_GRAHAS.to_vec()
            } else if grahas.is_empty() {
                DEFAULT_GRAHAS.to_vec()
            } else {
                grahas.iter().map(|s| parse_graha_name(s)).collect()
            };
            let timeline = annual_timeline(year, &selected).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("Transit timeline for {}", timeline.year);
            for lane in &timeline.lanes {
                print_lane(lane);
            }
        }
    }
}
