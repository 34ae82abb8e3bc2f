use std::fmt;

use atelier_core::model::{Catalog, CourseId, FilterState, Track, Year};
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    track: Track,
    wishlist: Vec<CourseId>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTrack { raw: String },
    InvalidCourseId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTrack { raw } => {
                write!(f, "invalid --track value (expected exam-prep or year-1..year-5): {raw}")
            }
            ArgsError::InvalidCourseId { raw } => {
                write!(f, "unknown course id in --wishlist: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_track(raw: &str) -> Result<Track, ArgsError> {
    if raw == "exam-prep" {
        return Ok(Track::ExamPrep);
    }
    raw.strip_prefix("year-")
        .and_then(|digits| digits.parse::<u8>().ok())
        .and_then(|value| Year::new(value).ok())
        .map(Track::Year)
        .ok_or_else(|| ArgsError::InvalidTrack {
            raw: raw.to_string(),
        })
}

impl Args {
    fn parse(catalog: &Catalog) -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("ATELIER_DB_URL").unwrap_or_else(|_| "sqlite:dev.sqlite3".into());
        let mut track = std::env::var("ATELIER_TRACK")
            .ok()
            .and_then(|value| parse_track(&value).ok())
            .unwrap_or(Track::ExamPrep);
        let mut wishlist: Vec<CourseId> = Vec::new();

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--track" => {
                    let value = require_value(&mut args, "--track")?;
                    track = parse_track(&value)?;
                }
                "--wishlist" => {
                    let value = require_value(&mut args, "--wishlist")?;
                    for raw in value.split(',').map(str::trim).filter(|raw| !raw.is_empty()) {
                        let id = CourseId::new(raw).map_err(|_| ArgsError::InvalidCourseId {
                            raw: raw.to_string(),
                        })?;
                        if !catalog.contains(&id) {
                            return Err(ArgsError::InvalidCourseId {
                                raw: raw.to_string(),
                            });
                        }
                        wishlist.push(id);
                    }
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            track,
            wishlist,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite:dev.sqlite3)");
    eprintln!("  --track <track>           Student track: exam-prep or year-1..year-5");
    eprintln!("  --wishlist <ids>          Comma-separated course ids to wishlist");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  ATELIER_DB_URL, ATELIER_TRACK");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seed();
    let args = Args::parse(&catalog).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;

    storage.student_prefs.save_track(args.track).await?;
    storage
        .course_prefs
        .save_filter(&FilterState::default())
        .await?;
    for id in &args.wishlist {
        storage.course_prefs.add_wishlist(id).await?;
    }

    println!(
        "Seeded {} with default filter, {} wishlist entries into {}",
        match args.track {
            Track::ExamPrep => "exam-prep track".to_string(),
            Track::Year(year) => format!("year-{year} track"),
        },
        args.wishlist.len(),
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
