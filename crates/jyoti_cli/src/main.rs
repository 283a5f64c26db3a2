use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use jyoti_chart::{ChartError, build_chart, sanity_check};
use jyoti_core::{CoreError, ZodiacalPosition, parse_point_list};
use jyoti_ephem::{AnalyticEphemeris, EphemerisConfig, EphemerisError};
use jyoti_search::{Dasha, DashaConfig, DashaTree, SearchError, transits_at};
use jyoti_time::{TimeError, ZonedInstant};
use jyoti_vedic::{ChartType, Nakshatra, VedicError, to_varga};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyoti", about = "Charts, vargas, dashas and transits as JSON")]
struct Cli {
    /// TOML file with [ephemeris] and [dasha] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Indent the JSON output
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart snapshot at an instant and place
    Chart {
        /// RFC 3339 instant, or local YYYY-MM-DDTHH:MM in --zone
        #[arg(long)]
        date: String,
        /// IANA zone for local input and for display
        #[arg(long, default_value = "UTC")]
        zone: String,
        /// Geographic longitude, degrees east
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Geographic latitude, degrees north
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// tropical, d1, d4, d7, d9 or d10
        #[arg(long, default_value = "d1")]
        chart_type: ChartType,
        /// Point set (traditional, modern, vedic) or comma-separated ids
        #[arg(long, default_value = "vedic")]
        points: String,
    },
    /// Vimshottari dashas from a birth instant
    Dasha {
        /// RFC 3339 instant, or local YYYY-MM-DDTHH:MM in --zone
        #[arg(long)]
        birth: String,
        #[arg(long, default_value = "UTC")]
        zone: String,
        /// Report the dasha running at this instant instead of at birth
        #[arg(long)]
        at: Option<String>,
        /// Report all 81 periods
        #[arg(long, conflicts_with = "at")]
        all: bool,
    },
    /// Divisional position of a sidereal longitude
    Varga {
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        chart_type: ChartType,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Every ingress and aspect journey running at an instant
    Transits {
        /// RFC 3339 instant, or local YYYY-MM-DDTHH:MM in --zone
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "UTC")]
        zone: String,
    },
    /// Build a reference chart and check it against known positions
    Sanity,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("no dasha runs at {0}")]
    NoDasha(DateTime<Utc>),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contents of the `--config` file. Both sections are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    ephemeris: EphemerisConfig,
    dasha: DashaConfig,
}

impl Config {
    fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(text)?;
        config.ephemeris.validate().map_err(CliError::InvalidConfig)?;
        config.dasha.validate().map_err(CliError::InvalidConfig)?;
        Ok(config)
    }
}

fn parse_zone(zone: &str) -> Result<Tz, CliError> {
    zone.parse::<Tz>()
        .map_err(|_| CliError::Time(TimeError::UnknownZone(zone.to_string())))
}

/// An RFC 3339 instant (displayed in `zone`), or a local wall-clock time
/// in `zone`.
fn parse_instant(s: &str, zone: &str) -> Result<ZonedInstant, CliError> {
    let tz = parse_zone(zone)?;
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(ZonedInstant::in_zone(t.with_timezone(&Utc), tz));
    }
    Ok(ZonedInstant::parse_local(s, zone)?)
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashaReport {
    nakshatra: Nakshatra,
    fraction_remaining: f64,
    dashas: Vec<Dasha>,
}

fn dasha_report(
    tree: &DashaTree,
    at: Option<DateTime<Utc>>,
    all: bool,
    tz: Tz,
) -> Result<DashaReport, CliError> {
    let in_zone = |d: &Dasha| Dasha {
        interval: d.interval.with_zone(tz),
        ..*d
    };
    let dashas = if all {
        tree.iter().map(in_zone).collect()
    } else {
        let t = at.unwrap_or_else(|| tree.birth());
        let d = tree.lookup(t).ok_or(CliError::NoDasha(t))?;
        vec![in_zone(d)]
    };
    Ok(DashaReport {
        nakshatra: tree.nakshatra(),
        fraction_remaining: tree.fraction_remaining(),
        dashas,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load(cli.config.as_deref())?;
    let eph = AnalyticEphemeris::new(config.ephemeris)?;

    match cli.command {
        Commands::Chart {
            date,
            zone,
            lon,
            lat,
            chart_type,
            points,
        } => {
            let time = parse_instant(&date, &zone)?;
            let points = parse_point_list(&points)?;
            let chart = build_chart(&eph, time, lon, lat, chart_type, &points)?;
            emit(&chart, cli.pretty)
        }

        Commands::Dasha {
            birth,
            zone,
            at,
            all,
        } => {
            let birth = parse_instant(&birth, &zone)?;
            let at = at
                .map(|s| parse_instant(&s, &zone).map(|z| z.to_utc()))
                .transpose()?;
            let tree = DashaTree::for_birth(&eph, birth.to_utc(), &config.dasha)?;
            let report = dasha_report(&tree, at, all, birth.zone())?;
            emit(&report, cli.pretty)
        }

        Commands::Varga { lon, chart_type } => {
            let pos = ZodiacalPosition::from_longitude(lon);
            let varga = to_varga(&pos, chart_type)?;
            emit(
                &json!({
                    "chartType": chart_type,
                    "longitude": lon,
                    "position": pos,
                    "varga": varga,
                }),
                cli.pretty,
            )
        }

        Commands::Nakshatra { lon } => {
            let n = Nakshatra::from_longitude(lon);
            emit(
                &json!({
                    "nakshatra": n,
                    "lord": n.mahadasha_lord(),
                    "minLongitude": n.min_longitude(),
                    "maxLongitude": n.max_longitude(),
                    "fractionRemaining": n.fraction_remaining(lon),
                }),
                cli.pretty,
            )
        }

        Commands::Transits { date, zone } => {
            let time = parse_instant(&date, &zone)?;
            let transits = transits_at(&eph, time.to_utc())?;
            if transits.is_empty() {
                warn!(date = %time, "no transits found");
            }
            emit(&transits, cli.pretty)
        }

        Commands::Sanity => {
            let chart = sanity_check(&eph)?;
            emit(&chart, cli.pretty)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
