use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use phala_chart::{
    Chart, ChartError, compute_chart, compute_chart_with_phases, compute_lagna_timeline,
    compute_panchang, normalize_chart, normalize_chart_str, role_tag,
};
use phala_config::PhalaConfig;
use phala_ephemeris::{Ayanamsa, GeoLocation, Moment};
use phala_rules::{
    ALL_TRACKS, PlayerRole, RuleOutcome, Track, Verdict, evaluate, evaluate_for_role,
    map_verdict, verdict_for_outcome,
};
use phala_vedic_base::{
    ALL_GRAHAS, Dignity, Graha, NakshatraInfo, RashiInfo, dignity, nakshatra_from_longitude,
    rashi_from_longitude,
};

#[derive(Parser)]
#[command(name = "phala", about = "Vedic chart and player-versus-event scoring CLI")]
struct Cli {
    /// TOML file with ayanamsa and timeline defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MomentArgs {
    /// Local civil date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local civil time (HH:MM)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (5.5 for IST)
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    tz: f64,
    /// Ayanamsa: lahiri, raman, kp, fagan (overrides the config file)
    #[arg(long)]
    ayanamsa: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi, nakshatra and optional dignity for a sidereal longitude
    Classify {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Graha whose dignity to report at this longitude
        #[arg(long)]
        graha: Option<String>,
    },
    /// Compute a chart for a moment
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        /// Minutes after the moment when the batting phase begins
        #[arg(long)]
        batting_after: Option<i64>,
        /// Minutes after the moment when the bowling phase begins
        #[arg(long)]
        bowling_after: Option<i64>,
    },
    /// Ascendant segments across a window starting at the moment
    Timeline {
        #[command(flatten)]
        moment: MomentArgs,
        /// Window length in minutes
        #[arg(long)]
        duration: Option<i64>,
        /// Sampling step in minutes
        #[arg(long)]
        resolution: Option<i64>,
    },
    /// Score a player chart against an event chart
    Evaluate {
        /// Player chart: JSON file path or inline JSON
        #[arg(long)]
        player: String,
        /// Event chart: JSON file path or inline JSON
        #[arg(long)]
        event: String,
        /// Only this track (batting or bowling)
        #[arg(long, value_parser = parse_track)]
        track: Option<Track>,
        /// Player role: BAT, BOWL, AR, WK
        #[arg(long)]
        role: Option<PlayerRole>,
    },
    /// Map a raw score to a verdict
    Verdict {
        #[arg(allow_negative_numbers = true)]
        score: i32,
        /// batting or bowling
        #[arg(long, value_parser = parse_track)]
        track: Track,
    },
    /// Tithi, yoga, karana and weekday for a moment
    Panchang {
        #[command(flatten)]
        moment: MomentArgs,
    },
}

#[derive(Serialize)]
struct Classification {
    longitude: f64,
    rashi: RashiInfo,
    nakshatra: NakshatraInfo,
    graha: Option<Graha>,
    dignity: Option<Dignity>,
}

#[derive(Serialize)]
struct TrackReport {
    track: Track,
    outcome: RuleOutcome,
    verdict: Verdict,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn check_longitude(lon: f64) -> Result<f64, String> {
    if lon.is_finite() {
        Ok(lon)
    } else {
        Err(format!("invalid longitude: {lon} (must be a finite number of degrees)"))
    }
}

fn parse_track(s: &str) -> Result<Track, String> {
    Track::from_name(s).ok_or_else(|| format!("invalid track: {s} (batting or bowling)"))
}

fn parse_graha_name(s: &str) -> Graha {
    match Graha::from_name(s) {
        Some(g) => g,
        None => fail(format!(
            "invalid graha name: {s}; valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu"
        )),
    }
}

fn load_config(path: Option<&PathBuf>) -> PhalaConfig {
    match path {
        Some(p) => PhalaConfig::from_file(p).unwrap_or_else(|e| fail(e)),
        None => PhalaConfig::default(),
    }
}

fn require_ayanamsa(flag: Option<&str>, config: &PhalaConfig) -> Ayanamsa {
    match flag {
        Some(name) => Ayanamsa::from_name(name)
            .unwrap_or_else(|| fail(format!("invalid ayanamsa: {name} (lahiri, raman, kp, fagan)"))),
        None => config.ayanamsa().unwrap_or_else(|e| fail(e)),
    }
}

fn require_moment(args: &MomentArgs, config: &PhalaConfig) -> Moment {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .unwrap_or_else(|e| fail(format!("invalid date {}: {e}", args.date)));
    let time = NaiveTime::parse_from_str(&args.time, "%H:%M")
        .unwrap_or_else(|e| fail(format!("invalid time {}: {e}", args.time)));
    let moment = Moment::new(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        args.tz,
        GeoLocation::new(args.lat, args.lon),
    )
    .unwrap_or_else(|e| fail(e));
    moment.with_ayanamsa(require_ayanamsa(args.ayanamsa.as_deref(), config))
}

fn read_chart_source(source: &str) -> String {
    if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        fs::read_to_string(source).unwrap_or_else(|e| fail(format!("failed to read {source}: {e}")))
    }
}

fn load_chart(source: &str) -> Chart {
    normalize_chart_str(&read_chart_source(source)).unwrap_or_else(|e| fail(e))
}

/// Chart plus the role tag it carries, if any.
fn parse_tagged_chart(text: &str) -> Result<(Chart, Option<PlayerRole>), String> {
    let value: Value = serde_json::from_str(text).map_err(|e| ChartError::from(e).to_string())?;
    let role = role_tag(&value)
        .map(|tag| tag.parse::<PlayerRole>())
        .transpose()
        .map_err(|e| e.to_string())?;
    Ok((normalize_chart(&value), role))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_chart(chart: &Chart) {
    let unknown = "Unknown".to_string();
    let show = |r: Option<String>| r.unwrap_or_else(|| unknown.clone());
    println!("Ascendant:       {}", show(chart.ascendant_rashi.map(|r| r.to_string())));
    println!("Batting lagna:   {}", show(chart.batting_ascendant().map(|r| r.to_string())));
    println!("Bowling lagna:   {}", show(chart.bowling_ascendant().map(|r| r.to_string())));
    println!("Moon rashi:      {}", show(chart.moon_rashi.map(|r| r.to_string())));
    println!(
        "Moon nakshatra:  {}{}",
        show(chart.moon_nakshatra.map(|n| n.to_string())),
        chart.moon_pada.map(|p| format!(" pada {p}")).unwrap_or_default()
    );
    println!();
    for g in ALL_GRAHAS {
        let Some(lon) = chart.longitude(g) else {
            continue;
        };
        let rashi = rashi_from_longitude(lon);
        let dignity = chart.dignity_of(g).map(|d| d.name()).unwrap_or("-");
        println!(
            "{:<8} {:>9.4}  {:<20} {:>2} deg {:>2} min  {}",
            g.english_name(),
            lon,
            rashi.rashi.to_string(),
            rashi.dms.degrees,
            rashi.dms.minutes,
            dignity
        );
    }
}

fn print_outcome(report: &TrackReport) {
    let out = &report.outcome;
    println!(
        "{}: score {}{}{} - {} ({})",
        report.track,
        out.score,
        if out.is_sure_flop() { " [sure flop]" } else { "" },
        if out.is_special { " [special]" } else { "" },
        report.verdict.label,
        report.verdict.localized_label,
    );
    println!("  {}", report.verdict.message);
    for entry in &out.trace {
        println!("  {:+3}  {:<24} {}", entry.delta, entry.rule_id, entry.short_label);
    }
}

fn main() {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Classify { lon, graha } => {
            let lon = check_longitude(lon).unwrap_or_else(|e| fail(e));
            let graha = graha.as_deref().map(parse_graha_name);
            let report = Classification {
                longitude: lon,
                rashi: rashi_from_longitude(lon),
                nakshatra: nakshatra_from_longitude(lon),
                graha,
                dignity: graha.map(|g| dignity(g, lon)),
            };
            if cli.json {
                print_json(&report);
            } else {
                let dms = report.rashi.dms;
                println!(
                    "{} - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                    report.rashi.rashi, dms.degrees, dms.minutes, dms.seconds,
                    report.rashi.degrees_in_rashi
                );
                println!(
                    "{} (lord {}) - Pada {} ({:.4} deg in nakshatra)",
                    report.nakshatra.nakshatra,
                    report.nakshatra.nakshatra.lord(),
                    report.nakshatra.pada,
                    report.nakshatra.degrees_in_nakshatra
                );
                if let (Some(g), Some(d)) = (report.graha, report.dignity) {
                    println!("{g}: {d}");
                }
            }
        }

        Commands::Chart {
            moment,
            batting_after,
            bowling_after,
        } => {
            let moment = require_moment(&moment, &config);
            let phase = |after: Option<i64>| {
                after.map(|m| moment.plus_minutes(m).unwrap_or_else(|e| fail(e)))
            };
            let batting = phase(batting_after);
            let bowling = phase(bowling_after);
            let chart = if batting.is_some() || bowling.is_some() {
                compute_chart_with_phases(&moment, batting.as_ref(), bowling.as_ref())
            } else {
                compute_chart(&moment)
            }
            .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&chart);
            } else {
                println!("Ayanamsa: {}", moment.ayanamsa);
                print_chart(&chart);
            }
        }

        Commands::Timeline {
            moment,
            duration,
            resolution,
        } => {
            let moment = require_moment(&moment, &config);
            let duration = duration.unwrap_or(config.timeline.duration_minutes);
            let resolution = resolution.unwrap_or(config.timeline.resolution_minutes);
            let segments =
                compute_lagna_timeline(&moment, duration, resolution).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&segments);
            } else {
                for s in &segments {
                    println!(
                        "{} -> {}  {:<22} lord {}",
                        s.start.format("%Y-%m-%d %H:%M"),
                        s.end.format("%H:%M"),
                        s.rashi.to_string(),
                        s.lord
                    );
                }
            }
        }

        Commands::Evaluate {
            player,
            event,
            track,
            role,
        } => {
            let (player, tagged_role) =
                parse_tagged_chart(&read_chart_source(&player)).unwrap_or_else(|e| fail(e));
            let role = role.or(tagged_role);
            if let Some(role) = role {
                debug!(role = role.code(), "evaluating with player role");
            }
            let event = load_chart(&event);
            let tracks: Vec<Track> = match track {
                Some(t) => vec![t],
                None => ALL_TRACKS.to_vec(),
            };
            let reports: Vec<TrackReport> = tracks
                .into_iter()
                .map(|track| {
                    let outcome = match role {
                        Some(role) => evaluate_for_role(role, &player, &event, track),
                        None => evaluate(&player, &event, track),
                    };
                    TrackReport {
                        track,
                        verdict: verdict_for_outcome(&outcome, track),
                        outcome,
                    }
                })
                .collect();
            if cli.json {
                print_json(&reports);
            } else {
                for report in &reports {
                    print_outcome(report);
                }
            }
        }

        Commands::Verdict { score, track } => {
            let verdict = map_verdict(score, track);
            if cli.json {
                print_json(&verdict);
            } else {
                println!(
                    "{} ({}) - confidence {:?}, severity {:?}",
                    verdict.label, verdict.localized_label, verdict.confidence, verdict.severity
                );
                println!("{}", verdict.message);
            }
        }

        Commands::Panchang { moment } => {
            let moment = require_moment(&moment, &config);
            let info = compute_panchang(&moment).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "Tithi:  {} ({} paksha, {} of 15)",
                    info.tithi.tithi.name(),
                    info.tithi.paksha.name(),
                    info.tithi.tithi_in_paksha
                );
                println!("Yoga:   {}", info.yoga.yoga.name());
                println!("Karana: {}", info.karana.karana.name());
                println!("Vaar:   {} ({})", info.vaar.name(), info.vaar.english_name());
                println!("Moon-Sun elongation: {:.4} deg", info.elongation_deg);
            }
        }
    }
}
