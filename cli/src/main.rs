//! TreeKin command-line front end: Tredits breakdowns, carbon estimates
//! and leaderboards.

mod config;
mod report;

use anyhow::Context;
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use config::{CliConfig, ZoneChoice};
use std::path::PathBuf;
use treekin_carbon::{leaderboard, TreeMeasurements, UserRecord};
use treekin_tredits::TreditsEngine;
use treekin_types::{parse_planted_at, Timestamp};
use treekin_utils::LogFormat;

#[derive(Parser)]
#[command(name = "treekin", about = "TreeKin Tredits and carbon calculator")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, global = true, env = "TREEKIN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "TREEKIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "TREEKIN_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the Tredits breakdown for a tree portfolio.
    Breakdown {
        /// Trees planted. Defaults to the number of dates given.
        #[arg(long, allow_negative_numbers = true)]
        trees: Option<i64>,

        /// Planting date (ISO-8601); repeat once per tree.
        #[arg(long = "date", value_name = "DATE")]
        dates: Vec<String>,

        /// Evaluate as of this RFC 3339 instant instead of the system clock.
        #[arg(long)]
        now: Option<String>,

        /// Resolve offset-less dates in UTC instead of the configured zone.
        #[arg(long)]
        utc: bool,

        /// Also print one accrual line per tree.
        #[arg(long)]
        detail: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Estimate a tree's annual CO2 absorption and its Tredit value.
    Estimate {
        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        age_months: Option<u32>,

        #[arg(long)]
        height_cm: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Rank users from a JSON file of user records.
    Leaderboard {
        /// JSON array of user records.
        #[arg(long)]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Board::Planters)]
        board: Board,

        /// Maximum rows (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Board {
    Planters,
    Adopters,
    Carbon,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (file_config, config_error) = match cli.config.as_deref() {
        Some(path) => match CliConfig::from_toml_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (CliConfig::default(), Some(e)),
        },
        None => (CliConfig::default(), None),
    };

    let config = CliConfig {
        log_level: cli.log_level.unwrap_or(file_config.log_level.clone()),
        log_format: cli.log_format.unwrap_or(file_config.log_format.clone()),
        ..file_config
    };

    let log_format = config.log_format.parse::<LogFormat>().unwrap_or_else(|e| {
        eprintln!("{e}; falling back to human logs");
        LogFormat::Human
    });
    treekin_utils::init_logging(log_format, &config.log_level);

    if let Some(e) = config_error {
        tracing::warn!("{e}, using defaults");
    } else if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Breakdown {
            trees,
            dates,
            now,
            utc,
            detail,
            json,
        } => {
            let now = now
                .map(|s| {
                    parse_planted_at(&s, &Utc).with_context(|| format!("invalid --now {s:?}"))
                })
                .transpose()?;
            let trees = trees.unwrap_or(dates.len() as i64);
            let zone = if utc { ZoneChoice::Utc } else { config.timezone };
            tracing::info!(trees, dates = dates.len(), ?now, ?zone, "computing breakdown");
            match zone {
                ZoneChoice::Utc => {
                    let engine = TreditsEngine::with_timezone(Utc);
                    run_breakdown(&engine, trees, &dates, now, detail, json)?
                }
                ZoneChoice::Local => {
                    let engine = TreditsEngine::new();
                    run_breakdown(&engine, trees, &dates, now, detail, json)?
                }
            }
        }

        Command::Estimate {
            species,
            age_months,
            height_cm,
            json,
        } => {
            let estimate = treekin_carbon::estimate(&TreeMeasurements {
                species,
                age_months,
                height_cm,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                print!("{}", report::render_estimate(&estimate));
            }
        }

        Command::Leaderboard {
            input,
            board,
            limit,
            json,
        } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let users: Vec<UserRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse user records in {}", input.display()))?;
            let limit = limit.unwrap_or(config.leaderboard_limit);
            tracing::info!(users = users.len(), ?board, limit, "ranking leaderboard");

            match board {
                Board::Planters => {
                    let entries = leaderboard::planters(&users, limit);
                    emit(json, &entries, || report::render_planters(&entries))?;
                }
                Board::Adopters => {
                    let entries = leaderboard::adopters(&users, limit)?;
                    emit(json, &entries, || report::render_adopters(&entries))?;
                }
                Board::Carbon => {
                    let entries = leaderboard::carbon(&users, limit);
                    emit(json, &entries, || report::render_carbon(&entries))?;
                }
            }
        }
    }

    Ok(())
}

/// Without `--now` and `--detail` the engine reads the clock itself;
/// otherwise one instant is shared by the breakdown and the per-tree rows.
fn run_breakdown<Tz: TimeZone>(
    engine: &TreditsEngine<Tz>,
    trees: i64,
    dates: &[String],
    now: Option<Timestamp>,
    detail: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (breakdown, rows) = match now {
        None if !detail => (engine.compute_breakdown_now(trees, dates), Vec::new()),
        now => {
            let now = now.unwrap_or_else(Timestamp::now);
            let rows = if detail {
                engine.accrual_report(dates, now)
            } else {
                Vec::new()
            };
            (engine.compute_breakdown(trees, dates, now), rows)
        }
    };

    if json {
        let value = if detail {
            serde_json::json!({ "breakdown": breakdown, "trees": rows })
        } else {
            serde_json::to_value(breakdown)?
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", report::render_breakdown(&breakdown));
        if detail {
            print!("{}", report::render_accruals(&rows));
        }
    }
    Ok(())
}

fn emit<T: serde::Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
