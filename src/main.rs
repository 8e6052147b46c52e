use color_eyre::eyre::{eyre, WrapErr};
use env_logger::Env;
use franchise_core::utils::TimeEstimation;
use franchise_core::{process_league_week, EngineConfig, LeagueWeek, SeededRolls, WeightedOveralls};
use log::info;
use std::env;
use std::fs;

fn load_config() -> color_eyre::Result<EngineConfig> {
    match env::var("AI_CONFIG") {
        Ok(path) => {
            let raw = fs::read_to_string(&path).wrap_err_with(|| format!("reading config {}", path))?;
            let config = serde_json::from_str(&raw).wrap_err_with(|| format!("parsing config {}", path))?;
            info!("config loaded from {}", path);
            Ok(config)
        }
        Err(_) => Ok(EngineConfig::default()),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: franchise_ai <league-week.json>"))?;

    let config = load_config()?;

    let raw = fs::read_to_string(&path).wrap_err_with(|| format!("reading snapshot {}", path))?;
    let mut league: LeagueWeek = serde_json::from_str(&raw).wrap_err_with(|| format!("parsing snapshot {}", path))?;

    league.resolve_weeks();
    league.validate()?;

    if env::var("RATINGS") == Ok(String::from("recompute")) {
        league.refresh_ratings(&WeightedOveralls);
        info!("ratings recomputed for {} teams", league.teams.len());
    }

    let rolls = SeededRolls::new(league.session_seed);

    let (actions, estimated) = TimeEstimation::estimate(|| process_league_week(&league, &config, &rolls));

    info!("{} teams decided: {} ms", actions.len(), estimated);

    println!("{}", serde_json::to_string_pretty(&actions)?);

    Ok(())
}
