//! Wagerline - Entry Point
//!
//! Small command line front end over the engines: prints the level table,
//! looks up a player's progress, and runs seeded draw simulations.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wagerline::data::{export_default_config, GameConfig, DEFAULT_CONFIG_PATH};
use wagerline::progression::format_table;
use wagerline::reward::{simulate, DrawMode, Multiplier, RngSampler};

const USAGE: &str = "\
usage: wagerline [--config <path>] <command>

commands:
  table                                   print the level table and tier summary
  level <total-wagered> [net-loss]        show level, tier, progress and daily cashback
  simulate <pool> <multiplier> <rounds> [seed] [--mode value|probability] [--json]
  export-config [path]                    write the default config as RON";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = take_option(&mut args, "--config")?
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let mode = take_option(&mut args, "--mode")?;
    let json = take_flag(&mut args, "--json");

    let command = args.first().map(String::as_str).unwrap_or("table");
    if command == "export-config" {
        let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
        return export_default_config(Path::new(path))
            .with_context(|| format!("failed to export config to {}", path));
    }

    let config = GameConfig::load(Path::new(&config_path))
        .with_context(|| format!("failed to load config from {}", config_path))?;

    match command {
        "table" => print_table(&config),
        "level" => print_level(&config, &args[1..]),
        "simulate" => run_simulation(&config, &args[1..], mode.as_deref(), json),
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command '{}'\n\n{}", other, USAGE),
    }
}

fn print_table(config: &GameConfig) -> Result<()> {
    let engine = &config.progression;
    let rows = engine.level_rows(1..=engine.curve.top_level())?;
    let summaries = engine.tier_summaries()?;
    print!("{}", format_table(&rows, &summaries));
    Ok(())
}

fn print_level(config: &GameConfig, args: &[String]) -> Result<()> {
    let total: u64 = args
        .first()
        .context("missing <total-wagered>")?
        .parse()
        .context("<total-wagered> must be a whole number")?;

    let progress = config.progression.progress(total)?;
    println!("level:     {}", progress.level);
    println!("tier:      {} ({})", progress.tier, progress.tier.local_name());
    println!("cashback:  {}%", progress.tier.cashback_percent());
    if let Some(net_loss) = args.get(1) {
        let net_loss: f64 = net_loss.parse().context("[net-loss] must be a number")?;
        match config.progression.cashback_for(progress.level, net_loss)? {
            Some(amount) => println!("payout:    {:.2}", amount),
            None => println!("payout:    none"),
        }
    }
    println!("reached:   {}", progress.current_required);
    match (progress.next_required, progress.remaining_to_next) {
        (Some(next), Some(remaining)) => println!("next:      {} ({} to go)", next, remaining),
        _ => println!("next:      top level reached"),
    }
    Ok(())
}

fn run_simulation(config: &GameConfig, args: &[String], mode: Option<&str>, json: bool) -> Result<()> {
    let [pool_name, multiplier, rounds, rest @ ..] = args else {
        bail!("simulate needs <pool> <multiplier> <rounds>\n\n{}", USAGE);
    };

    let pool = config.pool(pool_name)?;
    let multiplier = Multiplier::new(multiplier.parse().context("<multiplier> must be a number")?)?;
    let rounds: u64 = rounds.parse().context("<rounds> must be a whole number")?;
    let seed: u64 = match rest.first() {
        Some(seed) => seed.parse().context("[seed] must be a whole number")?,
        None => rand::random(),
    };
    let mode = match mode {
        Some(mode) => mode.parse::<DrawMode>().map_err(anyhow::Error::msg)?,
        None => config.draw_mode,
    };

    log::info!(
        "Simulating {} rounds of {} at {}x ({} mode, seed {})",
        rounds,
        pool_name,
        multiplier.value(),
        mode.name(),
        seed
    );

    let mut sampler = RngSampler::new(StdRng::seed_from_u64(seed));
    let summary = simulate(pool, multiplier, mode, rounds, &mut sampler);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("rounds:      {}", summary.rounds);
        println!("wins:        {}", summary.wins);
        println!("win rate:    {:.4}", summary.win_rate);
        println!("total paid:  {:.2}", summary.total_paid);
        println!("mean payout: {:.4}", summary.mean_payout);
    }
    Ok(())
}

/// Remove `--name value` from `args` and return the value
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(idx) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if idx + 1 >= args.len() {
        bail!("{} needs a value", name);
    }
    let value = args.remove(idx + 1);
    args.remove(idx);
    Ok(Some(value))
}

fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    match args.iter().position(|a| a == name) {
        Some(idx) => {
            args.remove(idx);
            true
        }
        None => false,
    }
}
