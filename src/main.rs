//! Pixel Quest headless driver
//!
//! Runs the simulation in idle mode with the autopilot at the controls,
//! renders every frame into a logging sink and reports a summary.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use pixel_quest::clock::FixedClock;
use pixel_quest::render::{Frame, RenderSink, build_frame};
use pixel_quest::settings::Settings;
use pixel_quest::sim::{GamePhase, GameState, TickControl, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "pixel-quest")]
#[command(about = "Headless Pixel Quest run driven by the autopilot")]
struct Cli {
    /// Base seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3_600)]
    ticks: u64,
    /// Pace ticks with the wall clock instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Settings file (defaults to $PIXEL_QUEST_CONFIG or config/pixel_quest.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the run summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Outcome of a driver run
#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    runs: u32,
    wins: u32,
    deaths: u32,
    final_phase: String,
    score: u32,
    health: i32,
    coins_collected: usize,
    coins_total: usize,
    frames_presented: u64,
}

/// Sink that logs a digest of each frame
#[derive(Debug, Default)]
struct LogSink {
    presented: u64,
    last_hud: Vec<String>,
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        let hud: Vec<String> = frame.texts().map(str::to_string).collect();
        if hud != self.last_hud {
            log::debug!("frame {}: {} commands, {:?}", self.presented, frame.len(), hud);
            self.last_hud = hud;
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(Settings::load()),
    }
}

fn run(cli: &Cli, settings: &Settings) -> RunSummary {
    let seed = cli.seed.unwrap_or(settings.seed);
    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut sink = LogSink::default();
    let mut clock = FixedClock::new(settings.tick_rate_hz, settings.max_substeps);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut summary = RunSummary {
        seed,
        ..Default::default()
    };
    let mut last_frame = Instant::now();
    let mut quit = false;

    while !quit && summary.ticks < cli.ticks {
        let due = if cli.realtime {
            let now = Instant::now();
            let due = clock.advance(now - last_frame);
            last_frame = now;
            if due == 0 {
                std::thread::sleep(clock.until_next_tick());
                continue;
            }
            due
        } else {
            1
        };

        for _ in 0..due {
            if summary.ticks >= cli.ticks {
                break;
            }
            let before = state.phase;
            if tick(&mut state, &input) == TickControl::Quit {
                quit = true;
                break;
            }
            summary.ticks += 1;
            if before != state.phase {
                match state.phase {
                    GamePhase::Win => summary.wins += 1,
                    GamePhase::GameOver => summary.deaths += 1,
                    _ => {}
                }
            }
        }
        sink.present(&build_frame(&state));
    }

    let player = state.player();
    summary.runs = state.runs;
    summary.final_phase = state.phase.as_str().to_string();
    summary.score = player.score;
    summary.health = player.health;
    summary.coins_collected = state.collected_coins();
    summary.coins_total = state.level.total_coins;
    summary.frames_presented = sink.presented;
    summary
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Pixel Quest (headless) starting...");

    let settings = load_settings(&cli)?;
    let summary = run(&cli, &settings);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "seed {} | {} ticks | {} runs ({} wins, {} deaths) | {} | score {} | coins {}/{}",
            summary.seed,
            summary.ticks,
            summary.runs,
            summary.wins,
            summary.deaths,
            summary.final_phase,
            summary.score,
            summary.coins_collected,
            summary.coins_total
        );
    }
    Ok(())
}
