//! Breakout entry point
//!
//! Runs the simulation headless with the autopilot at the paddle. A real
//! window/renderer plugs into `breakout::runner` the same way the sinks here do.
//!
//! Example:
//!   RUST_LOG=debug cargo run -- --config breakout.json --ticks 0 --realtime
//!   cargo run -- --json --ticks 600 > frames.jsonl

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use breakout::runner::{FrameLimiter, FrameSink, JsonLinesSink, RunStats, run};
use breakout::sim::{Autopilot, Frame, GameEvent, GameState, TickReport};
use breakout::{BrickHitPolicy, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Breakout simulation", long_about = None)]
struct Args {
    /// JSON config file (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after this many ticks (0 = until the field is cleared)
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,
    /// Pace the loop at the simulation rate instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Write every frame as a JSON line to stdout
    #[arg(long)]
    json: bool,
    /// Override the multi-brick hit policy
    #[arg(long, value_enum)]
    policy: Option<BrickHitPolicy>,
    /// Autopilot dead zone in pixels
    #[arg(long, default_value_t = 4.0)]
    dead_zone: f32,
    /// Keep running after the last brick is destroyed
    #[arg(long)]
    keep_going: bool,
}

/// Logs events and a periodic status line
struct LogSink {
    every: u64,
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &Frame, report: &TickReport) -> io::Result<()> {
        for event in &report.events {
            if let GameEvent::BrickDestroyed { id, axis } = event {
                log::debug!("tick {}: brick {} destroyed ({:?})", frame.tick, id, axis);
            }
        }
        if self.every > 0 && frame.tick % self.every == 0 {
            log::info!(
                "tick {}: ball {:?}, paddle x={:.1}, {} bricks left",
                frame.tick,
                frame.ball.position,
                frame.paddle.position.x,
                frame.bricks.len()
            );
        }
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(policy) = args.policy {
        config.brick_hits = policy;
    }
    config.log_warnings();
    Ok(config)
}

fn summary(stats: &RunStats, state: &GameState) -> String {
    format!(
        "{} ticks, {} bricks destroyed ({} left), {} paddle hits, stopped on {}",
        stats.ticks,
        stats.bricks_destroyed,
        state.bricks.len(),
        stats.paddle_hits,
        stats.stop.as_str()
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Breakout (headless) starting...");

    let config = load_config(&args)?;
    let mut state = GameState::new(&config);
    let mut pilot = Autopilot {
        dead_zone: args.dead_zone,
        quit_when_cleared: !args.keep_going,
    };
    let mut limiter = if args.realtime {
        FrameLimiter::default()
    } else {
        FrameLimiter::unlimited()
    };
    let max_ticks = (args.ticks > 0).then_some(args.ticks);

    if args.json {
        let stdout = io::stdout();
        let mut sink = JsonLinesSink::new(BufWriter::new(stdout.lock()));
        let stats = run(&mut state, &mut pilot, &mut sink, &mut limiter, max_ticks)
            .context("write frames to stdout")?;
        sink.into_inner().flush().context("flush stdout")?;
        eprintln!("{}", summary(&stats, &state));
    } else {
        let mut sink = LogSink { every: 600 };
        let stats = run(&mut state, &mut pilot, &mut sink, &mut limiter, max_ticks)?;
        println!("{}", summary(&stats, &state));
    }

    Ok(())
}
