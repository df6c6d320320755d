//! Single-threaded frame loop
//!
//! One thread owns the whole `GameState`. Each iteration samples input once,
//! runs exactly one tick and presents the resulting frame. A quit request
//! ends the loop after that tick's frame has been presented.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::consts::SIM_DT;
use crate::sim::{Autopilot, Frame, GameEvent, GameState, TickInput, TickReport, tick};

/// Non-blocking per-tick input
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Consumer of per-tick frames (a renderer, a recorder, ...)
pub trait FrameSink {
    fn present(&mut self, frame: &Frame, report: &TickReport) -> io::Result<()>;
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        self.input(state)
    }
}

/// Closure-backed input source
pub struct FnInput<F>(pub F);

impl<F: FnMut(&GameState) -> TickInput> InputSource for FnInput<F> {
    fn poll(&mut self, state: &GameState) -> TickInput {
        (self.0)(state)
    }
}

/// Replays a fixed list of inputs, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, next: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        let input = self.inputs.get(self.next).copied().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        });
        self.next += 1;
        input
    }
}

/// Sink that drops every frame
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _frame: &Frame, _report: &TickReport) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each frame and its events as one JSON object per line
pub struct JsonLinesSink<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct FrameLine<'a> {
    #[serde(flatten)]
    frame: &'a Frame,
    events: &'a [GameEvent],
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &Frame, report: &TickReport) -> io::Result<()> {
        let line = FrameLine {
            frame,
            events: &report.events,
        };
        serde_json::to_writer(&mut self.out, &line).map_err(io::Error::from)?;
        self.out.write_all(b"\n")
    }
}

/// Paces the loop to a fixed frame period
#[derive(Debug)]
pub struct FrameLimiter {
    period: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(SIM_DT))
    }
}

impl FrameLimiter {
    pub fn new(period: Duration) -> Self {
        Self {
            period: Some(period),
            next_deadline: None,
        }
    }

    /// Never sleeps
    pub fn unlimited() -> Self {
        Self {
            period: None,
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Sleep until the next frame deadline
    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) => deadline,
            None => {
                self.next_deadline = Some(now + period);
                return;
            }
        };
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + period);
        } else {
            // Fell behind: resync rather than bursting to catch up
            self.next_deadline = Some(now + period);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Input requested quit
    Quit,
    /// Reached the caller's tick limit
    TickLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Quit => "quit",
            StopReason::TickLimit => "tick limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub bricks_destroyed: usize,
    pub paddle_hits: u64,
    pub stop: StopReason,
}

/// Drive the game until quit or `max_ticks` ticks have run
pub fn run<I, S>(
    state: &mut GameState,
    input: &mut I,
    sink: &mut S,
    limiter: &mut FrameLimiter,
    max_ticks: Option<u64>,
) -> io::Result<RunStats>
where
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
{
    log::info!(
        "Starting loop: {} bricks, tick limit {:?}, period {:?}",
        state.bricks.len(),
        max_ticks,
        limiter.period()
    );

    let mut ticks = 0;
    let mut bricks_destroyed = 0;
    let mut paddle_hits = 0;

    let stop = loop {
        if max_ticks.is_some_and(|max| ticks >= max) {
            break StopReason::TickLimit;
        }

        let tick_input = input.poll(state);
        let report = tick(state, &tick_input);
        ticks += 1;
        bricks_destroyed += report.bricks_destroyed();
        if report.paddle_hit() {
            paddle_hits += 1;
        }

        sink.present(&state.frame(), &report)?;

        if report.quit {
            break StopReason::Quit;
        }
        limiter.wait();
    };

    let stats = RunStats {
        ticks,
        bricks_destroyed,
        paddle_hits,
        stop,
    };
    log::info!(
        "Loop stopped ({}): {} ticks, {} bricks destroyed, {} paddle hits",
        stats.stop.as_str(),
        stats.ticks,
        stats.bricks_destroyed,
        stats.paddle_hits
    );
    Ok(stats)
}
