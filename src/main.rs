//! Terminal Snake runner (default binary).
//!
//! Fixed 60 Hz loop: poll at most one input event per tick, advance the state machine
//! once per elapsed tick, then redraw through the framebuffer renderer when the
//! snapshot changed.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{Board, FoodPlacement, FoodStrategy, GameConfig, GameSnapshot, TailRule};
use tui_snake::engine::{Clock, GameStateMachine, TickClock};
use tui_snake::input::{CrosstermInput, InputSource};
use tui_snake::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::{InputEvent, INITIAL_SPEED_MS, SPEED_FLOOR_MS, TICK_HZ};

/// Most ticks replayed after the loop fell behind; older ones are skipped.
const MAX_CATCH_UP_TICKS: u64 = 4;

/// Refresh interval for menu, pause and game-over screens.
const STATIC_REFRESH_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FoodArg {
    /// Reproducible positions derived from the score
    Score,
    /// Random positions from `--seed`
    Seeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlacementArg {
    /// Use the candidate cell even if the snake covers it
    Unchecked,
    /// Move forward to the first free cell
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TailRuleArg {
    /// The tail blocks the head even while it moves away
    Occupied,
    /// The head may follow into the cell the tail is leaving
    Vacating,
}

#[derive(Debug, Parser)]
#[command(name = "tui-snake", version, about = "Snake in the terminal")]
struct Cli {
    /// Milliseconds per move at the start of a round
    #[arg(long, default_value_t = INITIAL_SPEED_MS)]
    speed: u32,

    /// Fastest allowed milliseconds per move
    #[arg(long, default_value_t = SPEED_FLOOR_MS)]
    speed_floor: u32,

    /// Food position strategy
    #[arg(long, value_enum, default_value_t = FoodArg::Score)]
    food: FoodArg,

    /// Seed for `--food seeded`
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Food placement policy
    #[arg(long, value_enum, default_value_t = PlacementArg::Unchecked)]
    placement: PlacementArg,

    /// Whether the tail cell counts as occupied on a plain move
    #[arg(long, value_enum, default_value_t = TailRuleArg::Occupied)]
    tail_rule: TailRuleArg,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "SNAKE_LOG")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let strategy = match self.food {
            FoodArg::Score => FoodStrategy::ScoreDerived,
            FoodArg::Seeded => FoodStrategy::Seeded(self.seed),
        };
        let placement = match self.placement {
            PlacementArg::Unchecked => FoodPlacement::Unchecked,
            PlacementArg::Scan => FoodPlacement::ScanForFree,
        };
        let tail_rule = match self.tail_rule {
            TailRuleArg::Occupied => TailRule::Occupied,
            TailRuleArg::Vacating => TailRule::Vacating,
        };
        GameConfig::default()
            .with_speed(self.speed.max(1), self.speed_floor.max(1))
            .with_food(strategy, placement)
            .with_tail_rule(tail_rule)
    }
}

/// Logs only ever go to a file: the terminal is in raw mode on the alternate screen.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config();
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut board = Board::with_size(config.width, config.height);
    let mut machine = GameStateMachine::new(config);
    let mut input = CrosstermInput::new();

    let view = GameView::new();
    let clock = TickClock::new();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut processed = clock.now_ticks();
    let mut carried = InputEvent::None;

    while machine.is_running() {
        let now = clock.now_ticks();
        let due = now.saturating_sub(processed);

        if due == 0 {
            // One event per tick: hold an early arrival until the tick boundary.
            if carried == InputEvent::None {
                carried = input.poll(clock.until_next_tick())?;
            } else {
                std::thread::sleep(clock.until_next_tick());
            }
            if input.take_resized() {
                term.invalidate();
                throttle.invalidate();
            }
            continue;
        }

        if due > MAX_CATCH_UP_TICKS {
            debug!(skipped = due - MAX_CATCH_UP_TICKS, "loop fell behind");
        }
        for _ in 0..due.min(MAX_CATCH_UP_TICKS) {
            machine.tick(std::mem::take(&mut carried));
            if !machine.is_running() {
                break;
            }
        }
        processed = now;

        machine.snapshot_into(&mut snap);
        let now_ms = now * 1000 / u64::from(TICK_HZ);
        if throttle.should_render_snapshot(now_ms, &snap) {
            machine.render_board(&mut board);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&board, &snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }

    info!(
        score = machine.game().score(),
        dropped_input = input.dropped(),
        "exiting"
    );
    Ok(())
}
