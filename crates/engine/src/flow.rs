//! Game flow state machine.
//!
//! Sequences input handling, the movement scheduler and the round logic across the
//! five flow states. Transitions are a pure table ([`next_state`]); everything with side
//! effects happens in [`GameStateMachine::tick`].

use tracing::{error, info};

use crate::core::{Board, GameConfig, GameSnapshot, GameState, MoveOutcome};
use crate::scheduler::MovementScheduler;
use crate::types::{FlowState, InputEvent};

/// Anything that can move the machine between flow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StartOrRestart,
    PauseToggle,
    Quit,
    /// The round ended: collision, no room for food, or an engine fault.
    RoundOver,
}

impl Trigger {
    /// Flow-relevant part of an input event. Directions and `None` are in-state input.
    pub fn from_input(event: InputEvent) -> Option<Self> {
        match event {
            InputEvent::StartOrRestart => Some(Trigger::StartOrRestart),
            InputEvent::PauseToggle => Some(Trigger::PauseToggle),
            InputEvent::Quit => Some(Trigger::Quit),
            InputEvent::Direction(_) | InputEvent::None => None,
        }
    }
}

/// Transition table. Pairs not listed keep the current state.
pub fn next_state(current: FlowState, trigger: Trigger) -> FlowState {
    use FlowState::*;

    match (current, trigger) {
        (Menu, Trigger::StartOrRestart) => Playing,
        (Menu, Trigger::Quit) => Exit,
        (Playing, Trigger::PauseToggle) => Paused,
        (Playing, Trigger::RoundOver) => GameOver,
        (Playing, Trigger::Quit) => Exit,
        (Paused, Trigger::PauseToggle) => Playing,
        (Paused, Trigger::Quit) => Exit,
        (GameOver, Trigger::StartOrRestart) => Menu,
        (GameOver, Trigger::Quit) => Exit,
        (state, _) => state,
    }
}

/// What happened during one tick, for the renderer and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Flow state entered during this tick (entry screens are drawn from this)
    pub entered: Option<FlowState>,
    /// Result of the move, if the scheduler let the snake move
    pub outcome: Option<MoveOutcome>,
    /// The round was ended by an engine fault rather than by play
    pub faulted: bool,
}

#[derive(Debug, Clone)]
pub struct GameStateMachine {
    flow: FlowState,
    game: GameState,
    scheduler: MovementScheduler,
    pending_entry: Option<FlowState>,
    ticks: u64,
}

impl GameStateMachine {
    pub fn new(config: GameConfig) -> Self {
        let game = GameState::new(config);
        Self {
            scheduler: MovementScheduler::new(game.speed_ms()),
            game,
            flow: FlowState::Menu,
            pending_entry: Some(FlowState::Menu),
            ticks: 0,
        }
    }

    pub fn flow(&self) -> FlowState {
        self.flow
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scheduler(&self) -> &MovementScheduler {
        &self.scheduler
    }

    /// Outer-loop ticks processed so far, in every state.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.flow != FlowState::Exit
    }

    /// Restore a stored flow code. Unknown codes land in the menu.
    pub fn restore_flow(&mut self, code: u8) {
        self.flow = FlowState::from_code(code);
        self.pending_entry = Some(self.flow);
    }

    /// Process one fixed tick with at most one input event.
    pub fn tick(&mut self, event: InputEvent) -> TickReport {
        self.ticks += 1;
        let mut report = TickReport {
            entered: self.pending_entry.take(),
            ..Default::default()
        };

        match self.flow {
            FlowState::Playing => self.on_tick_playing(event, &mut report),
            FlowState::Menu | FlowState::Paused | FlowState::GameOver => {
                if let Some(trigger) = Trigger::from_input(event) {
                    self.transition(trigger, &mut report);
                }
            }
            FlowState::Exit => {}
        }

        report
    }

    /// Apply `trigger` directly, bypassing input mapping.
    pub fn fire(&mut self, trigger: Trigger) -> TickReport {
        let mut report = TickReport::default();
        self.transition(trigger, &mut report);
        report
    }

    fn on_tick_playing(&mut self, event: InputEvent, report: &mut TickReport) {
        match event {
            InputEvent::Direction(direction) => {
                self.game.update_direction(direction);
            }
            other => {
                if let Some(trigger) = Trigger::from_input(other) {
                    self.transition(trigger, report);
                    if self.flow != FlowState::Playing {
                        return;
                    }
                }
            }
        }

        if !self.scheduler.tick() {
            return;
        }

        match self.game.step() {
            Ok(outcome) => {
                report.outcome = Some(outcome);
                if outcome == MoveOutcome::Ate {
                    self.scheduler.set_speed(self.game.speed_ms());
                }
                if outcome.ends_round() {
                    self.transition(Trigger::RoundOver, report);
                }
            }
            Err(err) => {
                error!(error = %err, score = self.game.score(), "engine fault, ending round");
                report.faulted = true;
                self.transition(Trigger::RoundOver, report);
            }
        }
    }

    fn transition(&mut self, trigger: Trigger, report: &mut TickReport) {
        let from = self.flow;
        let to = next_state(from, trigger);
        if to == from {
            return;
        }

        if from == FlowState::Menu && to == FlowState::Playing {
            self.game.reset();
            self.scheduler.reset(self.game.speed_ms());
        }

        self.flow = to;
        info!(from = from.as_str(), to = to.as_str(), ?trigger, "flow transition");
        self.on_enter(to);
        report.entered = Some(to);
    }

    fn on_enter(&mut self, state: FlowState) {
        match state {
            FlowState::Playing => self.game.set_paused(false),
            FlowState::Paused => self.game.set_paused(true),
            FlowState::GameOver => {
                info!(
                    score = self.game.score(),
                    length = self.game.snake().len(),
                    moves = self.game.moves(),
                    "round over"
                );
            }
            FlowState::Menu | FlowState::Exit => {}
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.flow = self.flow;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn render_board(&self, board: &mut Board) {
        self.game.render_board(board);
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
