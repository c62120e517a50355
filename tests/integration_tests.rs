//! Round-level scenarios driven through the public API.

use tui_snake::core::{
    Collision, EngineError, GameConfig, GameState, MoveOutcome, Snake, TailRule,
};
use tui_snake::engine::GameStateMachine;
use tui_snake::types::{Direction, FlowState, InputEvent, Point};

fn snake(points: &[(i32, i32)]) -> Snake {
    let segments: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Snake::from_segments(&segments, 2000).expect("non-empty snake")
}

fn tick_until(machine: &mut GameStateMachine, max_ticks: usize, done: impl Fn(&GameStateMachine) -> bool) {
    for _ in 0..max_ticks {
        if done(machine) {
            return;
        }
        machine.tick(InputEvent::None);
    }
    assert!(done(machine), "condition not reached within {} ticks", max_ticks);
}

#[test]
fn scenario_a_plain_move_keeps_length_and_score() {
    let mut game = GameState::default();
    assert_ne!(game.food(), Point::new(11, 12));

    let outcome = game.move_snake(Direction::Right).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(game.snake().head(), Point::new(11, 12));
    assert_eq!(game.snake().tail(), Point::new(9, 12));
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed_ms(), 200);
}

#[test]
fn scenario_b_eating_grows_scores_and_speeds_up() {
    let mut game = GameState::default();
    game.set_food(Point::new(11, 12));

    let outcome = game.move_snake(Direction::Right).unwrap();

    assert_eq!(outcome, MoveOutcome::Ate);
    assert_eq!(game.snake().head(), Point::new(11, 12));
    assert_eq!(game.snake().tail(), Point::new(8, 12));
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.score(), 10);
    assert_eq!(game.speed_ms(), 195);
    assert_ne!(game.food(), Point::new(11, 12));
    // Score 10 derives (27 mod 79, (27 >> 3) mod 24).
    assert_eq!(game.food(), Point::new(27, 3));
}

#[test]
fn scenario_c_wall_collision_leaves_state_untouched() {
    let config = GameConfig::default().with_start(Point::new(0, 12), Direction::Left);
    let mut game = GameState::new(config);
    let before = game.snapshot();

    let outcome = game.move_snake(Direction::Left).unwrap();

    assert_eq!(outcome, MoveOutcome::Collision(Collision::Wall));
    assert!(outcome.ends_round());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn scenario_d_moving_into_mid_body_is_self_collision() {
    let body = snake(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]);
    let mut game = GameState::from_parts(
        GameConfig::default(),
        body,
        Direction::Left,
        Point::new(0, 0),
    );

    let outcome = game.move_snake(Direction::Down).unwrap();

    assert_eq!(outcome, MoveOutcome::Collision(Collision::SelfCollision));
    assert_eq!(game.snake().len(), 5);
    assert_eq!(game.snake().head(), Point::new(5, 5));
}

#[test]
fn scenario_e_start_from_menu_resets_the_round() {
    // Food for score 0 sits at (17, 2), one cell ahead of this start.
    let config = GameConfig::default().with_start(Point::new(16, 2), Direction::Right);
    let mut machine = GameStateMachine::new(config);

    machine.tick(InputEvent::StartOrRestart);
    tick_until(&mut machine, 20, |m| m.game().score() > 0);
    assert_eq!(machine.game().snake().len(), 4);
    assert_eq!(machine.game().speed_ms(), 195);

    tick_until(&mut machine, 2_000, |m| m.flow() == FlowState::GameOver);
    machine.tick(InputEvent::StartOrRestart);
    assert_eq!(machine.flow(), FlowState::Menu);
    machine.tick(InputEvent::StartOrRestart);
    assert_eq!(machine.flow(), FlowState::Playing);

    let game = machine.game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.speed_ms(), 200);
    assert_eq!(game.snake().head(), Point::new(16, 2));
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(machine.scheduler().ticks_per_move(), 12);
}

fn ring_into_tail(rule: TailRule) -> MoveOutcome {
    // Head (5,5); moving Right lands on the tail (6,5).
    let body = snake(&[(5, 5), (5, 6), (6, 6), (6, 5)]);
    let config = GameConfig::default().with_tail_rule(rule);
    let mut game = GameState::from_parts(config, body, Direction::Up, Point::new(0, 0));
    game.move_snake(Direction::Right).unwrap()
}

#[test]
fn occupied_tail_rule_blocks_the_vacating_tail() {
    assert_eq!(
        ring_into_tail(TailRule::Occupied),
        MoveOutcome::Collision(Collision::SelfCollision)
    );
}

#[test]
fn vacating_tail_rule_lets_the_head_follow_the_tail() {
    assert_eq!(ring_into_tail(TailRule::Vacating), MoveOutcome::Moved);
}

#[test]
fn vacating_tail_still_blocks_when_the_move_eats() {
    let body = snake(&[(5, 5), (5, 6), (6, 6), (6, 5)]);
    let config = GameConfig::default().with_tail_rule(TailRule::Vacating);
    let mut game = GameState::from_parts(config, body, Direction::Up, Point::new(6, 5));

    assert_eq!(
        game.move_snake(Direction::Right).unwrap(),
        MoveOutcome::Collision(Collision::SelfCollision)
    );
}

#[test]
fn growth_beyond_capacity_is_an_error_not_a_collision() {
    let config = GameConfig::default().with_max_segments(3);
    let mut game = GameState::new(config);
    game.set_food(Point::new(11, 12));

    let err = game.move_snake(Direction::Right).unwrap_err();

    assert!(matches!(err, EngineError::SegmentCapacity { max: 3 }));
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.snake().head(), Point::new(10, 12));
    assert_eq!(game.score(), 0);
}

#[test]
fn snake_runs_into_the_right_wall_after_seventy_moves() {
    let mut machine = GameStateMachine::default();
    machine.tick(InputEvent::StartOrRestart);

    tick_until(&mut machine, 71 * 12 + 1, |m| m.flow() == FlowState::GameOver);

    assert_eq!(machine.game().snake().head(), Point::new(79, 12));
    assert_eq!(machine.game().moves(), 69);
    assert_eq!(machine.game().score(), 0);
}
