use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Board, CollisionDetector, GameConfig, GameState, Snake, TailRule};
use tui_snake::engine::GameStateMachine;
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, InputEvent, Point};

/// A long snake folded into rows, head at the top-left.
fn long_snake(len: usize) -> Snake {
    let mut segments = Vec::with_capacity(len);
    for i in 0..len {
        let row = (i / 78) as i32;
        let col = (i % 78) as i32;
        let x = if row % 2 == 0 { 1 + col } else { 78 - col };
        segments.push(Point::new(x, 1 + row));
    }
    Snake::from_segments(&segments, 80 * 25).unwrap()
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_and_reset", |b| {
        let mut state = GameState::default();
        b.iter(|| {
            if state.step().map(|o| o.ends_round()).unwrap_or(true) {
                state.reset();
            }
            black_box(state.snake().head());
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let snake = long_snake(600);
    let detector = CollisionDetector::new(80, 25, TailRule::Occupied);
    let target = Point::new(40, 20);

    c.bench_function("classify_600_segments", |b| {
        b.iter(|| detector.classify(black_box(target), &snake, false))
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let snake = long_snake(600);
    let mut board = Board::new();

    c.bench_function("board_rebuild_600_segments", |b| {
        b.iter(|| {
            board.rebuild(&snake, black_box(Point::new(40, 20)));
        })
    });
}

fn bench_machine_tick(c: &mut Criterion) {
    let mut machine = GameStateMachine::new(GameConfig::default());
    machine.tick(InputEvent::StartOrRestart);

    c.bench_function("machine_tick", |b| {
        b.iter(|| {
            machine.tick(black_box(InputEvent::Direction(Direction::Down)));
            if !machine.is_running() || machine.flow() != tui_snake::types::FlowState::Playing {
                machine = GameStateMachine::default();
                machine.tick(InputEvent::StartOrRestart);
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::default();
    let board = state.board();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(100, 30);

    c.bench_function("game_view_render", |b| {
        b.iter(|| view.render_into(&board, &snap, Viewport::new(100, 30), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_classify,
    bench_rebuild,
    bench_machine_tick,
    bench_render
);
criterion_main!(benches);
