use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cube_sandbox::{Button, CameraController, InputSource, NavigationMode, Navigator, RigidFrame};
use glam::{Vec2, Vec3};
use std::cell::Cell;

/// Input that sweeps the cursor in a circle while holding a fixed set of buttons
struct SweepInput {
    held: Vec<Button>,
    step: Cell<u32>,
}

impl SweepInput {
    fn new(held: &[Button]) -> Self {
        Self {
            held: held.to_vec(),
            step: Cell::new(0),
        }
    }

    fn advance(&self) {
        self.step.set(self.step.get().wrapping_add(1));
    }
}

impl InputSource for SweepInput {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn cursor_position(&self) -> Vec2 {
        let t = self.step.get() as f32 * 0.05;
        Vec2::new(t.cos(), t.sin()) * 200.0 + Vec2::new(640.0, 360.0)
    }
}

fn navigator(mode: NavigationMode) -> Navigator {
    let mut navigator = Navigator::new(mode, 2.0, Vec3::Y);
    navigator.set_camera(RigidFrame::new(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y).unwrap());
    navigator
}

/// Benchmark: one update per mode with the cursor dragging
fn bench_navigator_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator_drag");

    for mode in NavigationMode::ALL {
        group.bench_with_input(BenchmarkId::new("update", mode.label()), &mode, |b, &mode| {
            let mut navigator = navigator(mode);
            let input = SweepInput::new(&[Button::MouseMiddle]);
            b.iter(|| {
                input.advance();
                black_box(navigator.update(black_box(0.016), &input))
            })
        });
    }

    group.finish();
}

/// Benchmark: first-person walking with every movement key held
fn bench_first_person_walk(c: &mut Criterion) {
    let mut navigator = navigator(NavigationMode::FirstPerson);
    let input = SweepInput::new(&[Button::KeyW, Button::KeyA, Button::ArrowUp, Button::KeyE]);

    c.bench_function("first_person_walk", |b| {
        b.iter(|| black_box(navigator.update(black_box(0.016), &input)))
    });
}

/// Benchmark: building a view matrix from the current frame
fn bench_view_matrix(c: &mut Criterion) {
    let frame = RigidFrame::new(Vec3::new(3.0, 1.0, -2.0), Vec3::ZERO, Vec3::Y).unwrap();

    c.bench_function("view_matrix", |b| b.iter(|| black_box(black_box(frame).view_matrix())));
}

/// Benchmark: a burst of mode switches, each copying the frame across
fn bench_mode_switch(c: &mut Criterion) {
    let mut navigator = navigator(NavigationMode::Trackball);

    c.bench_function("mode_switch", |b| {
        b.iter(|| {
            for mode in NavigationMode::ALL {
                navigator.switch_to(black_box(mode));
            }
            black_box(navigator.camera())
        })
    });
}

criterion_group!(
    benches,
    bench_navigator_drag,
    bench_first_person_walk,
    bench_view_matrix,
    bench_mode_switch
);
criterion_main!(benches);
