use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use orbit_explorer::core::actions::scan_grid::scan_grid;
use orbit_explorer::{
    Complex, CoordinateMapper, ExplorerConfig, InteractiveController, RasterCanvas, ScreenPoint,
    StatusDisplayPort, StatusText, SurfaceSize,
};
use std::sync::Arc;

struct NullStatus;

impl StatusDisplayPort for NullStatus {
    fn show(&self, _status: &StatusText) {}
}

fn bench_scan_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_grid");

    for &(width, height) in &[(200u32, 150u32), (800, 600)] {
        let surface = SurfaceSize::new(width, height);
        let mapper = CoordinateMapper::new(200.0, surface).expect("bench mapper");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &mapper,
            |b, mapper| b.iter(|| scan_grid(black_box(mapper), 1, Complex::ZERO, 250)),
        );
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let surface = SurfaceSize::new(800, 600);
    let config = ExplorerConfig::default();

    c.bench_function("interactive_frame_800x600", |b| {
        let mut controller = InteractiveController::new(config, surface, Arc::new(NullStatus))
            .expect("bench controller");
        let mut canvas = RasterCanvas::new(surface);
        controller.pointer_moved(ScreenPoint::new(520.0, 260.0));
        for _ in 0..45 {
            controller.wheel(-1.0);
        }

        b.iter(|| controller.render_tick(black_box(&mut canvas)));
    });

    c.bench_function("still_render_800x600", |b| {
        let mut canvas = RasterCanvas::new(surface);

        b.iter(|| {
            let mut controller = InteractiveController::new(config, surface, Arc::new(NullStatus))
                .expect("bench controller");
            controller.toggle_mode();
            controller.render_tick(black_box(&mut canvas));
        });
    });
}

criterion_group!(benches, bench_scan_grid, bench_frames);
criterion_main!(benches);
