use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wled_raycaster::core::{cast, GridMap, PlayerState};
use wled_raycaster::matrix::{build_pixel_array, MatrixLayout};
use wled_raycaster::render::{downsample, draw_weapon, render_scene, PixelBuffer};
use wled_raycaster::types::{FRAME_HEIGHT, FRAME_WIDTH, MATRIX_HEIGHT, MATRIX_WIDTH};

fn bench_cast(c: &mut Criterion) {
    let grid = GridMap::default_arena().unwrap();

    c.bench_function("cast_single_ray", |b| {
        b.iter(|| {
            cast(black_box(3.5), black_box(3.5), black_box(0.7), &grid);
        })
    });
}

fn bench_render_scene(c: &mut Criterion) {
    let grid = GridMap::default_arena().unwrap();
    let player = PlayerState::new(3.5, 3.5, 0.0);
    let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);

    c.bench_function("render_scene_320x200", |b| {
        b.iter(|| {
            render_scene(&player, &grid, &mut fb);
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let grid = GridMap::default_arena().unwrap();
    let player = PlayerState::new(3.5, 3.5, 0.0);
    let layout = MatrixLayout::two_panel_serpentine().unwrap();
    let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);

    c.bench_function("frame_render_downsample_map", |b| {
        b.iter(|| {
            render_scene(&player, &grid, &mut fb);
            draw_weapon(&mut fb, black_box(3));
            let small = downsample(&fb, MATRIX_WIDTH, MATRIX_HEIGHT);
            build_pixel_array(&small, &layout)
        })
    });
}

fn bench_downsample(c: &mut Criterion) {
    let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
    let grid = GridMap::default_arena().unwrap();
    let player = PlayerState::new(3.5, 3.5, 0.0);
    render_scene(&player, &grid, &mut fb);

    c.bench_function("downsample_to_16x8", |b| {
        b.iter(|| downsample(black_box(&fb), MATRIX_WIDTH, MATRIX_HEIGHT))
    });
}

criterion_group!(
    benches,
    bench_cast,
    bench_render_scene,
    bench_full_frame,
    bench_downsample
);
criterion_main!(benches);
