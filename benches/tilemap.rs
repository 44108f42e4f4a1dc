use criterion::{criterion_group, criterion_main, Criterion};
use leafy2d::prelude::*;

/// Counts draw calls and discards them
#[derive(Default)]
struct NullCanvas {
    draws: usize,
}

impl Canvas for NullCanvas {
    type Texture = ();

    fn screen_size(&self) -> Vec2 {
        Vec2::new(1280.0, 720.0)
    }
    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.draws += 1;
    }
    fn draw_rect_lines(&mut self, _rect: Rect, _thickness: f32, _color: Color) {}
    fn draw_texture(&mut self, _texture: &(), _src: Rect, _dst: Rect, _tint: Color) {
        self.draws += 1;
    }
    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {}
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn begin_camera(&mut self, _camera: &Camera2D) {}
    fn end_camera(&mut self) {}
}

fn checkerboard(size: i32) -> Tilemap {
    let mut map = Tilemap::new(size, size, 16).expect("map");
    for row in 0..size {
        for col in 0..size {
            let id = ((col + row) % 4) as TileId;
            map.set(col, row, id).expect("in range");
        }
    }
    map
}

fn criterion_benchmark(c: &mut Criterion) {
    let palette = [BLACK, DARK_GREEN, BROWN];
    for size in [64, 256] {
        let map = checkerboard(size);
        c.bench_function(&format!("tilemap draw {size}x{size}"), |b| {
            b.iter(|| {
                let mut canvas = NullCanvas::default();
                map.draw(&mut canvas, &palette);
                canvas.draws
            })
        });
        c.bench_function(&format!("tilemap draw textured {size}x{size}"), |b| {
            b.iter(|| {
                let mut canvas = NullCanvas::default();
                map.draw_textured(&mut canvas, &(), 8, 16.0);
                canvas.draws
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
