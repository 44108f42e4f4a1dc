//! Headless demo: renders a tilemap and an animated player as ASCII
use anyhow::Result;
use leafy2d::prelude::*;

const TILE: i32 = 16;

/// Canvas printing one character per 16x16 pixel block
struct AsciiCanvas {
    cols: usize,
    rows: usize,
    buf: Vec<char>,
}

/// A texture is a row of glyphs, one per sprite sheet frame
struct GlyphSheet(Vec<char>);

impl AsciiCanvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            buf: vec![' '; cols * rows],
        }
    }

    fn fill(&mut self, rect: Rect, glyph: char) {
        let cell = TILE as f32;
        let (x0, y0) = ((rect.min.x / cell) as usize, (rect.min.y / cell) as usize);
        let (x1, y1) = ((rect.max.x / cell).ceil() as usize, (rect.max.y / cell).ceil() as usize);
        for y in y0..y1.min(self.rows) {
            for x in x0..x1.min(self.cols) {
                self.buf[y * self.cols + x] = glyph;
            }
        }
    }

    fn present(&mut self) {
        for row in self.buf.chunks(self.cols) {
            println!("{}", row.iter().collect::<String>());
        }
        println!();
        self.buf.fill(' ');
    }
}

impl Canvas for AsciiCanvas {
    type Texture = GlyphSheet;

    fn screen_size(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * TILE as f32
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let glyph = if color == DARK_GRAY { '#' } else { '.' };
        self.fill(rect, glyph);
    }

    fn draw_rect_lines(&mut self, _rect: Rect, _thickness: f32, _color: Color) {}

    fn draw_texture(&mut self, texture: &GlyphSheet, src: Rect, dst: Rect, _tint: Color) {
        let frame = (src.x() / src.width()) as usize;
        let glyph = texture.0.get(frame).copied().unwrap_or('?');
        self.fill(dst, glyph);
    }

    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {}

    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    fn begin_camera(&mut self, _camera: &Camera2D) {}

    fn end_camera(&mut self) {}
}

fn build_level() -> Result<Tilemap> {
    let mut map = Tilemap::new(20, 8, TILE)?;
    map.fill(2);
    for col in 0..20 {
        map.set(col, 0, 1)?;
        map.set(col, 7, 1)?;
    }
    for row in 0..8 {
        map.set(0, row, 1)?;
        map.set(19, row, 1)?;
    }
    map.set(9, 3, 1)?;
    map.set(9, 4, 1)?;
    Ok(map)
}

fn main() -> Result<()> {
    env_logger::init();

    let map = build_level()?;
    let palette = [DARK_GRAY, BEIGE];
    let sheet = GlyphSheet(vec!['o', 'O', '@', 'O']);
    let mut player = Animation::new(4, 8.0, 16.0, 16.0)?;
    let controls = Controls::default();
    let mut input = InputState::default();
    let mut canvas = AsciiCanvas::new(20, 8);
    let mut report = Timer::new(0.5);

    let mut pos = map.to_world(2, 3);
    let speed = 64.0;
    let dt = 1.0 / 30.0;

    input.set_key_state(KeyCode::KeyD, KeyState::DOWN);
    for frame in 0..60 {
        if frame == 30 {
            input.set_key_state(KeyCode::KeyD, KeyState::UP);
            input.set_key_state(KeyCode::Down, KeyState::DOWN);
        }

        let next = pos + controls.move_vector(&input) * speed * dt;
        let cell = map.to_grid(Rect::new(next, Vec2::splat(TILE as f32)).center());
        match map.get(cell.x, cell.y) {
            Some(1) | None => log::info!("blocked at {cell}"),
            Some(_) => pos = next,
        }
        player.update(dt);
        input.clear();

        if report.tick(dt) {
            map.draw(&mut canvas, &palette);
            player.draw(&mut canvas, &sheet, pos, 1.0, WHITE);
            canvas.present();
        }
    }
    Ok(())
}
