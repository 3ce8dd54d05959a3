//! ggez host for the gravity letters sketch.
//!
//! Expects `resources/letter_a.png` .. `resources/letter_z.png` next to the
//! crate. The window is half the logical canvas size; drawing and pointer
//! input are mapped to the 1080x1920 canvas.

use std::collections::HashMap;

use ggez::conf;
use ggez::event::{self, EventHandler, MouseButton};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawParam, Image, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, ContextBuilder, GameError, GameResult};

use gravity_letters::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use gravity_letters::letters::{SpriteDraw, SpriteInfo};
use gravity_letters::{AssetRegistry, LettersSketch, RenderSurface, SketchError, SketchHooks, SketchResult, Vec2};

const WINDOW_WIDTH: f32 = CANVAS_WIDTH as f32 / 2.0;
const WINDOW_HEIGHT: f32 = CANVAS_HEIGHT as f32 / 2.0;

struct GgezAssets<'a> {
    ctx: &'a Context,
    images: HashMap<char, Image>,
}

impl AssetRegistry for GgezAssets<'_> {
    fn load_sprite(&mut self, label: char) -> SketchResult<SpriteInfo> {
        let path = format!("/letter_{label}.png");
        let image = Image::from_path(self.ctx, &path, true).map_err(|e| SketchError::AssetLoad {
            label,
            reason: e.to_string(),
        })?;
        log::debug!("loaded {} ({}x{})", path, image.width(), image.height());

        let info = SpriteInfo::new(image.width(), image.height());
        self.images.insert(label, image);
        Ok(info)
    }
}

struct CanvasSurface<'a> {
    canvas: &'a mut graphics::Canvas,
    background: &'a Mesh,
    images: &'a HashMap<char, Image>,
}

impl RenderSurface for CanvasSurface<'_> {
    fn clear(&mut self) {
        self.canvas.draw(self.background, DrawParam::default());
    }

    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        let Some(image) = self.images.get(&sprite.label) else {
            return;
        };
        let scale = GVec2::new(
            sprite.width as f32 / image.width() as f32,
            sprite.height as f32 / image.height() as f32,
        );
        self.canvas.draw(
            image,
            DrawParam::new()
                .dest(GVec2::new(sprite.position.x as f32, sprite.position.y as f32))
                .rotation(sprite.angle as f32)
                .offset(GVec2::new(0.5, 0.5))
                .scale(scale),
        );
    }
}

struct MainState {
    sketch: LettersSketch,
    images: HashMap<char, Image>,
    background: Mesh,
}

fn sketch_error(err: SketchError) -> GameError {
    GameError::CustomError(err.to_string())
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<MainState> {
        let mut sketch = LettersSketch::default();

        let mut assets = GgezAssets {
            ctx: &*ctx,
            images: HashMap::new(),
        };
        sketch.preload(&mut assets).map_err(sketch_error)?;
        let images = assets.images;
        sketch.setup().map_err(sketch_error)?;

        let canvas_rect = graphics::Rect::new(0.0, 0.0, CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let background = Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), canvas_rect, Color::WHITE)?;

        Ok(MainState {
            sketch,
            images,
            background,
        })
    }

    /// Window pixels -> canvas coordinates.
    fn to_canvas(ctx: &Context, x: f32, y: f32) -> Vec2 {
        let (width, height) = ctx.gfx.drawable_size();
        if width <= 0.0 || height <= 0.0 {
            return Vec2::new(x as f64, y as f64);
        }
        Vec2::new(
            x as f64 * CANVAS_WIDTH / width as f64,
            y as f64 * CANVAS_HEIGHT / height as f64,
        )
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.sketch.advance_timers(ctx.time.delta());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::WHITE);
        canvas.set_screen_coordinates(graphics::Rect::new(0.0, 0.0, CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32));

        let mut surface = CanvasSurface {
            canvas: &mut canvas,
            background: &self.background,
            images: &self.images,
        };
        self.sketch.draw(&mut surface);

        canvas.finish(ctx)
    }

    fn mouse_motion_event(&mut self, ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) -> GameResult {
        self.sketch.pointer_moved(Self::to_canvas(ctx, x, y));
        Ok(())
    }

    fn mouse_button_down_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> GameResult {
        if button == MouseButton::Left {
            self.sketch.pointer_pressed(Self::to_canvas(ctx, x, y));
        }
        Ok(())
    }

    fn mouse_button_up_event(&mut self, _ctx: &mut Context, button: MouseButton, _x: f32, _y: f32) -> GameResult {
        if button == MouseButton::Left {
            self.sketch.pointer_released();
        }
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let resource_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");
    log::info!("loading sprites from {}", resource_dir.display());

    let (mut ctx, event_loop) = ContextBuilder::new("letters_demo", "gravity_letters")
        .window_setup(conf::WindowSetup::default().title("Gravity Letters"))
        .window_mode(conf::WindowMode::default().dimensions(WINDOW_WIDTH, WINDOW_HEIGHT))
        .add_resource_path(resource_dir)
        .build()?;

    let state = match MainState::new(&mut ctx) {
        Ok(state) => state,
        Err(err) => {
            log::error!("startup failed: {}", err);
            return Err(err);
        }
    };
    event::run(ctx, event_loop, state)
}
