use game::{Canvas, Config, GameRun};
use raylib::color::Color;
use raylib::consts::KeyboardKey;
use raylib::core::audio::{RaylibAudio, Sound};
use raylib::drawing::RaylibDraw;
use raylib::init;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    match &config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("Using default config"),
    }

    start_game_loop(config);

    Ok(())
}

fn start_game_loop(config: Config) {
    let (mut handle, thread) = init()
        .size(config.width as i32, config.height as i32)
        .title(&config.title)
        .vsync()
        .build();

    handle.set_target_fps(config.target_fps);

    info!("Window ready: {}x{}", config.width, config.height);

    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio unavailable, playing silently: {:?}", e);
            None
        }
    };

    let bounce_sound = audio
        .as_ref()
        .and_then(|audio| load_sound(audio, &config.bounce_sound));

    let mut game = GameRun::new(config);
    let mut held_keys: Vec<KeyboardKey> = Vec::new();

    while !handle.window_should_close() {
        while let Some(key) = handle.get_key_pressed() {
            game.key_pressed(key as u32);

            if !held_keys.contains(&key) {
                held_keys.push(key);
            }
        }

        held_keys.retain(|&key| {
            let released = handle.is_key_released(key);
            if released {
                game.key_released(key as u32);
            }
            !released
        });

        let events = {
            let mut draw_handle = handle.begin_drawing(&thread);
            draw_handle.clear_background(Color::BLACK);

            game.frame(&mut RaylibCanvas::new(&mut draw_handle, Color::WHITE))
        };

        if events.bounce.is_some() {
            if let Some(sound) = &bounce_sound {
                sound.play();
            }
        }
    }
}

fn load_sound<'aud>(audio: &'aud RaylibAudio, path: &Path) -> Option<Sound<'aud>> {
    match audio.new_sound(&path.to_string_lossy()) {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("Failed to load {}: {:?}", path.display(), e);
            None
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .init();
}

/// Draws the game's primitives in a single colour on a raylib draw handle.
struct RaylibCanvas<'a, D: RaylibDraw> {
    draw_handle: &'a mut D,
    color: Color,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    fn new(draw_handle: &'a mut D, color: Color) -> Self {
        RaylibCanvas { draw_handle, color }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.draw_handle
            .draw_rectangle(x as i32, y as i32, width as i32, height as i32, self.color);
    }

    fn circle(&mut self, x: f32, y: f32, diameter: f32) {
        let radius = diameter / 2.0;
        self.draw_handle.draw_circle(
            (x + radius) as i32,
            (y + radius) as i32,
            radius,
            self.color,
        );
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.draw_handle
            .draw_line(x1 as i32, y1 as i32, x2 as i32, y2 as i32, self.color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        self.draw_handle
            .draw_text(text, x as i32, y as i32, size as i32, self.color);
    }
}
