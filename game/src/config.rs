use crate::constants::*;
use cgmath::Vector2;
use serde::Deserialize;
use std::f32::consts::FRAC_PI_2;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Field geometry, physics tuning and presentation settings.
///
/// Every field is optional in a TOML file; missing ones fall back to the
/// values in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_diameter: f32,
    pub ball_speed: f32,
    /// Radians.
    pub max_bounce_angle: f32,
    pub buffer: f32,
    pub follow_threshold: f32,
    pub up_key: u32,
    pub down_key: u32,
    pub score_font_size: f32,
    pub player_score_position: Vector2<f32>,
    pub opponent_score_position: Vector2<f32>,
    pub title: String,
    pub target_fps: u32,
    pub bounce_sound: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            padding: WORLD_PADDING,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_diameter: BALL_DIAMETER,
            ball_speed: BALL_SPEED,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            buffer: COLLISION_BUFFER,
            follow_threshold: FOLLOW_THRESHOLD,
            up_key: KEY_UP,
            down_key: KEY_DOWN,
            score_font_size: SCORE_FONT_SIZE,
            player_score_position: Vector2::new(
                PLAYER_SCORE_POSITION[0],
                PLAYER_SCORE_POSITION[1],
            ),
            opponent_score_position: Vector2::new(
                OPPONENT_SCORE_POSITION[0],
                OPPONENT_SCORE_POSITION[1],
            ),
            title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,
            bounce_sound: PathBuf::from(BOUNCE_SOUND_PATH),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_diameter", self.ball_diameter),
            ("ball_speed", self.ball_speed),
        ];

        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.padding < 0.0 || self.buffer < 0.0 {
            return Err(ConfigError::Invalid(
                "padding and buffer must not be negative".to_string(),
            ));
        }

        if 2.0 * (self.padding + self.paddle_width) >= self.width {
            return Err(ConfigError::Invalid(format!(
                "paddles do not fit in a field {} wide",
                self.width
            )));
        }

        if self.paddle_height >= self.height || self.ball_diameter >= self.height {
            return Err(ConfigError::Invalid(format!(
                "paddle and ball must be shorter than the field height {}",
                self.height
            )));
        }

        if self.max_bounce_angle.is_nan()
            || self.max_bounce_angle <= 0.0
            || self.max_bounce_angle >= FRAC_PI_2
        {
            return Err(ConfigError::Invalid(format!(
                "max_bounce_angle must be in (0, pi/2), got {}",
                self.max_bounce_angle
            )));
        }

        if self.up_key == self.down_key {
            return Err(ConfigError::Invalid(
                "up_key and down_key must differ".to_string(),
            ));
        }

        Ok(())
    }

    pub fn player_x(&self) -> f32 {
        self.padding
    }

    pub fn opponent_x(&self) -> f32 {
        self.width - self.padding - self.paddle_width
    }

    pub fn paddle_start_y(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }

    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    pub fn max_ball_y(&self) -> f32 {
        self.height - self.ball_diameter
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }
}
