use std::f32::consts::PI;

pub const WORLD_WIDTH: f32 = 600.0;
pub const WORLD_HEIGHT: f32 = 400.0;
pub const WORLD_PADDING: f32 = 40.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 70.0;
pub const PADDLE_SPEED: f32 = 8.0;

pub const BALL_DIAMETER: f32 = 10.0;
pub const BALL_SPEED: f32 = 12.0;
pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * PI / 12.0;

/// Horizontal slack around a paddle inside which the ball still counts as touching it.
pub const COLLISION_BUFFER: f32 = 12.0;

/// Dead zone of the opponent's tracking rule.
pub const FOLLOW_THRESHOLD: f32 = 5.0;

/// `W` and `S`, same codes as raylib's `KEY_W` and `KEY_S`.
pub const KEY_UP: u32 = 87;
pub const KEY_DOWN: u32 = 83;

pub const SCORE_FONT_SIZE: f32 = 32.0;
pub const PLAYER_SCORE_POSITION: [f32; 2] = [160.0, 40.0];
pub const OPPONENT_SCORE_POSITION: [f32; 2] = [420.0, 40.0];

pub const WINDOW_TITLE: &str = "Pong";
pub const TARGET_FPS: u32 = 60;
pub const BOUNCE_SOUND_PATH: &str = "assets/bounce_sound.wav";
