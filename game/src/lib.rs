pub mod ball;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod game_run;
pub mod paddle;

pub use ball::Ball;
pub use canvas::Canvas;
pub use config::{Config, ConfigError};
pub use game_run::{FrameEvents, GameRun, Side};
pub use paddle::{Follow, Keyboard, Opponent, Paddle, Player, VelocityPolicy};
