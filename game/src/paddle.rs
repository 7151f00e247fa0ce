use crate::ball::Ball;
use crate::canvas::Canvas;
use crate::config::Config;
use cgmath::Vector2;

/// Decides a paddle's vertical velocity for the coming frame.
pub trait VelocityPolicy {
    fn velocity(&mut self, paddle: Vector2<f32>, ball: &Ball, config: &Config) -> f32;
}

/// Velocity driven by the held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub move_up: bool,
    pub move_down: bool,
}

impl VelocityPolicy for Keyboard {
    fn velocity(&mut self, _paddle: Vector2<f32>, _ball: &Ball, config: &Config) -> f32 {
        let mut dy = if self.move_up { -config.paddle_speed } else { 0.0 };
        if self.move_down {
            dy += config.paddle_speed;
        }
        dy
    }
}

/// Chases the ball's y coordinate at full paddle speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Follow;

impl VelocityPolicy for Follow {
    fn velocity(&mut self, paddle: Vector2<f32>, ball: &Ball, config: &Config) -> f32 {
        let offset = paddle.y + config.paddle_height / 2.0 - ball.position.y;

        if offset > config.follow_threshold {
            -config.paddle_speed
        } else if offset < config.follow_threshold {
            config.paddle_speed
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle<P> {
    /// Top-left corner; `x` never changes.
    pub position: Vector2<f32>,
    pub dy: f32,
    pub policy: P,
}

pub type Player = Paddle<Keyboard>;
pub type Opponent = Paddle<Follow>;

impl<P: VelocityPolicy> Paddle<P> {
    pub fn new(x: f32, config: &Config, policy: P) -> Self {
        Paddle {
            position: Vector2::new(x, config.paddle_start_y()),
            dy: 0.0,
            policy,
        }
    }

    /// Moves by the policy's velocity, or stays put if that would leave the field.
    pub fn update(&mut self, ball: &Ball, config: &Config) {
        self.dy = self.policy.velocity(self.position, ball, config);

        let next_y = self.position.y + self.dy;
        if 0.0 < next_y && next_y < config.max_paddle_y() {
            self.position.y = next_y;
        }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.position.y + config.paddle_height / 2.0
    }

    /// Whether `ball` lies inside the paddle's vertical extent, edges excluded.
    pub fn covers(&self, ball: &Ball, config: &Config) -> bool {
        self.position.y < ball.position.y
            && ball.position.y < self.position.y + config.paddle_height
    }

    /// Deflection angle in radians for a ball touching this paddle.
    ///
    /// Zero at the paddle's centre, approaching `-max_bounce_angle` at the top
    /// edge and `max_bounce_angle` at the bottom edge.
    pub fn bounce_angle(&self, ball: &Ball, config: &Config) -> f32 {
        let offset = 2.0 * (ball.position.y - self.center_y(config)) / config.paddle_height;
        offset.clamp(-1.0, 1.0) * config.max_bounce_angle
    }

    pub fn draw(&self, canvas: &mut impl Canvas, config: &Config) {
        canvas.rect(
            self.position.x,
            self.position.y,
            config.paddle_width,
            config.paddle_height,
        );
    }
}

impl Player {
    pub fn spawn(config: &Config) -> Self {
        Paddle::new(config.player_x(), config, Keyboard::default())
    }
}

impl Opponent {
    pub fn spawn(config: &Config) -> Self {
        Paddle::new(config.opponent_x(), config, Follow)
    }
}
