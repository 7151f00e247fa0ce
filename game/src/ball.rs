use crate::canvas::Canvas;
use crate::config::Config;
use cgmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Top-left corner of the bounding box.
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
}

impl Ball {
    /// Ball at the centre of the field, heading towards the player.
    pub fn new(config: &Config) -> Self {
        Ball {
            position: config.center(),
            velocity: Vector2::new(-config.ball_speed, 0.0),
        }
    }

    pub fn update(&mut self, config: &Config) {
        self.position += self.velocity;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y >= config.max_ball_y() {
            self.position.y = config.max_ball_y();
            self.velocity.y = -self.velocity.y.abs();
        }
    }

    /// Recentres the ball and serves it horizontally, `direction` being `1.0` or `-1.0`.
    pub fn relaunch(&mut self, config: &Config, direction: f32) {
        self.position = config.center();
        self.velocity = Vector2::new(direction * config.ball_speed, 0.0);
    }

    pub fn is_off_field(&self, config: &Config) -> bool {
        self.position.x < 0.0 || self.position.x + config.ball_diameter > config.width
    }

    pub fn draw(&self, canvas: &mut impl Canvas, config: &Config) {
        canvas.circle(self.position.x, self.position.y, config.ball_diameter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            position: Vector2::new(x, y),
            velocity: Vector2::new(dx, dy),
        }
    }

    #[test]
    fn test_new_ball_starts_centred_moving_left() {
        let config = Config::default();
        let ball = Ball::new(&config);
        assert_eq!(ball.position, Vector2::new(300.0, 200.0));
        assert_eq!(ball.velocity, Vector2::new(-12.0, 0.0));
    }

    #[test]
    fn test_update_advances_by_velocity() {
        let config = Config::default();
        let mut ball = ball_at(100.0, 100.0, 12.0, -3.0);
        ball.update(&config);
        assert_eq!(ball.position, Vector2::new(112.0, 97.0));
        assert_eq!(ball.velocity, Vector2::new(12.0, -3.0));
    }

    #[test]
    fn test_bounces_off_top_wall() {
        let config = Config::default();
        let mut ball = ball_at(100.0, 2.0, -12.0, -5.0);
        ball.update(&config);
        assert_eq!(ball.position.y, 0.0, "Ball clamped to the top wall");
        assert_eq!(ball.velocity.y, 5.0, "Vertical velocity now points down");
        assert_eq!(ball.velocity.x, -12.0, "Walls leave dx alone");
    }

    #[test]
    fn test_bounces_off_bottom_wall() {
        let config = Config::default();
        let mut ball = ball_at(100.0, 387.0, 12.0, 5.0);
        ball.update(&config);
        assert_eq!(ball.position.y, config.max_ball_y());
        assert_eq!(ball.velocity.y, -5.0, "Vertical velocity now points up");
    }

    #[test]
    fn test_y_stays_in_bounds_over_many_frames() {
        let config = Config::default();
        let mut ball = ball_at(300.0, 200.0, 0.0, 7.3);
        for _ in 0..1000 {
            ball.update(&config);
            assert!(
                (0.0..=config.max_ball_y()).contains(&ball.position.y),
                "Ball y {} escaped the field",
                ball.position.y
            );
        }
    }

    #[test]
    fn test_off_field_edges() {
        let config = Config::default();
        assert!(ball_at(-0.1, 200.0, 0.0, 0.0).is_off_field(&config));
        assert!(ball_at(590.1, 200.0, 0.0, 0.0).is_off_field(&config));
        assert!(!ball_at(0.0, 200.0, 0.0, 0.0).is_off_field(&config));
        assert!(!ball_at(590.0, 200.0, 0.0, 0.0).is_off_field(&config));
    }

    #[test]
    fn test_relaunch_recentres() {
        let config = Config::default();
        let mut ball = ball_at(-4.0, 17.0, -9.0, 6.0);
        ball.relaunch(&config, 1.0);
        assert_eq!(ball.position, Vector2::new(300.0, 200.0));
        assert_eq!(ball.velocity, Vector2::new(12.0, 0.0));
    }
}
