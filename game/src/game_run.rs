use crate::ball::Ball;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::paddle::{Opponent, Paddle, Player, VelocityPolicy};
use cgmath::Vector2;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// What happened during a single [`GameRun::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Paddle that returned the ball; the frontend plays the bounce sound for it.
    pub bounce: Option<Side>,
    /// Side that won a point.
    pub score: Option<Side>,
}

/// One match: both paddles, the ball and the tallies.
#[derive(Debug, Clone)]
pub struct GameRun {
    pub config: Config,
    pub player: Player,
    pub opponent: Opponent,
    pub ball: Ball,
    pub tally_player: u32,
    pub tally_opponent: u32,
}

impl GameRun {
    pub fn new(config: Config) -> Self {
        GameRun {
            player: Player::spawn(&config),
            opponent: Opponent::spawn(&config),
            ball: Ball::new(&config),
            tally_player: 0,
            tally_opponent: 0,
            config,
        }
    }

    /// Draws the current state, then advances it by one frame.
    pub fn frame(&mut self, canvas: &mut impl Canvas) -> FrameEvents {
        let middle = self.config.width / 2.0;
        canvas.line(middle, 0.0, middle, self.config.height);
        self.draw(canvas);
        self.update()
    }

    pub fn update(&mut self) -> FrameEvents {
        let mut events = FrameEvents::default();

        if self.check_game_over() {
            events.score = Some(self.reset());
        }

        events.bounce = self.check_paddle_collisions();

        self.player.update(&self.ball, &self.config);
        self.opponent.update(&self.ball, &self.config);
        self.ball.update(&self.config);

        events
    }

    pub fn check_game_over(&self) -> bool {
        self.ball.is_off_field(&self.config)
    }

    /// Awards the point to the side the ball escaped from and serves towards the loser.
    pub fn reset(&mut self) -> Side {
        let scorer = if self.ball.position.x < self.config.width / 2.0 {
            self.tally_opponent += 1;
            self.ball.relaunch(&self.config, 1.0);
            Side::Opponent
        } else {
            self.tally_player += 1;
            self.ball.relaunch(&self.config, -1.0);
            Side::Player
        };

        info!(
            "{:?} scored, player {} - opponent {}",
            scorer, self.tally_player, self.tally_opponent
        );

        scorer
    }

    fn check_paddle_collisions(&mut self) -> Option<Side> {
        let config = &self.config;
        let ball_x = self.ball.position.x;
        let player_x = self.player.position.x;
        let opponent_x = self.opponent.position.x;

        if player_x <= ball_x && ball_x <= player_x + config.paddle_width + config.buffer {
            if self.player.covers(&self.ball, config) {
                self.ball.velocity = deflect(&self.player, &self.ball, config, 1.0);
                debug!("Player returned the ball at y={}", self.ball.position.y);
                return Some(Side::Player);
            }
        } else if opponent_x - config.buffer <= ball_x && ball_x <= opponent_x + config.paddle_width
        {
            if self.opponent.covers(&self.ball, config) {
                self.ball.velocity = deflect(&self.opponent, &self.ball, config, -1.0);
                debug!("Opponent returned the ball at y={}", self.ball.position.y);
                return Some(Side::Opponent);
            }
        }

        None
    }

    pub fn key_pressed(&mut self, key_code: u32) {
        self.set_key(key_code, true);
    }

    pub fn key_released(&mut self, key_code: u32) {
        self.set_key(key_code, false);
    }

    fn set_key(&mut self, key_code: u32, held: bool) {
        if key_code == self.config.up_key {
            self.player.policy.move_up = held;
        } else if key_code == self.config.down_key {
            self.player.policy.move_down = held;
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let config = &self.config;

        canvas.text(
            &self.tally_player.to_string(),
            config.player_score_position.x,
            config.player_score_position.y,
            config.score_font_size,
        );
        canvas.text(
            &self.tally_opponent.to_string(),
            config.opponent_score_position.x,
            config.opponent_score_position.y,
            config.score_font_size,
        );

        self.player.draw(canvas, config);
        self.opponent.draw(canvas, config);
        self.ball.draw(canvas, config);
    }
}

impl Default for GameRun {
    fn default() -> Self {
        GameRun::new(Config::default())
    }
}

/// Outgoing velocity off `paddle`; `direction` is `1.0` for rightwards.
fn deflect<P: VelocityPolicy>(
    paddle: &Paddle<P>,
    ball: &Ball,
    config: &Config,
    direction: f32,
) -> Vector2<f32> {
    let angle = paddle.bounce_angle(ball, config);
    Vector2::new(
        direction * config.ball_speed * angle.cos(),
        config.ball_speed * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};
    use cgmath::AbsDiffEq;

    #[test]
    fn test_reset_from_left_edge_scores_for_opponent() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(0.0, 200.0);

        assert_eq!(game.reset(), Side::Opponent);
        assert_eq!(game.ball.position, Vector2::new(300.0, 200.0));
        assert_eq!(game.ball.velocity, Vector2::new(12.0, 0.0));
        assert_eq!(game.tally_opponent, 1);
        assert_eq!(game.tally_player, 0);
    }

    #[test]
    fn test_reset_from_right_edge_scores_for_player() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(595.0, 50.0);
        game.ball.velocity = Vector2::new(11.0, -4.0);

        assert_eq!(game.reset(), Side::Player);
        assert_eq!(game.ball.position, Vector2::new(300.0, 200.0));
        assert_eq!(game.ball.velocity, Vector2::new(-12.0, 0.0));
        assert_eq!(game.tally_player, 1);
    }

    #[test]
    fn test_centre_hit_on_player_returns_flat() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(45.0, 200.0);

        assert_eq!(game.check_paddle_collisions(), Some(Side::Player));
        assert!(game.ball.velocity.x.abs_diff_eq(&12.0, 1e-5));
        assert!(game.ball.velocity.y.abs_diff_eq(&0.0, 1e-5));
    }

    #[test]
    fn test_hit_above_centre_on_opponent_deflects_up_and_left() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(545.0, 180.0);
        game.ball.velocity = Vector2::new(12.0, 0.0);

        assert_eq!(game.check_paddle_collisions(), Some(Side::Opponent));
        assert!(game.ball.velocity.x < 0.0, "Ball heads back left");
        assert!(game.ball.velocity.y < 0.0, "Ball heads up");

        let speed = (game.ball.velocity.x.powi(2) + game.ball.velocity.y.powi(2)).sqrt();
        assert!(speed.abs_diff_eq(&12.0, 1e-4), "Speed is preserved");
    }

    #[test]
    fn test_no_collision_outside_vertical_extent() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(45.0, 100.0);

        assert_eq!(game.check_paddle_collisions(), None);
        assert_eq!(game.ball.velocity, Vector2::new(-12.0, 0.0));
    }

    #[test]
    fn test_key_events_toggle_player_movement() {
        let mut game = GameRun::default();

        game.key_pressed(87);
        assert!(game.player.policy.move_up);

        game.key_pressed(83);
        assert!(game.player.policy.move_down);

        game.key_released(87);
        assert!(!game.player.policy.move_up);
        assert!(game.player.policy.move_down);

        game.key_pressed(32);
        game.key_released(32);
        assert!(!game.player.policy.move_up, "Other keys are ignored");
        assert!(game.player.policy.move_down, "Other keys are ignored");
    }

    #[test]
    fn test_frame_draws_before_updating() {
        let mut game = GameRun::default();
        let mut canvas = RecordingCanvas::default();

        game.frame(&mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Line(300.0, 0.0, 300.0, 400.0),
                DrawCall::Text("0".to_string(), 160.0, 40.0, 32.0),
                DrawCall::Text("0".to_string(), 420.0, 40.0, 32.0),
                DrawCall::Rect(40.0, 165.0, 10.0, 70.0),
                DrawCall::Rect(550.0, 165.0, 10.0, 70.0),
                DrawCall::Circle(300.0, 200.0, 10.0),
            ]
        );
        assert_eq!(game.ball.position.x, 288.0, "State advanced after drawing");
    }

    #[test]
    fn test_update_reports_score_and_relaunches() {
        let mut game = GameRun::default();
        game.ball.position = Vector2::new(-3.0, 120.0);

        let events = game.update();

        assert_eq!(events.score, Some(Side::Opponent));
        assert_eq!(game.tally_opponent, 1);
        assert_eq!(game.ball.position, Vector2::new(312.0, 200.0));
    }
}
