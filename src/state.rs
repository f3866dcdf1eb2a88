use anyhow::{ensure, Result};

use crate::config::Config;
use crate::geometry::Rect;

pub const BALL_RADIUS: u32 = 10;
pub const BALL_START_Y: f64 = 100.0;
pub const BALL_COLOR: (u8, u8, u8) = (0, 255, 255);

pub const PADDLE_WIDTH: u32 = 90;
pub const PADDLE_HEIGHT: u32 = 15;
pub const PADDLE_SPEED: u32 = 10;
pub const PADDLE_COLOR: (u8, u8, u8) = (255, 0, 0);
/// Distance from the bottom of the arena to the paddle row.
pub const PADDLE_BOTTOM_OFFSET: u32 = 80;

/// The bouncing ball. Position is the center; `x` is real-valued so the
/// paddle reflection can impart sub-pixel horizontal drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub radius: u32,
    pub color: (u8, u8, u8),
    pub x_vel: f64,
    pub y_vel: f64,
}

/// The player's paddle. Position is the top-left corner; `speed` is
/// pixels moved per tick while a move key is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: (u8, u8, u8),
    pub speed: u32,
}

impl Paddle {
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Everything the update step mutates: the ball, the player, and the
/// running flag. `running` flips to false exactly once (quit or loss)
/// and is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    pub player: Paddle,
    pub running: bool,
}

impl GameState {
    /// Build the initial state for the given arena: ball centered near
    /// the top, paddle centered near the bottom. Fails fast if the
    /// default entities do not fit the configured geometry.
    pub fn new(cfg: &Config) -> Result<Self> {
        cfg.validate()?;

        let ball = Ball {
            x: f64::from(cfg.arena_width) / 2.0,
            y: BALL_START_Y,
            radius: BALL_RADIUS,
            color: BALL_COLOR,
            x_vel: 0.0,
            y_vel: 0.0,
        };
        ensure!(ball.radius > 0, "ball radius must be positive");

        ensure!(
            PADDLE_WIDTH + 2 * cfg.wall_thickness <= cfg.arena_width,
            "paddle of width {} does not fit between the walls of a {}-wide arena",
            PADDLE_WIDTH,
            cfg.arena_width
        );
        ensure!(
            cfg.arena_height > PADDLE_BOTTOM_OFFSET + cfg.wall_thickness,
            "arena height {} leaves no room for the paddle row",
            cfg.arena_height
        );
        let player = Paddle {
            x: cfg.arena_width / 2,
            y: cfg.arena_height - PADDLE_BOTTOM_OFFSET,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: PADDLE_COLOR,
            speed: PADDLE_SPEED,
        };

        Ok(Self {
            ball,
            player,
            running: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_arena() {
        let state = GameState::new(&Config::default()).unwrap();
        assert_eq!(state.ball.x, 256.0);
        assert_eq!(state.ball.y, 100.0);
        assert_eq!(state.ball.radius, 10);
        assert_eq!(state.player.y, 432);
        assert!(state.running);
    }

    #[test]
    fn ball_starts_at_rest() {
        let state = GameState::new(&Config::default()).unwrap();
        assert_eq!(state.ball.x_vel, 0.0);
        assert_eq!(state.ball.y_vel, 0.0);
    }

    #[test]
    fn narrow_arena_rejects_paddle() {
        let cfg = Config {
            arena_width: 120,
            ..Config::default()
        };
        assert!(GameState::new(&cfg).is_err());
    }

    #[test]
    fn short_arena_rejects_paddle_row() {
        let cfg = Config {
            arena_height: 90,
            ..Config::default()
        };
        assert!(GameState::new(&cfg).is_err());
    }
}
