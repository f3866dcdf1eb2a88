use std::time::Duration;

use anyhow::{ensure, Result};

/// Startup configuration for the arena and the simulation cadence.
///
/// The physics rules assume well-formed geometry, so a config is
/// validated once before any game state is built from it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Arena width in pixels.
    pub arena_width: u32,
    /// Arena height in pixels.
    pub arena_height: u32,
    /// Thickness of the left/right/top border walls.
    pub wall_thickness: u32,
    /// Downward acceleration in pixels per tick squared.
    pub gravity: f64,
    /// Simulation ticks per second.
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: 512,
            arena_height: 512,
            wall_thickness: 20,
            gravity: 0.05,
            tick_rate: 60,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.arena_width > 0 && self.arena_height > 0,
            "arena dimensions must be positive ({}x{})",
            self.arena_width,
            self.arena_height
        );
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        ensure!(
            self.gravity.is_finite() && self.gravity >= 0.0,
            "gravity must be finite and non-negative (got {})",
            self.gravity
        );
        ensure!(
            self.wall_thickness.saturating_mul(2) < self.arena_width
                && self.wall_thickness.saturating_mul(2) < self.arena_height,
            "walls of thickness {} leave no playable interior in a {}x{} arena",
            self.wall_thickness,
            self.arena_width,
            self.arena_height
        );
        Ok(())
    }

    /// Wall-clock duration of one simulation tick.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }
}
