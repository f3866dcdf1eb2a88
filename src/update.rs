use crate::config::Config;
use crate::geometry::{intersects, Rect};
use crate::state::GameState;

/// Logical input for one tick. Key bindings live in the event layer;
/// the simulation only sees these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MoveLeft,
    MoveRight,
}

/// Vertical bounces lose a fixed `19 * gravity` instead of a term scaled
/// by the impact speed. Faithful arcade behavior, not physics.
const BOUNCE_CORRECTION: f64 = 19.0;

/// Cap on the horizontal speed a paddle hit may produce. Once a hit
/// would push |x_vel| past this, the reflection is skipped outright
/// rather than clamped to the cap — also faithful arcade behavior.
const MAX_PADDLE_DEFLECTION: f64 = 2.0;

/// Advance the simulation by one tick.
///
/// Order is fixed: quit, paddle movement, then collisions resolved
/// first-match-wins (left wall, right wall, top wall, paddle, free
/// fall), then the loss check. A terminal state is never mutated.
pub fn update(gs: &mut GameState, input: Option<InputEvent>, cfg: &Config) {
    if !gs.running {
        return;
    }

    match input {
        Some(InputEvent::Quit) => {
            gs.running = false;
            return;
        }
        Some(InputEvent::MoveLeft) => {
            let min_x = cfg.wall_thickness;
            gs.player.x = if gs.player.x >= min_x + gs.player.speed {
                gs.player.x - gs.player.speed
            } else {
                min_x
            };
        }
        Some(InputEvent::MoveRight) => {
            let max_x = cfg.arena_width - cfg.wall_thickness - gs.player.width;
            gs.player.x = if gs.player.x + gs.player.speed <= max_x {
                gs.player.x + gs.player.speed
            } else {
                max_x
            };
        }
        None => {}
    }

    let left = Rect::new(0, 0, cfg.wall_thickness, cfg.arena_height);
    let right = Rect::new(
        cfg.arena_width - cfg.wall_thickness,
        0,
        cfg.wall_thickness,
        cfg.arena_height,
    );
    let top = Rect::new(0, 0, cfg.arena_width, cfg.wall_thickness);

    let GameState {
        ball,
        player,
        running,
    } = gs;

    if intersects(ball.x, ball.y, ball.radius, &left) {
        ball.x_vel = -ball.x_vel;
        // Land just right of the inner edge; the 0.5 bias keeps the ball
        // from re-triggering the same wall next tick.
        ball.x = f64::from(cfg.wall_thickness + ball.radius) + ball.x_vel + 0.5;
    } else if intersects(ball.x, ball.y, ball.radius, &right) {
        ball.x_vel = -ball.x_vel;
        ball.x = f64::from(cfg.arena_width - cfg.wall_thickness - ball.radius) + ball.x_vel - 0.5;
    } else if intersects(ball.x, ball.y, ball.radius, &top) {
        ball.y_vel = -(ball.y_vel - BOUNCE_CORRECTION * cfg.gravity);
        ball.y = f64::from(cfg.wall_thickness + ball.radius) + ball.y_vel;
    } else if intersects(ball.x, ball.y, ball.radius, &player.hitbox()) {
        ball.y_vel = -(ball.y_vel - BOUNCE_CORRECTION * cfg.gravity);
        ball.y = f64::from(player.y) - f64::from(ball.radius) + ball.y_vel;

        // Reflect off-center hits sideways, scaled by the offset from
        // the paddle center.
        let den = ball.x - f64::from(player.x + player.width / 2);
        if den != 0.0 {
            let refl = den / f64::from(player.width / 2);
            let deflected = ball.x_vel + refl * 2.0;
            if deflected.abs() <= MAX_PADDLE_DEFLECTION {
                ball.x_vel = deflected;
            }
        }
    } else {
        // Free fall: the accumulation term keeps growing the velocity in
        // its direction of motion.
        ball.y_vel += if ball.y_vel + cfg.gravity > ball.y_vel {
            cfg.gravity
        } else {
            -cfg.gravity
        };
        ball.y += ball.y_vel;
        ball.x += ball.x_vel;
    }

    // Ball fell out through the bottom.
    if ball.y >= f64::from(cfg.arena_height) {
        *running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameState, Config) {
        let cfg = Config::default();
        let state = GameState::new(&cfg).unwrap();
        (state, cfg)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn free_fall_accumulates_gravity() {
        let (mut gs, cfg) = setup();
        gs.ball.x = 256.0;
        gs.ball.y = 100.0;
        gs.ball.x_vel = 0.0;
        gs.ball.y_vel = 1.0;

        update(&mut gs, None, &cfg);

        assert!(approx(gs.ball.y_vel, 1.05));
        assert!(approx(gs.ball.y, 101.05));
        assert_eq!(gs.ball.x, 256.0);
        assert!(gs.running);
    }

    #[test]
    fn left_wall_reflects_and_repositions() {
        let (mut gs, cfg) = setup();
        gs.ball.x = 15.0;
        gs.ball.y = 250.0;
        gs.ball.x_vel = -2.0;

        update(&mut gs, None, &cfg);

        assert_eq!(gs.ball.x_vel, 2.0);
        assert_eq!(gs.ball.x, 32.5);
        assert!(gs.ball.x > 20.0);
    }

    #[test]
    fn right_wall_mirrors_left() {
        let (mut gs, cfg) = setup();
        gs.ball.x = 497.0;
        gs.ball.y = 250.0;
        gs.ball.x_vel = 2.0;

        update(&mut gs, None, &cfg);

        assert_eq!(gs.ball.x_vel, -2.0);
        assert_eq!(gs.ball.x, 479.5);
        assert!(gs.ball.x < 492.0);
    }

    #[test]
    fn top_wall_bounces_down_with_fixed_correction() {
        let (mut gs, cfg) = setup();
        gs.ball.x = 256.0;
        gs.ball.y = 25.0;
        gs.ball.y_vel = -2.0;

        update(&mut gs, None, &cfg);

        // -(-2 - 19 * 0.05) = 2.95
        assert!(approx(gs.ball.y_vel, 2.95));
        assert!(approx(gs.ball.y, 32.95));
    }

    #[test]
    fn paddle_center_hit_bounces_straight_up() {
        let (mut gs, cfg) = setup();
        gs.player.x = 211; // center at 256
        gs.ball.x = 256.0;
        gs.ball.y = 427.0;
        gs.ball.y_vel = 3.0;
        gs.ball.x_vel = 0.0;

        update(&mut gs, None, &cfg);

        assert!(approx(gs.ball.y_vel, -2.05));
        assert!(approx(gs.ball.y, 419.95));
        assert_eq!(gs.ball.x_vel, 0.0);
    }

    #[test]
    fn paddle_offside_hit_deflects_sideways() {
        let (mut gs, cfg) = setup();
        gs.player.x = 211;
        gs.ball.x = 280.0;
        gs.ball.y = 427.0;
        gs.ball.y_vel = 3.0;
        gs.ball.x_vel = 0.0;

        update(&mut gs, None, &cfg);

        // den = 24, refl = 24/45, deflection = 2 * refl
        assert!(approx(gs.ball.x_vel, 48.0 / 45.0));
    }

    #[test]
    fn paddle_deflection_skips_past_speed_cap() {
        let (mut gs, cfg) = setup();
        gs.player.x = 211;
        gs.ball.x = 280.0;
        gs.ball.y = 427.0;
        gs.ball.y_vel = 3.0;
        gs.ball.x_vel = 1.5;

        update(&mut gs, None, &cfg);

        // 1.5 + 48/45 exceeds the cap, so the deflection is dropped
        // entirely rather than clamped.
        assert_eq!(gs.ball.x_vel, 1.5);
    }

    #[test]
    fn paddle_never_crosses_walls() {
        // Zero gravity keeps the ball afloat while the paddle is driven
        // into both walls.
        let cfg = Config {
            gravity: 0.0,
            ..Config::default()
        };
        let mut gs = GameState::new(&cfg).unwrap();
        for _ in 0..100 {
            update(&mut gs, Some(InputEvent::MoveLeft), &cfg);
            assert!(gs.player.x >= cfg.wall_thickness);
        }
        assert_eq!(gs.player.x, 20);

        for _ in 0..100 {
            update(&mut gs, Some(InputEvent::MoveRight), &cfg);
            assert!(gs.player.x <= cfg.arena_width - cfg.wall_thickness - gs.player.width);
        }
        assert_eq!(gs.player.x, 402);
    }

    #[test]
    fn quit_stops_without_physics() {
        let (mut gs, cfg) = setup();
        let ball_before = gs.ball.clone();

        update(&mut gs, Some(InputEvent::Quit), &cfg);

        assert!(!gs.running);
        assert_eq!(gs.ball, ball_before);
    }

    #[test]
    fn ball_below_arena_ends_the_game() {
        let (mut gs, cfg) = setup();
        gs.ball.x = 256.0;
        gs.ball.y = 512.0;

        update(&mut gs, None, &cfg);

        assert!(!gs.running);
    }

    #[test]
    fn terminal_state_is_never_mutated() {
        let (mut gs, cfg) = setup();
        gs.ball.y = 512.0;
        update(&mut gs, None, &cfg);
        assert!(!gs.running);

        let snapshot = gs.clone();
        update(&mut gs, None, &cfg);
        update(&mut gs, Some(InputEvent::MoveLeft), &cfg);
        update(&mut gs, Some(InputEvent::MoveRight), &cfg);
        update(&mut gs, Some(InputEvent::Quit), &cfg);
        assert_eq!(gs, snapshot);
    }
}
