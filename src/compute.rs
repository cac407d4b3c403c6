/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameWorld` and returns a brand-new `GameWorld`; nothing here touches the
/// terminal or the filesystem. The frame loop owns all side effects.

use crate::entities::{Alien, Bullet, Ship};
use crate::fleet;
use crate::settings::Settings;
use crate::state::GameStats;

/// Frames steer/fire/combat stay frozen after a non-fatal ship hit
/// (~0.5 s at the 30 FPS frame budget).
pub const HIT_PAUSE_FRAMES: u64 = 15;

/// The full simulation state for one session.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub aliens: Vec<Alien>,
    pub bullets: Vec<Bullet>,
    pub frame: u64,
    /// Combat and steer/fire input are ignored until this frame is reached.
    pub resume_frame: u64,
}

/// Build the idle (menu) world. A formation is laid out immediately so the
/// first Play starts from the same state as every later one.
pub fn new_world(settings: Settings, highest_score: u32) -> GameWorld {
    let stats = GameStats::new(&settings, highest_score);
    let ship = Ship::new(&settings);
    let aliens = fleet::create_fleet(&settings);
    GameWorld {
        settings,
        stats,
        ship,
        aliens,
        bullets: Vec::new(),
        frame: 0,
        resume_frame: 0,
    }
}

/// Transition into play: re-initialize the dynamic settings and the selected
/// difficulty preset, reset the stats, wipe the field, rebuild the fleet and
/// recenter the ship.
pub fn start_game(world: &GameWorld) -> GameWorld {
    let mut w = world.clone();
    w.settings.initialize_dynamic_settings();
    w.settings.initialize_difficulty();
    w.stats.reset(&w.settings);
    w.stats.game_active = true;

    w.bullets.clear();
    w.aliens = fleet::create_fleet(&w.settings);
    w.ship.center_ship(&w.settings);
    w.ship.moving_left = false;
    w.ship.moving_right = false;
    w.resume_frame = 0;
    w
}

/// Set the ship's movement intents for the coming frames.
pub fn set_steering(world: &GameWorld, left: bool, right: bool) -> GameWorld {
    let mut w = world.clone();
    w.ship.moving_left = left;
    w.ship.moving_right = right;
    w
}

/// Fire a bullet from the ship's top-center — a no-op at the bullet cap.
pub fn fire_bullet(world: &GameWorld) -> GameWorld {
    if world.bullets.len() >= world.settings.bullets_allowed {
        return world.clone();
    }
    let mut w = world.clone();
    let bullet = Bullet::new(&w.ship, &w.settings);
    w.bullets.push(bullet);
    w
}

/// True while the post-hit cooldown is running.
pub fn input_frozen(world: &GameWorld) -> bool {
    world.frame < world.resume_frame
}

/// Advance the simulation by one frame.
///
/// Fixed order: fleet edge reaction, position updates, ship–alien and
/// alien-at-bottom checks (either one ends the tick as a ship hit), then
/// bullet–alien resolution and the empty-fleet level clear.
pub fn tick(world: &GameWorld) -> GameWorld {
    let mut w = world.clone();
    w.frame += 1;

    if !w.stats.game_active || input_frozen(&w) {
        return w;
    }

    // 1. Edge reaction — drop and reverse as one unit, at most once per frame.
    if fleet::fleet_at_edge(&w.aliens, &w.settings) {
        w.aliens = fleet::drop_fleet(&w.aliens, &w.settings);
        w.settings.reverse_fleet_direction();
    }

    // 2. Positions.
    w.ship = moved_ship(&w.ship, &w.settings);
    w.aliens = fleet::advance_fleet(&w.aliens, &w.settings);
    w.bullets = moved_bullets(&w.bullets, &w.settings);

    // 3–4. A direct overlap or an alien reaching the bottom is a ship hit;
    // either short-circuits the rest of the frame's combat.
    let ship_rect = w.ship.rect();
    let bottom = w.settings.screen_height as i32;
    let hit = w.aliens.iter().any(|a| a.rect().overlaps(&ship_rect))
        || w.aliens.iter().any(|a| a.rect().bottom() >= bottom);
    if hit {
        return ship_hit(w);
    }

    // 5. Bullet–alien resolution. Pairs are disjoint: one bullet is consumed
    // per kill, one alien dies per bullet.
    let mut killed_aliens: Vec<usize> = Vec::new();
    let mut used_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in w.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect(&w.settings);
        for (ai, alien) in w.aliens.iter().enumerate() {
            if !killed_aliens.contains(&ai) && bullet_rect.overlaps(&alien.rect()) {
                killed_aliens.push(ai);
                used_bullets.push(bi);
                break;
            }
        }
    }

    if !killed_aliens.is_empty() {
        w.stats.score += w.settings.alien_points * killed_aliens.len() as u32;
        if w.stats.score > w.stats.highest_score {
            w.stats.highest_score = w.stats.score;
        }

        w.aliens = w
            .aliens
            .iter()
            .enumerate()
            .filter(|(i, _)| !killed_aliens.contains(i))
            .map(|(_, a)| a.clone())
            .collect();
        w.bullets = w
            .bullets
            .iter()
            .enumerate()
            .filter(|(i, _)| !used_bullets.contains(i))
            .map(|(_, b)| b.clone())
            .collect();
    }

    // 6. Level clear: wipe bullets, rebuild, ramp the pace.
    if w.aliens.is_empty() {
        w.bullets.clear();
        w.aliens = fleet::create_fleet(&w.settings);
        w.settings.increase_speed();
        w.stats.level += 1;
    }

    w
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Apply the movement intents, clamped to the play area.
fn moved_ship(ship: &Ship, settings: &Settings) -> Ship {
    let mut moved = ship.clone();
    if moved.moving_left {
        moved.x -= settings.ship_speed;
    }
    if moved.moving_right {
        moved.x += settings.ship_speed;
    }
    let max_x = (settings.screen_width as i32 - crate::entities::SHIP_WIDTH) as f32;
    moved.x = moved.x.clamp(0.0, max_x);
    moved
}

/// Raise every bullet by the bullet speed and cull the ones that left the top.
fn moved_bullets(bullets: &[Bullet], settings: &Settings) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - settings.bullet_speed,
            ..b.clone()
        })
        .filter(|b| !b.off_screen(settings))
        .collect()
}

/// Respond to the ship being hit: spend a life, and either rebuild the field
/// behind a short cooldown or end the session.
fn ship_hit(mut w: GameWorld) -> GameWorld {
    w.stats.ships_left = w.stats.ships_left.saturating_sub(1);

    if w.stats.ships_left > 0 {
        w.aliens = fleet::create_fleet(&w.settings);
        w.bullets.clear();
        w.ship.center_ship(&w.settings);
        w.ship.moving_left = false;
        w.ship.moving_right = false;
        w.resume_frame = w.frame + HIT_PAUSE_FRAMES;
    } else {
        w.stats.game_active = false;
    }
    w
}
