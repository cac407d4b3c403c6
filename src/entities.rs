/// All game entity types — pure data plus bounding-box accessors.
///
/// Horizontal positions are `f32` so sub-cell speeds accumulate accurately;
/// they are rounded down to cells only when a bounding box is taken.

use crate::geometry::Rect;
use crate::settings::Settings;

// Sprite footprints in cells.
pub const SHIP_WIDTH: i32 = 3;
pub const SHIP_HEIGHT: i32 = 2;
pub const ALIEN_WIDTH: i32 = 3;
pub const ALIEN_HEIGHT: i32 = 2;

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    /// Left edge, fractional cells.
    pub x: f32,
    /// Top row — fixed for the whole session.
    pub y: i32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A new ship sits at the bottom-center of the play area.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: settings.screen_height as i32 - SHIP_HEIGHT,
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    /// Reposition (not recreate) at bottom-center.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.x = (settings.screen_width as i32 - SHIP_WIDTH) as f32 / 2.0;
        self.y = settings.screen_height as i32 - SHIP_HEIGHT;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, SHIP_WIDTH, SHIP_HEIGHT)
    }

    /// Cell column of the sprite's middle — bullets spawn here.
    pub fn center_column(&self) -> i32 {
        self.x as i32 + SHIP_WIDTH / 2
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    /// Top edge, fractional rows (moves upward).
    pub y: f32,
}

impl Bullet {
    /// Spawn at the ship's top-center.
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        Bullet {
            x: ship.center_column(),
            y: (ship.y - settings.bullet_height) as f32,
        }
    }

    pub fn rect(&self, settings: &Settings) -> Rect {
        Rect::new(
            self.x,
            self.y as i32,
            settings.bullet_width,
            settings.bullet_height,
        )
    }

    /// True once the bottom edge has passed above the play-area top.
    pub fn off_screen(&self, settings: &Settings) -> bool {
        self.y + settings.bullet_height as f32 <= 0.0
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    /// Left edge, fractional cells.
    pub x: f32,
    /// Top row — changed only by whole-fleet drops.
    pub y: i32,
}

impl Alien {
    pub fn new(x: f32, y: i32) -> Self {
        Alien { x, y }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, ALIEN_WIDTH, ALIEN_HEIGHT)
    }

    /// True if the sprite touches either play-area edge. Checked on the
    /// fractional position: at sub-cell speeds the truncated rect would keep
    /// reporting the edge for several frames after a direction flip.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.x <= 0.0 || self.x + ALIEN_WIDTH as f32 >= settings.screen_width as f32
    }
}
