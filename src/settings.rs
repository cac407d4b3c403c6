/// Tunable game parameters.
///
/// Static fields are fixed for the lifetime of the process; the dynamic
/// subset (speeds, points, fleet direction) is reset on every new game and
/// ramps up once per cleared level.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("fleet direction must be -1 (left) or 1 (right), got {0}")]
    InvalidFleetDirection(i32),
}

/// Shared horizontal movement sign for the whole alien formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    /// −1.0 for left, +1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

impl TryFrom<i32> for FleetDirection {
    type Error = SettingsError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            -1 => Ok(FleetDirection::Left),
            1 => Ok(FleetDirection::Right),
            other => Err(SettingsError::InvalidFleetDirection(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    // Play-area size in cells.
    pub screen_width: u16,
    pub screen_height: u16,

    // Ship
    pub ship_limit: u32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullets_allowed: usize,

    // Aliens
    pub fleet_drop_speed: i32,

    // Per-level ramp factors
    pub speed_up_scale: f32,
    pub score_scale: f32,

    pub difficulty: Difficulty,

    // Dynamic subset — reset by `initialize_dynamic_settings`, overwritten
    // by `initialize_difficulty`, scaled by `increase_speed`.
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    fleet_direction: FleetDirection,
}

impl Settings {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            ship_limit: 3,
            bullet_width: 1,
            bullet_height: 1,
            bullets_allowed: 3,
            fleet_drop_speed: 1,
            speed_up_scale: 1.1,
            score_scale: 1.5,
            difficulty: Difficulty::default(),
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0,
            fleet_direction: FleetDirection::Right,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset the dynamic subset to its difficulty-independent defaults.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 1.5;
        self.bullet_speed = 1.5;
        self.alien_speed = 0.3;
        self.alien_points = 50;
        self.fleet_direction = FleetDirection::Right;
    }

    /// Overwrite speeds and scoring from the selected difficulty preset.
    pub fn initialize_difficulty(&mut self) {
        let (ship, bullet, alien, points) = match self.difficulty {
            Difficulty::Easy => (3.0, 3.0, 0.1, 50),
            Difficulty::Medium => (2.0, 4.0, 0.2, 75),
            Difficulty::Hard => (1.0, 5.0, 2.0, 100),
        };
        self.ship_speed = ship;
        self.bullet_speed = bullet;
        self.alien_speed = alien;
        self.alien_points = points;
    }

    /// Ramp the pace after a cleared level: every speed scales by
    /// `speed_up_scale`, the kill reward by `score_scale` (truncated).
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speed_up_scale;
        self.bullet_speed *= self.speed_up_scale;
        self.alien_speed *= self.speed_up_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    pub fn fleet_direction(&self) -> FleetDirection {
        self.fleet_direction
    }

    /// Assign the fleet direction from a raw ±1 sign. Any other value is
    /// rejected and leaves the current direction untouched.
    pub fn set_fleet_direction(&mut self, sign: i32) -> Result<(), SettingsError> {
        self.fleet_direction = FleetDirection::try_from(sign)?;
        Ok(())
    }

    pub fn reverse_fleet_direction(&mut self) {
        self.fleet_direction = self.fleet_direction.reversed();
    }
}
