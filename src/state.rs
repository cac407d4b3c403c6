/// Session statistics: lives, score, level, best score, active flag.

use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score across sessions — never reset, persisted by the loop
    /// whenever it grows.
    pub highest_score: u32,
    /// false = menu / game over, true = in play.
    pub game_active: bool,
}

impl GameStats {
    /// Fresh stats; the process starts on the menu.
    pub fn new(settings: &Settings, highest_score: u32) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 0,
            highest_score,
            game_active: false,
        };
        stats.reset(settings);
        stats
    }

    /// Reset everything that varies during one play-through.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}
