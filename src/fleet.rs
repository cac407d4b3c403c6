/// Formation management.
///
/// The fleet is a grid of aliens moved and reasoned about as a unit: it
/// advances in lock-step, and when any member touches a play-area edge the
/// whole formation drops one step and reverses direction.

use crate::entities::{Alien, ALIEN_HEIGHT, ALIEN_WIDTH, SHIP_HEIGHT};
use crate::settings::Settings;

/// Build a fresh formation grid.
///
/// Spacing is two alien widths horizontally and two alien heights
/// vertically, with one alien width of margin on each side and room left
/// above the ship. Layout depends only on the play-area size, never on
/// difficulty.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let available_space_x = settings.screen_width as i32 - 2 * ALIEN_WIDTH;
    let number_aliens_x = available_space_x / (2 * ALIEN_WIDTH);

    let available_space_y =
        settings.screen_height as i32 - 4 * ALIEN_HEIGHT - SHIP_HEIGHT;
    let number_rows = available_space_y / (2 * ALIEN_HEIGHT);

    let mut aliens = Vec::with_capacity((number_rows * number_aliens_x).max(0) as usize);
    for row_number in 0..number_rows {
        for alien_number in 0..number_aliens_x {
            let x = (ALIEN_WIDTH + 2 * ALIEN_WIDTH * alien_number) as f32;
            let y = 2 * ALIEN_HEIGHT + 2 * ALIEN_HEIGHT * row_number;
            aliens.push(Alien::new(x, y));
        }
    }
    aliens
}

/// Shift every alien horizontally by `alien_speed × fleet_direction`.
pub fn advance_fleet(aliens: &[Alien], settings: &Settings) -> Vec<Alien> {
    let dx = settings.alien_speed * settings.fleet_direction().sign();
    aliens
        .iter()
        .map(|a| Alien { x: a.x + dx, ..a.clone() })
        .collect()
}

/// True if any alien touches either play-area edge.
pub fn fleet_at_edge(aliens: &[Alien], settings: &Settings) -> bool {
    aliens.iter().any(|a| a.check_edges(settings))
}

/// Drop every alien down by the configured step. The caller reverses the
/// fleet direction alongside; the two always happen together.
pub fn drop_fleet(aliens: &[Alien], settings: &Settings) -> Vec<Alien> {
    aliens
        .iter()
        .map(|a| Alien {
            y: a.y + settings.fleet_drop_speed,
            ..a.clone()
        })
        .collect()
}
