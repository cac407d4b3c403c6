/// The idle-state menu: a Play button plus one button per difficulty preset.
///
/// A button is plain data — label, screen rect, kind tag. The menu owns the
/// selected difficulty; there is no per-button selection state.

use crate::geometry::Rect;
use crate::input::Action;
use crate::settings::Difficulty;

const BUTTON_WIDTH: i32 = 14;
const BUTTON_HEIGHT: i32 = 3;
/// Rows between stacked buttons.
const BUTTON_GAP: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Play,
    Difficulty(Difficulty),
}

#[derive(Clone, Debug)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub kind: ButtonKind,
}

#[derive(Clone, Debug)]
pub struct Menu {
    pub buttons: Vec<Button>,
    pub selected: Difficulty,
}

impl Menu {
    /// Lay out the buttons centered on the terminal: Play on top, the three
    /// difficulty presets stacked beneath it.
    pub fn new(term_width: u16, term_height: u16) -> Self {
        let cx = term_width as i32 / 2 - BUTTON_WIDTH / 2;
        let top = (term_height as i32 / 2 - 2).max(0);
        let step = BUTTON_HEIGHT + BUTTON_GAP;

        let entries: [(&'static str, ButtonKind); 4] = [
            ("Play", ButtonKind::Play),
            ("Easy", ButtonKind::Difficulty(Difficulty::Easy)),
            ("Medium", ButtonKind::Difficulty(Difficulty::Medium)),
            ("Hard", ButtonKind::Difficulty(Difficulty::Hard)),
        ];

        let buttons = entries
            .iter()
            .enumerate()
            .map(|(i, &(label, kind))| Button {
                label,
                rect: Rect::new(cx, top + step * i as i32, BUTTON_WIDTH, BUTTON_HEIGHT),
                kind,
            })
            .collect();

        Menu {
            buttons,
            selected: Difficulty::default(),
        }
    }

    pub fn select(&mut self, difficulty: Difficulty) {
        self.selected = difficulty;
    }

    /// Map a mouse click to an action. Clicks only mean anything on the menu.
    pub fn map_click(&self, game_active: bool, col: i32, row: i32) -> Action {
        if game_active {
            return Action::None;
        }
        for button in &self.buttons {
            if button.rect.contains(col, row) {
                return match button.kind {
                    ButtonKind::Play => Action::StartGame,
                    ButtonKind::Difficulty(d) => Action::SelectDifficulty(d),
                };
            }
        }
        Action::None
    }
}
