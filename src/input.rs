/// Keyboard mapping.
///
/// One enumerated action type and one pure mapping from
/// (current state, key event) to action; the frame loop dispatches on the
/// result and the state machine stays the single source of truth.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::settings::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Tear down and exit — honored in every state.
    Quit,
    /// Begin a fresh game — menu only.
    StartGame,
    /// Pick a difficulty preset — menu only.
    SelectDifficulty(Difficulty),
    /// Steer intent on (press/repeat) or off (release) — play only.
    SteerLeft(bool),
    SteerRight(bool),
    /// Spawn a bullet — play only, one per key press.
    Fire,
}

/// Map a key event to an action given the current session state.
pub fn map_key(game_active: bool, event: &KeyEvent) -> Action {
    // Release events only ever end a steer intent.
    if event.kind == KeyEventKind::Release {
        return match event.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') if game_active => {
                Action::SteerLeft(false)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') if game_active => {
                Action::SteerRight(false)
            }
            _ => Action::None,
        };
    }

    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter if !game_active => {
            Action::StartGame
        }
        KeyCode::Char('1') if !game_active => Action::SelectDifficulty(Difficulty::Easy),
        KeyCode::Char('2') if !game_active => Action::SelectDifficulty(Difficulty::Medium),
        KeyCode::Char('3') if !game_active => Action::SelectDifficulty(Difficulty::Hard),

        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') if game_active => {
            Action::SteerLeft(true)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') if game_active => {
            Action::SteerRight(true)
        }
        // One bullet per press — key repeat does not autofire.
        KeyCode::Char(' ') if game_active && event.kind == KeyEventKind::Press => Action::Fire,

        _ => Action::None,
    }
}
