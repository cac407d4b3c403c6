use alien_armada::input::{map_key, Action};
use alien_armada::menu::Menu;
use alien_armada::settings::Difficulty;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

// ── Global keys ───────────────────────────────────────────────────────────────

#[test]
fn quit_maps_in_both_states() {
    for active in [false, true] {
        assert_eq!(map_key(active, &press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(map_key(active, &press(KeyCode::Esc)), Action::Quit);
    }
}

#[test]
fn ctrl_c_quits() {
    let ev = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_key(true, &ev), Action::Quit);
}

// ── Menu keys ─────────────────────────────────────────────────────────────────

#[test]
fn play_key_starts_only_from_the_menu() {
    assert_eq!(map_key(false, &press(KeyCode::Char('p'))), Action::StartGame);
    assert_eq!(map_key(false, &press(KeyCode::Enter)), Action::StartGame);
    assert_eq!(map_key(true, &press(KeyCode::Char('p'))), Action::None);
}

#[test]
fn difficulty_keys_map_only_on_the_menu() {
    assert_eq!(
        map_key(false, &press(KeyCode::Char('1'))),
        Action::SelectDifficulty(Difficulty::Easy)
    );
    assert_eq!(
        map_key(false, &press(KeyCode::Char('2'))),
        Action::SelectDifficulty(Difficulty::Medium)
    );
    assert_eq!(
        map_key(false, &press(KeyCode::Char('3'))),
        Action::SelectDifficulty(Difficulty::Hard)
    );
    assert_eq!(map_key(true, &press(KeyCode::Char('2'))), Action::None);
}

// ── Play keys ─────────────────────────────────────────────────────────────────

#[test]
fn steering_maps_only_in_play() {
    assert_eq!(map_key(true, &press(KeyCode::Left)), Action::SteerLeft(true));
    assert_eq!(map_key(true, &press(KeyCode::Char('a'))), Action::SteerLeft(true));
    assert_eq!(map_key(true, &press(KeyCode::Right)), Action::SteerRight(true));
    assert_eq!(map_key(true, &press(KeyCode::Char('d'))), Action::SteerRight(true));
    assert_eq!(map_key(false, &press(KeyCode::Left)), Action::None);
}

#[test]
fn release_ends_the_steer_intent() {
    assert_eq!(map_key(true, &release(KeyCode::Left)), Action::SteerLeft(false));
    assert_eq!(map_key(true, &release(KeyCode::Char('d'))), Action::SteerRight(false));
    // Releasing anything else means nothing
    assert_eq!(map_key(true, &release(KeyCode::Char(' '))), Action::None);
}

#[test]
fn repeat_refreshes_the_steer_intent() {
    assert_eq!(map_key(true, &repeat(KeyCode::Left)), Action::SteerLeft(true));
}

#[test]
fn fire_is_one_per_press() {
    assert_eq!(map_key(true, &press(KeyCode::Char(' '))), Action::Fire);
    assert_eq!(map_key(true, &repeat(KeyCode::Char(' '))), Action::None);
    assert_eq!(map_key(false, &press(KeyCode::Char(' '))), Action::None);
}

// ── Menu buttons ──────────────────────────────────────────────────────────────

#[test]
fn menu_lays_out_four_disjoint_buttons() {
    let menu = Menu::new(120, 40);
    assert_eq!(menu.buttons.len(), 4);
    for (i, a) in menu.buttons.iter().enumerate() {
        for b in menu.buttons.iter().skip(i + 1) {
            assert!(!a.rect.overlaps(&b.rect));
        }
    }
}

#[test]
fn clicking_play_starts_the_game() {
    let menu = Menu::new(120, 40);
    let play = &menu.buttons[0].rect;
    let action = menu.map_click(false, play.x + 1, play.y + 1);
    assert_eq!(action, Action::StartGame);
}

#[test]
fn clicking_a_difficulty_selects_it() {
    let menu = Menu::new(120, 40);
    let hard = menu
        .buttons
        .iter()
        .find(|b| b.label == "Hard")
        .expect("hard button");
    let action = menu.map_click(false, hard.rect.x + 2, hard.rect.y + 1);
    assert_eq!(action, Action::SelectDifficulty(Difficulty::Hard));
}

#[test]
fn clicks_are_ignored_in_play() {
    let menu = Menu::new(120, 40);
    let play = &menu.buttons[0].rect;
    assert_eq!(menu.map_click(true, play.x + 1, play.y + 1), Action::None);
}

#[test]
fn clicks_outside_every_button_do_nothing() {
    let menu = Menu::new(120, 40);
    assert_eq!(menu.map_click(false, 0, 0), Action::None);
}

#[test]
fn select_updates_the_menu_state() {
    let mut menu = Menu::new(120, 40);
    assert_eq!(menu.selected, Difficulty::Easy); // default
    menu.select(Difficulty::Medium);
    assert_eq!(menu.selected, Difficulty::Medium);
}
