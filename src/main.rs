use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_armada::compute;
use alien_armada::display;
use alien_armada::input::{self, Action};
use alien_armada::menu::Menu;
use alien_armada::persist;
use alien_armada::settings::Settings;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// A steer key is considered "held" if its last press/repeat event arrived
/// within this many frames.  Covers terminals that don't emit key-release
/// events: the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames
/// (≈133 ms) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enter raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(event::EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back to
    // the hold-window model below.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

// ── Session loop ──────────────────────────────────────────────────────────────

/// Steering intents plus the frame each was last refreshed, so press-only
/// terminals can expire them through the hold window.
struct Steering {
    left: bool,
    right: bool,
    left_seen: u64,
    right_seen: u64,
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    // The HUD, border and hint rows wrap the play area.
    let settings = Settings::new(cols.saturating_sub(2).max(24), rows.saturating_sub(4).max(14));

    let score_path = persist::score_path();
    let highest_score = persist::load_high_score(&score_path);
    let mut persisted_high = highest_score;

    let mut world = compute::new_world(settings, highest_score);
    let mut menu = Menu::new(cols, rows);
    let mut steering = Steering { left: false, right: false, left_seen: 0, right_seen: 0 };
    let mut frame: u64 = 0;

    // The session starts on the menu, cursor visible.
    out.execute(cursor::Show)?;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let was_active = world.stats.game_active;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let action = match &ev {
                Event::Key(key) => input::map_key(world.stats.game_active, key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(_) => menu.map_click(
                        world.stats.game_active,
                        mouse.column as i32,
                        mouse.row as i32,
                    ),
                    _ => Action::None,
                },
                _ => Action::None,
            };

            match action {
                Action::Quit => return Ok(()),
                Action::StartGame => {
                    world.settings.difficulty = menu.selected;
                    world = compute::start_game(&world);
                    steering = Steering { left: false, right: false, left_seen: 0, right_seen: 0 };
                    out.execute(cursor::Hide)?;
                }
                Action::SelectDifficulty(d) => {
                    menu.select(d);
                    world.settings.difficulty = d;
                }
                Action::SteerLeft(on) => {
                    steering.left = on;
                    steering.left_seen = frame;
                }
                Action::SteerRight(on) => {
                    steering.right = on;
                    steering.right_seen = frame;
                }
                Action::Fire => {
                    if !compute::input_frozen(&world) {
                        world = compute::fire_bullet(&world);
                    }
                }
                Action::None => {}
            }
        }

        // Press-only terminals never send releases; expire stale intents.
        if !keyboard_enhanced {
            if steering.left && frame.saturating_sub(steering.left_seen) > HOLD_WINDOW {
                steering.left = false;
            }
            if steering.right && frame.saturating_sub(steering.right_seen) > HOLD_WINDOW {
                steering.right = false;
            }
        }

        if world.stats.game_active {
            world = compute::set_steering(&world, steering.left, steering.right);
            world = compute::tick(&world);
        }

        // Persist the best score the moment it grows.
        if world.stats.highest_score > persisted_high {
            persisted_high = world.stats.highest_score;
            persist::save_high_score(&score_path, persisted_high);
        }

        // Game over this frame: back to the menu, cursor visible again.
        if was_active && !world.stats.game_active {
            out.execute(cursor::Show)?;
        }

        if world.stats.game_active {
            display::render_game(out, &world)?;
        } else {
            display::render_menu(out, &menu, cols, world.stats.highest_score)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
