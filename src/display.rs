/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.
///
/// Terminal layout: row 0 is the HUD, row 1 and the second-to-last row are
/// the border, the last row is the controls hint. The play area sits inside,
/// so play coordinates map to terminal cells at (+1, +2).

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute::GameWorld;
use crate::entities::{Alien, Bullet, Ship};
use crate::menu::{Button, ButtonKind, Menu};
use crate::settings::Difficulty;

/// Horizontal offset of the play area inside the terminal.
pub const PLAY_ORIGIN_X: i32 = 1;
/// Vertical offset of the play area inside the terminal.
pub const PLAY_ORIGIN_Y: i32 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_BUTTON: Color = Color::White;
const C_BUTTON_SELECTED: Color = Color::Green;

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

// ── Game screen ───────────────────────────────────────────────────────────────

/// Render one complete in-play frame.
pub fn render_game<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, world)?;
    draw_hud(out, world)?;

    for alien in &world.aliens {
        draw_alien(out, alien, world.settings.screen_height as i32)?;
    }
    for bullet in &world.bullets {
        draw_bullet(out, bullet)?;
    }
    draw_ship(out, &world.ship)?;
    draw_controls_hint(out, world)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    let last_row = (world.settings.screen_height as u16).saturating_add(3);
    out.queue(cursor::MoveTo(0, last_row))?;
    out.flush()?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    let w = world.settings.screen_width as usize;
    let bottom_row = world.settings.screen_height as u16 + 2;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom_row))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 2..bottom_row {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(w as u16 + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    let stats = &world.stats;
    let term_width = world.settings.screen_width + 2;

    // Score (and best, once there is one) — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if stats.highest_score > 0 {
        out.queue(Print(format!(
            "Score: {:>6}   Best: {:>6}",
            stats.score, stats.highest_score
        )))?;
    } else {
        out.queue(Print(format!("Score: {:>6}", stats.score)))?;
    }

    // Level + difficulty — centre
    let level_str = format!(
        "[ Lv {} · {} ]",
        stats.level,
        world.settings.difficulty.label().to_uppercase()
    );
    let lx = (term_width / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(difficulty_color(world.settings.difficulty)))?;
    out.queue(Print(&level_str))?;

    // Lives — right
    let hearts: String = "♥".repeat(stats.ships_left as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = term_width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

fn draw_ship<W: Write>(out: &mut W, ship: &Ship) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip, centre column)
    //  /|\      ← row y+1    (wings + fuselage)
    let rect = ship.rect();
    out.queue(style::SetForegroundColor(C_SHIP))?;

    out.queue(cursor::MoveTo(
        (rect.x + 1 + PLAY_ORIGIN_X) as u16,
        (rect.y + PLAY_ORIGIN_Y) as u16,
    ))?;
    out.queue(Print("▲"))?;

    out.queue(cursor::MoveTo(
        (rect.x + PLAY_ORIGIN_X) as u16,
        (rect.y + 1 + PLAY_ORIGIN_Y) as u16,
    ))?;
    out.queue(Print("/|\\"))?;

    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, alien: &Alien, play_height: i32) -> std::io::Result<()> {
    // Row 0:  <▼>
    // Row 1:  [_]
    let rect = alien.rect();
    if rect.y < 0 || rect.y >= play_height {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_ALIEN))?;
    out.queue(cursor::MoveTo(
        (rect.x + PLAY_ORIGIN_X).max(1) as u16,
        (rect.y + PLAY_ORIGIN_Y) as u16,
    ))?;
    out.queue(Print("<▼>"))?;
    if rect.y + 1 < play_height {
        out.queue(cursor::MoveTo(
            (rect.x + PLAY_ORIGIN_X).max(1) as u16,
            (rect.y + 1 + PLAY_ORIGIN_Y) as u16,
        ))?;
        out.queue(Print("[_]"))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet) -> std::io::Result<()> {
    let row = bullet.y as i32;
    if row < 0 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(
        (bullet.x + PLAY_ORIGIN_X) as u16,
        (row + PLAY_ORIGIN_Y) as u16,
    ))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    let last_row = world.settings.screen_height as u16 + 3;
    out.queue(cursor::MoveTo(1, last_row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Menu screen ───────────────────────────────────────────────────────────────

/// Render the idle-state menu: title, best score, Play and difficulty buttons.
pub fn render_menu<W: Write>(
    out: &mut W,
    menu: &Menu,
    term_width: u16,
    highest_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = term_width / 2;
    let top = menu.buttons[0].rect.y as u16;

    let title = "★  ALIEN  ARMADA  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        top.saturating_sub(4),
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    if highest_score > 0 {
        let hs_str = format!("Best Score: {}", highest_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            top.saturating_sub(2),
        ))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&hs_str))?;
    }

    for button in &menu.buttons {
        let selected = matches!(button.kind, ButtonKind::Difficulty(d) if d == menu.selected);
        draw_button(out, button, selected)?;
    }

    let bottom = menu
        .buttons
        .last()
        .map(|b| b.rect.bottom() as u16)
        .unwrap_or(top);
    out.queue(cursor::MoveTo(cx.saturating_sub(26), bottom + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Click a button, or: P/Enter : Play   1 2 3 : Difficulty   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn draw_button<W: Write>(out: &mut W, button: &Button, selected: bool) -> std::io::Result<()> {
    let rect = button.rect;
    let inner = rect.width as usize - 2;
    let color = if selected { C_BUTTON_SELECTED } else { C_BUTTON };

    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(rect.x as u16, rect.y as u16))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    let marker = if selected { "▶" } else { " " };
    out.queue(cursor::MoveTo(rect.x as u16, rect.y as u16 + 1))?;
    out.queue(Print(format!("│{}{:^width$}│", marker, button.label, width = inner - 1)))?;

    out.queue(cursor::MoveTo(rect.x as u16, rect.y as u16 + 2))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    Ok(())
}
