use alien_armada::entities::{Alien, Bullet, Ship, ALIEN_WIDTH, SHIP_HEIGHT, SHIP_WIDTH};
use alien_armada::geometry::Rect;
use alien_armada::settings::Settings;

use approx::assert_relative_eq;

fn make_settings() -> Settings {
    Settings::new(100, 30)
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_overlap_basic() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(2, 2, 4, 4);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a)); // symmetric
}

#[test]
fn rect_edge_touch_is_not_overlap() {
    let a = Rect::new(0, 0, 4, 4);
    let right_of = Rect::new(4, 0, 4, 4);
    let below = Rect::new(0, 4, 4, 4);
    assert!(!a.overlaps(&right_of));
    assert!(!a.overlaps(&below));
}

#[test]
fn rect_disjoint() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(10, 10, 2, 2);
    assert!(!a.overlaps(&b));
}

#[test]
fn rect_contains_respects_bounds() {
    let r = Rect::new(5, 5, 3, 2);
    assert!(r.contains(5, 5)); // top-left inclusive
    assert!(r.contains(7, 6));
    assert!(!r.contains(8, 5)); // right exclusive
    assert!(!r.contains(5, 7)); // bottom exclusive
    assert!(!r.contains(4, 5));
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn new_ship_sits_at_bottom_center() {
    let s = make_settings();
    let ship = Ship::new(&s);
    assert_relative_eq!(ship.x, (100 - SHIP_WIDTH) as f32 / 2.0);
    assert_eq!(ship.y, 30 - SHIP_HEIGHT);
    assert!(!ship.moving_left);
    assert!(!ship.moving_right);
}

#[test]
fn center_ship_repositions_without_recreating() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 3.0;
    ship.moving_right = true;
    ship.center_ship(&s);
    assert_relative_eq!(ship.x, 48.5);
    // Intent flags are input state, not position state
    assert!(ship.moving_right);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_spawns_at_ship_top_center() {
    let s = make_settings();
    let ship = Ship::new(&s); // x = 48.5, y = 28
    let b = Bullet::new(&ship, &s);
    assert_eq!(b.x, 49); // centre column of the 3-wide sprite
    assert_relative_eq!(b.y, 27.0); // one bullet-height above the ship
}

#[test]
fn bullet_off_screen_once_bottom_clears_top() {
    let s = make_settings();
    let mut b = Bullet { x: 10, y: 0.5 };
    assert!(!b.off_screen(&s)); // bottom edge at 1.5, still visible
    b.y = -1.0;
    assert!(b.off_screen(&s)); // bottom edge at 0.0, gone
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_rect_truncates_fractional_position() {
    let a = Alien::new(10.9, 6);
    let r = a.rect();
    assert_eq!(r.x, 10);
    assert_eq!(r.y, 6);
    assert_eq!(r.width, ALIEN_WIDTH);
}

#[test]
fn alien_reports_left_edge() {
    let s = make_settings();
    assert!(Alien::new(0.0, 6).check_edges(&s));
    assert!(!Alien::new(0.5, 6).check_edges(&s));
}

#[test]
fn alien_reports_right_edge() {
    let s = make_settings();
    // Right edge of the sprite reaches column 100
    assert!(Alien::new(97.0, 6).check_edges(&s));
    assert!(!Alien::new(96.5, 6).check_edges(&s));
}

#[test]
fn alien_mid_field_is_not_at_edge() {
    let s = make_settings();
    assert!(!Alien::new(50.0, 6).check_edges(&s));
}
