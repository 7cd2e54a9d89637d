//! Browser front-end glue: input dispatch, tick application, and rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::actions::{
    BUY_MULTIPLIER_BASE, BUY_UPGRADE_BASE, CLICK, PURCHASE_RANGE, TAB_MULTIPLIERS, TAB_UPGRADES,
};
use crate::economy::{MultiplierId, UpgradeId};
use crate::game::ClickerGame;
use crate::input::{ClickState, InputEvent};
use crate::render::{self, TerminalView, MULTIPLIER_KEYS, UPGRADE_KEYS};

pub struct ClickerApp {
    pub game: ClickerGame<TerminalView>,
}

impl ClickerApp {
    pub fn new() -> Self {
        Self {
            game: ClickerGame::new(TerminalView::default()),
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(c.to_ascii_lowercase()),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'c' | ' ' => {
                self.game.click();
                true
            }
            'u' => {
                self.game.view.show_multipliers = false;
                true
            }
            'm' => {
                self.game.view.show_multipliers = true;
                true
            }
            _ => {
                if let Some(i) = UPGRADE_KEYS.iter().position(|&k| k == key) {
                    self.buy_upgrade_at(i);
                    true
                } else if let Some(i) = MULTIPLIER_KEYS.iter().position(|&k| k == key) {
                    self.buy_multiplier_at(i);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        match id {
            CLICK => {
                self.game.click();
                true
            }
            TAB_UPGRADES => {
                self.game.view.show_multipliers = false;
                true
            }
            TAB_MULTIPLIERS => {
                self.game.view.show_multipliers = true;
                true
            }
            _ if (BUY_UPGRADE_BASE..BUY_UPGRADE_BASE + PURCHASE_RANGE).contains(&id) => {
                self.buy_upgrade_at((id - BUY_UPGRADE_BASE) as usize);
                true
            }
            _ if (BUY_MULTIPLIER_BASE..BUY_MULTIPLIER_BASE + PURCHASE_RANGE).contains(&id) => {
                self.buy_multiplier_at((id - BUY_MULTIPLIER_BASE) as usize);
                true
            }
            _ => false,
        }
    }

    /// Entries the player cannot see are not purchasable from the UI.
    fn buy_upgrade_at(&mut self, index: usize) -> bool {
        match UpgradeId::from_index(index) {
            Some(id) if self.game.state.is_unlocked(index) => self.game.purchase_upgrade(id),
            _ => false,
        }
    }

    fn buy_multiplier_at(&mut self, index: usize) -> bool {
        match MultiplierId::from_index(index) {
            Some(id) if self.game.state.is_multiplier_visible(id) => {
                self.game.purchase_multiplier(id)
            }
            _ => false,
        }
    }

    /// Advance the view's frame clock (click feedback timing).
    pub fn set_clock(&mut self, now_ms: f64) {
        self.game.view.now_ms = now_ms;
    }

    /// One scheduler firing covering `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f64) {
        self.game.tick(elapsed);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.game.view, f, area, click_state);
    }
}

impl Default for ClickerApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ClickerApp {
        ClickerApp::new()
    }

    #[test]
    fn key_c_clicks() {
        let mut app = app();
        assert!(app.handle_input(&InputEvent::Key('c')));
        assert!(app.handle_input(&InputEvent::Key(' ')));
        assert!((app.game.state.score - 2.0).abs() < 0.001);
        assert_eq!(app.game.view.visible_gain(), Some(1.0));
    }

    #[test]
    fn click_feedback_follows_frame_clock() {
        let mut app = app();
        app.set_clock(10_000.0);
        app.handle_input(&InputEvent::Key('c'));
        assert_eq!(app.game.view.visible_gain(), Some(1.0));
        app.set_clock(11_000.0);
        assert_eq!(app.game.view.visible_gain(), None);
    }

    #[test]
    fn click_target_clicks() {
        let mut app = app();
        app.handle_input(&InputEvent::Click(CLICK));
        assert!((app.game.state.score - 1.0).abs() < 0.001);
        assert_eq!(app.game.view.snapshot.as_ref().unwrap().score, "1");
    }

    #[test]
    fn key_buys_unlocked_upgrade() {
        let mut app = app();
        app.game.state.score = 50.0;
        app.handle_input(&InputEvent::Key('1'));
        assert_eq!(app.game.state.upgrade(UpgradeId::Powerup).count, 1);
    }

    #[test]
    fn locked_upgrade_not_bought_from_ui() {
        let mut app = app();
        app.game.state.score = 10_000.0;
        app.handle_input(&InputEvent::Key('2')); // cursor, powerup not owned
        app.handle_input(&InputEvent::Click(BUY_UPGRADE_BASE + 3));
        assert_eq!(app.game.state.upgrade(UpgradeId::Cursor).count, 0);
        assert_eq!(app.game.state.upgrade(UpgradeId::Factory).count, 0);
        assert!((app.game.state.score - 10_000.0).abs() < 0.001);
    }

    #[test]
    fn click_target_buys_upgrade() {
        let mut app = app();
        app.game.state.score = 60.0;
        app.handle_input(&InputEvent::Click(BUY_UPGRADE_BASE));
        // Powerup owned and 10 left → cursor unlocked and affordable
        app.handle_input(&InputEvent::Click(BUY_UPGRADE_BASE + 1));
        assert_eq!(app.game.state.upgrade(UpgradeId::Cursor).count, 1);
        assert!((app.game.state.score - 0.0).abs() < 0.001);
    }

    #[test]
    fn multiplier_requires_visibility() {
        let mut app = app();
        app.game.state.score = 1_000.0;
        app.handle_input(&InputEvent::Key('w'));
        assert_eq!(app.game.state.multiplier(MultiplierId::CursorBoost).count, 0);

        app.game.state.upgrade_mut(UpgradeId::Cursor).count = 1;
        app.game.state.recompute_totals();
        app.handle_input(&InputEvent::Click(BUY_MULTIPLIER_BASE + 1));
        assert_eq!(app.game.state.multiplier(MultiplierId::CursorBoost).count, 1);
        assert!((app.game.state.passive_income - 0.2).abs() < 0.001);
    }

    #[test]
    fn panel_switching() {
        let mut app = app();
        app.handle_input(&InputEvent::Key('m'));
        assert!(app.game.view.show_multipliers);
        app.handle_input(&InputEvent::Click(TAB_UPGRADES));
        assert!(!app.game.view.show_multipliers);
        app.handle_input(&InputEvent::Click(TAB_MULTIPLIERS));
        assert!(app.game.view.show_multipliers);
        app.handle_input(&InputEvent::Key('U'));
        assert!(!app.game.view.show_multipliers);
    }

    #[test]
    fn unknown_input_not_consumed() {
        let mut app = app();
        assert!(!app.handle_input(&InputEvent::Key('z')));
        assert!(!app.handle_input(&InputEvent::Click(999)));
        // Out-of-catalog purchase slots are consumed but do nothing
        assert!(app.handle_input(&InputEvent::Click(BUY_UPGRADE_BASE + 50)));
        assert!((app.game.state.score - 0.0).abs() < 0.001);
    }

    #[test]
    fn ticks_accrue_income() {
        let mut app = app();
        app.game.state.upgrade_mut(UpgradeId::Worker).count = 1;
        app.game.state.recompute_totals();
        for _ in 0..10 {
            app.tick(0.1);
        }
        assert!((app.game.state.score - 1.0).abs() < 0.001);
        assert_eq!(app.game.view.snapshot.as_ref().unwrap().per_second, "1.0");
    }
}
