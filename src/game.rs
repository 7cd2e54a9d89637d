//! Game controller: routes player intents into the economy and keeps the view current.

use crate::economy::logic;
use crate::economy::{EconomyState, MultiplierId, Snapshot, UpgradeId};
use crate::view::View;

pub struct ClickerGame<V: View> {
    pub state: EconomyState,
    pub view: V,
}

impl<V: View> ClickerGame<V> {
    /// Start a fresh game and show the initial state.
    pub fn new(view: V) -> Self {
        let mut game = Self {
            state: EconomyState::new(),
            view,
        };
        game.notify();
        game
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    fn notify(&mut self) {
        let snapshot = Snapshot::capture(&self.state);
        self.view.present(&snapshot);
    }

    /// Manual click. Always succeeds; returns the amount gained.
    pub fn click(&mut self) -> f64 {
        let gained = logic::register_click(&mut self.state);
        self.view.score_changed(gained);
        self.notify();
        gained
    }

    /// Returns false (and leaves the view untouched) when unaffordable.
    pub fn purchase_upgrade(&mut self, id: UpgradeId) -> bool {
        if !logic::purchase_upgrade(&mut self.state, id) {
            return false;
        }
        self.notify();
        true
    }

    pub fn purchase_multiplier(&mut self, id: MultiplierId) -> bool {
        if !logic::purchase_multiplier(&mut self.state, id) {
            return false;
        }
        self.notify();
        true
    }

    /// Accrue `elapsed` seconds of passive income.
    pub fn tick(&mut self, elapsed: f64) -> bool {
        if !logic::tick(&mut self.state, elapsed) {
            return false;
        }
        self.notify();
        true
    }
}
