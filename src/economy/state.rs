//! Economy state definitions: catalog entities, ids, and the owned aggregate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClickerError;

use super::catalog;

/// Identity of an upgrade. Declaration order is catalog (display) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeId {
    Powerup,
    Cursor,
    Worker,
    Factory,
}

impl UpgradeId {
    /// All upgrade ids in catalog order.
    pub fn all() -> &'static [UpgradeId] {
        &[
            UpgradeId::Powerup,
            UpgradeId::Cursor,
            UpgradeId::Worker,
            UpgradeId::Factory,
        ]
    }

    /// Position in the catalog.
    pub fn index(self) -> usize {
        match self {
            UpgradeId::Powerup => 0,
            UpgradeId::Cursor => 1,
            UpgradeId::Worker => 2,
            UpgradeId::Factory => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<UpgradeId> {
        Self::all().get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpgradeId::Powerup => "powerup",
            UpgradeId::Cursor => "cursor",
            UpgradeId::Worker => "worker",
            UpgradeId::Factory => "factory",
        }
    }
}

impl FromStr for UpgradeId {
    type Err = ClickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ClickerError::UnknownUpgrade(s.to_string()))
    }
}

/// Identity of a multiplier. Each one boosts exactly one upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierId {
    PowerupBoost,
    CursorBoost,
    WorkerBoost,
    FactoryBoost,
}

impl MultiplierId {
    pub fn all() -> &'static [MultiplierId] {
        &[
            MultiplierId::PowerupBoost,
            MultiplierId::CursorBoost,
            MultiplierId::WorkerBoost,
            MultiplierId::FactoryBoost,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            MultiplierId::PowerupBoost => 0,
            MultiplierId::CursorBoost => 1,
            MultiplierId::WorkerBoost => 2,
            MultiplierId::FactoryBoost => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<MultiplierId> {
        Self::all().get(index).copied()
    }

    /// The upgrade whose output this multiplier doubles.
    pub fn target(self) -> UpgradeId {
        match self {
            MultiplierId::PowerupBoost => UpgradeId::Powerup,
            MultiplierId::CursorBoost => UpgradeId::Cursor,
            MultiplierId::WorkerBoost => UpgradeId::Worker,
            MultiplierId::FactoryBoost => UpgradeId::Factory,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MultiplierId::PowerupBoost => "powerup_boost",
            MultiplierId::CursorBoost => "cursor_boost",
            MultiplierId::WorkerBoost => "worker_boost",
            MultiplierId::FactoryBoost => "factory_boost",
        }
    }
}

impl FromStr for MultiplierId {
    type Err = ClickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ClickerError::UnknownMultiplier(s.to_string()))
    }
}

/// What an upgrade produces per owned unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Production {
    /// Added to click power.
    Click { bonus: f64 },
    /// Added to passive income (points per second).
    Passive { rate: f64 },
}

impl Production {
    /// Per-unit amount before multipliers.
    pub fn base_amount(&self) -> f64 {
        match *self {
            Production::Click { bonus } => bonus,
            Production::Passive { rate } => rate,
        }
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, Production::Passive { .. })
    }
}

/// `floor(base * growth^count)`: the shared exponential cost curve.
pub fn growth_cost(base_cost: f64, cost_growth: f64, count: u32) -> f64 {
    (base_cost * cost_growth.powi(count as i32)).floor()
}

/// A purchasable upgrade and how many of it are owned.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub id: UpgradeId,
    pub name: &'static str,
    pub base_cost: f64,
    /// Cost multiplier applied per owned unit (> 1).
    pub cost_growth: f64,
    pub production: Production,
    pub count: u32,
    /// Doubled by each purchase of the linked multiplier.
    pub production_multiplier: f64,
}

impl Upgrade {
    /// Current cost to buy the next one.
    pub fn cost(&self) -> f64 {
        growth_cost(self.base_cost, self.cost_growth, self.count)
    }

    /// Output of a single unit, multipliers included.
    pub fn effective_rate(&self) -> f64 {
        self.production.base_amount() * self.production_multiplier
    }

    /// Total output of all owned units.
    pub fn contribution(&self) -> f64 {
        self.effective_rate() * self.count as f64
    }

    /// Production per point of cost for the next unit. Passive upgrades only.
    pub fn efficiency(&self) -> Option<f64> {
        if !self.production.is_passive() {
            return None;
        }
        let cost = self.cost();
        if cost > 0.0 {
            Some(self.effective_rate() / cost)
        } else {
            None
        }
    }

    /// Human-readable production of one unit.
    pub fn rate_label(&self) -> String {
        match self.production {
            Production::Click { .. } => format!("+{} per click", self.effective_rate()),
            Production::Passive { .. } => format!("+{:.1}/sec", self.effective_rate()),
        }
    }
}

/// A purchasable doubling of one upgrade's output.
#[derive(Clone, Debug, PartialEq)]
pub struct Multiplier {
    pub id: MultiplierId,
    pub name: &'static str,
    pub target: UpgradeId,
    pub base_cost: f64,
    pub cost_growth: f64,
    pub count: u32,
}

impl Multiplier {
    pub fn cost(&self) -> f64 {
        growth_cost(self.base_cost, self.cost_growth, self.count)
    }
}

/// Full state of the economy. Every total here is derived from the catalogs
/// by [`EconomyState::recompute_totals`].
#[derive(Clone, Debug, PartialEq)]
pub struct EconomyState {
    /// Spendable currency.
    pub score: f64,
    /// Points per manual click (base 1.0).
    pub click_power: f64,
    /// Points per second.
    pub passive_income: f64,
    pub upgrades: Vec<Upgrade>,
    pub multipliers: Vec<Multiplier>,
}

impl EconomyState {
    pub fn new() -> Self {
        let mut state = Self {
            score: 0.0,
            click_power: 1.0,
            passive_income: 0.0,
            upgrades: catalog::upgrades(),
            multipliers: catalog::multipliers(),
        };
        state.recompute_totals();
        state
    }

    pub fn upgrade(&self, id: UpgradeId) -> &Upgrade {
        &self.upgrades[id.index()]
    }

    pub fn upgrade_mut(&mut self, id: UpgradeId) -> &mut Upgrade {
        &mut self.upgrades[id.index()]
    }

    pub fn multiplier(&self, id: MultiplierId) -> &Multiplier {
        &self.multipliers[id.index()]
    }

    pub fn multiplier_mut(&mut self, id: MultiplierId) -> &mut Multiplier {
        &mut self.multipliers[id.index()]
    }

    /// Rebuild click power and passive income from catalog state.
    pub fn recompute_totals(&mut self) {
        let mut click_power = 1.0;
        let mut passive_income = 0.0;
        for upgrade in &self.upgrades {
            match upgrade.production {
                Production::Click { .. } => click_power += upgrade.contribution(),
                Production::Passive { .. } => passive_income += upgrade.contribution(),
            }
        }
        self.click_power = click_power;
        self.passive_income = passive_income;
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.score >= cost
    }

    /// Unlock gating: the first upgrade is always shown; each later one needs
    /// its predecessor owned and either to be affordable or already owned.
    ///
    /// Panics if `index` is outside the catalog.
    pub fn is_unlocked(&self, index: usize) -> bool {
        let upgrade = &self.upgrades[index];
        if index == 0 {
            return true;
        }
        let previous_bought = self.upgrades[index - 1].count > 0;
        previous_bought && (self.can_afford(upgrade.cost()) || upgrade.count > 0)
    }

    pub fn is_multiplier_visible(&self, id: MultiplierId) -> bool {
        self.upgrade(self.multiplier(id).target).count > 0
    }
}

impl Default for EconomyState {
    fn default() -> Self {
        Self::new()
    }
}
