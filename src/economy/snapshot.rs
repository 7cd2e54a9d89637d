//! Read-only projection of the economy pushed to the view after each change.

use serde::Serialize;

use super::logic::format_score;
use super::state::{EconomyState, MultiplierId, UpgradeId};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpgradeEntry {
    pub id: UpgradeId,
    pub name: &'static str,
    pub unlocked: bool,
    pub affordable: bool,
    pub cost: u64,
    pub count: u32,
    /// e.g. `+1 per click` or `+0.1/sec`.
    pub rate: String,
    /// Passive upgrades only.
    pub efficiency: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MultiplierEntry {
    pub id: MultiplierId,
    pub target: UpgradeId,
    pub name: &'static str,
    pub visible: bool,
    pub affordable: bool,
    pub cost: u64,
    pub count: u32,
    pub rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Floored score.
    pub score: String,
    /// Passive income with one decimal.
    pub per_second: String,
    pub click_power: f64,
    pub upgrades: Vec<UpgradeEntry>,
    pub multipliers: Vec<MultiplierEntry>,
}

impl Snapshot {
    pub fn capture(state: &EconomyState) -> Self {
        let upgrades = state
            .upgrades
            .iter()
            .enumerate()
            .map(|(i, u)| {
                let cost = u.cost();
                UpgradeEntry {
                    id: u.id,
                    name: u.name,
                    unlocked: state.is_unlocked(i),
                    affordable: state.can_afford(cost),
                    cost: cost as u64,
                    count: u.count,
                    rate: u.rate_label(),
                    efficiency: u.efficiency(),
                }
            })
            .collect();

        let multipliers = state
            .multipliers
            .iter()
            .map(|m| {
                let cost = m.cost();
                MultiplierEntry {
                    id: m.id,
                    target: m.target,
                    name: m.name,
                    visible: state.is_multiplier_visible(m.id),
                    affordable: state.can_afford(cost),
                    cost: cost as u64,
                    count: m.count,
                    rate: format!("x2 {} output", state.upgrade(m.target).name),
                }
            })
            .collect();

        Self {
            score: format_score(state.score),
            per_second: format!("{:.1}", state.passive_income),
            click_power: state.click_power,
            upgrades,
            multipliers,
        }
    }

    pub fn upgrade(&self, id: UpgradeId) -> &UpgradeEntry {
        &self.upgrades[id.index()]
    }

    pub fn multiplier(&self, id: MultiplierId) -> &MultiplierEntry {
        &self.multipliers[id.index()]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
