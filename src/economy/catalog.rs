//! Static catalog of upgrades and multipliers.

use super::state::{Multiplier, MultiplierId, Production, Upgrade, UpgradeId};

struct UpgradeDef {
    id: UpgradeId,
    name: &'static str,
    base_cost: f64,
    cost_growth: f64,
    production: Production,
}

struct MultiplierDef {
    id: MultiplierId,
    name: &'static str,
    base_cost: f64,
    cost_growth: f64,
}

// ── Upgrades (display order) ────────────────────────────────────
static UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::Powerup,
        name: "Click Power",
        base_cost: 50.0,
        cost_growth: 1.2,
        production: Production::Click { bonus: 1.0 },
    },
    UpgradeDef {
        id: UpgradeId::Cursor,
        name: "Auto Clicker",
        base_cost: 10.0,
        cost_growth: 1.15,
        production: Production::Passive { rate: 0.1 },
    },
    UpgradeDef {
        id: UpgradeId::Worker,
        name: "Worker",
        base_cost: 100.0,
        cost_growth: 1.15,
        production: Production::Passive { rate: 1.0 },
    },
    UpgradeDef {
        id: UpgradeId::Factory,
        name: "Factory",
        base_cost: 1_000.0,
        cost_growth: 1.15,
        production: Production::Passive { rate: 10.0 },
    },
];

// ── Multipliers (one per upgrade, same order) ───────────────────
static MULTIPLIERS: &[MultiplierDef] = &[
    MultiplierDef {
        id: MultiplierId::PowerupBoost,
        name: "Reinforced Fingers",
        base_cost: 250.0,
        cost_growth: 3.0,
    },
    MultiplierDef {
        id: MultiplierId::CursorBoost,
        name: "Overclocked Cursors",
        base_cost: 50.0,
        cost_growth: 3.0,
    },
    MultiplierDef {
        id: MultiplierId::WorkerBoost,
        name: "Worker Training",
        base_cost: 500.0,
        cost_growth: 3.0,
    },
    MultiplierDef {
        id: MultiplierId::FactoryBoost,
        name: "Assembly Line",
        base_cost: 5_000.0,
        cost_growth: 3.0,
    },
];

/// Fresh upgrade entries with nothing owned.
pub fn upgrades() -> Vec<Upgrade> {
    UPGRADES
        .iter()
        .map(|def| Upgrade {
            id: def.id,
            name: def.name,
            base_cost: def.base_cost,
            cost_growth: def.cost_growth,
            production: def.production,
            count: 0,
            production_multiplier: 1.0,
        })
        .collect()
}

/// Fresh multiplier entries with nothing owned.
pub fn multipliers() -> Vec<Multiplier> {
    MULTIPLIERS
        .iter()
        .map(|def| Multiplier {
            id: def.id,
            name: def.name,
            target: def.id.target(),
            base_cost: def.base_cost,
            cost_growth: def.cost_growth,
            count: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrade_catalog_follows_id_order() {
        let upgrades = upgrades();
        assert_eq!(upgrades.len(), UpgradeId::all().len());
        for (i, u) in upgrades.iter().enumerate() {
            assert_eq!(u.id.index(), i, "{} out of order", u.name);
        }
    }

    #[test]
    fn multiplier_catalog_follows_id_order() {
        let multipliers = multipliers();
        assert_eq!(multipliers.len(), MultiplierId::all().len());
        for (i, m) in multipliers.iter().enumerate() {
            assert_eq!(m.id.index(), i, "{} out of order", m.name);
        }
    }

    #[test]
    fn growth_is_above_one() {
        assert!(UPGRADES.iter().all(|d| d.cost_growth > 1.0));
        assert!(MULTIPLIERS.iter().all(|d| d.cost_growth > 1.0));
    }

    #[test]
    fn exactly_one_click_upgrade() {
        let clicks = upgrades()
            .iter()
            .filter(|u| !u.production.is_passive())
            .count();
        assert_eq!(clicks, 1);
    }

    #[test]
    fn cursor_boost_costs_fifty() {
        let m = &multipliers()[MultiplierId::CursorBoost.index()];
        assert_eq!(m.target, UpgradeId::Cursor);
        assert!((m.cost() - 50.0).abs() < 0.001);
    }
}
