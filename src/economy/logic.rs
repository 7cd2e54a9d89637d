//! Economy operations: pure functions over [`EconomyState`].

use super::state::{EconomyState, MultiplierId, UpgradeId};

/// Manual click: add click power to the score. Returns the amount gained.
pub fn register_click(state: &mut EconomyState) -> f64 {
    let gained = state.click_power;
    state.score += gained;
    gained
}

/// Try to buy one unit of an upgrade. Returns true if successful.
pub fn purchase_upgrade(state: &mut EconomyState, id: UpgradeId) -> bool {
    let cost = state.upgrade(id).cost();
    if !state.can_afford(cost) {
        log::debug!(
            "upgrade {}: rejected, cost {} > score {:.1}",
            id.as_str(),
            cost,
            state.score
        );
        return false;
    }

    state.score -= cost;
    let upgrade = state.upgrade_mut(id);
    upgrade.count += 1;
    let count = upgrade.count;
    state.recompute_totals();

    log::info!(
        "upgrade {}: bought for {} (owned {}), click={} passive={:.1}/sec",
        id.as_str(),
        cost,
        count,
        state.click_power,
        state.passive_income
    );
    true
}

/// Try to buy a multiplier, doubling its target's output. Returns true if successful.
pub fn purchase_multiplier(state: &mut EconomyState, id: MultiplierId) -> bool {
    let cost = state.multiplier(id).cost();
    if !state.can_afford(cost) {
        log::debug!(
            "multiplier {}: rejected, cost {} > score {:.1}",
            id.as_str(),
            cost,
            state.score
        );
        return false;
    }

    state.score -= cost;
    state.multiplier_mut(id).count += 1;
    let target = state.multiplier(id).target;
    state.upgrade_mut(target).production_multiplier *= 2.0;
    state.recompute_totals();

    log::info!(
        "multiplier {}: bought for {}, {} now x{}",
        id.as_str(),
        cost,
        target.as_str(),
        state.upgrade(target).production_multiplier
    );
    true
}

/// Accrue passive income for `elapsed` seconds. Returns false (and leaves the
/// score alone) when there is no income.
pub fn tick(state: &mut EconomyState, elapsed: f64) -> bool {
    if state.passive_income <= 0.0 {
        return false;
    }
    state.score += state.passive_income * elapsed;
    true
}

/// Floor a score for display, with thousands separators.
pub fn format_score(n: f64) -> String {
    let s = (n.max(0.0).floor() as u64).to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // ── Strategy helpers ──────────────────────────────────

    fn arb_upgrade_id() -> impl Strategy<Value = UpgradeId> {
        prop_oneof![
            Just(UpgradeId::Powerup),
            Just(UpgradeId::Cursor),
            Just(UpgradeId::Worker),
            Just(UpgradeId::Factory),
        ]
    }

    fn arb_multiplier_id() -> impl Strategy<Value = MultiplierId> {
        prop_oneof![
            Just(MultiplierId::PowerupBoost),
            Just(MultiplierId::CursorBoost),
            Just(MultiplierId::WorkerBoost),
            Just(MultiplierId::FactoryBoost),
        ]
    }

    // ── cost curve ────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_upgrade_cost_strictly_increases(
            id in arb_upgrade_id(),
            count in 0u32..150,
        ) {
            let mut state = EconomyState::new();
            state.upgrade_mut(id).count = count;
            let before = state.upgrade(id).cost();
            state.upgrade_mut(id).count = count + 1;
            let after = state.upgrade(id).cost();
            prop_assert!(after > before, "cost did not increase: {} -> {}", before, after);
        }

        #[test]
        fn prop_cost_is_whole_number(id in arb_upgrade_id(), count in 0u32..150) {
            let mut state = EconomyState::new();
            state.upgrade_mut(id).count = count;
            let cost = state.upgrade(id).cost();
            prop_assert_eq!(cost, cost.floor());
        }
    }

    // ── recompute ─────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_recompute_idempotent(
            counts in proptest::collection::vec(0u32..500, 4),
            doublings in proptest::collection::vec(0u32..6, 4),
        ) {
            let mut state = EconomyState::new();
            for (i, u) in state.upgrades.iter_mut().enumerate() {
                u.count = counts[i];
                u.production_multiplier = 2f64.powi(doublings[i] as i32);
            }
            state.recompute_totals();
            let first = (state.click_power, state.passive_income);
            state.recompute_totals();
            prop_assert_eq!(first, (state.click_power, state.passive_income));
            prop_assert!(state.click_power >= 1.0);
            prop_assert!(state.passive_income >= 0.0);
        }
    }

    // ── purchases ─────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_purchase_deducts_exact_cost(
            id in arb_upgrade_id(),
            extra in 0.0f64..1000.0,
        ) {
            let mut state = EconomyState::new();
            let cost = state.upgrade(id).cost();
            state.score = cost + extra;
            prop_assert!(purchase_upgrade(&mut state, id));
            prop_assert!((state.score - extra).abs() < 0.001);
            prop_assert_eq!(state.upgrade(id).count, 1);
        }

        #[test]
        fn prop_multiplier_doubles_effective_rate(
            id in arb_multiplier_id(),
            owned in 1u32..50,
        ) {
            let mut state = EconomyState::new();
            let target = id.target();
            state.upgrade_mut(target).count = owned;
            state.recompute_totals();
            let before = state.upgrade(target).contribution();
            state.score = 1e12;
            prop_assert!(purchase_multiplier(&mut state, id));
            let after = state.upgrade(target).contribution();
            prop_assert!((after - 2.0 * before).abs() < 1e-6);
        }

        #[test]
        fn prop_tick_never_reduces_score(elapsed in 0.0f64..10.0, cursors in 0u32..100) {
            let mut state = EconomyState::new();
            state.upgrade_mut(UpgradeId::Cursor).count = cursors;
            state.recompute_totals();
            state.score = 3.0;
            tick(&mut state, elapsed);
            prop_assert!(state.score >= 3.0);
        }
    }
}
