//! Semantic action IDs for click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK: u16 = 0;

// ── Panel navigation ────────────────────────────────────────────
pub const TAB_UPGRADES: u16 = 10;
pub const TAB_MULTIPLIERS: u16 = 11;

// ── Upgrade purchase (base + catalog index) ─────────────────────
pub const BUY_UPGRADE_BASE: u16 = 100;

// ── Multiplier purchase (base + catalog index) ──────────────────
pub const BUY_MULTIPLIER_BASE: u16 = 200;

/// Upper bound (exclusive) of each purchase range.
pub const PURCHASE_RANGE: u16 = 100;
