//! Incremental economy: catalog, cost curve, unlock gating, and production totals.

pub mod catalog;
pub mod logic;
pub mod snapshot;
pub mod state;

pub use snapshot::{MultiplierEntry, Snapshot, UpgradeEntry};
pub use state::{EconomyState, Multiplier, MultiplierId, Production, Upgrade, UpgradeId};
