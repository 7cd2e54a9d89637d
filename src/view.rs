//! Outbound contract from the game to whatever displays it.

use crate::economy::Snapshot;

pub trait View {
    /// A click just added `gained` to the score (for transient "+N" feedback).
    fn score_changed(&mut self, gained: f64);

    /// Redraw from the latest model state. Called after every state change.
    fn present(&mut self, snapshot: &Snapshot);
}
