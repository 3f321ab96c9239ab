//! Runtime engine settings.

use crate::constants::{DEFAULT_DEPTH, LADDER_MAX_DEPTH};

/// How the ranked candidate list is cut before it becomes the search's
/// branching set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrunePolicy {
    /// Drop the single least urgent candidate when more than one remains.
    DropLowest,
    /// Keep the `k` most urgent candidates.
    TopK(usize),
    /// Keep every candidate.
    Keep,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth used by `genmove`
    pub depth: usize,
    /// Candidate-list cut
    pub prune: PrunePolicy,
    /// Recursion cap of the ladder reader
    pub ladder_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            prune: PrunePolicy::DropLowest,
            ladder_depth: LADDER_MAX_DEPTH,
        }
    }
}
