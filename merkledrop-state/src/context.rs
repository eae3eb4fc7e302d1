//! Execution context for distribution operations.

/// Execution context carrying block-level information.
///
/// A distribution runs outside any ledger environment, so the current block
/// height is injected here by the caller instead of being read ambiently.
/// The calling identity travels as an explicit operation parameter for the
/// same reason.
#[derive(Clone, Copy, Debug)]
pub struct ExecutionContext {
    /// Current block height.
    pub block_height: u64,
}

impl ExecutionContext {
    /// Create a context at a specific block height.
    pub fn at_height(block_height: u64) -> Self {
        Self { block_height }
    }
}
