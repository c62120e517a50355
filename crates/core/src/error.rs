use std::collections::TryReserveError;

use thiserror::Error;

/// Failures that abort a move without it being a collision.
///
/// The round cannot continue after one of these; the flow controller ends it.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("snake reached its segment capacity of {max}")]
    SegmentCapacity { max: usize },

    #[error("failed to allocate a snake segment")]
    SegmentAlloc {
        #[source]
        source: TryReserveError,
    },
}
