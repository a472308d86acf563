//! Which sizing intent a container asks its advisor for.

use chunkwise_core::{ChunkLayout, ChunkSizing};

/// Sizing intent for a container's chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChunkPolicy {
    /// Small, page-sized chunks for workloads that churn.
    #[default]
    Fast,
    /// Larger chunks for workloads that grow steadily.
    Bulk {
        /// Expected elements per chunk; 0 means no particular expectation.
        overcommit_hint: usize,
    },
}

impl ChunkPolicy {
    /// Ask `sizing` for a power-of-two chunk of `T` under this policy.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn resolve<T, S: ChunkSizing>(&self, sizing: &S) -> (ChunkLayout, u32) {
        match *self {
            Self::Fast => sizing.fast_array_layout_pow2::<T>(),
            Self::Bulk { overcommit_hint } => sizing.bulk_array_layout_pow2::<T>(overcommit_hint),
        }
    }
}
