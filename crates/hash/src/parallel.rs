// Copyright 2025 Irreducible Inc.

use mdsha_utils::rayon::should_parallelize;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{digest::Digest, engine::hash, variant::Variant, HashError};

/// Hashes independent buffers with one variant, returning the digests in input order.
///
/// Large enough batches are spread over the rayon global pool. Each computation owns its own
/// scratch state, so the result does not depend on how the batch was scheduled.
#[instrument(skip_all, level = "debug", fields(variant = %variant, batch = inputs.len()))]
pub fn hash_batch<D>(variant: Variant, inputs: &[D]) -> Result<Vec<Digest>, HashError>
where
	D: AsRef<[u8]> + Sync,
{
	if should_parallelize(inputs.len()) {
		debug!("hashing batch on the thread pool");
		inputs
			.par_iter()
			.map(|data| hash(variant, data.as_ref()))
			.collect()
	} else {
		inputs.iter().map(|data| hash(variant, data.as_ref())).collect()
	}
}
