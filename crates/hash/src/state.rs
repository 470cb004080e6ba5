// Copyright 2025 Irreducible Inc.

use std::fmt;

use tracing::trace;

use crate::{
	compression::compress,
	schedule::Schedule,
	variant::VariantProfile,
	word::{Word, STATE_WORDS},
};

/// The eight chaining words `H0..H7` of a SHA-2 computation.
///
/// The state can only advance by folding whole blocks into it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HashState<W: Word> {
	words: [W; STATE_WORDS],
}

impl<W: Word> HashState<W> {
	pub const fn new(initial_vector: [W; STATE_WORDS]) -> Self {
		Self {
			words: initial_vector,
		}
	}

	pub fn words(&self) -> &[W; STATE_WORDS] {
		&self.words
	}

	/// Expands `block` and folds it into the state with the round function of `profile`.
	///
	/// # Panics
	/// Panics if `block` is not exactly `W::BLOCK_BYTES` long.
	pub fn fold_block(&mut self, block: &[u8], profile: &VariantProfile<W>) {
		let schedule = Schedule::<W>::expand(block, profile.rotations(), profile.rounds());
		self.words = compress(
			&self.words,
			schedule.words(),
			profile.round_constants(),
			profile.rotations(),
		);
		trace!(h0 = ?self.words[0], "folded block");
	}
}

impl<W: Word> fmt::Debug for HashState<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("HashState(")?;
		for word in &self.words {
			write!(f, "{word:0width$x}", width = 2 * W::BYTES)?;
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::variant::{SHA256, SHA384};

	#[test]
	fn test_fold_advances_state() {
		let mut state = HashState::new(SHA256.initial_vector());
		state.fold_block(&[0u8; 64], &SHA256);
		assert_ne!(state, HashState::new(SHA256.initial_vector()));
	}

	#[test]
	#[should_panic]
	fn test_fold_rejects_wrong_block_size() {
		let mut state = HashState::new(SHA384.initial_vector());
		state.fold_block(&[0u8; 64], &SHA384);
	}

	#[test]
	fn test_debug_prints_padded_hex() {
		let state = HashState::<u32>::new([1, 2, 3, 4, 5, 6, 7, 0xffffffff]);
		assert_eq!(
			format!("{state:?}"),
			"HashState(00000001000000020000000300000004000000050000000600000007ffffffff)"
		);
	}
}
