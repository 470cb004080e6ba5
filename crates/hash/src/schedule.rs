// Copyright 2025 Irreducible Inc.

use crate::{
	constants::Rotations,
	word::{Word, BLOCK_WORDS, MAX_ROUNDS},
};

/// The expanded message schedule of one block, one word per compression round.
#[derive(Debug, Clone)]
pub struct Schedule<W: Word> {
	words: [W; MAX_ROUNDS],
	rounds: usize,
}

impl<W: Word> Schedule<W> {
	/// Loads the sixteen big-endian words of `block` and extends them to `rounds` words.
	///
	/// # Panics
	/// Panics if `block` is not exactly one block long or `rounds` is outside `16..=80`.
	pub fn expand(block: &[u8], rotations: &Rotations, rounds: usize) -> Self {
		assert_eq!(block.len(), W::BLOCK_BYTES);
		assert!((BLOCK_WORDS..=MAX_ROUNDS).contains(&rounds));

		let mut words = [W::ZERO; MAX_ROUNDS];
		for (word, chunk) in words.iter_mut().zip(block.chunks_exact(W::BYTES)) {
			*word = W::from_be_slice(chunk);
		}

		for i in BLOCK_WORDS..rounds {
			let s0 = small_sigma(words[i - 15], rotations.schedule_sigma0);
			let s1 = small_sigma(words[i - 2], rotations.schedule_sigma1);
			words[i] = words[i - 16]
				.wrapping_add(s0)
				.wrapping_add(words[i - 7])
				.wrapping_add(s1);
		}

		Self { words, rounds }
	}

	pub fn words(&self) -> &[W] {
		&self.words[..self.rounds]
	}
}

#[inline(always)]
fn small_sigma<W: Word>(x: W, [r1, r2, shift]: [u32; 3]) -> W {
	x.rotate_right(r1) ^ x.rotate_right(r2) ^ (x >> shift)
}
