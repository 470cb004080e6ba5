// Copyright 2025 Irreducible Inc.

use std::{
	fmt,
	hash::{Hash, Hasher},
};

use crate::{
	state::HashState,
	variant::Variant,
	word::{Word, STATE_WORDS},
};

/// Largest digest produced by any variant, in bytes.
pub const MAX_OUTPUT_LEN: usize = 64;

/// The output of one SHA-2 computation: the big-endian state, truncated to the variant's length.
#[derive(Clone, Copy)]
pub struct Digest {
	variant: Variant,
	bytes: [u8; MAX_OUTPUT_LEN],
	len: usize,
}

impl Digest {
	/// Serializes every state word big-endian and keeps the first `output_len` bytes.
	///
	/// # Panics
	/// Panics if `output_len` exceeds the size of the state.
	pub fn assemble<W: Word>(variant: Variant, state: &HashState<W>, output_len: usize) -> Self {
		assert!(output_len <= STATE_WORDS * W::BYTES);

		let mut bytes = [0u8; MAX_OUTPUT_LEN];
		for (chunk, word) in bytes.chunks_exact_mut(W::BYTES).zip(state.words()) {
			word.write_be(chunk);
		}
		bytes[output_len..].fill(0);

		Self {
			variant,
			bytes,
			len: output_len,
		}
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn to_vec(&self) -> Vec<u8> {
		self.as_bytes().to_vec()
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl PartialEq for Digest {
	fn eq(&self, other: &Self) -> bool {
		self.variant == other.variant && self.as_bytes() == other.as_bytes()
	}
}

impl Eq for Digest {}

impl Hash for Digest {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&self.variant, state);
		Hash::hash(self.as_bytes(), state);
	}
}

impl PartialEq<[u8]> for Digest {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
	fn eq(&self, other: &[u8; N]) -> bool {
		self.as_bytes() == other
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Digest({}, {:x})", self.variant, self)
	}
}
