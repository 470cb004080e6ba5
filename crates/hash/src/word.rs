// Copyright 2025 Irreducible Inc.

use std::{
	fmt,
	ops::{BitAnd, BitXor, Not, Shr},
};

use crate::constants::{Rotations, K32, K64, ROTATIONS_32, ROTATIONS_64};

/// The number of words in one message block.
pub const BLOCK_WORDS: usize = 16;

/// The number of words in the chaining state.
pub const STATE_WORDS: usize = 8;

/// The largest round count over all word widths.
pub const MAX_ROUNDS: usize = 80;

/// Runtime tag for the two word widths of the SHA-2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
	W32,
	W64,
}

impl WordWidth {
	pub const fn bits(self) -> usize {
		match self {
			Self::W32 => 32,
			Self::W64 => 64,
		}
	}

	pub const fn bytes(self) -> usize {
		self.bits() / 8
	}
}

/// A fixed-width unsigned machine word with the arithmetic the SHA-2 skeleton needs.
///
/// Everything that differs between SHA-256 and SHA-512 apart from the initial vector and output
/// length lives here: the width itself, the round count, the round constants, the rotation
/// amounts and the size of the length suffix appended during padding. All additions wrap modulo
/// `2^BITS`.
pub trait Word:
	Copy
	+ Eq
	+ Send
	+ Sync
	+ fmt::Debug
	+ fmt::LowerHex
	+ BitAnd<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
	+ Shr<u32, Output = Self>
	+ 'static
{
	const WIDTH: WordWidth;
	const BYTES: usize;
	const ZERO: Self;

	/// Number of compression rounds, equal to the number of round constants.
	const ROUNDS: usize;

	/// Size of the big-endian bit-length suffix written by the padder.
	const LENGTH_FIELD_BYTES: usize;

	/// Size of one message block in bytes.
	const BLOCK_BYTES: usize = BLOCK_WORDS * Self::BYTES;

	const ROUND_CONSTANTS: &'static [Self];
	const ROTATIONS: &'static Rotations;

	fn wrapping_add(self, rhs: Self) -> Self;

	fn rotate_right(self, n: u32) -> Self;

	/// Reads a word from the first `Self::BYTES` bytes of `bytes`, most significant byte first.
	fn from_be_slice(bytes: &[u8]) -> Self;

	/// Writes the word into the first `Self::BYTES` bytes of `out`, most significant byte first.
	fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
	($ty:ty, $width:expr, $length_field:expr, $consts:expr, $rotations:expr) => {
		impl Word for $ty {
			const WIDTH: WordWidth = $width;
			const BYTES: usize = std::mem::size_of::<$ty>();
			const ZERO: Self = 0;
			const ROUNDS: usize = $consts.len();
			const LENGTH_FIELD_BYTES: usize = $length_field;
			const ROUND_CONSTANTS: &'static [Self] = &$consts;
			const ROTATIONS: &'static Rotations = &$rotations;

			#[inline(always)]
			fn wrapping_add(self, rhs: Self) -> Self {
				<$ty>::wrapping_add(self, rhs)
			}

			#[inline(always)]
			fn rotate_right(self, n: u32) -> Self {
				<$ty>::rotate_right(self, n)
			}

			#[inline(always)]
			fn from_be_slice(bytes: &[u8]) -> Self {
				let mut buf = [0u8; std::mem::size_of::<$ty>()];
				buf.copy_from_slice(&bytes[..std::mem::size_of::<$ty>()]);
				<$ty>::from_be_bytes(buf)
			}

			#[inline(always)]
			fn write_be(self, out: &mut [u8]) {
				out[..std::mem::size_of::<$ty>()].copy_from_slice(&self.to_be_bytes());
			}
		}
	};
}

impl_word!(u32, WordWidth::W32, 8, K32, ROTATIONS_32);
impl_word!(u64, WordWidth::W64, 16, K64, ROTATIONS_64);
