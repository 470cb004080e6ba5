// Copyright 2025 Irreducible Inc.

use std::marker::PhantomData;

use mdsha_utils::{bail, checked_arithmetics::checked_bit_length};

use crate::{word::Word, HashError};

/// The first padding byte: a single set bit right after the message.
pub const PADDING_START: u8 = 0x80;

/// Room for the two tail blocks of the widest word size.
const MAX_TAIL_BYTES: usize = 2 * 128;

/// A message padded to a whole number of blocks.
///
/// The complete blocks of the input are borrowed as they are. Only the last partial block, the
/// terminator, the zero fill and the length suffix are written into a scratch buffer, which
/// spans one block, or two when the suffix does not fit after the remainder.
#[derive(Clone)]
pub struct PaddedMessage<'a, W: Word> {
	body: &'a [u8],
	tail: [u8; MAX_TAIL_BYTES],
	tail_len: usize,
	bit_len: u128,
	_word: PhantomData<W>,
}

impl<'a, W: Word> PaddedMessage<'a, W> {
	pub fn new(data: &'a [u8]) -> Result<Self, HashError> {
		let bit_len = length_suffix::<W>(data.len())?;

		let block_len = W::BLOCK_BYTES;
		let length_field = W::LENGTH_FIELD_BYTES;

		let (body, rest) = data.split_at(data.len() - data.len() % block_len);

		let mut tail = [0u8; MAX_TAIL_BYTES];
		tail[..rest.len()].copy_from_slice(rest);
		tail[rest.len()] = PADDING_START;

		let tail_len = if rest.len() + 1 + length_field <= block_len {
			block_len
		} else {
			2 * block_len
		};
		tail[tail_len - length_field..tail_len]
			.copy_from_slice(&bit_len.to_be_bytes()[16 - length_field..]);

		Ok(Self {
			body,
			tail,
			tail_len,
			bit_len,
			_word: PhantomData,
		})
	}

	/// The blocks of the padded message, in order.
	pub fn blocks(&self) -> impl Iterator<Item = &[u8]> + '_ {
		self.body
			.chunks_exact(W::BLOCK_BYTES)
			.chain(self.tail[..self.tail_len].chunks_exact(W::BLOCK_BYTES))
	}

	pub fn block_count(&self) -> usize {
		(self.body.len() + self.tail_len) / W::BLOCK_BYTES
	}

	pub fn padded_len(&self) -> usize {
		self.body.len() + self.tail_len
	}

	/// The message length in bits, as stored in the suffix.
	pub fn bit_len(&self) -> u128 {
		self.bit_len
	}

	/// Copies the whole padded message into a contiguous buffer.
	pub fn to_vec(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(self.padded_len());
		out.extend_from_slice(self.body);
		out.extend_from_slice(&self.tail[..self.tail_len]);
		out
	}
}

/// Computes the bit length written into the suffix, refusing lengths the field cannot hold.
pub(crate) fn length_suffix<W: Word>(len: usize) -> Result<u128, HashError> {
	let Some(bits) = checked_bit_length(len, W::LENGTH_FIELD_BYTES) else {
		bail!(HashError::MessageTooLong {
			len,
			length_field_bits: 8 * W::LENGTH_FIELD_BYTES,
		});
	};
	Ok(bits)
}
