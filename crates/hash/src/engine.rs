// Copyright 2025 Irreducible Inc.

use mdsha_utils::ensure;
use tracing::{instrument, trace};

use crate::{
	constants::{SHA512_IV, SHA512_T_IV_MASK},
	digest::Digest,
	padding::PaddedMessage,
	state::HashState,
	variant::{Variant, VariantProfile, SHA224, SHA256, SHA384, SHA512, SHA512_224, SHA512_256},
	word::{Word, STATE_WORDS},
	HashError,
};

/// Computes the digest of `data` with the given SHA-2 variant.
///
/// Fails only if the bit length of `data` cannot be represented in the variant's length field.
#[instrument(skip_all, level = "debug", fields(variant = %variant, len = data.len()))]
pub fn hash(variant: Variant, data: &[u8]) -> Result<Digest, HashError> {
	match variant {
		Variant::Sha224 => hash_with(&SHA224, data),
		Variant::Sha256 => hash_with(&SHA256, data),
		Variant::Sha384 => hash_with(&SHA384, data),
		Variant::Sha512 => hash_with(&SHA512, data),
		Variant::Sha512_224 => hash_with(&SHA512_224, data),
		Variant::Sha512_256 => hash_with(&SHA512_256, data),
	}
}

/// Computes the digest of `data` for an explicit profile.
pub fn hash_with<W: Word>(profile: &VariantProfile<W>, data: &[u8]) -> Result<Digest, HashError> {
	let state = hash_state(profile, data)?;
	Ok(Digest::assemble(profile.variant(), &state, profile.output_len()))
}

/// Pads `data`, folds every block into the profile's initial vector and returns the untruncated
/// final state.
pub fn hash_state<W: Word>(
	profile: &VariantProfile<W>,
	data: &[u8],
) -> Result<HashState<W>, HashError> {
	let message = PaddedMessage::<W>::new(data)?;

	let mut state = HashState::new(profile.initial_vector());
	for block in message.blocks() {
		state.fold_block(block, profile);
	}

	trace!(blocks = message.block_count(), "message digested");
	Ok(state)
}

/// Derives the initial vector of SHA-512/t.
///
/// The SHA-512 initial vector is masked word by word with `0xa5a5…a5` and used to hash the ASCII
/// name `"SHA-512/t"`; the resulting state is the initial vector of the truncated variant.
pub fn sha512_t_initial_vector(t: usize) -> Result<[u64; STATE_WORDS], HashError> {
	ensure!(t > 0 && t < 512 && t % 8 == 0 && t != 384, HashError::InvalidTruncation { t });

	let masked = VariantProfile::<u64>::new(
		Variant::Sha512,
		SHA512_IV.map(|word| word ^ SHA512_T_IV_MASK),
		t / 8,
	)?;
	let state = hash_state(&masked, format!("SHA-512/{t}").as_bytes())?;
	Ok(*state.words())
}
