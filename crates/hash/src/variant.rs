// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use mdsha_utils::ensure;

use crate::{
	constants::{
		Rotations, SHA224_IV, SHA256_IV, SHA384_IV, SHA512_224_IV, SHA512_256_IV, SHA512_IV,
	},
	digest::Digest,
	engine,
	word::{Word, WordWidth, STATE_WORDS},
	HashError,
};

/// The standardized members of the SHA-2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha512_224,
	Sha512_256,
}

impl Variant {
	pub const ALL: [Variant; 6] = [
		Self::Sha224,
		Self::Sha256,
		Self::Sha384,
		Self::Sha512,
		Self::Sha512_224,
		Self::Sha512_256,
	];

	pub const fn name(self) -> &'static str {
		match self {
			Self::Sha224 => "SHA-224",
			Self::Sha256 => "SHA-256",
			Self::Sha384 => "SHA-384",
			Self::Sha512 => "SHA-512",
			Self::Sha512_224 => "SHA-512/224",
			Self::Sha512_256 => "SHA-512/256",
		}
	}

	/// Digest length in bytes.
	pub const fn output_len(self) -> usize {
		match self {
			Self::Sha224 | Self::Sha512_224 => 28,
			Self::Sha256 | Self::Sha512_256 => 32,
			Self::Sha384 => 48,
			Self::Sha512 => 64,
		}
	}

	pub const fn word_width(self) -> WordWidth {
		match self {
			Self::Sha224 | Self::Sha256 => WordWidth::W32,
			_ => WordWidth::W64,
		}
	}

	pub const fn block_len(self) -> usize {
		match self.word_width() {
			WordWidth::W32 => <u32 as Word>::BLOCK_BYTES,
			WordWidth::W64 => <u64 as Word>::BLOCK_BYTES,
		}
	}

	pub const fn length_field_len(self) -> usize {
		match self.word_width() {
			WordWidth::W32 => <u32 as Word>::LENGTH_FIELD_BYTES,
			WordWidth::W64 => <u64 as Word>::LENGTH_FIELD_BYTES,
		}
	}

	pub const fn rounds(self) -> usize {
		match self.word_width() {
			WordWidth::W32 => <u32 as Word>::ROUNDS,
			WordWidth::W64 => <u64 as Word>::ROUNDS,
		}
	}

	/// Number of state words that contribute to the digest, counting a partially used word.
	pub const fn retained_words(self) -> usize {
		self.output_len().div_ceil(self.word_width().bytes())
	}

	pub fn hash(self, data: &[u8]) -> Result<Digest, HashError> {
		engine::hash(self, data)
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Variant {
	type Err = HashError;

	/// Parses names such as `SHA-256`, `sha256`, `sha512_256` or `SHA-512/224`, ignoring case and
	/// separators.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized: String = s
			.chars()
			.filter(char::is_ascii_alphanumeric)
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match normalized.as_str() {
			"sha224" => Ok(Self::Sha224),
			"sha256" => Ok(Self::Sha256),
			"sha384" => Ok(Self::Sha384),
			"sha512" => Ok(Self::Sha512),
			"sha512224" => Ok(Self::Sha512_224),
			"sha512256" => Ok(Self::Sha512_256),
			_ => Err(HashError::UnknownVariant(s.to_string())),
		}
	}
}

/// Everything the generic engine needs to compute one variant over words of type `W`.
///
/// The round constants and rotation amounts always come from the word type, so a profile can
/// only vary the initial vector and the digest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile<W: Word> {
	variant: Variant,
	initial_vector: [W; STATE_WORDS],
	round_constants: &'static [W],
	rotations: &'static Rotations,
	output_len: usize,
}

impl<W: Word> VariantProfile<W> {
	/// Builds a profile with the round constants and rotation amounts of the word width.
	///
	/// `output_len` is the digest length in bytes and must be non-zero and at most the size of
	/// the state.
	pub fn new(
		variant: Variant,
		initial_vector: [W; STATE_WORDS],
		output_len: usize,
	) -> Result<Self, HashError> {
		let max = STATE_WORDS * W::BYTES;
		ensure!(
			output_len > 0 && output_len <= max,
			HashError::InvalidOutputLength { output_len, max }
		);
		Ok(Self::builtin(variant, initial_vector, output_len))
	}

	const fn builtin(variant: Variant, initial_vector: [W; STATE_WORDS], output_len: usize) -> Self {
		Self {
			variant,
			initial_vector,
			round_constants: W::ROUND_CONSTANTS,
			rotations: W::ROTATIONS,
			output_len,
		}
	}

	pub const fn variant(&self) -> Variant {
		self.variant
	}

	pub const fn initial_vector(&self) -> [W; STATE_WORDS] {
		self.initial_vector
	}

	pub const fn round_constants(&self) -> &'static [W] {
		self.round_constants
	}

	pub const fn rotations(&self) -> &'static Rotations {
		self.rotations
	}

	/// Digest length in bytes; the big-endian state is truncated to this many bytes.
	pub const fn output_len(&self) -> usize {
		self.output_len
	}

	pub const fn rounds(&self) -> usize {
		self.round_constants.len()
	}

	pub const fn word_width(&self) -> WordWidth {
		W::WIDTH
	}

	pub const fn retained_words(&self) -> usize {
		self.output_len.div_ceil(W::BYTES)
	}
}

pub const SHA224: VariantProfile<u32> = VariantProfile::builtin(Variant::Sha224, SHA224_IV, 28);
pub const SHA256: VariantProfile<u32> = VariantProfile::builtin(Variant::Sha256, SHA256_IV, 32);
pub const SHA384: VariantProfile<u64> = VariantProfile::builtin(Variant::Sha384, SHA384_IV, 48);
pub const SHA512: VariantProfile<u64> = VariantProfile::builtin(Variant::Sha512, SHA512_IV, 64);
pub const SHA512_224: VariantProfile<u64> =
	VariantProfile::builtin(Variant::Sha512_224, SHA512_224_IV, 28);
pub const SHA512_256: VariantProfile<u64> =
	VariantProfile::builtin(Variant::Sha512_256, SHA512_256_IV, 32);

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_variant_table() {
		let table: Vec<_> = Variant::ALL
			.iter()
			.map(|v| (v.word_width().bits(), v.rounds(), v.output_len(), v.retained_words()))
			.collect();
		assert_eq!(
			table,
			[
				(32, 64, 28, 7),
				(32, 64, 32, 8),
				(64, 80, 48, 6),
				(64, 80, 64, 8),
				(64, 80, 28, 4),
				(64, 80, 32, 4),
			]
		);
	}

	#[test]
	fn test_profiles_agree_with_variants() {
		fn check<W: Word>(profile: &VariantProfile<W>) {
			let variant = profile.variant();
			assert_eq!(profile.output_len(), variant.output_len());
			assert_eq!(profile.rounds(), variant.rounds());
			assert_eq!(profile.word_width(), variant.word_width());
			assert_eq!(profile.retained_words(), variant.retained_words());
		}
		check(&SHA224);
		check(&SHA256);
		check(&SHA384);
		check(&SHA512);
		check(&SHA512_224);
		check(&SHA512_256);
	}

	#[cfg(not(feature = "bail_panic"))]
	#[test]
	fn test_profile_rejects_output_len_outside_state() {
		assert_matches!(
			VariantProfile::<u32>::new(Variant::Sha256, SHA256_IV, 40),
			Err(HashError::InvalidOutputLength { output_len: 40, max: 32 })
		);
		assert_matches!(
			VariantProfile::<u64>::new(Variant::Sha512, SHA512_IV, 0),
			Err(HashError::InvalidOutputLength { output_len: 0, max: 64 })
		);
		let profile = VariantProfile::<u64>::new(Variant::Sha512, SHA512_IV, 64).unwrap();
		assert_eq!(profile, SHA512);
	}

	#[cfg(feature = "bail_panic")]
	#[test]
	#[should_panic]
	fn test_profile_panics_on_output_len_outside_state() {
		let _ = VariantProfile::<u32>::new(Variant::Sha256, SHA256_IV, 40);
	}

	#[test]
	fn test_block_geometry() {
		assert_eq!(Variant::Sha256.block_len(), 64);
		assert_eq!(Variant::Sha256.length_field_len(), 8);
		assert_eq!(Variant::Sha384.block_len(), 128);
		assert_eq!(Variant::Sha384.length_field_len(), 16);
	}

	#[test]
	fn test_parse_names() {
		for variant in Variant::ALL {
			assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
			assert_eq!(variant.to_string().to_lowercase().parse::<Variant>().unwrap(), variant);
		}
		assert_eq!("sha512_256".parse::<Variant>().unwrap(), Variant::Sha512_256);
		assert_eq!("Sha-224".parse::<Variant>().unwrap(), Variant::Sha224);
		assert_matches!("sha1".parse::<Variant>(), Err(HashError::UnknownVariant(name)) if name == "sha1");
	}
}
