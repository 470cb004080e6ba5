// Copyright 2025 Irreducible Inc.

use proptest::prelude::*;
use sha2::Digest as _;

use crate::{hash, Variant};

fn reference(variant: Variant, data: &[u8]) -> Vec<u8> {
	match variant {
		Variant::Sha224 => sha2::Sha224::digest(data).to_vec(),
		Variant::Sha256 => sha2::Sha256::digest(data).to_vec(),
		Variant::Sha384 => sha2::Sha384::digest(data).to_vec(),
		Variant::Sha512 => sha2::Sha512::digest(data).to_vec(),
		Variant::Sha512_224 => sha2::Sha512_224::digest(data).to_vec(),
		Variant::Sha512_256 => sha2::Sha512_256::digest(data).to_vec(),
	}
}

fn any_variant() -> impl Strategy<Value = Variant> {
	prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
	#[test]
	fn test_sha2_vs_reference(
		variant in any_variant(),
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let digest = hash(variant, &input).unwrap();
		prop_assert_eq!(digest.len(), variant.output_len());
		prop_assert_eq!(digest.to_vec(), reference(variant, &input));
	}

	#[test]
	fn test_deterministic(
		variant in any_variant(),
		input in prop::collection::vec(any::<u8>(), 0..=512),
	) {
		prop_assert_eq!(hash(variant, &input).unwrap(), hash(variant, &input).unwrap());
	}

	#[test]
	fn test_single_bit_flip_changes_digest(
		variant in any_variant(),
		input in prop::collection::vec(any::<u8>(), 1..=256),
		bit in any::<prop::sample::Index>(),
	) {
		let bit = bit.index(input.len() * 8);
		let mut flipped = input.clone();
		flipped[bit / 8] ^= 1 << (bit % 8);
		prop_assert_ne!(hash(variant, &input).unwrap(), hash(variant, &flipped).unwrap());
	}
}

#[test]
fn test_block_boundaries_vs_reference() {
	for len in [0, 1, 55, 56, 57, 63, 64, 65, 111, 112, 113, 119, 120, 127, 128, 129, 239, 240, 256] {
		let data: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
		for variant in Variant::ALL {
			assert_eq!(
				hash(variant, &data).unwrap().to_vec(),
				reference(variant, &data),
				"{variant} over {len} bytes"
			);
		}
	}
}

#[test]
fn test_variant_isolation() {
	let data = b"The quick brown fox jumps over the lazy dog";
	let digests: Vec<_> = Variant::ALL
		.iter()
		.map(|&variant| hash(variant, data).unwrap())
		.collect();

	for (i, a) in digests.iter().enumerate() {
		for b in &digests[i + 1..] {
			assert_ne!(a, b);
			assert_ne!(a.as_bytes(), b.as_bytes());
		}
	}
}

#[test]
fn test_fips_variants_differ_in_length() {
	let data = b"abc";
	let fips = [Variant::Sha224, Variant::Sha256, Variant::Sha384, Variant::Sha512];
	let digests: Vec<_> = fips.iter().map(|&variant| hash(variant, data).unwrap()).collect();

	for (i, a) in digests.iter().enumerate() {
		for b in &digests[i + 1..] {
			assert_ne!(a.len(), b.len());
		}
	}
}
