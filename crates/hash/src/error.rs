// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("message of {len} bytes has a bit length that does not fit a {length_field_bits}-bit length field")]
	MessageTooLong { len: usize, length_field_bits: usize },
	#[error("unknown SHA-2 variant {0:?}")]
	UnknownVariant(String),
	#[error("digest length of {output_len} bytes is outside 1..={max} for this word width")]
	InvalidOutputLength { output_len: usize, max: usize },
	#[error("SHA-512/{t} is not defined, t must be a multiple of 8 below 512 other than 384")]
	InvalidTruncation { t: usize },
}
