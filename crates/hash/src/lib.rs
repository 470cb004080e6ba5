// Copyright 2025 Irreducible Inc.

//! A single Merkle–Damgård engine computing the SHA-2 family.
//!
//! All variants share one padding routine, one message schedule expander and one round function,
//! monomorphized over the word type ([`u32`] for SHA-224/256, [`u64`] for the rest). A
//! [`VariantProfile`] supplies the initial vector, constants and output length of a variant.

pub mod compression;
pub mod constants;
pub mod digest;
pub mod engine;
mod error;
pub mod padding;
pub mod parallel;
pub mod schedule;
pub mod state;
pub mod variant;
pub mod word;

#[cfg(test)]
mod tests;

pub use digest::Digest;
pub use engine::*;
pub use error::HashError;
pub use parallel::hash_batch;
pub use state::HashState;
pub use variant::*;
pub use word::{Word, WordWidth};
