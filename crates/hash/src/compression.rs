// Copyright 2025 Irreducible Inc.

use crate::{
	constants::Rotations,
	word::{Word, STATE_WORDS},
};

/// Runs the SHA-2 round function over one expanded schedule and returns the next chaining state.
///
/// The number of rounds is the number of `round_constants`; the schedule must provide at least
/// as many words. The returned state is `state + registers` word by word, modulo `2^W::BITS`.
pub fn compress<W: Word>(
	state: &[W; STATE_WORDS],
	schedule: &[W],
	round_constants: &[W],
	rotations: &Rotations,
) -> [W; STATE_WORDS] {
	assert!(schedule.len() >= round_constants.len());

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	for (&k, &w) in round_constants.iter().zip(schedule) {
		let s1 = big_sigma(e, rotations.round_sigma1);
		let ch = (e & f) ^ (!e & g);
		let t1 = h
			.wrapping_add(s1)
			.wrapping_add(ch)
			.wrapping_add(k)
			.wrapping_add(w);
		let s0 = big_sigma(a, rotations.round_sigma0);
		let maj = (a & b) ^ (a & c) ^ (b & c);
		let t2 = s0.wrapping_add(maj);

		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	let mut next = *state;
	for (word, register) in next.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(register);
	}
	next
}

#[inline(always)]
fn big_sigma<W: Word>(x: W, [r1, r2, r3]: [u32; 3]) -> W {
	x.rotate_right(r1) ^ x.rotate_right(r2) ^ x.rotate_right(r3)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		constants::{K32, K64, ROTATIONS_32, ROTATIONS_64, SHA256_IV, SHA512_IV},
		padding::PaddedMessage,
		schedule::Schedule,
	};

	#[test]
	fn test_sha256_abc_single_block() {
		let message = PaddedMessage::<u32>::new(b"abc").unwrap();
		let block = message.blocks().next().unwrap();
		let schedule = Schedule::<u32>::expand(block, &ROTATIONS_32, 64);

		let state = compress(&SHA256_IV, schedule.words(), &K32, &ROTATIONS_32);
		assert_eq!(
			state,
			[
				0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
				0xf20015ad,
			]
		);
	}

	#[test]
	fn test_sha512_abc_single_block() {
		let message = PaddedMessage::<u64>::new(b"abc").unwrap();
		let block = message.blocks().next().unwrap();
		let schedule = Schedule::<u64>::expand(block, &ROTATIONS_64, 80);

		let state = compress(&SHA512_IV, schedule.words(), &K64, &ROTATIONS_64);
		assert_eq!(state[0], 0xddaf35a193617aba);
		assert_eq!(state[7], 0x2a9ac94fa54ca49f);
	}

	#[test]
	fn test_zero_rounds_doubles_state() {
		let state = compress::<u32>(&SHA256_IV, &[], &[], &ROTATIONS_32);
		for (out, iv) in state.iter().zip(SHA256_IV) {
			assert_eq!(*out, iv.wrapping_add(iv));
		}
	}
}
