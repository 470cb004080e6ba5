// Copyright 2024 Irreducible Inc.

/// Converts a byte count into a bit count, failing when the result does not fit into a
/// big-endian field of `field_bytes` bytes.
pub const fn checked_bit_length(byte_len: usize, field_bytes: usize) -> Option<u128> {
	let bits = (byte_len as u128) * 8;
	if field_bytes >= 16 || bits >> (8 * field_bytes) == 0 {
		Some(bits)
	} else {
		None
	}
}

/// Ceiling division that fails when `b` is zero or `a + b - 1` overflows.
pub const fn checked_div_ceil(a: usize, b: usize) -> Option<usize> {
	if b == 0 {
		return None;
	}
	match a.checked_add(b - 1) {
		Some(sum) => Some(sum / b),
		None => None,
	}
}
