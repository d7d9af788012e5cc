//! Conversion of fixed-width integers into canonical decimal text.

//	These lint checks are unnecessary in this module because all indexing is
//	into a fixed-size buffer that is large enough for the widest value, and the
//	digit arithmetic cannot overflow.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/encode.rs"]
mod tests;



//		Packages

use crate::width::{FixedInt, FixedWidth, IntegerWidth};
use core::str;



//		Structs

//		Buffer
/// A stack buffer that a value of any width can be formatted into.
///
/// The buffer is sized for the widest value plus a NUL terminator, and so
/// formatting never allocates.
///
/// # Examples
///
/// ```
/// use intext::Buffer;
///
/// let mut buffer = Buffer::new();
/// assert_eq!(buffer.format(-128_i8),  "-128");
/// assert_eq!(buffer.format(u64::MAX), "18446744073709551615");
/// ```
///
#[derive(Clone, Copy, Debug)]
pub struct Buffer {
	/// The formatted text, right-aligned and followed by a NUL byte.
	bytes: [u8; Self::LEN],

	/// Where the most recently formatted text starts.
	start: usize,
}

//󰭅		Buffer
impl Buffer {
	/// The size of the buffer, which is the largest [`IntegerWidth::buffer_len()`].
	pub const LEN: usize = {
		let signed   = IntegerWidth::Int1.buffer_len();
		let unsigned = IntegerWidth::Uint8.buffer_len();
		if signed > unsigned { signed } else { unsigned }
	};

	//		new
	/// Creates an empty buffer.
	#[must_use]
	pub const fn new() -> Self {
		Self { bytes: [0; Self::LEN], start: Self::LEN - 1 }
	}

	//		format
	/// Formats a value, returning its canonical text.
	///
	/// The text has no leading zeros, no `+` sign, and a single leading `-` for
	/// negative values.
	///
	pub fn format<T: FixedWidth>(&mut self, value: T) -> &str {
		self.write(value.to_accumulator());
		self.as_str()
	}

	//		format_fixed
	/// Formats a value whose width is chosen at runtime.
	pub fn format_fixed(&mut self, value: FixedInt) -> &str {
		self.write(value.as_i128());
		self.as_str()
	}

	//		as_str
	/// The most recently formatted text.
	#[must_use]
	pub fn as_str(&self) -> &str {
		//	Only ASCII digits and the minus sign are ever written
		str::from_utf8(self.as_bytes()).unwrap_or_default()
	}

	//		as_bytes
	/// The most recently formatted text, without the NUL terminator.
	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[self.start..Self::LEN - 1]
	}

	//		as_bytes_with_nul
	/// The most recently formatted text, including the NUL terminator.
	#[must_use]
	pub fn as_bytes_with_nul(&self) -> &[u8] {
		&self.bytes[self.start..]
	}

	//		write
	/// Writes the digits of a value backwards from the end of the buffer.
	fn write(&mut self, value: i128) {
		let mut magnitude = value.unsigned_abs();
		let mut pos       = Self::LEN - 1;
		self.bytes[pos]   = 0;

		loop {
			pos            -= 1;
			#[expect(clippy::cast_possible_truncation, reason = "A single digit")]
			{ self.bytes[pos] = b'0' + (magnitude % 10) as u8; }
			magnitude      /= 10;
			if magnitude == 0 {
				break;
			}
		}

		if value < 0 {
			pos            -= 1;
			self.bytes[pos] = b'-';
		}

		self.start = pos;
	}
}

//󰭅		Default
impl Default for Buffer {
	//		default
	fn default() -> Self {
		Self::new()
	}
}



//		Functions

//		encode
/// Encodes a value as canonical decimal text.
///
/// The returned string is allocated with exactly the capacity of the text.
///
/// # Examples
///
/// ```
/// use intext::encode;
///
/// assert_eq!(encode(7_u8),   "7");
/// assert_eq!(encode(-1_i8),  "-1");
/// assert_eq!(encode(0_u32),  "0");
/// ```
///
#[must_use]
pub fn encode<T: FixedWidth>(value: T) -> String {
	let mut buffer = Buffer::new();
	let text       = buffer.format(value);
	let mut output = String::with_capacity(text.len());
	output.push_str(text);
	output
}

//		encode_into
/// Encodes a value into a caller-supplied buffer, followed by a NUL byte.
///
/// A buffer of [`IntegerWidth::buffer_len()`] bytes for the value's width is
/// always large enough.
///
/// # Parameters
///
/// * `value` - The value to encode.
/// * `out`   - The buffer to write into.
///
/// # Returns
///
/// The length of the text, excluding the NUL byte, or [`None`] if the buffer
/// is too small, in which case it is left untouched.
///
pub fn encode_into<T: FixedWidth>(value: T, out: &mut [u8]) -> Option<usize> {
	let mut buffer = Buffer::new();
	_              = buffer.format(value);
	let text       = buffer.as_bytes_with_nul();
	out.get_mut(..text.len())?.copy_from_slice(text);
	Some(text.len() - 1)
}
