//! Conversion of decimal text into fixed-width integers.
//!
//! Decoding runs through a fixed sequence of stages, and the first stage that
//! fails determines the error reported:
//!
//!   1. Empty input is invalid syntax.
//!   2. For unsigned widths, a minus sign anywhere in the input is invalid
//!      syntax, which rules out forms such as `-0`.
//!   3. Leading whitespace is skipped, according to the [`LeadingWhitespace`]
//!      policy.
//!   4. The longest decimal numeral prefix is accumulated, with an optional
//!      `+` or `-` sign for the signed width only. If there are no digits, the
//!      input is invalid syntax.
//!   5. The accumulated value is checked against the range of the width.
//!   6. Trailing whitespace is skipped, stopping at the terminator if one is
//!      configured.
//!   7. Anything other than the end of input or the terminator is invalid
//!      syntax.
//!
//! Note that the range check comes before the trailing check, so `300x` is out
//! of range for `uint1` rather than invalid syntax.



//		Modules

#[cfg(test)]
#[path = "tests/decode.rs"]
mod tests;



//		Packages

use crate::{
	errors::DecodeError,
	width::{FixedInt, FixedWidth, IntegerWidth},
};
use core::ffi::CStr;
use serde::{Deserialize, Serialize};
use tracing::trace;



//		Type aliases

/// The outcome of a decode: either the value, or the single error classifying
/// why the input was rejected.
pub type ParseResult<T> = Result<T, DecodeError>;



//		Enums

//		LeadingWhitespace
/// How whitespace before the numeral is treated.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub enum LeadingWhitespace {
	/// Skip leading whitespace for the signed width, and reject it for the
	/// unsigned widths.
	///
	/// The signed and unsigned types were historically parsed by different
	/// routines, and this asymmetry is kept so that stored text continues to be
	/// accepted or rejected exactly as before.
	#[default]
	Inherited,

	/// Skip leading whitespace for every width.
	Skip,

	/// Reject leading whitespace for every width.
	Reject,
}



//		Structs

//		Decoder
/// Configuration for decoding text at a particular call site.
///
/// The default configuration is the strict one: the numeral must be followed
/// only by whitespace up to the end of the input, and leading whitespace is
/// handled per [`LeadingWhitespace::Inherited`].
///
/// A decoder holds no state between calls, so a single value can be shared
/// freely, including across threads.
///
/// # Examples
///
/// ```
/// use intext::Decoder;
///
/// let decoder = Decoder::new().terminator(b',');
/// assert_eq!(decoder.decode::<u16>("512 ,"), Ok(512));
/// assert!(decoder.decode::<u16>("512;").is_err());
/// ```
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Decoder {
	/// A byte that may end the numeral instead of the end of input.
	terminator:         Option<u8>,

	/// How to treat whitespace before the numeral.
	leading_whitespace: LeadingWhitespace,
}

//󰭅		Decoder
impl Decoder {
	//		new
	/// Creates a decoder with the default, strict configuration.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			terminator:         None,
			leading_whitespace: LeadingWhitespace::Inherited,
		}
	}

	//		terminator
	/// Permits the given byte to end the numeral, after optional whitespace.
	///
	/// Anything after the terminator is ignored, except that a minus sign still
	/// causes rejection for unsigned widths. The terminator is matched as a raw
	/// byte, and so should be ASCII when decoding text.
	///
	#[must_use]
	pub const fn terminator(mut self, terminator: u8) -> Self {
		self.terminator = Some(terminator);
		self
	}

	//		leading_whitespace
	/// Sets how whitespace before the numeral is treated.
	#[must_use]
	pub const fn leading_whitespace(mut self, policy: LeadingWhitespace) -> Self {
		self.leading_whitespace = policy;
		self
	}

	//		decode
	/// Decodes text into a fixed-width integer.
	///
	/// # Parameters
	///
	/// * `input` - The text to decode.
	///
	/// # Errors
	///
	/// [`DecodeError::InvalidSyntax`] is returned if the text is not a valid
	/// numeral for the width, and [`DecodeError::OutOfRange`] if the numeral is
	/// valid but its value does not fit.
	///
	pub fn decode<T: FixedWidth>(&self, input: &str) -> ParseResult<T> {
		self.decode_bytes(input.as_bytes())
	}

	//		decode_bytes
	/// Decodes raw bytes into a fixed-width integer.
	///
	/// Only ASCII is meaningful to the grammar, so any other bytes are simply
	/// invalid syntax.
	///
	/// # Errors
	///
	/// As for [`decode()`](Self::decode()).
	///
	pub fn decode_bytes<T: FixedWidth>(&self, input: &[u8]) -> ParseResult<T> {
		self.decode_prefix_bytes(input).map(|(value, _)| value)
	}

	//		decode_cstr
	/// Decodes a NUL-terminated buffer into a fixed-width integer.
	///
	/// # Errors
	///
	/// As for [`decode()`](Self::decode()).
	///
	pub fn decode_cstr<T: FixedWidth>(&self, input: &CStr) -> ParseResult<T> {
		self.decode_bytes(input.to_bytes())
	}

	//		decode_width
	/// Decodes text into a value of a width chosen at runtime.
	///
	/// # Errors
	///
	/// As for [`decode()`](Self::decode()).
	///
	pub fn decode_width(&self, width: IntegerWidth, input: &str) -> ParseResult<FixedInt> {
		let bytes = input.as_bytes();
		match width {
			IntegerWidth::Int1  => self.decode_bytes::<i8>(bytes).map(FixedInt::Int1),
			IntegerWidth::Uint1 => self.decode_bytes::<u8>(bytes).map(FixedInt::Uint1),
			IntegerWidth::Uint2 => self.decode_bytes::<u16>(bytes).map(FixedInt::Uint2),
			IntegerWidth::Uint4 => self.decode_bytes::<u32>(bytes).map(FixedInt::Uint4),
			IntegerWidth::Uint8 => self.decode_bytes::<u64>(bytes).map(FixedInt::Uint8),
		}
	}

	//		decode_prefix
	/// Decodes a numeral at the start of the text, returning the remainder.
	///
	/// The remainder starts at the configured terminator, and is empty if the
	/// numeral and its trailing whitespace ran to the end of the input. This
	/// allows a delimited list to be decoded one item at a time.
	///
	/// # Errors
	///
	/// As for [`decode()`](Self::decode()). Additionally, if the terminator is
	/// not ASCII and the remainder would start partway through a character,
	/// [`DecodeError::InvalidSyntax`] is returned.
	///
	pub fn decode_prefix<'a, T: FixedWidth>(&self, input: &'a str) -> ParseResult<(T, &'a str)> {
		let (value, rest) = self.decode_prefix_bytes::<T>(input.as_bytes())?;
		#[expect(clippy::arithmetic_side_effects, reason = "The remainder is a suffix of the input")]
		let offset        = input.len() - rest.len();
		input.get(offset..)
			.map(|rest| (value, rest))
			.ok_or_else(|| DecodeError::invalid_syntax(input.as_bytes(), T::WIDTH))
	}

	//		decode_prefix_bytes
	/// Decodes a numeral at the start of raw bytes, returning the remainder.
	///
	/// # Errors
	///
	/// As for [`decode()`](Self::decode()).
	///
	pub fn decode_prefix_bytes<'a, T: FixedWidth>(&self, input: &'a [u8]) -> ParseResult<(T, &'a [u8])> {
		let width = T::WIDTH;

		if input.is_empty() {
			return Err(reject_syntax(input, width, "empty"));
		}

		if !width.is_signed() && input.contains(&b'-') {
			return Err(reject_syntax(input, width, "minus sign"));
		}

		let mut rest = input;
		if self.skips_leading_whitespace(width) {
			rest = skip_whitespace(rest, None);
		}

		//	Sign
		let negative = match rest {
			[b'-', tail @ ..] if width.is_signed() => { rest = tail; true  },
			[b'+', tail @ ..] if width.is_signed() => { rest = tail; false },
			_                                      => false,
		};

		//	Digits
		let count            = rest.iter().take_while(|byte| byte.is_ascii_digit()).count();
		let (numeral, after) = rest.split_at(count);
		if numeral.is_empty() {
			return Err(reject_syntax(input, width, "no digits"));
		}

		//	Range
		let value = accumulate(numeral, negative)
			.and_then(T::from_accumulator)
			.ok_or_else(|| {
				trace!(%width, stage = "range", "rejected input");
				DecodeError::out_of_range(input, width)
			})?
		;

		//	Trailing
		let rest = skip_whitespace(after, self.terminator);
		match rest.first() {
			None                                           => Ok((value, rest)),
			Some(&byte) if Some(byte) == self.terminator => Ok((value, rest)),
			Some(_)                                        => Err(reject_syntax(input, width, "trailing")),
		}
	}

	//		skips_leading_whitespace
	/// Whether leading whitespace is skipped for the given width.
	const fn skips_leading_whitespace(&self, width: IntegerWidth) -> bool {
		match self.leading_whitespace {
			LeadingWhitespace::Inherited => width.is_signed(),
			LeadingWhitespace::Skip      => true,
			LeadingWhitespace::Reject    => false,
		}
	}
}



//		Functions

//		decode
/// Decodes text into a fixed-width integer, using the default [`Decoder`].
///
/// # Errors
///
/// As for [`Decoder::decode()`].
///
/// # Examples
///
/// ```
/// use intext::{DecodeError, IntegerWidth, decode};
///
/// assert_eq!(decode::<u8>("255"), Ok(255));
/// assert_eq!(decode::<i8>("-128"), Ok(-128));
/// assert_eq!(decode::<u8>("256"), Err(DecodeError::OutOfRange {
///     input: "256".to_owned(),
///     width: IntegerWidth::Uint1,
/// }));
/// ```
///
pub fn decode<T: FixedWidth>(input: &str) -> ParseResult<T> {
	Decoder::new().decode(input)
}

//		decode_bytes
/// Decodes raw bytes into a fixed-width integer, using the default [`Decoder`].
///
/// # Errors
///
/// As for [`Decoder::decode()`].
///
pub fn decode_bytes<T: FixedWidth>(input: &[u8]) -> ParseResult<T> {
	Decoder::new().decode_bytes(input)
}

//		decode_cstr
/// Decodes a NUL-terminated buffer into a fixed-width integer, using the
/// default [`Decoder`].
///
/// # Errors
///
/// As for [`Decoder::decode()`].
///
pub fn decode_cstr<T: FixedWidth>(input: &CStr) -> ParseResult<T> {
	Decoder::new().decode_cstr(input)
}

//		accumulate
/// Accumulates ASCII digits into a signed value.
///
/// Returns [`None`] if the value does not fit in the accumulator, which is in
/// any case far outside every supported width.
///
fn accumulate(digits: &[u8], negative: bool) -> Option<i128> {
	let magnitude = digits.iter().try_fold(0_u128, |acc, &digit| {
		acc.checked_mul(10)?.checked_add(u128::from(digit.wrapping_sub(b'0')))
	})?;
	let value     = i128::try_from(magnitude).ok()?;
	Some(if negative { value.wrapping_neg() } else { value })
}

//		is_space
/// Whether the byte is whitespace in the C locale.
///
/// This differs from [`u8::is_ascii_whitespace()`] in also including the
/// vertical tab.
///
const fn is_space(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

//		skip_whitespace
/// Skips leading whitespace, stopping early at the terminator if one is given.
fn skip_whitespace(mut bytes: &[u8], terminator: Option<u8>) -> &[u8] {
	while let [byte, tail @ ..] = bytes {
		if Some(*byte) == terminator || !is_space(*byte) {
			break;
		}
		bytes = tail;
	}
	bytes
}

//		reject_syntax
/// Builds a syntax error, recording the stage that rejected the input.
fn reject_syntax(input: &[u8], width: IntegerWidth, stage: &'static str) -> DecodeError {
	trace!(%width, stage, "rejected input");
	DecodeError::invalid_syntax(input, width)
}
