//! Descriptions of the supported integer widths.



//		Modules

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages

use crate::{
	decode::{Decoder, ParseResult},
	encode::Buffer,
	errors::UnknownWidth,
};
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use serde::{Deserialize, Serialize};



//		Enums

//		IntegerWidth
/// One of the fixed-width integer types handled by the codec.
///
/// Each width is known by the type name under which a host registers it,
/// which is also what appears in error messages. These are `int1`, `uint1`,
/// `uint2`, `uint4`, and `uint8`, where the digit is the storage size in
/// bytes.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerWidth {
	/// Signed 8-bit integer, [`i8`].
	Int1,

	/// Unsigned 8-bit integer, [`u8`].
	Uint1,

	/// Unsigned 16-bit integer, [`u16`].
	Uint2,

	/// Unsigned 32-bit integer, [`u32`].
	Uint4,

	/// Unsigned 64-bit integer, [`u64`].
	Uint8,
}

//󰭅		IntegerWidth
impl IntegerWidth {
	/// All supported widths, narrowest first.
	pub const ALL: [Self; 5] = [Self::Int1, Self::Uint1, Self::Uint2, Self::Uint4, Self::Uint8];

	//		name
	/// The type name of the width.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Int1  => "int1",
			Self::Uint1 => "uint1",
			Self::Uint2 => "uint2",
			Self::Uint4 => "uint4",
			Self::Uint8 => "uint8",
		}
	}

	//		is_signed
	/// Whether the width can hold negative values.
	#[must_use]
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::Int1)
	}

	//		min
	/// The smallest representable value.
	#[must_use]
	pub const fn min(self) -> i128 {
		match self {
			Self::Int1                                            => i8::MIN as i128,
			Self::Uint1 | Self::Uint2 | Self::Uint4 | Self::Uint8 => 0,
		}
	}

	//		max
	/// The largest representable value.
	#[must_use]
	pub const fn max(self) -> i128 {
		match self {
			Self::Int1  => i8::MAX  as i128,
			Self::Uint1 => u8::MAX  as i128,
			Self::Uint2 => u16::MAX as i128,
			Self::Uint4 => u32::MAX as i128,
			Self::Uint8 => u64::MAX as i128,
		}
	}

	//		contains
	/// Whether the given value lies within the range of the width.
	#[must_use]
	pub const fn contains(self, value: i128) -> bool {
		value >= self.min() && value <= self.max()
	}

	//		max_digits
	/// The number of decimal digits in the longest value, excluding any sign.
	#[must_use]
	pub const fn max_digits(self) -> usize {
		match self {
			Self::Int1 | Self::Uint1 => 3,
			Self::Uint2             => 5,
			Self::Uint4             => 10,
			Self::Uint8             => 20,
		}
	}

	//		buffer_len
	/// The size of an output buffer that holds any value of the width.
	///
	/// This covers the digits, a leading minus sign for the signed width, and a
	/// trailing NUL terminator, e.g. 5 bytes for `int1` and 21 for `uint8`.
	///
	#[must_use]
	pub const fn buffer_len(self) -> usize {
		self.max_digits() + self.is_signed() as usize + 1
	}

	//		decode
	/// Decodes text into a value of this width.
	///
	/// This uses the default [`Decoder`] configuration. See
	/// [`Decoder::decode_width()`] for details.
	///
	/// # Errors
	///
	/// If the text is not a valid numeral for the width, or its value is out of
	/// range, an error will be returned.
	///
	pub fn decode(self, input: &str) -> ParseResult<FixedInt> {
		Decoder::new().decode_width(self, input)
	}
}

//󰭅		Display
impl Display for IntegerWidth {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

//󰭅		FromStr
impl FromStr for IntegerWidth {
	type Err = UnknownWidth;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|width| width.name() == s)
			.ok_or_else(|| UnknownWidth(s.to_owned()))
	}
}

//		FixedInt
/// A value tagged with the width it belongs to.
///
/// This is the result of decoding when the width is only known at runtime.
/// When it is known at compile time, the primitive types can be used directly
/// through [`FixedWidth`].
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FixedInt {
	/// A signed 8-bit value.
	Int1(i8),

	/// An unsigned 8-bit value.
	Uint1(u8),

	/// An unsigned 16-bit value.
	Uint2(u16),

	/// An unsigned 32-bit value.
	Uint4(u32),

	/// An unsigned 64-bit value.
	Uint8(u64),
}

//󰭅		FixedInt
impl FixedInt {
	//		width
	/// The width of the value.
	#[must_use]
	pub const fn width(self) -> IntegerWidth {
		match self {
			Self::Int1(_)  => IntegerWidth::Int1,
			Self::Uint1(_) => IntegerWidth::Uint1,
			Self::Uint2(_) => IntegerWidth::Uint2,
			Self::Uint4(_) => IntegerWidth::Uint4,
			Self::Uint8(_) => IntegerWidth::Uint8,
		}
	}

	//		as_i128
	/// The value widened to an [`i128`], which holds every width losslessly.
	#[must_use]
	pub fn as_i128(self) -> i128 {
		match self {
			Self::Int1(v)  => v.to_accumulator(),
			Self::Uint1(v) => v.to_accumulator(),
			Self::Uint2(v) => v.to_accumulator(),
			Self::Uint4(v) => v.to_accumulator(),
			Self::Uint8(v) => v.to_accumulator(),
		}
	}
}

//󰭅		Display
impl Display for FixedInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad(Buffer::new().format_fixed(*self))
	}
}

//󰭅		From: i8 -> FixedInt
impl From<i8> for FixedInt {
	//		from
	fn from(v: i8) -> Self {
		Self::Int1(v)
	}
}

//󰭅		From: u8 -> FixedInt
impl From<u8> for FixedInt {
	//		from
	fn from(v: u8) -> Self {
		Self::Uint1(v)
	}
}

//󰭅		From: u16 -> FixedInt
impl From<u16> for FixedInt {
	//		from
	fn from(v: u16) -> Self {
		Self::Uint2(v)
	}
}

//󰭅		From: u32 -> FixedInt
impl From<u32> for FixedInt {
	//		from
	fn from(v: u32) -> Self {
		Self::Uint4(v)
	}
}

//󰭅		From: u64 -> FixedInt
impl From<u64> for FixedInt {
	//		from
	fn from(v: u64) -> Self {
		Self::Uint8(v)
	}
}



//		Traits

//§		FixedWidth
/// A primitive integer type that the codec can decode into and encode from.
///
/// This trait is sealed, and is implemented for [`i8`], [`u8`], [`u16`],
/// [`u32`], and [`u64`]. Values pass through an [`i128`] accumulator, which is
/// wide enough to hold every one of them.
///
pub trait FixedWidth: Copy + private::Sealed {
	/// The width this type represents.
	const WIDTH: IntegerWidth;

	//		from_accumulator
	/// Narrows an accumulated value, or returns [`None`] if it is out of range.
	fn from_accumulator(value: i128) -> Option<Self>;

	//		to_accumulator
	/// Widens the value losslessly.
	fn to_accumulator(self) -> i128;
}

//󰭅		FixedWidth: i8
impl FixedWidth for i8 {
	const WIDTH: IntegerWidth = IntegerWidth::Int1;

	//		from_accumulator
	fn from_accumulator(value: i128) -> Option<Self> {
		Self::try_from(value).ok()
	}

	//		to_accumulator
	fn to_accumulator(self) -> i128 {
		i128::from(self)
	}
}

//󰭅		FixedWidth: u8
impl FixedWidth for u8 {
	const WIDTH: IntegerWidth = IntegerWidth::Uint1;

	//		from_accumulator
	fn from_accumulator(value: i128) -> Option<Self> {
		Self::try_from(value).ok()
	}

	//		to_accumulator
	fn to_accumulator(self) -> i128 {
		i128::from(self)
	}
}

//󰭅		FixedWidth: u16
impl FixedWidth for u16 {
	const WIDTH: IntegerWidth = IntegerWidth::Uint2;

	//		from_accumulator
	fn from_accumulator(value: i128) -> Option<Self> {
		Self::try_from(value).ok()
	}

	//		to_accumulator
	fn to_accumulator(self) -> i128 {
		i128::from(self)
	}
}

//󰭅		FixedWidth: u32
impl FixedWidth for u32 {
	const WIDTH: IntegerWidth = IntegerWidth::Uint4;

	//		from_accumulator
	fn from_accumulator(value: i128) -> Option<Self> {
		Self::try_from(value).ok()
	}

	//		to_accumulator
	fn to_accumulator(self) -> i128 {
		i128::from(self)
	}
}

//󰭅		FixedWidth: u64
impl FixedWidth for u64 {
	const WIDTH: IntegerWidth = IntegerWidth::Uint8;

	//		from_accumulator
	fn from_accumulator(value: i128) -> Option<Self> {
		Self::try_from(value).ok()
	}

	//		to_accumulator
	fn to_accumulator(self) -> i128 {
		i128::from(self)
	}
}



//		Modules

mod private {
	//§		Sealed
	/// Prevents [`FixedWidth`](super::FixedWidth) being implemented elsewhere.
	pub trait Sealed {}

	impl Sealed for i8  {}
	impl Sealed for u8  {}
	impl Sealed for u16 {}
	impl Sealed for u32 {}
	impl Sealed for u64 {}
}
