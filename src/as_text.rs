//! Serde adapter that stores fixed-width integers as canonical decimal text.
//!
//! Use it on a field with `#[serde(with = "intext::as_text")]`. Values are
//! serialised as strings, and deserialised from strings through the strict
//! decoder. Native integers are also accepted when deserialising from
//! self-describing formats, subject to the same range check.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize, Serialize)]
//! struct Row {
//!     #[serde(with = "intext::as_text")]
//!     id: u64,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"id":"18446744073709551615"}"#).unwrap();
//! assert_eq!(row.id, u64::MAX);
//! assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"id":"18446744073709551615"}"#);
//! ```



//		Modules

#[cfg(test)]
#[path = "tests/as_text.rs"]
mod tests;



//		Packages

use crate::{
	decode::{decode, decode_bytes},
	encode::Buffer,
	width::FixedWidth,
};
use core::{
	fmt::{Formatter, self},
	marker::PhantomData,
};
use serde::{
	Deserializer,
	Serializer,
	de::{Error as SerdeError, Unexpected, Visitor},
};



//		Structs

//		TextVisitor
/// A visitor for decoding integers from text.
struct TextVisitor<T>(PhantomData<T>);

//󰭅		Visitor
impl<T: FixedWidth> Visitor<'_> for TextVisitor<T> {
	type Value = T;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a decimal {} integer", T::WIDTH)
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		T::from_accumulator(i128::from(v)).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		T::from_accumulator(i128::from(v)).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		decode(v).map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		decode_bytes(v).map_err(E::custom)
	}
}



//		Functions

//		serialize
/// Serialises a value as its canonical decimal text.
///
/// # Errors
///
/// Only errors raised by the serialiser itself are returned.
///
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: FixedWidth,
	S: Serializer,
{
	serializer.serialize_str(Buffer::new().format(*value))
}

//		deserialize
/// Deserialises a value from decimal text.
///
/// # Errors
///
/// If the text is rejected by the decoder, or a native integer is out of range
/// for the width, an error will be returned.
///
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
	T: FixedWidth,
	D: Deserializer<'de>,
{
	if deserializer.is_human_readable() {
		//	If the format is self-describing, accept both numbers and strings
		deserializer.deserialize_any(TextVisitor::<T>(PhantomData))
	} else {
		deserializer.deserialize_str(TextVisitor::<T>(PhantomData))
	}
}
