//! The Intext crate is a bounds-checked codec between decimal text and
//! fixed-width integers.
//!
//! It supports the signed 8-bit width and the unsigned 8, 16, 32, and 64-bit
//! widths. Decoding is strict: the text must be a plain decimal numeral, the
//! value must fit the width exactly, and anything after the numeral other
//! than whitespace is rejected. Encoding always produces the canonical form,
//! and every decoded value encodes back to text that decodes to the same
//! value.
//!
//! ```
//! use intext::{DecodeError, decode, encode};
//!
//! assert_eq!(decode::<u8>("007"), Ok(7));
//! assert_eq!(encode(7_u8), "7");
//! assert!(matches!(decode::<u32>("-1"), Err(DecodeError::InvalidSyntax { .. })));
//! ```
//!
//! There is no global state. Every call is independent, and all the types are
//! [`Send`] and [`Sync`].



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

pub mod as_text;
mod decode;
mod encode;
mod errors;
mod width;



//		Packages

pub use decode::{Decoder, LeadingWhitespace, ParseResult, decode, decode_bytes, decode_cstr};
pub use encode::{Buffer, encode, encode_into};
pub use errors::{DecodeError, ErrorKind, UnknownWidth};
pub use width::{FixedInt, FixedWidth, IntegerWidth};
