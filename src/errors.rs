//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use crate::width::IntegerWidth;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;



//		Enums

//		DecodeError
/// Represents all possible errors that can occur when decoding text.
///
/// Exactly one error is reported per decode call, chosen by the first
/// validation stage that fails. The offending text is carried verbatim (with
/// any non-UTF-8 bytes replaced) so that the caller can report it.
///
/// There is deliberately no variant for an absent input. The decoding
/// functions take a `&str`, `&[u8]`, or `&CStr`, so a missing input cannot be
/// expressed at all, and is a problem for the caller's type signatures rather
/// than something to report at runtime.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum DecodeError {
	/// The incoming text does not match the numeral grammar for the target
	/// width, e.g. it is empty, has no digits, carries a sign the width does
	/// not allow, or has trailing characters that are not whitespace.
	#[error("invalid input syntax for type {width}: \"{input}\"")]
	InvalidSyntax {
		/// The text that was rejected.
		input: String,

		/// The width that was being decoded.
		width: IntegerWidth,
	},

	/// The incoming text is a valid numeral, but its value cannot be stored in
	/// the target width.
	#[error("value \"{input}\" is out of range for type {width}")]
	OutOfRange {
		/// The text that was rejected.
		input: String,

		/// The width that was being decoded.
		width: IntegerWidth,
	},
}

//󰭅		DecodeError
impl DecodeError {
	//		invalid_syntax
	/// Builds an [`InvalidSyntax`](Self::InvalidSyntax) error for raw input.
	pub(crate) fn invalid_syntax(input: &[u8], width: IntegerWidth) -> Self {
		Self::InvalidSyntax { input: String::from_utf8_lossy(input).into_owned(), width }
	}

	//		out_of_range
	/// Builds an [`OutOfRange`](Self::OutOfRange) error for raw input.
	pub(crate) fn out_of_range(input: &[u8], width: IntegerWidth) -> Self {
		Self::OutOfRange { input: String::from_utf8_lossy(input).into_owned(), width }
	}

	//		kind
	/// The classification of the error.
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		match *self {
			Self::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
			Self::OutOfRange    { .. } => ErrorKind::OutOfRange,
		}
	}

	//		input
	/// The text that was rejected.
	#[must_use]
	pub fn input(&self) -> &str {
		match self {
			Self::InvalidSyntax { input, .. } | Self::OutOfRange { input, .. } => input,
		}
	}

	//		width
	/// The width that was being decoded.
	#[must_use]
	pub const fn width(&self) -> IntegerWidth {
		match *self {
			Self::InvalidSyntax { width, .. } | Self::OutOfRange { width, .. } => width,
		}
	}

	//		sql_state
	/// The SQLSTATE code a database host would report for this error.
	///
	/// These are `22P02` (`invalid_text_representation`) for syntax errors and
	/// `22003` (`numeric_value_out_of_range`) for range errors.
	///
	#[must_use]
	pub const fn sql_state(&self) -> &'static str {
		self.kind().sql_state()
	}
}

//		ErrorKind
/// The classification of a [`DecodeError`], without the diagnostic payload.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub enum ErrorKind {
	/// See [`DecodeError::InvalidSyntax`].
	InvalidSyntax,

	/// See [`DecodeError::OutOfRange`].
	OutOfRange,
}

//󰭅		ErrorKind
impl ErrorKind {
	//		sql_state
	/// The SQLSTATE code for this kind of error.
	#[must_use]
	pub const fn sql_state(self) -> &'static str {
		match self {
			Self::InvalidSyntax => "22P02",
			Self::OutOfRange    => "22003",
		}
	}
}

//		UnknownWidth
/// The name given does not match any supported integer width.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("Unknown integer type: {0}")]
pub struct UnknownWidth(pub String);
