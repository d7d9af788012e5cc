//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;
use std::collections::HashSet;



//		Tests

mod integer_width {
	use super::*;

	//		name
	#[test]
	fn name__all() {
		let names: Vec<_> = IntegerWidth::ALL.iter().map(|width| width.name()).collect();
		assert_eq!(names, vec!["int1", "uint1", "uint2", "uint4", "uint8"]);
	}

	//		is_signed
	#[test]
	fn is_signed__only_int1() {
		assert!( IntegerWidth::Int1.is_signed());
		assert!(!IntegerWidth::Uint1.is_signed());
		assert!(!IntegerWidth::Uint8.is_signed());
	}

	//		min / max
	#[test]
	fn min_max__match_primitives() {
		assert_eq!(IntegerWidth::Int1.min(),  -128);
		assert_eq!(IntegerWidth::Int1.max(),  127);
		assert_eq!(IntegerWidth::Uint1.max(), 255);
		assert_eq!(IntegerWidth::Uint2.max(), 65_535);
		assert_eq!(IntegerWidth::Uint4.max(), 4_294_967_295);
		assert_eq!(IntegerWidth::Uint8.max(), 18_446_744_073_709_551_615);
		for width in IntegerWidth::ALL.into_iter().skip(1) {
			assert_eq!(width.min(), 0);
		}
	}

	//		contains
	#[test]
	fn contains__edges() {
		assert!( IntegerWidth::Int1.contains(-128));
		assert!(!IntegerWidth::Int1.contains(-129));
		assert!( IntegerWidth::Uint2.contains(65_535));
		assert!(!IntegerWidth::Uint2.contains(65_536));
		assert!(!IntegerWidth::Uint8.contains(-1));
	}

	//		max_digits
	#[test]
	fn max_digits__matches_longest_value() {
		for width in IntegerWidth::ALL {
			assert_eq!(width.max_digits(), width.max().to_string().len());
		}
	}

	//		buffer_len
	#[test]
	fn buffer_len__sign_and_terminator() {
		assert_eq!(IntegerWidth::Int1.buffer_len(),  5);
		assert_eq!(IntegerWidth::Uint1.buffer_len(), 4);
		assert_eq!(IntegerWidth::Uint2.buffer_len(), 6);
		assert_eq!(IntegerWidth::Uint4.buffer_len(), 11);
		assert_eq!(IntegerWidth::Uint8.buffer_len(), 21);
	}

	//		decode
	#[test]
	fn decode__tagged() {
		assert_ok_eq!(IntegerWidth::Uint4.decode("42"), FixedInt::Uint4(42));
		assert_ok_eq!(IntegerWidth::Int1.decode("-42"), FixedInt::Int1(-42));
	}

	//		Display
	#[test]
	fn display__name() {
		assert_eq!(IntegerWidth::Uint2.to_string(), "uint2");
	}

	//		FromStr
	#[test]
	fn from_str__valid() {
		for width in IntegerWidth::ALL {
			assert_ok_eq!(width.name().parse::<IntegerWidth>(), width);
		}
	}
	#[test]
	fn from_str__invalid() {
		assert_err_eq!("uint16".parse::<IntegerWidth>(), UnknownWidth(s!("uint16")));
		assert_err_eq!("UINT1".parse::<IntegerWidth>(),  UnknownWidth(s!("UINT1")));
	}

	//		Serialize / Deserialize
	#[test]
	fn serde__type_name() {
		assert_ok_eq!(serde_json::to_string(&IntegerWidth::Uint8), r#""uint8""#);
		assert_ok_eq!(serde_json::from_str::<IntegerWidth>(r#""int1""#), IntegerWidth::Int1);
		assert!(serde_json::from_str::<IntegerWidth>(r#""int2""#).is_err());
	}
}

mod fixed_int {
	use super::*;

	//		width
	#[test]
	fn width__matches_variant() {
		assert_eq!(FixedInt::Int1(0).width(),  IntegerWidth::Int1);
		assert_eq!(FixedInt::Uint1(0).width(), IntegerWidth::Uint1);
		assert_eq!(FixedInt::Uint2(0).width(), IntegerWidth::Uint2);
		assert_eq!(FixedInt::Uint4(0).width(), IntegerWidth::Uint4);
		assert_eq!(FixedInt::Uint8(0).width(), IntegerWidth::Uint8);
	}

	//		as_i128
	#[test]
	fn as_i128__lossless() {
		assert_eq!(FixedInt::Int1(i8::MIN).as_i128(),   -128);
		assert_eq!(FixedInt::Uint8(u64::MAX).as_i128(), i128::from(u64::MAX));
	}

	//		Display
	#[test]
	fn display__canonical() {
		assert_eq!(FixedInt::Int1(-7).to_string(),        "-7");
		assert_eq!(FixedInt::Uint8(u64::MAX).to_string(), "18446744073709551615");
	}
	#[test]
	fn display__padding() {
		assert_eq!(format!("{:>5}", FixedInt::Uint1(42)), "   42");
		assert_eq!(format!("{:<4}|", FixedInt::Int1(-1)), "-1  |");
	}

	//		From
	#[test]
	fn from__primitives() {
		assert_eq!(FixedInt::from(-1_i8),  FixedInt::Int1(-1));
		assert_eq!(FixedInt::from(1_u8),   FixedInt::Uint1(1));
		assert_eq!(FixedInt::from(1_u16),  FixedInt::Uint2(1));
		assert_eq!(FixedInt::from(1_u32),  FixedInt::Uint4(1));
		assert_eq!(FixedInt::from(1_u64),  FixedInt::Uint8(1));
	}

	//		Hash
	#[test]
	fn hash__width_distinguishes() {
		let mut set = HashSet::new();
		_ = set.insert(FixedInt::Uint1(1));
		assert!( set.contains(&FixedInt::Uint1(1)));
		assert!(!set.contains(&FixedInt::Uint2(1)));
	}
}

mod fixed_width {
	use super::*;

	//		WIDTH
	#[test]
	fn width__primitives() {
		assert_eq!(i8::WIDTH,  IntegerWidth::Int1);
		assert_eq!(u8::WIDTH,  IntegerWidth::Uint1);
		assert_eq!(u16::WIDTH, IntegerWidth::Uint2);
		assert_eq!(u32::WIDTH, IntegerWidth::Uint4);
		assert_eq!(u64::WIDTH, IntegerWidth::Uint8);
	}

	//		from_accumulator
	#[test]
	fn from_accumulator__range() {
		assert_eq!(i8::from_accumulator(-128),  Some(i8::MIN));
		assert_eq!(i8::from_accumulator(-129),  None);
		assert_eq!(u8::from_accumulator(-1),    None);
		assert_eq!(u16::from_accumulator(65_536), None);
		assert_eq!(u64::from_accumulator(i128::from(u64::MAX)), Some(u64::MAX));
		assert_eq!(u64::from_accumulator(i128::from(u64::MAX) + 1), None);
	}
	#[test]
	fn from_accumulator__agrees_with_width() {
		for value in [-129_i128, -128, -1, 0, 127, 128, 255, 256, 65_535, 65_536] {
			assert_eq!(i8::from_accumulator(value).is_some(),  IntegerWidth::Int1.contains(value));
			assert_eq!(u8::from_accumulator(value).is_some(),  IntegerWidth::Uint1.contains(value));
			assert_eq!(u16::from_accumulator(value).is_some(), IntegerWidth::Uint2.contains(value));
		}
	}
}
