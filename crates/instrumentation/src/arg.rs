// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Positional log arguments and their rendering

use std::{any::Any, fmt, panic::Location};

/// A single positional argument attached to a log call.
///
/// Arguments are rendered once, when the entry is created, and rendering
/// never fails: values that cannot be represented degrade to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
	Int(i64),
	Text(String),
	/// Absent pointer-like value
	Null,
	/// Address of a pointer-like value
	Pointer(usize),
	/// Call site of the log statement
	Location {
		file: &'static str,
		line: u32,
	},
	/// Value of a type the logger does not know how to render
	Unknown,
	/// Numeric value that does not fit the integer representation
	BadCast,
}

pub const NULL: &str = "null";
pub const UNKNOWN_TYPE: &str = "[unknown type]";
pub const BAD_CAST: &str = "[bad cast]";

impl Arg {
	pub fn text(value: impl Into<String>) -> Self {
		Arg::Text(value.into())
	}

	pub fn pointer<T: ?Sized>(ptr: *const T) -> Self {
		if ptr.is_null() {
			Arg::Null
		} else {
			Arg::Pointer(ptr.cast::<()>() as usize)
		}
	}

	/// Classifies a type-erased value by its runtime type.
	pub fn from_any(value: &dyn Any) -> Self {
		macro_rules! try_as {
			($($ty:ty),+) => {
				$(
					if let Some(v) = value.downcast_ref::<$ty>() {
						return Arg::from(*v);
					}
				)+
			};
		}

		try_as!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, i128, u128);

		if let Some(v) = value.downcast_ref::<String>() {
			return Arg::Text(v.clone());
		}
		if let Some(v) = value.downcast_ref::<&'static str>() {
			return Arg::Text((*v).to_string());
		}
		if let Some(v) = value.downcast_ref::<*const ()>() {
			return Arg::pointer(*v);
		}
		if let Some(v) = value.downcast_ref::<*mut ()>() {
			return Arg::pointer(v.cast_const());
		}
		if let Some(v) = value.downcast_ref::<&'static Location<'static>>() {
			return Arg::from(*v);
		}

		Arg::Unknown
	}

	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Arg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Arg::Int(v) => write!(f, "{v}"),
			Arg::Text(v) => f.write_str(v),
			Arg::Null => f.write_str(NULL),
			Arg::Pointer(addr) => write!(f, "{addr:#x}"),
			Arg::Location {
				file,
				line,
			} => write!(f, "{file}:{line}"),
			Arg::Unknown => f.write_str(UNKNOWN_TYPE),
			Arg::BadCast => f.write_str(BAD_CAST),
		}
	}
}

/// Renders every argument in order.
pub fn render_args(args: &[Arg]) -> Vec<String> {
	args.iter().map(Arg::render).collect()
}

macro_rules! impl_from_lossless {
	($($ty:ty),+) => {
		$(
			impl From<$ty> for Arg {
				fn from(value: $ty) -> Self {
					Arg::Int(i64::from(value))
				}
			}
		)+
	};
}

macro_rules! impl_from_checked {
	($($ty:ty),+) => {
		$(
			impl From<$ty> for Arg {
				fn from(value: $ty) -> Self {
					match i64::try_from(value) {
						Ok(v) => Arg::Int(v),
						Err(_) => Arg::BadCast,
					}
				}
			}
		)+
	};
}

impl_from_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_from_checked!(isize, u64, usize, i128, u128);

impl From<&str> for Arg {
	fn from(value: &str) -> Self {
		Arg::Text(value.to_string())
	}
}

impl From<String> for Arg {
	fn from(value: String) -> Self {
		Arg::Text(value)
	}
}

impl From<&String> for Arg {
	fn from(value: &String) -> Self {
		Arg::Text(value.clone())
	}
}

impl<T: ?Sized> From<*const T> for Arg {
	fn from(ptr: *const T) -> Self {
		Arg::pointer(ptr)
	}
}

impl<T: ?Sized> From<*mut T> for Arg {
	fn from(ptr: *mut T) -> Self {
		Arg::pointer(ptr.cast_const())
	}
}

impl<T: ?Sized> From<Option<&T>> for Arg {
	fn from(value: Option<&T>) -> Self {
		match value {
			Some(r) => Arg::pointer(r as *const T),
			None => Arg::Null,
		}
	}
}

impl From<&'static Location<'static>> for Arg {
	fn from(location: &'static Location<'static>) -> Self {
		Arg::Location {
			file: location.file(),
			line: location.line(),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::ptr;

	use super::*;

	#[test]
	fn test_integers_render_as_decimal() {
		assert_eq!(Arg::from(42).render(), "42");
		assert_eq!(Arg::from(-7i8).render(), "-7");
		assert_eq!(Arg::from(u32::MAX).render(), "4294967295");
		assert_eq!(Arg::from(i64::MIN).render(), "-9223372036854775808");
	}

	#[test]
	fn test_out_of_range_integers_are_bad_cast() {
		assert_eq!(Arg::from(u64::MAX), Arg::BadCast);
		assert_eq!(Arg::from(i128::MAX).render(), BAD_CAST);
		assert_eq!(Arg::from(12u128), Arg::Int(12));
	}

	#[test]
	fn test_text_renders_verbatim() {
		assert_eq!(Arg::from("Hello").render(), "Hello");
		assert_eq!(Arg::from(String::from("a, b")).render(), "a, b");
	}

	#[test]
	fn test_pointers() {
		assert_eq!(Arg::from(ptr::null::<u8>()).render(), "null");
		assert_eq!(Arg::from(None::<&u32>).render(), "null");
		assert_eq!(Arg::pointer(0xdead_beef as *const u8).render(), "0xdeadbeef");
		assert_eq!(Arg::from(0x1A2B as *mut u16).render(), "0x1a2b");
	}

	#[test]
	fn test_location() {
		let arg = Arg::Location {
			file: "src/math.rs",
			line: 12,
		};
		assert_eq!(arg.render(), "src/math.rs:12");

		let caller = Arg::from(Location::caller());
		assert!(caller.render().contains("arg.rs:"));
	}

	#[test]
	fn test_from_any() {
		assert_eq!(Arg::from_any(&5i32), Arg::Int(5));
		assert_eq!(Arg::from_any(&u64::MAX), Arg::BadCast);
		assert_eq!(Arg::from_any(&String::from("x")), Arg::text("x"));
		assert_eq!(Arg::from_any(&"y"), Arg::text("y"));
		assert_eq!(Arg::from_any(&ptr::null::<()>()), Arg::Null);
		assert_eq!(Arg::from_any(&true), Arg::Unknown);
		assert_eq!(Arg::from_any(&1.5f64).render(), UNKNOWN_TYPE);
	}

	#[test]
	fn test_render_args_keeps_order() {
		let args = [Arg::from(42), Arg::from("Hello"), Arg::Null];
		assert_eq!(render_args(&args), vec!["42", "Hello", "null"]);
	}
}
