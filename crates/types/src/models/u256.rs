//! U256 model for handling large integers as strings
//!
//! Amounts travel through the aggregation API as base-unit integer strings,
//! so this type keeps the string form and adds the decimal scaling helpers
//! the orchestration flow needs.

use std::cmp::Ordering;

use serde;
use thiserror::Error;

/// 2^256 - 1 as a decimal string
const U256_MAX: &str =
	"115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Errors from converting between human-readable and base-unit amounts
#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
	#[error("amount cannot be empty")]
	Empty,

	#[error("amount contains a non-digit character: {value}")]
	NotNumeric { value: String },

	#[error("fractional part of {value} exceeds {decimals} decimals")]
	TooManyDecimals { value: String, decimals: u8 },
}

/// U256 value represented as a string to preserve precision
///
/// Used for handling large integer values that might overflow native integer
/// types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U256(pub String);

impl U256 {
	/// Create a new U256 from a string
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// The largest representable value, used for unlimited approvals
	pub fn max_value() -> Self {
		Self(U256_MAX.to_string())
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Try to parse as u128 (for smaller values)
	pub fn as_u128(&self) -> Result<u128, std::num::ParseIntError> {
		self.0.parse()
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string contains only digits
	pub fn validate(&self) -> Result<(), AmountError> {
		if self.0.is_empty() {
			return Err(AmountError::Empty);
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err(AmountError::NotNumeric {
				value: self.0.clone(),
			});
		}

		Ok(())
	}

	/// Scale a human-readable decimal amount into base units
	///
	/// `"1.5"` with 18 decimals becomes `1500000000000000000`. The fractional
	/// part must fit in `decimals` digits; scaling never rounds.
	pub fn parse_units(value: &str, decimals: u8) -> Result<Self, AmountError> {
		let value = value.trim();
		if value.is_empty() {
			return Err(AmountError::Empty);
		}

		let (integer, fraction) = match value.split_once('.') {
			Some((i, f)) => (i, f),
			None => (value, ""),
		};
		let integer = if integer.is_empty() { "0" } else { integer };

		if !integer.chars().all(|c| c.is_ascii_digit())
			|| !fraction.chars().all(|c| c.is_ascii_digit())
		{
			return Err(AmountError::NotNumeric {
				value: value.to_string(),
			});
		}
		if fraction.len() > decimals as usize {
			return Err(AmountError::TooManyDecimals {
				value: value.to_string(),
				decimals,
			});
		}

		let mut digits = String::with_capacity(integer.len() + decimals as usize);
		digits.push_str(integer);
		digits.push_str(fraction);
		for _ in 0..(decimals as usize - fraction.len()) {
			digits.push('0');
		}

		let trimmed = digits.trim_start_matches('0');
		if trimmed.is_empty() {
			Ok(Self("0".to_string()))
		} else {
			Ok(Self(trimmed.to_string()))
		}
	}

	/// Format base units back into a human-readable decimal string
	pub fn format_units(&self, decimals: u8) -> String {
		let digits = self.0.trim_start_matches('0');
		let decimals = decimals as usize;

		let (integer, fraction) = if digits.len() > decimals {
			let (i, f) = digits.split_at(digits.len() - decimals);
			(i.to_string(), f.to_string())
		} else {
			(
				"0".to_string(),
				format!("{:0>width$}", digits, width = decimals),
			)
		};

		let fraction = fraction.trim_end_matches('0');
		if fraction.is_empty() {
			integer
		} else {
			format!("{}.{}", integer, fraction)
		}
	}

	/// Compare two values numerically, ignoring leading zeros
	///
	/// Both sides must already be valid digit strings.
	pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
		let a = self.0.trim_start_matches('0');
		let b = other.0.trim_start_matches('0');
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	}

	/// Whether this value covers at least `required`
	pub fn covers(&self, required: &Self) -> bool {
		self.cmp_magnitude(required) != Ordering::Less
	}
}

impl std::fmt::Display for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for U256 {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for U256 {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for U256 {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for U256 {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

// Custom Serde implementation to serialize/deserialize as string
impl serde::Serialize for U256 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for U256 {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		let u256 = Self(value);
		u256.validate().map_err(serde::de::Error::custom)?;
		Ok(u256)
	}
}
