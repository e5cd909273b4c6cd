use bnum::cast::CastFrom;
use bnum::BInt;
use core::convert::{TryFrom, TryInto};
use core::fmt;
use core::iter;
use core::ops::*;
use core::str::FromStr;

/// Signed integer backing `Decimal`.
pub type I256 = BInt<4>;

/// Widened intermediate used by `Decimal` multiplication and division.
pub type I384 = BInt<6>;

/// `Decimal` represents a 256 bit representation of a fixed-scale decimal number.
///
/// The finite set of values are of the form `m / 10^18`, where `m` is
/// an integer such that `-2^(256 - 1) <= m < 2^(256 - 1)`.
///
/// Unless otherwise specified, all operations will panic if underflow/overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(pub I256);

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut sum = Decimal::zero();
        iter.for_each(|d| sum += d);
        sum
    }
}

macro_rules! fmt_remainder {
    () => {
        "{:018}"
    };
}

impl Decimal {
    /// The min value of `Decimal`.
    pub const MIN: Self = Self(I256::MIN);

    /// The max value of `Decimal`.
    pub const MAX: Self = Self(I256::MAX);

    /// The bit length of number storing `Decimal`.
    pub const BITS: usize = I256::BITS as usize;

    /// The fixed scale used by `Decimal`.
    pub const SCALE: u32 = 18;

    pub const ZERO: Self = Self(I256::ZERO);

    pub const ONE: Self = Self(I256::parse_str_radix("1000000000000000000", 10));

    /// Returns `Decimal` of 0.
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns `Decimal` of 1.
    pub fn one() -> Self {
        Self::ONE
    }

    /// Whether this decimal is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == I256::ZERO
    }

    /// Whether this decimal is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > I256::ZERO
    }

    /// Whether this decimal is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < I256::ZERO
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Decimal {
        Decimal(self.0.abs())
    }

    /// Returns this value with negative amounts clamped to zero.
    pub fn clamped_to_zero(self) -> Self {
        if self.is_negative() {
            Self::ZERO
        } else {
            self
        }
    }

    /// Narrows a widened intermediate back into the decimal range.
    fn try_from_widened(value: I384) -> Option<Self> {
        if value > I384::cast_from(I256::MAX) || value < I384::cast_from(I256::MIN) {
            None
        } else {
            Some(Self(I256::cast_from(value)))
        }
    }
}

macro_rules! from_int {
    ($type:ident) => {
        impl From<$type> for Decimal {
            fn from(val: $type) -> Self {
                Self(I256::from(val) * Self::ONE.0)
            }
        }
    };
}
from_int!(u8);
from_int!(u16);
from_int!(u32);
from_int!(u64);
from_int!(u128);
from_int!(i8);
from_int!(i16);
from_int!(i32);
from_int!(i64);
from_int!(i128);

// from_str() should be enough, but we want to have try_from() to simplify the dec! macro
impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        Self::from_str(val)
    }
}

impl TryFrom<String> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(val: String) -> Result<Self, Self::Error> {
        Self::from_str(&val)
    }
}

impl<T: TryInto<Decimal>> Add<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    type Output = Decimal;

    fn add(self, other: T) -> Self::Output {
        let b_dec: Decimal = other.try_into().expect("Overflow");
        Decimal(self.0.checked_add(b_dec.0).expect("Overflow"))
    }
}

impl<T: TryInto<Decimal>> Sub<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    type Output = Decimal;

    fn sub(self, other: T) -> Self::Output {
        let b_dec: Decimal = other.try_into().expect("Overflow");
        Decimal(self.0.checked_sub(b_dec.0).expect("Overflow"))
    }
}

impl<T: TryInto<Decimal>> Mul<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    type Output = Decimal;

    fn mul(self, other: T) -> Self::Output {
        // Use I384 to not overflow on the intermediate product.
        let a = I384::cast_from(self.0);
        let b_dec: Decimal = other.try_into().expect("Overflow");
        let b = I384::cast_from(b_dec.0);
        let c = a.checked_mul(b).expect("Overflow") / I384::cast_from(Self::ONE.0);
        Self::try_from_widened(c).expect("Overflow")
    }
}

impl<T: TryInto<Decimal>> Div<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    type Output = Decimal;

    fn div(self, other: T) -> Self::Output {
        // Use I384 to not overflow on the scaled dividend.
        let a = I384::cast_from(self.0);
        let b_dec: Decimal = other.try_into().expect("Overflow");
        let b = I384::cast_from(b_dec.0);
        let c = a.checked_mul(I384::cast_from(Self::ONE.0)).expect("Overflow") / b;
        Self::try_from_widened(c).expect("Overflow")
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(self.0.checked_neg().expect("Overflow"))
    }
}

impl<T: TryInto<Decimal>> AddAssign<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    fn add_assign(&mut self, other: T) {
        *self = *self + other;
    }
}

impl<T: TryInto<Decimal>> SubAssign<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    fn sub_assign(&mut self, other: T) {
        *self = *self - other;
    }
}

impl<T: TryInto<Decimal>> MulAssign<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    fn mul_assign(&mut self, other: T) {
        *self = *self * other;
    }
}

impl<T: TryInto<Decimal>> DivAssign<T> for Decimal
where
    <T as TryInto<Decimal>>::Error: fmt::Debug,
{
    fn div_assign(&mut self, other: T) {
        *self = *self / other;
    }
}

//======
// text
//======

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tens = I256::from(10u8);
        let v: Vec<&str> = s.split('.').collect();
        if v.len() > 2 {
            return Err(ParseDecimalError::MoreThanOneDecimalPoint);
        }

        let mut int = match I256::from_str(v[0]) {
            Ok(val) => val,
            Err(_) => return Err(ParseDecimalError::InvalidDigit),
        };

        int = int
            .checked_mul(tens.pow(Self::SCALE))
            .ok_or(ParseDecimalError::Overflow)?;

        if v.len() == 2 {
            let scale = Self::SCALE
                .checked_sub(v[1].len() as u32)
                .ok_or(ParseDecimalError::UnsupportedDecimalPlace)?;

            if v[1].is_empty() || v[1].chars().any(|c| !c.is_ascii_digit()) {
                return Err(ParseDecimalError::InvalidDigit);
            }
            let frac = match I256::from_str(v[1]) {
                Ok(val) => val,
                Err(_) => return Err(ParseDecimalError::InvalidDigit),
            };
            // if input is -0. then from_str returns 0 and we lose the '-' sign,
            // so check for '-' in the input directly
            if int.is_negative() || v[0].starts_with('-') {
                int = int
                    .checked_sub(frac * tens.pow(scale))
                    .ok_or(ParseDecimalError::Overflow)?;
            } else {
                int = int
                    .checked_add(frac * tens.pow(scale))
                    .ok_or(ParseDecimalError::Overflow)?;
            }
        }
        Ok(Self(int))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        const MULTIPLIER: I256 = Decimal::ONE.0;
        let quotient = self.0 / MULTIPLIER;
        let remainder = self.0 % MULTIPLIER;

        if !remainder.is_zero() {
            // print remainder with leading zeroes
            let mut sign = "".to_string();

            // a negative quotient of zero loses the sign, eg.
            //  self.0=-100000000000000000 -> -0.1
            if remainder < I256::ZERO && quotient == I256::ZERO {
                sign.push('-');
            }
            let rem_str = format!(fmt_remainder!(), remainder.abs());
            write!(f, "{}{}.{}", sign, quotient, &rem_str.trim_end_matches('0'))
        } else {
            write!(f, "{}", quotient)
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

//========
// ParseDecimalError
//========

/// Represents an error when parsing Decimal from another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    InvalidDigit,
    MoreThanOneDecimalPoint,
    UnsupportedDecimalPlace,
    Overflow,
}

impl std::error::Error for ParseDecimalError {}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_format_decimal() {
        assert_eq!(Decimal(1i128.into()).to_string(), "0.000000000000000001");
        assert_eq!(
            Decimal(123456789123456789i128.into()).to_string(),
            "0.123456789123456789"
        );
        assert_eq!(Decimal(1000000000000000000i128.into()).to_string(), "1");
        assert_eq!(Decimal(123000000000000000000i128.into()).to_string(), "123");
        assert_eq!(
            Decimal(123456789123456789000000000000000000i128.into()).to_string(),
            "123456789123456789"
        );
        assert_eq!(
            Decimal::MAX.to_string(),
            "57896044618658097711785492504343953926634992332820282019728.792003956564819967"
        );
        assert_eq!(Decimal::MIN.is_negative(), true);
        assert_eq!(
            Decimal::MIN.to_string(),
            "-57896044618658097711785492504343953926634992332820282019728.792003956564819968"
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            Decimal::from_str("0.000000000000000001").unwrap(),
            Decimal(1i128.into()),
        );
        assert_eq!(
            Decimal::from_str("0.123456789123456789").unwrap(),
            Decimal(123456789123456789i128.into()),
        );
        assert_eq!(
            Decimal::from_str("1").unwrap(),
            Decimal(1000000000000000000i128.into()),
        );
        assert_eq!(
            Decimal::from_str("123456789123456789").unwrap(),
            Decimal(123456789123456789000000000000000000i128.into()),
        );
        assert_eq!(
            Decimal::from_str(
                "57896044618658097711785492504343953926634992332820282019728.792003956564819967"
            )
            .unwrap(),
            Decimal::MAX,
        );
        assert_eq!(
            Decimal::from_str(
                "-57896044618658097711785492504343953926634992332820282019728.792003956564819968"
            )
            .unwrap(),
            Decimal::MIN,
        );
    }

    #[test]
    fn test_parse_decimal_errors() {
        assert_eq!(
            Decimal::from_str("1.2.3"),
            Err(ParseDecimalError::MoreThanOneDecimalPoint)
        );
        assert_eq!(
            Decimal::from_str("0.0000000000000000001"),
            Err(ParseDecimalError::UnsupportedDecimalPlace)
        );
        assert_eq!(Decimal::from_str("1.-2"), Err(ParseDecimalError::InvalidDigit));
        assert_eq!(Decimal::from_str("5."), Err(ParseDecimalError::InvalidDigit));
        assert_eq!(Decimal::from_str("banana"), Err(ParseDecimalError::InvalidDigit));
    }

    #[test]
    fn test_add_decimal() {
        let a = Decimal::from(5u32);
        let b = Decimal::from(7u32);
        assert_eq!((a + b).to_string(), "12");
        assert_eq!((dec!("0.1") + dec!("0.2")).to_string(), "0.3");
    }

    #[test]
    fn test_sub_decimal() {
        let a = Decimal::from(5u32);
        let b = Decimal::from(7u32);
        assert_eq!((a - b).to_string(), "-2");
        assert_eq!((b - a).to_string(), "2");
    }

    #[test]
    fn test_mul_decimal() {
        let a = Decimal::from(5u32);
        let b = Decimal::from(7u32);
        assert_eq!((a * b).to_string(), "35");
        assert_eq!((dec!("2.5") * dec!("0.2")).to_string(), "0.5");
        assert_eq!((dec!("1000000000") * dec!("1000000000")).to_string(), "1000000000000000000");
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_mul_overflow_decimal() {
        let _ = Decimal::MAX * dec!("1.000000000000000001");
    }

    #[test]
    fn test_div_decimal() {
        let a = Decimal::from(5u32);
        let b = Decimal::from(7u32);
        assert_eq!((a / b).to_string(), "0.714285714285714285");
        assert_eq!((b / a).to_string(), "1.4");
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_decimal() {
        let _ = Decimal::from(5u32) / Decimal::ZERO;
    }

    #[test]
    fn test_neg_decimal() {
        assert_eq!((-dec!("1.5")).to_string(), "-1.5");
        assert_eq!((-Decimal::ZERO).to_string(), "0");
    }

    #[test]
    fn test_sum_decimal() {
        let amounts = vec![dec!("0.1"), dec!("0.2"), dec!("0.3")];
        assert_eq!(amounts.into_iter().sum::<Decimal>().to_string(), "0.6");
    }

    #[test]
    fn test_clamped_to_zero() {
        assert_eq!(dec!("-0.5").clamped_to_zero(), Decimal::ZERO);
        assert_eq!(dec!("0.5").clamped_to_zero(), dec!("0.5"));
        assert_eq!(Decimal::ZERO.clamped_to_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_ordering_decimal() {
        assert!(dec!("1.1") > dec!("1.0"));
        assert!(dec!("-1.1") < Decimal::ZERO);
        assert_eq!(dec!("1.10"), dec!("1.1"));
    }
}
