//! # BigInt
//! Signed arbitrary-precision integers over a base-10 magnitude: a sign flag
//! plus a sequence of decimal digits, most significant first. Arithmetic is
//! schoolbook digit-by-digit with carry/borrow propagation.
//! # Example
//! ```
//! use dec_int::BigInt;
//!
//! let a: BigInt = "12345670".into();
//! let b: BigInt = "9876576210".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! assert_eq!((&a + &b).to_string(), "9888921880");
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

use crate::digit_cache::*;

/// Removes leading zero digits, always keeping at least one digit.
macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            let mut v = $vec;
            let zeros = v.iter().take_while(|&&d| d == 0).count();
            let keep = zeros.min(v.len() - 1);
            v.drain(..keep);
            v
        }
    };
}

/// A signed arbitrary-precision integer.
///
/// The magnitude is a non-empty vector of decimal digit values (`0..=9`),
/// most significant digit first, with no leading zero unless the value is
/// exactly zero. Zero is never negative.
#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u8>,
}

/// Error produced when parsing a decimal string that contains a non-digit
/// character after sign extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("invalid digit {ch:?} at byte {pos}")]
    InvalidDigit { ch: char, pos: usize },
}

// construction
impl BigInt {
    /// The value zero.
    pub fn zero() -> BigInt {
        BigInt { negative: false, mag: vec![0] }
    }

    /// Builds a value from an already canonical magnitude. The caller is
    /// responsible for the no-leading-zero invariant.
    pub(crate) fn from_raw(mag: Vec<u8>, negative: bool) -> BigInt {
        BigInt { negative, mag }
    }

    /// Canonicalizing constructor: a zero magnitude is never signed.
    fn new(mag: Vec<u8>, negative: bool) -> BigInt {
        let negative = negative && mag != [0];
        BigInt { negative, mag }
    }

    fn value_of(val: u128, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::with_capacity(39); // u128::MAX has 39 decimal digits
        let mut val = val;
        while val != 0 {
            mag.push((val % 10) as u8);
            val /= 10;
        }
        mag.reverse();
        BigInt { negative, mag }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// conversion from machine integers
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// parsing
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (negative, cursor) = match val.as_bytes().first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        let rest = &val[cursor..];
        if rest.is_empty() {
            // "", "+" and "-" all denote zero
            return Ok(BigInt::zero());
        }
        let mut mag = Vec::with_capacity(rest.len());
        for (pos, ch) in rest.char_indices() {
            match ch.to_digit(10) {
                Some(d) => mag.push(d as u8),
                None => return Err(ParseBigIntError::InvalidDigit { ch, pos: cursor + pos }),
            }
        }
        let mag = trim_leading_zero!(mag);
        Ok(BigInt::new(mag, negative))
    }
}

impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(num) => num,
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<String> for BigInt {
    fn from(val: String) -> Self {
        BigInt::from(val.as_str())
    }
}

// rendering
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::with_capacity(self.mag.len() + 1);
        if self.negative {
            s.push('-');
        }
        s.extend(self.mag.iter().map(|&d| char::from(b'0' + d)));
        f.write_str(&s)
    }
}

// comparison
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        match self.mag.len().cmp(&other.mag.len()) {
            // equal length and no leading zeros, so lexicographic order
            // is numeric order
            Ordering::Equal => self.mag.cmp(&other.mag),
            ord => ord,
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.mag == other.mag
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_mag(other),
            (true, true) => self.compare_mag(other).reverse(),
        }
    }
}

// sign inspection and absolute value
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.mag == [0]
    }

    /// -1, 0 or 1 as the value is negative, zero or positive.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            // zero is never signed
            return self;
        }
        let BigInt { negative, mag } = self;
        BigInt { negative: !negative, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// addition
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if self.negative == val.negative {
            let negative = self.negative;
            let mag = BigInt::add(&self.mag, &val.mag);
            return BigInt::new(mag, negative);
        }

        // opposite signs reduce to subtraction
        if self.negative {
            val - (-self)
        } else {
            self - (-val)
        }
    }
}

impl BigInt {
    fn add(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

        let mut result = Vec::with_capacity(x.len() + 1);
        let mut x_index = x.len();
        let mut y_index = y.len();
        let mut carry = 0;
        while x_index > 0 {
            x_index -= 1;
            let mut sum = x[x_index] + carry;
            if y_index > 0 {
                y_index -= 1;
                sum += y[y_index];
            }
            result.push(sum % 10);
            carry = sum / 10;
        }
        if carry != 0 {
            result.push(carry);
        }
        result.reverse();
        result
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// subtraction
impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, val: Self) -> Self::Output {
        if self.negative != val.negative {
            // opposite signs reduce to addition
            return if self.negative {
                -((-self) + val)
            } else {
                self + (-val)
            };
        }

        match self.compare_mag(&val) {
            Ordering::Less => -(val - self),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let negative = self.negative;
                let mag = BigInt::sub(&self.mag, &val.mag);
                let mag = trim_leading_zero!(mag);
                BigInt::new(mag, negative)
            }
        }
    }
}

impl BigInt {
    /// Schoolbook magnitude subtraction. The first operand must be the
    /// larger magnitude.
    fn sub(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut big_index = big.len();
        let mut little_index = little.len();
        let mut borrow = 0;
        while big_index > 0 {
            big_index -= 1;
            let mut diff = big[big_index] as i8 - borrow;
            if little_index > 0 {
                little_index -= 1;
                diff -= little[little_index] as i8;
            }
            borrow = 0;
            if diff < 0 {
                borrow = 1;
                diff += 10;
            }
            result.push(diff as u8);
        }
        result.reverse();
        result
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInt::zero();
        }
        let negative = self.negative != val.negative;
        let mag = BigInt::mul(&self.mag, &val.mag);
        let mag = trim_leading_zero!(mag);
        BigInt::new(mag, negative)
    }
}

impl BigInt {
    fn mul(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];
        for i in (0..x.len()).rev() {
            let mut carry = 0;
            for j in (0..y.len()).rev() {
                let product = x[i] * y[j] + carry + result[i + j + 1];
                result[i + j + 1] = product % 10;
                carry = product / 10;
            }
            // the row's most significant slot is untouched until now,
            // so a plain add cannot overflow the digit
            result[i] += carry;
        }
        result
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone();
    }
}

#[cfg(test)]
fn assert_canonical(num: &BigInt) {
    assert!(!num.mag.is_empty());
    if num.mag.len() > 1 {
        assert_ne!(num.mag[0], 0, "leading zero in {num}");
    }
    if num.mag == [0] {
        assert!(!num.negative, "signed zero");
    }
}

#[test]
fn test_parse() {
    let a: BigInt = "12345670".into();
    assert_eq!(a.to_string(), "12345670");

    let a: BigInt = "-987654323210".into();
    assert_eq!(a.to_string(), "-987654323210");
    assert_eq!(a.signum(), -1);

    // leading zeros are trimmed
    let a: BigInt = "000123".into();
    assert_eq!(a.to_string(), "123");
    assert_canonical(&a);

    // a leading '+' is accepted but never rendered
    let a: BigInt = "+42".into();
    assert_eq!(a.to_string(), "42");

    // "-0" and "-000" are canonical zero
    let a: BigInt = "-0".into();
    assert_eq!(a, BigInt::zero());
    assert_eq!(a.to_string(), "0");
    assert_canonical(&a);
    let a: BigInt = "-000".into();
    assert_eq!(a, BigInt::zero());
    assert_canonical(&a);

    // degenerate inputs denote zero
    for s in ["", "+", "-"] {
        let a: BigInt = s.into();
        assert_eq!(a, BigInt::zero(), "{s:?}");
        assert_canonical(&a);
    }
}

#[test]
fn test_parse_error() {
    let err = "12a3".parse::<BigInt>().unwrap_err();
    assert_eq!(err, ParseBigIntError::InvalidDigit { ch: 'a', pos: 2 });

    let err = "--1".parse::<BigInt>().unwrap_err();
    assert_eq!(err, ParseBigIntError::InvalidDigit { ch: '-', pos: 1 });

    let err = "1 000".parse::<BigInt>().unwrap_err();
    assert_eq!(err, ParseBigIntError::InvalidDigit { ch: ' ', pos: 1 });

    assert!("12345670".parse::<BigInt>().is_ok());
}

#[test]
fn test_from() {
    let big: BigInt = 0u8.into();
    assert_eq!(big, BigInt::zero());
    assert_eq!(big.signum(), 0);

    let big: BigInt = (-16i32).into();
    assert_eq!(big.to_string(), "-16");

    let big: BigInt = 12i8.into();
    assert_eq!(big.to_string(), "12");

    let big: BigInt = (-10000isize).into();
    assert_eq!(big.to_string(), "-10000");

    let big: BigInt = i64::MIN.into();
    assert_eq!(big.to_string(), "-9223372036854775808");

    let big: BigInt = u128::MAX.into();
    assert_eq!(big.to_string(), "340282366920938463463374607431768211455");

    let big: BigInt = i128::MIN.into();
    assert_eq!(big.to_string(), "-170141183460469231731687303715884105728");
    assert_canonical(&big);

    assert_eq!(BigInt::default(), BigInt::zero());
}

#[test]
fn test_add() {
    let a: BigInt = "12345670".into();
    let b: BigInt = "9876576210".into();
    assert_eq!((&a + &b).to_string(), "9888921880");
    assert_eq!(&a + &b, &b + &a);

    // carry chain over every digit
    let a: BigInt = "999999".into();
    let b: BigInt = "1".into();
    assert_eq!((&a + &b).to_string(), "1000000");

    // additive identity
    let a: BigInt = "-123456789".into();
    assert_eq!(&a + &BigInt::zero(), a);
    assert_eq!(&BigInt::zero() + &a, a);

    // additive inverse
    let sum = &a + &(-&a);
    assert_eq!(sum, BigInt::zero());
    assert_canonical(&sum);

    // opposite signs delegate to subtraction
    let a: BigInt = "-5".into();
    let b: BigInt = "3".into();
    assert_eq!((&a + &b).to_string(), "-2");
    assert_eq!((&b + &a).to_string(), "-2");

    let a: BigInt = "-12".into();
    let b: BigInt = "-34".into();
    assert_eq!((&a + &b).to_string(), "-46");

    let mut a: BigInt = "10".into();
    a += BigInt::from("5");
    a += &BigInt::from("-20");
    assert_eq!(a.to_string(), "-5");
}

#[test]
fn test_sub() {
    let a: BigInt = "1234567012".into();
    let b: BigInt = "987654323210".into();
    assert_eq!((&a - &b).to_string(), "-986419756198");
    assert_eq!((&b - &a).to_string(), "986419756198");

    // equal operands cancel to canonical zero
    let a: BigInt = "123".into();
    let diff = &a - &a;
    assert_eq!(diff, BigInt::zero());
    assert_canonical(&diff);

    // borrow chain over every digit
    let a: BigInt = "1000000".into();
    let b: BigInt = "1".into();
    assert_eq!((&a - &b).to_string(), "999999");

    // same-sign negative operands
    let a: BigInt = "-3".into();
    let b: BigInt = "-5".into();
    assert_eq!((&a - &b).to_string(), "2");
    assert_eq!((&b - &a).to_string(), "-2");

    // opposite signs delegate to addition
    let a: BigInt = "-5".into();
    let b: BigInt = "3".into();
    assert_eq!((&a - &b).to_string(), "-8");
    assert_eq!((&b - &a).to_string(), "8");

    let mut a: BigInt = "100".into();
    a -= BigInt::from("1");
    a -= &BigInt::from("-1");
    assert_eq!(a.to_string(), "100");
}

#[test]
fn test_sub_is_add_of_negated() {
    let values: [BigInt; 6] = [
        "0".into(),
        "1".into(),
        "-1".into(),
        "987654323210".into(),
        "-1234567012".into(),
        "99999999999999999999999999".into(),
    ];
    for a in &values {
        for b in &values {
            assert_eq!(a - b, a + &-b, "{a} - {b}");
        }
    }
}

#[test]
fn test_mul() {
    let a: BigInt = "12345678890".into();
    let b: BigInt = "987654210".into();
    assert_eq!((&a * &b).to_string(), "12193261731016626900");
    assert_eq!(&a * &b, &b * &a);

    let a: BigInt = "99999".into();
    assert_eq!((&a * &a).to_string(), "9999800001");

    let a: BigInt = "123456789".into();
    let b: BigInt = "987654321".into();
    assert_eq!((&a * &b).to_string(), "121932631112635269");

    // multiplicative identity and zero
    let a: BigInt = "-123456789".into();
    let one: BigInt = "1".into();
    assert_eq!(&a * &one, a);
    let product = &a * &BigInt::zero();
    assert_eq!(product, BigInt::zero());
    assert_canonical(&product);

    // sign is the xor of the operand signs
    let a: BigInt = "-5".into();
    let b: BigInt = "3".into();
    assert_eq!((&a * &b).to_string(), "-15");
    assert_eq!((&a * &a).to_string(), "25");

    let mut a: BigInt = "12".into();
    a *= BigInt::from("12");
    a *= &BigInt::from("-1");
    assert_eq!(a.to_string(), "-144");
}

#[test]
fn test_associativity() {
    let a: BigInt = "123456789098765432101234567890".into();
    let b: BigInt = "-98765432101234567890987654321".into();
    let c: BigInt = "31415926535897932384626433".into();
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
}

#[test]
fn test_eq() {
    let a: BigInt = "123456890".into();
    let b: BigInt = "12345690".into();
    assert!(a != b);

    let a: BigInt = "42".into();
    let b: BigInt = "-42".into();
    assert!(a != b);
    assert_eq!(a, b.abs());
}

#[test]
fn test_cmp() {
    let a: BigInt = "123452890".into();
    let b: BigInt = "98765432210".into();
    assert!(a < b);

    let a: BigInt = "1234567867890".into();
    let b: BigInt = "98765432143210".into();
    assert!(!(a > b));

    // negative operands order before non-negative ones
    let a: BigInt = "-1".into();
    let b: BigInt = "0".into();
    assert!(a < b);
    assert!(b > a);

    // longer magnitude orders the other way around for negatives
    let a: BigInt = "-100".into();
    let b: BigInt = "-99".into();
    assert!(a < b);
    assert!(a <= b);
    assert!(b >= a);

    // same length decided by the first differing digit
    let a: BigInt = "123459".into();
    let b: BigInt = "123461".into();
    assert!(a < b);
    assert_eq!(a.cmp(&a), Ordering::Equal);
}

#[test]
fn test_neg() {
    let a: BigInt = "42".into();
    assert_eq!((-&a).to_string(), "-42");
    assert_eq!(-(-&a), a);

    // negated zero stays canonical
    let zero = -BigInt::zero();
    assert_eq!(zero, BigInt::zero());
    assert_canonical(&zero);
    assert_eq!(zero.to_string(), "0");
}

#[test]
fn test_round_trip() {
    let values = [
        "0",
        "7",
        "-7",
        "9888921880",
        "-986419756198",
        "12193261731016626900",
        "340282366920938463463374607431768211455",
    ];
    for s in values {
        let num: BigInt = s.into();
        assert_eq!(num.to_string(), s);
        assert_eq!(num.to_string().parse::<BigInt>(), Ok(num));
    }
}

#[test]
fn test_small_range_cross_check() {
    for a in -20i64..=20 {
        for b in -20i64..=20 {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            assert_eq!(&x + &y, BigInt::from(a + b), "{a} + {b}");
            assert_eq!(&x - &y, BigInt::from(a - b), "{a} - {b}");
            assert_eq!(&x * &y, BigInt::from(a * b), "{a} * {b}");
            assert_eq!(x.cmp(&y), a.cmp(&b), "{a} cmp {b}");
            assert_canonical(&(&x + &y));
            assert_canonical(&(&x - &y));
            assert_canonical(&(&x * &y));
        }
    }
}
