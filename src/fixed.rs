/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::ParseFixedError;
use crate::math::{PRECISION, SCALE};
use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Fractional digits printed by [Display] when no precision is requested
const DEFAULT_DIGITS: usize = 20;

/// Signed Q64.64 fixed-point number.
///
/// The raw integer is unbounded, value is `raw / 2^64`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(BigInt);

impl Fixed {
    /// Wraps raw integer already scaled by 2^64
    #[inline]
    pub fn from_raw(raw: impl Into<BigInt>) -> Self {
        Fixed(raw.into())
    }

    /// Creates a whole number
    #[inline]
    pub fn from_int(value: i64) -> Self {
        Fixed(BigInt::from(value) << PRECISION)
    }

    /// `numerator / denominator`, truncated toward zero
    pub fn from_ratio(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Fixed((BigInt::from(numerator) << PRECISION) / denominator))
    }

    /// Converts from a float, truncating bits below 2^-64.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        BigInt::from_f64(value * SCALE as f64).map(Fixed)
    }

    /// Nearest `f64`, for display and diagnostics only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN) / SCALE as f64
    }

    #[inline]
    pub fn zero() -> Self {
        Fixed(BigInt::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Fixed(BigInt::from(SCALE))
    }

    #[inline]
    pub fn raw(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_raw(self) -> BigInt {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// `(self << 64) / rhs`, truncated toward zero, `None` when `rhs` is zero
    pub fn checked_div(&self, rhs: &Fixed) -> Option<Fixed> {
        if rhs.0.is_zero() {
            return None;
        }
        Some(Fixed((&self.0 << PRECISION) / &rhs.0))
    }
}

macro_rules! impl_fixed_op {
    ($op:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $op<Fixed> for Fixed {
            type Output = Fixed;

            #[inline]
            fn $method(self, rhs: Fixed) -> Fixed {
                let ($a, $b) = (&self.0, &rhs.0);
                Fixed($body)
            }
        }

        impl $op<&Fixed> for &Fixed {
            type Output = Fixed;

            #[inline]
            fn $method(self, rhs: &Fixed) -> Fixed {
                let ($a, $b) = (&self.0, &rhs.0);
                Fixed($body)
            }
        }
    };
}

impl_fixed_op!(Add, add, |a, b| a + b);
impl_fixed_op!(Sub, sub, |a, b| a - b);
// product is truncated toward zero
impl_fixed_op!(Mul, mul, |a, b| (a * b) / SCALE);

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Neg for &Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-&self.0)
    }
}

/// Exact decimal expansion truncated to the requested precision.
///
/// Without an explicit precision at most 20 fractional digits are printed and
/// trailing zeros are dropped. Width, fill and alignment apply to the whole
/// literal, `0` padding goes after the sign.
impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.0.magnitude();
        let integer = magnitude >> PRECISION;
        let mask = (BigUint::one() << PRECISION) - 1u8;
        let mut fraction = magnitude & &mask;

        let max_digits = f.precision().unwrap_or(DEFAULT_DIGITS);
        let mut digits = String::with_capacity(max_digits);
        while digits.len() < max_digits && (f.precision().is_some() || !fraction.is_zero()) {
            fraction *= 10u8;
            let digit = (&fraction >> PRECISION).to_u8().unwrap_or_default();
            fraction &= &mask;
            digits.push(char::from(b'0' + digit));
        }
        if f.precision().is_none() {
            while digits.ends_with('0') {
                digits.pop();
            }
        }

        // a value truncated to all zero digits prints without a sign
        let non_negative =
            !self.0.is_negative() || (integer.is_zero() && digits.bytes().all(|b| b == b'0'));
        let body = if digits.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{digits}")
        };
        f.pad_integral(non_negative, "", &body)
    }
}

/// Parses decimal literals such as `-12.375`, fraction is truncated toward zero.
impl FromStr for Fixed {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
        if integer.is_empty() && fraction.is_empty() {
            return Err(ParseFixedError::Empty);
        }
        if !integer
            .bytes()
            .chain(fraction.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(ParseFixedError::InvalidDigit);
        }

        let mut raw = if integer.is_empty() {
            BigInt::zero()
        } else {
            integer
                .parse::<BigInt>()
                .map_err(|_| ParseFixedError::InvalidDigit)?
        };
        raw <<= PRECISION;
        if !fraction.is_empty() {
            let numerator = fraction
                .parse::<BigInt>()
                .map_err(|_| ParseFixedError::InvalidDigit)?;
            let denominator = BigInt::from(10u8).pow(fraction.len() as u32);
            raw += (numerator << PRECISION) / denominator;
        }
        if negative {
            raw = -raw;
        }
        Ok(Fixed(raw))
    }
}
