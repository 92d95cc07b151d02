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
use crate::err::{DomainError, Function};
use crate::fixed::Fixed;
use crate::math::consts::{EXP_MAX, EXP_MIN, LOG2E, SCALE};
use crate::math::exp2::exp2;
use num_traits::ToPrimitive;

/// Computes exponent as `2^(x * log2(e))`.
///
/// Domain: `EXP_MIN <= x <= EXP_MAX`, about [-41.45, 133.08].
pub fn exp(x: &Fixed) -> Result<Fixed, DomainError> {
    match x.raw().to_i128() {
        Some(value) if (EXP_MIN..=EXP_MAX).contains(&value) => {}
        _ => return Err(DomainError::new(Function::Exp, x.raw().clone())),
    }
    let exponent = Fixed::from_raw(x.raw() * LOG2E / SCALE);
    exp2(&exponent).map_err(|e| e.within(Function::Exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::log::log;
    use num_bigint::BigInt;

    #[test]
    fn exp_test() {
        assert_eq!(exp(&Fixed::zero()), Ok(Fixed::one()));
        // e = 2.71828182845904523536..., 2^64 * e = 50143449209799256682.6
        assert_eq!(
            exp(&Fixed::one()).unwrap().into_raw(),
            BigInt::from(50143449209799256682u128)
        );
        assert_eq!(
            exp(&Fixed::from_int(-1)).unwrap().into_raw(),
            BigInt::from(6786177901268885274u128)
        );
        let five = exp(&Fixed::from_int(5)).unwrap().to_f64();
        assert!(
            (five - 148.4131591025766034211155800405522796f64).abs() < 1e-10,
            "Invalid result {}",
            five
        );
    }

    #[test]
    fn test_exp_bounds() {
        assert!(exp(&Fixed::from_raw(EXP_MIN)).is_ok());
        assert!(exp(&Fixed::from_raw(EXP_MAX)).is_ok());
        for raw in [EXP_MIN - 1, EXP_MAX + 1] {
            let error = exp(&Fixed::from_raw(raw)).unwrap_err();
            assert_eq!(error.function(), Function::Exp);
            assert_eq!(error.argument(), &BigInt::from(raw));
        }
    }

    #[test]
    fn test_exp_log_roundtrip() {
        for i in 1..500 {
            let x = Fixed::from_ratio(i * 7 + 3, 3).unwrap();
            let back = exp(&log(&x).unwrap()).unwrap();
            let diff = (back.to_f64() - x.to_f64()).abs();
            assert!(diff < x.to_f64() * 1e-14, "{} became {}", x, back);
        }
    }
}
