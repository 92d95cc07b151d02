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
use crate::math::consts::{PRECISION, SCALE};
use crate::math::msb::most_significant_bit;
use num_bigint::{BigInt, BigUint};

/// Computes binary logarithm.
///
/// Integer part comes from the highest set bit of `x / 1`, the fraction is
/// extracted one bit per iteration by repeated squaring of `y = x * 2^-n`,
/// `y` in [1, 2).
///
/// Domain: `x >= 1`.
pub fn log2(x: &Fixed) -> Result<Fixed, DomainError> {
    let unit = BigUint::from(SCALE);
    let x = match x.raw().to_biguint() {
        Some(value) if value >= unit => value,
        _ => return Err(DomainError::new(Function::Log2, x.raw().clone())),
    };

    let n = most_significant_bit(&(&x / &unit));
    let mut result = BigUint::from(n) * &unit;

    let mut y = x >> n;
    if y == unit {
        return Ok(Fixed::from_raw(BigInt::from(result)));
    }

    let double_unit = &unit << 1u32;
    for i in 0..PRECISION {
        y = &y * &y / &unit;
        // y^2 landed in [2, 4), emit bit 2^-(i+1)
        if y >= double_unit {
            result += &unit >> (i + 1);
            y >>= 1u32;
        }
    }

    Ok(Fixed::from_raw(BigInt::from(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_log2_exact_powers() {
        assert_eq!(log2(&Fixed::one()), Ok(Fixed::zero()));
        assert_eq!(log2(&Fixed::from_int(2)), Ok(Fixed::one()));
        assert_eq!(log2(&Fixed::from_int(1024)), Ok(Fixed::from_int(10)));
        let huge = Fixed::from_raw(BigInt::from(SCALE) << 300u32);
        assert_eq!(log2(&huge), Ok(Fixed::from_int(300)));
    }

    #[test]
    fn test_log2_known_values() {
        assert_eq!(
            log2(&Fixed::from_int(3)).unwrap().into_raw(),
            BigInt::from(29237397617229858719u128)
        );
        assert_eq!(
            log2(&Fixed::from_ratio(9, 2).unwrap()).unwrap().into_raw(),
            BigInt::from(40028051160750165823u128)
        );
    }

    #[test]
    fn test_log2d() {
        let mut max_diff = 0f64;
        for i in 1000..50000 {
            let x = i as f64 / 1000.;
            let my_log2 = log2(&Fixed::from_f64(x).unwrap()).unwrap().to_f64();
            max_diff = max_diff.max((my_log2 - x.log2()).abs());
        }
        assert!(max_diff < 1e-12, "max diff {}", max_diff);
    }

    #[test]
    fn test_log2_domain() {
        let below = Fixed::from_raw(SCALE - 1);
        let error = log2(&below).unwrap_err();
        assert_eq!(error.function(), Function::Log2);
        assert_eq!(error.argument(), below.raw());
        assert!(log2(&Fixed::zero()).is_err());
        assert!(log2(&Fixed::from_int(-4)).is_err());
    }

    #[test]
    fn test_log2_monotonic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6c6f6732);
        let mut samples: Vec<u128> = (0..500)
            .map(|_| rng.random_range(SCALE..SCALE * 1_000_000))
            .collect();
        samples.sort_unstable();
        let logs: Vec<Fixed> = samples
            .iter()
            .map(|&x| log2(&Fixed::from_raw(x)).unwrap())
            .collect();
        assert!(logs.windows(2).all(|w| w[0] <= w[1]));

        let mut previous = Fixed::zero();
        for raw in SCALE..SCALE + 2000 {
            let current = log2(&Fixed::from_raw(raw)).unwrap();
            assert!(previous <= current);
            previous = current;
        }
    }
}
