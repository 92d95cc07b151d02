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
use crate::math::consts::{LN2, SCALE};
use crate::math::log2::log2;

/// Computes natural logarithm as `log2(x) * ln(2)`.
///
/// Domain: `x >= 1`.
#[inline]
pub fn log(x: &Fixed) -> Result<Fixed, DomainError> {
    let binary = log2(x).map_err(|e| e.within(Function::Log))?;
    Ok(Fixed::from_raw(binary.into_raw() * LN2 / SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_log() {
        assert_eq!(log(&Fixed::one()), Ok(Fixed::zero()));
        assert_eq!(log(&Fixed::from_int(2)), Ok(Fixed::from_raw(LN2)));
        let mut max_diff = 0f64;
        for i in 1..5000 {
            let x = 1. + i as f64 / 100.;
            let my_log = log(&Fixed::from_f64(x).unwrap()).unwrap().to_f64();
            max_diff = max_diff.max((my_log - x.ln()).abs());
        }
        assert!(max_diff < 1e-12, "max diff {}", max_diff);
    }

    #[test]
    fn test_log_derivation_identity() {
        for raw in [SCALE, SCALE + 1, 3 * SCALE, 12345 * SCALE + 6789, u128::MAX] {
            let x = Fixed::from_raw(raw);
            let expected = log2(&x).unwrap().into_raw() * LN2 / SCALE;
            assert_eq!(log(&x).unwrap().into_raw(), expected);
        }
        assert_eq!(
            log(&Fixed::from_int(3)).unwrap().into_raw(),
            BigInt::from(20265819725292939638u128)
        );
    }

    #[test]
    fn test_log_domain() {
        let error = log(&Fixed::from_ratio(1, 2).unwrap()).unwrap_err();
        assert_eq!(error.function(), Function::Log);
    }
}
