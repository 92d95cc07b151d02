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
use crate::math::consts::SCALE;
use crate::math::exp2::exp2;
use crate::math::log2::log2;

/// Raises `base` to fixed-point power `exponent` as `2^(exponent * log2(base))`.
///
/// Domain: `base >= 1` and the product `exponent * log2(base)` within the
/// domain of `exp2`. A product out of range is reported against `pow` with the
/// product as the argument.
pub fn pow(base: &Fixed, exponent: &Fixed) -> Result<Fixed, DomainError> {
    let binary = log2(base).map_err(|e| e.within(Function::Pow))?;
    let product = Fixed::from_raw(exponent.raw() * binary.into_raw() / SCALE);
    exp2(&product).map_err(|e| e.within(Function::Pow))
}

/// Raises `x` to unsigned integer power by repeated squaring.
///
/// Every intermediate product is truncated toward zero, so results are not
/// exact for fractional `x`. Total over all `x`, `powu(x, 0) == 1`.
pub fn powu(x: &Fixed, n: u64) -> Fixed {
    let mut exponent = n;
    let mut base = x.clone();
    let mut result = if exponent & 1 == 1 {
        base.clone()
    } else {
        Fixed::one()
    };

    exponent >>= 1;
    while exponent > 0 {
        base = &base * &base;
        if exponent & 1 == 1 {
            result = &result * &base;
        }
        exponent >>= 1;
    }
    result
}
