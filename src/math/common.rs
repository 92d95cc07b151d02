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
use num_bigint::BigUint;
use primitive_types::{U256, U512};

/// Computes `(a * b) >> 64` using a 512-bit product.
///
/// Callers guarantee the shifted product fits back into 256 bits.
#[inline(always)]
pub(crate) fn mul_shr64(a: U256, b: U256) -> U256 {
    let U512(limbs) = a.full_mul(b) >> 64;
    debug_assert!(limbs[4..].iter().all(|&limb| limb == 0));
    U256([limbs[0], limbs[1], limbs[2], limbs[3]])
}

/// Moves a 256-bit register into an unbounded integer.
#[inline]
pub(crate) fn u256_to_biguint(value: U256) -> BigUint {
    let U256(limbs) = value;
    let digits = limbs
        .iter()
        .flat_map(|&limb| [limb as u32, (limb >> 32) as u32])
        .collect();
    BigUint::new(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_shr64() {
        let one = U256::from(1u128 << 64);
        let x = U256::from(0x16A09E667F3BCC909u128);
        assert_eq!(mul_shr64(one, x), x);
        let half_192 = U256::one() << 191;
        assert_eq!(
            mul_shr64(half_192, U256::from(2u128 << 64)),
            U256::one() << 192
        );
    }

    #[test]
    fn test_u256_to_biguint() {
        let value = (U256::one() << 200) + U256::from(0xdead_beef_u64);
        let expected = (BigUint::from(1u8) << 200u32) + BigUint::from(0xdead_beef_u64);
        assert_eq!(u256_to_biguint(value), expected);
        assert_eq!(u256_to_biguint(U256::zero()), BigUint::from(0u8));
    }
}
