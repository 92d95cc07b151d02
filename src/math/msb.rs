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

/// Finds zero-based index of the highest set bit.
///
/// Whole 64-bit limbs below the top one contribute 64 each, the top limb is
/// then binary searched over thresholds 2^32, 2^16, ... 2^1. Nothing is
/// allocated. By convention zero has the same answer as one, `0`.
pub fn most_significant_bit(x: &BigUint) -> u64 {
    let mut limbs = 0u64;
    let mut top = 0u64;
    for digit in x.iter_u64_digits() {
        limbs += 1;
        top = digit;
    }
    if limbs == 0 {
        return 0;
    }

    let mut msb = 64 * (limbs - 1);
    for exponent in [32u32, 16, 8, 4, 2, 1] {
        if top >= 1u64 << exponent {
            top >>= exponent;
            msb += u64::from(exponent);
        }
    }
    msb
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_msb_small() {
        assert_eq!(most_significant_bit(&BigUint::from(0u8)), 0);
        assert_eq!(most_significant_bit(&BigUint::from(1u8)), 0);
        assert_eq!(most_significant_bit(&BigUint::from(2u8)), 1);
        assert_eq!(most_significant_bit(&BigUint::from(3u8)), 1);
        assert_eq!(most_significant_bit(&BigUint::from(255u8)), 7);
        assert_eq!(most_significant_bit(&BigUint::from(256u16)), 8);
    }

    #[test]
    fn test_msb_matches_bit_length() {
        for shift in 0..700u32 {
            let power = BigUint::one() << shift;
            assert_eq!(most_significant_bit(&power), u64::from(shift));
            let below = (BigUint::one() << (shift + 1)) - 1u8;
            assert_eq!(most_significant_bit(&below), u64::from(shift));
        }
    }

    #[test]
    fn test_msb_limb_boundaries() {
        let limb = BigUint::from(u64::MAX);
        assert_eq!(most_significant_bit(&limb), 63);
        assert_eq!(most_significant_bit(&(limb + 1u8)), 64);
        assert_eq!(most_significant_bit(&(BigUint::one() << 128u32)), 128);
        let mixed = (BigUint::one() << 191u32) + BigUint::from(u64::MAX);
        assert_eq!(most_significant_bit(&mixed), 191);
    }

    #[test]
    fn test_msb_random_words() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let words: Vec<u32> = (0..rng.random_range(1..12usize))
                .map(|_| rng.random::<u32>())
                .collect();
            let value = BigUint::from_slice(&words);
            let expected = value.bits().saturating_sub(1);
            assert_eq!(most_significant_bit(&value), expected, "{value:#x}");
        }
    }
}
