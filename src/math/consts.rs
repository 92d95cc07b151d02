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

/// Number of fractional bits of the Q64.64 encoding
pub const PRECISION: u32 = 64;

/// Fixed-point "1", 2^64
pub const SCALE: u128 = 1 << PRECISION;

/// ln(2) in Q64.64
pub const LN2: u128 = 12786308645202655660;

/// log10(2) in Q64.64, i.e. 2^64 / log2(10).
///
/// Converts a binary logarithm into a decimal one the same way [LN2] converts
/// it into a natural one.
pub const LN10: u128 = 5553023288523357132;

/// log2(e) in Q64.64
pub const LOG2E: u128 = 26613026195688644983;

/// Smallest argument accepted by `exp2`, about -59.794705707972522261
pub const EXP2_MIN: i128 = -1103017633157748883456;

/// Largest argument accepted by `exp2`, exactly 192
pub const EXP2_MAX: i128 = 3541774862152233910272;

/// Smallest argument accepted by `exp`, about -41.446531673892822322
pub const EXP_MIN: i128 = -764553562531197616128;

/// Largest argument accepted by `exp`, about 133.084258667509499441
pub const EXP_MAX: i128 = 2454971259878909673472;

/// Entry `i - 1` is 2^(2^-i) in Q64.64, rounded to nearest, for i in 1..=64.
///
/// Consumed by `exp2` most significant fractional bit first.
pub const EXP2_MAGIC: [u128; 64] = [
    0x16A09E667F3BCC909,
    0x1306FE0A31B7152DF,
    0x1172B83C7D517ADCE,
    0x10B5586CF9890F62A,
    0x1059B0D31585743AE,
    0x102C9A3E778060EE7,
    0x10163DA9FB33356D8,
    0x100B1AFA5ABCBED61,
    0x10058C86DA1C09EA2,
    0x1002C605E2E8CEC50,
    0x100162F3904051FA1,
    0x1000B175EFFDC76BA,
    0x100058BA01FB9F96D,
    0x10002C5CC37DA9492,
    0x1000162E525EE0547,
    0x10000B17255775C04,
    0x1000058B91B5BC9AE,
    0x100002C5C89D5EC6D,
    0x10000162E43F4F831,
    0x100000B1721BCFC9A,
    0x10000058B90CF1E6E,
    0x1000002C5C863B73F,
    0x100000162E430E5A2,
    0x1000000B172183551,
    0x100000058B90C0B49,
    0x10000002C5C8601CC,
    0x1000000162E42FFF0,
    0x10000000B17217FBB,
    0x1000000058B90BFCE,
    0x100000002C5C85FE3,
    0x10000000162E42FF1,
    0x100000000B17217F8,
    0x10000000058B90BFC,
    0x1000000002C5C85FE,
    0x100000000162E42FF,
    0x1000000000B17217F,
    0x100000000058B90C0,
    0x10000000002C5C860,
    0x1000000000162E430,
    0x10000000000B17218,
    0x1000000000058B90C,
    0x100000000002C5C86,
    0x10000000000162E43,
    0x100000000000B1721,
    0x10000000000058B91,
    0x1000000000002C5C8,
    0x100000000000162E4,
    0x1000000000000B172,
    0x100000000000058B9,
    0x10000000000002C5D,
    0x1000000000000162E,
    0x10000000000000B17,
    0x1000000000000058C,
    0x100000000000002C6,
    0x10000000000000163,
    0x100000000000000B1,
    0x10000000000000059,
    0x1000000000000002C,
    0x10000000000000016,
    0x1000000000000000B,
    0x10000000000000006,
    0x10000000000000003,
    0x10000000000000001,
    0x10000000000000001,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_table_approximates_roots_of_two() {
        // 2^(2^-i) = 2^(2^-(i+1)) squared
        for i in 0..EXP2_MAGIC.len() - 1 {
            let next = EXP2_MAGIC[i + 1] as f64 / SCALE as f64;
            let current = EXP2_MAGIC[i] as f64 / SCALE as f64;
            assert!(
                (next * next - current).abs() < 1e-12,
                "Entry {} is not the square root of entry {}",
                i + 1,
                i
            );
        }
        assert_eq!(EXP2_MAGIC[0], 0x16A09E667F3BCC909);
        assert!(EXP2_MAGIC.iter().all(|&magic| magic > SCALE));
        assert!(EXP2_MAGIC.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_constants() {
        assert!((LN2 as f64 / SCALE as f64 - std::f64::consts::LN_2).abs() < 1e-15);
        assert!((LN10 as f64 / SCALE as f64 - std::f64::consts::LOG10_2).abs() < 1e-15);
        assert!((LOG2E as f64 / SCALE as f64 - std::f64::consts::LOG2_E).abs() < 1e-15);
        assert_eq!(EXP2_MAX, 192 * SCALE as i128);
    }
}
