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
use crate::math::common::{mul_shr64, u256_to_biguint};
use crate::math::consts::{EXP2_MAGIC, EXP2_MAX, EXP2_MIN, PRECISION};
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use primitive_types::U256;

/// Computes 2^x using the binary fraction method.
///
/// Domain: `EXP2_MIN <= x <= EXP2_MAX`, about [-59.79, 192].
pub fn exp2(x: &Fixed) -> Result<Fixed, DomainError> {
    let x = match x.raw().to_i128() {
        Some(value) if (EXP2_MIN..=EXP2_MAX).contains(&value) => value,
        _ => return Err(DomainError::new(Function::Exp2, x.raw().clone())),
    };
    Ok(Fixed::from_raw(BigInt::from(exp2_192x64(x))))
}

/// Binary fraction method on a 192.64 accumulator, `x` is already in bounds.
fn exp2_192x64(x: i128) -> BigUint {
    // two's complement low bits are the fraction of floor(x)
    let fraction = x as u64;
    let integer_part = x >> PRECISION;

    // 0.5 in 192.64 format, stays below 2^192 since every magic is below 2^65
    let mut result = U256::one() << 191;

    // Magic numbers are consumed a byte of the fraction at a time so zero bytes
    // are skipped with one test.
    for (byte_index, batch) in EXP2_MAGIC.chunks_exact(8).enumerate() {
        let byte = (fraction >> (56 - 8 * byte_index)) as u8;
        if byte == 0 {
            continue;
        }
        for (bit, &magic) in batch.iter().enumerate() {
            if byte & (0x80 >> bit) != 0 {
                result = mul_shr64(result, U256::from(magic));
            }
        }
    }

    // Starting from 0.5 instead of 1 is accounted for by shifting by 191
    // rather than 192. At x = 192 the shift turns into a single left shift.
    let widened = u256_to_biguint(result) << PRECISION;
    let shift = 191 - integer_part;
    if shift >= 0 {
        widened >> shift as u32
    } else {
        widened << shift.unsigned_abs() as u32
    }
}
