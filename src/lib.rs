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
//! Deterministic integer-only fixed-point logarithms, exponents and powers.
//!
//! Values are signed Q64.64 numbers ([Fixed]): an integer scaled by 2^64. Every
//! function is built from additions, multiplications, divisions and shifts
//! only, so a given input produces the same output integer on any host.
//! Out of domain arguments are rejected with [DomainError].
//!
//! ```
//! use fxmath::{Fixed, log2, pow};
//!
//! assert_eq!(log2(&Fixed::from_int(8)), Ok(Fixed::from_int(3)));
//! assert_eq!(pow(&Fixed::from_int(2), &Fixed::from_int(3)), Ok(Fixed::from_int(8)));
//! assert!(log2(&Fixed::from_ratio(1, 2).unwrap()).is_err());
//! ```
#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
mod err;
mod fixed;
mod math;

pub use err::{DomainError, Function, ParseFixedError};
pub use fixed::Fixed;
pub use math::{
    EXP_MAX, EXP_MIN, EXP2_MAGIC, EXP2_MAX, EXP2_MIN, LN2, LN10, LOG2E, PRECISION, SCALE, exp,
    exp2, log, log2, log10, most_significant_bit, pow, powu, root, sqrt,
};
