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
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Public function that rejected an argument
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Log2,
    Log,
    Log10,
    Exp2,
    Exp,
    Sqrt,
    Root,
    Pow,
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Function::Log2 => "log2",
            Function::Log => "log",
            Function::Log10 => "log10",
            Function::Exp2 => "exp2",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Root => "root",
            Function::Pow => "pow",
        };
        f.write_str(name)
    }
}

/// Argument falls outside of the admissible range of a function.
///
/// The argument is the raw Q64.64 integer that was rejected. For composite
/// functions this may be an intermediate value, e.g. the exponent `pow`
/// feeds into `exp2`. The one unscaled argument is the degree of `root`: a
/// zero degree is reported as plain `0`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{function}: argument {argument} is outside of the function domain")]
pub struct DomainError {
    function: Function,
    argument: BigInt,
}

impl DomainError {
    pub(crate) fn new(function: Function, argument: BigInt) -> Self {
        tracing::debug!(%function, %argument, "argument outside of domain");
        DomainError { function, argument }
    }

    /// Re-attributes the error to the composite function that was called.
    pub(crate) fn within(self, function: Function) -> Self {
        DomainError { function, ..self }
    }

    pub fn function(&self) -> Function {
        self.function
    }

    /// Rejected value, raw Q64.64 except for a zero `root` degree which is unscaled
    pub fn argument(&self) -> &BigInt {
        &self.argument
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ParseFixedError {
    #[error("cannot parse fixed-point value from empty string")]
    Empty,
    #[error("invalid digit found in fixed-point literal")]
    InvalidDigit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let error = DomainError::new(Function::Log2, BigInt::from(5));
        assert_eq!(
            error.to_string(),
            "log2: argument 5 is outside of the function domain"
        );
    }

    #[test]
    fn test_within_keeps_argument() {
        let error = DomainError::new(Function::Exp2, BigInt::from(-7)).within(Function::Pow);
        assert_eq!(error.function(), Function::Pow);
        assert_eq!(error.argument(), &BigInt::from(-7));
    }
}
