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
use anyhow::{Context, bail};
use fxmath::{Fixed, exp, exp2, log, log2, log10, pow, powu, root, sqrt};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: app <log2|log|log10|exp2|exp|sqrt|root|pow|powu> <x> [n|y]";

fn parse_fixed(arg: Option<&String>, name: &str) -> anyhow::Result<Fixed> {
    let literal = arg.with_context(|| format!("missing argument <{name}>"))?;
    literal
        .parse::<Fixed>()
        .with_context(|| format!("invalid fixed-point literal {literal:?}"))
}

/// Evaluates the requested function, paired with the `f64` answer for comparison
fn evaluate(function: &str, args: &[String]) -> anyhow::Result<(Fixed, f64)> {
    let x = parse_fixed(args.first(), "x")?;
    let xf = x.to_f64();
    let evaluated = match function {
        "log2" => (log2(&x)?, xf.log2()),
        "log" => (log(&x)?, xf.ln()),
        "log10" => (log10(&x)?, xf.log10()),
        "exp2" => (exp2(&x)?, xf.exp2()),
        "exp" => (exp(&x)?, xf.exp()),
        "sqrt" => (sqrt(&x)?, xf.sqrt()),
        "root" => {
            let n: i64 = args
                .get(1)
                .context("missing argument <n>")?
                .parse()
                .context("root degree must be an integer")?;
            (root(&x, n)?, xf.powf(1. / n as f64))
        }
        "pow" => {
            let y = parse_fixed(args.get(1), "y")?;
            let yf = y.to_f64();
            (pow(&x, &y)?, xf.powf(yf))
        }
        "powu" => {
            let n: u64 = args
                .get(1)
                .context("missing argument <n>")?
                .parse()
                .context("powu exponent must be an unsigned integer")?;
            (powu(&x, n), xf.powf(n as f64))
        }
        other => bail!("unknown function {other:?}\n{USAGE}"),
    };
    Ok(evaluated)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxmath=info,app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((function, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    let (value, reference) = evaluate(function, rest)?;
    tracing::info!(%function, raw = %value.raw(), "evaluated");

    println!("{value}");
    println!("raw: {}", value.raw());
    println!("f64: {reference}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_evaluate() {
        let (value, reference) = evaluate("log2", &args(&["8"])).unwrap();
        assert_eq!(value, Fixed::from_int(3));
        assert_eq!(reference, 3.);

        let (value, _) = evaluate("root", &args(&["8", "3"])).unwrap();
        assert_eq!(value, Fixed::from_int(2));

        let (value, _) = evaluate("pow", &args(&["2", "-1"])).unwrap();
        assert_eq!(value.to_string(), "0.5");
    }

    #[test]
    fn test_evaluate_errors() {
        assert!(evaluate("log2", &args(&["0.5"])).is_err());
        assert!(evaluate("root", &args(&["8"])).is_err());
        assert!(evaluate("tan", &args(&["1"])).is_err());
        assert!(evaluate("exp", &args(&["abc"])).is_err());
    }
}
