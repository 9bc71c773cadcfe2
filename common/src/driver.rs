//! Fixed-table drivers.
//!
//! A driver pairs one recursive function with its literal list of inputs and
//! prints the banner, one `name(args) = result` line per input, and a closing
//! note. The layout is:
//!
//! ```text
//! <title>
//! <rule>
//!
//! <name>(<args>) = <result>
//! ...
//!
//! <note>
//! ```

use std::{fmt::Debug, io::Write};

use crate::{
    arith::{factorial, recursive_multiply},
    constants::*,
    error::DriverError,
};

pub trait Driver {
    /// Arguments for a single invocation.
    type Case: Copy + Debug + 'static;

    const NAME: &'static str;
    const TITLE: &'static str;
    const RULE: &'static str;
    const NOTE: &'static str;
    const CASES: &'static [Self::Case];

    fn evaluate(case: Self::Case) -> u8;

    /// Renders the argument list without the surrounding parentheses.
    fn write_args<W: Write>(out: &mut W, case: Self::Case) -> std::io::Result<()>;
}

pub struct FactorialDriver;

impl Driver for FactorialDriver {
    type Case = u8;

    const NAME: &'static str = "factorial";
    const TITLE: &'static str = FACTORIAL_TITLE;
    const RULE: &'static str = FACTORIAL_RULE;
    const NOTE: &'static str = FACTORIAL_NOTE;
    const CASES: &'static [u8] = &FACTORIAL_INPUTS;

    fn evaluate(n: u8) -> u8 {
        factorial(n)
    }

    fn write_args<W: Write>(out: &mut W, n: u8) -> std::io::Result<()> {
        write!(out, "{n}")
    }
}

pub struct MultiplyDriver;

impl Driver for MultiplyDriver {
    type Case = (u8, u8);

    const NAME: &'static str = "multiply";
    const TITLE: &'static str = MULTIPLY_TITLE;
    const RULE: &'static str = MULTIPLY_RULE;
    const NOTE: &'static str = MULTIPLY_NOTE;
    const CASES: &'static [(u8, u8)] = &MULTIPLY_INPUTS;

    fn evaluate((a, b): (u8, u8)) -> u8 {
        recursive_multiply(a, b)
    }

    fn write_args<W: Write>(out: &mut W, (a, b): (u8, u8)) -> std::io::Result<()> {
        write!(out, "{a}, {b}")
    }
}

/// Runs every case of `D` in table order, writing the full report to `out`.
pub fn run<D: Driver, W: Write>(out: &mut W) -> Result<(), DriverError> {
    writeln!(out, "{}", D::TITLE)?;
    writeln!(out, "{}", D::RULE)?;
    writeln!(out)?;

    for &case in D::CASES {
        let result = D::evaluate(case);
        tracing::debug!(driver = D::NAME, ?case, result, "evaluated case");

        write!(out, "{}(", D::NAME)?;
        D::write_args(out, case)?;
        writeln!(out, ") = {result}")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", D::NOTE)?;
    out.flush()?;

    Ok(())
}
