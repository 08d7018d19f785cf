use std::fmt;
use std::str::FromStr;
use crate::{Error, Exception, Float};

mod add;
mod div;
mod mul;
mod sub;

pub use add::add;
pub use div::div;
pub use mul::mul;
pub use sub::sub;

/// The closed set of arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Sub,
  Mul,
  Div,
}

impl Operator {
  pub fn apply(self, a: &Float, b: &Float, result: &mut Float) -> Result<Exception, Error> {
    match self {
      Operator::Add => add(a, b, result),
      Operator::Sub => sub(a, b, result),
      Operator::Mul => mul(a, b, result),
      Operator::Div => div(a, b, result),
    }
  }

  /// Everything but multiplication needs both operands in one format.
  pub fn requires_same_format(self) -> bool {
    self != Operator::Mul
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Sub => "-",
      Operator::Mul => "*",
      Operator::Div => "/",
    }
  }
}

impl fmt::Display for Operator {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad(self.symbol())
  }
}

impl FromStr for Operator {
  type Err = String;

  fn from_str(s: &str) -> Result<Operator, String> {
    match s {
      "add" | "+" => Ok(Operator::Add),
      "sub" | "-" => Ok(Operator::Sub),
      "mul" | "*" => Ok(Operator::Mul),
      "div" | "/" => Ok(Operator::Div),
      _ => Err(format!("unknown operator `{}`", s)),
    }
  }
}

pub(crate) fn check_format(a: &Float, b: &Float) -> Result<(), Error> {
  if crate::same_format(a, b) {
    Ok(())
  } else {
    log::debug!("rejecting operands of different formats: {} vs {}", a.format(), b.format());
    Err(Error::FormatMismatch { lhs: a.format(), rhs: b.format() })
  }
}
