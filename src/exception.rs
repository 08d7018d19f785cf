use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use thiserror::Error;
use crate::Format;

/// Accrued flags raised by an operation that still produced a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exception(pub u8);
pub const EXCEPTION_NONE: u8 = 0;
pub const EXCEPTION_INEXACT: u8 = 1 << 0;
pub const EXCEPTION_UNDERFLOW: u8 = 1 << 1;
pub const EXCEPTION_OVERFLOW: u8 = 1 << 2;
pub const EXCEPTION_DIVIDE_BY_ZERO: u8 = 1 << 3;
pub const EXCEPTION_INVALID: u8 = 1 << 4;

impl Exception {
  pub fn none() -> Exception { Exception(EXCEPTION_NONE) }
  pub fn inexact() -> Exception { Exception(EXCEPTION_INEXACT) }
  pub fn underflow() -> Exception { Exception(EXCEPTION_UNDERFLOW) }
  pub fn overflow() -> Exception { Exception(EXCEPTION_OVERFLOW) }
  pub fn divide_by_zero() -> Exception { Exception(EXCEPTION_DIVIDE_BY_ZERO) }
  pub fn invalid() -> Exception { Exception(EXCEPTION_INVALID) }

  pub(crate) fn inexact_if(lost: bool) -> Exception {
    if lost { Exception::inexact() } else { Exception::none() }
  }

  pub fn is_empty(self) -> bool {
    self.0 == EXCEPTION_NONE
  }

  pub fn contains(self, other: Exception) -> bool {
    self.0 & other.0 == other.0
  }
}

impl BitOr for Exception {
  type Output = Exception;

  fn bitor(self, other: Exception) -> Exception {
    Exception(self.0 | other.0)
  }
}

impl BitOrAssign for Exception {
  fn bitor_assign(&mut self, other: Exception) {
    self.0 |= other.0;
  }
}

impl fmt::Display for Exception {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let names = [
      (EXCEPTION_INVALID, "invalid"),
      (EXCEPTION_DIVIDE_BY_ZERO, "divide-by-zero"),
      (EXCEPTION_OVERFLOW, "overflow"),
      (EXCEPTION_UNDERFLOW, "underflow"),
      (EXCEPTION_INEXACT, "inexact"),
    ];
    let raised = names
      .iter()
      .filter(|(bit, _)| self.0 & bit != 0)
      .map(|(_, name)| *name)
      .collect::<Vec<_>>();

    if raised.is_empty() {
      f.write_str("none")
    } else {
      f.write_str(&raised.join("|"))
    }
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("operand formats differ: {lhs} vs {rhs}")]
  FormatMismatch { lhs: Format, rhs: Format },
  #[error("invalid format (sign {sign_width}, exponent {exp_width}, significand {sig_width}): {reason}")]
  InvalidFormat { sign_width: u32, exp_width: u32, sig_width: u32, reason: &'static str },
  #[error("unrecognized format name `{0}`")]
  UnknownFormat(String),
  #[error("operand sequences differ in length: {lhs} vs {rhs}")]
  LengthMismatch { lhs: usize, rhs: usize },
}
