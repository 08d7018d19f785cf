use std::ops::Add;
use either::Either;
use crate::{
  Error,
  Exception,
  Float,
  Format,
};
use crate::ops::check_format;
use crate::util::*;

impl Add for Float {
  type Output = Result<Float, Error>;

  fn add(self, other: Float) -> Result<Float, Error> {
    self.add_with_format(&other, self.format()).map(|(f, _)| f)
  }
}

impl Float {
  pub fn add_with_format(&self, other: &Float, format: Format) -> Result<(Float, Exception), Error> {
    check_format(self, other)?;
    Ok(add_impl(self, other, false, format))
  }
}

/// `result = a + b`. Both operands must share a format; the sum is encoded in
/// `result`'s own format, which may be wider. On error `result` is untouched.
pub fn add(a: &Float, b: &Float, result: &mut Float) -> Result<Exception, Error> {
  let (sum, exception) = a.add_with_format(b, result.format())?;
  *result = sum;
  Ok(exception)
}

// Shared by addition and subtraction; `negate_y` flips the sign of `fy`.
pub(crate) fn add_impl(fx: &Float, fy: &Float, negate_y: bool, format: Format) -> (Float, Exception) {
  log::trace!("{} {} {} -> {}", fx, if negate_y { '-' } else { '+' }, fy, format);

  let (mut x, mut y) = match (unpack(fx), unpack(fy)) {
    (Either::Right(x), Either::Right(y)) => (x, y),
    _ => return add_special(fx, fy, negate_y, format),
  };
  y.negative ^= negate_y;

  let lost = if x.exp < y.exp {
    align_to(&mut x, y.exp)
  } else {
    align_to(&mut y, x.exp)
  };

  // magnitudes are compared after alignment, implicit bits included; a tie
  // keeps x's sign
  let sum = if x.negative == y.negative {
    Unpacked { sig: x.sig + y.sig, ..x }
  } else if x.sig >= y.sig {
    Unpacked { sig: x.sig - y.sig, ..x }
  } else {
    Unpacked { sig: y.sig - x.sig, ..y }
  };

  let (f, exception) = pack(sum, format);
  (f, exception | Exception::inexact_if(lost))
}

// Infinity short-circuits before anything else, NaN included; the first
// infinite operand gives the sign.
fn add_special(fx: &Float, fy: &Float, negate_y: bool, format: Format) -> (Float, Exception) {
  match (fx.is_inf(), fy.is_inf()) {
    (true, _) => (Float::infinite(format, fx.is_negative()), Exception::none()),
    (false, true) => (Float::infinite(format, fy.is_negative() ^ negate_y), Exception::none()),
    (false, false) => (Float::default_nan(format), Exception::none()),
  }
}
