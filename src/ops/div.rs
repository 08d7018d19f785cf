use std::ops::Div;
use either::Either;
use crate::{
  Error,
  Exception,
  Float,
  Format,
  Status,
};
use crate::ops::check_format;
use crate::util::*;

impl Div for Float {
  type Output = Result<Float, Error>;

  fn div(self, other: Float) -> Result<Float, Error> {
    self.div_with_format(&other, self.format()).map(|(f, _)| f)
  }
}

impl Float {
  pub fn div_with_format(&self, other: &Float, format: Format) -> Result<(Float, Exception), Error> {
    check_format(self, other)?;
    Ok(div_impl(self, other, format))
  }
}

/// `result = a / b`. Division by zero is not an error: it yields an Infinity
/// carrying the dividend's sign (NaN for `0 / 0`) and raises `DIVIDE_BY_ZERO`.
pub fn div(a: &Float, b: &Float, result: &mut Float) -> Result<Exception, Error> {
  let (quotient, exception) = a.div_with_format(b, result.format())?;
  *result = quotient;
  Ok(exception)
}

pub(crate) fn div_impl(fx: &Float, fy: &Float, format: Format) -> (Float, Exception) {
  log::trace!("{} / {} -> {}", fx, fy, format);

  let sign = fx.is_negative() ^ fy.is_negative();

  let (x, y) = match (unpack(fx), unpack(fy)) {
    (Either::Right(x), Either::Right(y)) => (x, y),
    (Either::Left(Status::NaN), _) | (_, Either::Left(Status::NaN)) => {
      return (Float::default_nan(format), Exception::none())
    }
    (Either::Left(_), Either::Left(_)) => return (Float::default_nan(format), Exception::invalid()),
    (Either::Left(_), Either::Right(_)) => return (Float::infinite(format, sign), Exception::none()),
    (Either::Right(_), Either::Left(_)) => return (Float::zero(format, sign), Exception::none()),
  };

  if y.is_zero() {
    if x.is_zero() {
      return (Float::default_nan(format), Exception::invalid());
    }
    // the dividend alone signs the infinity
    return (Float::infinite(format, x.negative), Exception::divide_by_zero());
  }
  if x.is_zero() {
    return (Float::zero(format, sign), Exception::none());
  }

  // Both leading ones at the implicit position puts x/y in (1/2, 2), so a
  // quotient with sig_width + 1 fraction bits has at least sig_width + 1
  // significant bits.
  let x = x.normalized();
  let y = y.normalized();
  let frac_width = format.sig_width() + 1;
  let (sig, inexact) = long_div(x.sig, y.sig, frac_width);

  let quotient = Unpacked {
    negative: sign,
    exp: x.exp - y.exp,
    sig,
    frac_width,
  };

  let (f, exception) = pack(quotient, format);
  (f, exception | Exception::inexact_if(inexact))
}

// floor(dividend * 2^shamt / divisor), one quotient bit per step; the flag
// reports a non-zero remainder.
fn long_div(dividend: u128, divisor: u128, shamt: u32) -> (u128, bool) {
  let mut quotient = dividend / divisor;
  let mut rem = dividend % divisor;

  for _ in 0..shamt {
    quotient <<= 1;
    rem <<= 1;
    if rem >= divisor {
      rem -= divisor;
      quotient |= 1;
    }
  }

  (quotient, rem != 0)
}
