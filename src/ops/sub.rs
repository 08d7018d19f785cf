use std::ops::Sub;
use crate::{
  Error,
  Exception,
  Float,
  Format,
};
use crate::ops::add::add_impl;
use crate::ops::check_format;

impl Sub for Float {
  type Output = Result<Float, Error>;

  fn sub(self, other: Float) -> Result<Float, Error> {
    self.sub_with_format(&other, self.format()).map(|(f, _)| f)
  }
}

impl Float {
  pub fn sub_with_format(&self, other: &Float, format: Format) -> Result<(Float, Exception), Error> {
    check_format(self, other)?;
    Ok(add_impl(self, other, true, format))
  }
}

/// `result = a - b`, computed as `a + (-b)` with the same alignment and
/// renormalization as [`add`](crate::add).
pub fn sub(a: &Float, b: &Float, result: &mut Float) -> Result<Exception, Error> {
  let (difference, exception) = a.sub_with_format(b, result.format())?;
  *result = difference;
  Ok(exception)
}
