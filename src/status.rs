use std::fmt;
use crate::Format;

/// IEEE754-style classification of a value's exponent/significand fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
  Zero,
  Subnormal,
  Normal,
  Infinity,
  NaN,
}

pub(crate) fn classify(format: Format, exp: u64, sig: u64) -> Status {
  match (exp, sig) {
    (0, 0) => Status::Zero,
    (0, _) => Status::Subnormal,
    (exp, 0) if exp == format.exp_max() => Status::Infinity,
    (exp, _) if exp == format.exp_max() => Status::NaN,
    _ => Status::Normal,
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let name = match self {
      Status::Zero => "zero",
      Status::Subnormal => "subnormal",
      Status::Normal => "normal",
      Status::Infinity => "inf",
      Status::NaN => "NaN",
    };
    f.write_str(name)
  }
}
