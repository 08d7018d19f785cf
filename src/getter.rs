use crate::status::classify;
use crate::{Float, Format, Status};

impl Float {
  pub fn format(&self) -> Format { self.format }
  pub fn sign(&self) -> u64 { self.sign }
  pub fn exp(&self) -> u64 { self.exp }
  pub fn sig(&self) -> u64 { self.sig }

  pub fn is_negative(&self) -> bool {
    self.sign != 0
  }

  pub fn status(&self) -> Status {
    classify(self.format, self.exp, self.sig)
  }

  pub fn is_nan(&self) -> bool { self.status() == Status::NaN }
  pub fn is_inf(&self) -> bool { self.status() == Status::Infinity }
  pub fn is_zero(&self) -> bool { self.status() == Status::Zero }
  pub fn is_subnormal(&self) -> bool { self.status() == Status::Subnormal }
  pub fn is_normal(&self) -> bool { self.status() == Status::Normal }
}
