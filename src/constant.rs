use crate::Format;

pub(crate) fn width_mask(width: u32) -> u64 {
  if width >= 64 {
    u64::MAX
  } else {
    (1 << width) - 1
  }
}

impl Format {
  /// `2^(exp_width - 1) - 1`
  pub fn bias(self) -> i64 {
    (1i64 << (self.exp_width() - 1)) - 1
  }

  /// All-ones exponent, reserved for Infinity and NaN.
  pub fn exp_max(self) -> u64 {
    width_mask(self.exp_width())
  }

  pub fn sig_max(self) -> u64 {
    width_mask(self.sig_width())
  }

  pub fn sign_max(self) -> u64 {
    width_mask(self.sign_width())
  }

  pub fn hidden_bit(self) -> u64 {
    1 << self.sig_width()
  }

  pub(crate) fn quiet_bit(self) -> u64 {
    match self.sig_width() {
      0 => 0,
      width => 1 << (width - 1),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn masks() {
    assert_eq!(width_mask(0), 0);
    assert_eq!(width_mask(5), 0x1F);
    assert_eq!(width_mask(64), u64::MAX);
  }

  #[test]
  fn half_constants() {
    let f = Format::HALF;
    assert_eq!(f.bias(), 15);
    assert_eq!(f.exp_max(), 0x1F);
    assert_eq!(f.sig_max(), 0x3FF);
    assert_eq!(f.sign_max(), 1);
    assert_eq!(f.hidden_bit(), 0x400);
    assert_eq!(f.quiet_bit(), 0x200);
  }

  #[test]
  fn bias_of_narrow_and_wide_exponents() {
    assert_eq!(Format::E3M4.bias(), 3);
    assert_eq!(Format::E4M3.bias(), 7);
    assert_eq!(Format::SINGLE.bias(), 127);
    assert_eq!(Format::new(1, 1, 2).unwrap().bias(), 0);
    assert_eq!(Format::new(0, 32, 31).unwrap().bias(), 0x7FFF_FFFF);
  }
}
