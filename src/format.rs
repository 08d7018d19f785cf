use std::fmt;
use std::str::FromStr;
use crate::Error;

const MAX_STORAGE_WIDTH: u32 = 64;
const MAX_EXP_WIDTH: u32 = 32;

/// Bit layout of a custom float: `[sign | exponent | significand]`, MSB first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Format {
  sign_width: u32,
  exp_width: u32,
  sig_width: u32,
}

impl Format {
  pub const E4M3: Format = Format { sign_width: 1, exp_width: 4, sig_width: 3 };
  pub const E5M2: Format = Format { sign_width: 1, exp_width: 5, sig_width: 2 };
  pub const E3M4: Format = Format { sign_width: 1, exp_width: 3, sig_width: 4 };
  pub const HALF: Format = Format { sign_width: 1, exp_width: 5, sig_width: 10 };
  pub const BFLOAT16: Format = Format { sign_width: 1, exp_width: 8, sig_width: 7 };
  pub const SINGLE: Format = Format { sign_width: 1, exp_width: 8, sig_width: 23 };
  pub const DOUBLE: Format = Format { sign_width: 1, exp_width: 11, sig_width: 52 };

  /// Fails when the exponent cannot carry a bias (`exp_width == 0`), when it is
  /// wider than 32 bits, or when the whole value does not fit in a `u64`.
  ///
  /// The 32-bit exponent cap holds even when the total would fit (`(0, 40, 20)`
  /// is rejected): unbiased exponents, the sum of two of them in a product and
  /// the re-biased result must all stay exact in `i64`.
  pub fn new(sign_width: u32, exp_width: u32, sig_width: u32) -> Result<Format, Error> {
    let invalid = |reason: &'static str| Error::InvalidFormat { sign_width, exp_width, sig_width, reason };

    if exp_width == 0 {
      return Err(invalid("exponent field must be at least 1 bit wide"));
    }
    if exp_width > MAX_EXP_WIDTH {
      return Err(invalid("exponent field must be at most 32 bits wide"));
    }
    let total = u64::from(sign_width) + u64::from(exp_width) + u64::from(sig_width);
    if total > u64::from(MAX_STORAGE_WIDTH) {
      return Err(invalid("format requires more than 64 storage bits"));
    }

    Ok(Format { sign_width, exp_width, sig_width })
  }

  pub fn sign_width(self) -> u32 { self.sign_width }
  pub fn exp_width(self) -> u32 { self.exp_width }
  pub fn sig_width(self) -> u32 { self.sig_width }

  pub fn total_width(self) -> u32 {
    self.sign_width + self.exp_width + self.sig_width
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.sign_width != 1 {
      write!(f, "S{}", self.sign_width)?;
    }
    write!(f, "E{}M{}", self.exp_width, self.sig_width)
  }
}

impl FromStr for Format {
  type Err = Error;

  fn from_str(s: &str) -> Result<Format, Error> {
    let name = s.trim().to_ascii_lowercase();
    let unknown = || Error::UnknownFormat(s.to_string());

    match name.as_str() {
      "fp16" | "half" => return Ok(Format::HALF),
      "bf16" | "bfloat16" => return Ok(Format::BFLOAT16),
      "fp32" | "single" => return Ok(Format::SINGLE),
      "fp64" | "double" => return Ok(Format::DOUBLE),
      _ => {}
    }

    let widths = if name.contains(',') {
      parse_triple(&name)
    } else {
      parse_exmy(&name)
    };

    let (sign, exp, sig) = widths.ok_or_else(unknown)?;
    Format::new(sign, exp, sig)
  }
}

fn parse_triple(name: &str) -> Option<(u32, u32, u32)> {
  let mut fields = name.split(',').map(|field| field.trim().parse::<u32>());
  let sign = fields.next()?.ok()?;
  let exp = fields.next()?.ok()?;
  let sig = fields.next()?.ok()?;

  match fields.next() {
    Some(_) => None,
    None => Some((sign, exp, sig)),
  }
}

// [s<n>]e<n>m<n>
fn parse_exmy(name: &str) -> Option<(u32, u32, u32)> {
  let (sign, rest) = match name.strip_prefix('s') {
    Some(rest) => {
      let at = rest.find('e')?;
      (rest[..at].parse().ok()?, &rest[at..])
    }
    None => (1, name),
  };

  let rest = rest.strip_prefix('e')?;
  let at = rest.find('m')?;
  let exp = rest[..at].parse().ok()?;
  let sig = rest[at + 1..].parse().ok()?;

  Some((sign, exp, sig))
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn new_valid_format() {
    let f = Format::new(1, 5, 10).unwrap();
    assert_eq!(f.sign_width(), 1);
    assert_eq!(f.exp_width(), 5);
    assert_eq!(f.sig_width(), 10);
    assert_eq!(f.total_width(), 16);
    assert_eq!(f, Format::HALF);

    let f = Format::new(0, 11, 53).unwrap();
    assert_eq!(f.total_width(), 64);
  }

  #[test]
  fn new_rejects_degenerate_formats() {
    match Format::new(1, 0, 7) {
      Err(Error::InvalidFormat { exp_width: 0, .. }) => {}
      other => panic!("expected InvalidFormat, got {:?}", other),
    }
    assert!(Format::new(1, 33, 0).is_err());
    match Format::new(0, 40, 20) {
      Err(Error::InvalidFormat { reason, .. }) => assert!(reason.contains("32 bits")),
      other => panic!("expected InvalidFormat, got {:?}", other),
    }
    assert!(Format::new(0, 32, 32).is_ok());
    assert!(Format::new(1, 11, 53).is_err());
    assert!(Format::new(u32::MAX, 8, 23).is_err());
  }

  #[test]
  fn preset_widths() {
    assert_eq!(Format::E4M3.total_width(), 8);
    assert_eq!(Format::E5M2.total_width(), 8);
    assert_eq!(Format::E3M4.total_width(), 8);
    assert_eq!(Format::BFLOAT16.total_width(), 16);
    assert_eq!(Format::SINGLE.total_width(), 32);
    assert_eq!(Format::DOUBLE.total_width(), 64);
  }

  #[test]
  fn parse_names() {
    assert_eq!("E4M3".parse::<Format>().unwrap(), Format::E4M3);
    assert_eq!("e5m10".parse::<Format>().unwrap(), Format::HALF);
    assert_eq!("fp32".parse::<Format>().unwrap(), Format::SINGLE);
    assert_eq!("bf16".parse::<Format>().unwrap(), Format::BFLOAT16);
    assert_eq!("1, 11, 52".parse::<Format>().unwrap(), Format::DOUBLE);
    assert_eq!("S0E8M0".parse::<Format>().unwrap(), Format::new(0, 8, 0).unwrap());
  }

  #[test]
  fn parse_rejects_garbage() {
    assert_eq!("E4".parse::<Format>(), Err(Error::UnknownFormat("E4".to_string())));
    assert!("1,2".parse::<Format>().is_err());
    assert!("1,2,3,4".parse::<Format>().is_err());
    assert!("quad".parse::<Format>().is_err());
    assert!(matches!("E0M3".parse::<Format>(), Err(Error::InvalidFormat { .. })));
  }

  #[test]
  fn display_round_trips() {
    for f in &[Format::E4M3, Format::HALF, Format::DOUBLE, Format::new(0, 8, 8).unwrap()] {
      assert_eq!(f.to_string().parse::<Format>().unwrap(), *f);
    }
    assert_eq!(Format::HALF.to_string(), "E5M10");
    assert_eq!(Format::new(0, 8, 8).unwrap().to_string(), "S0E8M8");
  }
}
