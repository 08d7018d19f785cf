use crate::{Error, Float, Format};

impl Float {
  /// `+0` in the given format.
  pub fn new(format: Format) -> Float {
    Float { format, sign: 0, exp: 0, sig: 0 }
  }

  pub fn with_widths(sign_width: u32, exp_width: u32, sig_width: u32) -> Result<Float, Error> {
    Format::new(sign_width, exp_width, sig_width).map(Float::new)
  }

  pub fn from_bits(format: Format, raw: u64) -> Float {
    let mut f = Float::new(format);
    f.set_bits(raw);
    f
  }

  /// Fields wider than the format are truncated.
  pub fn from_parts(format: Format, sign: u64, exp: u64, sig: u64) -> Float {
    let mut f = Float { format, sign, exp, sig };
    f.clamp_to_format();
    f
  }

  pub fn zero(format: Format, negative: bool) -> Float {
    Float::from_parts(format, negative as u64, 0, 0)
  }

  pub fn infinite(format: Format, negative: bool) -> Float {
    Float::from_parts(format, negative as u64, format.exp_max(), 0)
  }

  pub fn default_nan(format: Format) -> Float {
    Float::from_parts(format, 1, format.exp_max(), format.quiet_bit())
  }
}
