use either::Either;
use crate::{Exception, Float, Format, Status};

/// True when both values use the identical sign/exponent/significand widths.
pub fn same_format(a: &Float, b: &Float) -> bool {
  a.format() == b.format()
}

/// A finite magnitude `sig * 2^(exp - frac_width)` with the implicit bit
/// already restored. Operators work on copies of these, never on their inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Unpacked {
  pub negative: bool,
  pub exp: i64,
  pub sig: u128,
  pub frac_width: u32,
}

impl Unpacked {
  pub fn is_zero(&self) -> bool {
    self.sig == 0
  }

  // Moves the leading one of a subnormal significand up to the implicit position.
  pub fn normalized(self) -> Unpacked {
    if self.sig == 0 {
      return self;
    }
    let msb = msb(self.sig);
    if msb >= self.frac_width {
      return self;
    }
    let shamt = self.frac_width - msb;

    Unpacked { exp: self.exp - i64::from(shamt), sig: self.sig << shamt, ..self }
  }
}

/// Left for Infinity and NaN, which have no magnitude to combine.
pub(crate) fn unpack(f: &Float) -> Either<Status, Unpacked> {
  let format = f.format();
  let (exp, sig) = match f.status() {
    status @ Status::Infinity | status @ Status::NaN => return Either::Left(status),
    // exponent field 0 means the same scale as field 1, without the implicit bit
    Status::Zero | Status::Subnormal => (1 - format.bias(), f.sig()),
    Status::Normal => (f.exp() as i64 - format.bias(), f.sig() | format.hidden_bit()),
  };

  Either::Right(Unpacked {
    negative: f.is_negative(),
    exp,
    sig: u128::from(sig),
    frac_width: format.sig_width(),
  })
}

/// Shifts the significand right until `value.exp == target_exp`. Only ever
/// lowers precision of the smaller-exponent operand; a value already at or
/// above the target is left alone. Returns whether set bits were dropped.
pub(crate) fn align_to(value: &mut Unpacked, target_exp: i64) -> bool {
  if value.exp >= target_exp {
    return false;
  }
  let shamt = (target_exp - value.exp) as u64;
  let (sig, lost) = right_shift(value.sig, shamt);

  value.sig = sig;
  value.exp = target_exp;
  lost
}

/// Truncating right shift; the flag tells whether any set bit fell off.
pub(crate) fn right_shift(sig: u128, shamt: u64) -> (u128, bool) {
  if shamt >= 128 {
    (0, sig != 0)
  } else {
    let lost = sig & ((1u128 << shamt) - 1);
    (sig >> shamt, lost != 0)
  }
}

fn msb(sig: u128) -> u32 {
  127 - sig.leading_zeros()
}

/// Encodes `value` in `format`: re-biases the exponent, drops the implicit bit and
/// truncates the significand to the format's width. Values below the normal range
/// become subnormal. An exponent at or past the reserved all-ones pattern keeps the
/// silent modulo truncation of the field and raises `OVERFLOW`.
pub(crate) fn pack(value: Unpacked, format: Format) -> (Float, Exception) {
  if value.sig == 0 {
    return (Float::zero(format, value.negative), Exception::none());
  }

  let sign = value.negative as u64;
  let sig_width = format.sig_width();
  let msb = msb(value.sig);
  let exp = value.exp + i64::from(msb) - i64::from(value.frac_width);
  let biased = exp + format.bias();

  if biased <= 0 {
    // scale of the subnormal ulp: 2^(1 - bias - sig_width)
    let shamt = value.exp - i64::from(value.frac_width) - 1 + format.bias() + i64::from(sig_width);
    let (sig, lost) = if shamt >= 0 {
      (value.sig << shamt, false)
    } else {
      right_shift(value.sig, shamt.unsigned_abs())
    };
    let exception = if lost {
      Exception::underflow() | Exception::inexact()
    } else {
      Exception::none()
    };

    return (Float::from_parts(format, sign, 0, sig as u64), exception);
  }

  let (sig, lost) = if msb >= sig_width {
    right_shift(value.sig, u64::from(msb - sig_width))
  } else {
    (value.sig << (sig_width - msb), false)
  };
  let mut exception = Exception::inexact_if(lost);

  if biased as u64 >= format.exp_max() {
    log::debug!("exponent {} overflows {} (max field value {})", biased, format, format.exp_max());
    exception |= Exception::overflow() | Exception::inexact();
  }

  (Float::from_parts(format, sign, biased as u64, sig as u64 & format.sig_max()), exception)
}
