//! Floating point values with a sign/exponent/significand layout chosen at
//! run time, and truncating arithmetic between them.

mod constant;
mod constructor;
mod exception;
mod format;
mod getter;
mod mac;
mod ops;
mod status;
mod util;

use std::fmt;

pub use exception::*;
pub use format::Format;
pub use mac::Accumulator;
pub use ops::*;
pub use status::Status;
pub use util::same_format;

/// One custom-format value. The status is never stored; it is classified from
/// the current fields on every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Float {
    format: Format,
    sign: u64,
    exp: u64,
    sig: u64,
}

impl Float {
    /// Packs the fields MSB first: `[sign | exponent | significand]`.
    pub fn to_bits(&self) -> u64 {
        let sig_width = self.format.sig_width();
        let sign_shift = self.format.exp_width() + sig_width;
        let sign = self.sign.checked_shl(sign_shift).unwrap_or(0);

        sign | (self.exp << sig_width) | self.sig
    }

    pub fn set_bits(&mut self, raw: u64) {
        let sig_width = self.format.sig_width();
        let sign_shift = self.format.exp_width() + sig_width;

        self.sig = raw & self.format.sig_max();
        self.exp = (raw >> sig_width) & self.format.exp_max();
        self.sign = raw.checked_shr(sign_shift).unwrap_or(0) & self.format.sign_max();
    }

    /// Writes the fields as given, without masking them to the format.
    pub fn set_fields(&mut self, sign: u64, exp: u64, sig: u64) {
        self.sign = sign;
        self.exp = exp;
        self.sig = sig;
    }

    /// Masks every field to its width, silently dropping overflow bits.
    /// Returns whether anything was dropped.
    pub fn clamp_to_format(&mut self) -> bool {
        let sign = self.sign & self.format.sign_max();
        let exp = self.exp & self.format.exp_max();
        let sig = self.sig & self.format.sig_max();
        let truncated = (sign, exp, sig) != (self.sign, self.exp, self.sig);

        if truncated {
            log::trace!(
                "clamp to {}: ({:#x}, {:#x}, {:#x}) -> ({:#x}, {:#x}, {:#x})",
                self.format, self.sign, self.exp, self.sig, sign, exp, sig
            );
        }

        self.sign = sign;
        self.exp = exp;
        self.sig = sig;
        truncated
    }

    /// Diagnostic reading `fraction * 2^(exp - bias)`, where the implicit bit is
    /// dropped whenever the exponent field is zero. Every bit pattern goes
    /// through the same formula, so subnormals come out at half their value and
    /// Infinity/NaN as large finite numbers. See [`to_f64`](Float::to_f64).
    pub fn approximate(&self) -> f64 {
        let fraction = self.sig as f64 / 2f64.powi(self.format.sig_width() as i32);
        let fraction = if self.exp == 0 { fraction } else { 1.0 + fraction };

        scale(self.is_negative(), fraction, self.exp as i64 - self.format.bias())
    }

    /// Nearest `f64` under IEEE754 rules: subnormals use exponent `1 - bias`,
    /// Infinity and NaN map to their `f64` counterparts.
    pub fn to_f64(&self) -> f64 {
        let negative = self.is_negative();
        match self.status() {
            Status::NaN => return f64::NAN,
            Status::Infinity => return if negative { f64::NEG_INFINITY } else { f64::INFINITY },
            _ => {}
        }

        let fraction = self.sig as f64 / 2f64.powi(self.format.sig_width() as i32);
        if self.exp == 0 {
            scale(negative, fraction, 1 - self.format.bias())
        } else {
            scale(negative, 1.0 + fraction, self.exp as i64 - self.format.bias())
        }
    }
}

fn scale(negative: bool, fraction: f64, exp: i64) -> f64 {
    // two steps keep 2^exp finite across the whole f64 range
    let exp = exp.max(-4000).min(4000) as i32;
    let value = fraction * 2f64.powi(exp / 2) * 2f64.powi(exp - exp / 2);
    if negative { -value } else { value }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.sign, self.exp, self.sig, self.status())
    }
}
