use std::ops::Mul;
use either::Either;
use crate::{
    Exception,
    Float,
    Format,
    Status,
};
use crate::util::*;

impl Mul for Float {
    type Output = Float;

    fn mul(self, other: Float) -> Float {
        self.mul_with_format(&other, self.format()).0
    }
}

impl Float {
    /// Operands may use different formats; the product is encoded in `format`.
    pub fn mul_with_format(&self, other: &Float, format: Format) -> (Float, Exception) {
        mul_impl(self, other, format)
    }
}

/// `result = a * b` in `result`'s format. Never fails; the operands may use any formats.
pub fn mul(a: &Float, b: &Float, result: &mut Float) -> Result<Exception, crate::Error> {
    let (product, exception) = a.mul_with_format(b, result.format());
    *result = product;
    Ok(exception)
}

pub(crate) fn mul_impl(fx: &Float, fy: &Float, format: Format) -> (Float, Exception) {
    log::trace!("{} * {} -> {}", fx, fy, format);

    let sign = fx.is_negative() ^ fy.is_negative();

    let (x, y) = match (unpack(fx), unpack(fy)) {
        (Either::Right(x), Either::Right(y)) => (x, y),
        (Either::Left(Status::NaN), _) | (_, Either::Left(Status::NaN)) => {
            return (Float::default_nan(format), Exception::none())
        }
        // a zero operand wins over Infinity
        (Either::Left(_), Either::Right(z)) | (Either::Right(z), Either::Left(_)) if z.is_zero() => {
            return (Float::zero(format, false), Exception::none())
        }
        _ => return (Float::infinite(format, sign), Exception::none()),
    };

    // zero multiplication derives +0, whatever the operand signs
    if x.is_zero() || y.is_zero() {
        return (Float::zero(format, false), Exception::none());
    }

    // Each operand is unbiased with its own format's bias, so operands of
    // different exponent widths combine on a common scale.
    //
    //     1.1 (frac 1)
    //   * 1.1 (frac 1)
    //   -----
    //    10.01 (frac 2)
    //
    // The product carries frac_x + frac_y fraction bits; pack() finds the
    // leading one and truncates to the result width.
    let product = Unpacked {
        negative: sign,
        exp: x.exp + y.exp,
        sig: x.sig * y.sig,
        frac_width: x.frac_width + y.frac_width,
    };

    pack(product, format)
}
