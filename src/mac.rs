use crate::{add, mul, Error, Exception, Float, Format};

/// Multiply-accumulate into a running value of a fixed format, typically wider
/// than the operands'. Exception flags accrue until [`reset`](Accumulator::reset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
  acc: Float,
  exception: Exception,
}

impl Accumulator {
  pub fn new(format: Format) -> Accumulator {
    Accumulator {
      acc: Float::new(format),
      exception: Exception::none(),
    }
  }

  pub fn value(&self) -> Float {
    self.acc
  }

  pub fn exception(&self) -> Exception {
    self.exception
  }

  pub fn reset(&mut self) {
    self.acc = Float::new(self.acc.format());
    self.exception = Exception::none();
  }

  /// `acc += a * b`. The product is truncated to the accumulator format
  /// before the addition, so the operands may use any formats.
  pub fn accumulate(&mut self, a: &Float, b: &Float) -> Result<Exception, Error> {
    let format = self.acc.format();
    let mut product = Float::new(format);
    let mut sum = Float::new(format);

    let exception = mul(a, b, &mut product)? | add(&product, &self.acc, &mut sum)?;

    self.acc = sum;
    self.exception |= exception;
    Ok(exception)
  }

  /// Accumulates `xs[i] * ys[i]` for every `i`, in order.
  pub fn dot(&mut self, xs: &[Float], ys: &[Float]) -> Result<Float, Error> {
    if xs.len() != ys.len() {
      return Err(Error::LengthMismatch { lhs: xs.len(), rhs: ys.len() });
    }

    for (x, y) in xs.iter().zip(ys) {
      self.accumulate(x, y)?;
    }
    log::trace!("dot of {} pairs -> {} ({})", xs.len(), self.acc, self.exception);

    Ok(self.acc)
  }
}
