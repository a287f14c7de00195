//! Error norms between exact and approximate value sets

use core::slice;

use itertools::izip;
use num::traits::Float;

/// Operands accepted by [`l_inf`]: scalars or flat collections of scalars.
pub trait LinfOperand<T: Float> {
    /// View the operand as a slice of values.
    fn values(&self) -> &[T];
}

impl LinfOperand<f64> for f64 {
    fn values(&self) -> &[f64] {
        slice::from_ref(self)
    }
}

impl LinfOperand<f32> for f32 {
    fn values(&self) -> &[f32] {
        slice::from_ref(self)
    }
}

impl<T: Float> LinfOperand<T> for [T] {
    fn values(&self) -> &[T] {
        self
    }
}

impl<T: Float, const N: usize> LinfOperand<T> for [T; N] {
    fn values(&self) -> &[T] {
        self
    }
}

impl<T: Float> LinfOperand<T> for Vec<T> {
    fn values(&self) -> &[T] {
        self
    }
}

/// Return the L-infinity norm of the difference between two value sets.
///
/// For two scalars this is their absolute difference; for two collections the
/// maximum absolute elementwise difference. Returns `None` when the
/// collection lengths disagree.
pub fn l_inf<T, V>(exact: &V, approx: &V) -> Option<T>
where
    T: Float,
    V: LinfOperand<T> + ?Sized,
{
    let exact = exact.values();
    let approx = approx.values();

    if exact.len() != approx.len() {
        return None;
    }

    Some(
        izip!(exact, approx)
            .map(|(&exact, &approx)| (exact - approx).abs())
            .fold(T::zero(), T::max),
    )
}
