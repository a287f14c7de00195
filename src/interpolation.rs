//! Support routines for barycentric interpolation

use core::ops::{AddAssign, MulAssign};

use itertools::izip;
use num::traits::{Float, FloatConst};

use crate::cheb_points::{barycentric_weights, chebyshev_nodes};

/// Evaluate the barycentric interpolant at each evaluation point.
///
/// `interp_nodes`, `interp_values` and `interp_weights` must have equal
/// lengths; `None` is returned when they disagree. An evaluation point that
/// coincides exactly with an interpolation node takes the stored value at the
/// first such node, which keeps the formula free of zero denominators.
pub fn evaluate_1d<T: Float + AddAssign>(
    eval_points: &[T],
    interp_nodes: &[T],
    interp_values: &[T],
    interp_weights: &[T],
) -> Option<Vec<T>> {
    let nnodes = interp_nodes.len();
    if nnodes != interp_values.len() || nnodes != interp_weights.len() {
        return None;
    }

    let mut result = Vec::with_capacity(eval_points.len());

    for &eval_point in eval_points {
        if let Some(index) = interp_nodes.iter().position(|&node| node == eval_point) {
            result.push(interp_values[index]);
            continue;
        }

        let mut nominator = T::zero();
        let mut denominator = T::zero();
        for (&interp_node, &interp_value, &interp_weight) in
            izip!(interp_nodes, interp_values, interp_weights)
        {
            let inv_diff = interp_weight / (eval_point - interp_node);
            nominator += inv_diff * interp_value;
            denominator += inv_diff;
        }

        result.push(nominator / denominator);
    }

    Some(result)
}

/// Interpolate values sampled at the Chebychev points of the second kind.
///
/// `interp_values[i]` is the sample at the i-th Chebychev point in ascending
/// order. Returns `None` when `interp_values` is empty.
pub fn cheb1d<T: Float + FloatConst + AddAssign + MulAssign>(
    eval_points: &[T],
    interp_values: &[T],
) -> Option<Vec<T>> {
    let n = interp_values.len();

    let nodes = chebyshev_nodes::<T>(n)?;
    let weights = barycentric_weights::<T>(n)?;

    evaluate_1d(eval_points, &nodes, interp_values, &weights)
}
