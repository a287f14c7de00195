//! Chebychev interpolation points in 1 dimension

use core::ops::MulAssign;

use num::traits::{Float, FloatConst};

/// Return the n Chebychev points of the second kind in [-1, 1].
///
/// - The Chebychev points are returned in ascending order.
/// - For `n == 1` the single point is 1.0.
/// - Returns `None` for `n == 0`.
pub fn chebyshev_nodes<T: Float + FloatConst>(n: usize) -> Option<Vec<T>> {
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(vec![T::one()]);
    }

    let pi_div_nm1 = T::PI() / num::cast::<_, T>(n - 1).unwrap();

    // cos is decreasing on [0, pi], so reversed indices come out ascending
    Some(
        (0..n)
            .rev()
            .map(|index| T::cos(num::cast::<_, T>(index).unwrap() * pi_div_nm1))
            .collect(),
    )
}

/// Return the barycentric weights for the Chebychev points of the second kind.
///
/// - The weights alternate in sign with the first and last entries halved.
/// - They depend only on the index parity, not on the point coordinates.
/// - Returns `None` for `n == 0`.
pub fn barycentric_weights<T: Float + MulAssign>(n: usize) -> Option<Vec<T>> {
    if n == 0 {
        return None;
    }

    let mut weights = vec![T::zero(); n];
    let mut pm_one = T::one();
    for value in weights.iter_mut() {
        *value = pm_one;
        pm_one = -pm_one;
    }

    let half = num::cast::<_, T>(0.5).unwrap();
    *weights.first_mut().unwrap() *= half;
    // for n == 1 the first and last index coincide
    if n > 1 {
        *weights.last_mut().unwrap() *= half;
    }

    Some(weights)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_chebyshev_nodes() {
        let n = 5;

        let values = chebyshev_nodes::<f64>(n).unwrap();

        assert_eq!(values.len(), n);
        for (index, &value) in values.iter().rev().enumerate() {
            assert_relative_eq!(
                value,
                f64::cos((index) as f64 * (f64::PI()) / (n - 1) as f64),
                epsilon = 1E-13
            );
        }
    }

    #[test]
    fn test_chebyshev_nodes_ascending() {
        let values = chebyshev_nodes::<f64>(9).unwrap();

        assert_relative_eq!(*values.first().unwrap(), -1.0, epsilon = 1E-15);
        assert_eq!(*values.last().unwrap(), 1.0);
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_chebyshev_nodes_single() {
        assert_eq!(chebyshev_nodes::<f64>(1).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_chebyshev_nodes_empty() {
        assert!(chebyshev_nodes::<f64>(0).is_none());
    }

    #[test]
    fn test_barycentric_weights() {
        let weights = barycentric_weights::<f64>(4).unwrap();

        assert_eq!(weights, vec![0.5, -1.0, 1.0, -0.5]);
    }

    #[test]
    fn test_barycentric_weights_alternating() {
        let n = 7;

        let weights = barycentric_weights::<f64>(n).unwrap();

        assert_eq!(weights.len(), n);
        for (index, &value) in weights.iter().enumerate() {
            let magnitude = if index == 0 || index == n - 1 { 0.5 } else { 1.0 };
            assert_eq!(value, magnitude * f64::powi(-1.0, index as i32));
        }
    }

    #[test]
    fn test_barycentric_weights_single() {
        assert_eq!(barycentric_weights::<f64>(1).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_barycentric_weights_empty() {
        assert!(barycentric_weights::<f64>(0).is_none());
    }
}
