use nalgebra::{
    allocator::Allocator, storage::RawStorage, DefaultAllocator, Dim, Matrix, OMatrix,
};

/// Smallest output of [`logistic_scalar`], `2^-53`
const LOGISTIC_MIN: f64 = f64::EPSILON / 2.0;
/// Largest output of [`logistic_scalar`], `1 - 2^-53` is exactly representable
const LOGISTIC_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// The logistic function `1 / (1 + e^-z)`.
/// Negative inputs use the equivalent `e^z / (1 + e^z)` so that the
/// exponential never overflows. The result is clamped into
/// `[2^-53, 1 - 2^-53]`, keeping it inside the open unit interval for any input.
#[inline(always)]
pub fn logistic_scalar(z: f64) -> f64 {
    let p = if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    };
    p.clamp(LOGISTIC_MIN, LOGISTIC_MAX)
}

/// Apply the logistic function to every entry, for vectors and matrices alike
pub fn logistic<R, C, S>(z: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
    DefaultAllocator: Allocator<f64, R, C>,
{
    z.map(logistic_scalar)
}

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};
    use round::round;

    use super::*;

    #[test]
    fn logistic_of_zero() {
        assert_eq!(logistic_scalar(0.0), 0.5);
        assert_eq!(logistic(&DVector::from_vec(vec![0.0, 0.0])), DVector::from_vec(vec![0.5, 0.5]));
    }

    #[test]
    fn keeps_shape() {
        let z = DMatrix::from_row_slice(2, 3, &[0.0, 1.0, -1.0, 2.0, -2.0, 0.0]);
        let p = logistic(&z);

        assert_eq!(p.shape(), (2, 3));
        assert_eq!(p[(0, 0)], 0.5);
        assert_eq!(p[(1, 2)], 0.5);
    }

    #[test]
    fn monotonic_and_bounded() {
        let zs: Vec<f64> = (-300..=300).map(|i| i as f64 * 0.1).collect();
        let p = logistic(&DVector::from_vec(zs));

        for w in p.as_slice().windows(2) {
            assert!(w[0] <= w[1]);
        }
        for v in p.iter() {
            assert!(*v > 0.0 && *v < 1.0);
        }
    }

    #[test]
    fn symmetric() {
        for z in [0.1, 0.5, 1.0, 3.0, 7.5, 20.0] {
            assert_eq!(round(logistic_scalar(-z), 12), round(1.0 - logistic_scalar(z), 12));
        }
    }

    #[test]
    fn extreme_inputs_stay_in_open_interval() {
        let zs = vec![-1e6, -800.0, -746.0, -40.0, 37.0, 40.0, 745.0, 800.0, 1e6];
        let p = logistic(&DVector::from_vec(zs));

        for v in p.iter() {
            assert!(0.0 < *v && *v < 1.0, "got: {}", v);
        }
    }

    #[test]
    fn saturated_outputs_stay_symmetric() {
        for z in [37.0, 40.0, 745.0, 800.0, 1e6] {
            assert_eq!(logistic_scalar(-z), 1.0 - logistic_scalar(z));
        }
        assert_eq!(logistic_scalar(f64::MAX), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(logistic_scalar(f64::MIN), f64::EPSILON / 2.0);
    }
}
