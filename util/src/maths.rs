//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Return the euclidian norm (distance between) of two points.
///
/// If the points do not have the same number of dimentions then `None` is
/// returned.
pub fn norm<T>(point_0: &[T], point_1: &[T]) -> Option<T>
where
    T: Float + std::ops::AddAssign
{
    // Check that the dimentions match
    if point_0.len() != point_1.len() {
        return None;
    }

    // Sum all elements of the points
    let mut sum = T::from(0).unwrap();

    for i in 0..point_0.len() {
        sum += (point_0[i] - point_1[i]).powi(2);
    }

    // Return the squareroot of the sum
    Some(sum.sqrt())
}

/// Return the largest componentwise absolute difference between two points.
///
/// This is the convergence measure used by the simulation drivers. If the
/// points do not have the same number of dimentions then `None` is returned.
pub fn max_abs_diff<T>(point_0: &[T], point_1: &[T]) -> Option<T>
where
    T: Float
{
    if point_0.len() != point_1.len() {
        return None;
    }

    let mut max = T::from(0).unwrap();

    for i in 0..point_0.len() {
        let diff = (point_0[i] - point_1[i]).abs();
        if diff > max {
            max = diff;
        }
    }

    Some(max)
}

pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float + std::ops::Mul + std::ops::Add + std::ops::AddAssign
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Limit the change of a value with respect to its previous value.
///
/// The returned value is the demand clamped into
/// `[previous - max_step, previous + max_step]`. Used by the vehicle models
/// to apply actuator rate limits over a single integration step.
pub fn rate_limit<T>(demand: T, previous: T, max_step: T) -> T
where
    T: Float + std::ops::Mul + std::ops::Add + std::ops::AddAssign
{
    clamp(&demand, &(previous - max_step), &(previous + max_step))
}

/// Wrap an angle in radians into the range (-pi, pi].
pub fn angle_wrap<T>(angle: T) -> T
where
    T: Float + std::ops::Mul + std::ops::Add + std::ops::Sub + std::ops::Rem
{
    let pi_t: T = T::from(std::f64::consts::PI).unwrap();
    let tau_t: T = T::from(std::f64::consts::TAU).unwrap();

    pi_t - rem_euclid(pi_t - angle, tau_t)
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
/// This result is not an element of the function's codomain, but it is the
/// closest floating point number in the real numbers and thus fulfills the
/// property `self == self.div_euclid(rhs) * rhs + self.rem_euclid(rhs)`
/// approximatively.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float + std::ops::Mul + std::ops::Add + std::ops::Sub + std::ops::Rem
{
    let r = lhs % rhs;
    if r < T::from(0.0).unwrap() { r + rhs.abs() } else { r }
}

#[cfg(test)]
mod test {
    use super::*;

    const PI: f64 = std::f64::consts::PI;

    #[test]
    fn test_angle_wrap() {
        assert_eq!(angle_wrap(0f64), 0f64);
        assert_eq!(angle_wrap(1f64), 1f64);
        assert_eq!(angle_wrap(-1f64), -1f64);

        // The range is (-pi, pi], so both boundaries map to +pi
        assert_eq!(angle_wrap(PI), PI);
        assert_eq!(angle_wrap(-PI), PI);

        assert!((angle_wrap(3f64 * PI) - PI).abs() < 1e-12);
        assert!((angle_wrap(2f64 * PI) - 0f64).abs() < 1e-12);
        assert!((angle_wrap(PI + 1f64) - (1f64 - PI)).abs() < 1e-12);
        assert!((angle_wrap(-PI - 1f64) - (PI - 1f64)).abs() < 1e-12);
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[0f64, 0f64], &[3f64, 4f64]), Some(5f64));
        assert_eq!(norm::<f64>(&[0f64], &[1f64, 1f64]), None);
    }

    #[test]
    fn test_max_abs_diff() {
        assert_eq!(
            max_abs_diff(&[0f64, 2f64, -1f64], &[0.5f64, 0f64, -1f64]),
            Some(2f64)
        );
        assert_eq!(max_abs_diff(&[0f64, 0f64], &[0f64, 0f64]), Some(0f64));
        assert_eq!(max_abs_diff::<f64>(&[0f64], &[1f64, 1f64]), None);
    }

    #[test]
    fn test_rate_limit() {
        assert_eq!(rate_limit(10f64, 0f64, 1f64), 1f64);
        assert_eq!(rate_limit(-10f64, 0f64, 1f64), -1f64);
        assert_eq!(rate_limit(0.5f64, 0f64, 1f64), 0.5f64);
    }
}
