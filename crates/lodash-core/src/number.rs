//! Number helpers, generic over any ordered numeric type.

use crate::error::{LodashError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt::Display;

/// Numeric types [`random`] can draw from.
pub trait RandomNumber: SampleUniform + PartialOrd + Copy + Display {
    /// Whether `lower..=upper` is a span the uniform sampler accepts.
    fn has_finite_span(lower: Self, upper: Self) -> bool;
}

macro_rules! int_random_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl RandomNumber for $t {
                fn has_finite_span(_lower: Self, _upper: Self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! float_random_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl RandomNumber for $t {
                fn has_finite_span(lower: Self, upper: Self) -> bool {
                    (upper - lower).is_finite()
                }
            }
        )*
    };
}

int_random_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_random_number!(f32, f64);

fn check_bounds<T: PartialOrd + Display>(lower: T, upper: T) -> Result<()> {
    // `!(lower <= upper)` also rejects NaN bounds.
    if !(lower <= upper) {
        tracing::debug!(%lower, %upper, "rejected bounds");
        return Err(LodashError::InvalidBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(())
}

/// Clamp `number` into the inclusive range `[lower, upper]`.
///
/// # Errors
///
/// Returns [`LodashError::InvalidBounds`] when `lower > upper`.
///
/// ```
/// use lodash_core::clamp;
///
/// assert_eq!(clamp(10, 0, 5).unwrap(), 5);
/// assert_eq!(clamp(3.5, 3.0, 4.0).unwrap(), 3.5);
/// assert!(clamp(1, 5, 0).is_err());
/// ```
pub fn clamp<T: PartialOrd + Copy + Display>(number: T, lower: T, upper: T) -> Result<T> {
    check_bounds(lower, upper)?;
    Ok(if number < lower {
        lower
    } else if number > upper {
        upper
    } else {
        number
    })
}

/// Whether `number` lies in the half-open range between `start` and `end`.
///
/// The bounds may be given in either order; the smaller one is inclusive
/// and the larger one exclusive.
pub fn in_range<T: PartialOrd + Copy>(number: T, start: T, end: T) -> bool {
    let (lower, upper) = if start < end { (start, end) } else { (end, start) };
    number >= lower && number < upper
}

/// A uniformly distributed value in `[lower, upper]`, both ends inclusive.
///
/// # Errors
///
/// Returns [`LodashError::InvalidBounds`] when `lower > upper`, or when a
/// float span `upper - lower` is not finite (`f64::MIN..=f64::MAX`, infinite
/// bounds).
///
/// ```
/// use lodash_core::random;
///
/// assert!((1..=6).contains(&random(1, 6).unwrap()));
/// assert!(random(0.0, f64::INFINITY).is_err());
/// ```
pub fn random<T: RandomNumber>(lower: T, upper: T) -> Result<T> {
    random_with(&mut rand::thread_rng(), lower, upper)
}

/// [`random`] drawing from a caller-supplied generator.
pub fn random_with<R, T>(rng: &mut R, lower: T, upper: T) -> Result<T>
where
    R: Rng + ?Sized,
    T: RandomNumber,
{
    check_bounds(lower, upper)?;
    if !T::has_finite_span(lower, upper) {
        tracing::debug!(%lower, %upper, "rejected non-finite span");
        return Err(LodashError::InvalidBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(rng.gen_range(lower..=upper))
}
