//! Two-dimensional Euclidean vectors.

use alloc::string::{String, ToString};
use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use crate::error::ParseVectorError;

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// Numeric component types whose vectors have a magnitude.
pub trait Scalar: Copy {
    /// Converts the value to `f64`, rounding to the nearest representable
    /// value for wide integers.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_lossless {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_rounding {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "magnitudes are computed in f64"
                )]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar_lossless!(i8, i16, i32, u8, u16, u32, f32);
impl_scalar_rounding!(i64, u64, i128, u128, isize, usize);

impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A 2D vector with components of any numeric type.
///
/// Components are fixed at construction. No validation is done: zero,
/// negative and non-finite values are all accepted.
///
/// ```
/// use fluentdeck::Vector2D;
///
/// let v = Vector2D::new(2, 4) + Vector2D::new(2, 1);
/// assert_eq!(v, Vector2D::new(4, 5));
/// assert_eq!(Vector2D::new(2, 1) * 8, Vector2D::new(16, 8));
/// assert_eq!(v.to_string(), "Vector2D(4, 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2D<T = f64> {
    x: T,
    y: T,
}

impl<T> Vector2D<T> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Applies `f` to both components.
    ///
    /// ```
    /// use fluentdeck::Vector2D;
    ///
    /// let v = Vector2D::new(2, 1).map(f64::from) * 0.5;
    /// assert_eq!(v, Vector2D::new(1.0, 0.5));
    /// ```
    #[must_use]
    pub fn map<U, F>(self, mut f: F) -> Vector2D<U>
    where
        F: FnMut(T) -> U,
    {
        Vector2D::new(f(self.x), f(self.y))
    }

    /// Multiplies both components by `scalar`.
    ///
    /// The scalar must be a type the component multiplies by, so an integer
    /// vector takes an integer scalar. Convert first to scale by a float:
    ///
    /// ```
    /// use fluentdeck::Vector2D;
    ///
    /// assert_eq!(Vector2D::new(2, 1).scale(8), Vector2D::new(16, 8));
    /// assert_eq!(
    ///     Vector2D::new(2, 1).map(f64::from).scale(1.5),
    ///     Vector2D::new(3.0, 1.5)
    /// );
    /// ```
    #[must_use]
    pub fn scale<S>(self, scalar: S) -> Vector2D<<T as Mul<S>>::Output>
    where
        T: Mul<S>,
        S: Copy,
    {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: Copy> Vector2D<T> {
    /// Returns the x component.
    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    /// Returns the y component.
    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> Vector2D<T> {
    /// Returns the Euclidean norm, computed without intermediate overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        hypot(self.x.to_f64(), self.y.to_f64())
    }

    /// Returns whether the vector is non-zero.
    ///
    /// NaN components make the magnitude NaN, which counts as truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }
}

impl<T: fmt::Display> Vector2D<T> {
    /// Returns the textual form, `Vector2D(x, y)`, which parses back into an
    /// equal vector.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: Add<Output = T>> Add for Vector2D<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T, S> Mul<S> for Vector2D<T>
where
    T: Mul<S>,
    S: Copy,
{
    type Output = Vector2D<<T as Mul<S>>::Output>;

    fn mul(self, scalar: S) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}

impl<T: FromStr> FromStr for Vector2D<T> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("Vector2D(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseVectorError::Malformed)?;
        let (x, y) = inner.split_once(',').ok_or(ParseVectorError::Malformed)?;
        let component = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|_| ParseVectorError::Component)
        };

        Ok(Self::new(component(x)?, component(y)?))
    }
}
