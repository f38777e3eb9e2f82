use nalgebra::{Vector2, Vector4};

#[cfg(not(feature = "f64"))]
/// Floating point type used by the library
pub type Fl = f32;
#[cfg(feature = "f64")]
/// Floating point type used by the library
pub type Fl = f64;

/// Trait for numbers
pub trait IntoFl {
    /// Convert into a float
    fn into_fl(self) -> Fl;
}

macro_rules! impl_into_fl {
    ($ty:ident) => {
        impl IntoFl for $ty {
            fn into_fl(self) -> Fl {
                self as Fl
            }
        }
    };
}

impl_into_fl!(f32);
impl_into_fl!(f64);
impl_into_fl!(u8);
impl_into_fl!(i8);
impl_into_fl!(u16);
impl_into_fl!(i16);
impl_into_fl!(u32);
impl_into_fl!(i32);
impl_into_fl!(u64);
impl_into_fl!(i64);
impl_into_fl!(usize);
impl_into_fl!(isize);

macro_rules! impl_vec_n {
    ( $vec:ident[$len:expr], $inner:ident, $serde:ident=$serde_str:literal; $( $name:ident: $ty_name:ident ),* ) => {
        #[doc = concat!("A ", stringify!($len), "-dimensional vector of floating point numbers")]
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(::serde::Deserialize, ::serde::Serialize),
            serde(from = $serde_str, into = $serde_str)
        )]
        pub struct $vec(pub $inner<Fl>);

        impl $vec {
            #[inline(always)]
            /// Create a vector from a set of numbers
            pub fn new( $($name: impl IntoFl,)* ) -> Self {
                Self($inner::new( $($name.into_fl(),)* ))
            }
            $(
                #[inline(always)]
                #[doc = concat!("Access the ", stringify!($name), " component of this vector")]
                pub fn $name(&self) -> Fl {
                    self.0.$name
                }
            )*
        }
        impl<$($ty_name: IntoFl,)*> From<($($ty_name,)*)> for $vec {
            /// Convert from a tuple of numbers to a vector
            #[inline(always)]
            fn from(($($name,)*): ($($ty_name,)*)) -> Self {
                Self::new($($name,)*)
            }
        }
        impl From<$inner<Fl>> for $vec {
            /// Convert from an nalgebra vector
            #[inline(always)]
            fn from(inner: $inner<Fl>) -> Self {
                Self(inner)
            }
        }
        impl std::ops::Deref for $vec {
            type Target = $inner<Fl>;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::Add<$vec> for $vec {
            type Output = $vec;

            #[inline(always)]
            /// Add two vectors (component-wise)
            fn add(self, rhs: Self) -> Self::Output {
                Self::new($(self.$name() + rhs.$name(),)*)
            }
        }

        impl ::std::ops::Sub<$vec> for $vec {
            type Output = $vec;

            #[inline(always)]
            /// Subtract two vectors (component-wise)
            fn sub(self, rhs: Self) -> Self::Output {
                Self::new($(self.$name() - rhs.$name(),)*)
            }
        }

        impl ::std::ops::Mul<Fl> for $vec {
            type Output = $vec;

            #[inline(always)]
            /// Multiply a vector with a number
            fn mul(self, rhs: Fl) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        #[cfg(feature = "serde")]
        #[doc(hidden)]
        #[derive(Debug, ::serde::Deserialize, ::serde::Serialize)]
        struct $serde {
            $(
                $name: Fl,
            )*
        }

        #[cfg(feature = "serde")]
        impl From<$vec> for $serde {
            fn from(vec: $vec) -> Self {
                Self {
                    $(
                        $name: vec.$name(),
                    )*
                }
            }
        }

        #[cfg(feature = "serde")]
        impl From<$serde> for $vec {
            fn from(vec: $serde) -> Self {
                Self::new(
                    $(
                        vec.$name,
                    )*
                )
            }
        }
    };
}

impl_vec_n!(Vec2[2], Vector2, SerdeVec2="SerdeVec2"; x: T, y: U);
impl_vec_n!(Vec4[4], Vector4, SerdeVec4="SerdeVec4"; x: T, y: U, z: V, w: W);

impl Vec2 {
    /// Unit vector pointing `degrees` counter-clockwise from the positive x axis
    #[inline]
    pub fn from_heading(degrees: Fl) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::new(c, s)
    }
    /// Return the euclidian length of this vector
    pub fn length(&self) -> Fl {
        (self.0.x.powi(2) + self.0.y.powi(2)).sqrt()
    }
    /// Distance between two points
    pub fn distance(&self, other: Vec2) -> Fl {
        (*self - other).length()
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: Fl) -> Fl {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Good set of default imports
pub mod prelude {
    pub use super::Fl;
    pub use super::IntoFl;
    pub use super::Vec2;
    pub use super::Vec4;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Fl = 1e-4;

    #[test]
    fn heading_vectors_point_counter_clockwise() {
        let east = Vec2::from_heading(0.0);
        let north = Vec2::from_heading(90.0);
        let west = Vec2::from_heading(180.0);
        assert!(east.distance(Vec2::new(1, 0)) < EPS);
        assert!(north.distance(Vec2::new(0, 1)) < EPS);
        assert!(west.distance(Vec2::new(-1, 0)) < EPS);
    }

    #[test]
    fn degrees_wrap_into_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }
}
