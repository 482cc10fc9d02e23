use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Sub, SubAssign},
};

/// Primitive types the kernel can operate on.
/// Input samples, centroids and the resulting distortion all share this type.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Div + DivAssign + Zero + Float + NumCast
                + SampleUniform + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static
                + for<'a> AddAssign<&'a Self> + for<'a> Sub<&'a Self> {}
impl Primitive for f32 {}
impl Primitive for f64 {}
