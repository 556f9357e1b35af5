use conv::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating-point number trait, implemented for [f32] and [f64] only
pub trait Float:
    'static
    + num_traits::Float
    + num_traits::FloatConst
    + Sum
    + ValueFrom<usize>
    + ValueFrom<i64>
    + ValueFrom<f32>
    + Clone
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + Serialize
    + DeserializeOwned
{
    fn half() -> Self;
    fn two() -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }
}
