use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the element types a `Tensor` can hold.
///
/// Bounds the floats (`f32`, `f64`) usable by the forward kernels and the
/// backward rules. `Float` already provides `zero()`, `one()`, `exp()`,
/// `tanh()` and `powf()`. The two conversions below let the gradient checker
/// and the random constructors work in `f64` regardless of `T`.
pub trait NumericElement: Float + NumAssignOps + Debug + Display + Default + 'static {
    fn from_f64(v: f64) -> Self;
    fn as_f64(self) -> f64;
}

macro_rules! numeric_element {
    ($ty:ty, $from_f64:expr, $as_f64:expr) => {
        impl NumericElement for $ty {
            fn from_f64(v: f64) -> Self {
                $from_f64(v)
            }

            fn as_f64(self) -> f64 {
                $as_f64(self)
            }
        }
    };
}

numeric_element!(f32, |v: f64| v as f32, |v: f32| v as f64);
numeric_element!(f64, |v: f64| v, |v: f64| v);
