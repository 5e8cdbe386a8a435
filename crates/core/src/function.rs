/// A real-valued function of one real variable.
///
/// Implementations must be pure: the same `x` always yields the same value.
/// Nothing is validated, so a function that is undefined somewhere simply
/// returns `NaN` there and the value propagates through any caller.
///
/// Closures and function pointers implement this trait automatically.
pub trait ScalarFn {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
