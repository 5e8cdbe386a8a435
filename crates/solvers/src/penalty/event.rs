/// Event emitted by the penalty solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration that took the step, starting at 1.
    pub iter: usize,

    /// x after the step.
    pub x: f64,

    /// The feasibility gap `|g(x)|` after the step.
    pub residual: f64,
}
