/// Event emitted by the primal-dual solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration that took the step, starting at 1.
    pub iter: usize,

    /// The primal variable after the step.
    pub x: f64,

    /// The multiplier after the step.
    pub lambda: f64,

    /// The feasibility gap `|g(x)|` after the step.
    pub residual: f64,
}
