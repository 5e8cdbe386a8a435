//! Plot data for a solved problem.
//!
//! A [`Scene`] holds everything the solution plot draws: both problem curves
//! sampled over [`DOMAIN`], the target line, the critical point on each
//! curve, and optionally the path the solver took. Building it needs no
//! graphics dependencies, so it is always available.

use lagrange_core::EqualityProblem;

/// The x range over which curves are sampled.
pub const DOMAIN: [f64; 2] = [-15.0, 15.0];

/// Number of samples per curve, endpoints included.
pub const SAMPLES: usize = 100;

/// The initially visible range on both axes.
pub const WINDOW: [f64; 2] = [-10.0, 10.0];

/// The critical point as it appears on each curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Critical {
    pub x: f64,
    pub objective: f64,
    pub surface: f64,
}

impl Critical {
    /// The annotation placed above the point on the objective curve.
    #[must_use]
    pub fn label(&self) -> String {
        format!("({:.2}, {:.2})", self.x, self.objective)
    }
}

/// Everything needed to draw a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// `(x, f(x))` samples.
    pub objective: Vec<[f64; 2]>,

    /// `(x, g0(x))` samples.
    pub surface: Vec<[f64; 2]>,

    /// The constraint target `C`, drawn as a horizontal line.
    pub target: f64,

    /// The reported solution.
    pub critical: Critical,

    /// `(xᵢ, f(xᵢ))` for each iterate, if a history was supplied.
    pub path: Option<Vec<[f64; 2]>>,
}

impl Scene {
    /// Builds the scene for `problem` with solution `x_critical`.
    pub fn new<P: EqualityProblem>(problem: &P, x_critical: f64, history: Option<&[f64]>) -> Self {
        let sample = |function: &dyn Fn(f64) -> f64| -> Vec<[f64; 2]> {
            linspace(DOMAIN, SAMPLES).map(|x| [x, function(x)]).collect()
        };

        Self {
            objective: sample(&|x: f64| problem.objective(x)),
            surface: sample(&|x: f64| problem.surface(x)),
            target: problem.target(),
            critical: Critical {
                x: x_critical,
                objective: problem.objective(x_critical),
                surface: problem.surface(x_critical),
            },
            path: history.map(|xs| xs.iter().map(|&x| [x, problem.objective(x)]).collect()),
        }
    }

    /// The `(min, max)` corners of the displayed area.
    ///
    /// Fixed at [`WINDOW`] on both axes rather than fitted to the samples,
    /// which reach far outside it at the ends of [`DOMAIN`].
    #[must_use]
    pub fn view(&self) -> ([f64; 2], [f64; 2]) {
        ([WINDOW[0], WINDOW[0]], [WINDOW[1], WINDOW[1]])
    }
}

/// `n` evenly spaced values from `range[0]` to `range[1]` inclusive.
fn linspace(range: [f64; 2], n: usize) -> impl Iterator<Item = f64> {
    let [start, end] = range;
    let spacing = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if i + 1 == n && n > 1 {
            end
        } else {
            start + spacing * i as f64
        }
    })
}
