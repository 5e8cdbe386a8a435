//! Console summaries for each solver.
//!
//! Every summary ends with the solution line. A convergence line comes first
//! only when the solver actually converged; any other outcome gets a note
//! naming the status instead.

use lagrange_solvers::{penalty, primal_dual, stationary};

pub fn stationary(solution: &stationary::Solution) -> Vec<String> {
    let mut lines = Vec::new();
    match solution.status {
        stationary::Status::Converged => {
            lines.push(format!("found after {} steps!", solution.iters));
        }
        status => lines.push(format!(
            "note: stopped with status {status:?} after {} steps",
            solution.iters
        )),
    }
    lines.push(solution.to_string());
    lines
}

pub fn primal_dual(solution: &primal_dual::Solution) -> Vec<String> {
    let mut lines = Vec::new();
    match solution.status {
        primal_dual::Status::Converged => {
            lines.push(format!("found after {} steps!", solution.iters));
        }
        status => lines.push(format!(
            "note: stopped with status {status:?} after {} steps",
            solution.iters
        )),
    }
    lines.push(solution.to_string());
    lines
}

pub fn penalty(solution: &penalty::Solution) -> Vec<String> {
    let mut lines = Vec::new();
    match solution.status {
        penalty::Status::Converged => lines.push(format!(
            "converged after {} steps! (g0(x) = {})",
            solution.iters, solution.surface
        )),
        status => lines.push(format!(
            "note: stopped with status {status:?} after {} steps",
            solution.iters
        )),
    }
    lines.push(solution.to_string());
    lines
}
