//! All three solvers attack the same problem and should land on the same point.

use lagrange_core::{CentralDifference, EqualityProblem, reference};
use lagrange_solvers::{penalty, primal_dual, stationary};

fn solve_all<P: EqualityProblem>(problem: &P, diff: &CentralDifference) -> [f64; 3] {
    let stationary = stationary::solve_unobserved(problem, diff, &stationary::Config::default());
    let primal_dual =
        primal_dual::solve_unobserved(problem, diff, &primal_dual::Config::default());
    let penalty = penalty::solve_unobserved(problem, diff, &penalty::Config::default());

    assert_eq!(stationary.status, stationary::Status::Converged);
    assert_eq!(primal_dual.status, primal_dual::Status::Converged);
    assert_eq!(penalty.status, penalty::Status::Converged);

    [stationary.x, primal_dual.x, penalty.x]
}

#[test]
fn solvers_agree_on_reference_problem() {
    let xs = solve_all(&reference::problem(), &CentralDifference::default());

    for a in xs {
        for b in xs {
            assert!((a - b).abs() < 1e-2, "{a} and {b} disagree");
        }
    }
}

#[test]
fn every_solution_is_feasible() {
    let problem = reference::problem();
    let xs = solve_all(&problem, &CentralDifference::default());

    for x in xs {
        assert!(problem.residual(x) < 1e-3, "x = {x} is infeasible");
    }
}

#[test]
fn smaller_step_does_not_move_the_answer() {
    let problem = reference::problem();
    let coarse = solve_all(&problem, &CentralDifference::default());
    let fine = solve_all(&problem, &CentralDifference::new(1e-4).unwrap());

    for (a, b) in coarse.into_iter().zip(fine) {
        assert!((a - b).abs() < 1e-6);
    }
}
