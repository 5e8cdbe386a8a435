use approx::assert_relative_eq;

use lagrange_core::{CentralDifference, EqualityProblem, reference};

use super::{Action, Config, Event, Status, solve, solve_unobserved};

#[test]
fn converges_within_iteration_budget() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve_unobserved(&problem, &diff, &Config::default());

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 5000);
    assert!(solution.residual() < 1e-3);
    assert_relative_eq!(solution.x, 1.0 + 1.2_f64.sqrt(), epsilon = 1e-2);
}

#[test]
fn history_records_every_step() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve_unobserved(&problem, &diff, &Config::default());

    assert_eq!(solution.history.len(), solution.iters + 1);
    assert_relative_eq!(solution.history[0], 5.0);
    assert_relative_eq!(*solution.history.last().unwrap(), solution.x);
}

#[test]
fn solution_reports_constraint_values() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve_unobserved(&problem, &diff, &Config::default());

    assert_relative_eq!(solution.constraint, problem.constraint(solution.x));
    assert_relative_eq!(solution.surface, problem.surface(solution.x));
    assert_eq!(
        solution.to_string(),
        format!(
            "x={:.5}, g(x)={:.5}, g0(x)={:.5}",
            solution.x, solution.constraint, solution.surface
        )
    );
}

#[test]
fn larger_penalty_tightens_feasibility() {
    // With a zero tolerance the run settles on the minimizer of
    // f + ρ·g²/2, where |g| shrinks roughly like 1/ρ.
    let problem = reference::problem();
    let diff = CentralDifference::default();
    let base = Config::default()
        .with_learning_rate(0.001)
        .and_then(|c| c.with_residual_tol(0.0))
        .unwrap();

    let gap = |penalty: f64| {
        let config = base.with_penalty(penalty).unwrap();
        let solution = solve_unobserved(&problem, &diff, &config);
        assert_eq!(solution.status, Status::Exhausted);
        solution.residual()
    };

    let loose = gap(3.0);
    let tight = gap(10.0);

    assert!(loose.is_finite() && tight.is_finite());
    assert!(tight < loose);
    assert!(tight < 0.01);
}

#[test]
fn stiff_penalty_is_tagged_exhausted() {
    let problem = reference::problem();
    let diff = CentralDifference::default();
    let config = Config::default().with_penalty(10.0).unwrap();

    let solution = solve_unobserved(&problem, &diff, &config);

    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.iters, config.max_iters());
    assert_eq!(solution.history.len(), config.max_iters() + 1);
}

#[test]
fn events_follow_history() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let mut events = Vec::new();
    let solution = solve(
        &problem,
        &diff,
        &Config::default(),
        |event: &Event| {
            events.push(*event);
            None
        },
    );

    assert_eq!(events.len(), solution.iters);
    for event in &events {
        assert_relative_eq!(event.x, solution.history[event.iter]);
        assert_relative_eq!(event.residual, problem.residual(event.x));
    }
}

#[test]
fn observer_can_stop_early() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve(
        &problem,
        &diff,
        &Config::default(),
        |event: &Event| (event.iter == 5).then_some(Action::StopEarly),
    );

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.history.len(), 6);
}
