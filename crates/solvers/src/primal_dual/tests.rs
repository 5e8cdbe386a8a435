use approx::assert_relative_eq;

use lagrange_core::{CentralDifference, EqualityProblem, reference};

use super::{Action, Config, Event, Status, solve, solve_unobserved};

#[test]
fn converges_within_iteration_budget() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve_unobserved(&problem, &diff, &Config::default());

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 1000);
    assert!(problem.residual(solution.x) < 1e-3);
    assert_relative_eq!(solution.x, 1.0 + 1.2_f64.sqrt(), epsilon = 1e-3);
}

#[test]
fn history_starts_at_guess_and_ends_at_solution() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let solution = solve_unobserved(&problem, &diff, &Config::default());

    // The check that converged at iteration k followed k - 1 steps.
    assert_eq!(solution.history.len(), solution.iters);
    assert_relative_eq!(solution.history[0], 5.0);
    assert_relative_eq!(*solution.history.last().unwrap(), solution.x);
}

#[test]
fn exhausted_budget_is_tagged() {
    let problem = reference::problem();
    let diff = CentralDifference::default();
    let config = Config::default().with_max_iters(50);

    let solution = solve_unobserved(&problem, &diff, &config);

    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.iters, 50);
    assert_eq!(solution.history.len(), 51);
    assert!(problem.residual(solution.x) >= 1e-3);
}

#[test]
fn summary_line_does_not_depend_on_status() {
    let problem = reference::problem();
    let diff = CentralDifference::default();

    let converged = solve_unobserved(&problem, &diff, &Config::default());
    let exhausted = solve_unobserved(&problem, &diff, &Config::default().with_max_iters(50));

    for solution in [&converged, &exhausted] {
        let line = solution.to_string();
        assert!(line.starts_with("x="));
        assert!(line.contains(", lambda="));
    }
    assert_eq!(converged.to_string(), "x=2.0954, lambda=0.0403");
}

#[test]
fn smaller_learning_rate_still_converges() {
    let problem = reference::problem();
    let diff = CentralDifference::default();
    let config = Config::default().with_learning_rate(0.05).unwrap();

    let solution = solve_unobserved(&problem, &diff, &config);

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0 + 1.2_f64.sqrt(), epsilon = 1e-3);
}

#[test]
fn events_track_each_step() {
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

    assert_eq!(events.len(), solution.history.len() - 1);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
        assert_relative_eq!(event.x, solution.history[i + 1]);
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
        |event: &Event| (event.iter >= 10).then_some(Action::StopEarly),
    );

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 10);
    assert_eq!(solution.history.len(), 11);
}

#[test]
fn feasible_guess_converges_immediately() {
    let problem = reference::problem();
    let diff = CentralDifference::default();
    let x0 = 1.0 + 1.2_f64.sqrt();
    let config = Config::new(x0, 0.0, 0.1, 999, 1e-3).unwrap();

    let solution = solve_unobserved(&problem, &diff, &config);

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.history, vec![x0]);
}
