/// Hook called by every solver after each iterate it produces.
///
/// The stationarity, primal-dual, and penalty solvers each define their own
/// event (what the iterate looked like) and action (what the caller may ask
/// for, currently only stopping early). Tracing and early stopping are
/// observers rather than solver options.
///
/// Returning `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` is an observer, and `()` is the observer that
/// never acts, used by the `solve_unobserved` entry points.
pub trait Observer<E, A> {
    /// Inspects one iterate and optionally asks the solver to act on it.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn run<Obs: Observer<usize, Stop>>(mut observer: Obs, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(run((), 10), None);
    }

    #[test]
    fn closure_observer_can_act_and_capture_state() {
        let mut seen = Vec::new();
        let stopped_at = run(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(Stop::Now)
            },
            10,
        );

        assert_eq!(stopped_at, Some(3));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
