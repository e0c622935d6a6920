#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::runner::{Measurement, run_timed};

    #[test]
    fn test_runs_exactly_n_iterations() {
        let mut calls = 0u64;
        let m = run_timed(10, || {
            calls += 1;
            calls
        })
        .expect("run_timed");
        assert_eq!(calls, 10);
        assert_eq!(m.iterations, 10);
        // The stored result is the value of the final iteration.
        assert_eq!(m.result, 10);
    }

    #[test]
    fn test_single_iteration() {
        let m = run_timed(1, || 7).expect("run_timed");
        assert_eq!(m.iterations, 1);
        assert_eq!(m.result, 7);
    }

    #[test]
    fn test_zero_iterations_is_an_error() {
        let err = run_timed(0, || 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_elapsed_scaling() {
        let m = Measurement {
            iterations: 1,
            elapsed: Duration::from_nanos(1_500_000),
            result: (),
        };
        assert!((m.elapsed_millis() - 1.5).abs() < 1e-9);
        assert!((m.elapsed_secs() - 0.0015).abs() < 1e-12);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let m = run_timed(3, || 17).expect("run_timed");
        m.verify(&17).expect("matching result verifies");
        let err = m.verify(&18).unwrap_err();
        assert!(err.to_string().contains("expected 18"));
    }
}
