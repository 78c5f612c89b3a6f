#[cfg(test)]
mod tests {
    use crate::plotting::sampler::{DEFAULT_STEP, Domain, PlotError, sample, sample_over};
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_round_trip() {
        let (x, y) = sample("x", 0.0, 10.0, 0.1).unwrap();
        assert_eq!(x.len(), y.len());
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_eq!(xi, yi);
        }
    }

    #[test]
    fn test_mesh_is_endpoint_inclusive() {
        // x_i = min + i*step while x_i < max + step: 101 points for [0, 10]
        let domain = Domain::new(0.0, 10.0).unwrap();
        let mesh = domain.x_mesh();
        assert_eq!(mesh.len(), 101);
        assert_eq!(mesh[0], 0.0);
        assert_relative_eq!(mesh[100], 10.0, max_relative = 1e-12);
        // the last point may exceed max_x, but never by a full step
        assert!(mesh[mesh.len() - 1] < domain.max_x + domain.step);
    }

    #[test]
    fn test_mesh_is_evenly_spaced() {
        let domain = Domain::with_step(-1.0, 1.0, 0.25).unwrap();
        let mesh = domain.x_mesh();
        for i in 1..mesh.len() {
            assert_relative_eq!(mesh[i] - mesh[i - 1], 0.25, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_parabola_values() {
        let (x, y) = sample("x^2", -2.0, 2.0, 0.1).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, xi * xi, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negated_parabola_values() {
        let (x, y) = sample("-x^2", 1.0, 2.0, 0.5).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, -(xi * xi), epsilon = 1e-12);
        }
        assert!(y.iter().all(|&v| v < 0.0));
    }

    #[test]
    fn test_python_style_power_alias() {
        let (x, y) = sample("x ** 2", -2.0, 2.0, 0.1).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, xi * xi, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equal_bounds_fail_before_evaluation() {
        let result = sample("x", 5.0, 5.0, 0.1);
        assert!(matches!(result, Err(PlotError::InvalidBounds(_))));
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let result = sample("x", 2.0, -2.0, 0.1);
        assert!(matches!(result, Err(PlotError::InvalidBounds(_))));
    }

    #[test]
    fn test_non_positive_step_rejected() {
        assert!(matches!(
            Domain::with_step(0.0, 1.0, 0.0),
            Err(PlotError::InvalidBounds(_))
        ));
        assert!(matches!(
            Domain::with_step(0.0, 1.0, -0.1),
            Err(PlotError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(matches!(
            Domain::new(f64::NAN, 1.0),
            Err(PlotError::InvalidBounds(_))
        ));
        assert!(matches!(
            Domain::new(0.0, f64::INFINITY),
            Err(PlotError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_empty_expression_is_missing_input() {
        let result = sample("", 0.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::MissingInput(_))));
        // whitespace-only input normalizes to empty as well
        let result = sample("   ", 0.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::MissingInput(_))));
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        // the mesh -1 + i*0.1 hits x = 0 exactly at i = 10
        let result = sample("1/x", -1.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::DomainError(_))));
    }

    #[test]
    fn test_log_of_negative_is_domain_error() {
        let result = sample("ln(x)", -1.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::DomainError(_))));
    }

    #[test]
    fn test_sqrt_of_negative_is_domain_error() {
        let result = sample("sqrt(x)", -1.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::DomainError(_))));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let result = sample("x + y", 0.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::InvalidExpression(_))));
    }

    #[test]
    fn test_garbage_expression_rejected() {
        let result = sample("x +* 2", 0.0, 1.0, 0.1);
        assert!(matches!(result, Err(PlotError::InvalidExpression(_))));
    }

    #[test]
    fn test_constant_expression_sampled() {
        let (x, y) = sample("2", 0.0, 1.0, 0.1).unwrap();
        assert_eq!(x.len(), y.len());
        assert!(y.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_trig_expression_sampled() {
        let (x, y) = sample("sin(x) + cos(x)", 0.0, 6.28, DEFAULT_STEP).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, xi.sin() + xi.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_over_requires_normalized_domain() {
        let domain = Domain::new(0.0, 1.0).unwrap();
        let (x, y) = sample_over("exp(x)", &domain).unwrap();
        assert_eq!(x.len(), y.len());
        assert_relative_eq!(y[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = sample("", 0.0, 1.0, 0.1).unwrap_err();
        assert_eq!(err.to_string(), "missing input: Please enter a function.");
        let err = sample("x", 1.0, 1.0, 0.1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid bounds: Min X must be less than Max X."
        );
    }
}
