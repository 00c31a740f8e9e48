//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that special functions are accessible via absolute path and re-export.
#[test]
fn test_special_module_exports() {
    use dist_core::math::special::standard_normal_cdf;
    use dist_core::math::special::standard_normal_inverse_cdf;
    use dist_core::math::special::standard_normal_pdf;

    assert_eq!(standard_normal_cdf(0.0_f64), 0.5);
    assert_eq!(standard_normal_inverse_cdf(0.5_f64), 0.0);
    assert!(standard_normal_pdf(0.0_f64) > 0.39);

    // Module-level re-exports resolve to the same functions
    assert_eq!(
        dist_core::math::standard_normal_cdf(1.0_f64),
        standard_normal_cdf(1.0_f64)
    );
}

/// Test that types module is accessible via absolute path and re-exports.
#[test]
fn test_types_module_exports() {
    use dist_core::types::error::NumericError;
    use dist_core::types::numeric::Numeric;

    let p = Numeric::Real(1.5);
    assert!(matches!(
        p.as_prob(),
        Err(NumericError::ProbabilityOutOfRange { .. })
    ));

    // Re-exports at the types module level
    let _: dist_core::types::Numeric = Numeric::Integer(1);
    let _: Option<dist_core::types::NumericError> = None;
}

/// Test that a probability read feeds the inverse CDF end to end.
#[test]
fn test_probability_read_into_inverse_cdf() {
    use dist_core::math::standard_normal_inverse_cdf;
    use dist_core::types::Numeric;

    let p: Numeric = "0.975".parse().unwrap();
    let z = standard_normal_inverse_cdf(p.as_prob().unwrap());
    assert!((z - 1.959964).abs() < 1e-5);
}

#[cfg(feature = "serde")]
#[test]
fn test_numeric_serde_exports() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<dist_core::types::Numeric>();
    assert_serde::<dist_core::types::NumericError>();
}
