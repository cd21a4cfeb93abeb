//! Vector integration tests.

#![allow(clippy::float_cmp)]

use fluentdeck::{ParseVectorError, Vector2D};

#[test]
fn default_vector_is_zero_and_falsy() {
    let zero = Vector2D::<i32>::default();
    assert_eq!(zero, Vector2D::new(0, 0));
    assert!(!zero.is_truthy());
    assert!(!Vector2D::new(0.0, -0.0).is_truthy());
}

#[test]
fn non_zero_vectors_are_truthy() {
    assert!(Vector2D::new(2, 4).is_truthy());
    assert!(Vector2D::new(0, -1).is_truthy());
    assert!(Vector2D::new(1e-300, 0.0).is_truthy());
}

#[test]
fn addition_is_component_wise() {
    assert_eq!(Vector2D::new(2, 4) + Vector2D::new(2, 1), Vector2D::new(4, 5));
    assert_eq!(
        Vector2D::new(0.5, -1.5) + Vector2D::new(0.25, 1.5),
        Vector2D::new(0.75, 0.0)
    );
}

#[test]
fn magnitude_is_euclidean_norm() {
    let magnitude = Vector2D::new(2, 4).magnitude();
    assert!((magnitude - 20f64.sqrt()).abs() < 1e-12);
    assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2D::new(-3, -4).magnitude(), 5.0);
}

#[test]
fn wide_integer_vectors_have_magnitude_and_truthiness() {
    assert_eq!(Vector2D::new(3i64, 4i64).magnitude(), 5.0);
    assert_eq!(Vector2D::new(3usize, 4usize).magnitude(), 5.0);
    assert_eq!(Vector2D::new(-3isize, 4isize).magnitude(), 5.0);
    assert!(Vector2D::new(0u64, 1u64).is_truthy());
    assert!(!Vector2D::<i64>::default().is_truthy());
    assert!(Vector2D::new(i64::MAX, i64::MIN).magnitude().is_finite());
}

#[test]
fn scaling_multiplies_both_components() {
    assert_eq!(Vector2D::new(2, 1) * 8, Vector2D::new(16, 8));
    assert_eq!(Vector2D::new(2, 1).scale(8), Vector2D::new(16, 8));
    assert_eq!(Vector2D::new(1.5, -2.0) * 2.0, Vector2D::new(3.0, -4.0));
    assert_eq!(Vector2D::new(2, 1).map(f64::from) * 0.5, Vector2D::new(1.0, 0.5));
}

#[test]
fn accessors_return_components() {
    let v = Vector2D::new(7, -3);
    assert_eq!(v.x(), 7);
    assert_eq!(v.y(), -3);
}

#[test]
fn describe_shows_type_and_components() {
    assert_eq!(Vector2D::new(2, 4).describe(), "Vector2D(2, 4)");
    assert_eq!(Vector2D::new(2.0, 4.0).describe(), "Vector2D(2, 4)");
    assert_eq!(Vector2D::new(0.1, -2.5).to_string(), "Vector2D(0.1, -2.5)");
}

#[test]
fn description_parses_back_to_an_equal_vector() {
    let integers = Vector2D::new(2, 4);
    assert_eq!(integers.describe().parse::<Vector2D<i32>>(), Ok(integers));

    let floats = Vector2D::new(0.1 + 0.2, 1.0 / 3.0);
    assert_eq!(floats.describe().parse::<Vector2D<f64>>(), Ok(floats));

    let extreme = Vector2D::new(f64::MAX, f64::MIN_POSITIVE);
    assert_eq!(extreme.describe().parse::<Vector2D>(), Ok(extreme));
}

#[test]
fn parsing_tolerates_surrounding_whitespace() {
    assert_eq!(
        "  Vector2D( 1 ,2 )\n".parse::<Vector2D<i64>>(),
        Ok(Vector2D::new(1, 2))
    );
    assert_eq!(
        "Vector2D(1, 2".parse::<Vector2D<i64>>(),
        Err(ParseVectorError::Malformed)
    );
}
