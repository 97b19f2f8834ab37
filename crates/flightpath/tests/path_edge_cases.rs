#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

//! Edge cases for both drawing modes: clamp boundaries, extreme flight
//! numbers, non-finite input, and degenerate overlay segments.

use flightpath::{
    CanvasConfig, CubicPath, FlightNumbers, FlightPathError, NormalizedPoint, OverlayRequest,
    ReleaseAngle, ThrowType, ThrowingHand, compute_overlay_path, compute_schematic_paths,
    estimated_distance, try_compute_overlay_path, try_compute_schematic_paths,
};

// =============================================================================
// Schematic: clamp boundary
// =============================================================================

#[test]
fn clamp_boundary_is_exact() {
    // 30 + 12 * 28 + 7 * 5 = 401 ft
    let numbers = FlightNumbers::new(12.0, 7.0, 0.0, 0.0);
    assert_eq!(estimated_distance(&numbers, 400.0), 400.0);
    assert_eq!(estimated_distance(&numbers, 401.0), 401.0);
    assert_eq!(estimated_distance(&numbers, 402.0), 401.0);
}

#[test]
fn clamped_curve_uses_full_headroom() {
    let numbers = FlightNumbers::new(15.0, 7.0, -2.0, 4.0);
    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
    // 260 px of drawable height on the default canvas
    for (_, path) in paths.iter() {
        assert!((path.end.y - 20.0).abs() < 1e-9, "end y = {}", path.end.y);
    }
}

#[test]
fn extreme_speed_stays_on_canvas() {
    let numbers = FlightNumbers::new(1000.0, 1000.0, -5.0, 5.0);
    let paths = compute_schematic_paths(&numbers, ThrowType::LeftBackhand, None);
    assert!(paths.flat.end.y >= 20.0 - 1e-9);
    assert!(paths.flat.is_finite());
}

// =============================================================================
// Schematic: unusual flight numbers
// =============================================================================

#[test]
fn zero_turn_and_fade_is_straight() {
    let numbers = FlightNumbers::new(9.0, 5.0, 0.0, 0.0);
    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);

    for (_, path) in paths.iter() {
        assert_eq!(path.control1.x, 100.0);
        assert_eq!(path.control2.x, 100.0);
        assert_eq!(path.end.x, 100.0);
    }
    // no sideways movement means the angles cannot be told apart
    assert_eq!(paths.hyzer, paths.anhyzer);
}

#[test]
fn negative_speed_extrapolates_linearly() {
    // 30 - 28 + 5 = 7 ft
    let numbers = FlightNumbers::new(-1.0, 1.0, 0.0, 1.0);
    assert_eq!(estimated_distance(&numbers, 400.0), 7.0);

    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
    assert!(paths.flat.end.y < 280.0);
}

#[test]
fn positive_turn_bends_the_other_way() {
    let understable = FlightNumbers::new(9.0, 5.0, -3.0, 1.0);
    let overstable = FlightNumbers::new(9.0, 5.0, 1.0, 1.0);

    let a = compute_schematic_paths(&understable, ThrowType::RightBackhand, None);
    let b = compute_schematic_paths(&overstable, ThrowType::RightBackhand, None);

    assert!(a.flat.control1.x < 100.0);
    assert!(b.flat.control1.x > 100.0);
}

// =============================================================================
// Schematic: non-finite input
// =============================================================================

#[test]
fn nan_speed_poisons_every_coordinate_but_the_start() {
    let numbers = FlightNumbers::new(f64::NAN, 5.0, -1.0, 2.0);
    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
    let s = paths.flat.to_string();

    assert!(s.starts_with("M 100 280 C NaN NaN, NaN NaN, NaN NaN"), "{s}");
}

#[test]
fn infinite_fade_produces_infinite_endpoint() {
    let numbers = FlightNumbers::new(9.0, 5.0, -1.0, f64::INFINITY);
    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
    assert_eq!(paths.flat.end.x, f64::NEG_INFINITY);
    assert!(paths.flat.to_string().contains("-inf"));
}

#[test]
fn checked_schematic_rejects_what_permissive_accepts() {
    let numbers = FlightNumbers::new(9.0, 5.0, f64::NAN, 2.0);
    let err = try_compute_schematic_paths(&numbers, ThrowType::RightBackhand, None).unwrap_err();
    assert!(matches!(err, FlightPathError::NonFiniteFlightNumbers(n) if n.turn.is_nan()));
    assert!(err.to_string().starts_with("flight numbers must be finite"));
}

#[test]
fn checked_schematic_validates_canvas() {
    let numbers = FlightNumbers::new(9.0, 5.0, -1.0, 2.0);
    let canvas = CanvasConfig {
        start_y: 10.0,
        ..CanvasConfig::default()
    };
    let err = try_compute_schematic_paths(&numbers, ThrowType::RightBackhand, Some(&canvas))
        .unwrap_err();
    assert!(matches!(err, FlightPathError::InvalidCanvas(_)));

    // the permissive variant draws downward instead of failing
    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, Some(&canvas));
    assert!(paths.flat.end.y > 10.0);
}

#[test]
fn checked_schematic_rejects_overflowing_curve() {
    // finite glide, but the arc height overflows to infinity
    let numbers = FlightNumbers::new(9.0, 1e308, -1.0, 2.0);

    let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
    assert!(!paths.flat.is_finite());

    let err = try_compute_schematic_paths(&numbers, ThrowType::RightBackhand, None).unwrap_err();
    assert!(matches!(err, FlightPathError::InvalidInput(_)));
    assert!(err.to_string().contains("hyzer path"));
}

// =============================================================================
// Overlay: degenerate segments
// =============================================================================

#[test]
fn coincident_points_yield_nan_controls() {
    let p = NormalizedPoint::new(40.0, 60.0);
    let path = compute_overlay_path(None, ReleaseAngle::Hyzer, ThrowingHand::Left, p, p, 500.0, 500.0);

    assert_eq!(path.tee(), path.basket());
    assert!(!path.path().control1.is_finite());
    assert!(!path.path().control2.is_finite());
}

#[test]
fn coincident_points_rejected_when_checked() {
    let p = NormalizedPoint::new(40.0, 60.0);
    let err = try_compute_overlay_path(None, ReleaseAngle::Flat, ThrowingHand::Right, p, p, 500.0, 500.0)
        .unwrap_err();
    assert_eq!(err, FlightPathError::CoincidentPoints { x: 200.0, y: 300.0 });
}

#[test]
fn tiny_segment_keeps_finite_normal() {
    let path = try_compute_overlay_path(
        None,
        ReleaseAngle::Flat,
        ThrowingHand::Right,
        NormalizedPoint::new(0.0, 0.0),
        NormalizedPoint::new(1e-300, 0.0),
        300.0,
        300.0,
    )
    .unwrap();

    assert!(path.path().is_finite());
    assert!(path.path().control1.x.abs() < 1e-290);
}

#[test]
fn huge_canvas_keeps_finite_curve() {
    let path = try_compute_overlay_path(
        None,
        ReleaseAngle::Flat,
        ThrowingHand::Right,
        NormalizedPoint::new(0.0, 0.0),
        NormalizedPoint::new(100.0, 100.0),
        1e300,
        1e300,
    )
    .unwrap();

    assert!(path.path().is_finite());
    assert!((path.basket().x / 1e300 - 1.0).abs() < 1e-12);
}

#[test]
fn overflowing_distance_rejected_when_checked() {
    // 100 * 1e308 overflows before the division by 100
    let tee = NormalizedPoint::new(0.0, 0.0);
    let basket = NormalizedPoint::new(100.0, 100.0);

    let (angle, hand) = (ReleaseAngle::Flat, ThrowingHand::Right);

    let path = compute_overlay_path(None, angle, hand, tee, basket, 1e308, 1e308);
    assert!(!path.path().is_finite());

    let err = try_compute_overlay_path(None, angle, hand, tee, basket, 1e308, 1e308).unwrap_err();
    assert!(matches!(err, FlightPathError::InvalidInput(_)));
    assert!(err.to_string().contains("distance must be finite"));
}

#[test]
fn points_outside_percent_range_extrapolate() {
    let path = OverlayRequest::new(
        NormalizedPoint::new(-10.0, 110.0),
        NormalizedPoint::new(150.0, -20.0),
        200.0,
        100.0,
    )
    .try_compute()
    .unwrap();

    assert_eq!(path.tee().x, -20.0);
    assert_eq!(path.tee().y, 110.0);
    assert_eq!(path.basket().x, 300.0);
    assert_eq!(path.basket().y, -20.0);
}

#[test]
fn vertical_throw_offsets_are_horizontal() {
    // tee straight below the basket: the normal is horizontal
    let path = OverlayRequest::new(
        NormalizedPoint::new(50.0, 90.0),
        NormalizedPoint::new(50.0, 10.0),
        400.0,
        400.0,
    )
    .flight_numbers(FlightNumbers::new(9.0, 5.0, -2.0, 2.0))
    .compute();

    let c1 = path.path().control1;
    assert!((c1.y - (360.0 - 320.0 * 0.35)).abs() < 1e-9);
    assert!(c1.x != 200.0);
}

#[test]
fn overlay_string_parses_as_cubic_path() {
    let path = OverlayRequest::new(
        NormalizedPoint::new(5.0, 95.0),
        NormalizedPoint::new(70.0, 15.0),
        1080.0,
        1920.0,
    )
    .release_angle(ReleaseAngle::Anhyzer)
    .compute();

    let parsed: CubicPath = path.to_string().parse().unwrap();
    assert_eq!(parsed, *path.path());
}
