use super::grid32;
use crate::{
    angle::{angle_between_points, angular_distance},
    distance::Distance,
    error::{ConstructionError, GeometryError},
    pentagram::{build_pentagram, Pentagram, POINTS},
    r2::R2,
    Circle,
};
use test_log::test;

#[test]
fn outer_points_on_circle() {
    let pentagram = grid32();
    let base = pentagram.base();
    for p in pentagram.outer() {
        assert_relative_eq!(p.distance(&base.c), base.r, max_relative = 1e-4);
    }
    // Top point lands exactly on the vertical axis.
    assert_eq!(pentagram.outer()[0], R2::new(15.5, 3.));
}

#[test]
fn outer_angles() {
    let expected = [270., 342., 54., 126., 198.];
    for (idx, theta) in expected.iter().enumerate() {
        assert_relative_eq!(Pentagram::outer_angle(idx), *theta, epsilon = 1e-12);
    }
    let pentagram = grid32();
    let center = pentagram.base().c;
    for idx in 0..POINTS {
        let angle = angle_between_points(&center, &pentagram.outer()[idx]);
        assert_relative_eq!(angle, expected[idx], epsilon = 1e-9);
        // Each outer point is a fifth of a turn further round than the previous one.
        let next = angle_between_points(&center, &pentagram.outer()[(idx + 1) % POINTS]);
        assert_relative_eq!(angular_distance(angle, next), 72., epsilon = 1e-9);
    }
}

#[test]
fn star_lines_skip_one() {
    let pentagram = grid32();
    for (idx, line) in pentagram.lines().iter().enumerate() {
        assert_eq!(line.a, pentagram.outer()[idx]);
        assert_eq!(line.b, pentagram.outer()[(idx + 2) % POINTS]);
    }
}

#[test]
fn inner_points_are_line_intersections() {
    let pentagram = grid32();
    let lines = pentagram.lines();
    for (idx, p) in pentagram.inner().iter().enumerate() {
        for line in [&lines[idx], &lines[(idx + 4) % POINTS]] {
            let eq = line.equation().unwrap();
            assert_relative_eq!(eq.at_x(p.x).unwrap(), p.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn inner_points_inside_circle() {
    let pentagram = grid32();
    let base = pentagram.base();
    // Regular pentagram: inner radius / outer radius = (3 − √5) / 2.
    let ratio = (3. - 5f64.sqrt()) / 2.;
    for p in pentagram.inner() {
        let d = p.distance(&base.c);
        assert!(d < base.r);
        assert_relative_eq!(d, base.r * ratio, max_relative = 1e-9);
    }
}

#[test]
fn radius_round_trip() {
    for (center, radius) in [(R2::new(0., 0.), 1.), (R2::new(-40., 7.5), 1000.), (R2::new(3., 3.), 0.01)] {
        let pentagram = build_pentagram(center, radius).unwrap();
        let recovered = pentagram.outer().iter().map(|p| p.distance(&center)).sum::<f64>() / POINTS as f64;
        assert_relative_eq!(recovered, radius, max_relative = 1e-9);
        assert_eq!(pentagram.base(), &Circle { c: center, r: radius });
    }
}

#[test]
fn invalid_base() {
    let c = R2::new(1., 1.);
    assert_eq!(build_pentagram(c, 0.), Err(ConstructionError::InvalidRadius(0.)));
    assert_eq!(build_pentagram(c, -2.5), Err(ConstructionError::InvalidRadius(-2.5)));
    assert!(matches!(build_pentagram(c, f64::NAN), Err(ConstructionError::InvalidRadius(_))));
    assert!(matches!(
        build_pentagram(R2::new(f64::INFINITY, 0.), 1.),
        Err(ConstructionError::NonFiniteCenter(_))
    ));
    // Unvalidated circles are checked again by the constructor.
    assert_eq!(
        Pentagram::new(Circle { c, r: -1. }),
        Err(ConstructionError::InvalidRadius(-1.)),
    );
}

#[test]
fn overflowing_intersection_is_reported() {
    let err = build_pentagram(R2::new(0., 0.), f64::MAX).unwrap_err();
    assert!(
        matches!(
            err,
            ConstructionError::Intersection { source: GeometryError::NonFinite(_), .. }
                | ConstructionError::Intersection { source: GeometryError::Parallel { .. }, .. }
        ),
        "{:?}",
        err,
    );
}

#[test]
fn json() {
    let pentagram = grid32();
    let value = serde_json::to_value(&pentagram).unwrap();
    assert_eq!(value["base"]["r"], 12.5);
    assert_eq!(value["outer"].as_array().unwrap().len(), POINTS);
    assert_eq!(value["lines"][0]["a"], value["outer"][0]);
    assert_eq!(value["inner"].as_array().unwrap().len(), POINTS);
}
