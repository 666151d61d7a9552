use super::*;
use crate::vector::Vector2D;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

type R = Rect<f64>;
type P = Point<f64>;

fn p(x: f64, y: f64) -> P {
    P::new(x, y)
}

#[test]
fn corners_have_fixed_order() {
    let r = R::from_xywh(0.0, 0.0, 10.0, 20.0);
    assert_eq!(
        r.corners(),
        [p(0.0, 20.0), p(10.0, 20.0), p(10.0, 0.0), p(0.0, 0.0)]
    );
}

#[test]
fn anchors_use_screen_coordinates() {
    let r = R::from_xywh(1.0, 2.0, 4.0, 6.0);
    assert_eq!(r.top(), p(3.0, 2.0));
    assert_eq!(r.bottom(), p(3.0, 8.0));
    assert_eq!(r.left(), p(1.0, 5.0));
    assert_eq!(r.right(), p(5.0, 5.0));
    assert_eq!(r.center(), p(3.0, 5.0));
    assert_eq!(r.top_left(), p(1.0, 2.0));
    assert_eq!(r.top_right(), p(5.0, 2.0));
    assert_eq!(r.bottom_left(), p(1.0, 8.0));
    assert_eq!(r.bottom_right(), p(5.0, 8.0));
}

#[test]
fn negative_size_keeps_bounds_ordered() {
    let r = R::from_xywh(10.0, 10.0, -4.0, -6.0);
    // Storage order is preserved by the raw bounds.
    assert_eq!(r.bounds_x(), (10.0, 6.0));
    assert_eq!(r.bounds_y(), (10.0, 4.0));
    assert_eq!((r.min_x(), r.max_x()), (6.0, 10.0));
    assert_eq!((r.min_y(), r.max_y()), (4.0, 10.0));
    assert_eq!((r.width(), r.height()), (4.0, 6.0));
    assert_eq!(r.top_left(), p(6.0, 4.0));
    assert_eq!(r.bottom_right(), p(10.0, 10.0));
    assert_eq!(r.point_at(0.0, 0.0), r.top_left());
    assert_eq!(r.point_at(1.0, 1.0), r.bottom_right());
}

#[test]
fn mid_point_comes_from_origin_and_half_size() {
    let r = R::from_xywh(10.0, 10.0, -4.0, -6.0);
    assert_eq!(r.mid_x(), 10.0 + -4.0 / 2.0);
    assert_eq!(r.mid_y(), 10.0 + -6.0 / 2.0);
    assert_eq!(r.center(), p(8.0, 7.0));
    assert_eq!(r.top(), p(8.0, 4.0));
    assert_eq!(r.left(), p(6.0, 7.0));
}

#[test]
fn relative_lookup_extrapolates() {
    let r = R::from_xywh(0.0, 0.0, 10.0, 20.0);
    assert_eq!(r.point_at(1.0, 0.0), r.top_right());
    assert_eq!(r.point_at(0.0, 1.0), r.bottom_left());
    assert_eq!(r.point_at(0.5, 0.5), r.center());
    assert_eq!(r.point_at(2.0, -0.5), p(20.0, -10.0));
    assert_eq!(r.point_at_unit(UnitPoint::BOTTOM_TRAILING), r.bottom_right());
    assert_eq!(r.point_at_unit(UnitPoint::TOP), r.top());
    assert_eq!(r.point_at_unit(UnitPoint::CENTER), r.center());
}

#[test]
fn squares_share_center() {
    let r = R::from_xywh(2.0, 4.0, 10.0, 4.0);
    let outer = r.bounding_square();
    let inner = r.inscribed_square();
    assert_eq!(outer, R::from_xywh(2.0, 1.0, 10.0, 10.0));
    assert_eq!(inner, R::from_xywh(5.0, 4.0, 4.0, 4.0));
    assert_eq!(outer.center(), r.center());
    assert_eq!(inner.center(), r.center());
}

#[test]
fn degenerate_aspect_ratios() {
    let flat = R::from_xywh(0.0, 0.0, 5.0, 0.0);
    assert_eq!(flat.aspect_ratio(), f64::INFINITY);
    let dot = R::from_xywh(3.0, 3.0, 0.0, 0.0);
    assert_eq!(dot.min_x(), dot.max_x());
    assert!(dot.aspect_ratio().is_nan());
    assert_eq!(R::from_xywh(0.0, 0.0, -8.0, 2.0).aspect_ratio(), 4.0);
}

#[test]
fn lengths() {
    let r = R::from_xywh(0.0, 0.0, -3.0, 7.0);
    assert_eq!(r.width(), 3.0);
    assert_eq!(r.height(), 7.0);
    assert_eq!(r.min_side(), 3.0);
    assert_eq!(r.max_side(), 7.0);
}

#[test]
fn unit_square_and_rect() {
    assert_eq!(R::unit_square(), R::from_xywh(0.0, 0.0, 1.0, 1.0));
    assert_eq!(Size::<f32>::unit_square(), Rect::from_xywh(0.0, 0.0, 1.0, 1.0));
    let r = R::from_xywh(1.0, 2.0, -3.0, 4.0);
    assert_eq!(r.rect(), r);
}

#[test]
fn other_families_conform() {
    let s = Size::new(4.0, 2.0);
    assert_eq!(s.rect(), R::from_xywh(0.0, 0.0, 4.0, 2.0));
    assert_eq!(s.center(), p(2.0, 1.0));
    assert_eq!(s.aspect_ratio(), 2.0);

    let pt = p(3.0, -1.0);
    assert_eq!(pt.corners(), [pt; 4]);
    assert_eq!(Rectangular::center(&pt), pt);

    let u = UnitPoint::new(0.25, 0.75);
    assert_eq!(u.rect(), R::from_xywh(0.25, 0.75, 0.0, 0.0));
    assert_eq!(u.bounding_square().size, Size::ZERO);
}

#[test]
fn sample_stays_inside() {
    let mut rng = StdRng::seed_from_u64(3);
    let r = R::from_xywh(-1.0, 5.0, 4.0, -2.0);
    for _ in 0..256 {
        let q = r.sample(&mut rng);
        assert!(q.x >= r.min_x() && q.x <= r.max_x());
        assert!(q.y >= r.min_y() && q.y <= r.max_y());
    }
}

fn rect() -> impl Strategy<Value = R> {
    (-1e3..1e3f64, -1e3..1e3f64, -1e3..1e3f64, -1e3..1e3f64)
        .prop_map(|(x, y, w, h)| R::from_xywh(x, y, w, h))
}

proptest! {
    #[test]
    fn bounds_are_ordered(r in rect()) {
        prop_assert!(r.min_x() <= r.max_x());
        prop_assert!(r.min_y() <= r.max_y());
        prop_assert!(r.width() >= 0.0 && r.height() >= 0.0);
        prop_assert!(r.min_side() <= r.max_side());
    }

    #[test]
    fn squares_are_centered(r in rect()) {
        let outer = r.bounding_square();
        let inner = r.inscribed_square();
        prop_assert!(outer.center().approx_eq(r.center(), 1e-9));
        prop_assert!(inner.center().approx_eq(r.center(), 1e-9));
        prop_assert_eq!(outer.size.width, r.max_side());
        prop_assert_eq!(inner.size.height, r.min_side());
    }

    #[test]
    fn relative_lookup_hits_anchors(r in rect()) {
        prop_assert_eq!(r.point_at(0.0, 0.0), r.top_left());
        prop_assert!(r.point_at(1.0, 1.0).approx_eq(r.bottom_right(), 1e-9));
    }

    #[test]
    fn corners_are_the_named_anchors(r in rect()) {
        prop_assert_eq!(
            r.corners(),
            [r.bottom_left(), r.bottom_right(), r.top_right(), r.top_left()]
        );
    }
}
