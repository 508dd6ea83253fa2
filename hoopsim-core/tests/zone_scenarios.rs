use hoopsim_core::{
    BasketSelector, CourtPosition, Zone, assess, distance_and_offset, resolve_basket_coordinate,
};

const EPS: f64 = 1e-9;

fn left_relative(dx: f64, dy: f64) -> CourtPosition {
    let basket = resolve_basket_coordinate(BasketSelector::Left);
    CourtPosition::new(basket.x() + dx, basket.y() + dy).expect("finite position")
}

#[test]
fn shot_on_the_rim_is_restricted_area() {
    let a = assess(left_relative(0.0, 0.0), BasketSelector::Left);
    assert_eq!(a.zone, Zone::RestrictedArea);
    assert_eq!(a.zone_label(), "Restricted Area");
    assert!((a.probability_percent - 63.0).abs() < EPS);
    assert!((a.distance_feet - 0.0).abs() < EPS);
}

#[test]
fn corner_three_at_twenty_five_feet() {
    let dx = 369.0_f64.sqrt();
    let a = assess(left_relative(dx, 16.0), BasketSelector::Left);
    assert_eq!(a.zone, Zone::CornerThree);
    assert!((a.distance_feet - 25.0).abs() < EPS);
    // atan(16 / 19.2) is under 45°, so no wing bonus.
    assert!((a.probability_percent - 39.0).abs() < EPS);
}

#[test]
fn full_court_heaves() {
    let fifty = assess(left_relative(50.0, 0.0), BasketSelector::Left);
    assert_eq!(fifty.zone, Zone::FullCourt);
    assert!((fifty.probability_percent - 5.0).abs() < EPS);

    let eighty = assess(left_relative(80.0, 0.0), BasketSelector::Left);
    assert_eq!(eighty.zone, Zone::FullCourt);
    assert!((eighty.probability_percent - 2.0).abs() < EPS);

    let seventy = assess(left_relative(70.0, 0.0), BasketSelector::Left);
    assert!((seventy.probability_percent - 5.0).abs() < EPS);
}

#[test]
fn zone_table_spot_checks() {
    let cases = [
        ((5.0, 0.0), Zone::Paint, 42.0),
        ((12.0, 0.0), Zone::MidRange, 40.0),
        ((20.0, 0.0), Zone::LongMidRange, 38.0),
        ((10.0, 14.0), Zone::LongMidRange, 40.0),
        ((24.0, 0.0), Zone::ThreePoint, 36.0),
        ((30.0, 0.0), Zone::DeepThree, 23.4),
        ((40.0, 0.0), Zone::HalfCourtRange, 5.4),
    ];
    for ((dx, dy), zone, probability) in cases {
        let a = assess(left_relative(dx, dy), BasketSelector::Left);
        assert_eq!(a.zone, zone, "zone at ({dx}, {dy})");
        assert!(
            (a.probability_percent - probability).abs() < 1e-6,
            "probability at ({dx}, {dy}) was {}",
            a.probability_percent
        );
    }
}

#[test]
fn shots_behind_the_backboard_and_off_court_are_valid() {
    let behind = CourtPosition::new(-10.0, 25.0).unwrap();
    let a = assess(behind, BasketSelector::Left);
    assert_eq!(a.zone, Zone::MidRange);
    // Behind the rim the angle is past 45°, so the wing bonus applies.
    assert!((a.probability_percent - 42.0).abs() < EPS);

    let parking_lot = CourtPosition::new(400.0, -120.0).unwrap();
    let a = assess(parking_lot, BasketSelector::Right);
    assert_eq!(a.zone, Zone::FullCourt);
    assert!((a.probability_percent - 2.0).abs() < EPS);
}

fn court_grid() -> impl Iterator<Item = CourtPosition> {
    (-40..=228).flat_map(|xi| {
        (-20..=120).filter_map(move |yi| {
            CourtPosition::new(f64::from(xi) * 0.5, f64::from(yi) * 0.5).ok()
        })
    })
}

#[test]
fn probability_and_zone_invariants_hold_across_the_court() {
    for shot in court_grid() {
        for target in BasketSelector::ALL {
            let a = assess(shot, target);
            assert!(
                (1.0..=95.0).contains(&a.probability_percent),
                "probability {} out of range at {shot:?}",
                a.probability_percent
            );
            assert!(a.distance_feet >= 0.0);

            let offset = distance_and_offset(shot, resolve_basket_coordinate(target));
            let (min, max) = a.zone.distance_band();
            assert!(offset.distance >= min, "{:?} below band at {shot:?}", a.zone);
            if let Some(max) = max {
                assert!(offset.distance < max, "{:?} above band at {shot:?}", a.zone);
            }
            if offset.distance < 3.0 {
                assert_eq!(a.zone, Zone::RestrictedArea);
                assert!((a.probability_percent - 63.0).abs() < EPS);
            }
        }
    }
}

#[test]
fn mirrored_shot_at_the_other_basket_keeps_distance_and_zone() {
    for shot in court_grid() {
        let left = assess(shot, BasketSelector::Left);
        let right = assess(shot.mirrored(), BasketSelector::Right);
        assert!(
            (left.distance_feet - right.distance_feet).abs() < EPS,
            "distance mismatch at {shot:?}"
        );
        assert_eq!(left.zone, right.zone, "zone mismatch at {shot:?}");
    }
}

#[test]
fn wing_bonus_is_not_mirrored_between_baskets() {
    // 12 ft straight on from half court: 0° at the left rim, 180° at the right.
    let left = assess(left_relative(12.0, 0.0), BasketSelector::Left);
    let right_rim = resolve_basket_coordinate(BasketSelector::Right);
    let right_spot = CourtPosition::new(right_rim.x() - 12.0, right_rim.y()).unwrap();
    let right = assess(right_spot, BasketSelector::Right);
    assert_eq!(left.zone, Zone::MidRange);
    assert_eq!(right.zone, Zone::MidRange);
    assert!((left.probability_percent - 40.0).abs() < EPS);
    assert!((right.probability_percent - 42.0).abs() < EPS);
}
