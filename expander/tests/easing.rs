use expander::Easing;

const ALL: [Easing; 6] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::FastOutSlowIn,
    Easing::Overshoot { tension: 2.0 },
];

#[test]
fn test_easing_boundaries() {
    for easing in ALL {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_clamps_input() {
    for easing in ALL {
        assert_eq!(easing.apply(-0.5), 0.0, "{:?} below 0", easing);
        assert_eq!(easing.apply(1.5), 1.0, "{:?} above 1", easing);
    }
}

#[test]
fn test_easing_quadratic_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_fast_out_slow_in_shape() {
    let easing = Easing::FastOutSlowIn;
    // Slow start, most of the travel done by the midpoint
    assert!(easing.apply(0.1) < 0.1);
    assert!(easing.apply(0.5) > 0.7);
    assert!(easing.apply(0.5) < 0.85);

    let mut prev = 0.0;
    for i in 1..=20 {
        let t = i as f32 / 20.0;
        let value = easing.apply(t);
        assert!(value >= prev, "not monotonic at t={}", t);
        assert!(value <= 1.0, "above 1 at t={}", t);
        prev = value;
    }
}

#[test]
fn test_overshoot_passes_target() {
    let easing = Easing::overshoot();
    assert_eq!(easing, Easing::Overshoot { tension: 2.0 });
    assert!(easing.apply(0.9) > 1.0);
    // Starts fast, then runs past the end
    assert!(easing.apply(0.1) > 0.1);
}

#[test]
fn test_default_is_fast_out_slow_in() {
    assert_eq!(Easing::default(), Easing::FastOutSlowIn);
}
