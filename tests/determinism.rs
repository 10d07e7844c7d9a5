use springstep::{Lane2, SpringConstants};

#[test]
fn step_deterministic() {
    let results: Vec<_> = (0..10)
        .map(|_| {
            let constants = SpringConstants::from_frequency_hz(0.3f32, 3.0);
            let mut x = Lane2::new(1.0f32, -5.0);
            let mut velocity = Lane2::new(0.0f32, 2.0);
            for _ in 0..500 {
                x = constants.step(1.0 / 60.0, x, &mut velocity);
            }
            (x, velocity)
        })
        .collect();

    for (x, velocity) in &results[1..] {
        assert_eq!(results[0].0.x, x.x);
        assert_eq!(results[0].0.y, x.y);
        assert_eq!(results[0].1.x, velocity.x);
        assert_eq!(results[0].1.y, velocity.y);
    }
}

#[test]
fn identical_calls_bit_identical() {
    let constants = SpringConstants::new(1.5f64, 12.0);
    let mut v_a = Lane2::new(0.5f64, -0.25);
    let mut v_b = v_a;
    let x_a = constants.step(0.013, Lane2::new(2.0, 3.0), &mut v_a);
    let x_b = constants.step(0.013, Lane2::new(2.0, 3.0), &mut v_b);
    assert_eq!(x_a, x_b);
    assert_eq!(v_a, v_b);
}
