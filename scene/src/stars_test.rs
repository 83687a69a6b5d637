use super::*;

fn small(seed: u64) -> StarfieldOptions {
    StarfieldOptions { count: 400, seed, ..StarfieldOptions::default() }
}

#[test]
fn default_field_has_fixed_count() {
    let field = Starfield::default();
    assert_eq!(field.stars.len(), STAR_COUNT);
}

#[test]
fn stars_lie_within_shell() {
    let opts = small(7);
    let field = Starfield::generate(opts);
    for star in &field.stars {
        let r = star.position.length();
        assert!(r <= opts.radius + opts.depth + 1e-9);
        assert!(r >= opts.radius - 1e-9);
    }
}

#[test]
fn star_sizes_scale_with_factor() {
    let opts = small(11);
    let field = Starfield::generate(opts);
    for star in &field.stars {
        assert!(star.size >= 0.5 * opts.factor);
        assert!(star.size <= opts.factor);
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    let a = Starfield::generate(small(42));
    let b = Starfield::generate(small(42));
    let c = Starfield::generate(small(43));
    assert_eq!(a.stars, b.stars);
    assert_ne!(a.stars, c.stars);
}

#[test]
fn empty_field_is_allowed() {
    let field = Starfield::generate(StarfieldOptions { count: 0, ..StarfieldOptions::default() });
    assert!(field.stars.is_empty());
}

#[test]
fn twinkle_stays_in_range() {
    let field = Starfield::generate(small(3));
    for star in field.stars.iter().take(50) {
        for i in 0..20 {
            let k = field.twinkle(star, f64::from(i) * 0.31);
            assert!((2.0..=4.0).contains(&k));
        }
    }
}

#[test]
fn point_size_shrinks_with_depth() {
    let field = Starfield::generate(small(5));
    let star = field.stars[0];
    let near = field.point_size(&star, 50.0, 0.0);
    let far = field.point_size(&star, 150.0, 0.0);
    assert!(near > far);
    assert!(field.point_size(&star, 0.0, 0.0).abs() < f64::EPSILON);
}
