use super::rand::{grid_points, straddling_pair, uniform_points, Bounds2};
use super::*;
use ::rand::rngs::StdRng;
use ::rand::seq::SliceRandom;
use ::rand::{Rng, SeedableRng};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn insufficient_input_for_zero_and_one_point() {
    assert_eq!(solve(&[]), Err(PairError::InsufficientInput { got: 0 }));
    assert_eq!(
        solve(&pts(&[(1.0, 2.0)])),
        Err(PairError::InsufficientInput { got: 1 })
    );
    assert_eq!(
        solve_brute_force(&[]),
        Err(PairError::InsufficientInput { got: 0 })
    );
    let msg = PairError::InsufficientInput { got: 1 }.to_string();
    assert!(msg.contains("at least two"));
}

#[test]
fn two_points_returns_that_pair() {
    let p = pts(&[(1.0, 1.0), (4.0, 5.0)]);
    let r = solve(&p).unwrap();
    assert!(r.is_pair(&p[0], &p[1]));
    assert!((r.dist - 5.0).abs() < 1e-12);
}

#[test]
fn three_point_scenario() {
    let p = pts(&[(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)]);
    let r = solve(&p).unwrap();
    assert!(r.is_pair(&p[0], &p[2]));
    assert_eq!(format!("{:.6}", r.dist), "1.000000");
}

#[test]
fn collinear_scenario_returns_adjacent_pair() {
    let p = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let r = solve(&p).unwrap();
    assert_eq!(format!("{:.6}", r.dist), "1.414214");
    assert!(((r.a.x - r.b.x).abs() - 1.0).abs() < 1e-12);
    assert!(p.contains(&r.a) && p.contains(&r.b));
}

#[test]
fn coincident_points_give_zero() {
    let p = pts(&[
        (5.0, 5.0),
        (-3.0, 2.0),
        (7.5, -1.0),
        (0.25, 0.25),
        (9.0, 9.0),
        (0.25, 0.25),
        (-8.0, 4.0),
    ]);
    let r = solve(&p).unwrap();
    assert_eq!(r.dist, 0.0);
    assert_eq!(r.a, Point::new(0.25, 0.25));
    assert_eq!(r.b, Point::new(0.25, 0.25));
}

#[test]
fn unique_minimum_is_returned_exactly() {
    let mut p = uniform_points(300, Bounds2::square(100.0), 11);
    // planted pair far closer than any random pair is likely to be
    let a = Point::new(12.0, -7.0);
    let b = Point::new(12.0 + 1e-4, -7.0 + 1e-4);
    p.push(a);
    p.push(b);
    let bf = solve_brute_force(&p).unwrap();
    assert!(bf.is_pair(&a, &b), "fixture must have a unique planted min");
    let r = solve(&p).unwrap();
    assert!(r.is_pair(&a, &b));
}

#[test]
fn vertical_line_shares_split_x() {
    // All x equal: every split has duplicate x values straddling mid.
    let p: Vec<Point> = (0..17).map(|i| Point::new(3.0, (i * i) as f64)).collect();
    let r = solve(&p).unwrap();
    assert!(r.is_pair(&Point::new(3.0, 0.0), &Point::new(3.0, 1.0)));
}

#[test]
fn grid_ties_match_spacing() {
    let mut g = grid_points(9, 7, 0.5);
    g.shuffle(&mut StdRng::seed_from_u64(5));
    let r = solve(&g).unwrap();
    assert_eq!(r.dist, 0.5);
    assert!(g.contains(&r.a) && g.contains(&r.b));
}

#[test]
fn straddling_pair_found_by_strip() {
    for seed in 0..20 {
        let s = straddling_pair(80, seed);
        let r = solve(&s.points).unwrap();
        assert!(r.is_pair(&s.a, &s.b), "seed {seed}: got {r:?}");
        assert!((r.dist - 1.0).abs() < 1e-12);
    }
}

#[test]
fn randomized_seeded_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [2usize, 3, 4, 5, 8, 31, 64, 257, 1000] {
        let p = uniform_points(n, Bounds2::default(), rng.gen());
        let dc = solve(&p).unwrap();
        let bf = solve_brute_force(&p).unwrap();
        assert!(close(dc.dist, bf.dist), "n={n}: {} vs {}", dc.dist, bf.dist);
    }
}

#[test]
fn algorithm_dispatch_agrees() {
    let p = uniform_points(120, Bounds2::square(10.0), 9);
    let a = Algorithm::DivideConquer.solve(&p).unwrap();
    let b = Algorithm::BruteForce.solve(&p).unwrap();
    assert!(close(a.dist, b.dist));
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3f64
}

fn real_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((coord(), coord()).prop_map(|(x, y)| Point::new(x, y)), 2..=max)
}

/// Small integer lattice: many shared x/y values and exact duplicates.
fn lattice_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (-6i32..6, -6i32..6).prop_map(|(x, y)| Point::new(x as f64, y as f64)),
        2..=max,
    )
}

/// Three x columns only: every split has equal x on both sides of `mid`.
fn column_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (0i32..3, coord()).prop_map(|(x, y)| Point::new(x as f64, y)),
        2..=max,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn matches_brute_force(p in real_points(200)) {
        let dc = solve(&p).unwrap();
        let bf = solve_brute_force(&p).unwrap();
        prop_assert!(close(dc.dist, bf.dist), "{} vs {}", dc.dist, bf.dist);
        prop_assert!(p.contains(&dc.a) && p.contains(&dc.b));
        prop_assert!(close(dist(&dc.a, &dc.b), dc.dist));
    }

    #[test]
    fn matches_brute_force_on_lattice(p in lattice_points(200)) {
        let dc = solve(&p).unwrap();
        let bf = solve_brute_force(&p).unwrap();
        prop_assert_eq!(dc.dist, bf.dist);
    }

    #[test]
    fn matches_brute_force_on_shared_columns(p in column_points(200)) {
        let dc = solve(&p).unwrap();
        let bf = solve_brute_force(&p).unwrap();
        prop_assert_eq!(dc.dist, bf.dist);
    }

    #[test]
    fn permutation_invariant(p in real_points(150), seed in any::<u64>()) {
        let mut q = p.clone();
        q.shuffle(&mut StdRng::seed_from_u64(seed));
        let r1 = solve(&p).unwrap();
        let r2 = solve(&q).unwrap();
        prop_assert!(close(r1.dist, r2.dist));
    }

    #[test]
    fn duplicate_gives_zero(p in real_points(100), pick in any::<prop::sample::Index>()) {
        let mut q = p.clone();
        q.push(*pick.get(&p));
        let r = solve(&q).unwrap();
        prop_assert_eq!(r.dist, 0.0);
        prop_assert_eq!(r.a, r.b);
    }
}
