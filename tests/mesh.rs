use mesh_backdrop::mesh::{links, proximity};
use mesh_backdrop::particles::Particle;
use mesh_backdrop::Point;

const D: f64 = 180.0;

fn at(x: f64, y: f64) -> Particle {
    Particle {
        position: Point::new(x, y),
        velocity: Point::default(),
        radius: 1.0,
    }
}

#[test]
fn coincident_particles_are_fully_close() {
    let ps = [at(10.0, 10.0), at(10.0, 10.0)];
    let found: Vec<_> = links(&ps, D).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].proximity, 1.0);
}

#[test]
fn threshold_and_beyond_are_not_linked() {
    let ps = [at(0.0, 0.0), at(D, 0.0), at(0.0, D + 1.0)];
    assert_eq!(links(&ps, D).count(), 0);
    assert_eq!(proximity(D, D), 0.0);
    assert_eq!(proximity(D * 3.0, D), 0.0);
}

#[test]
fn proximity_strictly_decreases_with_distance() {
    let mut last = proximity(0.0, D);
    let mut d = 0.5;
    while d < D {
        let p = proximity(d, D);
        assert!(p < last, "proximity({d}) = {p} not below {last}");
        assert!(p > 0.0);
        last = p;
        d += 0.5;
    }
}

#[test]
fn diagonal_distance_is_euclidean() {
    let ps = [at(0.0, 0.0), at(30.0, 40.0)];
    let link = links(&ps, 100.0).next().unwrap();
    assert!((link.proximity - 0.5).abs() < 1e-12);
}

#[test]
fn every_close_pair_appears_exactly_once() {
    let ps: Vec<_> = (0..10).map(|i| at(i as f64 * 50.0, 0.0)).collect();
    let found: Vec<_> = links(&ps, D).map(|l| (l.a, l.b)).collect();

    let mut expected = Vec::new();
    for a in 0..ps.len() {
        for b in (a + 1)..ps.len() {
            if ((b - a) as f64) * 50.0 < D {
                expected.push((a, b));
            }
        }
    }
    assert_eq!(found, expected);
    assert!(found.iter().all(|(a, b)| a < b));
}
