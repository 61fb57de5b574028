//! Proximity edges between particles.
//!
//! Nothing here is stored between frames: links are derived from the current
//! particle positions every time they are drawn. The scan is a plain O(n²)
//! pass over unordered pairs, which is fine for a population of ~100.

use crate::particles::Particle;

/// Normalized closeness: 1 at distance 0, falling linearly to 0 at
/// `threshold` and staying 0 beyond it.
pub fn proximity(distance: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 || distance >= threshold {
        0.0
    } else {
        1.0 - distance / threshold
    }
}

/// A pair of particle indices (`a < b`) closer than the connection distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub proximity: f64,
}

/// Iterator over every linked pair, in `(a, b)` lexicographic order.
pub struct Links<'a> {
    particles: &'a [Particle],
    threshold: f64,
    a: usize,
    b: usize,
}

pub fn links(particles: &[Particle], threshold: f64) -> Links<'_> {
    Links {
        particles,
        threshold,
        a: 0,
        b: 1,
    }
}

impl Iterator for Links<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        let n = self.particles.len();
        while self.a < n {
            while self.b < n {
                let (a, b) = (self.a, self.b);
                self.b += 1;
                let distance = self.particles[a]
                    .position
                    .distance(self.particles[b].position);
                if distance < self.threshold {
                    return Some(Link {
                        a,
                        b,
                        proximity: proximity(distance, self.threshold),
                    });
                }
            }
            self.a += 1;
            self.b = self.a + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Point;

    fn at(x: f64, y: f64) -> Particle {
        Particle {
            position: Point::new(x, y),
            velocity: Point::default(),
            radius: 1.0,
        }
    }

    #[test]
    fn proximity_endpoints() {
        assert_eq!(proximity(0.0, 180.0), 1.0);
        assert_eq!(proximity(180.0, 180.0), 0.0);
        assert_eq!(proximity(500.0, 180.0), 0.0);
        assert_eq!(proximity(10.0, 0.0), 0.0);
    }

    #[test]
    fn links_only_close_pairs_once() {
        let ps = [at(0.0, 0.0), at(100.0, 0.0), at(400.0, 0.0), at(0.0, 0.0)];
        let found: Vec<_> = links(&ps, 180.0).map(|l| (l.a, l.b)).collect();
        assert_eq!(found, vec![(0, 1), (0, 3), (1, 3)]);
    }

    #[test]
    fn empty_and_single_have_no_links() {
        assert_eq!(links(&[], 180.0).count(), 0);
        assert_eq!(links(&[at(1.0, 1.0)], 180.0).count(), 0);
    }
}
