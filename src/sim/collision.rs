//! Ball/ball collision detection and response
//!
//! Broad phase: brute-force scan over every unordered pair, testing the
//! positions each ball would reach after `dt`.
//! Narrow phase: elastic exchange of the normal velocity component in the
//! pair's center-of-mass frame, then damped by `ELASTICITY`.

use super::state::Ball;
use super::vector::Vector2;
use crate::consts::{COLLISION_TIMEOUT, ELASTICITY};

/// Whether two balls will overlap after `dt` (`dt = 0` tests current overlap)
#[inline]
pub fn is_colliding(a: &Ball, b: &Ball, dt: f64) -> bool {
    a.next_pos(dt).distance(b.next_pos(dt)) <= a.radius + b.radius
}

/// Resolve a colliding pair in place
///
/// Returns false without touching either ball when the pair is already
/// separating (current distance smaller than the predicted one).
pub fn resolve_collision(a: &mut Ball, b: &mut Ball, dt: f64) -> bool {
    let next_a = a.next_pos(dt);
    let next_b = b.next_pos(dt);

    let now_dist = a.pos.distance(b.pos);
    let next_dist = next_a.distance(next_b);
    if now_dist < next_dist {
        return false;
    }

    a.cooldown = COLLISION_TIMEOUT;
    b.cooldown = COLLISION_TIMEOUT;

    // Center of mass coordinate system
    let normal = (next_a - next_b).normalize_or_zero();
    let tangent = Vector2::new(normal.y, -normal.x);

    let (m_a, m_b) = (a.mass(), b.mass());
    let total = m_a + m_b;
    let com_vel = (a.vel * m_a + b.vel * m_b) / total;

    // Velocities relative to the center of mass
    let rel_a = (a.vel - b.vel) * (m_b / total);
    let rel_b = (b.vel - a.vel) * (m_a / total);

    let exchange = |rel: Vector2| {
        let t = rel.dot(tangent);
        let n = rel.dot(normal);
        tangent * t - normal * n + com_vel
    };

    a.vel = exchange(rel_a) * ELASTICITY;
    b.vel = exchange(rel_b) * ELASTICITY;

    a.roll();
    b.roll();
    true
}

/// One broad-phase pass over every unordered pair
///
/// Returns the number of pairs resolved.
pub fn check_collisions(balls: &mut [Ball], dt: f64) -> usize {
    let mut resolved = 0;
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if is_colliding(a, b, dt) && resolve_collision(a, b, dt) {
                resolved += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;

    const DT: f64 = 0.016;

    fn ball(pos: (f64, f64), vel: (f64, f64), radius: f64) -> Ball {
        Ball::new(
            Vector2::new(pos.0, pos.1),
            Vector2::new(vel.0, vel.1),
            radius,
            Color::BLUE,
            9.8,
        )
    }

    fn assert_vec_eq(actual: Vector2, expected: Vector2) {
        assert!(
            (actual - expected).length() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_is_colliding_uses_predicted_positions() {
        let a = ball((100.0, 100.0), (50.0, 0.0), 20.0);
        let b = ball((144.0, 100.0), (0.0, 0.0), 20.0);
        assert!(!is_colliding(&a, &b, 0.0));
        assert!(is_colliding(&a, &b, 0.1));
    }

    #[test]
    fn test_touching_counts_as_colliding() {
        let a = ball((100.0, 100.0), (0.0, 0.0), 20.0);
        let b = ball((140.0, 100.0), (0.0, 0.0), 20.0);
        assert!(is_colliding(&a, &b, 0.0));
    }

    #[test]
    fn test_head_on_equal_mass_swaps_with_restitution() {
        let mut a = ball((100.0, 100.0), (5.0, 0.0), 20.0);
        let mut b = ball((139.0, 100.0), (-5.0, 0.0), 20.0);
        assert!(is_colliding(&a, &b, DT));

        assert!(resolve_collision(&mut a, &mut b, DT));
        assert_vec_eq(a.vel, Vector2::new(-4.5, 0.0));
        assert_vec_eq(b.vel, Vector2::new(4.5, 0.0));
        assert_eq!(a.cooldown, COLLISION_TIMEOUT);
        assert_eq!(b.cooldown, COLLISION_TIMEOUT);
        assert!((a.spin - (-4.5 / 20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unequal_mass_velocity_change_inverse_to_mass() {
        // Zero total momentum: heavy (m=400) at 1, light (m=100) at -4
        let mut heavy = ball((100.0, 100.0), (1.0, 0.0), 20.0);
        let mut light = ball((129.0, 100.0), (-4.0, 0.0), 10.0);

        assert!(resolve_collision(&mut heavy, &mut light, DT));
        assert_vec_eq(heavy.vel, Vector2::new(-0.9, 0.0));
        assert_vec_eq(light.vel, Vector2::new(3.6, 0.0));

        let dv_heavy = (heavy.vel - Vector2::new(1.0, 0.0)).length();
        let dv_light = (light.vel - Vector2::new(-4.0, 0.0)).length();
        assert!(dv_heavy < dv_light);
        assert!((dv_heavy * heavy.mass() - dv_light * light.mass()).abs() < 1e-9);
    }

    #[test]
    fn test_glancing_collision_keeps_tangential_motion() {
        // Contact normal along x; the y components are tangential and survive
        let mut a = ball((100.0, 100.0), (5.0, 3.0), 20.0);
        let mut b = ball((139.0, 100.0), (-5.0, 3.0), 20.0);
        assert!(resolve_collision(&mut a, &mut b, DT));
        assert_vec_eq(a.vel, Vector2::new(-4.5, 2.7));
        assert_vec_eq(b.vel, Vector2::new(4.5, 2.7));
    }

    #[test]
    fn test_separating_overlap_is_untouched() {
        let mut a = ball((100.0, 100.0), (-5.0, 0.0), 20.0);
        let mut b = ball((130.0, 100.0), (5.0, 0.0), 20.0);
        assert!(is_colliding(&a, &b, DT));

        let (before_a, before_b) = (a.clone(), b.clone());
        assert!(!resolve_collision(&mut a, &mut b, DT));
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn test_check_collisions_visits_each_pair_once() {
        let mut balls = vec![
            ball((100.0, 100.0), (5.0, 0.0), 20.0),
            ball((139.0, 100.0), (-5.0, 0.0), 20.0),
            ball((600.0, 600.0), (0.0, 0.0), 20.0),
        ];
        assert_eq!(check_collisions(&mut balls, DT), 1);
        assert_vec_eq(balls[0].vel, Vector2::new(-4.5, 0.0));
        assert_vec_eq(balls[1].vel, Vector2::new(4.5, 0.0));
        assert_eq!(balls[2].vel, Vector2::ZERO);
        assert_eq!(balls[2].cooldown, 0);

        // Now separating: a second pass leaves them alone
        assert_eq!(check_collisions(&mut balls, DT), 0);
        assert_vec_eq(balls[0].vel, Vector2::new(-4.5, 0.0));
    }

    #[test]
    fn test_momentum_scaled_by_elasticity() {
        let mut a = ball((100.0, 100.0), (3.0, 1.0), 25.0);
        let mut b = ball((120.0, 125.0), (-1.0, -2.0), 15.0);
        let before = a.vel * a.mass() + b.vel * b.mass();
        assert!(resolve_collision(&mut a, &mut b, DT));
        let after = a.vel * a.mass() + b.vel * b.mass();
        assert_vec_eq(after, before * ELASTICITY);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn energy_never_increases(
                a_pos in (0.0f64..200.0, 0.0f64..200.0),
                b_pos in (0.0f64..200.0, 0.0f64..200.0),
                a_vel in (-50.0f64..50.0, -50.0f64..50.0),
                b_vel in (-50.0f64..50.0, -50.0f64..50.0),
                radii in (10.0f64..30.0, 10.0f64..30.0),
                dt in 0.0f64..0.5,
            ) {
                let mut a = ball(a_pos, a_vel, radii.0);
                let mut b = ball(b_pos, b_vel, radii.1);
                let before = a.kinetic_energy() + b.kinetic_energy();
                if is_colliding(&a, &b, dt) {
                    resolve_collision(&mut a, &mut b, dt);
                }
                let after = a.kinetic_energy() + b.kinetic_energy();
                prop_assert!(
                    after <= before + 1e-9 * before.max(1.0),
                    "energy grew from {} to {}", before, after
                );
            }
        }
    }
}
