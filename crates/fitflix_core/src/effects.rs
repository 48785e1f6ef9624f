//! crates/fitflix_core/src/effects.rs
//!
//! Generators for the decorative effects the pages render server-side: the
//! floating particles behind the landing hero and the staggered reveal of
//! listing cards. Each call is independent and keeps no state.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

pub const HERO_PARTICLES: usize = 20;

/// Delay between consecutive cards in a revealed grid.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);

/// One floating dot in the hero background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Width in px. Particles are square-ish; height is drawn separately.
    pub width: f64,
    pub height: f64,
    /// Alpha of the brand red fill.
    pub opacity: f64,
    /// Horizontal offset in percent of the container.
    pub left: f64,
    pub top: f64,
    /// Length of one float cycle in seconds.
    pub duration_secs: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            width: rng.random_range(2.0..6.0),
            height: rng.random_range(2.0..6.0),
            opacity: rng.random_range(0.2..0.7),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration_secs: rng.random_range(10.0..20.0),
        }
    }

    /// Inline style for the particle's `<div>`.
    pub fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; background: rgba(234, 30, 37, {:.2}); \
             left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s;",
            self.width, self.height, self.opacity, self.left, self.top, self.duration_secs
        )
    }
}

/// Draws `count` particles.
pub fn particle_field<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// Animation delays for `count` cards revealed together, one `REVEAL_STEP` apart.
pub fn reveal_delays(count: usize) -> Vec<Duration> {
    (0..count as u32).map(|i| REVEAL_STEP * i).collect()
}
