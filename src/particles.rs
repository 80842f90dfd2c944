//! Decorative particle field and confetti bursts.
//!
//! Positions are plain data advanced once per animation frame; rendering is
//! left to the frontend.

use rand::Rng;

const SIZE_RANGE: (f64, f64) = (1.0, 5.0);
const OPACITY_RANGE: (f64, f64) = (0.2, 0.7);
const FLOAT_SECONDS_RANGE: (f64, f64) = (10.0, 20.0);
const MAX_SPEED: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
    pub float_seconds: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: rng.random::<f64>() * viewport.width,
            y: rng.random::<f64>() * viewport.height,
            speed_x: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            speed_y: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            size: lerp(SIZE_RANGE, rng.random()),
            opacity: lerp(OPACITY_RANGE, rng.random()),
            float_seconds: lerp(FLOAT_SECONDS_RANGE, rng.random()),
        }
    }

    fn advance(&mut self, viewport: Viewport) {
        self.x = wrap(self.x + self.speed_x, viewport.width);
        self.y = wrap(self.y + self.speed_y, viewport.height);
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; \
             background: rgba(102, 126, 234, {opacity:.2}); border-radius: 50%; \
             left: {x:.2}px; top: {y:.2}px; animation: float {float:.1}s linear infinite;",
            size = self.size,
            opacity = self.opacity,
            x = self.x,
            y = self.y,
            float = self.float_seconds,
        )
    }
}

fn lerp(range: (f64, f64), t: f64) -> f64 {
    range.0 + (range.1 - range.0) * t
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Number of particles for a viewport width: fewer on narrow screens.
pub fn particle_count(width: f64, breakpoint: f64, mobile: u32, desktop: u32) -> u32 {
    if width < breakpoint {
        mobile
    } else {
        desktop
    }
}

/// The field only starts on viewports strictly wider than the breakpoint.
pub fn particles_enabled(width: f64, breakpoint: f64) -> bool {
    width > breakpoint
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticleField {
    pub fn spawn<R: Rng>(rng: &mut R, count: u32, viewport: Viewport) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, viewport)).collect();
        Self {
            particles,
            viewport,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Moves every particle one frame, wrapping at the viewport edges. The
    /// viewport is re-read each frame so a resize takes effect immediately.
    pub fn step(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for particle in &mut self.particles {
            particle.advance(viewport);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub hue: f64,
    pub left_percent: f64,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; \
             background: hsl({hue:.0}deg, 70%, 60%); left: {left:.2}%; top: -10px; \
             z-index: 10000; animation: confetti-fall 3s linear forwards;",
            hue = self.hue,
            left = self.left_percent,
        )
    }
}

pub fn confetti_burst<R: Rng>(rng: &mut R, count: u32) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            hue: rng.random::<f64>() * 360.0,
            left_percent: rng.random::<f64>() * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn narrow_viewports_get_fewer_particles() {
        assert_eq!(particle_count(375.0, 768.0, 30, 50), 30);
        assert_eq!(particle_count(768.0, 768.0, 30, 50), 50);
        assert_eq!(particle_count(1440.0, 768.0, 30, 50), 50);
    }

    #[test]
    fn field_is_disabled_at_the_breakpoint() {
        assert!(!particles_enabled(768.0, 768.0));
        assert!(particles_enabled(769.0, 768.0));
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let viewport = Viewport::new(1280.0, 720.0);
        let field = ParticleField::spawn(&mut rng, 50, viewport);

        assert_eq!(field.particles().len(), 50);
        for particle in field.particles() {
            assert!((0.0..=1280.0).contains(&particle.x));
            assert!((0.0..=720.0).contains(&particle.y));
            assert!(particle.speed_x.abs() <= MAX_SPEED);
            assert!((1.0..=5.0).contains(&particle.size));
            assert!((0.2..=0.7).contains(&particle.opacity));
            assert!((10.0..=20.0).contains(&particle.float_seconds));
        }
    }

    #[test]
    fn particles_wrap_to_the_opposite_edge() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut particle = Particle {
            x: 0.1,
            y: 99.9,
            speed_x: -0.2,
            speed_y: 0.2,
            size: 2.0,
            opacity: 0.5,
            float_seconds: 12.0,
        };

        particle.advance(viewport);
        assert_eq!(particle.x, 100.0);
        assert_eq!(particle.y, 0.0);
    }

    #[test]
    fn confetti_uses_full_hue_circle() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let pieces = confetti_burst(&mut rng, 50);
        assert_eq!(pieces.len(), 50);
        assert!(pieces.iter().all(|piece| (0.0..360.0).contains(&piece.hue)));
        assert!(pieces.iter().all(|piece| (0.0..100.0).contains(&piece.left_percent)));
        assert!(pieces[0].style().contains("confetti-fall"));
    }

    proptest! {
        #[test]
        fn particles_stay_inside_viewport(seed in any::<u64>(), frames in 1usize..400) {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let viewport = Viewport::new(800.0, 600.0);
            let mut field = ParticleField::spawn(&mut rng, 20, viewport);

            for _ in 0..frames {
                field.step(viewport);
            }

            for particle in field.particles() {
                prop_assert!((0.0..=viewport.width).contains(&particle.x));
                prop_assert!((0.0..=viewport.height).contains(&particle.y));
            }
        }
    }
}
