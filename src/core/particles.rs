use super::constants::{CONE_HEIGHT, CONE_RADIUS, HUE_PERIOD};
use glam::Vec3;
use rand::Rng;

/// One point of the conical cloud.
///
/// Fields are fixed at creation; only the projected position changes from
/// frame to frame, and that lives in [`super::projection::ProjectedParticle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    position: Vec3,
    height_fraction: f32,
    color_offset: f32,
}

impl Particle {
    /// Place a particle on the disk at `height_fraction`, `angle` radians
    /// around the axis and `radius_fraction` of the way to the cone surface.
    pub fn new(height_fraction: f32, angle: f32, radius_fraction: f32, color_offset: f32) -> Self {
        let r = radius_fraction * height_fraction * CONE_RADIUS;
        Self {
            position: Vec3::new(
                angle.cos() * r,
                height_fraction * CONE_HEIGHT - CONE_HEIGHT / 2.0,
                angle.sin() * r,
            ),
            height_fraction,
            color_offset,
        }
    }

    /// Draw a particle from the cone distribution.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let height_fraction: f32 = rng.gen_range(0.0..1.0);
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius_fraction: f32 = rng.gen_range(0.0..1.0);
        let color_offset: f32 = rng.gen_range(0.0..HUE_PERIOD);
        Self::new(height_fraction, angle, radius_fraction, color_offset)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn height_fraction(&self) -> f32 {
        self.height_fraction
    }

    #[inline]
    pub fn color_offset(&self) -> f32 {
        self.color_offset
    }

    /// Largest disk radius allowed at this particle's height.
    #[cfg(test)]
    pub fn max_radius(&self) -> f32 {
        self.height_fraction * CONE_RADIUS
    }
}

/// Sample `count` fresh particles.
pub fn sample_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::sample(rng)).collect()
}
