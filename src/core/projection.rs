use super::constants::{DEPTH_OFFSET, FOV};
use super::particles::Particle;
use glam::{Vec2, Vec3};

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A particle after rotation and perspective, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedParticle {
    pub screen: Vec2,
    /// Perspective scale already multiplied by the size setting.
    pub scale: f32,
    /// Rotated depth; larger is farther from the camera.
    pub depth: f32,
    pub height_fraction: f32,
    pub color_offset: f32,
}

/// Result of pushing a single object-space point through the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub screen: Vec2,
    pub scale: f32,
    pub depth: f32,
}

/// Perspective factor for a rotated depth.
///
/// Fixed-camera convention: only valid while `FOV + depth + DEPTH_OFFSET`
/// stays positive, which holds for the cone's depth range.
#[inline]
pub fn perspective_scale(depth: f32) -> f32 {
    FOV / (FOV + depth + DEPTH_OFFSET)
}

/// Rotate `point` about the vertical axis, then apply perspective and size.
///
/// `y` is never rotated, so the cloud spins like a tree on its trunk.
pub fn project_point(
    point: Vec3,
    rotation: f32,
    size: f32,
    viewport: Viewport,
) -> ProjectedPoint {
    let (sin, cos) = rotation.sin_cos();
    let x = point.x * cos - point.z * sin;
    let z = point.x * sin + point.z * cos;
    let scale = perspective_scale(z) * size;
    ProjectedPoint {
        screen: Vec2::new(x * scale, point.y * scale) + viewport.center(),
        scale,
        depth: z,
    }
}

#[inline]
pub fn project(
    particle: &Particle,
    rotation: f32,
    size: f32,
    viewport: Viewport,
) -> ProjectedParticle {
    let p = project_point(particle.position(), rotation, size, viewport);
    ProjectedParticle {
        screen: p.screen,
        scale: p.scale,
        depth: p.depth,
        height_fraction: particle.height_fraction(),
        color_offset: particle.color_offset(),
    }
}

/// Clear `out` and fill it with every particle projected for this frame.
pub fn project_all(
    particles: &[Particle],
    rotation: f32,
    size: f32,
    viewport: Viewport,
    out: &mut Vec<ProjectedParticle>,
) {
    out.clear();
    out.extend(particles.iter().map(|p| project(p, rotation, size, viewport)));
}

/// Painter's order: farthest (largest depth) first. Stable for ties.
#[inline]
pub fn depth_sort(points: &mut [ProjectedParticle]) {
    points.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
