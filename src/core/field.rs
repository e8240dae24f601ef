use super::config::FieldConfig;
use super::constants::{
    HUE_PERIOD, HUE_STEP_PER_FRAME, PARTICLE_LIGHTNESS, PARTICLE_RADIUS, PARTICLE_SATURATION,
    STAR_HUE_RATE, STAR_LIGHTNESS, STAR_RADIUS, STAR_SATURATION, STAR_Y,
};
use super::interaction::DragState;
use super::paint::{wrap_hue, Hsl, Painter};
use super::particles::{sample_particles, Particle};
use super::projection::{
    depth_sort, project_all, project_point, ProjectedParticle, ProjectedPoint, Viewport,
};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// The rotating particle tree: particles, settings and animation state.
pub struct ParticleField {
    particles: Vec<Particle>,
    config: FieldConfig,
    // Both kept reduced to one period so f32 steps never vanish
    rotation: f32,
    global_hue: f32,
    drag: DragState,
    rng: StdRng,
    // Reused every frame to avoid reallocating
    projected: Vec<ProjectedParticle>,
}

impl ParticleField {
    /// Build a field and sample `config.particle_count` particles from `seed`.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            config,
            rotation: 0.0,
            global_hue: 0.0,
            drag: DragState::default(),
            rng: StdRng::seed_from_u64(seed),
            projected: Vec::new(),
        };
        field.regenerate(field.config.particle_count);
        field
    }

    /// Discard every particle and sample `count` new ones.
    pub fn regenerate(&mut self, count: usize) {
        self.particles = sample_particles(count, &mut self.rng);
        log::info!("[field] regenerated {} particles", count);
    }

    pub fn set_particle_count(&mut self, count: usize) {
        self.config.particle_count = count;
        self.regenerate(count);
    }

    /// Swap in a fresh seeded random source and resample at the current count.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.regenerate(self.config.particle_count);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
    }

    pub fn set_size(&mut self, size: f32) {
        self.config.size = size;
    }

    pub fn set_base_hue(&mut self, base_hue: f32) {
        self.config.base_hue = base_hue;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[cfg(test)]
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation.rem_euclid(TAU);
    }

    pub fn global_hue(&self) -> f32 {
        self.global_hue
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    // ---------------- Pointer input ----------------
    pub fn pointer_down(&mut self, x: f32) {
        self.drag.begin(x);
    }

    pub fn pointer_move(&mut self, x: f32) {
        if let Some(delta) = self.drag.move_to(x) {
            self.rotation = (self.rotation + delta).rem_euclid(TAU);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    // ---------------- Frame ----------------
    /// Step the per-frame animation state. Dragging suspends auto-rotation.
    pub fn advance(&mut self) {
        if !self.drag.active {
            self.rotation = (self.rotation + self.config.speed).rem_euclid(TAU);
        }
        self.global_hue = (self.global_hue + HUE_STEP_PER_FRAME).rem_euclid(HUE_PERIOD);
    }

    /// Project every particle at the current rotation, farthest first.
    pub fn project(&mut self, viewport: Viewport) -> &[ProjectedParticle] {
        project_all(
            &self.particles,
            self.rotation,
            self.config.size,
            viewport,
            &mut self.projected,
        );
        depth_sort(&mut self.projected);
        &self.projected
    }

    /// Apex ornament; sits on the axis so rotation leaves it in place.
    pub fn star(&self, viewport: Viewport) -> ProjectedPoint {
        project_point(
            Vec3::new(0.0, STAR_Y, 0.0),
            self.rotation,
            self.config.size,
            viewport,
        )
    }

    #[inline]
    pub fn particle_color(&self, p: &ProjectedParticle) -> Hsl {
        Hsl::new(
            wrap_hue(self.config.base_hue + self.global_hue + p.color_offset),
            PARTICLE_SATURATION,
            PARTICLE_LIGHTNESS,
        )
    }

    #[inline]
    pub fn star_color(&self) -> Hsl {
        Hsl::new(
            wrap_hue(self.global_hue * STAR_HUE_RATE),
            STAR_SATURATION,
            STAR_LIGHTNESS,
        )
    }

    /// Produce one complete frame on `painter`.
    pub fn render_frame<P: Painter + ?Sized>(&mut self, painter: &mut P, viewport: Viewport) {
        painter.clear(viewport);
        self.advance();
        self.project(viewport);

        for p in &self.projected {
            let color = self.particle_color(p);
            painter.fill_circle(p.screen.x, p.screen.y, PARTICLE_RADIUS * p.scale, color);
        }

        let star = self.star(viewport);
        painter.fill_circle(
            star.screen.x,
            star.screen.y,
            STAR_RADIUS * star.scale,
            self.star_color(),
        );
    }
}
