//! Shape model: one animated entity per trigger, as a shared base record plus
//! a closed set of kind-specific geometries.

use crate::core::color::{palette_color, Paint};
use crate::core::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

/// Visual preset a key is bound to. `Squircle` produces a superellipse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualPreset {
    Circle,
    Polygon,
    Burst,
    Spiral,
    Blob,
    Ring,
    Particles,
    Squircle,
    RoundedRect,
    Star,
    PulseRing,
}

impl VisualPreset {
    /// Parse a preset id; unknown ids fall back to a circle.
    pub fn from_id(id: &str) -> Self {
        match id {
            "polygon" => Self::Polygon,
            "burst" => Self::Burst,
            "spiral" => Self::Spiral,
            "blob" => Self::Blob,
            "ring" => Self::Ring,
            "particles" => Self::Particles,
            "squircle" => Self::Squircle,
            "roundedRect" => Self::RoundedRect,
            "star" => Self::Star,
            "pulseRing" => Self::PulseRing,
            _ => Self::Circle,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Burst => "burst",
            Self::Spiral => "spiral",
            Self::Blob => "blob",
            Self::Ring => "ring",
            Self::Particles => "particles",
            Self::Squircle => "squircle",
            Self::RoundedRect => "roundedRect",
            Self::Star => "star",
            Self::PulseRing => "pulseRing",
        }
    }
}

/// Discriminant of [`ShapeKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Circle,
    Polygon,
    Burst,
    Spiral,
    Blob,
    Ring,
    Particles,
    Superellipse,
    RoundedRect,
    Star,
    PulseRing,
}

/// Free-flying dot owned by burst/particles shapes. Position is relative to
/// the parent's draw position and integrates independently of its easing.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per second.
    pub vel: Vec2,
    pub life: f32,
    pub color: Paint,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub enum ShapeKind {
    Circle {
        radius: f32,
    },
    Polygon {
        radius: f32,
        sides: u32,
    },
    Burst {
        particles: Vec<Particle>,
    },
    Spiral {
        radius: f32,
        arms: u32,
    },
    Blob {
        radius: f32,
        wobble: f32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
    },
    Particles {
        particles: Vec<Particle>,
    },
    Superellipse {
        radius_x: f32,
        radius_y: f32,
        /// 2 is an ellipse, 4 a squircle.
        n: f32,
    },
    RoundedRect {
        width: f32,
        height: f32,
        radius: f32,
    },
    Star {
        points: u32,
        inner_radius: f32,
        outer_radius: f32,
    },
    PulseRing {
        radius: f32,
    },
}

impl ShapeKind {
    pub fn tag(&self) -> ShapeTag {
        match self {
            ShapeKind::Circle { .. } => ShapeTag::Circle,
            ShapeKind::Polygon { .. } => ShapeTag::Polygon,
            ShapeKind::Burst { .. } => ShapeTag::Burst,
            ShapeKind::Spiral { .. } => ShapeTag::Spiral,
            ShapeKind::Blob { .. } => ShapeTag::Blob,
            ShapeKind::Ring { .. } => ShapeTag::Ring,
            ShapeKind::Particles { .. } => ShapeTag::Particles,
            ShapeKind::Superellipse { .. } => ShapeTag::Superellipse,
            ShapeKind::RoundedRect { .. } => ShapeTag::RoundedRect,
            ShapeKind::Star { .. } => ShapeTag::Star,
            ShapeKind::PulseRing { .. } => ShapeTag::PulseRing,
        }
    }

    pub fn particles(&self) -> Option<&[Particle]> {
        match self {
            ShapeKind::Burst { particles } | ShapeKind::Particles { particles } => Some(particles),
            _ => None,
        }
    }

    pub fn particles_mut(&mut self) -> Option<&mut Vec<Particle>> {
        match self {
            ShapeKind::Burst { particles } | ShapeKind::Particles { particles } => Some(particles),
            _ => None,
        }
    }
}

/// A live shape.
///
/// `life` runs from 1 at `created_at` down to 0 after `duration_ms`; the
/// colour is fixed at creation.
#[derive(Clone, Debug)]
pub struct Shape {
    pub id: u64,
    /// Resting position the shape glides toward.
    pub target: Vec2,
    pub created_at: Duration,
    pub life: f32,
    pub duration_ms: f32,
    pub color: Paint,
    pub scale: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Off-canvas entry point.
    pub from: Vec2,
    /// Current interpolated position between `from` and `target`.
    pub draw_pos: Vec2,
    /// Scale reached when the animation completes.
    pub max_scale: f32,
    pub kind: ShapeKind,
}

impl Shape {
    #[inline]
    pub fn tag(&self) -> ShapeTag {
        self.kind.tag()
    }
}

/// Inputs to [`spawn`] decided by the engine rather than the preset.
#[derive(Clone, Copy, Debug)]
pub struct SpawnParams {
    pub id: u64,
    pub key_index: usize,
    pub target: Vec2,
    pub from: Vec2,
    pub created_at: Duration,
    /// Scale/kit (and reduced-motion) multiplier applied to the base duration.
    pub duration_multiplier: f32,
}

fn jittered_color(key_index: usize, rng: &mut impl Rng) -> Paint {
    let jitter = (rng.gen::<f32>() - 0.5) * HUE_JITTER_DEG;
    Paint::new(palette_color(key_index).rotate_hue(jitter))
}

fn spawn_particles(count: usize, key_index: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let speed = 80.0 + rng.gen::<f32>() * 120.0;
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::from_angle(angle) * speed,
                life: 1.0,
                color: jittered_color(key_index, rng),
                size: 3.0 + (key_index % 4) as f32,
            }
        })
        .collect()
}

// Geometry and base duration (ms) for a preset at key index `k`.
fn geometry(preset: VisualPreset, k: usize, rng: &mut impl Rng) -> (ShapeKind, f32) {
    let standard = DURATION_BASE_MS + (k % 5) as f32 * DURATION_VARY_MS;
    let f = |m: usize| (k % m) as f32;
    match preset {
        VisualPreset::Circle => (
            ShapeKind::Circle {
                radius: 35.0 + f(6) * 11.0,
            },
            standard,
        ),
        VisualPreset::Polygon => (
            ShapeKind::Polygon {
                radius: 40.0 + f(4) * 18.0,
                sides: 3 + (k % 5) as u32,
            },
            standard,
        ),
        VisualPreset::Burst => (
            ShapeKind::Burst {
                particles: spawn_particles(12 + k % 10, k, rng),
            },
            600.0 + f(4) * 100.0,
        ),
        VisualPreset::Spiral => (
            ShapeKind::Spiral {
                radius: 50.0 + f(4) * 18.0,
                arms: 2 + (k % 4) as u32,
            },
            standard,
        ),
        VisualPreset::Blob => (
            ShapeKind::Blob {
                radius: 42.0 + f(4) * 16.0,
                wobble: 0.15 + f(3) * 0.05,
            },
            standard,
        ),
        VisualPreset::Ring => {
            let r = 28.0 + f(5) * 12.0;
            (
                ShapeKind::Ring {
                    inner_radius: r,
                    outer_radius: r + 18.0 + f(8),
                },
                standard,
            )
        }
        VisualPreset::Particles => (
            ShapeKind::Particles {
                particles: spawn_particles(8 + k % 8, k, rng),
            },
            700.0 + f(4) * 80.0,
        ),
        VisualPreset::Squircle => (
            ShapeKind::Superellipse {
                radius_x: 48.0 + f(3) * 16.0,
                radius_y: 38.0 + f(4) * 14.0,
                n: 2.5 + f(3) * 0.5,
            },
            standard,
        ),
        VisualPreset::RoundedRect => (
            ShapeKind::RoundedRect {
                width: 55.0 + f(4) * 20.0,
                height: 44.0 + f(3) * 16.0,
                radius: 6.0 + f(4) * 2.0,
            },
            standard,
        ),
        VisualPreset::Star => {
            let outer = 40.0 + f(4) * 18.0;
            (
                ShapeKind::Star {
                    points: 4 + (k % 5) as u32,
                    inner_radius: outer * 0.4,
                    outer_radius: outer,
                },
                standard,
            )
        }
        VisualPreset::PulseRing => (
            ShapeKind::PulseRing {
                radius: 40.0 + f(5) * 14.0,
            },
            standard,
        ),
    }
}

/// Build a fresh shape for `preset` with life 1.
pub fn spawn(preset: VisualPreset, params: SpawnParams, rng: &mut impl Rng) -> Shape {
    let k = params.key_index;
    let (kind, base_ms) = geometry(preset, k, rng);
    let mut rotation_speed = (rng.gen::<f32>() - 0.5) * 3.0;
    match preset {
        VisualPreset::Spiral => rotation_speed *= 1.5,
        VisualPreset::Ring => rotation_speed *= 0.5,
        _ => {}
    }
    Shape {
        id: params.id,
        target: params.target,
        created_at: params.created_at,
        life: 1.0,
        duration_ms: base_ms * params.duration_multiplier,
        color: jittered_color(k, rng),
        scale: 1.0,
        rotation: 0.0,
        rotation_speed,
        from: params.from,
        draw_pos: params.from,
        max_scale: MAX_SCALE_LOW + rng.gen::<f32>() * MAX_SCALE_SPAN,
        kind,
    }
}
