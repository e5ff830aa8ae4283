//! Kind-specific geometry. Each shape is drawn around the origin after the
//! caller's translate/rotate/scale.

use crate::core::easing::ease_out_cubic;
use crate::core::shape::{Particle, Shape, ShapeKind};
use crate::core::surface::Surface;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const SPIRAL_STEPS: usize = 24;
const BLOB_SEGMENTS: usize = 12;
const SUPERELLIPSE_STEPS: usize = 64;

/// Draw one shape. Shapes with no remaining life are skipped.
pub fn draw_shape(surface: &mut impl Surface, shape: &Shape, now_ms: f32) {
    if shape.life <= 0.0 {
        return;
    }
    surface.save();
    surface.translate(shape.draw_pos);
    if let Some(particles) = shape.kind.particles() {
        draw_particles(surface, particles);
        surface.restore();
        return;
    }
    let alpha = ease_out_cubic(shape.life);
    surface.set_alpha(alpha);
    surface.rotate(shape.rotation);
    surface.scale(shape.scale);
    let color = &shape.color;
    surface.set_fill(color);
    match &shape.kind {
        ShapeKind::Circle { radius } => {
            surface.begin_path();
            surface.circle(Vec2::ZERO, *radius);
            surface.fill();
            surface.set_stroke(color, 2.0);
            surface.set_alpha(alpha * 0.85);
            surface.stroke();
        }
        ShapeKind::Polygon { radius, sides } => {
            surface.begin_path();
            let n = *sides as f32;
            for i in 0..=*sides {
                let a = (i as f32 / n) * TAU - FRAC_PI_2;
                let p = Vec2::from_angle(a) * *radius;
                if i == 0 {
                    surface.move_to(p);
                } else {
                    surface.line_to(p);
                }
            }
            surface.close_path();
            surface.fill();
            surface.set_stroke(color, 2.0);
            surface.set_alpha(alpha * 0.8);
            surface.stroke();
        }
        ShapeKind::Ring {
            inner_radius,
            outer_radius,
        } => {
            surface.begin_path();
            surface.circle(Vec2::ZERO, (inner_radius + outer_radius) / 2.0);
            surface.set_stroke(color, outer_radius - inner_radius);
            surface.stroke();
        }
        ShapeKind::Spiral { radius, arms } => {
            surface.set_stroke(color, 2.0 + 4.0 * shape.life);
            for arm in 0..*arms {
                let base = (arm as f32 / *arms as f32) * TAU + shape.rotation;
                surface.begin_path();
                for i in 0..=SPIRAL_STEPS {
                    let t = i as f32 / SPIRAL_STEPS as f32;
                    let p = Vec2::from_angle(base + t * PI * 3.0) * (t * radius);
                    if i == 0 {
                        surface.move_to(p);
                    } else {
                        surface.line_to(p);
                    }
                }
                surface.stroke();
            }
        }
        ShapeKind::Star {
            points,
            inner_radius,
            outer_radius,
        } => {
            surface.begin_path();
            let n = points * 2;
            for i in 0..=n {
                let a = (i as f32 / n as f32) * TAU - FRAC_PI_2;
                let r = if i % 2 == 0 {
                    *outer_radius
                } else {
                    *inner_radius
                };
                let p = Vec2::from_angle(a) * r;
                if i == 0 {
                    surface.move_to(p);
                } else {
                    surface.line_to(p);
                }
            }
            surface.close_path();
            surface.fill();
        }
        ShapeKind::PulseRing { radius } => {
            let progress = ease_out_cubic(1.0 - shape.life);
            surface.begin_path();
            surface.circle(Vec2::ZERO, radius * progress);
            surface.set_stroke(color, 6.0);
            surface.stroke();
        }
        ShapeKind::Blob { radius, wobble } => draw_blob(surface, *radius, *wobble, now_ms),
        ShapeKind::Superellipse {
            radius_x,
            radius_y,
            n,
        } => {
            let pow = n.max(0.25);
            surface.begin_path();
            for i in 0..=SUPERELLIPSE_STEPS {
                let t = (i as f32 / SUPERELLIPSE_STEPS as f32) * TAU;
                let (sin, cos) = t.sin_cos();
                let p = Vec2::new(
                    radius_x * cos.signum() * cos.abs().powf(2.0 / pow),
                    radius_y * sin.signum() * sin.abs().powf(2.0 / pow),
                );
                if i == 0 {
                    surface.move_to(p);
                } else {
                    surface.line_to(p);
                }
            }
            surface.close_path();
            surface.fill();
        }
        ShapeKind::RoundedRect {
            width,
            height,
            radius,
        } => {
            let hw = width / 2.0;
            let hh = height / 2.0;
            let r = radius.min(hw).min(hh);
            surface.begin_path();
            surface.move_to(Vec2::new(-hw + r, -hh));
            surface.line_to(Vec2::new(hw - r, -hh));
            surface.arc_to(Vec2::new(hw, -hh), Vec2::new(hw, -hh + r), r);
            surface.line_to(Vec2::new(hw, hh - r));
            surface.arc_to(Vec2::new(hw, hh), Vec2::new(hw - r, hh), r);
            surface.line_to(Vec2::new(-hw + r, hh));
            surface.arc_to(Vec2::new(-hw, hh), Vec2::new(-hw, hh - r), r);
            surface.line_to(Vec2::new(-hw, -hh + r));
            surface.arc_to(Vec2::new(-hw, -hh), Vec2::new(-hw + r, -hh), r);
            surface.close_path();
            surface.fill();
        }
        ShapeKind::Burst { .. } | ShapeKind::Particles { .. } => {}
    }
    surface.restore();
}

fn draw_particles(surface: &mut impl Surface, particles: &[Particle]) {
    for p in particles.iter().filter(|p| p.life > 0.0) {
        surface.set_alpha(p.life);
        surface.set_fill(&p.color);
        surface.begin_path();
        surface.circle(p.pos, p.size);
        surface.fill();
    }
}

// Closed Catmull-Rom loop through wobbling control points.
fn draw_blob(surface: &mut impl Surface, radius: f32, wobble: f32, now_ms: f32) {
    let phase = now_ms * 0.003;
    let pts: [Vec2; BLOB_SEGMENTS] = std::array::from_fn(|i| {
        let fi = i as f32;
        let a = (fi / BLOB_SEGMENTS as f32) * TAU;
        let w = 1.0 + wobble * (phase + fi).sin() + wobble * 0.5 * (phase * 1.3 + fi * 2.0).sin();
        Vec2::from_angle(a) * (radius * w)
    });
    let n = BLOB_SEGMENTS;
    surface.begin_path();
    for i in 0..n {
        let p0 = pts[(i + n - 1) % n];
        let p1 = pts[i];
        let p2 = pts[(i + 1) % n];
        let p3 = pts[(i + 2) % n];
        if i == 0 {
            surface.move_to(p1);
        }
        surface.bezier_to(p1 + (p2 - p0) / 6.0, p2 - (p3 - p1) / 6.0, p2);
    }
    surface.close_path();
    surface.fill();
}
