//! Visual engine: owns the live shape collection and the ambient background,
//! advances both once per frame and redraws everything onto a [`Surface`].
//!
//! The engine never schedules itself; the host drives it by calling
//! [`VisualEngine::frame`] from its frame loop and stops the loop once
//! [`VisualEngine::is_running`] turns false.

use crate::config::{key_index, normalize_key, KitId, ScaleId};
use crate::core::clock::Clock;
use crate::core::color::{palette_color, Hsl, DEFAULT_BACKGROUND};
use crate::core::constants::*;
use crate::core::draw::draw_shape;
use crate::core::easing::*;
use crate::core::error::EngineError;
use crate::core::shape::{spawn, Shape, ShapeTag, SpawnParams, VisualPreset};
use crate::core::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Key → visual preset binding for the active scale/kit selection.
pub trait PresetLookup {
    fn visual_preset(&self, key: char) -> Option<VisualPreset>;
}

/// Mood context read at trigger time. Only used to scale shape lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualContext {
    pub scale: ScaleId,
    pub kit: KitId,
    pub reduced_motion: bool,
}

impl VisualContext {
    /// Calmer scales and sustained kits live longer; percussive kits shorter.
    pub fn duration_multiplier(&self) -> f32 {
        let scale = match self.scale {
            ScaleId::Pentatonic => 1.2,
            ScaleId::Chromatic => 0.85,
            ScaleId::Minor => 1.05,
            ScaleId::Major => 1.0,
        };
        let kit = match self.kit {
            KitId::Drums => 0.7,
            KitId::Pads => 1.4,
            KitId::Bleeps => 1.0,
        };
        let motion = if self.reduced_motion {
            REDUCED_MOTION_MULTIPLIER
        } else {
            1.0
        };
        scale * kit * motion
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Destroyed,
}

/// Scale easing per kind; `None` for kinds that do not grow.
pub fn scale_curve(tag: ShapeTag) -> Option<fn(f32) -> f32> {
    match tag {
        ShapeTag::Circle => Some(ease_out_cubic),
        ShapeTag::Polygon | ShapeTag::RoundedRect | ShapeTag::Star => Some(ease_out_bounce),
        ShapeTag::Ring | ShapeTag::Blob => Some(ease_out_back),
        ShapeTag::Spiral => Some(ease_out_quart),
        ShapeTag::Superellipse => Some(ease_out_elastic),
        ShapeTag::Burst | ShapeTag::Particles | ShapeTag::PulseRing => None,
    }
}

/// Off-canvas start point for one of the 8 perimeter zones:
/// 0..=3 are corners, 4..=7 are the left, right, bottom and top edges.
pub fn entry_point(zone: u32, size: Vec2, rng: &mut impl Rng) -> Vec2 {
    let m = ENTRY_MARGIN_PX;
    let along = SPAWN_REGION_START + SPAWN_REGION_SPAN * rng.gen::<f32>();
    match zone {
        0 => Vec2::new(size.x + m, size.y + m),
        1 => Vec2::new(-m, size.y + m),
        2 => Vec2::new(size.x + m, -m),
        3 => Vec2::new(-m, -m),
        4 => Vec2::new(-m, size.y * along),
        5 => Vec2::new(size.x + m, size.y * along),
        6 => Vec2::new(size.x * along, size.y + m),
        _ => Vec2::new(size.x * along, -m),
    }
}

pub struct VisualEngine<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    rng: StdRng,
    shapes: Vec<Shape>,
    next_id: u64,
    background: Hsl,
    target_background: Hsl,
    last_trigger: Option<Duration>,
    state: EngineState,
}

impl<S: Surface, C: Clock> VisualEngine<S, C> {
    /// Create an engine drawing onto `surface`. Without a surface there is
    /// nothing to animate, so construction fails.
    pub fn new(surface: Option<S>, clock: C, seed: u64) -> Result<Self, EngineError> {
        let surface = surface.ok_or(EngineError::NoSurface)?;
        log::info!("[visuals] engine ready");
        Ok(Self {
            surface,
            clock,
            rng: StdRng::seed_from_u64(seed),
            shapes: Vec::new(),
            next_id: 0,
            background: DEFAULT_BACKGROUND,
            target_background: DEFAULT_BACKGROUND,
            last_trigger: None,
            state: EngineState::Running,
        })
    }

    /// Spawn a shape for `key`. Returns false (and changes nothing) when the
    /// key has no visual binding or the engine has been destroyed.
    pub fn trigger<L>(&mut self, key: char, lookup: &L, ctx: VisualContext) -> bool
    where
        L: PresetLookup + ?Sized,
    {
        if self.state == EngineState::Destroyed {
            return false;
        }
        let key = normalize_key(key);
        let (Some(preset), Some(k)) = (lookup.visual_preset(key), key_index(key)) else {
            log::debug!("[visuals] no binding for {:?}", key);
            return false;
        };
        let now = self.clock.now();
        self.trim_to_cap();

        let key_color = palette_color(k);
        self.target_background =
            Hsl::new(key_color.h, BG_TRIGGER_SATURATION, BG_TRIGGER_LIGHTNESS);
        self.last_trigger = Some(now);

        let size = self.surface.logical_size();
        let target = Vec2::new(
            size.x * (SPAWN_REGION_START + SPAWN_REGION_SPAN * self.rng.gen::<f32>()),
            size.y * (SPAWN_REGION_START + SPAWN_REGION_SPAN * self.rng.gen::<f32>()),
        );
        let zone = self.rng.gen_range(0..ENTRY_ZONES);
        let from = entry_point(zone, size, &mut self.rng);
        self.next_id += 1;
        let params = SpawnParams {
            id: self.next_id,
            key_index: k,
            target,
            from,
            created_at: now,
            duration_multiplier: ctx.duration_multiplier(),
        };
        let shape = spawn(preset, params, &mut self.rng);
        self.shapes.push(shape);
        true
    }

    // Drop the oldest ~30% in one step so the push that follows stays under the cap.
    fn trim_to_cap(&mut self) {
        if self.shapes.len() >= MAX_SHAPES {
            let keep = (MAX_SHAPES as f32 * TRIM_KEEP_RATIO) as usize;
            let excess = self.shapes.len() - keep;
            self.shapes.drain(..excess);
            log::debug!("[visuals] trimmed {} oldest shapes", excess);
        }
    }

    /// Scalar in \[0, 1\] from the current background hue and darkness.
    pub fn mood(&self) -> f32 {
        let h = self.background.h / 360.0;
        let l = self.background.l / 100.0;
        ((h + (1.0 - l)) / 2.0).clamp(0.0, 1.0)
    }

    /// Clear all shapes and make further triggers no-ops. Idempotent.
    pub fn destroy(&mut self) {
        if self.state == EngineState::Running {
            log::info!("[visuals] engine destroyed");
        }
        self.state = EngineState::Destroyed;
        self.shapes.clear();
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// One full frame: advance the simulation then redraw.
    pub fn frame(&mut self) {
        self.update();
        self.render();
    }

    /// Advance background and shapes by one nominal step, removing shapes
    /// whose life has run out.
    pub fn update(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }
        let now = self.clock.now();
        if let Some(last) = self.last_trigger {
            if now.saturating_sub(last) > BG_IDLE_RESET {
                self.target_background = DEFAULT_BACKGROUND;
            }
        }
        self.background = self.background.lerp(self.target_background, BG_LERP);
        self.shapes.retain_mut(|s| {
            update_shape(s, now, FRAME_STEP_MS);
            s.life > CULL_EPSILON
        });
    }

    /// Clear to the ambient colour and draw shapes oldest first.
    pub fn render(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }
        let now_ms = self.clock.now().as_secs_f32() * 1000.0;
        self.surface.clear(self.background);
        for shape in &self.shapes {
            draw_shape(&mut self.surface, shape, now_ms);
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn background(&self) -> Hsl {
        self.background
    }

    pub fn target_background(&self) -> Hsl {
        self.target_background
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn update_shape(s: &mut Shape, now: Duration, dt_ms: f32) {
    let age_ms = now.saturating_sub(s.created_at).as_secs_f32() * 1000.0;
    let life = (1.0 - age_ms / s.duration_ms).max(0.0);
    s.life = life;
    let t = 1.0 - life;
    s.draw_pos = s.from.lerp(s.target, ease_out_cubic(t));

    let tag = s.tag();
    if let Some(curve) = scale_curve(tag) {
        s.scale = MIN_SCALE + (s.max_scale - MIN_SCALE) * curve(t);
    }
    if let Some(particles) = s.kind.particles_mut() {
        let fade = ease_out_cubic(life);
        for p in particles.iter_mut() {
            p.pos += p.vel * (dt_ms / 1000.0);
            p.life = fade;
        }
    } else {
        s.rotation += dt_ms * ROTATION_RATE_PER_MS * s.rotation_speed;
    }
}
