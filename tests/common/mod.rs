// Shared host-side fixtures: a surface and audio sink that record what they
// were asked to do.

#![allow(dead_code)]

use glam::Vec2;
use soundboard::config::KeyMapEntry;
use soundboard::core::{AudioSink, Hsl, Paint, Soundboard, Surface, VirtualClock};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Hsl),
    Save,
    Restore,
    Translate(Vec2),
    Alpha(f32),
    Style(String),
    Fill,
    Stroke,
    Path,
}

pub struct RecordingSurface {
    pub size: Vec2,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear(_))).count()
    }

    pub fn alphas(&self) -> Vec<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Alpha(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn styles(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Style(css) => Some(css.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Shapes drawn since the last reset; each draw is bracketed by save/restore.
    pub fn draws(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Save).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> Vec2 {
        self.size
    }
    fn clear(&mut self, color: Hsl) {
        self.ops.push(Op::Clear(color));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn rotate(&mut self, _radians: f32) {}
    fn scale(&mut self, _factor: f32) {}
    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.ops.push(Op::Style(paint.css().to_string()));
    }
    fn set_stroke(&mut self, paint: &Paint, _width: f32) {
        self.ops.push(Op::Style(paint.css().to_string()));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::Path);
    }
    fn move_to(&mut self, _p: Vec2) {}
    fn line_to(&mut self, _p: Vec2) {}
    fn circle(&mut self, _center: Vec2, _radius: f32) {}
    fn bezier_to(&mut self, _c1: Vec2, _c2: Vec2, _end: Vec2) {}
    fn arc_to(&mut self, _corner: Vec2, _end: Vec2, _radius: f32) {}
    fn close_path(&mut self) {}
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<(char, f32, f32)>,
}

impl RecordingAudio {
    pub fn keys(&self) -> String {
        self.played.iter().map(|(k, _, _)| *k).collect()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, entry: &KeyMapEntry, mood: f32) {
        self.played.push((entry.key, entry.frequency, mood));
    }
}

pub type TestBoard = Soundboard<RecordingSurface, VirtualClock, RecordingAudio>;

pub fn board(clock: &VirtualClock) -> TestBoard {
    use soundboard::config::{KitId, ScaleId};
    Soundboard::new(
        Some(RecordingSurface::new(800.0, 600.0)),
        clock.clone(),
        RecordingAudio::default(),
        ScaleId::Pentatonic,
        KitId::Bleeps,
        7,
    )
    .expect("board")
}
