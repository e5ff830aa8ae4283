// Host-side tests for the visual engine, driven on a virtual clock with a
// recording surface.

mod common;

use common::RecordingSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use soundboard::config::{KeyMap, KitId, ScaleId};
use soundboard::core::constants::{BG_IDLE_RESET, MAX_SHAPES};
use soundboard::core::*;

fn ctx() -> VisualContext {
    VisualContext {
        scale: ScaleId::Pentatonic,
        kit: KitId::Bleeps,
        reduced_motion: false,
    }
}

fn engine(clock: &VirtualClock) -> VisualEngine<RecordingSurface, VirtualClock> {
    match VisualEngine::new(Some(RecordingSurface::new(800.0, 600.0)), clock.clone(), 11) {
        Ok(e) => e,
        Err(e) => panic!("engine: {}", e),
    }
}

#[test]
fn construction_requires_a_surface() {
    let r = VisualEngine::<RecordingSurface, _>::new(None, VirtualClock::new(), 1);
    assert!(matches!(r, Err(EngineError::NoSurface)));
}

#[test]
fn each_trigger_adds_one_shape_at_full_life() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for (i, key) in "abcde".chars().enumerate() {
        assert!(e.trigger(key, &keys, ctx()));
        assert_eq!(e.shapes().len(), i + 1);
        assert_eq!(e.shapes()[i].life, 1.0);
    }
}

#[test]
fn uppercase_keys_trigger_like_lowercase() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    assert!(e.trigger('A', &keys, ctx()));
    assert_eq!(e.shapes()[0].tag(), ShapeTag::Circle);
}

#[test]
fn unmapped_key_changes_nothing() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    let before = e.target_background();
    assert!(!e.trigger('1', &keys, ctx()));
    assert!(!e.trigger(' ', &keys, ctx()));
    assert!(e.shapes().is_empty());
    assert_eq!(e.target_background(), before);
}

#[test]
fn shape_count_never_exceeds_cap() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for i in 0..(MAX_SHAPES * 3) {
        let key = (b'a' + (i % 26) as u8) as char;
        e.trigger(key, &keys, ctx());
        assert!(e.shapes().len() <= MAX_SHAPES);
    }
}

#[test]
fn trimming_drops_the_oldest_shapes() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for _ in 0..MAX_SHAPES {
        e.trigger('a', &keys, ctx());
    }
    let newest = e.shapes().last().map(|s| s.id);
    e.trigger('b', &keys, ctx());
    let ids: Vec<u64> = e.shapes().iter().map(|s| s.id).collect();
    assert!(ids.len() < MAX_SHAPES);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.contains(&newest.unwrap_or_default()));
    assert!(!ids.contains(&1));
}

#[test]
fn life_decays_monotonically_and_shapes_are_culled() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    e.trigger('a', &keys, ctx());
    let mut prev = 1.0;
    for _ in 0..200 {
        clock.advance_ms(16);
        e.frame();
        match e.shapes().first() {
            Some(s) => {
                assert!(s.life <= prev);
                assert!(s.life > 0.0);
                prev = s.life;
            }
            None => return,
        }
    }
    panic!("shape outlived 3.2s");
}

#[test]
fn shapes_with_no_life_are_never_drawn() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for key in "abcdefghijklm".chars() {
        e.trigger(key, &keys, ctx());
    }
    for _ in 0..150 {
        clock.advance_ms(16);
        e.surface_mut().reset();
        e.frame();
        assert_eq!(e.surface().clears(), 1);
        assert_eq!(e.surface().draws(), e.shapes().len());
        assert!(e.surface().alphas().iter().all(|a| *a > 0.0));
        assert!(e.shapes().iter().all(|s| s.life > 0.0));
    }
}

#[test]
fn shapes_glide_from_entry_point_toward_target() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    e.trigger('a', &keys, ctx());
    let s = &e.shapes()[0];
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(s.draw_pos, s.from);
    assert!(s.target.x >= size.x * 0.2 && s.target.x <= size.x * 0.8);
    assert!(s.target.y >= size.y * 0.2 && s.target.y <= size.y * 0.8);
    let outside = s.from.x < 0.0 || s.from.y < 0.0 || s.from.x > size.x || s.from.y > size.y;
    assert!(outside, "entry {:?} inside canvas", s.from);

    let start = s.from.distance(s.target);
    clock.advance_ms(400);
    e.update();
    let s = &e.shapes()[0];
    assert!(s.draw_pos.distance(s.target) < start);
}

#[test]
fn background_follows_trigger_then_resets_when_idle() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    assert_eq!(e.target_background(), DEFAULT_BACKGROUND);
    e.trigger('b', &keys, ctx());
    let target = e.target_background();
    assert_eq!(target.h, palette_color(1).h);
    assert_eq!((target.s, target.l), (40.0, 18.0));

    e.update();
    assert_ne!(e.background(), DEFAULT_BACKGROUND);

    clock.advance(BG_IDLE_RESET);
    e.update();
    assert_eq!(e.target_background(), target);

    clock.advance_ms(1);
    e.update();
    assert_eq!(e.target_background(), DEFAULT_BACKGROUND);
}

#[test]
fn mood_stays_in_unit_range() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    assert!((0.0..=1.0).contains(&e.mood()));
    for key in "qwertyuiopasdfghjklzxcvbnm".chars() {
        e.trigger(key, &keys, ctx());
        for _ in 0..10 {
            clock.advance_ms(16);
            e.frame();
            assert!((0.0..=1.0).contains(&e.mood()));
        }
    }
}

#[test]
fn destroy_is_idempotent_and_silences_the_engine() {
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    e.trigger('a', &keys, ctx());
    e.destroy();
    e.destroy();
    assert_eq!(e.state(), EngineState::Destroyed);
    assert!(!e.is_running());
    assert!(e.shapes().is_empty());
    assert!(!e.trigger('a', &keys, ctx()));

    e.surface_mut().reset();
    e.frame();
    assert_eq!(e.surface().clears(), 0);
}

#[test]
fn duration_multiplier_reflects_scale_kit_and_motion() {
    let base = ctx().duration_multiplier();
    assert!((base - 1.2).abs() < 1e-6);
    let percussive = VisualContext {
        scale: ScaleId::Chromatic,
        kit: KitId::Drums,
        reduced_motion: false,
    };
    assert!((percussive.duration_multiplier() - 0.85 * 0.7).abs() < 1e-6);
    let reduced = VisualContext {
        reduced_motion: true,
        ..ctx()
    };
    assert!((reduced.duration_multiplier() - base * 0.25).abs() < 1e-6);
}

#[test]
fn spawn_builds_kind_for_each_preset() {
    let mut rng = StdRng::seed_from_u64(3);
    let cases = [
        (VisualPreset::Circle, ShapeTag::Circle),
        (VisualPreset::Squircle, ShapeTag::Superellipse),
        (VisualPreset::Burst, ShapeTag::Burst),
        (VisualPreset::PulseRing, ShapeTag::PulseRing),
        (VisualPreset::from_id("unknown"), ShapeTag::Circle),
    ];
    for (preset, tag) in cases {
        let shape = spawn(
            preset,
            SpawnParams {
                id: 1,
                key_index: 2,
                target: Vec2::new(100.0, 100.0),
                from: Vec2::new(-120.0, -120.0),
                created_at: std::time::Duration::ZERO,
                duration_multiplier: 1.0,
            },
            &mut rng,
        );
        assert_eq!(shape.tag(), tag);
        assert_eq!(shape.life, 1.0);
        assert!((1.8..3.2).contains(&shape.max_scale));
        assert!(shape.duration_ms > 0.0);
    }
}

#[test]
fn burst_particles_scale_with_key_index() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = |k| SpawnParams {
        id: 1,
        key_index: k,
        target: Vec2::ZERO,
        from: Vec2::ZERO,
        created_at: std::time::Duration::ZERO,
        duration_multiplier: 1.0,
    };
    let burst = spawn(VisualPreset::Burst, params(2), &mut rng);
    assert_eq!(burst.kind.particles().map(|p| p.len()), Some(14));
    let dots = spawn(VisualPreset::Particles, params(6), &mut rng);
    assert_eq!(dots.kind.particles().map(|p| p.len()), Some(14));
    assert!(spawn(VisualPreset::Star, params(9), &mut rng).kind.particles().is_none());
}

// Key letter for each visual preset under the default 12-slot cycle.
const EASED_KINDS: [(char, ShapeTag, fn(f32) -> f32); 8] = [
    ('a', ShapeTag::Circle, easing::ease_out_cubic),
    ('b', ShapeTag::Polygon, easing::ease_out_bounce),
    ('d', ShapeTag::Spiral, easing::ease_out_quart),
    ('e', ShapeTag::Blob, easing::ease_out_back),
    ('f', ShapeTag::Ring, easing::ease_out_back),
    ('h', ShapeTag::Superellipse, easing::ease_out_elastic),
    ('i', ShapeTag::RoundedRect, easing::ease_out_bounce),
    ('j', ShapeTag::Star, easing::ease_out_bounce),
];

#[test]
fn scale_curve_table_per_kind() {
    for (_, tag, curve) in EASED_KINDS {
        let chosen = scale_curve(tag).map(|f| f(0.37));
        assert_eq!(chosen, Some(curve(0.37)), "{:?}", tag);
    }
    for tag in [ShapeTag::Burst, ShapeTag::Particles, ShapeTag::PulseRing] {
        assert!(scale_curve(tag).is_none(), "{:?}", tag);
    }
}

#[test]
fn scale_grows_along_each_kinds_curve() {
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for (key, tag, curve) in EASED_KINDS {
        let clock = VirtualClock::new();
        let mut e = engine(&clock);
        assert!(e.trigger(key, &keys, ctx()));
        assert_eq!(e.shapes()[0].tag(), tag);
        clock.advance_ms(300);
        e.update();
        let s = &e.shapes()[0];
        let t = 1.0 - s.life;
        let expected = 0.15 + (s.max_scale - 0.15) * curve(t);
        assert!(
            (s.scale - expected).abs() < 1e-4,
            "{:?}: scale {} expected {}",
            tag,
            s.scale,
            expected
        );
        assert!((t - 300.0 / s.duration_ms).abs() < 1e-4);
    }
}

#[test]
fn pulse_ring_rotates_but_keeps_its_scale() {
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    e.trigger('k', &keys, ctx());
    let speed = e.shapes()[0].rotation_speed;
    for _ in 0..3 {
        clock.advance_ms(16);
        e.update();
    }
    let s = &e.shapes()[0];
    assert_eq!(s.tag(), ShapeTag::PulseRing);
    assert_eq!(s.scale, 1.0);
    assert!((s.rotation - 3.0 * 16.0 * 0.004 * speed).abs() < 1e-5);
}

#[test]
fn rotation_advances_per_frame_for_solid_kinds() {
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for (key, tag, _) in EASED_KINDS {
        let clock = VirtualClock::new();
        let mut e = engine(&clock);
        e.trigger(key, &keys, ctx());
        let speed = e.shapes()[0].rotation_speed;
        for _ in 0..5 {
            clock.advance_ms(16);
            e.update();
        }
        let rotation = e.shapes()[0].rotation;
        assert!(
            (rotation - 5.0 * 16.0 * 0.004 * speed).abs() < 1e-5,
            "{:?}",
            tag
        );
    }
}

#[test]
fn particles_integrate_velocity_and_fade_with_parent() {
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    for key in ['c', 'g'] {
        let clock = VirtualClock::new();
        let mut e = engine(&clock);
        e.trigger(key, &keys, ctx());
        let vels: Vec<Vec2> = e.shapes()[0]
            .kind
            .particles()
            .map(|ps| ps.iter().map(|p| p.vel).collect())
            .unwrap_or_default();
        assert!(!vels.is_empty());

        for step in 1..=2 {
            clock.advance_ms(16);
            e.update();
            let s = &e.shapes()[0];
            assert_eq!(s.rotation, 0.0);
            let fade = easing::ease_out_cubic(s.life);
            let particles = s.kind.particles().unwrap_or(&[]);
            for (p, vel) in particles.iter().zip(&vels) {
                let expected = *vel * (0.016 * step as f32);
                assert!(p.pos.distance(expected) < 1e-3, "{:?} vs {:?}", p.pos, expected);
                assert_eq!(p.life, fade);
            }
        }
    }
}

#[test]
fn entry_points_sit_outside_the_canvas() {
    let size = Vec2::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(9);
    let corners = [
        (0, Vec2::new(920.0, 720.0)),
        (1, Vec2::new(-120.0, 720.0)),
        (2, Vec2::new(920.0, -120.0)),
        (3, Vec2::new(-120.0, -120.0)),
    ];
    for (zone, expected) in corners {
        assert_eq!(entry_point(zone, size, &mut rng), expected);
    }
    for _ in 0..50 {
        let left = entry_point(4, size, &mut rng);
        let right = entry_point(5, size, &mut rng);
        let bottom = entry_point(6, size, &mut rng);
        let top = entry_point(7, size, &mut rng);
        assert_eq!((left.x, right.x), (-120.0, 920.0));
        assert_eq!((bottom.y, top.y), (720.0, -120.0));
        for p in [left, right] {
            assert!(p.y >= 120.0 && p.y <= 480.0, "{:?}", p);
        }
        for p in [bottom, top] {
            assert!(p.x >= 160.0 && p.x <= 640.0, "{:?}", p);
        }
    }
}

#[test]
fn shapes_paint_with_their_creation_colour() {
    let keys = KeyMap::build(ScaleId::Pentatonic, KitId::Bleeps);
    let clock = VirtualClock::new();
    let mut e = engine(&clock);
    e.trigger('a', &keys, ctx());
    e.trigger('c', &keys, ctx());
    let circle_css = e.shapes()[0].color.css().to_string();
    assert_eq!(circle_css, e.shapes()[0].color.hsl().to_css());
    let particle_css: Vec<String> = e.shapes()[1]
        .kind
        .particles()
        .map(|ps| ps.iter().map(|p| p.color.css().to_string()).collect())
        .unwrap_or_default();

    clock.advance_ms(16);
    e.surface_mut().reset();
    e.frame();
    let styles = e.surface().styles();
    assert!(styles.contains(&circle_css.as_str()));
    assert!(particle_css.iter().all(|css| styles.contains(&css.as_str())));
}
