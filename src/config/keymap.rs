use crate::config::kits::{build_kit, KitId, SynthParams};
use crate::config::scales::{note_index_to_frequency, scale, ScaleId};
use crate::core::{PresetLookup, VisualPreset};
use fnv::FnvHashMap;

/// Playable keys in index order.
pub const KEY_ORDER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const KEY_COUNT: usize = 26;

/// Lowercase form used for every lookup and recording.
#[inline]
pub fn normalize_key(key: char) -> char {
    key.to_ascii_lowercase()
}

/// Position of `key` in [`KEY_ORDER`], case-insensitive.
#[inline]
pub fn key_index(key: char) -> Option<usize> {
    let key = normalize_key(key);
    key.is_ascii_lowercase().then(|| (key as u8 - b'a') as usize)
}

/// Playable key named by a DOM key value or `data-key` attribute: a single
/// ASCII letter, either case.
pub fn parse_key(value: &str) -> Option<char> {
    let mut chars = value.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    key_index(c).map(|_| normalize_key(c))
}

/// Everything needed to sound and draw one key under the active scale and kit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyMapEntry {
    pub key: char,
    pub note_index: usize,
    pub frequency: f32,
    pub sound: SynthParams,
    pub visual: VisualPreset,
}

/// Key bindings for one (scale, kit) selection. Rebuilt whenever either changes.
#[derive(Clone, Debug)]
pub struct KeyMap {
    scale: ScaleId,
    kit: KitId,
    entries: FnvHashMap<char, KeyMapEntry>,
}

impl KeyMap {
    pub fn build(scale_id: ScaleId, kit_id: KitId) -> Self {
        let sc = scale(scale_id);
        let kit = build_kit(kit_id);
        let entries = KEY_ORDER
            .chars()
            .zip(kit.keys.iter())
            .enumerate()
            .map(|(note_index, (key, def))| {
                let entry = KeyMapEntry {
                    key,
                    note_index,
                    frequency: note_index_to_frequency(note_index, sc, 0),
                    sound: def.sound,
                    visual: def.visual,
                };
                (key, entry)
            })
            .collect();
        Self {
            scale: scale_id,
            kit: kit_id,
            entries,
        }
    }

    pub fn get(&self, key: char) -> Option<&KeyMapEntry> {
        self.entries.get(&normalize_key(key))
    }

    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    pub fn scale(&self) -> ScaleId {
        self.scale
    }

    pub fn kit(&self) -> KitId {
        self.kit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PresetLookup for KeyMap {
    fn visual_preset(&self, key: char) -> Option<VisualPreset> {
        self.get(key).map(|e| e.visual)
    }
}
