/// Identifier for one of the built-in scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleId {
    Pentatonic,
    Major,
    Minor,
    Chromatic,
}

impl ScaleId {
    pub const ALL: [ScaleId; 4] = [
        ScaleId::Pentatonic,
        ScaleId::Major,
        ScaleId::Minor,
        ScaleId::Chromatic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleId::Pentatonic => "pentatonic",
            ScaleId::Major => "major",
            ScaleId::Minor => "minor",
            ScaleId::Chromatic => "chromatic",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

/// Semitone offsets from the root plus display text.
#[derive(Clone, Debug)]
pub struct Scale {
    pub id: ScaleId,
    pub name: &'static str,
    pub description: &'static str,
    pub intervals: &'static [i32],
}

pub const SCALES: [Scale; 4] = [
    Scale {
        id: ScaleId::Pentatonic,
        name: "Pentatonic",
        description: "Smooth and easy; few wrong notes.",
        intervals: &[0, 2, 4, 7, 9],
    },
    Scale {
        id: ScaleId::Major,
        name: "Major",
        description: "Bright and happy; familiar.",
        intervals: &[0, 2, 4, 5, 7, 9, 11],
    },
    Scale {
        id: ScaleId::Minor,
        name: "Minor",
        description: "Calm, a bit sad.",
        intervals: &[0, 2, 3, 5, 7, 8, 10],
    },
    Scale {
        id: ScaleId::Chromatic,
        name: "Chromatic",
        description: "All notes; experimental.",
        intervals: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    },
];

pub fn scale(id: ScaleId) -> &'static Scale {
    match id {
        ScaleId::Pentatonic => &SCALES[0],
        ScaleId::Major => &SCALES[1],
        ScaleId::Minor => &SCALES[2],
        ScaleId::Chromatic => &SCALES[3],
    }
}

// Octave of A4; note index 0 starts at C4.
const BASE_OCTAVE: i32 = 4;

/// Frequency for the `note_index`-th degree of `scale`, wrapping upward by
/// octaves once the index passes the scale length.
pub fn note_index_to_frequency(note_index: usize, scale: &Scale, octave_offset: i32) -> f32 {
    let len = scale.intervals.len();
    let octave = (note_index / len) as i32 + BASE_OCTAVE + octave_offset;
    let degree = note_index % len;
    let semitones = scale.intervals[degree] + (octave - 4) * 12;
    440.0 * 2.0_f32.powf((semitones - 9) as f32 / 12.0)
}
