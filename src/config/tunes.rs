use crate::core::RecordedEvent;

/// Preset demo tune. Events share the recording format so one playback path
/// serves both.
#[derive(Clone, Copy, Debug)]
pub struct Tune {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub events: &'static [RecordedEvent],
}

const fn ev(ms: u64, key: char) -> RecordedEvent {
    RecordedEvent::at_millis(ms, key)
}

pub static TUNES: [Tune; 4] = [
    Tune {
        id: "stairway",
        name: "Stairway",
        description: "Scale up and back. Play the keys below to copy it.",
        events: &[
            ev(0, 'a'),
            ev(280, 's'),
            ev(560, 'd'),
            ev(840, 'f'),
            ev(1120, 'g'),
            ev(1400, 'a'),
            ev(1680, 'g'),
            ev(1960, 'f'),
            ev(2240, 'd'),
            ev(2520, 's'),
            ev(2800, 'a'),
        ],
    },
    Tune {
        id: "bounce",
        name: "Bounce",
        description: "Short and bouncy. Follow the keys and play along.",
        events: &[
            ev(0, 'd'),
            ev(180, 'f'),
            ev(420, 'g'),
            ev(720, 'g'),
            ev(1100, 'f'),
            ev(1400, 'd'),
            ev(1700, 's'),
            ev(2100, 'a'),
        ],
    },
    Tune {
        id: "sunset",
        name: "Sunset",
        description: "High phrase, then low answer. Try the keys yourself.",
        events: &[
            ev(0, 'g'),
            ev(220, 'a'),
            ev(440, 'g'),
            ev(700, 'd'),
            ev(920, 'f'),
            ev(1140, 'd'),
            ev(1400, 's'),
            ev(1680, 'a'),
        ],
    },
    Tune {
        id: "chime",
        name: "Chime",
        description: "Slow and calm. Click Play, then play the keys below.",
        events: &[
            ev(0, 'd'),
            ev(80, 'f'),
            ev(160, 'a'),
            ev(800, 'g'),
            ev(1500, 'd'),
        ],
    },
];

pub fn tune_by_id(id: &str) -> Option<&'static Tune> {
    TUNES.iter().find(|t| t.id == id)
}
