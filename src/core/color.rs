//! HSL colour model shared by shapes and the ambient background.

/// Hue in degrees \[0, 360), saturation and lightness in percent \[0, 100\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Six-colour neon palette, indexed by key index.
pub const PALETTE: [u32; 6] = [
    0x00f5d4, // cyan
    0xf72585, // magenta
    0xb5f44a, // lime
    0xff9f1c, // orange
    0x9b5de5, // violet
    0x4361ee, // blue
];

/// Idle backdrop: a very dark violet.
pub const DEFAULT_BACKGROUND: Hsl = Hsl::new(270.0, 20.0, 6.0);

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert a packed `0xRRGGBB` colour.
    pub fn from_rgb(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
        let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
        let b = (rgb & 0xff) as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;
        Self::new(h * 360.0, s * 100.0, l * 100.0)
    }

    /// Interpolate toward `target`, taking the short way around the hue circle.
    pub fn lerp(self, target: Hsl, t: f32) -> Self {
        let mut dh = target.h - self.h;
        if dh > 180.0 {
            dh -= 360.0;
        }
        if dh < -180.0 {
            dh += 360.0;
        }
        Self {
            h: (self.h + dh * t).rem_euclid(360.0),
            s: self.s + (target.s - self.s) * t,
            l: self.l + (target.l - self.l) * t,
        }
    }

    /// Same colour with the hue rotated by `deg`, wrapped into \[0, 360).
    pub fn rotate_hue(self, deg: f32) -> Self {
        Self {
            h: (self.h + deg).rem_euclid(360.0),
            ..self
        }
    }

    pub fn to_css(self) -> String {
        format!("hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

/// A colour fixed for the lifetime of its owner, with its CSS form built once.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    hsl: Hsl,
    css: String,
}

impl Paint {
    pub fn new(hsl: Hsl) -> Self {
        Self {
            css: hsl.to_css(),
            hsl,
        }
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Base palette colour for a key index.
#[inline]
pub fn palette_color(key_index: usize) -> Hsl {
    Hsl::from_rgb(PALETTE[key_index % PALETTE.len()])
}
