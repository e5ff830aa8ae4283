//! Easing curves mapping normalized progress `t` (typically 0..1) to eased
//! progress. All curves start at 0 and settle at 1.

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Several decaying bounces before settling at 1.
pub fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Overshoots past 1 then settles back.
pub fn ease_out_back(t: f32) -> f32 {
    const C: f32 = 1.70158;
    1.0 + (C + 1.0) * (t - 1.0).powi(3) + C * (t - 1.0).powi(2)
}

/// Damped oscillation around 1. Clamped to exact endpoints outside (0, 1).
pub fn ease_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    const P: f32 = 0.3;
    const S: f32 = P / 4.0;
    2.0_f32.powf(-10.0 * t) * ((t - S) * std::f32::consts::TAU / P).sin() + 1.0
}
