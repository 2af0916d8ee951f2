//! Hue ramp used to tell external data series apart.
use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in `[0, 1)`; values outside wrap around the wheel.
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let Self {
            hue: h,
            saturation: s,
            lightness: l,
        } = self;
        if s == 0.0 {
            let v = channel(l);
            return Rgb { r: v, g: v, b: v };
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;
        Rgb {
            r: channel(sextant(m1, m2, h + ONE_THIRD)),
            g: channel(sextant(m1, m2, h)),
            b: channel(sextant(m1, m2, h - ONE_THIRD)),
        }
    }
}

fn sextant(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

// Truncates toward zero; `as` also clamps out-of-range values.
fn channel(v: f64) -> u8 {
    (255.0 * v) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color of series `index` out of `total`, evenly spaced around the hue wheel.
///
/// `total` must be non-zero.
pub fn ramp(index: usize, total: usize, saturation: f64, lightness: f64) -> Rgb {
    debug_assert!(total > 0);
    Hsl {
        hue: index as f64 / total as f64,
        saturation,
        lightness,
    }
    .to_rgb()
}
