//! Colour scales shared by the interactive and the static charts.

pub type Rgb = (u8, u8, u8);

/// Cell colour for undefined coefficients.
pub const UNDEFINED: Rgb = (235, 235, 235);

const COOLWARM: [Rgb; 3] = [(59, 76, 192), (221, 221, 221), (180, 4, 38)];

const VIRIDIS: [Rgb; 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn sample(stops: &[Rgb], t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let span = (stops.len() - 1) as f64;
    let pos = t * span;
    let lower = (pos.floor() as usize).min(stops.len() - 2);
    lerp(stops[lower], stops[lower + 1], pos - lower as f64)
}

/// Diverging scale centred at 0 for values in [-1, 1].
pub fn coolwarm(value: f64) -> Rgb {
    if value.is_nan() {
        return UNDEFINED;
    }
    sample(&COOLWARM, (value + 1.0) / 2.0)
}

/// Evenly spaced colours across the viridis scale.
pub fn viridis(index: usize, count: usize) -> Rgb {
    sample(&VIRIDIS, fraction(index, count))
}

/// Evenly spaced colours across the coolwarm scale.
pub fn coolwarm_steps(index: usize, count: usize) -> Rgb {
    sample(&COOLWARM, fraction(index, count))
}

fn fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Whether text on top of a `coolwarm(value)` cell should be white.
pub fn needs_light_text(value: f64) -> bool {
    value.abs() > 0.6
}

/// Bar palette for ranking charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPalette {
    Viridis,
    Coolwarm,
}

impl BarPalette {
    pub fn color(self, index: usize, count: usize) -> Rgb {
        match self {
            BarPalette::Viridis => viridis(index, count),
            BarPalette::Coolwarm => coolwarm_steps(index, count),
        }
    }
}
