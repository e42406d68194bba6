/// Linear map from a time-component domain to rotation degrees.
///
/// Values outside the domain extrapolate along the same line, so an hour value
/// of 11.5 lands past the 11 o'clock mark instead of being clamped to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

pub const HOUR_DOMAIN: (f64, f64) = (0.0, 11.0);
pub const HOUR_RANGE: (f64, f64) = (0.0, 330.0);
pub const MINUTE_DOMAIN: (f64, f64) = (0.0, 59.0);
pub const MINUTE_RANGE: (f64, f64) = (0.0, 354.0);

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub const fn hour() -> Self {
        Self::new(HOUR_DOMAIN, HOUR_RANGE)
    }

    pub const fn minute() -> Self {
        Self::new(MINUTE_DOMAIN, MINUTE_RANGE)
    }

    /// Seconds share the minute mapping.
    pub const fn second() -> Self {
        Self::minute()
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A zero-length (or non-finite) domain maps every input to 0.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        let t = (value - d0) / span;
        r0 + t * (r1 - r0)
    }
}
