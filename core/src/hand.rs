use crate::scale::LinearScale;
use crate::svg_attr;
use crate::time::TimeSample;

pub const SECOND_HAND_BALANCE: f64 = 30.0;
pub const SECOND_HAND_INSET: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub fn as_str(self) -> &'static str {
        match self {
            HandKind::Hour => "hour",
            HandKind::Minute => "minute",
            HandKind::Second => "second",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HandKind::Hour => "hour-hand",
            HandKind::Minute => "minute-hand",
            HandKind::Second => "second-hand",
        }
    }

    pub fn scale(self) -> LinearScale {
        match self {
            HandKind::Hour => LinearScale::hour(),
            HandKind::Minute => LinearScale::minute(),
            HandKind::Second => LinearScale::second(),
        }
    }

    /// Magnitude of the hand measured from the pivot to its tip.
    pub fn reach(self, clock_radius: f64) -> f64 {
        match self {
            HandKind::Hour => 2.0 * clock_radius / 3.0,
            HandKind::Minute => clock_radius,
            HandKind::Second => (clock_radius - SECOND_HAND_INSET).max(0.0),
        }
    }

    pub fn balance(self) -> f64 {
        match self {
            HandKind::Second => SECOND_HAND_BALANCE,
            HandKind::Hour | HandKind::Minute => 0.0,
        }
    }

    pub fn value_from(self, sample: &TimeSample) -> f64 {
        match self {
            HandKind::Hour => sample.hour,
            HandKind::Minute => sample.minute,
            HandKind::Second => sample.second,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HandSprite {
    Line,
    Image { href: String },
}

impl HandSprite {
    pub fn from_href(href: Option<&str>) -> Self {
        match href.map(str::trim) {
            Some(href) if !href.is_empty() => HandSprite::Image {
                href: href.to_string(),
            },
            _ => HandSprite::Line,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandSpec {
    kind: HandKind,
    value: f64,
    length: f64,
    scale: LinearScale,
    balance: f64,
    angle_adjustment: f64,
    sprite: HandSprite,
}

impl HandSpec {
    /// Builds a hand at value 0. Image sprites carry `image_adjustment` since
    /// their assets are drawn pre-rotated; lines point straight up at 0.
    pub fn new(kind: HandKind, clock_radius: f64, sprite: HandSprite, image_adjustment: f64) -> Self {
        let angle_adjustment = match sprite {
            HandSprite::Image { .. } => image_adjustment,
            HandSprite::Line => 0.0,
        };
        Self {
            kind,
            value: 0.0,
            length: -kind.reach(clock_radius),
            scale: kind.scale(),
            balance: kind.balance(),
            angle_adjustment,
            sprite,
        }
    }

    pub fn kind(&self) -> HandKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn angle_adjustment(&self) -> f64 {
        self.angle_adjustment
    }

    pub fn sprite(&self) -> &HandSprite {
        &self.sprite
    }

    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    pub fn rotation(&self) -> f64 {
        self.scale.apply(self.value) + self.angle_adjustment
    }

    pub fn transform(&self) -> String {
        svg_attr::rotate(self.rotation())
    }

    /// Side of the square an image sprite occupies so that its diagonal spans
    /// the hand length.
    pub fn sprite_extent(&self) -> f64 {
        self.length.abs() / std::f64::consts::SQRT_2
    }
}
