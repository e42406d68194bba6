use crate::scale::LinearScale;

pub const SECOND_TICK_LENGTH: f64 = -6.0;
pub const HOUR_TICK_LENGTH: f64 = -15.0;
pub const SECOND_LABEL_OFFSET: f64 = 16.0;
pub const SECOND_LABEL_Y_OFFSET: f64 = 5.0;
pub const HOUR_LABEL_INSET: f64 = 40.0;
pub const HOUR_LABEL_Y_OFFSET: f64 = 7.0;
pub const COVER_RADIUS_RATIO: f64 = 1.0 / 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockLayoutParams {
    clock_radius: f64,
    margin: f64,
}

impl ClockLayoutParams {
    /// Negative or non-finite inputs collapse to 0.
    pub fn new(clock_radius: f64, margin: f64) -> Self {
        Self {
            clock_radius: sanitize(clock_radius),
            margin: sanitize(margin),
        }
    }

    pub fn clock_radius(&self) -> f64 {
        self.clock_radius
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Side of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        (self.clock_radius + self.margin) * 2.0
    }

    /// Canvas coordinate of the pivot on both axes.
    pub fn center(&self) -> f64 {
        self.clock_radius + self.margin
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Polar to canvas offset with 0° at twelve o'clock, clockwise positive.
pub fn polar_to_cartesian(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (radius * radians.sin(), -radius * radians.cos())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickClass {
    Second,
    Hour,
}

impl TickClass {
    pub fn css_class(self) -> &'static str {
        match self {
            TickClass::Second => "second-tick",
            TickClass::Hour => "hour-tick",
        }
    }
}

/// Radial line drawn along the twelve o'clock axis and rotated into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub class: TickClass,
    pub y1: f64,
    pub y2: f64,
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelClass {
    Second,
    Hour,
}

impl LabelClass {
    pub fn css_class(self) -> &'static str {
        match self {
            LabelClass::Second => "second-label",
            LabelClass::Hour => "hour-label",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLabel {
    pub class: LabelClass,
    pub value: u32,
    pub x: f64,
    pub y: f64,
}

/// Static clock face, in the order it is drawn. Coordinates are relative to
/// the pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLayout {
    pub params: ClockLayoutParams,
    pub second_ticks: Vec<TickMark>,
    pub second_labels: Vec<FaceLabel>,
    pub hour_ticks: Vec<TickMark>,
    pub hour_labels: Vec<FaceLabel>,
    pub cover_radius: f64,
}

impl FaceLayout {
    pub fn new(params: ClockLayoutParams) -> Self {
        let radius = params.clock_radius();
        let minute_scale = LinearScale::minute();
        let hour_scale = LinearScale::hour();

        let second_ticks = (0..60)
            .map(|step| TickMark {
                class: TickClass::Second,
                y1: radius,
                y2: radius + SECOND_TICK_LENGTH,
                rotation: minute_scale.apply(step as f64),
            })
            .collect();
        let second_labels = (5..=60)
            .step_by(5)
            .map(|value| {
                place_label(
                    LabelClass::Second,
                    value,
                    radius + SECOND_LABEL_OFFSET,
                    minute_scale.apply(value as f64),
                    SECOND_LABEL_Y_OFFSET,
                )
            })
            .collect();
        let hour_ticks = (0..12)
            .map(|step| TickMark {
                class: TickClass::Hour,
                y1: radius,
                y2: radius + HOUR_TICK_LENGTH,
                rotation: hour_scale.apply(step as f64),
            })
            .collect();
        let hour_labels = (3..=12)
            .step_by(3)
            .map(|value| {
                place_label(
                    LabelClass::Hour,
                    value,
                    radius - HOUR_LABEL_INSET,
                    hour_scale.apply(value as f64),
                    HOUR_LABEL_Y_OFFSET,
                )
            })
            .collect();

        Self {
            params,
            second_ticks,
            second_labels,
            hour_ticks,
            hour_labels,
            cover_radius: radius * COVER_RADIUS_RATIO,
        }
    }

    pub fn canvas_size(&self) -> f64 {
        self.params.canvas_size()
    }

    pub fn center(&self) -> f64 {
        self.params.center()
    }

    /// Number of SVG nodes the face itself contributes, hands excluded.
    pub fn primitive_count(&self) -> usize {
        self.second_ticks.len()
            + self.second_labels.len()
            + self.hour_ticks.len()
            + self.hour_labels.len()
            + 1
    }
}

fn place_label(class: LabelClass, value: u32, radius: f64, degrees: f64, y_offset: f64) -> FaceLabel {
    let (x, y) = polar_to_cartesian(radius, degrees);
    FaceLabel {
        class,
        value,
        x,
        y: y + y_offset,
    }
}
