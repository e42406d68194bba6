use crate::hand::{HandKind, HandSpec, HandSprite};
use crate::layout::{ClockLayoutParams, FaceLayout};
use crate::time::{sample_time, TimeSample, WallTime};

/// Sprite choice for each hand plus the offset image sprites are drawn at.
/// The second hand is always a line.
#[derive(Clone, Debug, PartialEq)]
pub struct HandStyle {
    pub hour: HandSprite,
    pub minute: HandSprite,
    pub image_adjustment: f64,
}

impl Default for HandStyle {
    fn default() -> Self {
        Self {
            hour: HandSprite::Line,
            minute: HandSprite::Line,
            image_adjustment: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandSet {
    pub hour: HandSpec,
    pub minute: HandSpec,
    pub second: HandSpec,
}

impl HandSet {
    pub fn new(clock_radius: f64, style: &HandStyle) -> Self {
        Self {
            hour: HandSpec::new(
                HandKind::Hour,
                clock_radius,
                style.hour.clone(),
                style.image_adjustment,
            ),
            minute: HandSpec::new(
                HandKind::Minute,
                clock_radius,
                style.minute.clone(),
                style.image_adjustment,
            ),
            second: HandSpec::new(HandKind::Second, clock_radius, HandSprite::Line, 0.0),
        }
    }

    pub fn with_sample(&self, sample: &TimeSample) -> Self {
        Self {
            hour: self.hour.with_value(HandKind::Hour.value_from(sample)),
            minute: self.minute.with_value(HandKind::Minute.value_from(sample)),
            second: self.second.with_value(HandKind::Second.value_from(sample)),
        }
    }

    pub fn get(&self, kind: HandKind) -> &HandSpec {
        match kind {
            HandKind::Hour => &self.hour,
            HandKind::Minute => &self.minute,
            HandKind::Second => &self.second,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandSpec> {
        [&self.hour, &self.minute, &self.second].into_iter()
    }

    /// Transform attributes in hour, minute, second order.
    pub fn transforms(&self) -> [String; 3] {
        [
            self.hour.transform(),
            self.minute.transform(),
            self.second.transform(),
        ]
    }
}

/// Renderer-independent clock: the static face plus the current hands.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockModel {
    face: FaceLayout,
    hands: HandSet,
}

impl ClockModel {
    /// Lays out the face and seeds the hands from `now` so the first paint
    /// already shows the right time.
    pub fn initialize(params: ClockLayoutParams, style: &HandStyle, now: WallTime) -> Self {
        let face = FaceLayout::new(params);
        let hands = HandSet::new(params.clock_radius(), style).with_sample(&sample_time(now));
        Self { face, hands }
    }

    pub fn face(&self) -> &FaceLayout {
        &self.face
    }

    pub fn hands(&self) -> &HandSet {
        &self.hands
    }

    /// Moves the hands to `now`. Returns true when any transform changed.
    pub fn tick(&mut self, now: WallTime) -> bool {
        let next = self.hands.with_sample(&sample_time(now));
        let changed = next.transforms() != self.hands.transforms();
        self.hands = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_style() -> HandStyle {
        HandStyle {
            hour: HandSprite::Image {
                href: "assets/hour-hand.svg".to_string(),
            },
            minute: HandSprite::Image {
                href: "assets/minute-hand.svg".to_string(),
            },
            image_adjustment: -142.0,
        }
    }

    #[test]
    fn three_oclock_rotations() {
        let params = ClockLayoutParams::new(100.0, 40.0);
        let model = ClockModel::initialize(params, &image_style(), WallTime::new(3, 0, 0));
        let hands = model.hands();
        assert!((hands.hour.rotation() - (90.0 - 142.0)).abs() < 1e-9);
        assert!((hands.minute.rotation() + 142.0).abs() < 1e-9);
        assert_eq!(hands.second.rotation(), 0.0);

        let lines = ClockModel::initialize(params, &HandStyle::default(), WallTime::new(15, 0, 0));
        assert_eq!(
            lines.hands().transforms(),
            [
                "rotate(90)".to_string(),
                "rotate(0)".to_string(),
                "rotate(0)".to_string()
            ]
        );
    }

    #[test]
    fn initialize_seeds_hands_from_now() {
        let params = ClockLayoutParams::new(100.0, 40.0);
        let model = ClockModel::initialize(params, &HandStyle::default(), WallTime::new(10, 8, 42));
        assert!((model.hands().hour.value() - (10.0 + 8.0 / 60.0)).abs() < 1e-12);
        assert_eq!(model.hands().minute.value(), 8.0);
        assert_eq!(model.hands().second.value(), 42.0);
    }

    #[test]
    fn tick_within_same_second_is_stable() {
        let params = ClockLayoutParams::new(100.0, 40.0);
        let now = WallTime::new(7, 21, 33);
        let mut model = ClockModel::initialize(params, &image_style(), now);
        let before = model.hands().transforms();
        assert!(!model.tick(now));
        assert!(!model.tick(now));
        assert_eq!(model.hands().transforms(), before);
        assert!(model.tick(WallTime::new(7, 21, 34)));
        assert_eq!(model.hands().transforms()[2], "rotate(204)");
    }

    #[test]
    fn rollover_maps_back_to_zero() {
        let params = ClockLayoutParams::new(100.0, 40.0);
        let mut model =
            ClockModel::initialize(params, &HandStyle::default(), WallTime::new(11, 59, 59));
        assert_eq!(model.hands().second.transform(), "rotate(354)");
        assert!(model.tick(WallTime::new(12, 0, 0)));
        assert_eq!(model.hands().hour.transform(), "rotate(0)");
        assert_eq!(model.hands().minute.transform(), "rotate(0)");
        assert_eq!(model.hands().second.transform(), "rotate(0)");
    }

    #[test]
    fn tick_keeps_face_untouched() {
        let params = ClockLayoutParams::new(100.0, 40.0);
        let mut model = ClockModel::initialize(params, &HandStyle::default(), WallTime::new(1, 2, 3));
        let face = model.face().clone();
        model.tick(WallTime::new(4, 5, 6));
        assert_eq!(model.face(), &face);
    }
}
