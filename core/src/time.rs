/// Local wall-clock time of day, normalized on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl WallTime {
    /// Hours wrap at 24 and minutes at 60. A leap second (60) is held at 59.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds.min(59),
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

/// Hand values derived from one wall-clock reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSample {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

pub fn sample_time(time: WallTime) -> TimeSample {
    TimeSample {
        hour: (time.hours() % 12) as f64 + time.minutes() as f64 / 60.0,
        minute: time.minutes() as f64,
        second: time.seconds() as f64,
    }
}

pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Always reports the same time. Used to pin the clock in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedTime(pub WallTime);

impl TimeSource for FixedTime {
    fn now(&self) -> WallTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_value_tracks_clock_seconds() {
        for hours in [0, 7, 12, 23] {
            for seconds in 0..60 {
                let time = WallTime::new(hours, 17, seconds);
                let sample = sample_time(time);
                assert_eq!(sample.second, time.seconds() as f64);
                assert!((0.0..=59.0).contains(&sample.second));
            }
        }
    }

    #[test]
    fn hour_value_folds_afternoon_and_adds_minutes() {
        for hours in 0..24 {
            for minutes in 0..60 {
                let time = WallTime::new(hours, minutes, 0);
                let sample = sample_time(time);
                let expected = (hours % 12) as f64 + minutes as f64 / 60.0;
                assert_eq!(sample.hour, expected);
                assert!(sample.hour >= 0.0 && sample.hour < 12.0);
                assert_eq!(sample.minute, minutes as f64);
            }
        }
    }

    #[test]
    fn half_past_midnight_is_half_an_hour() {
        let sample = sample_time(WallTime::new(0, 30, 0));
        assert_eq!(sample.hour, 0.5);
        assert_eq!(sample.minute, 30.0);
        assert_eq!(sample.second, 0.0);
    }

    #[test]
    fn out_of_range_input_is_normalized() {
        let time = WallTime::new(25, 61, 60);
        assert_eq!(time.hours(), 1);
        assert_eq!(time.minutes(), 1);
        assert_eq!(time.seconds(), 59);
    }

    #[test]
    fn fixed_time_source_is_stable() {
        let source = FixedTime(WallTime::new(9, 41, 5));
        assert_eq!(source.now(), source.now());
        assert_eq!(source.now().minutes(), 41);
    }
}
