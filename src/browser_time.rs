use js_sys::Date;
use tokeidai_core::{TimeSource, WallTime};

/// Local time as reported by the browser.
pub(crate) struct BrowserClock;

impl TimeSource for BrowserClock {
    fn now(&self) -> WallTime {
        let date = Date::new_0();
        WallTime::new(date.get_hours(), date.get_minutes(), date.get_seconds())
    }
}
