pub mod clock;
pub mod hand;
pub mod layout;
pub mod lifecycle;
pub mod prefs;
pub mod scale;
pub mod svg_attr;
pub mod theme;
mod theme_rules;
pub mod time;

pub use clock::{ClockModel, HandSet, HandStyle};
pub use hand::{HandKind, HandSpec, HandSprite};
pub use layout::{polar_to_cartesian, ClockLayoutParams, FaceLabel, FaceLayout, TickMark};
pub use lifecycle::{Cancel, TimerSlot};
pub use prefs::{load_muted, save_muted, MemoryStore, PreferenceStore, StoreError, MUTED_KEY};
pub use scale::LinearScale;
pub use theme::{ClockTheme, HostMessage, ThemeError, BUILTIN_THEME};
pub use time::{sample_time, FixedTime, TimeSample, TimeSource, WallTime};
