pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: u64 = 60;
    pub const SECS_IN_5_MIN: u64 = Self::SECS_IN_MIN * 5;
    pub const SECS_IN_15_MIN: u64 = Self::SECS_IN_MIN * 15;
    pub const SECS_IN_30_MIN: u64 = Self::SECS_IN_MIN * 30;
    pub const SECS_IN_H: u64 = Self::SECS_IN_MIN * 60;
    pub const SECS_IN_4_H: u64 = Self::SECS_IN_H * 4;
    pub const SECS_IN_D: u64 = Self::SECS_IN_H * 24;

    /// Shorthand label for a sampling step (e.g. `1m`, `4h`), falling back to seconds.
    pub fn step_to_string(step_seconds: u64) -> String {
        match step_seconds {
            Self::SECS_IN_MIN => "1m".to_string(),
            Self::SECS_IN_5_MIN => "5m".to_string(),
            Self::SECS_IN_15_MIN => "15m".to_string(),
            Self::SECS_IN_30_MIN => "30m".to_string(),
            Self::SECS_IN_H => "1h".to_string(),
            Self::SECS_IN_4_H => "4h".to_string(),
            Self::SECS_IN_D => "1d".to_string(),
            other => format!("{other}s"),
        }
    }

    /// Converts an offset measured in steps into elapsed seconds.
    #[inline]
    pub fn steps_to_seconds(steps: usize, step_seconds: u64) -> f64 {
        steps as f64 * step_seconds as f64
    }
}
