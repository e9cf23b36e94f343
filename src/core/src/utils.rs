use rand::RngExt;
use std::time::Instant;

pub struct IntegerUtils;

impl IntegerUtils {
    /// Random integer in `min..=max`.
    pub fn random(min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u32) {
        let now = Instant::now();
        let result = action();

        (result, now.elapsed().as_millis() as u32)
    }
}
