use serde::{Deserialize, Deserializer, Serialize};

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRange {
    pub min: f32,
    /// JSON has no infinity: an unbounded `max` is written as `null` and read back as `+inf`.
    #[serde(deserialize_with = "null_as_infinity")]
    pub max: f32,
}

fn null_as_infinity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::INFINITY))
}

impl Default for ValueRange {
    /// `[0, +inf]`
    fn default() -> Self {
        Self {
            min: 0.,
            max: f32::INFINITY,
        }
    }
}

impl ValueRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Endpoints are inclusive. NaN is never in range.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn excludes(&self, x: f32) -> bool {
        !self.contains(x)
    }
}

impl From<[f32; 2]> for ValueRange {
    fn from(r: [f32; 2]) -> Self {
        Self::new(r[0], r[1])
    }
}

impl From<(f32, f32)> for ValueRange {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}
