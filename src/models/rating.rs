use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted set of dimension scores for a venue. Immutable once
/// created; the remote endpoint is the source of truth for the current
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    // List-rendering identity only, assigned locally at decode time.
    // Never sent over the wire and not stable across fetches.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,
    pub location: String,
    pub richness: u8,
    pub sweetness: u8,
    pub creaminess: u8,
    pub speed: u8,
    pub temperature: u8,
}

impl RatingRecord {
    /// Builds a record, clamping every dimension into 1..=10 so
    /// out-of-range values never reach the ranking engine.
    pub fn new(
        name: &str,
        location: &str,
        richness: i64,
        sweetness: i64,
        creaminess: i64,
        speed: i64,
        temperature: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: location.to_string(),
            richness: clamp_dimension(richness),
            sweetness: clamp_dimension(sweetness),
            creaminess: clamp_dimension(creaminess),
            speed: clamp_dimension(speed),
            temperature: clamp_dimension(temperature),
        }
    }

    /// Arithmetic mean of the five dimensions, computed on read.
    pub fn overall_score(&self) -> f64 {
        let total =
            (self.richness + self.sweetness + self.creaminess + self.speed + self.temperature)
                as f64;
        total / 5.0
    }
}

fn clamp_dimension(value: i64) -> u8 {
    value.clamp(1, 10) as u8
}

/// Form-side working copy of a rating. Sliders start at the midpoint
/// and the whole draft resets to defaults when the submitted display
/// window ends.
#[derive(Debug, Clone)]
pub struct RatingDraft {
    pub name: String,
    pub location: String,
    pub richness: i64,
    pub sweetness: i64,
    pub creaminess: i64,
    pub speed: i64,
    pub temperature: i64,
}

impl Default for RatingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            richness: 5,
            sweetness: 5,
            creaminess: 5,
            speed: 5,
            temperature: 5,
        }
    }
}

impl RatingDraft {
    pub fn into_record(self) -> RatingRecord {
        RatingRecord::new(
            &self.name,
            &self.location,
            self.richness,
            self.sweetness,
            self.creaminess,
            self.speed,
            self.temperature,
        )
    }
}
