use crate::core::readings::{EngineReading, Reactivity, Readings, SymptomSet};
use serde::Serialize;

pub const MAX_SUB_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub motore: u8,
    pub radiatore: u8,
    pub telaio: u8,
}

impl SubScores {
    pub fn from_readings(readings: &Readings) -> Self {
        Self {
            motore: motore_score(readings.engine),
            radiatore: radiatore_score(readings.reactivity),
            telaio: telaio_score(&readings.symptoms),
        }
    }

    /// Unweighted mean of the three sub-scores.
    pub fn total(&self) -> f64 {
        (u32::from(self.motore) + u32::from(self.radiatore) + u32::from(self.telaio)) as f64 / 3.0
    }
}

pub fn motore_score(engine: EngineReading) -> u8 {
    match engine.rpm() {
        0..=4 => 2,
        5..=8 => 6,
        _ => 10,
    }
}

pub fn radiatore_score(reactivity: Reactivity) -> u8 {
    match reactivity {
        Reactivity::Freddo => 2,
        Reactivity::Normale => 4,
        Reactivity::Caldo => 7,
        Reactivity::Bollente => 10,
    }
}

pub fn telaio_score(symptoms: &SymptomSet) -> u8 {
    (symptoms.len() * 2).min(usize::from(MAX_SUB_SCORE)) as u8
}

pub fn format_total(total: f64) -> String {
    format!("{total:.1}")
}
