use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

pub const MAX_RPM: u8 = 12;
pub const DEFAULT_RPM: u8 = 4;

/// Mental load on the "engine", read as RPM on a 0..=12 dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EngineReading(u8);

impl EngineReading {
    pub fn new(rpm: u8) -> Result<Self> {
        if rpm > MAX_RPM {
            bail!("rpm must be between 0 and {MAX_RPM}, got {rpm}");
        }
        Ok(Self(rpm))
    }

    pub fn rpm(self) -> u8 {
        self.0
    }

    pub fn status_message(self) -> &'static str {
        match self.0 {
            0..=4 => "Regime ottimale. Il motore gira rotondo.",
            5..=8 => "Regime alto. Consumo elevato di carburante.",
            _ => "ZONA ROSSA. Rischio fusione guarnizione testata.",
        }
    }
}

impl Default for EngineReading {
    fn default() -> Self {
        Self(DEFAULT_RPM)
    }
}

/// How quickly the radiator "boils" when something goes wrong.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Reactivity {
    Freddo,
    #[default]
    Normale,
    Caldo,
    Bollente,
}

impl Reactivity {
    pub const ALL: [Reactivity; 4] = [Self::Freddo, Self::Normale, Self::Caldo, Self::Bollente];

    pub fn label(self) -> &'static str {
        match self {
            Self::Freddo => "Freddo (Distaccato)",
            Self::Normale => "Normale (Gestibile)",
            Self::Caldo => "Caldo (Irritabile)",
            Self::Bollente => "Bollente (Esplosivo)",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            Self::Freddo => "freddo",
            Self::Normale => "normale",
            Self::Caldo => "caldo",
            Self::Bollente => "bollente",
        }
    }
}

impl fmt::Display for Reactivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Physical "squeaks" in the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Symptom {
    Insonnia,
    TensioneMuscolare,
    MalDiTesta,
    Gastrite,
    StanchezzaCronica,
    FameNervosa,
}

impl Symptom {
    pub const ALL: [Symptom; 6] = [
        Self::Insonnia,
        Self::TensioneMuscolare,
        Self::MalDiTesta,
        Self::Gastrite,
        Self::StanchezzaCronica,
        Self::FameNervosa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Insonnia => "Insonnia / Sonno disturbato",
            Self::TensioneMuscolare => "Tensione muscolare (collo/schiena)",
            Self::MalDiTesta => "Mal di testa frequente",
            Self::Gastrite => "Gastrite / Reflusso",
            Self::StanchezzaCronica => "Stanchezza cronica al risveglio",
            Self::FameNervosa => "Fame nervosa",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            Self::Insonnia => "insonnia",
            Self::TensioneMuscolare => "tensione-muscolare",
            Self::MalDiTesta => "mal-di-testa",
            Self::Gastrite => "gastrite",
            Self::StanchezzaCronica => "stanchezza-cronica",
            Self::FameNervosa => "fame-nervosa",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSet(BTreeSet<Symptom>);

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.0.insert(symptom)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Readings {
    pub engine: EngineReading,
    pub reactivity: Reactivity,
    pub symptoms: SymptomSet,
}
