use crate::core::readings::Readings;
use crate::core::score::{SubScores, format_total};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

pub const TITLE: &str = "Officina delle Emozioni®";
pub const SUBTITLE: &str = "di Paolo Alonge - Coach Gestione Rabbia e Stress";
pub const HEADING: &str = "Diagnostica Ingegneristica dello Stress";

/// Above this total the warning light comes on. Not aligned with the tier bands.
pub const CTA_THRESHOLD: f64 = 4.0;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    OttimeCondizioni,
    UsuraEvidente,
    DanniStrutturali,
    RelittoInFiamme,
}

impl Tier {
    pub fn from_total(total: f64) -> Self {
        if total <= 3.0 {
            Self::OttimeCondizioni
        } else if total <= 6.0 {
            Self::UsuraEvidente
        } else if total <= 8.0 {
            Self::DanniStrutturali
        } else {
            Self::RelittoInFiamme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OttimeCondizioni => "OTTIME CONDIZIONI",
            Self::UsuraEvidente => "USURA EVIDENTE",
            Self::DanniStrutturali => "DANNI STRUTTURALI",
            Self::RelittoInFiamme => "RELITTO IN FIAMME",
        }
    }

    pub fn color(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::OttimeCondizioni => "Continua così. Fai solo manutenzione ordinaria.",
            Self::UsuraEvidente => "Consigliato un check-up per evitare danni seri.",
            Self::DanniStrutturali => {
                "FERMATI. La macchina non è sicura. Serve intervento immediato."
            }
            Self::RelittoInFiamme => "Chiama il carro attrezzi. Non sei in grado di guidare.",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::OttimeCondizioni => (0x00, 0xcc, 0x66),
            Self::UsuraEvidente => (0xff, 0x99, 0x33),
            Self::DanniStrutturali => (0xff, 0x33, 0x00),
            Self::RelittoInFiamme => (0x99, 0x00, 0x00),
        }
    }

    fn paint(self, text: &str) -> String {
        let (r, g, b) = self.rgb();
        text.truecolor(r, g, b).bold().to_string()
    }
}

/// Car illustration picked from its own threshold table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarImage {
    Perfect,
    Scratched,
    Damaged,
    Wrecked,
}

impl CarImage {
    pub fn from_total(total: f64) -> Self {
        if total <= 3.0 {
            Self::Perfect
        } else if total <= 6.0 {
            Self::Scratched
        } else if total <= 8.0 {
            Self::Damaged
        } else {
            Self::Wrecked
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Scratched => "scratched",
            Self::Damaged => "damaged",
            Self::Wrecked => "wrecked",
        }
    }

    pub fn file_name(self) -> String {
        format!("car_{}.png", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageStatus {
    pub id: CarImage,
    pub path: String,
    pub found: bool,
}

impl ImageStatus {
    pub fn missing_message(&self) -> Option<String> {
        if self.found {
            return None;
        }
        Some(format!(
            "Immagine non trovata: {}. Verificare la cartella 'assets'.",
            self.path
        ))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CallToAction {
    Warning { message: String, link: BookingLink },
    Nominal { message: String },
}

impl CallToAction {
    pub fn from_total(total: f64, link: BookingLink) -> Self {
        if total > CTA_THRESHOLD {
            Self::Warning {
                message: "⚠️ ATTENZIONE: La spia avaria motore è accesa.".to_string(),
                link,
            }
        } else {
            Self::Nominal {
                message: "✅ Sistemi nominali. Mantieni questo assetto!".to_string(),
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TelemetryBar {
    pub system: &'static str,
    pub percent: u8,
}

pub fn telemetry(scores: &SubScores) -> Vec<TelemetryBar> {
    vec![
        TelemetryBar {
            system: "Motore (Carico)",
            percent: scores.motore * 10,
        },
        TelemetryBar {
            system: "Radiatore (Rabbia)",
            percent: scores.radiatore * 10,
        },
        TelemetryBar {
            system: "Telaio (Corpo)",
            percent: scores.telaio * 10,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub readings: Readings,
    pub engine_status: &'static str,
    pub scores: SubScores,
    pub total: f64,
    pub tier: Tier,
    pub image: ImageStatus,
    pub logo: Option<String>,
    pub call_to_action: CallToAction,
    pub telemetry: Vec<TelemetryBar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    pub id: Tier,
    pub label: &'static str,
    pub color: String,
    pub advice: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub readings: Readings,
    pub engine_status: &'static str,
    pub scores: SubScores,
    pub total: f64,
    pub total_display: String,
    pub tier: TierSummary,
    pub image: ImageStatus,
    pub call_to_action: CallToAction,
    pub telemetry: Vec<TelemetryBar>,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            readings: report.readings.clone(),
            engine_status: report.engine_status,
            scores: report.scores,
            total: report.total,
            total_display: format_total(report.total),
            tier: TierSummary {
                id: report.tier,
                label: report.tier.label(),
                color: report.tier.color(),
                advice: report.tier.advice(),
            },
            image: report.image.clone(),
            call_to_action: report.call_to_action.clone(),
            telemetry: report.telemetry.clone(),
        }
    }
}

pub fn write_human<W: Write>(out: &mut W, report: &FinalReport) -> io::Result<()> {
    let tier = report.tier;

    if let Some(logo) = &report.logo {
        writeln!(out, "[logo: {}]", logo)?;
    }
    writeln!(out, "{}", TITLE.bold())?;
    writeln!(out, "{}", SUBTITLE.italic())?;
    writeln!(out, "{}", HEADING)?;

    writeln!(out)?;
    writeln!(out, "{}", "Scheda Tecnica".bold())?;
    writeln!(
        out,
        "1. Regime del motore: {} RPM -> Status Motore: {}",
        report.readings.engine.rpm(),
        report.engine_status
    )?;
    writeln!(out, "2. Temperatura radiatore: {}", report.readings.reactivity)?;
    if report.readings.symptoms.is_empty() {
        writeln!(out, "3. Integrità telaio: nessun sintomo")?;
    } else {
        writeln!(out, "3. Integrità telaio:")?;
        for symptom in report.readings.symptoms.iter() {
            writeln!(out, "   - {}", symptom)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Risultato Diagnostica".bold())?;
    writeln!(
        out,
        "Indice di Usura: {}",
        tier.paint(&format!("{}/10", format_total(report.total)))
    )?;
    writeln!(out, "{}", tier.paint(tier.label()))?;
    writeln!(out, "\"{}\"", tier.advice().italic())?;

    writeln!(out)?;
    match report.image.missing_message() {
        Some(message) => writeln!(out, "{}", message.red())?,
        None => writeln!(
            out,
            "Rappresentazione visiva dello stato attuale: {}",
            report.image.path
        )?,
    }

    writeln!(out)?;
    writeln!(out, "{}", "Telemetria".bold())?;
    for bar in &report.telemetry {
        let filled = usize::from(bar.percent) * BAR_WIDTH / 100;
        writeln!(
            out,
            "{:<20} {}{} {:>3}%",
            bar.system,
            tier.paint(&"█".repeat(filled)),
            "░".repeat(BAR_WIDTH - filled),
            bar.percent
        )?;
    }

    writeln!(out)?;
    match &report.call_to_action {
        CallToAction::Warning { message, link } => {
            writeln!(out, "{}", message.red().bold())?;
            writeln!(out, "{} -> {}", link.label.bold(), link.url.underline())?;
        }
        CallToAction::Nominal { message } => {
            writeln!(out, "{}", message.green().bold())?;
        }
    }

    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &FinalReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out)?;
    Ok(())
}
