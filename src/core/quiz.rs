use crate::core::readings::{
    DEFAULT_RPM, EngineReading, MAX_RPM, Reactivity, Readings, Symptom, SymptomSet,
};
use anyhow::{Context, Result, anyhow, bail};
use clap::ValueEnum;
use std::io::{BufRead, Write};

const MAX_ATTEMPTS: usize = 3;

/// Walks through the three sections of the check-up form over a line-based
/// terminal session. Empty answers keep the form defaults.
pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Readings> {
    writeln!(output, "Scheda Tecnica")?;
    writeln!(output)?;

    writeln!(output, "1. REGIME DEL MOTORE (Carico Mentale)")?;
    writeln!(
        output,
        "A quanti 'giri' sta andando la tua mente in questo periodo?"
    )?;
    writeln!(output, "0=Spento, 6=Crociera, 12=Zona Rossa (Burnout)")?;
    let engine = ask(
        input,
        output,
        &format!("RPM (0-{MAX_RPM}) [{DEFAULT_RPM}]: "),
        parse_engine,
    )?;
    writeln!(output, "Status Motore: {}", engine.status_message())?;
    writeln!(output)?;

    writeln!(output, "2. TEMPERATURA RADIATORE (Reattività Emotiva)")?;
    writeln!(
        output,
        "Quanto ci metti a 'bollire' quando qualcosa va storto in famiglia o al lavoro?"
    )?;
    for (idx, reactivity) in Reactivity::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", idx + 1, reactivity.label())?;
    }
    let reactivity = ask(
        input,
        output,
        &format!("Livello di guardia [{}]: ", Reactivity::default().cli_name()),
        parse_reactivity,
    )?;
    writeln!(output)?;

    writeln!(output, "3. INTEGRITÀ TELAIO (Sintomi Fisici)")?;
    writeln!(output, "Quali 'cigolii' senti nella carrozzeria?")?;
    for (idx, symptom) in Symptom::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", idx + 1, symptom.label())?;
    }
    let symptoms = ask(
        input,
        output,
        "Sintomi (numeri separati da virgola, vuoto = nessuno): ",
        parse_symptoms,
    )?;
    writeln!(output)?;

    Ok(Readings {
        engine,
        reactivity,
        symptoms,
    })
}

fn ask<R, W, T, F>(input: &mut R, output: &mut W, prompt: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed reading answer from stdin")?;
        if read == 0 {
            bail!("input closed before the check-up was complete");
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(output, "risposta non valida: {err}")?,
        }
    }

    bail!("too many invalid answers ({MAX_ATTEMPTS})")
}

pub fn parse_engine(answer: &str) -> Result<EngineReading> {
    if answer.is_empty() {
        return Ok(EngineReading::default());
    }
    let rpm: u8 = answer
        .parse()
        .map_err(|_| anyhow!("'{answer}' is not a number between 0 and {MAX_RPM}"))?;
    EngineReading::new(rpm)
}

pub fn parse_reactivity(answer: &str) -> Result<Reactivity> {
    if answer.is_empty() {
        return Ok(Reactivity::default());
    }
    if let Ok(idx) = answer.parse::<usize>() {
        return idx
            .checked_sub(1)
            .and_then(|idx| Reactivity::ALL.get(idx).copied())
            .ok_or_else(|| anyhow!("choose a number between 1 and {}", Reactivity::ALL.len()));
    }
    Reactivity::from_str(answer, true).map_err(|_| anyhow!("unknown level '{answer}'"))
}

pub fn parse_symptoms(answer: &str) -> Result<SymptomSet> {
    let mut set = SymptomSet::new();
    for token in answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let symptom = match token.parse::<usize>() {
            Ok(idx) => idx
                .checked_sub(1)
                .and_then(|idx| Symptom::ALL.get(idx).copied())
                .ok_or_else(|| {
                    anyhow!("choose numbers between 1 and {}", Symptom::ALL.len())
                })?,
            Err(_) => Symptom::from_str(token, true)
                .map_err(|_| anyhow!("unknown symptom '{token}'"))?,
        };
        set.insert(symptom);
    }
    Ok(set)
}
