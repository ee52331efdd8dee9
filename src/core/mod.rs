pub mod quiz;
pub mod readings;
pub mod report;
pub mod score;

use crate::config::Config;
use crate::core::readings::Readings;
use crate::core::report::{CallToAction, CarImage, FinalReport, ImageStatus, Tier};
use crate::core::score::SubScores;
use crate::utils::fs as fs_utils;
use std::path::Path;

/// Runs one full check-up pass. Asset paths are resolved against `base_dir`.
pub fn evaluate(readings: &Readings, cfg: &Config, base_dir: &Path) -> FinalReport {
    let scores = SubScores::from_readings(readings);
    let total = scores.total();
    let tier = Tier::from_total(total);
    let image_id = CarImage::from_total(total);

    let call_to_action = CallToAction::from_total(total, cfg.booking.link());

    tracing::debug!(
        motore = scores.motore,
        radiatore = scores.radiatore,
        telaio = scores.telaio,
        total,
        tier = tier.label(),
        warning_light = call_to_action.is_warning(),
        "evaluated readings"
    );

    let image = fs_utils::lookup_asset(base_dir, &cfg.assets.dir, &image_id.file_name());
    if !image.found {
        tracing::warn!(path = %image.display_path, "car image not found");
    }
    let logo = fs_utils::lookup_asset(base_dir, &cfg.assets.dir, &cfg.assets.logo);
    if !logo.found {
        tracing::debug!(path = %logo.display_path, "logo not found, skipping");
    }

    FinalReport {
        readings: readings.clone(),
        engine_status: readings.engine.status_message(),
        scores,
        total,
        tier,
        image: ImageStatus {
            id: image_id,
            path: image.display_path,
            found: image.found,
        },
        logo: logo.found.then_some(logo.display_path),
        call_to_action,
        telemetry: report::telemetry(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz;
    use crate::core::readings::{EngineReading, Reactivity, Symptom, SymptomSet};
    use crate::core::report::{write_human, write_json};
    use crate::core::score::format_total;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn render_human(report: &FinalReport) -> String {
        let mut out = Vec::new();
        write_human(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn readings(rpm: u8, reactivity: Reactivity, symptoms: usize) -> Readings {
        Readings {
            engine: EngineReading::new(rpm).unwrap(),
            reactivity,
            symptoms: Symptom::ALL.into_iter().take(symptoms).collect::<SymptomSet>(),
        }
    }

    #[test]
    fn calm_driver_is_in_great_shape() {
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(4, Reactivity::Normale, 0),
            &Config::default(),
            dir.path(),
        );

        assert_eq!(report.scores.motore, 2);
        assert_eq!(report.scores.radiatore, 4);
        assert_eq!(report.scores.telaio, 0);
        assert_eq!(format_total(report.total), "2.0");
        assert_eq!(report.tier.label(), "OTTIME CONDIZIONI");
        assert_eq!(report.image.id, CarImage::Perfect);
        assert!(!report.call_to_action.is_warning());
    }

    #[test]
    fn red_zone_everything_is_a_wreck() {
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(10, Reactivity::Bollente, 6),
            &Config::default(),
            dir.path(),
        );

        assert_eq!(report.scores.telaio, 10);
        assert_eq!(report.total, 10.0);
        assert_eq!(report.tier.label(), "RELITTO IN FIAMME");
        assert_eq!(report.image.id, CarImage::Wrecked);
        assert!(report.call_to_action.is_warning());
    }

    #[test]
    fn mid_range_shows_wear_and_booking_link() {
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(6, Reactivity::Caldo, 2),
            &Config::default(),
            dir.path(),
        );

        assert_eq!(
            (report.scores.motore, report.scores.radiatore, report.scores.telaio),
            (6, 7, 4)
        );
        assert_eq!(format_total(report.total), "5.7");
        assert_eq!(report.tier.label(), "USURA EVIDENTE");
        assert_eq!(report.image.id, CarImage::Scratched);
        match &report.call_to_action {
            CallToAction::Warning { link, .. } => {
                assert_eq!(link.url, "https://paoloalonge.it/prenota/")
            }
            CallToAction::Nominal { .. } => panic!("expected warning"),
        }
    }

    #[test]
    fn total_of_exactly_four_stays_neutral() {
        // 2 + 4 + 6 = 12
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(3, Reactivity::Normale, 3),
            &Config::default(),
            dir.path(),
        );
        assert_eq!(report.total, 4.0);
        assert_eq!(report.tier, Tier::UsuraEvidente);
        assert!(!report.call_to_action.is_warning());
    }

    #[test]
    fn same_readings_give_same_report() {
        let dir = tempdir().unwrap();
        let input = readings(8, Reactivity::Freddo, 1);
        let first = evaluate(&input, &Config::default(), dir.path());
        let second = evaluate(&input, &Config::default(), dir.path());
        assert_eq!(first.total, second.total);
        assert_eq!(first.tier, second.tier);
        assert_eq!(first.image, second.image);
        assert_eq!(first.call_to_action, second.call_to_action);
    }

    #[test]
    fn missing_image_surfaces_message_and_present_one_does_not() {
        let dir = tempdir().unwrap();
        let input = readings(4, Reactivity::Freddo, 0);

        let report = evaluate(&input, &Config::default(), dir.path());
        assert!(!report.image.found);
        assert!(report.logo.is_none());
        let text = render_human(&report);
        assert!(text.contains("Immagine non trovata: assets/car_perfect.png"));
        assert!(!text.contains("logo"));

        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/car_perfect.png"), b"png").unwrap();
        fs::write(dir.path().join("assets/logo_paolo_alonge.png"), b"png").unwrap();

        let report = evaluate(&input, &Config::default(), dir.path());
        assert!(report.image.found);
        assert_eq!(report.logo.as_deref(), Some("assets/logo_paolo_alonge.png"));
        assert!(!render_human(&report).contains("Immagine non trovata"));
    }

    #[test]
    fn human_report_lists_readings_and_telemetry() {
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(6, Reactivity::Caldo, 2),
            &Config::default(),
            dir.path(),
        );
        let text = render_human(&report);

        assert!(text.contains("Officina delle Emozioni®"));
        assert!(text.contains("Regime alto. Consumo elevato di carburante."));
        assert!(text.contains("Caldo (Irritabile)"));
        assert!(text.contains("Insonnia / Sonno disturbato"));
        assert!(text.contains("5.7/10"));
        assert!(text.contains("USURA EVIDENTE"));
        assert!(text.contains("Telaio (Corpo)"));
        assert!(text.contains(" 70%"));
        assert!(text.contains("https://paoloalonge.it/prenota/"));
    }

    #[test]
    fn json_report_exposes_display_total_and_tier() {
        let dir = tempdir().unwrap();
        let report = evaluate(
            &readings(6, Reactivity::Caldo, 2),
            &Config::default(),
            dir.path(),
        );
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["total_display"], "5.7");
        assert_eq!(json["tier"]["label"], "USURA EVIDENTE");
        assert_eq!(json["tier"]["color"], "#ff9933");
        assert_eq!(json["image"]["id"], "scratched");
        assert_eq!(json["image"]["found"], false);
        assert_eq!(json["readings"]["engine"], 6);
        assert_eq!(json["readings"]["reactivity"], "caldo");
        assert_eq!(json["readings"]["symptoms"][1], "tensione-muscolare");
        assert_eq!(json["telemetry"][2]["percent"], 40);
        assert_eq!(json["call_to_action"]["kind"], "warning");
    }

    #[test]
    fn quiz_prompts_stay_out_of_json_output() {
        let dir = tempdir().unwrap();
        let mut input = Cursor::new(b"6\ncaldo\n1,2\n".to_vec());
        let mut prompts = Vec::new();
        let answers = quiz::collect(&mut input, &mut prompts).unwrap();

        let report = evaluate(&answers, &Config::default(), dir.path());
        let mut stdout = Vec::new();
        write_json(&mut stdout, &report).unwrap();

        assert!(String::from_utf8(prompts).unwrap().contains("Scheda Tecnica"));
        let json: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(json["total_display"], "5.7");
        assert!(!String::from_utf8(stdout).unwrap().contains("Scheda Tecnica"));
    }
}
