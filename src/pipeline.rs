//! Sequential training pipeline
//!
//! Load → encode → split → train → evaluate, printing the human-readable
//! run report along the way. There is no branching beyond error
//! propagation: each stage hands its output to the next.

use crate::config::PipelineConfig;
use crate::data::{self, CATEGORICAL_COLUMNS, LABEL_COLUMN};
use crate::error::Result;
use crate::evaluation::ClassificationReport;
use crate::preprocessing::{LabelBinarizer, OneHotEncoder};
use crate::training::{train_test_split, RandomForest};
use colored::*;
use std::time::Instant;
use tracing::info;

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}

fn ok(s: &str) -> ColoredString {
    s.truecolor(100, 210, 120)
}

fn step_ok(msg: &str) {
    println!("  {} {}", ok("✓"), msg);
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

/// Run the full pipeline and return the evaluation report.
///
/// Console output order: load confirmation, preprocessing confirmations,
/// train/test row counts, training duration, accuracy, per-class report.
pub fn run(config: &PipelineConfig) -> Result<ClassificationReport> {
    section("Loading data");
    let df = data::load_connections(&config.data_path)?;
    step_ok(&format!(
        "loaded {} connection records from {}",
        df.height(),
        config.data_path.display()
    ));

    section("Preprocessing");
    let binarizer = LabelBinarizer::new(config.normal_label.as_str());
    let df = binarizer.transform(&df, LABEL_COLUMN)?;
    step_ok("binarized label column (0 = normal, 1 = attack)");

    let mut encoder = OneHotEncoder::new();
    let df = encoder.fit_transform(&df, &CATEGORICAL_COLUMNS)?;
    step_ok("one-hot encoded protocol_type, service, and flag");
    step_ok("all feature columns are now numeric");

    section("Splitting");
    let (x, y) = data::features_and_labels(&df, LABEL_COLUMN)?;
    let split = train_test_split(&x, &y, config.test_fraction, config.seed)?;
    step_ok(&format!("training set: {} rows", split.x_train.nrows()));
    step_ok(&format!("test set:     {} rows", split.x_test.nrows()));

    section("Training");
    let mut model = RandomForest::new(config.n_estimators).with_random_state(config.seed);
    let start = Instant::now();
    model.fit(&split.x_train, &split.y_train)?;
    let elapsed = start.elapsed().as_secs_f64();
    step_ok(&format!(
        "fitted {} trees in {elapsed:.2} seconds",
        model.n_trees()
    ));
    info!(trees = model.n_trees(), secs = elapsed, "training complete");

    section("Evaluation");
    let y_pred = model.predict(&split.x_test)?;
    let report = ClassificationReport::compute(&split.y_test, &y_pred);
    step_ok(&format!("accuracy: {:.2}%", report.accuracy * 100.0));
    println!();
    println!("{report}");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A linearly separable synthetic KDD file: normal traffic has small
    /// src_bytes, attacks have large src_bytes.
    fn write_synthetic_kdd(n_normal: usize, n_attack: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let protocols = ["tcp", "udp", "icmp"];
        for i in 0..(n_normal + n_attack) {
            let is_attack = i >= n_normal;
            let label = if is_attack { "neptune" } else { "normal" };
            let src_bytes = if is_attack { 5000 + i } else { 10 + i };
            let mut fields = vec!["0".to_string()];
            fields.push(protocols[i % protocols.len()].to_string());
            fields.push("http".to_string());
            fields.push("SF".to_string());
            fields.push(src_bytes.to_string());
            fields.extend(std::iter::repeat("0".to_string()).take(36));
            fields.push(label.to_string());
            fields.push("15".to_string());
            writeln!(file, "{}", fields.join(",")).unwrap();
        }
        file
    }

    #[test]
    fn test_run_end_to_end() {
        let file = write_synthetic_kdd(60, 40);
        let config = PipelineConfig {
            data_path: file.path().to_path_buf(),
            n_estimators: 10,
            ..PipelineConfig::default()
        };

        let report = run(&config).unwrap();
        assert!((0.0..=1.0).contains(&report.accuracy));
        assert_eq!(report.normal.support + report.attack.support, 20);
    }

    #[test]
    fn test_run_missing_file() {
        let config = PipelineConfig {
            data_path: "does_not_exist.csv".into(),
            ..PipelineConfig::default()
        };
        assert!(run(&config).is_err());
    }
}
