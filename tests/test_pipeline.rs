//! Integration tests: preprocessing, splitting, and the full pipeline

use netguard::data::{features_and_labels, load_connections, CATEGORICAL_COLUMNS, LABEL_COLUMN};
use netguard::evaluation::{accuracy, ClassificationReport};
use netguard::preprocessing::{LabelBinarizer, OneHotEncoder};
use netguard::training::{train_test_split, RandomForest};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use std::io::Write;

/// Write a headerless 43-column KDD CSV from (protocol, service, flag, label) rows.
fn write_kdd_csv(rows: &[(&str, &str, &str, &str)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    for (i, (protocol, service, flag, label)) in rows.iter().enumerate() {
        let mut fields = vec![i.to_string()];
        fields.push(protocol.to_string());
        fields.push(service.to_string());
        fields.push(flag.to_string());
        fields.extend(std::iter::repeat("0".to_string()).take(37));
        fields.push(label.to_string());
        fields.push("15".to_string());
        writeln!(file, "{}", fields.join(",")).unwrap();
    }
    file
}

fn encode(df: &DataFrame) -> DataFrame {
    let df = LabelBinarizer::new("normal")
        .transform(df, LABEL_COLUMN)
        .unwrap();
    OneHotEncoder::new()
        .fit_transform(&df, &CATEGORICAL_COLUMNS)
        .unwrap()
}

#[test]
fn test_ten_row_encoding_scenario() {
    // 8 normal rows and 2 attack rows across 3 distinct protocol types
    let rows = [
        ("tcp", "http", "SF", "normal"),
        ("tcp", "http", "SF", "normal"),
        ("udp", "dns", "SF", "normal"),
        ("udp", "dns", "SF", "normal"),
        ("icmp", "ecr_i", "SF", "normal"),
        ("tcp", "ftp", "SF", "normal"),
        ("udp", "dns", "SF", "normal"),
        ("tcp", "http", "SF", "normal"),
        ("tcp", "http", "S0", "neptune"),
        ("icmp", "ecr_i", "SF", "smurf"),
    ];
    let file = write_kdd_csv(&rows);
    let df = load_connections(file.path()).unwrap();
    let encoded = encode(&df);

    // Label column holds exactly 8 zeros and 2 ones
    let labels: Vec<f64> = encoded
        .column(LABEL_COLUMN)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(labels.iter().filter(|&&v| v == 0.0).count(), 8);
    assert_eq!(labels.iter().filter(|&&v| v == 1.0).count(), 2);
    assert!(labels.iter().all(|&v| v == 0.0 || v == 1.0));

    // protocol_type expanded into exactly 3 indicator columns
    let protocol_cols: Vec<String> = encoded
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .filter(|name| name.starts_with("protocol_type_"))
        .collect();
    assert_eq!(protocol_cols.len(), 3);
    assert!(encoded.column("protocol_type").is_err());
}

#[test]
fn test_encoded_dataset_is_fully_numeric() {
    let rows = [
        ("tcp", "http", "SF", "normal"),
        ("udp", "dns", "S0", "neptune"),
        ("icmp", "ecr_i", "REJ", "smurf"),
    ];
    let file = write_kdd_csv(&rows);
    let df = load_connections(file.path()).unwrap();
    let encoded = encode(&df);

    for col in encoded.get_columns() {
        assert!(
            col.dtype().is_primitive_numeric(),
            "column '{}' is not numeric: {:?}",
            col.name(),
            col.dtype()
        );
    }
}

#[test]
fn test_indicator_rows_sum_to_one_per_source_column() {
    let rows = [
        ("tcp", "http", "SF", "normal"),
        ("udp", "dns", "S0", "neptune"),
        ("icmp", "ecr_i", "REJ", "smurf"),
        ("tcp", "dns", "SF", "normal"),
    ];
    let file = write_kdd_csv(&rows);
    let df = load_connections(file.path()).unwrap();
    let encoded = encode(&df);

    for source in CATEGORICAL_COLUMNS {
        let prefix = format!("{source}_");
        let indicator_cols: Vec<String> = encoded
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .filter(|name| name.starts_with(&prefix))
            .collect();
        assert!(!indicator_cols.is_empty());

        for row in 0..encoded.height() {
            let sum: f64 = indicator_cols
                .iter()
                .map(|name| {
                    encoded
                        .column(name)
                        .unwrap()
                        .f64()
                        .unwrap()
                        .get(row)
                        .unwrap()
                })
                .sum();
            assert_eq!(sum, 1.0, "{source} indicators for row {row} must sum to 1");
        }
    }
}

#[test]
fn test_hundred_row_split_scenario() {
    // Tag each row with its index so membership can be compared across runs
    let x = Array2::from_shape_fn((100, 4), |(r, c)| (r * 4 + c) as f64);
    let y = Array1::from_shape_fn(100, |i| (i % 3 == 0) as usize as f64);

    let first = train_test_split(&x, &y, 0.2, 42).unwrap();
    assert_eq!(first.x_test.nrows(), 20);
    assert_eq!(first.x_train.nrows(), 80);
    assert_eq!(first.x_train.nrows() + first.x_test.nrows(), 100);

    let second = train_test_split(&x, &y, 0.2, 42).unwrap();
    let ids = |m: &Array2<f64>| -> Vec<usize> {
        m.rows().into_iter().map(|r| r[0] as usize / 4).collect()
    };
    assert_eq!(ids(&first.x_test), ids(&second.x_test));
    assert_eq!(ids(&first.x_train), ids(&second.x_train));
}

#[test]
fn test_full_pipeline_on_synthetic_data() {
    // Separable traffic: attacks carry a large duration value (field 0)
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let protocols = ["tcp", "udp", "icmp"];
    for i in 0..120 {
        let is_attack = i % 3 == 0;
        let label = if is_attack { "neptune" } else { "normal" };
        let duration = if is_attack { 9000 + i } else { i };
        let mut fields = vec![duration.to_string()];
        fields.push(protocols[i % protocols.len()].to_string());
        fields.push("http".to_string());
        fields.push("SF".to_string());
        fields.extend(std::iter::repeat("0".to_string()).take(37));
        fields.push(label.to_string());
        fields.push("15".to_string());
        writeln!(file, "{}", fields.join(",")).unwrap();
    }

    let df = load_connections(file.path()).unwrap();
    let encoded = encode(&df);
    let (x, y) = features_and_labels(&encoded, LABEL_COLUMN).unwrap();
    let split = train_test_split(&x, &y, 0.2, 42).unwrap();

    let mut model = RandomForest::new(20).with_random_state(42);
    model.fit(&split.x_train, &split.y_train).unwrap();

    let y_pred = model.predict(&split.x_test).unwrap();
    let acc = accuracy(&split.y_test, &y_pred);
    assert!(acc > 0.9, "separable data should be learned, got {acc}");

    let report = ClassificationReport::compute(&split.y_test, &y_pred);
    for m in [&report.normal, &report.attack] {
        assert!((0.0..=1.0).contains(&m.precision));
        assert!((0.0..=1.0).contains(&m.recall));
        assert!((0.0..=1.0).contains(&m.f1));
    }
    assert_eq!(report.normal.support + report.attack.support, 24);
}

#[test]
fn test_pipeline_deterministic_across_runs() {
    let rows: Vec<(&str, &str, &str, &str)> = (0..40)
        .map(|i| {
            if i % 4 == 0 {
                ("tcp", "http", "S0", "neptune")
            } else {
                ("udp", "dns", "SF", "normal")
            }
        })
        .collect();
    let file = write_kdd_csv(&rows);

    let run_once = || {
        let df = load_connections(file.path()).unwrap();
        let encoded = encode(&df);
        let (x, y) = features_and_labels(&encoded, LABEL_COLUMN).unwrap();
        let split = train_test_split(&x, &y, 0.2, 42).unwrap();
        let mut model = RandomForest::new(10).with_random_state(42);
        model.fit(&split.x_train, &split.y_train).unwrap();
        model.predict(&split.x_test).unwrap()
    };

    assert_eq!(run_once(), run_once());
}
