//! Model evaluation
//!
//! Accuracy plus a per-class classification report for the binary
//! Normal(0)/Attack(1) task. Convention throughout: a metric whose
//! denominator is zero is reported as 0.0.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of predictions equal to the true label, in [0, 1]
pub fn accuracy(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| (**t > 0.5) == (**p > 0.5))
        .count();
    correct as f64 / y_true.len() as f64
}

/// Precision, recall, F1, and support for one class
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// True positives / predicted positives
    pub precision: f64,
    /// True positives / actual positives
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
    /// Count of true instances of the class
    pub support: usize,
}

impl ClassMetrics {
    fn from_counts(tp: usize, predicted: usize, actual: usize) -> Self {
        let precision = if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        };
        let recall = if actual > 0 {
            tp as f64 / actual as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
            support: actual,
        }
    }
}

/// Per-class classification report for the binary intrusion task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Overall accuracy
    pub accuracy: f64,
    /// Metrics for class 0 ("Normal")
    pub normal: ClassMetrics,
    /// Metrics for class 1 ("Attack")
    pub attack: ClassMetrics,
    /// Unweighted mean of the per-class metrics
    pub macro_avg: ClassMetrics,
    /// Support-weighted mean of the per-class metrics
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Compute the report from true and predicted 0/1 labels
    pub fn compute(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Self {
        let mut tp = 0usize; // attack predicted as attack
        let mut fp = 0usize;
        let mut tn = 0usize;
        let mut fn_ = 0usize;

        for (t, p) in y_true.iter().zip(y_pred.iter()) {
            match (*t > 0.5, *p > 0.5) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (false, false) => tn += 1,
                (true, false) => fn_ += 1,
            }
        }

        let normal = ClassMetrics::from_counts(tn, tn + fn_, tn + fp);
        let attack = ClassMetrics::from_counts(tp, tp + fp, tp + fn_);

        let total = normal.support + attack.support;
        let macro_avg = ClassMetrics {
            precision: (normal.precision + attack.precision) / 2.0,
            recall: (normal.recall + attack.recall) / 2.0,
            f1: (normal.f1 + attack.f1) / 2.0,
            support: total,
        };
        let weighted_avg = if total > 0 {
            let wn = normal.support as f64 / total as f64;
            let wa = attack.support as f64 / total as f64;
            ClassMetrics {
                precision: wn * normal.precision + wa * attack.precision,
                recall: wn * normal.recall + wa * attack.recall,
                f1: wn * normal.f1 + wa * attack.f1,
                support: total,
            }
        } else {
            ClassMetrics {
                precision: 0.0,
                recall: 0.0,
                f1: 0.0,
                support: 0,
            }
        };

        Self {
            accuracy: accuracy(y_true, y_pred),
            normal,
            attack,
            macro_avg,
            weighted_avg,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (name, m) in [("Normal (0)", &self.normal), ("Attack (1)", &self.attack)] {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, m) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy_perfect() {
        let y = array![0.0, 1.0, 1.0, 0.0];
        assert_eq!(accuracy(&y, &y), 1.0);
    }

    #[test]
    fn test_accuracy_range() {
        let y_true = array![0.0, 1.0, 1.0, 0.0];
        let y_pred = array![1.0, 1.0, 0.0, 0.0];
        let acc = accuracy(&y_true, &y_pred);
        assert_eq!(acc, 0.5);
        assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn test_report_known_counts() {
        // tp=2, fp=1, tn=3, fn=1
        let y_true = array![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let y_pred = array![1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred);

        assert!((report.attack.precision - 2.0 / 3.0).abs() < 1e-9);
        assert!((report.attack.recall - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.attack.support, 3);
        assert!((report.normal.precision - 3.0 / 4.0).abs() < 1e-9);
        assert!((report.normal.recall - 3.0 / 4.0).abs() < 1e-9);
        assert_eq!(report.normal.support, 4);
        assert!((report.accuracy - 5.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_f1_harmonic_mean() {
        let y_true = array![1.0, 1.0, 0.0, 0.0];
        let y_pred = array![1.0, 0.0, 1.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred);
        let p = report.attack.precision;
        let r = report.attack.recall;
        assert!((report.attack.f1 - 2.0 * p * r / (p + r)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_support_class() {
        // No attack rows at all: attack recall/support are 0 by convention
        let y_true = array![0.0, 0.0, 0.0];
        let y_pred = array![0.0, 0.0, 1.0];

        let report = ClassificationReport::compute(&y_true, &y_pred);
        assert_eq!(report.attack.support, 0);
        assert_eq!(report.attack.recall, 0.0);
        assert_eq!(report.attack.f1, 0.0);
    }

    #[test]
    fn test_zero_predicted_class() {
        // Nothing predicted as attack: attack precision is 0 by convention
        let y_true = array![1.0, 0.0, 0.0];
        let y_pred = array![0.0, 0.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred);
        assert_eq!(report.attack.precision, 0.0);
        assert_eq!(report.attack.f1, 0.0);
    }

    #[test]
    fn test_display_contains_classes() {
        let y_true = array![1.0, 0.0];
        let y_pred = array![1.0, 0.0];
        let report = ClassificationReport::compute(&y_true, &y_pred);

        let rendered = report.to_string();
        assert!(rendered.contains("Normal (0)"));
        assert!(rendered.contains("Attack (1)"));
        assert!(rendered.contains("weighted avg"));
    }
}
