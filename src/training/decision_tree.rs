//! Binary decision tree classifier

use crate::error::{NetguardError, Result};
use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Decision tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with the majority class (0.0 or 1.0)
    Leaf { value: f64, n_samples: usize },
    /// Internal node with a threshold split
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
        n_samples: usize,
    },
}

/// Impurity criterion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Criterion {
    Gini,
    Entropy,
}

/// CART classifier for binary (0/1) labels.
///
/// At each split node a fresh random subset of `max_features` features is
/// sampled and only those are scanned for the best threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Option<TreeNode>,
    /// Maximum depth
    pub max_depth: Option<usize>,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    /// Features sampled per split node (all features when None)
    pub max_features: Option<usize>,
    /// Impurity criterion
    pub criterion: Criterion,
    /// Seed for the per-node feature subsets
    pub random_state: Option<u64>,
    n_features: usize,
    feature_importances: Option<Array1<f64>>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Create a new classifier tree
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            criterion: Criterion::Gini,
            random_state: None,
            n_features: 0,
            feature_importances: None,
        }
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set minimum samples to split
    pub fn with_min_samples_split(mut self, min_samples: usize) -> Self {
        self.min_samples_split = min_samples;
        self
    }

    /// Set minimum samples in leaf
    pub fn with_min_samples_leaf(mut self, min_samples: usize) -> Self {
        self.min_samples_leaf = min_samples;
        self
    }

    /// Set criterion
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set features sampled per split
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Set random state
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Fit the tree to training data with 0/1 labels
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.len() {
            return Err(NetguardError::ShapeError {
                expected: format!("y length = {n_samples}"),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(NetguardError::TrainingError(
                "cannot fit on an empty dataset".to_string(),
            ));
        }

        self.n_features = n_features;

        let mut rng = match self.random_state {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut importances = vec![0.0; n_features];
        let indices: Vec<usize> = (0..n_samples).collect();
        self.root = Some(self.build_tree(x, y, &indices, 0, &mut importances, &mut rng));

        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for imp in &mut importances {
                *imp /= total;
            }
        }
        self.feature_importances = Some(Array1::from_vec(importances));

        Ok(self)
    }

    fn build_tree(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        indices: &[usize],
        depth: usize,
        importances: &mut [f64],
        rng: &mut ChaCha8Rng,
    ) -> TreeNode {
        let n_samples = indices.len();
        let positives = indices.iter().filter(|&&i| y[i] > 0.5).count();

        let should_stop = n_samples < self.min_samples_split
            || self.max_depth.map_or(false, |d| depth >= d)
            || positives == 0
            || positives == n_samples;

        if should_stop {
            return TreeNode::Leaf {
                value: Self::majority(positives, n_samples),
                n_samples,
            };
        }

        if let Some((feature_idx, threshold, gain)) = self.find_best_split(x, y, indices, rng) {
            let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| x[[i, feature_idx]] <= threshold);

            if left_indices.len() < self.min_samples_leaf
                || right_indices.len() < self.min_samples_leaf
            {
                return TreeNode::Leaf {
                    value: Self::majority(positives, n_samples),
                    n_samples,
                };
            }

            importances[feature_idx] += n_samples as f64 * gain;

            let left = Box::new(self.build_tree(x, y, &left_indices, depth + 1, importances, rng));
            let right =
                Box::new(self.build_tree(x, y, &right_indices, depth + 1, importances, rng));

            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
                n_samples,
            }
        } else {
            TreeNode::Leaf {
                value: Self::majority(positives, n_samples),
                n_samples,
            }
        }
    }

    /// Scan a random feature subset for the threshold with the best
    /// impurity gain. Returns `(feature, threshold, gain)`.
    fn find_best_split(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        indices: &[usize],
        rng: &mut ChaCha8Rng,
    ) -> Option<(usize, f64, f64)> {
        let n_features = x.ncols();
        let n_to_try = self.max_features.unwrap_or(n_features).min(n_features).max(1);

        let mut feature_pool: Vec<usize> = (0..n_features).collect();
        feature_pool.shuffle(rng);
        feature_pool.truncate(n_to_try);

        let n = indices.len();
        let total_pos = indices.iter().filter(|&&i| y[i] > 0.5).count();
        let parent_impurity = self.impurity(total_pos, n);

        let mut best: Option<(usize, f64, f64)> = None;

        for &feature_idx in &feature_pool {
            let mut values: Vec<f64> = indices.iter().map(|&i| x[[i, feature_idx]]).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let mut left_count = 0usize;
                let mut left_pos = 0usize;
                for &idx in indices {
                    if x[[idx, feature_idx]] <= threshold {
                        left_count += 1;
                        if y[idx] > 0.5 {
                            left_pos += 1;
                        }
                    }
                }
                let right_count = n - left_count;
                let right_pos = total_pos - left_pos;

                if left_count < self.min_samples_leaf || right_count < self.min_samples_leaf {
                    continue;
                }

                let weighted = (left_count as f64 * self.impurity(left_pos, left_count)
                    + right_count as f64 * self.impurity(right_pos, right_count))
                    / n as f64;
                let gain = parent_impurity - weighted;

                if gain > 0.0 && best.map_or(true, |(_, _, g)| gain > g) {
                    best = Some((feature_idx, threshold, gain));
                }
            }
        }

        best
    }

    /// Binary impurity from the positive count
    fn impurity(&self, positives: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let p = positives as f64 / count as f64;
        let q = 1.0 - p;
        match self.criterion {
            Criterion::Gini => 1.0 - p * p - q * q,
            Criterion::Entropy => {
                let mut entropy = 0.0;
                if p > 0.0 {
                    entropy -= p * p.ln();
                }
                if q > 0.0 {
                    entropy -= q * q.ln();
                }
                entropy
            }
        }
    }

    /// Majority class; ties go to the benign class
    fn majority(positives: usize, count: usize) -> f64 {
        if 2 * positives > count {
            1.0
        } else {
            0.0
        }
    }

    /// Make predictions
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let root = self.root.as_ref().ok_or(NetguardError::ModelNotFitted)?;

        let predictions: Vec<f64> = (0..x.nrows())
            .map(|i| Self::predict_sample(root, &x.row(i).to_vec()))
            .collect();

        Ok(Array1::from_vec(predictions))
    }

    fn predict_sample(node: &TreeNode, sample: &[f64]) -> f64 {
        match node {
            TreeNode::Leaf { value, .. } => *value,
            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
                ..
            } => {
                if sample[*feature_idx] <= *threshold {
                    Self::predict_sample(left, sample)
                } else {
                    Self::predict_sample(right, sample)
                }
            }
        }
    }

    /// Get feature importances
    pub fn feature_importances(&self) -> Option<&Array1<f64>> {
        self.feature_importances.as_ref()
    }

    /// Get tree depth
    pub fn get_depth(&self) -> usize {
        match &self.root {
            None => 0,
            Some(node) => Self::node_depth(node),
        }
    }

    fn node_depth(node: &TreeNode) -> usize {
        match node {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => {
                1 + Self::node_depth(left).max(Self::node_depth(right))
            }
        }
    }
}
