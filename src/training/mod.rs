//! Model training
//!
//! Seeded train/test splitting and a bagged decision-tree classifier:
//! - [`split`] - Reproducible uniform train/test partition
//! - [`decision_tree`] - Binary CART classifier
//! - [`random_forest`] - Bootstrap-aggregated ensemble with majority vote

pub mod decision_tree;
pub mod random_forest;
pub mod split;

pub use decision_tree::{Criterion, DecisionTree, TreeNode};
pub use random_forest::{MaxFeatures, RandomForest};
pub use split::{train_test_split, TrainTestSplit};
