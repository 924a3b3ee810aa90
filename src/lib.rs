//! Netguard - NSL-KDD binary intrusion-detection training pipeline
//!
//! A one-shot batch pipeline that labels network-connection records as
//! normal or attack:
//! - [`data`] - Canonical NSL-KDD schema and CSV loading
//! - [`preprocessing`] - Label binarization and one-hot encoding
//! - [`training`] - Seeded train/test split and random forest training
//! - [`evaluation`] - Accuracy and per-class classification report
//! - [`pipeline`] - Sequential orchestration of the five stages

pub mod error;

pub mod config;
pub mod data;
pub mod preprocessing;
pub mod training;
pub mod evaluation;
pub mod pipeline;

pub use error::{NetguardError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{NetguardError, Result};

    pub use crate::config::PipelineConfig;
    pub use crate::data::{load_connections, CATEGORICAL_COLUMNS, KDD_COLUMNS, LABEL_COLUMN};
    pub use crate::evaluation::{accuracy, ClassificationReport};
    pub use crate::pipeline::run;
    pub use crate::preprocessing::{LabelBinarizer, OneHotEncoder};
    pub use crate::training::{train_test_split, DecisionTree, RandomForest, TrainTestSplit};
}
