//! Data preprocessing
//!
//! Two transforms turn the raw dataset fully numeric:
//! - label binarization (normal = 0, any attack type = 1)
//! - one-hot expansion of the categorical feature columns

mod encoder;

pub use encoder::{LabelBinarizer, OneHotEncoder};
