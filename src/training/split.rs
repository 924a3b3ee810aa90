//! Train/test splitting

use crate::error::{NetguardError, Result};
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A single train/test partition, row-aligned within each pair
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Partition rows uniformly at random into train and test subsets.
///
/// The shuffle is driven by `ChaCha8Rng::seed_from_u64(seed)`, so the
/// partition is bit-for-bit reproducible for a fixed seed and input. No
/// stratification: class balance in each subset is whatever the draw
/// produces. The test subset holds `ceil(n * test_fraction)` rows.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    let n = x.nrows();

    if y.len() != n {
        return Err(NetguardError::ShapeError {
            expected: format!("y length = {n}"),
            actual: format!("y length = {}", y.len()),
        });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(NetguardError::InvalidParameter {
            name: "test_fraction".to_string(),
            value: test_fraction.to_string(),
            reason: "must be strictly between 0 and 1".to_string(),
        });
    }

    let test_size = ((n as f64) * test_fraction).ceil() as usize;
    if test_size == 0 || test_size >= n {
        return Err(NetguardError::InvalidParameter {
            name: "test_fraction".to_string(),
            value: test_fraction.to_string(),
            reason: format!("leaves no usable split for {n} rows"),
        });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_indices, train_indices) = indices.split_at(test_size);

    let x_train = x.select(Axis(0), train_indices);
    let x_test = x.select(Axis(0), test_indices);
    let y_train = Array1::from_vec(train_indices.iter().map(|&i| y[i]).collect());
    let y_test = Array1::from_vec(test_indices.iter().map(|&i| y[i]).collect());

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}
