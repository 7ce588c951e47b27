//! # Fuzzy Distribution
//!
//! Fuzzy-distance clustering of labeled numeric rows.
//!
//! Every column is split into overlapping linguistic terms. Training rows are
//! grouped into classes by fuzzy distance; each class keeps its centroid and
//! the mean membership of its dependent values. A new feature vector is
//! matched to the nearest class, whose membership distribution is
//! defuzzified into an estimate of the dependent value.
//!
//! # Features
//!
//! - `serde`: Serialization support and JSON save/load
//! - `parallel`: Parallel batch queries via rayon
//!
//! # Examples
//!
//! ```
//! use fuzzy_dist::{Config, Distribution};
//!
//! let config = Config::builder()
//!     .feature_terms(3)
//!     .dependent_terms(3)
//!     .threshold(0.5)
//!     .build()
//!     .unwrap();
//!
//! let data = vec![vec![1.0, 2.0, 5.0], vec![1.1, 2.1, 5.2]];
//! let dist: Distribution = Distribution::train(&data, &config).unwrap();
//!
//! let estimate = dist.estimate(&[1.05, 2.05], 0.5).unwrap();
//! assert!(estimate > 5.0 && estimate < 5.2);
//! ```
//!
//! # Concurrency
//!
//! Training is a one-shot batch operation. A trained model is immutable and
//! may be queried from many threads at once; concurrent mutation is not
//! supported.

mod class;
mod config;
mod distribution;
pub mod error;
mod legacy;
mod partition;
mod store;
mod training;
mod trapezoidal;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "serde")]
mod persist;

pub use class::{ClassRecord, TrainingAccumulator};
pub use config::{Config, ConfigBuilder};
pub use distribution::Distribution;
pub use error::{Error, Result};
pub use partition::{FuzzyTerm, Partition};
#[cfg(feature = "serde")]
pub use persist::{PersistError, PersistResult};
pub use store::ClassStore;
pub use training::TrainSummary;
pub use trapezoidal::{TrapezoidalPartition, TrapezoidalTerm};
