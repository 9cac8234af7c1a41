//! Column type inference.

mod classifier;

pub use classifier::{Classification, TypeClassifier};
