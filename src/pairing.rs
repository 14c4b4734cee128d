use crate::cross::{cross, CrossResult, Targets};
use crate::error::CrossError;
use crate::Genotype;
use log::debug;
use rayon::prelude::*;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The outcome of crossing one pair of parents.
///
/// Same-sex pairs carry no result and serialize as `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairResult(pub Option<CrossResult>);

impl PairResult {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn result(&self) -> Option<&CrossResult> {
        self.0.as_ref()
    }
}

impl Serialize for PairResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(result) => result.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Index pairs `(i, j)` with `i < j`, in lexicographic order.
pub fn pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect()
}

/// Crosses every unordered pair of `parents`.
///
/// Results are in pair order: (0, 1), (0, 2), ..., (1, 2), ...
pub fn cross_all(parents: &[Genotype], targets: &Targets) -> Result<Vec<PairResult>, CrossError> {
    if parents.len() < 2 {
        return Err(CrossError::InsufficientParents(parents.len()));
    }
    let pairs = pairs(parents.len());
    debug!(
        "crossing {} parents in {} pairs against {} targets",
        parents.len(),
        pairs.len(),
        targets.len()
    );
    Ok(pairs
        .par_iter()
        .map(|&(i, j)| PairResult(cross(&parents[i], &parents[j], targets)))
        .collect())
}
