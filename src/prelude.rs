pub use crate::cross::{
    cross, Child, CrossResult, OutcomeDistribution, OutcomeKey, Targets, OUTCOME_SPACE,
};
pub use crate::error::CrossError;
pub use crate::fraction::{gcd, reduce, Fraction};
pub use crate::observable::{GenotypeCsv, GenotypeCsvBuilder};
pub use crate::pairing::{cross_all, PairResult};
pub use crate::{AllelePair, Genotype, Locus, Sex, N_LOCI};
