//! The cross engine.
//!
//! Every gamete combination between two parents is enumerated once per
//! offspring sex, giving `OUTCOME_SPACE` equally likely elementary outcomes.
//! Outcomes are tallied into an `OutcomeDistribution` keyed by
//! `(sex, A, B, C)` and reported as reduced fractions of that space.
use crate::fraction::Fraction;
use crate::{AllelePair, Genotype, Locus, Sex, N_LOCI};
use log::debug;
use ndarray::Array4;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::iter::FromIterator;

/// An offspring class: a sex and a canonical allele pair at each locus.
pub type OutcomeKey = Genotype;

/// Alleles each parent can pass on at one locus.
const GAMETES: u32 = 2;

/// Number of equally likely elementary outcomes in a cross.
pub const OUTCOME_SPACE: u32 =
    2 * (GAMETES * GAMETES) * (GAMETES * GAMETES) * (GAMETES * GAMETES);

/// Counts of elementary outcomes per `OutcomeKey`.
///
/// Backed by a `(sex, A, B, C)` table of shape `2 x 3 x 3 x 3`, one cell
/// per distinct key.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDistribution {
    counts: Array4<u32>,
}

impl OutcomeDistribution {
    /// Every key initialised to zero.
    pub fn new() -> Self {
        Self {
            counts: Array4::zeros((
                Sex::ALL.len(),
                AllelePair::VARIANTS,
                AllelePair::VARIANTS,
                AllelePair::VARIANTS,
            )),
        }
    }

    /// Tallies every outcome of `father x mother`.
    ///
    /// The sex of the parents is not checked here; see `cross`.
    pub fn between(father: &Genotype, mother: &Genotype) -> Self {
        let mut distribution = Self::new();
        let offspring: Vec<Vec<AllelePair>> = Locus::ALL
            .iter()
            .map(|&locus| {
                let paternal = father.locus(locus).alleles();
                let maternal = mother.locus(locus).alleles();
                paternal
                    .iter()
                    .flat_map(|&p| {
                        maternal
                            .iter()
                            .map(move |&m| AllelePair::combine(locus, p, m))
                    })
                    .collect()
            })
            .collect();

        for sex in Sex::ALL.iter() {
            for a in offspring[Locus::A.index()].iter() {
                for b in offspring[Locus::B.index()].iter() {
                    for c in offspring[Locus::C.index()].iter() {
                        distribution.counts[[sex.index(), a.index(), b.index(), c.index()]] += 1;
                    }
                }
            }
        }
        distribution
    }

    fn key_at(index: (usize, usize, usize, usize)) -> OutcomeKey {
        let (sex, a, b, c) = index;
        let loci: [AllelePair; N_LOCI] = [
            AllelePair::from_index(Locus::A, a),
            AllelePair::from_index(Locus::B, b),
            AllelePair::from_index(Locus::C, c),
        ];
        Genotype {
            sex: Sex::ALL[sex],
            loci,
        }
    }

    /// All keys, in table order.
    pub fn keys() -> Vec<OutcomeKey> {
        Self::new()
            .counts
            .indexed_iter()
            .map(|(index, _)| Self::key_at(index))
            .collect()
    }

    pub fn count(&self, key: &OutcomeKey) -> u32 {
        let [a, b, c] = key.loci();
        self.counts[[key.sex().index(), a.index(), b.index(), c.index()]]
    }

    pub fn total(&self) -> u32 {
        self.counts.sum()
    }

    /// Keys with a non-zero count, in table order.
    pub fn reachable<'a>(&'a self) -> impl Iterator<Item = (OutcomeKey, u32)> + 'a {
        self.counts
            .indexed_iter()
            .filter(|(_, count)| **count > 0)
            .map(|(index, count)| (Self::key_at(index), *count))
    }
}

impl Default for OutcomeDistribution {
    fn default() -> Self {
        Self::new()
    }
}

/// Offspring classes a caller is interested in.
///
/// An empty set admits every key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Targets {
    keys: HashSet<OutcomeKey>,
}

impl Targets {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn admits(&self, key: &OutcomeKey) -> bool {
        self.keys.is_empty() || self.keys.contains(key)
    }
}

impl FromIterator<OutcomeKey> for Targets {
    fn from_iter<I: IntoIterator<Item = OutcomeKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Targets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<OutcomeKey>::deserialize(deserializer)?.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Child {
    pub gene: OutcomeKey,
    pub prob: Fraction,
}

/// The reachable (and admitted) offspring of one father and one mother.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossResult {
    pub father: Genotype,
    pub mother: Genotype,
    pub childs: Vec<Child>,
    /// Probability that an offspring falls in any of `childs`.
    pub sum: Fraction,
}

impl CrossResult {
    pub fn probability(&self, key: &OutcomeKey) -> Option<Fraction> {
        self.childs
            .iter()
            .find(|child| child.gene == *key)
            .map(|child| child.prob)
    }
}

/// Crosses two individuals.
///
/// Returns `None` when both have the same sex. Otherwise the male is
/// reported as the father regardless of argument order.
pub fn cross(first: &Genotype, second: &Genotype, targets: &Targets) -> Option<CrossResult> {
    if first.sex() == second.sex() {
        debug!("skipping same-sex pair {} x {}", first, second);
        return None;
    }
    let (father, mother) = match first.sex() {
        Sex::Male => (first, second),
        Sex::Female => (second, first),
    };

    let distribution = OutcomeDistribution::between(father, mother);
    let admitted: Vec<(OutcomeKey, u32)> = distribution
        .reachable()
        .filter(|(key, _)| targets.admits(key))
        .collect();
    let total: u32 = admitted.iter().map(|(_, count)| count).sum();

    debug!(
        "{} x {}: {} offspring classes, {}/{} outcomes admitted",
        father,
        mother,
        admitted.len(),
        total,
        OUTCOME_SPACE
    );

    Some(CrossResult {
        father: *father,
        mother: *mother,
        childs: admitted
            .into_iter()
            .map(|(gene, count)| Child {
                gene,
                prob: Fraction::new(count, OUTCOME_SPACE),
            })
            .collect(),
        sum: Fraction::new(total, OUTCOME_SPACE),
    })
}
