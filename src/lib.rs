#![crate_name = "punnett"]
//! Exact offspring genotype probabilities for diploid crosses over three
//! independent loci.
//!
//! ```
//! use punnett::prelude::*;
//!
//! let father: Genotype = "m,AA,BB,CC".parse().unwrap();
//! let mother: Genotype = "f,aa,bb,cc".parse().unwrap();
//! let result = cross(&father, &mother, &Targets::default()).unwrap();
//! assert_eq!(result.childs.len(), 2);
//! assert_eq!(result.sum.to_string(), "1/1");
//! ```
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod prelude;

pub mod cross;
pub mod error;
pub mod fraction;
pub mod observable;
pub mod pairing;
pub mod web;

use error::CrossError;

/// Number of loci carried by every `Genotype`.
pub const N_LOCI: usize = 3;

/// Biological sex of an individual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn index(self) -> usize {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }

    /// Short tag used on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl FromStr for Sex {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(CrossError::malformed(
                "sex",
                format!("expected `m` or `f`, found `{}`", other),
            )),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One of the three independent loci.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locus {
    A,
    B,
    C,
}

impl Locus {
    pub const ALL: [Locus; N_LOCI] = [Locus::A, Locus::B, Locus::C];

    pub fn index(self) -> usize {
        match self {
            Locus::A => 0,
            Locus::B => 1,
            Locus::C => 2,
        }
    }

    /// The dominant allele symbol. The recessive allele is its lowercase form.
    pub fn letter(self) -> char {
        match self {
            Locus::A => 'A',
            Locus::B => 'B',
            Locus::C => 'C',
        }
    }

    pub fn recessive(self) -> char {
        self.letter().to_ascii_lowercase()
    }
}

/// The unordered pair of alleles an individual carries at one locus.
///
/// Alleles are held dominant first, so `aA` and `Aa` are the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AllelePair {
    locus: Locus,
    alleles: [char; 2],
}

impl AllelePair {
    /// Number of distinct canonical pairs at a locus.
    pub const VARIANTS: usize = 3;

    pub fn new(locus: Locus, first: char, second: char) -> Result<Self, CrossError> {
        for allele in [first, second].iter() {
            if !allele.eq_ignore_ascii_case(&locus.letter()) {
                return Err(CrossError::malformed(
                    format!("{:?}", locus),
                    format!(
                        "allele `{}` is not `{}` or `{}`",
                        allele,
                        locus.letter(),
                        locus.recessive()
                    ),
                ));
            }
        }
        Ok(Self::canonical(locus, first, second))
    }

    // Uppercase sorts before lowercase.
    fn canonical(locus: Locus, first: char, second: char) -> Self {
        let alleles = if first > second {
            [second, first]
        } else {
            [first, second]
        };
        Self { locus, alleles }
    }

    /// Parses a two character allele string such as `"Aa"`.
    pub fn parse(locus: Locus, s: &str) -> Result<Self, CrossError> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [first, second] => Self::new(locus, *first, *second),
            _ => Err(CrossError::malformed(
                format!("{:?}", locus),
                format!("expected exactly two alleles, found `{}`", s),
            )),
        }
    }

    /// Builds the pair with `recessive` copies of the recessive allele.
    pub fn from_index(locus: Locus, recessive: usize) -> Self {
        let alleles = match recessive {
            0 => [locus.letter(), locus.letter()],
            1 => [locus.letter(), locus.recessive()],
            _ => [locus.recessive(), locus.recessive()],
        };
        Self { locus, alleles }
    }

    /// 0 for homozygous dominant, 1 for heterozygous, 2 for homozygous recessive.
    pub fn index(&self) -> usize {
        self.alleles.iter().filter(|a| a.is_ascii_lowercase()).count()
    }

    /// Combines one allele from each parent into a canonical pair.
    pub fn combine(locus: Locus, paternal: char, maternal: char) -> Self {
        Self::canonical(locus, paternal, maternal)
    }

    pub fn locus(&self) -> Locus {
        self.locus
    }

    pub fn alleles(&self) -> [char; 2] {
        self.alleles
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.alleles[0], self.alleles[1])
    }
}

/// A single individual: a sex plus one `AllelePair` per locus.
///
/// On the wire a genotype is the list `[sex, A, B, C]`, e.g.
/// `["m", "Aa", "BB", "cc"]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Genotype {
    sex: Sex,
    loci: [AllelePair; N_LOCI],
}

impl Genotype {
    /// Validates a `[sex, A, B, C]` list.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, CrossError> {
        if fields.len() != N_LOCI + 1 {
            return Err(CrossError::malformed(
                "genotype",
                format!(
                    "expected {} fields (sex and {} loci), found {}",
                    N_LOCI + 1,
                    N_LOCI,
                    fields.len()
                ),
            ));
        }
        let sex = fields[0].as_ref().parse()?;
        Ok(Self {
            sex,
            loci: [
                AllelePair::parse(Locus::A, fields[1].as_ref())?,
                AllelePair::parse(Locus::B, fields[2].as_ref())?,
                AllelePair::parse(Locus::C, fields[3].as_ref())?,
            ],
        })
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn locus(&self, locus: Locus) -> AllelePair {
        self.loci[locus.index()]
    }

    pub fn loci(&self) -> &[AllelePair; N_LOCI] {
        &self.loci
    }

    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.sex.to_string()];
        fields.extend(self.loci.iter().map(|pair| pair.to_string()));
        fields
    }
}

impl FromStr for Genotype {
    type Err = CrossError;

    /// Parses the comma separated form `m,Aa,Bb,Cc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        Self::from_fields(&fields)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields().join(","))
    }
}

impl Serialize for Genotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(N_LOCI + 1))?;
        seq.serialize_element(self.sex.tag())?;
        for pair in self.loci.iter() {
            seq.serialize_element(&pair.to_string())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Genotype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<String>::deserialize(deserializer)?;
        Genotype::from_fields(&fields).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_allele_order_is_not_significant() -> Result<(), Box<dyn Error>> {
        assert_eq!(
            AllelePair::parse(Locus::A, "aA")?,
            AllelePair::parse(Locus::A, "Aa")?
        );
        assert_eq!(AllelePair::parse(Locus::B, "bB")?.to_string(), "Bb");
        Ok(())
    }

    #[test]
    fn test_allele_pair_index() -> Result<(), Box<dyn Error>> {
        assert_eq!(AllelePair::parse(Locus::C, "CC")?.index(), 0);
        assert_eq!(AllelePair::parse(Locus::C, "cC")?.index(), 1);
        assert_eq!(AllelePair::parse(Locus::C, "cc")?.index(), 2);
        for i in 0..AllelePair::VARIANTS {
            assert_eq!(AllelePair::from_index(Locus::A, i).index(), i);
        }
        Ok(())
    }

    #[test]
    fn test_sex_is_case_insensitive() -> Result<(), Box<dyn Error>> {
        assert_eq!("M".parse::<Sex>()?, Sex::Male);
        assert_eq!("f".parse::<Sex>()?, Sex::Female);
        assert!("x".parse::<Sex>().is_err());
        assert!("male".parse::<Sex>().is_err());
        Ok(())
    }

    #[test]
    fn test_malformed_genotypes_are_rejected() {
        assert!("m,Aa,Bb".parse::<Genotype>().is_err());
        assert!("m,Aaa,Bb,Cc".parse::<Genotype>().is_err());
        assert!("m,Ab,Bb,Cc".parse::<Genotype>().is_err());
        assert!("m,Bb,Aa,Cc".parse::<Genotype>().is_err());
        assert!("q,Aa,Bb,Cc".parse::<Genotype>().is_err());
    }

    #[test]
    fn test_genotype_json_shape() -> Result<(), Box<dyn Error>> {
        let genotype: Genotype = serde_json::from_str(r#"["M", "aA", "BB", "cc"]"#)?;
        assert_eq!(genotype.sex(), Sex::Male);
        assert_eq!(
            serde_json::to_string(&genotype)?,
            r#"["m","Aa","BB","cc"]"#
        );
        assert!(serde_json::from_str::<Genotype>(r#"["m", "Aa"]"#).is_err());
        Ok(())
    }
}
