use crate::error::CrossError;
use crate::Genotype;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Produces `Genotype`s from delimited `sex,A,B,C` rows.
///
/// `GenotypeCsv` implements Iterator so it can be collected directly
/// into the parent list of `cross_all()` or into `Targets`.
pub struct GenotypeCsv {
    records: std::iter::Enumerate<csv::StringRecordsIntoIter<Box<dyn Read>>>,
    first_row: usize,
}

impl GenotypeCsv {
    fn new(records: csv::StringRecordsIntoIter<Box<dyn Read>>, headers: bool) -> Self {
        Self {
            records: records.into_iter().enumerate(),
            first_row: if headers { 2 } else { 1 },
        }
    }
}

impl Iterator for GenotypeCsv {
    type Item = Result<Genotype, CrossError>;

    fn next(&mut self) -> Option<Result<Genotype, CrossError>> {
        let (idx, record) = self.records.next()?;
        let row = idx + self.first_row;
        Some(match record {
            Ok(record) => {
                let fields: Vec<&str> = record.iter().collect();
                Genotype::from_fields(&fields).map_err(|e| match e {
                    CrossError::MalformedGenotype { field, reason } => {
                        CrossError::MalformedGenotype {
                            field: format!("row {}: {}", row, field),
                            reason,
                        }
                    }
                    other => other,
                })
            }
            Err(e) => Err(e.into()),
        })
    }
}

pub struct GenotypeCsvBuilder {
    headers: bool,
    delimiter: u8,
}

impl GenotypeCsvBuilder {
    /// Construct a new Csv builder
    pub fn new() -> Self {
        Self {
            headers: true,
            delimiter: b',',
        }
    }

    pub fn headers(&mut self, headers: bool) -> &mut Self {
        self.headers = headers;
        self
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn from_reader(&self, reader: Box<dyn Read>) -> GenotypeCsv {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(self.headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        GenotypeCsv::new(rdr.into_records(), self.headers)
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<GenotypeCsv, CrossError> {
        Ok(self.from_reader(Box::new(File::open(path)?)))
    }
}

impl Default for GenotypeCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::error::Error;

    #[test]
    fn test_csv_with_header() -> Result<(), Box<dyn Error>> {
        let parents = GenotypeCsvBuilder::new()
            .from_reader(Box::new("sex,A,B,C\nm, Aa ,Bb,Cc\nF,aa,bB,CC".as_bytes()))
            .collect::<Result<Vec<Genotype>, CrossError>>()?;
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[1].sex(), Sex::Female);
        assert_eq!(parents[1].to_string(), "f,aa,Bb,CC");
        Ok(())
    }

    #[test]
    fn test_csv_without_header_and_tabs() -> Result<(), Box<dyn Error>> {
        let targets: Targets = GenotypeCsvBuilder::new()
            .headers(false)
            .delimiter(b'\t')
            .from_reader(Box::new("m\tAA\tBB\tCC\nf\taa\tbb\tcc".as_bytes()))
            .collect::<Result<Targets, CrossError>>()?;
        assert_eq!(targets.len(), 2);
        Ok(())
    }

    #[test]
    fn test_csv_reports_bad_row() {
        let err = GenotypeCsvBuilder::new()
            .from_reader(Box::new("sex,A,B,C\nm,Aa,Bb,Cc\nm,Ax,Bb,Cc".as_bytes()))
            .collect::<Result<Vec<Genotype>, CrossError>>()
            .unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match GenotypeCsvBuilder::new().from_path("/nonexistent/parents.csv") {
            Err(CrossError::Io(_)) => {}
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("opened a missing file"),
        }
    }
}
