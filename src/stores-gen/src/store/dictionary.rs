use std::path::Path;

use calamine::open_workbook;
use calamine::Data;
use calamine::Reader;
use calamine::Xlsx;
use calamine::XlsxError;
use rand::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::error::StoresGenError;

/// Fixed lookup configuration. The workbook location and the sheet/column
/// names are not user-facing settings.
pub const LOOKUP_WORKBOOK_PATH: &str = "lookup/LookupFile.xlsx";
pub const LOOKUP_SHEET: &str = "Store Name Data";
pub const ADJECTIVE_COLUMN: &str = "Adjectives";
pub const NOUN_COLUMN: &str = "Nouns";

/// Adjective/noun lookup lists used to build store names.
/// Loaded once, read-only for the duration of the run.
#[derive(Debug, Clone)]
pub struct NameDictionary {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl NameDictionary {
    /// Both lists must be non-empty, otherwise sampling has nothing to draw.
    pub fn new(adjectives: Vec<String>, nouns: Vec<String>) -> Result<Self> {
        if adjectives.is_empty() {
            return Err(StoresGenError::EmptyColumn(ADJECTIVE_COLUMN.to_string()));
        }
        if nouns.is_empty() {
            return Err(StoresGenError::EmptyColumn(NOUN_COLUMN.to_string()));
        }

        Ok(Self { adjectives, nouns })
    }

    pub fn try_new_from_workbook<P: AsRef<Path>>(
        path: P,
        sheet: &str,
        adjective_col: &str,
        noun_col: &str,
    ) -> Result<Self> {
        if !path.as_ref().try_exists()? {
            return Err(StoresGenError::FileNotFound(format!(
                "lookup workbook {:?} doesn't exist",
                path.as_ref()
            )));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let range = workbook.worksheet_range(sheet).map_err(|err| match err {
            XlsxError::WorksheetNotFound(name) => StoresGenError::SheetNotFound(name),
            other => StoresGenError::WorkbookError(other),
        })?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let dict = Self::from_rows(&rows, adjective_col, noun_col)?;
        info!(
            "loaded {} adjective(s), {} noun(s)",
            dict.adjectives.len(),
            dict.nouns.len()
        );

        Ok(dict)
    }

    /// Builds the dictionary from raw sheet rows. The first row is the
    /// header; cells below each named header are collected, skipping blanks.
    pub fn from_rows(rows: &[Vec<String>], adjective_col: &str, noun_col: &str) -> Result<Self> {
        let header = rows
            .first()
            .ok_or_else(|| StoresGenError::ColumnNotFound(adjective_col.to_string()))?;

        let adjective_idx = find_column(header, adjective_col)?;
        let noun_idx = find_column(header, noun_col)?;

        let column = |idx: usize| {
            rows[1..]
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
        };

        let adjectives = column(adjective_idx);
        if adjectives.is_empty() {
            return Err(StoresGenError::EmptyColumn(adjective_col.to_string()));
        }
        let nouns = column(noun_idx);
        if nouns.is_empty() {
            return Err(StoresGenError::EmptyColumn(noun_col.to_string()));
        }

        Ok(Self { adjectives, nouns })
    }

    pub fn sample_adjective<R: Rng>(&self, rng: &mut R) -> &str {
        self.adjectives.choose(rng).unwrap()
    }

    pub fn sample_noun<R: Rng>(&self, rng: &mut R) -> &str {
        self.nouns.choose(rng).unwrap()
    }

    /// Uniform independent draws with replacement.
    pub fn sample_store_name<R: Rng>(&self, rng: &mut R) -> String {
        format!(
            "The {} {}",
            self.sample_adjective(rng),
            self.sample_noun(rng)
        )
    }
}

fn find_column(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell.trim() == name)
        .ok_or_else(|| StoresGenError::ColumnNotFound(name.to_string()))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::NameDictionary;
    use crate::error::StoresGenError;

    fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_from_rows() {
        let rows = rows(&[
            &["Adjectives", "Nouns"],
            &["Red", "Fox"],
            &["Blue", "Owl"],
            &["Green", ""],
        ]);

        let dict = NameDictionary::from_rows(&rows, "Adjectives", "Nouns").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let name = dict.sample_store_name(&mut rng);
            let mut words = name.split(' ');
            assert_eq!(words.next(), Some("The"));
            assert!(matches!(words.next(), Some("Red" | "Blue" | "Green")));
            assert!(matches!(words.next(), Some("Fox" | "Owl")));
            assert_eq!(words.next(), None);
        }
    }

    #[test]
    fn test_missing_column() {
        let rows = rows(&[&["Adjectives", "Colors"], &["Red", "Crimson"]]);

        let err = NameDictionary::from_rows(&rows, "Adjectives", "Nouns").unwrap_err();
        assert!(matches!(err, StoresGenError::ColumnNotFound(name) if name == "Nouns"));
    }

    #[test]
    fn test_empty_column() {
        let rows = rows(&[&["Adjectives", "Nouns"], &["", "Fox"]]);

        let err = NameDictionary::from_rows(&rows, "Adjectives", "Nouns").unwrap_err();
        assert!(matches!(err, StoresGenError::EmptyColumn(name) if name == "Adjectives"));
    }

    #[test]
    fn test_dictionary_is_debug() {
        let dict =
            NameDictionary::new(vec!["Red".to_string()], vec!["Fox".to_string()]).unwrap();

        let formatted = format!("{dict:?}");
        assert!(formatted.contains("Red"));
        assert!(formatted.contains("Fox"));
    }

    #[test]
    fn test_new_rejects_empty_lists() {
        let err = NameDictionary::new(vec![], vec!["Fox".to_string()]).unwrap_err();
        assert!(matches!(err, StoresGenError::EmptyColumn(_)));

        let err = NameDictionary::new(vec!["Red".to_string()], vec![]).unwrap_err();
        assert!(matches!(err, StoresGenError::EmptyColumn(_)));
    }
}
