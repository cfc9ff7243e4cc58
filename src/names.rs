//! Display names for customers.
//!
//! The cinema only needs "give me a name"; where names come from is pluggable.
//! Names may repeat, visitors are told apart by their [`VisitorId`](crate::model::VisitorId).

use crate::config::ConfigError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

pub trait NameSource: Send {
    fn next_name(&mut self) -> String;
}

const BUILT_IN: &[&str] = &[
    "Ada", "Bruno", "Chloé", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Inès", "Jonas",
    "Keiko", "Lucas", "Maya", "Noah", "Olga", "Pablo", "Quentin", "Rosa", "Sami", "Téa",
];

/// Picks names at random from a list.
pub struct NameBook {
    names: Vec<String>,
    rng: StdRng,
}

impl NameBook {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same picks on every run.
    pub fn seeded(names: Vec<String>, seed: u64) -> Self {
        Self {
            names,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn built_in() -> Self {
        Self::new(BUILT_IN.iter().map(|n| n.to_string()).collect())
    }

    /// Reads a CSV file and keeps the first column of every non-empty line.
    pub fn from_csv(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::NamesFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let names = parse_first_column(&contents);
        if names.is_empty() {
            return Err(ConfigError::NamesFile {
                path: path.display().to_string(),
                reason: "no names found".to_string(),
            });
        }
        Ok(Self::new(names))
    }
}

fn parse_first_column(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl NameSource for NameBook {
    fn next_name(&mut self) -> String {
        self.names
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}

/// `Guest 1`, `Guest 2`, ... for runs that need predictable names.
#[derive(Debug, Default)]
pub struct GuestNumbers {
    issued: u32,
}

impl NameSource for GuestNumbers {
    fn next_name(&mut self) -> String {
        self.issued += 1;
        format!("Guest {}", self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_is_kept() {
        let names = parse_first_column("Ada,F,1815\n\nBruno,M\n  Chloé  \n,orphan\n");
        assert_eq!(names, vec!["Ada", "Bruno", "Chloé"]);
    }

    #[test]
    fn test_book_only_returns_listed_names() {
        let mut book = NameBook::seeded(vec!["Ada".into(), "Bruno".into()], 7);
        for _ in 0..20 {
            let name = book.next_name();
            assert!(name == "Ada" || name == "Bruno", "{name}");
        }
    }

    #[test]
    fn test_empty_book_still_names_people() {
        let mut book = NameBook::new(Vec::new());
        assert_eq!(book.next_name(), "Anonymous");
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = NameBook::from_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ConfigError::NamesFile { .. })));
    }

    #[test]
    fn test_guest_numbers_count_up() {
        let mut guests = GuestNumbers::default();
        assert_eq!(guests.next_name(), "Guest 1");
        assert_eq!(guests.next_name(), "Guest 2");
    }
}
