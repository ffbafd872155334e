use std::collections::HashMap;

use crate::tally::io_common::{data_lines, pairing_label, read_file, split_pairing};
use crate::tally::*;

/// The standing pairings of the election.
///
/// Ballot columns and tie-breaker sides are written by hand and may name a
/// pairing with its partners in either order. The table resolves both
/// orders to the single label declared in the pairings file, so that the
/// whole tally speaks about one spelling of each pairing.
///
/// One person may stand in several pairings. A vote for that person alone
/// does not name a candidate and cannot be counted.
#[derive(Debug)]
pub struct SelectionTable {
    /// Pairing labels in declaration order, each in its declared orientation.
    pub pairings: Vec<String>,
    by_pair: HashMap<(String, String), usize>,
    by_individual: HashMap<String, Vec<usize>>,
}

fn pair_key(first: &str, second: &str) -> (String, String) {
    if first <= second {
        (first.to_string(), second.to_string())
    } else {
        (second.to_string(), first.to_string())
    }
}

impl SelectionTable {
    /// The declared label for an unordered pair of names, if these two
    /// people stand together.
    pub fn resolve_pairing(&self, first: &str, second: &str) -> Option<&str> {
        if first == second {
            return None;
        }
        self.by_pair
            .get(&pair_key(first, second))
            .map(|idx| self.pairings[*idx].as_str())
    }

    /// The standing pairing an individual stands in, when there is exactly
    /// one. `None` when the name is unknown or stands in several pairings.
    pub fn pairing_of(&self, name: &str) -> Option<&str> {
        match self.by_individual.get(name).map(Vec::as_slice) {
            Some([idx]) => Some(self.pairings[*idx].as_str()),
            _ => None,
        }
    }
}

pub fn read_pairings_file(path: &str) -> BDataResult<SelectionTable> {
    let content = read_file(path)?;
    let table = parse_pairings(&content)?;
    info!(
        "read_pairings_file: {:?} standing pairings in {:?}",
        table.pairings.len(),
        path
    );
    Ok(table)
}

pub fn parse_pairings(content: &str) -> DataResult<SelectionTable> {
    let mut table = SelectionTable {
        pairings: Vec::new(),
        by_pair: HashMap::new(),
        by_individual: HashMap::new(),
    };
    for (lineno, line) in data_lines(content) {
        let (first, second) =
            split_pairing(line).context(InvalidPairingLineSnafu { lineno, line })?;
        if let Some(existing) = table.resolve_pairing(first, second) {
            return DuplicatePairingSnafu { pairing: existing }.fail();
        }
        let idx = table.pairings.len();
        table.by_pair.insert(pair_key(first, second), idx);
        for name in [first, second] {
            table
                .by_individual
                .entry(name.to_string())
                .or_default()
                .push(idx);
        }
        table.pairings.push(pairing_label(first, second));
    }
    if table.pairings.is_empty() {
        warn!("parse_pairings: the file declares no standing pairings, every vote will be dropped");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(content: &str) -> SelectionTable {
        parse_pairings(content).unwrap()
    }

    #[test]
    fn pairings_keep_their_declared_orientation() {
        let table = table("Alice + Bob\nCarol + Dan\n");
        assert_eq!(table.pairings, vec!["Alice + Bob", "Carol + Dan"]);
    }

    #[test]
    fn both_partner_orders_resolve_to_the_declared_label() {
        let table = table("Alice + Bob\n");
        assert_eq!(table.resolve_pairing("Alice", "Bob"), Some("Alice + Bob"));
        assert_eq!(table.resolve_pairing("Bob", "Alice"), Some("Alice + Bob"));
    }

    #[test]
    fn partners_from_different_pairings_do_not_resolve() {
        let table = table("Alice + Bob\nCarol + Dan\n");
        assert_eq!(table.resolve_pairing("Alice", "Carol"), None);
        assert_eq!(table.resolve_pairing("Alice", "Eve"), None);
    }

    #[test]
    fn a_name_does_not_pair_with_itself() {
        let table = table("Alice + Bob\n");
        assert_eq!(table.resolve_pairing("Alice", "Alice"), None);
    }

    #[test]
    fn one_person_may_stand_in_several_pairings() {
        let table = table("Alice + Bob\nAlice + Carol\nBob + Carol\n");
        assert_eq!(table.resolve_pairing("Alice", "Bob"), Some("Alice + Bob"));
        assert_eq!(table.resolve_pairing("Carol", "Alice"), Some("Alice + Carol"));
        assert_eq!(table.resolve_pairing("Bob", "Carol"), Some("Bob + Carol"));
    }

    #[test]
    fn individuals_map_to_their_standing_pairing() {
        let table = table("Alice + Bob\nCarol + Dan\n");
        assert_eq!(table.pairing_of("Carol"), Some("Carol + Dan"));
        assert_eq!(table.pairing_of("Dan"), Some("Carol + Dan"));
        assert_eq!(table.pairing_of("Eve"), None);
    }

    #[test]
    fn individuals_standing_in_several_pairings_do_not_map() {
        let table = table("Alice + Bob\nAlice + Carol\n");
        assert_eq!(table.pairing_of("Alice"), None);
        assert_eq!(table.pairing_of("Bob"), Some("Alice + Bob"));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let table = table("# election of 2024\n\nAlice + Bob\n");
        assert_eq!(table.pairings, vec!["Alice + Bob"]);
    }

    #[test]
    fn an_empty_table_is_allowed() {
        let table = table("# nobody stands this year\n");
        assert!(table.pairings.is_empty());
    }

    #[test]
    fn redeclaring_a_pairing_is_rejected() {
        let err = parse_pairings("Alice + Bob\nAlice + Bob\n").unwrap_err();
        assert!(matches!(err, DataError::DuplicatePairing { .. }));
    }

    #[test]
    fn redeclaring_a_pairing_reversed_is_rejected() {
        let err = parse_pairings("Alice + Bob\nBob + Alice\n").unwrap_err();
        match err {
            DataError::DuplicatePairing { pairing } => assert_eq!(pairing, "Alice + Bob"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_lines_are_reported_with_their_number() {
        let err = parse_pairings("Alice + Bob\nAlice &\n").unwrap_err();
        match err {
            DataError::InvalidPairingLine { lineno, line } => {
                assert_eq!(lineno, 2);
                assert_eq!(line, "Alice &");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
