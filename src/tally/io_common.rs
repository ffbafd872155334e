use lazy_static::lazy_static;
use regex::Regex;
use std::fs;

use crate::tally::*;

lazy_static! {
    /// A standing pairing: two names joined by " + ", nothing else on the line.
    pub static ref PAIRING_RX: Regex = Regex::new(r"^(\w+) \+ (\w+)$").unwrap();
}

pub fn read_file(path: &str) -> DataResult<String> {
    fs::read_to_string(path).context(OpeningFileSnafu { path })
}

/// The meaningful lines of a hand-maintained table file, with their 1-based
/// line numbers. Blank lines and `#` comments are skipped.
pub fn data_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

pub fn split_pairing(text: &str) -> Option<(&str, &str)> {
    PAIRING_RX.captures(text).map(|caps| {
        let a = caps.get(1).map_or("", |m| m.as_str());
        let b = caps.get(2).map_or("", |m| m.as_str());
        (a, b)
    })
}

pub fn pairing_label(first: &str, second: &str) -> String {
    format!("{} + {}", first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_lines_skip_comments_and_blanks() {
        let content = "# the pairings\n\nAlice + Bob\n  \n# done\nCarol + Dan\n";
        assert_eq!(data_lines(content), vec![(3, "Alice + Bob"), (6, "Carol + Dan")]);
    }

    #[test]
    fn data_lines_keep_original_numbering() {
        let content = "\n\n\nAlice + Bob";
        assert_eq!(data_lines(content), vec![(4, "Alice + Bob")]);
    }

    #[test]
    fn pairings_are_two_names_joined_by_plus() {
        assert_eq!(split_pairing("Alice + Bob"), Some(("Alice", "Bob")));
        assert_eq!(split_pairing("alice_2 + bob3"), Some(("alice_2", "bob3")));
        assert_eq!(split_pairing("Alice"), None);
        assert_eq!(split_pairing("Alice+Bob"), None);
        assert_eq!(split_pairing("Alice + Bob + Carol"), None);
        assert_eq!(split_pairing("Alice & Bob"), None);
        assert_eq!(split_pairing(" Alice + Bob"), None);
    }

    #[test]
    fn labels_round_trip_through_the_splitter() {
        let label = pairing_label("Alice", "Bob");
        assert_eq!(split_pairing(&label), Some(("Alice", "Bob")));
    }
}
