use lazy_static::lazy_static;
use regex::Regex;

use crate::tally::io_common::{data_lines, pairing_label, read_file};
use crate::tally::io_pairings::SelectionTable;
use crate::tally::*;

lazy_static! {
    static ref VERDICT_RX: Regex =
        Regex::new(r"^(\w+) \+ (\w+) > (\w+) \+ (\w+)$").unwrap();
}

pub fn read_tie_breaks_file(path: &str, table: &SelectionTable) -> BDataResult<Vec<TieBreak>> {
    let content = read_file(path)?;
    let verdicts = parse_tie_breaks(&content, table)?;
    info!(
        "read_tie_breaks_file: {:?} verdicts in {:?}",
        verdicts.len(),
        path
    );
    Ok(verdicts)
}

pub fn parse_tie_breaks(content: &str, table: &SelectionTable) -> DataResult<Vec<TieBreak>> {
    let mut verdicts: Vec<TieBreak> = Vec::new();
    for (lineno, line) in data_lines(content) {
        let caps = VERDICT_RX
            .captures(line)
            .context(InvalidTieBreakLineSnafu { lineno, line })?;
        let cell = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());
        let winner = resolve_side(table, cell(1), cell(2));
        let loser = resolve_side(table, cell(3), cell(4));
        ensure!(winner != loser, SelfTieBreakSnafu { pairing: winner });
        let verdict = TieBreak::preferred_over(&winner, &loser);
        if verdicts.contains(&verdict) {
            debug!(
                "parse_tie_breaks: line {:?} repeats the verdict {:?} > {:?}",
                lineno, winner, loser
            );
            continue;
        }
        let reversed = TieBreak::preferred_over(&loser, &winner);
        ensure!(
            !verdicts.contains(&reversed),
            ContradictoryTieBreakersSnafu { winner, loser }
        );
        verdicts.push(verdict);
    }
    Ok(verdicts)
}

/// One side of a verdict, as the canonical label when these two people form
/// a standing pairing. A side that matches no standing pairing keeps its
/// literal spelling. It can never tie with anything, so the verdict is
/// harmless, and the table may well be reused across elections with
/// different candidates.
fn resolve_side(table: &SelectionTable, first: &str, second: &str) -> String {
    match table.resolve_pairing(first, second) {
        Some(label) => label.to_string(),
        None => pairing_label(first, second),
    }
}
