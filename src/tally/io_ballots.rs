use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::Read;

use crate::tally::io_common::{pairing_label, split_pairing};
use crate::tally::io_pairings::SelectionTable;
use crate::tally::*;

lazy_static! {
    /// A vote column of the form exported by the survey tool, with the
    /// candidate between brackets. The export prefixes the bracket part
    /// with the question text, so the pattern is not anchored.
    static ref VOTE_COLUMN_RX: Regex = Regex::new(r"Your Vote \[([^\]]+)\]").unwrap();
    /// A candidate is either an individual or a pairing.
    static ref CANDIDATE_RX: Regex = Regex::new(r"^\w+( \+ \w+)?$").unwrap();
    /// Ranks come in free-form cells such as "1", "2nd" or "3rd Choice".
    static ref RANK_RX: Regex = Regex::new(r"^(\d+)").unwrap();
}

/// A column of the ballot sheet that carries votes for one candidate.
#[derive(Debug)]
pub struct VoteColumn {
    pub index: usize,
    pub candidate: String,
}

/// The raw content of a ballot export: the vote columns found in the
/// header, and each data row with its 1-based line number.
#[derive(Debug)]
pub struct BallotFile {
    pub columns: Vec<VoteColumn>,
    pub rows: Vec<(usize, Vec<String>)>,
}

pub fn read_ballot_file(path: &str) -> BDataResult<BallotFile> {
    let file = fs::File::open(path).context(OpeningFileSnafu { path })?;
    let ballot_file = parse_ballot_export(file)?;
    info!(
        "read_ballot_file: {:?} vote columns and {:?} ballots in {:?}",
        ballot_file.columns.len(),
        ballot_file.rows.len(),
        path
    );
    Ok(ballot_file)
}

/// Reads a tab-separated ballot export. Rows may be shorter or longer than
/// the header, the survey tool pads them inconsistently.
pub fn parse_ballot_export<R: Read>(input: R) -> DataResult<BallotFile> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input);
    let headers = rdr
        .headers()
        .context(BallotLineParseSnafu { lineno: 1usize })?
        .clone();
    ensure!(!headers.is_empty(), EmptyBallotFileSnafu);
    let columns = vote_columns(&headers);
    ensure!(!columns.is_empty(), NoVoteColumnsSnafu);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        let lineno = rdr.position().line() as usize;
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let cells = record.iter().map(|cell| cell.to_string()).collect();
                rows.push((lineno, cells));
            }
            Err(source) => return Err(DataError::BallotLineParse { source, lineno }),
        }
    }
    Ok(BallotFile { columns, rows })
}

fn vote_columns(headers: &csv::StringRecord) -> Vec<VoteColumn> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            VOTE_COLUMN_RX.captures(header).map(|caps| VoteColumn {
                index,
                candidate: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            })
        })
        .collect()
}

/// Checks that the sheet asks a coherent set of questions: every candidate
/// is well formed, and for any two individuals on the sheet exactly one
/// column asks about the two of them as a pairing, in one orientation or
/// the other. Pair columns not backed by two individual columns are
/// rejected as well.
pub fn validate_columns(columns: &[VoteColumn]) -> DataResult<()> {
    for col in columns {
        ensure!(
            CANDIDATE_RX.is_match(&col.candidate),
            InvalidCandidateFormatSnafu {
                candidate: &col.candidate
            }
        );
    }
    let mut individuals: Vec<&str> = Vec::new();
    let mut remaining: Vec<&str> = Vec::new();
    for col in columns {
        let candidate = col.candidate.as_str();
        if split_pairing(candidate).is_some() {
            if !remaining.contains(&candidate) {
                remaining.push(candidate);
            }
        } else if !individuals.contains(&candidate) {
            individuals.push(candidate);
        }
    }
    for (idx, first) in individuals.iter().enumerate() {
        for second in &individuals[idx + 1..] {
            let pair_a = pairing_label(first, second);
            let pair_b = pairing_label(second, first);
            let has_a = remaining.contains(&pair_a.as_str());
            let has_b = remaining.contains(&pair_b.as_str());
            ensure!(
                !(has_a && has_b),
                DuplicatedCandidatePairSnafu {
                    first: pair_a.as_str(),
                    second: pair_b.as_str(),
                }
            );
            ensure!(has_a || has_b, MissingCandidatePairSnafu { pair: pair_a });
            remaining.retain(|pair| *pair != pair_a && *pair != pair_b);
        }
    }
    ensure!(
        remaining.is_empty(),
        ExcessCandidatePairsSnafu {
            pairs: remaining.join(", ")
        }
    );
    Ok(())
}

/// Turns the raw rows into ranked ballots over standing pairings.
///
/// Within a row, votes are ordered by ascending rank. Votes with the same
/// rank keep the column order of the sheet. A vote for an individual counts
/// for the pairing that individual stands in. When two votes of one row end
/// up on the same pairing, only the best-ranked one is kept.
pub fn normalize_ballots(file: &BallotFile, table: &SelectionTable) -> DataResult<Vec<Ballot>> {
    let mut ballots = Vec::new();
    for (lineno, cells) in &file.rows {
        let mut ranked: Vec<(u32, String)> = Vec::new();
        for col in &file.columns {
            let cell = cells.get(col.index).map(|c| c.trim()).unwrap_or("");
            let rank = match parse_rank(cell, *lineno, &col.candidate)? {
                Some(rank) => rank,
                None => continue,
            };
            match column_pairing(&col.candidate, table) {
                Some(label) => ranked.push((rank, label.to_string())),
                None => {
                    warn!(
                        "normalize_ballots: line {:?}: vote for {:?} matches no standing pairing, skipped",
                        lineno, col.candidate
                    );
                }
            }
        }
        ranked.sort_by_key(|(rank, _)| *rank);
        let mut choices: Vec<String> = Vec::new();
        for (_, label) in ranked {
            if !choices.contains(&label) {
                choices.push(label);
            }
        }
        ballots.push(Ballot::new(choices));
    }
    Ok(ballots)
}

fn column_pairing<'a>(candidate: &str, table: &'a SelectionTable) -> Option<&'a str> {
    match split_pairing(candidate) {
        Some((a, b)) => table.resolve_pairing(a, b),
        None => table.pairing_of(candidate),
    }
}

fn parse_rank(cell: &str, lineno: usize, candidate: &str) -> DataResult<Option<u32>> {
    if cell.is_empty() {
        return Ok(None);
    }
    let caps = RANK_RX.captures(cell).context(UnreadableRankSnafu {
        lineno,
        cell,
        candidate,
    })?;
    let digits = caps.get(1).map_or("", |m| m.as_str());
    let rank = digits.parse::<u32>().ok().context(UnreadableRankSnafu {
        lineno,
        cell,
        candidate,
    })?;
    Ok(Some(rank))
}
