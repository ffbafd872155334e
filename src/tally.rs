use log::{debug, info, warn};

use instant_runoff::*;
use snafu::{prelude::*, Snafu};

use crate::args::Args;

pub mod generate;
pub mod io_ballots;
pub mod io_common;
pub mod io_pairings;
pub mod io_tiebreaks;
pub mod report;

#[derive(Debug, Snafu)]
pub enum DataError {
    #[snafu(display("could not access {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("could not parse line {lineno} of the ballot file"))]
    BallotLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("the ballot file has no header row"))]
    EmptyBallotFile {},
    #[snafu(display("no vote columns found in the ballot header"))]
    NoVoteColumns {},
    #[snafu(display("Invalid candidate format: {candidate}"))]
    InvalidCandidateFormat { candidate: String },
    #[snafu(display("Candidate pair is duplicated ({first} and {second})"))]
    DuplicatedCandidatePair { first: String, second: String },
    #[snafu(display("Candidate pair does not appear ({pair})"))]
    MissingCandidatePair { pair: String },
    #[snafu(display("Excess candidate pairs ({pairs})"))]
    ExcessCandidatePairs { pairs: String },
    #[snafu(display("line {lineno}: cannot read a rank out of {cell:?} for {candidate}"))]
    UnreadableRank {
        lineno: usize,
        cell: String,
        candidate: String,
    },
    #[snafu(display("line {lineno}: invalid pairing: {line:?}"))]
    InvalidPairingLine { lineno: usize, line: String },
    #[snafu(display("pairing declared twice: {pairing}"))]
    DuplicatePairing { pairing: String },
    #[snafu(display("line {lineno}: invalid tie-breaker: {line:?}"))]
    InvalidTieBreakLine { lineno: usize, line: String },
    #[snafu(display("tie-breaker pits {pairing} against itself"))]
    SelfTieBreak { pairing: String },
    #[snafu(display("contradictory tie-breakers between {winner} and {loser}"))]
    ContradictoryTieBreakers { winner: String, loser: String },
    #[snafu(display("need at least two people to generate tie-breakers (got {count})"))]
    NotEnoughPeople { count: usize },
    #[snafu(display("the tie-breaker input ended before all questions were answered"))]
    GeneratorInputEnded {},
    #[snafu(display("could not exchange with the tie-breaker console"))]
    GeneratorIo { source: std::io::Error },
    #[snafu(display("missing required argument {flag}"))]
    MissingArgument { flag: String },
    #[snafu(display("the tally failed: {source}"))]
    Tally { source: TallyError },
    #[snafu(display("could not handle the summary as JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("the computed summary does not match the reference {path}"))]
    ReferenceMismatch { path: String },
}

type DataResult<T> = Result<T, DataError>;
type BDataResult<T> = Result<T, Box<DataError>>;

/// Runs a full election from the files given on the command line: loads the
/// standing pairings, the tie-breaking table and the ballot export, tallies
/// the election and prints the round-by-round report on stdout.
///
/// The JSON summary is written out when `--out` asks for it, and checked
/// against a previous run when `--reference` provides one.
pub fn run_election(args: &Args) -> BDataResult<TallyResult> {
    let ballots_path = args
        .ballots
        .as_deref()
        .context(MissingArgumentSnafu { flag: "--ballots" })?;
    let pairings_path = args
        .pairings
        .as_deref()
        .context(MissingArgumentSnafu { flag: "--pairings" })?;
    let tie_breaks_path = args.tie_breakers.as_deref().context(MissingArgumentSnafu {
        flag: "--tie-breakers",
    })?;

    let table = io_pairings::read_pairings_file(pairings_path)?;
    let tie_breaks = io_tiebreaks::read_tie_breaks_file(tie_breaks_path, &table)?;
    let ballot_file = io_ballots::read_ballot_file(ballots_path)?;
    io_ballots::validate_columns(&ballot_file.columns)?;
    let ballots = io_ballots::normalize_ballots(&ballot_file, &table)?;

    let result = run_tally(&ballots, &tie_breaks).context(TallySnafu {})?;
    info!(
        "run_election: winner: {:?} after {:?} rounds",
        result.winner,
        result.eliminations.len()
    );
    print!("{}", report::render_text_report(&result));

    let contest = args.contest_name.as_deref().unwrap_or("Co-presidents");
    let summary = report::build_summary_js(contest, &result);
    if let Some(out) = &args.out {
        report::write_summary(out, &summary)?;
    }
    if let Some(reference) = &args.reference {
        report::check_reference(reference, &summary)?;
    }

    Ok(result)
}

/// Runs the interactive tie-breaker generator for a comma-separated list of
/// people. The questions go to stderr; the resulting table goes to the
/// `--out` location when one is given, to stdout otherwise.
pub fn run_generator(people_arg: &str, out: Option<&str>) -> BDataResult<()> {
    let people: Vec<String> = people_arg
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if people.len() < 2 {
        return Err(Box::new(DataError::NotEnoughPeople {
            count: people.len(),
        }));
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();
    let verdicts = generate::generate_tie_breaks(&people, &mut input, &mut prompts)?;
    info!("run_generator: {:?} verdicts collected", verdicts.len());
    report::write_output(
        out.unwrap_or("stdout"),
        &generate::render_tie_breaks(&verdicts),
    )?;
    Ok(())
}
