mod config;
pub mod manual;
pub mod quick_start;

use log::{debug, info};

use std::collections::HashMap;

pub use crate::config::*;

/// Runs the instant-runoff tally over the given ballots.
///
/// Each round counts the first-place votes, eliminates the candidate holding
/// the fewest of them, and strips that candidate from every ballot before the
/// next count. When several candidates share the lowest count, the
/// tie-breaking table decides which of them goes. The rounds stop as soon as
/// a single candidate holds all the remaining first-place votes.
///
/// Arguments:
/// * `ballots` the ballots to process. They are not modified: the pruning
///   between rounds happens on an internal copy.
/// * `tie_breaks` the tie-breaking table, one entry per ordered pair of
///   candidates. It is only consulted for candidates that actually tie for
///   last place, so it does not have to be complete or even transitive.
///
/// The result carries the winner together with the elimination trace, one
/// entry per round in the order the rounds happened.
pub fn run_tally(ballots: &[Ballot], tie_breaks: &[TieBreak]) -> Result<TallyResult, TallyError> {
    if ballots.is_empty() {
        return Err(TallyError::NoBallots);
    }
    info!(
        "run_tally: processing {:?} ballots with {:?} tie-breaking entries",
        ballots.len(),
        tie_breaks.len()
    );

    let mut remaining: Vec<Ballot> = ballots.to_vec();
    let mut eliminations: Vec<Elimination> = Vec::new();

    loop {
        let round = eliminations.len() + 1;
        let tally = count_first_choices(&remaining);
        debug!("run_tally: round {:?}: first-place tally: {:?}", round, tally);

        if tally.is_empty() {
            return Err(TallyError::NoFirstChoices);
        }
        if let [(winner, _)] = *tally.as_slice() {
            info!("run_tally: round {:?}: single candidate left: {:?}", round, winner);
            return Ok(TallyResult {
                winner: winner.to_string(),
                eliminations,
            });
        }

        let (candidate, first_place_votes) = select_last_place(&tally, tie_breaks)?;
        info!(
            "run_tally: round {:?}: eliminating {:?} with {:?} first-place votes",
            round, candidate, first_place_votes
        );
        for ballot in remaining.iter_mut() {
            ballot.choices.retain(|c| *c != candidate);
        }
        eliminations.push(Elimination {
            candidate,
            first_place_votes,
        });
    }
}

/// Counts the first-place votes per candidate, in the order candidates are
/// first encountered over the ballots.
///
/// Candidates without any first-place vote do not appear at all. The
/// encounter order is what makes a tied round deterministic for a given
/// ballot order.
fn count_first_choices(ballots: &[Ballot]) -> Vec<(&str, u64)> {
    let mut tally: Vec<(&str, u64)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();
    for ballot in ballots {
        if let Some(name) = ballot.first_choice() {
            match position.get(name) {
                Some(idx) => tally[*idx].1 += 1,
                None => {
                    position.insert(name, tally.len());
                    tally.push((name, 1));
                }
            }
        }
    }
    tally
}

/// Picks the candidate to eliminate this round, with its vote count.
///
/// With several candidates at the lowest count, the first of them (in tally
/// order) is the provisional pick and every further one challenges it in
/// turn: a challenger the table ranks below the provisional pick replaces
/// it, a challenger ranked above it leaves it in place. The table is not
/// checked for transitivity across the whole tied set, so with an
/// intransitive table the outcome depends on the walk order.
fn select_last_place(
    tally: &[(&str, u64)],
    tie_breaks: &[TieBreak],
) -> Result<(String, u64), TallyError> {
    debug_assert!(tally.len() >= 2, "a contested round needs two candidates");
    let mut ordered: Vec<(&str, u64)> = tally.to_vec();
    // Stable, so candidates with equal counts keep their encounter order.
    ordered.sort_by_key(|(_, count)| *count);

    let lowest = ordered[0].1;
    let tied: Vec<&str> = ordered
        .iter()
        .take_while(|(_, count)| *count == lowest)
        .map(|(name, _)| *name)
        .collect();
    debug!(
        "select_last_place: {:?} candidates at {:?} votes: {:?}",
        tied.len(),
        lowest,
        tied
    );

    let mut eliminated = tied[0];
    for &challenger in &tied[1..] {
        let wins = tie_breaks.contains(&TieBreak::preferred_over(challenger, eliminated));
        let loses = tie_breaks.contains(&TieBreak::defeated_by(challenger, eliminated));
        match (wins, loses) {
            (true, true) => {
                return Err(TallyError::ContradictoryTieBreak(
                    challenger.to_string(),
                    eliminated.to_string(),
                ));
            }
            (false, false) => {
                return Err(TallyError::MissingTieBreak(
                    challenger.to_string(),
                    eliminated.to_string(),
                ));
            }
            // The challenger outranks the provisional pick, which stays.
            (true, false) => {}
            // The challenger ranks below the provisional pick and replaces it.
            (false, true) => eliminated = challenger,
        }
    }
    Ok((eliminated.to_string(), lowest))
}
