use serde::Serialize;
use serde_json::json;
use serde_json::Value as JSValue;
use std::fs;
use text_diff::print_diff;

use crate::tally::io_common::read_file;
use crate::tally::*;

#[derive(Debug, Serialize)]
struct Summary {
    config: SummaryConfig,
    winner: String,
    rounds: Vec<SummaryRound>,
}

#[derive(Debug, Serialize)]
struct SummaryConfig {
    contest: String,
}

#[derive(Debug, Serialize)]
struct SummaryRound {
    round: usize,
    eliminated: String,
    #[serde(rename = "firstPlaceVotes")]
    first_place_votes: u64,
}

/// The round-by-round report, in the shape the committee reads out at the
/// end of the assembly.
pub fn render_text_report(result: &TallyResult) -> String {
    let mut out = String::from("Instant runoff:\n");
    for (idx, elimination) in result.eliminations.iter().enumerate() {
        out.push_str(&format!(
            "\tRound {}: Eliminated {} (had {} first-place votes)\n",
            idx + 1,
            elimination.candidate,
            elimination.first_place_votes
        ));
    }
    out.push_str(&format!("\nWinner is: {}\n", result.winner));
    out
}

pub fn build_summary_js(contest: &str, result: &TallyResult) -> JSValue {
    let summary = Summary {
        config: SummaryConfig {
            contest: contest.to_string(),
        },
        winner: result.winner.clone(),
        rounds: result
            .eliminations
            .iter()
            .enumerate()
            .map(|(idx, elimination)| SummaryRound {
                round: idx + 1,
                eliminated: elimination.candidate.clone(),
                first_place_votes: elimination.first_place_votes,
            })
            .collect(),
    };
    json!(summary)
}

/// Writes to the given path, with the word `stdout` selecting standard
/// output instead of a file.
pub fn write_output(path: &str, content: &str) -> DataResult<()> {
    if path == "stdout" {
        print!("{}", content);
        return Ok(());
    }
    fs::write(path, content).context(OpeningFileSnafu { path })?;
    info!("write_output: written to {:?}", path);
    Ok(())
}

pub fn write_summary(path: &str, summary: &JSValue) -> DataResult<()> {
    let pretty = serde_json::to_string_pretty(summary).context(ParsingJsonSnafu)?;
    write_output(path, &(pretty + "\n"))
}

pub fn read_summary(path: &str) -> DataResult<JSValue> {
    let content = read_file(path)?;
    serde_json::from_str(&content).context(ParsingJsonSnafu)
}

/// Compares the computed summary against a summary written by an earlier
/// run. On a mismatch, the differences are printed and an error returned.
pub fn check_reference(path: &str, summary: &JSValue) -> DataResult<()> {
    let reference = read_summary(path)?;
    if reference == *summary {
        info!("check_reference: summary matches {:?}", path);
        return Ok(());
    }
    let expected = serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu)?;
    let current = serde_json::to_string_pretty(summary).context(ParsingJsonSnafu)?;
    print_diff(&expected, &current, "\n");
    ReferenceMismatchSnafu { path }.fail()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> TallyResult {
        let trace = [
            ("D + E", 1),
            ("C + E", 1),
            ("C + D", 1),
            ("B + C", 1),
            ("A + E", 1),
            ("B + E", 1),
            ("A + B", 2),
            ("A + C", 1),
            ("B + D", 1),
        ];
        TallyResult {
            winner: "A + D".to_string(),
            eliminations: trace
                .iter()
                .map(|(candidate, first_place_votes)| Elimination {
                    candidate: candidate.to_string(),
                    first_place_votes: *first_place_votes,
                })
                .collect(),
        }
    }

    #[test]
    fn the_report_reads_like_the_committee_expects() {
        let expected = "Instant runoff:\n\
             \tRound 1: Eliminated D + E (had 1 first-place votes)\n\
             \tRound 2: Eliminated C + E (had 1 first-place votes)\n\
             \tRound 3: Eliminated C + D (had 1 first-place votes)\n\
             \tRound 4: Eliminated B + C (had 1 first-place votes)\n\
             \tRound 5: Eliminated A + E (had 1 first-place votes)\n\
             \tRound 6: Eliminated B + E (had 1 first-place votes)\n\
             \tRound 7: Eliminated A + B (had 2 first-place votes)\n\
             \tRound 8: Eliminated A + C (had 1 first-place votes)\n\
             \tRound 9: Eliminated B + D (had 1 first-place votes)\n\
             \nWinner is: A + D\n";
        assert_eq!(render_text_report(&sample_result()), expected);
    }

    #[test]
    fn an_unopposed_winner_still_gets_a_report() {
        let result = TallyResult {
            winner: "A + D".to_string(),
            eliminations: vec![],
        };
        assert_eq!(
            render_text_report(&result),
            "Instant runoff:\n\nWinner is: A + D\n"
        );
    }

    #[test]
    fn the_summary_carries_the_contest_and_the_rounds() {
        let result = TallyResult {
            winner: "A + D".to_string(),
            eliminations: vec![Elimination {
                candidate: "B + C".to_string(),
                first_place_votes: 2,
            }],
        };
        let summary = build_summary_js("Co-presidents", &result);
        assert_eq!(
            summary,
            json!({
                "config": { "contest": "Co-presidents" },
                "winner": "A + D",
                "rounds": [
                    { "round": 1, "eliminated": "B + C", "firstPlaceVotes": 2 },
                ],
            })
        );
    }

    #[test]
    fn summaries_compare_by_value_not_by_spelling() {
        let reference: JSValue = serde_json::from_str(
            r#"{ "winner": "A + D", "rounds": [], "config": { "contest": "Co-presidents" } }"#,
        )
        .unwrap();
        let result = TallyResult {
            winner: "A + D".to_string(),
            eliminations: vec![],
        };
        assert_eq!(reference, build_summary_js("Co-presidents", &result));
    }

    #[test]
    fn output_routes_to_the_named_file() {
        let path = std::env::temp_dir().join("pairtally_generated_table.txt");
        let path = path.to_str().unwrap();
        write_output(path, "A + B > C + D\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "A + B > C + D\n");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn the_stdout_path_is_not_treated_as_a_file() {
        write_output("stdout", "A + B > C + D\n").unwrap();
        assert!(!std::path::Path::new("stdout").exists());
    }

    #[test]
    fn summaries_round_trip_through_a_file() {
        let path = std::env::temp_dir().join("pairtally_summary_roundtrip.json");
        let path = path.to_str().unwrap();
        let summary = build_summary_js("Co-presidents", &sample_result());
        write_summary(path, &summary).unwrap();
        assert_eq!(read_summary(path).unwrap(), summary);
        assert!(check_reference(path, &summary).is_ok());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn a_differing_reference_is_a_mismatch_error() {
        let path = std::env::temp_dir().join("pairtally_stale_reference.json");
        let path = path.to_str().unwrap();
        write_summary(path, &build_summary_js("Co-presidents", &sample_result())).unwrap();
        let changed = TallyResult {
            winner: "B + D".to_string(),
            eliminations: vec![],
        };
        let err = check_reference(path, &build_summary_js("Co-presidents", &changed)).unwrap_err();
        assert!(matches!(err, DataError::ReferenceMismatch { .. }));
        let _ = fs::remove_file(path);
    }
}
