use itertools::Itertools;
use std::io::{BufRead, Write};

use crate::tally::io_common::pairing_label;
use crate::tally::*;

/// All pairings the given people could form, in the order of the list.
pub fn pair_up(people: &[String]) -> Vec<String> {
    people
        .iter()
        .tuple_combinations()
        .map(|(a, b)| pairing_label(a, b))
        .collect()
}

/// Asks one question per matchup of two possible pairings and collects the
/// answers into a tie-breaking table. An answer other than `1` or `2` asks
/// the same question again.
pub fn generate_tie_breaks<R: BufRead, W: Write>(
    people: &[String],
    input: &mut R,
    prompts: &mut W,
) -> DataResult<Vec<TieBreak>> {
    let pairings = pair_up(people);
    let mut verdicts = Vec::new();
    for (first, second) in pairings.iter().tuple_combinations() {
        loop {
            writeln!(prompts, "Which is better: [1] {} or [2] {}", first, second)
                .context(GeneratorIoSnafu)?;
            let mut answer = String::new();
            let read = input.read_line(&mut answer).context(GeneratorIoSnafu)?;
            ensure!(read != 0, GeneratorInputEndedSnafu);
            match answer.trim() {
                "1" => {
                    verdicts.push(TieBreak::preferred_over(first, second));
                    break;
                }
                "2" => {
                    verdicts.push(TieBreak::preferred_over(second, first));
                    break;
                }
                _ => {}
            }
        }
    }
    Ok(verdicts)
}

/// The collected verdicts in the format of the tie-breakers file.
pub fn render_tie_breaks(verdicts: &[TieBreak]) -> String {
    verdicts
        .iter()
        .map(|verdict| format!("{} > {}\n", verdict.winner, verdict.loser))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn answer_all(people_names: &[&str], answers: &str) -> (Vec<TieBreak>, String) {
        let mut input = answers.as_bytes();
        let mut prompts: Vec<u8> = Vec::new();
        let verdicts =
            generate_tie_breaks(&people(people_names), &mut input, &mut prompts).unwrap();
        (verdicts, String::from_utf8(prompts).unwrap())
    }

    #[test]
    fn three_people_form_three_pairings() {
        assert_eq!(
            pair_up(&people(&["Ana", "Ben", "Cy"])),
            vec!["Ana + Ben", "Ana + Cy", "Ben + Cy"]
        );
    }

    #[test]
    fn each_matchup_is_asked_once() {
        let (verdicts, prompts) = answer_all(&["Ana", "Ben", "Cy"], "1\n2\n1\n");
        assert_eq!(
            verdicts,
            vec![
                TieBreak::preferred_over("Ana + Ben", "Ana + Cy"),
                TieBreak::preferred_over("Ben + Cy", "Ana + Ben"),
                TieBreak::preferred_over("Ana + Cy", "Ben + Cy"),
            ]
        );
        assert_eq!(
            prompts,
            "Which is better: [1] Ana + Ben or [2] Ana + Cy\n\
             Which is better: [1] Ana + Ben or [2] Ben + Cy\n\
             Which is better: [1] Ana + Cy or [2] Ben + Cy\n"
        );
    }

    #[test]
    fn answers_may_carry_whitespace() {
        let (verdicts, _) = answer_all(&["Ana", "Ben", "Cy"], " 1 \n2 \n 2\n");
        assert_eq!(verdicts[0], TieBreak::preferred_over("Ana + Ben", "Ana + Cy"));
        assert_eq!(verdicts.len(), 3);
    }

    #[test]
    fn anything_else_asks_the_question_again() {
        let (verdicts, prompts) = answer_all(&["Ana", "Ben", "Cy"], "maybe\n\n1\n2\n1\n");
        assert_eq!(verdicts.len(), 3);
        assert_eq!(prompts.lines().count(), 5);
        assert!(prompts.starts_with(
            "Which is better: [1] Ana + Ben or [2] Ana + Cy\n\
             Which is better: [1] Ana + Ben or [2] Ana + Cy\n\
             Which is better: [1] Ana + Ben or [2] Ana + Cy\n"
        ));
    }

    #[test]
    fn two_people_have_nothing_to_break() {
        let (verdicts, prompts) = answer_all(&["Ana", "Ben"], "");
        assert!(verdicts.is_empty());
        assert!(prompts.is_empty());
    }

    #[test]
    fn input_ending_early_is_an_error() {
        let mut input = "1\n".as_bytes();
        let mut prompts: Vec<u8> = Vec::new();
        let err = generate_tie_breaks(&people(&["Ana", "Ben", "Cy"]), &mut input, &mut prompts)
            .unwrap_err();
        assert!(matches!(err, DataError::GeneratorInputEnded {}));
    }

    #[test]
    fn verdicts_render_one_per_line() {
        let verdicts = vec![
            TieBreak::preferred_over("Ana + Ben", "Ana + Cy"),
            TieBreak::preferred_over("Ana + Cy", "Ben + Cy"),
        ];
        assert_eq!(
            render_tie_breaks(&verdicts),
            "Ana + Ben > Ana + Cy\nAna + Cy > Ben + Cy\n"
        );
    }
}
