/*!

# Quick start

This example runs a small co-president election end to end. Two pairings are
standing, made out of four people: `Alice + Bob` and `Carol + Dan`.

**Collecting the votes** Create a form (Google Forms works well) with one
rank question per candidate. Every individual and every possible pairing of
two individuals gets a question titled `Your Vote [...]`, so here:
`Your Vote [Alice]`, `Your Vote [Bob]`, ... , `Your Vote [Alice + Bob]`,
`Your Vote [Alice + Carol]` and so on. Voters answer with ranks (`1st`,
`2nd`, ...) for the candidates they support and leave the rest blank.

After the poll is closed, export the response spreadsheet in the
tab-separated format, for example as `votes.tsv`. See the
[manual](../manual/index.html) for the details of the expected layout.

**Declaring the standing pairings** Write the pairings that are actually
running to `pairings.txt`:

```text
Alice + Bob
Carol + Dan
```

Votes in the individual columns are counted for the standing pairing the
person belongs to, so a `1st` under `Your Vote [Carol]` counts for
`Carol + Dan`.

**Breaking ties** Instant runoff needs a verdict when two pairings tie for
last place. Generate the table once, before looking at any result:

```bash
pairtally --generate Alice,Bob,Carol,Dan --out tie_breakers.txt
```

The program asks one question per matchup of two pairings these four
people could form, whether standing or not:

```text
Which is better: [1] Alice + Bob or [2] Alice + Carol
```

Answer `1` or `2` each time. The resulting table is written to
`tie_breakers.txt`, one `better > worse` line per question; without `--out`
it goes to stdout.

**Running the tally**

```bash
pairtally --ballots votes.tsv --pairings pairings.txt --tie-breakers tie_breakers.txt
```

The outcome of the election is printed after the round-by-round log:

```text
[2026-05-12T09:55:59Z INFO  instant_runoff] run_tally: processing 4 ballots with 1 tie-breaking entries
[2026-05-12T09:55:59Z INFO  instant_runoff] run_tally: round 1: eliminating "Carol + Dan" with 1 first-place votes
[2026-05-12T09:55:59Z INFO  instant_runoff] run_tally: round 2: single candidate left: "Alice + Bob"
Instant runoff:
	Round 1: Eliminated Carol + Dan (had 1 first-place votes)

Winner is: Alice + Bob
```

Add `--out summary.json` to also write a machine-readable summary of the
rounds, and `--reference summary.json` on a later run to check that a tally
still reproduces it.

# Using the library

The tally itself is available behind a single function, without any of the
file handling:

```rust
use instant_runoff::{run_tally, Ballot};

let ballots: Vec<Ballot> = vec![
    ["Alice + Bob", "Carol + Dan"].into_iter().collect(),
    ["Carol + Dan"].into_iter().collect(),
    ["Alice + Bob"].into_iter().collect(),
];
let result = run_tally(&ballots, &[]).unwrap();
assert_eq!(result.winner, "Alice + Bob");
assert_eq!(result.eliminations.len(), 1);
```

Ballots hold candidate names ranked best first. The second argument is the
tie-breaking table; an empty one is fine as long as no round actually ties,
as in this example. [`run_tally`](../fn.run_tally.html) documents the exact
elimination procedure.

*/
