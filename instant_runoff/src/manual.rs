/*!

This is the long-form manual for `instant_runoff` and `pairtally`.

## Input files

A tally run reads three files:
* the ballot export (`--ballots`), a tab-separated spreadsheet export
* the standing pairings (`--pairings`), one pairing per line
* the tie-breaking table (`--tie-breakers`), one verdict per line

### Ballot export

The ballots are collected with a spreadsheet form (Google Forms or similar)
in which every candidate has its own column and voters fill in a rank for
the candidates they support. The export is expected in the tab-separated
format, with the form questions in the first row:

```text
Timestamp	Your Vote [Alice]	Your Vote [Alice + Bob]	...
5/2 10:04	2nd	1st	...
```

Only the columns whose header contains `Your Vote [...]` are read; anything
else (timestamps, email addresses) is ignored. The bracketed part is the
candidate, either a single person (`Alice`) or a pairing (`Alice + Bob`).
The set of vote columns must be coherent: every pairing of two individual
columns has to appear exactly once, in either orientation, and no pairing
may mention a person without a column of their own.

A rank cell is blank (no opinion) or contains the rank as a number, with an
optional ordinal suffix and an optional `choice` label: `1`, `1st`,
`2nd choice` and `3RD CHOICE` all work. Ranks start at 1, lower is better.

Votes in individual columns count for the standing pairing that person
belongs to, provided there is exactly one. Ranking a person who is not
part of any standing pairing, or who stands in several of them, is
allowed; the entry is skipped with a warning. A vote for a pairing that
did not end up standing is skipped the same way. When several entries of
one ballot land on the same pairing, only the best rank is kept.

### Standing pairings

The pairings file declares which pairings are actually running. One pairing
per line:

```text
Alice + Bob
Carol + Dan
```

Blank lines and lines starting with `#` are ignored. The orientation does
not matter (`Bob + Alice` declares the same pairing) but each pairing may
only be declared once. One person showing up in several standing pairings
is fine; it only means their individual column cannot be counted.

### Tie-breaking table

When two pairings tie for last place in some round, the table decides which
one is eliminated. One verdict per line, better side first:

```text
# generated with: pairtally --generate Alice,Bob,Carol,Dan
Alice + Bob > Carol + Dan
```

Blank lines and `#` comments are ignored. A verdict against itself or a
pair of verdicts in both orientations is rejected when the file is loaded.
The table only has to cover the pairs that actually tie; a complete table
never hurts.

The table can be produced interactively with `--generate`, which asks one
question per pair of pairings and writes the table to `--out`, or to stdout
without it (see the [quick start](../quick_start/index.html)).

## Outputs

The round-by-round report is printed on stdout:

```text
Instant runoff:
	Round 1: Eliminated Carol + Dan (had 1 first-place votes)

Winner is: Alice + Bob
```

With `--out`, a JSON summary of the same information is written to the
given file (or to stdout with `--out stdout`):

```json
{
  "config": {
    "contest": "Co-presidents"
  },
  "rounds": [
    {
      "round": 1,
      "eliminated": "Carol + Dan",
      "firstPlaceVotes": 1
    }
  ],
  "winner": "Alice + Bob"
}
```

With `--reference`, the computed summary is compared against a previously
written summary file and the run fails with a diff when they do not match.
This is meant for keeping a tally reproducible after the fact.

*/
