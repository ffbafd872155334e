use clap::Parser;

/// This is a tabulation program for co-president pair elections.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The ballot export in tab-separated format, with one `Your Vote [...]`
    /// column per candidate. For the exact layout, read the documentation of the
    /// instant_runoff crate.
    #[clap(short, long, value_parser)]
    pub ballots: Option<String>,

    /// (file path) The list of standing pairings, one per line. Votes for individuals
    /// are counted towards the standing pairing that person belongs to.
    #[clap(short, long, value_parser)]
    pub pairings: Option<String>,

    /// (file path) The tie-breaking table, one `P > Q` line per verdict. Only consulted
    /// when two pairings tie for last place in some round.
    #[clap(short, long, value_parser)]
    pub tie_breakers: Option<String>,

    /// (file path, 'stdout' or empty) If specified, a summary of the election will be
    /// written in JSON format to the given location. With --generate, the tie-breaker
    /// table is written there instead.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, pairtally will
    /// check that the tabulated outcome matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (name, default 'Co-presidents') The name of the contest, recorded in the JSON
    /// summary.
    #[clap(long, value_parser)]
    pub contest_name: Option<String>,

    /// (list of comma-separated names) If specified, runs the interactive tie-breaker
    /// generator for these people instead of tallying an election. The resulting table
    /// is written to --out, or to stdout when --out is not given.
    #[clap(short, long, value_parser)]
    pub generate: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
