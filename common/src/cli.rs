use clap::Parser;

use crate::template::Parts;

/// Solve one day of the puzzle event and hand the answers in.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Day of the event, 1-25
    pub day: u8,

    /// Use the example input rather than running personal input
    #[arg(long, conflicts_with = "local")]
    pub example: bool,

    /// Use problem data stored in the local data folder as `inputYEAR-DAY.txt`
    #[arg(long)]
    pub local: bool,

    /// Write debug logs of what is going on into `dayN.log`
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging, even in example mode
    #[arg(long)]
    pub quiet: bool,

    /// Do only the specified parts: `a`, `b` or `ab`
    #[arg(long, default_value = "ab")]
    pub parts: Parts,

    /// Print the answers without submitting them
    #[arg(long)]
    pub no_submit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["aoc2022", "22"]).unwrap();
        assert_eq!(cli.day, 22);
        assert_eq!(cli.parts, Parts::BOTH);
        assert!(!cli.example && !cli.local && !cli.no_submit);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["aoc2021", "3", "--example", "--quiet", "--parts", "b"]).unwrap();
        assert!(cli.example && cli.quiet);
        assert_eq!(cli.parts, Parts {a: false, b: true});
        assert!(Cli::try_parse_from(["aoc2021", "3", "--example", "--local"]).is_err());
        assert!(Cli::try_parse_from(["aoc2021", "3", "--parts", "c"]).is_err());
    }
}
