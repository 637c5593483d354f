use clap::{Args, Parser, Subcommand};

/// Runtime configuration for the `ulidgen` binary.
///
/// Values come from CLI arguments, falling back to environment variables
/// (which may themselves come from a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ulidgen",
    version,
    about = "Mint and inspect monotonic ULIDs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mint new identifiers, one per line.
    New(NewArgs),
    /// Print the timestamp and calendar time of existing identifiers.
    Parse(ParseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Number of identifiers to mint.
    ///
    /// Environment variable: `ULIDGEN_COUNT`
    #[arg(short = 'n', long, env = "ULIDGEN_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Milliseconds since the Unix epoch to mint for, instead of the wall
    /// clock. Must fit in 48 bits.
    #[arg(short, long)]
    pub timestamp: Option<u64>,

    /// Seed for a deterministic random source. Identifiers minted with the
    /// same seed and timestamp are identical across runs.
    ///
    /// Environment variable: `ULIDGEN_SEED`
    #[arg(short, long, env = "ULIDGEN_SEED")]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Identifiers in Crockford base32 (case-insensitive).
    #[arg(required = true)]
    pub ulids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_one_wall_clock_id() {
        let args = CliArgs::try_parse_from(["ulidgen", "new"]).unwrap();
        let Command::New(new) = args.command else {
            panic!("expected new");
        };
        assert_eq!(new.timestamp, None);
        assert!(new.count >= 1);
    }

    #[test]
    fn new_accepts_all_options() {
        let args = CliArgs::try_parse_from([
            "ulidgen",
            "new",
            "--count",
            "3",
            "--timestamp",
            "1649293350045",
            "--seed",
            "7",
        ])
        .unwrap();
        let Command::New(new) = args.command else {
            panic!("expected new");
        };
        assert_eq!(new.count, 3);
        assert_eq!(new.timestamp, Some(1_649_293_350_045));
        assert_eq!(new.seed, Some(7));
    }

    #[test]
    fn parse_requires_an_argument() {
        assert!(CliArgs::try_parse_from(["ulidgen", "parse"]).is_err());
    }
}
