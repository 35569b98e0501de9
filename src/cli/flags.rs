use std::num::NonZeroUsize;

use clap::Parser;

use passgen::Policy;

#[derive(Debug, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Generate passwords of 8 to 24 characters and rate their strength",
    after_help = "Run without arguments on a terminal for interactive mode."
)]
pub struct CliFlags {
    /// Characters per password (8-24)
    #[arg(short, long, value_name = "N", default_value_t = Policy::MIN_LENGTH)]
    pub length: usize,

    /// Include digits (0-9)
    #[arg(short = 'd', long)]
    pub numbers: bool,

    /// Include special characters
    #[arg(short, long)]
    pub special: bool,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub number: NonZeroUsize,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Seed from operating-system entropy
    #[arg(short, long)]
    pub urandom: bool,

    /// Fixed seed for reproducible output
    #[arg(long, value_name = "U64", conflicts_with = "urandom")]
    pub seed: Option<u64>,

    /// Show the strength meter next to each password
    #[arg(long)]
    pub strength: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive view
    #[arg(short, long)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.length, 8);
        assert_eq!(flags.number.get(), 1);
        assert!(!flags.numbers && !flags.special && !flags.clipboard);
        assert_eq!(flags.seed, None);
    }

    #[test]
    fn short_flags() {
        let flags = parse(&["-l", "16", "-d", "-s", "-n", "3", "-q"]).unwrap();
        assert_eq!(flags.length, 16);
        assert!(flags.numbers);
        assert!(flags.special);
        assert_eq!(flags.number.get(), 3);
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_zero_count() {
        assert!(parse(&["-n", "0"]).is_err());
    }

    #[test]
    fn seed_conflicts_with_urandom() {
        assert!(parse(&["--seed", "1", "-u"]).is_err());
        assert_eq!(parse(&["--seed", "1"]).unwrap().seed, Some(1));
    }

    #[test]
    fn length_is_not_range_checked_by_parser() {
        // range errors surface from Policy::new as InvalidPolicy
        assert_eq!(parse(&["-l", "40"]).unwrap().length, 40);
    }
}
