//! Application configuration from CLI flags and environment.

use clap::Parser;

use duocalc_core::registry::parse_selector;

/// duocalc: run two computations concurrently and combine their results.
#[derive(Parser, Debug)]
#[command(name = "duocalc", version, about)]
pub struct AppConfig {
    /// Demo case (1-6). Any other value runs the identity computations.
    #[arg(short, long, value_name = "CASE")]
    pub demo: Option<String>,

    /// Operand x. Read from standard input when omitted.
    #[arg(short, long, env = "DUOCALC_X", allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The demo selector, if one was given and parses as an integer.
    #[must_use]
    pub fn selector(&self) -> Option<i32> {
        self.demo.as_deref().and_then(parse_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("duocalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags() {
        let config = parse(&[]);
        assert_eq!(config.selector(), None);
        assert!(config.completion.is_none());
    }

    #[test]
    fn demo_selector() {
        assert_eq!(parse(&["-d", "4"]).selector(), Some(4));
        assert_eq!(parse(&["--demo", "9"]).selector(), Some(9));
    }

    #[test]
    fn unparsable_selector_is_ignored() {
        assert_eq!(parse(&["-d", "four"]).selector(), None);
    }

    #[test]
    fn operand_flag() {
        assert_eq!(parse(&["-x", "-5"]).x, Some(-5));
    }

    #[test]
    fn verify_command() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
