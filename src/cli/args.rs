/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::Parser;

/// Default for both output flags. Never a valid format on its own.
pub const DEFAULT_FORMAT: &str = "text";

/// emojimap — export emoji shortcodes as JSON or a Lua module.
#[derive(Debug, Parser)]
#[command(
    name = "emojimap",
    about = "Export the emoji shortcode table as JSON or a Lua module",
    version,
    args_override_self = true
)]
pub struct Cli {
    /// Output format (json, lua).
    #[arg(long = "output", value_name = "FORMAT", default_value = DEFAULT_FORMAT)]
    pub output: String,

    /// Output format (json, lua). Overrides --output when set.
    #[arg(short = 'o', value_name = "FORMAT", default_value = DEFAULT_FORMAT)]
    pub short_output: String,
}

impl Cli {
    /// The effective, lowercased output format text.
    #[must_use]
    pub fn format(&self) -> String {
        resolve_format(&self.output, &self.short_output)
    }
}

/// Pick between `--output` and `-o`.
///
/// `-o` wins whenever it differs from [`DEFAULT_FORMAT`], even if `--output`
/// was also given.
#[must_use]
pub fn resolve_format(long: &str, short: &str) -> String {
    let chosen = if short == DEFAULT_FORMAT { long } else { short };
    chosen.to_lowercase()
}

/// Rewrite Go-style flag spellings into the ones clap understands.
///
/// `-output` becomes `--output` and `--o` becomes `-o`, with or without an
/// `=value` suffix. Every other argument passes through unchanged.
#[must_use]
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s == "-output" || s.starts_with("-output=") => format!("-{s}").into(),
            Some(s) if s == "--o" || s.starts_with("--o=") => s[1..].to_owned().into(),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("emojimap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.output, "text");
        assert_eq!(cli.short_output, "text");
        assert_eq!(cli.format(), "text");
    }

    #[test]
    fn test_long_only() {
        assert_eq!(parse(&["--output=json"]).format(), "json");
        assert_eq!(parse(&["--output", "lua"]).format(), "lua");
    }

    #[test]
    fn test_short_only() {
        assert_eq!(parse(&["-o", "lua"]).format(), "lua");
        assert_eq!(parse(&["-o=json"]).format(), "json");
    }

    #[test]
    fn test_short_overrides_long() {
        assert_eq!(parse(&["--output=json", "-o=lua"]).format(), "lua");
        assert_eq!(parse(&["-o", "lua", "--output", "json"]).format(), "lua");
    }

    #[test]
    fn test_explicit_short_default_falls_back_to_long() {
        assert_eq!(parse(&["--output=json", "-o", "text"]).format(), "json");
    }

    #[test]
    fn test_lowercased() {
        assert_eq!(parse(&["--output=JSON"]).format(), "json");
        assert_eq!(resolve_format("text", "Lua"), "lua");
    }

    #[test]
    fn test_repeated_long_last_wins() {
        assert_eq!(parse(&["--output", "xml", "--output", "json"]).format(), "json");
    }

    #[test]
    fn test_repeated_short_last_wins() {
        assert_eq!(parse(&["-o", "json", "-o=lua"]).format(), "lua");
    }

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_go_spellings() {
        assert_eq!(
            normalized(&["emojimap", "-output=json", "--o", "lua"]),
            ["emojimap", "--output=json", "-o", "lua"]
        );
        assert_eq!(normalized(&["-output", "lua", "--o=json"]), ["--output", "lua", "-o=json"]);
    }

    #[test]
    fn test_normalize_leaves_others() {
        assert_eq!(
            normalized(&["-o", "-outputs", "--output=json", "--oo"]),
            ["-o", "-outputs", "--output=json", "--oo"]
        );
    }

    #[test]
    fn test_single_dash_long_parses() {
        let cli = Cli::try_parse_from(normalize_args(
            ["emojimap", "-output=json"].map(OsString::from),
        ))
        .unwrap();
        assert_eq!(cli.format(), "json");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["emojimap", "--format", "json"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
