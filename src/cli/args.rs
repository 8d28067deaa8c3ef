// src/cli/args.rs
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// Build it with [`Args::parse_tokens`] rather than `Args::parse`: the raw
/// tokens follow looser rules than clap's (option values may start with `-`,
/// unknown tokens are paths) and are rewritten before clap sees them.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "line_filter",
    version = crate::VERSION,
    about = "Sort the lines of text files into integers, floats and strings",
    args_override_self = true
)]
pub struct Args {
    /// Directory the category files are written to
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        num_args = 0..=1,
        default_missing_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub output: PathBuf,

    /// Prefix prepended to every output file name
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        default_value = "",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub prefix: String,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long = "append")]
    pub append: bool,

    /// Print the number of lines per category
    #[arg(short = 's', long = "short-stats")]
    pub short_stats: bool,

    /// Print count, min/max/sum/average for numbers and min/max length for strings
    #[arg(short = 'f', long = "full-stats")]
    pub full_stats: bool,

    /// Input files, read in the given order
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}

impl Args {
    /// Parse the arguments of the current process.
    pub fn from_env() -> Self {
        Self::parse_tokens(std::env::args_os())
    }

    /// Parse `tokens`, the first of which is the program name.
    ///
    /// `-o` and `-p` take the next token whatever it looks like, and any token
    /// that is not a known option is an input path. Exits on `--help`,
    /// `--version` or a clap error.
    pub fn parse_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize(tokens))
    }

    /// # Errors
    /// Same as [`Args::parse_tokens`] but returns the clap error instead of exiting.
    pub fn try_parse_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize(tokens))
    }
}

enum Token {
    /// Handed to clap unchanged.
    Switch,
    /// Takes the following token as its value, stored under this long name.
    Valued(&'static str),
    Path,
}

fn kind(token: &OsStr) -> Token {
    match token.to_str() {
        Some(
            "-a" | "--append" | "-s" | "--short-stats" | "-f" | "--full-stats" | "-h" | "--help"
            | "-V" | "--version",
        ) => Token::Switch,
        Some("-o" | "--output") => Token::Valued("--output"),
        Some("-p" | "--prefix") => Token::Valued("--prefix"),
        Some(s) if s.starts_with("--output=") || s.starts_with("--prefix=") => Token::Switch,
        _ => Token::Path,
    }
}

/// Rewrite raw tokens so clap cannot misread them: option values are attached
/// with `=` and every path goes after `--`. A value option with nothing after
/// it is dropped, keeping its default.
fn normalize<I, T>(tokens: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = tokens.into_iter().map(Into::into);
    let mut out: Vec<OsString> = tokens.next().into_iter().collect();
    let mut paths = Vec::new();

    while let Some(token) = tokens.next() {
        match kind(&token) {
            Token::Switch => out.push(token),
            Token::Valued(long) => {
                if let Some(value) = tokens.next() {
                    let mut attached = OsString::from(long);
                    attached.push("=");
                    attached.push(value);
                    out.push(attached);
                }
            }
            Token::Path => paths.push(token),
        }
    }

    if !paths.is_empty() {
        out.push(OsString::from("--"));
        out.extend(paths);
    }
    out
}
