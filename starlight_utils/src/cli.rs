//! Command-line front end for the `starlight` binary.
//!
//! Every subcommand reads its text from an argument when given, otherwise
//! from the provided input stream (stdin in the binary). Parsing and
//! dispatch live here so they can be driven from tests with in-memory
//! readers and writers.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, warn};
use time::Date;
use time::macros::format_description;

use crate::error::UtilsError;
use crate::{DEFAULT_MAX_LENGTH, age_on, age_today, age_today_utc, initials, is_slug, remove_html, slugify_with_max};

#[derive(Debug, Parser)]
#[command(author, version, about = "Slugs, HTML stripping, initials and ages from the command line.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn text into a URL slug.
    Slug(SlugArgs),
    /// Strip HTML tags and the blank lines they leave behind.
    StripHtml(StripHtmlArgs),
    /// Print the initials of each space-delimited word.
    Initials(TextArgs),
    /// Print whole years elapsed since a birth date.
    Age(AgeArgs),
    /// Print whether the text is already a well-formed slug.
    IsSlug(TextArgs),
}

#[derive(Debug, Args)]
pub struct TextArgs {
    /// Text to process; read from stdin when omitted.
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct SlugArgs {
    #[command(flatten)]
    pub input: TextArgs,
    /// Number of input characters to scan.
    #[arg(long, env = "STARLIGHT_SLUG_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,
}

#[derive(Debug, Args)]
pub struct StripHtmlArgs {
    /// Read HTML from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Birth date, YYYY-MM-DD.
    pub birth: String,
    /// Compute the age on this date instead of today.
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,
    /// Use today's date in UTC rather than local time.
    #[arg(long, conflicts_with = "on")]
    pub utc: bool,
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
/// Returns [`UtilsError::InvalidDate`] if `input` is not a valid date.
pub fn parse_date(input: &str) -> crate::Result<Date> {
    let trimmed = input.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|source| UtilsError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Execute `command`, reading missing text from `input` and writing the result to `output`.
///
/// # Errors
/// Returns an error if input cannot be read, a date is invalid, or output cannot be written.
pub fn run(command: &Commands, input: &mut impl Read, output: &mut impl Write) -> Result<()> {
    debug!("dispatching {command:?}");
    match command {
        Commands::Slug(args) => {
            let text = text_or_input(&args.input, input)?;
            writeln!(output, "{}", slugify_with_max(text.as_str(), args.max_length))?;
        },
        Commands::StripHtml(args) => {
            let html = match &args.file {
                Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
                None => read_all(input)?,
            };
            let stripped = remove_html(html.as_str());
            writeln!(output, "{}", stripped.trim_end_matches('\n'))?;
        },
        Commands::Initials(args) => {
            let text = text_or_input(args, input)?;
            writeln!(output, "{}", initials(text.as_str()))?;
        },
        Commands::Age(args) => {
            writeln!(output, "{}", compute_age(args)?)?;
        },
        Commands::IsSlug(args) => {
            let text = text_or_input(args, input)?;
            writeln!(output, "{}", is_slug(&text))?;
        },
    }
    output.flush().context("flushing output")?;
    Ok(())
}

fn compute_age(args: &AgeArgs) -> Result<u32> {
    let birth = parse_date(&args.birth)?;
    if let Some(on) = &args.on {
        return Ok(age_on(birth, parse_date(on)?));
    }
    if args.utc {
        return Ok(age_today_utc(birth));
    }
    match age_today(birth) {
        Ok(age) => Ok(age),
        Err(err) => {
            warn!("{err}; falling back to UTC");
            Ok(age_today_utc(birth))
        },
    }
}

fn text_or_input(args: &TextArgs, input: &mut impl Read) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut text = read_all(input)?;
    let kept = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(kept);
    Ok(text)
}

fn read_all(input: &mut impl Read) -> Result<String> {
    let mut buf = String::new();
    input.read_to_string(&mut buf).context("reading input")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(std::iter::once("starlight").chain(args.iter().copied())).expect("valid args");
        let mut out = Vec::new();
        run(&cli.command, &mut stdin.as_bytes(), &mut out).expect("command runs");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn parse_date_accepts_iso() {
        let date = parse_date(" 2000-02-29 ").expect("valid date");
        assert_eq!(date.to_string(), "2000-02-29");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("29/02/2000").unwrap_err();
        assert!(matches!(err, UtilsError::InvalidDate { ref input, .. } if input == "29/02/2000"));
        assert!(parse_date("2001-02-29").is_err());
    }

    #[test]
    fn slug_from_argument_and_stdin() {
        assert_eq!(run_args(&["slug", "Hello, World!"], ""), "hello-world\n");
        assert_eq!(run_args(&["slug"], "Crème brûlée\n"), "creme-brulee\n");
        assert_eq!(run_args(&["slug", "--max-length", "5", "abc defg"], ""), "abc-d\n");
    }

    #[test]
    fn age_on_explicit_day() {
        assert_eq!(run_args(&["age", "1990-06-15", "--on", "2020-06-14"], ""), "29\n");
    }

    #[test]
    fn age_rejects_bad_date() {
        let cli = Cli::try_parse_from(["starlight", "age", "yesterday"]).expect("valid args");
        let mut out = Vec::new();
        assert!(run(&cli.command, &mut "".as_bytes(), &mut out).is_err());
    }

    #[test]
    fn utc_conflicts_with_on() {
        assert!(Cli::try_parse_from(["starlight", "age", "2000-01-01", "--on", "2001-01-01", "--utc"]).is_err());
    }

    #[test]
    fn initials_and_is_slug() {
        assert_eq!(run_args(&["initials", "John Quincy Adams"], ""), "JQA\n");
        assert_eq!(run_args(&["is-slug"], "hello-world\n"), "true\n");
        assert_eq!(run_args(&["is-slug", "Hello World"], ""), "false\n");
    }

    #[test]
    fn strip_html_from_stdin() {
        assert_eq!(run_args(&["strip-html"], "<p>Hi <b>there</b></p>\n"), "Hi there\n");
    }
}
