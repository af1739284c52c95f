//! `umber lex`: print the token stream of a file.

use std::io::{self, Write};

use umber_ir::Token;
use umber_php::{LexerOptions, PhpLexer};

use super::{read_source, CliError};

/// Parsed arguments of `umber lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexArgs {
    /// File to read; `-` is standard input.
    pub path: String,
    /// Skip merging of adjacent same-kind tokens.
    pub raw: bool,
    /// Print short kind names instead of qualified ones.
    pub short: bool,
    /// `key=value` lexer options, in command-line order.
    pub options: Vec<(String, String)>,
}

/// Parse everything after `lex`: a path, `--raw`, `--short`, and any number
/// of `--option key=value` (or `--option=key=value`).
pub fn parse_lex_args(args: &[String]) -> Result<LexArgs, CliError> {
    let mut path = None;
    let mut parsed = LexArgs::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--raw" {
            parsed.raw = true;
        } else if arg == "--short" {
            parsed.short = true;
        } else if arg == "--option" {
            i += 1;
            let pair = args
                .get(i)
                .ok_or_else(|| CliError::MalformedOption(String::new()))?;
            parsed.options.push(split_option(pair)?);
        } else if let Some(pair) = arg.strip_prefix("--option=") {
            parsed.options.push(split_option(pair)?);
        } else if (arg == "-" || !arg.starts_with('-')) && path.is_none() {
            path = Some(arg.to_owned());
        } else {
            return Err(CliError::UnexpectedArgument(arg.to_owned()));
        }
        i += 1;
    }
    parsed.path = path.ok_or(CliError::MissingPath)?;
    Ok(parsed)
}

fn split_option(pair: &str) -> Result<(String, String), CliError> {
    pair.split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| CliError::MalformedOption(pair.to_owned()))
}

/// One line per token: kind name, then the quoted text.
///
/// With `short`, kinds print as their short names; `Text`, whose short name
/// is empty, prints as `-`.
pub fn render_tokens(
    tokens: &[Token<'_>],
    short: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    for token in tokens {
        let name = if short {
            match token.kind.short_name() {
                "" => "-",
                name => name,
            }
        } else {
            token.kind.qualname()
        };
        writeln!(out, "{name} {:?}", token.text)?;
    }
    Ok(())
}

/// Lex a file and print its tokens. Returns the token count.
pub fn lex_file(args: &LexArgs) -> Result<usize, CliError> {
    let options = LexerOptions::from_pairs(args.options.iter().map(|(k, v)| (k, v)))?;
    let source = read_source(&args.path)?;
    let mut lexer = PhpLexer::new(options);
    let tokens = if args.raw {
        lexer.tokenize_raw(&source)
    } else {
        lexer.tokenize(&source)
    };
    tracing::debug!(path = %args.path, tokens = tokens.len(), raw = args.raw, "lexed");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render_tokens(&tokens, args.short, &mut out).map_err(CliError::Write)?;
    out.flush().map_err(CliError::Write)?;
    Ok(tokens.len())
}
