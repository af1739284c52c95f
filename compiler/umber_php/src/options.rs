//! Lexer configuration.
//!
//! Options arrive either from Rust code (builder methods on
//! [`LexerOptions`]) or as string key/value pairs from a highlighting
//! front-end ([`LexerOptions::from_pairs`]). Only the string form can fail.

use rustc_hash::FxHashSet;

/// Where scanning starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StartInline {
    /// Input is PHP code from the first byte; no `<?php` needed.
    Code,
    /// Input is host-language text until the first `<?php`.
    Host,
    /// Look at the input and decide.
    #[default]
    Guess,
}

impl From<bool> for StartInline {
    fn from(inline: bool) -> Self {
        if inline {
            StartInline::Code
        } else {
            StartInline::Host
        }
    }
}

/// Error from parsing string-form options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown lexer option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for option `{option}` (expected {expected})")]
    InvalidValue {
        option: String,
        value: String,
        expected: &'static str,
    },
}

/// Configuration for [`PhpLexer`](crate::PhpLexer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    pub start_inline: StartInline,
    /// Highlight known builtin functions as `Name.Builtin`.
    pub function_name_highlighting: bool,
    /// Builtin modules whose functions are not highlighted.
    pub disabled_modules: FxHashSet<String>,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            start_inline: StartInline::Guess,
            function_name_highlighting: true,
            disabled_modules: FxHashSet::default(),
        }
    }
}

impl LexerOptions {
    #[must_use]
    pub fn start_inline(mut self, start: impl Into<StartInline>) -> Self {
        self.start_inline = start.into();
        self
    }

    #[must_use]
    pub fn function_name_highlighting(mut self, enabled: bool) -> Self {
        self.function_name_highlighting = enabled;
        self
    }

    #[must_use]
    pub fn disable_module(mut self, module: impl Into<String>) -> Self {
        self.disabled_modules.insert(module.into());
        self
    }

    /// Build options from string pairs, as passed on a command line or in a
    /// highlighter's lexer-options string.
    ///
    /// Keys: `start_inline`, `funcnamehighlighting` (or
    /// `function_name_highlighting`), `disabledmodules` (or
    /// `disabled_modules`, comma-separated). Later pairs override earlier
    /// ones, except module lists, which accumulate.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = LexerOptions::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "start_inline" => {
                    options.start_inline = if value.trim().eq_ignore_ascii_case("guess") {
                        StartInline::Guess
                    } else {
                        parse_bool(key, value, "a boolean or `guess`")?.into()
                    };
                }
                "funcnamehighlighting" | "function_name_highlighting" => {
                    options.function_name_highlighting = parse_bool(key, value, "a boolean")?;
                }
                "disabledmodules" | "disabled_modules" => {
                    options.disabled_modules.extend(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|m| !m.is_empty())
                            .map(str::to_owned),
                    );
                }
                _ => return Err(OptionError::UnknownOption(key.to_owned())),
            }
        }
        Ok(options)
    }
}

fn parse_bool(option: &str, value: &str, expected: &'static str) -> Result<bool, OptionError> {
    let v = value.trim();
    let truthy = ["true", "yes", "on", "1"];
    let falsy = ["false", "no", "off", "0"];
    if truthy.iter().any(|t| v.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if falsy.iter().any(|f| v.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(OptionError::InvalidValue {
            option: option.to_owned(),
            value: value.to_owned(),
            expected,
        })
    }
}
