// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command line `key=value` arguments.

use log::warn;
use std::{ffi::OsStr, path::PathBuf};

use crate::error::ArgsError;

/// Usage line printed when a required key is missing.
pub const USAGE: &str =
    "pkimage in=path/to/image out=output/image [mask=path/to/maskimage] [r=resize_factor]";

/// Every `key=value` pair of the command line, in order of appearance.
///
/// Built once at startup, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: Vec<(String, String)>,
}

impl Config {
    /// Parse command line tokens, program name excluded.
    ///
    /// Malformed tokens are skipped with a warning.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for token in args {
            let token = token.as_ref();
            match parse::key_value(token) {
                Some((key, value)) => {
                    // First occurrence wins.
                    if !entries.iter().any(|(k, _)| k == key) {
                        entries.push((key.to_owned(), value.to_owned()));
                    }
                }
                None => warn!("ignoring malformed argument: {:?}", token),
            }
        }
        Self { entries }
    }

    /// Parse raw OS tokens, program name excluded.
    ///
    /// Tokens that are not valid unicode are converted lossily,
    /// their invalid sequences become U+FFFD.
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_args(
            args.into_iter()
                .map(|token| token.as_ref().to_string_lossy().into_owned()),
        )
    }

    /// True if `key` was given, even with an empty value.
    pub fn exists(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Value of `key`, if given.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Typed view of the keys the pipeline understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Image to read (`in=`).
    pub input: PathBuf,
    /// Image to write (`out=`).
    pub output: PathBuf,
    /// Image whose red channel becomes the alpha channel (`mask=`).
    pub mask: Option<PathBuf>,
    /// Resize divisor (`r=`), with `atoi` semantics so it may be <= 1.
    pub resize_factor: Option<i32>,
}

/// Verify that the required keys are present.
pub fn check_args(config: &Config) -> Result<Args, ArgsError> {
    let input = config.value("in").ok_or(ArgsError::MissingKey("in"))?;
    let output = config.value("out").ok_or(ArgsError::MissingKey("out"))?;
    Ok(Args {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        mask: config.value("mask").map(PathBuf::from),
        resize_factor: config.value("r").map(parse::atoi),
    })
}

/// nom parsers for argument tokens.
pub mod parse {
    use nom::{
        branch::alt,
        bytes::complete::{take_till, take_while1},
        character::complete::{char, digit1, multispace0, one_of},
        combinator::{all_consuming, opt, rest},
        sequence::{delimited, pair, preceded, tuple},
        IResult,
    };

    /// Split a `key=value` token.
    ///
    /// A bare `key` gets an empty value and a quoted value loses its quotes.
    /// Returns None for a token without key, such as `=value`.
    pub fn key_value(token: &str) -> Option<(&str, &str)> {
        match all_consuming(token_parser)(token.trim()) {
            Ok((_, (key, value))) => Some((key, value.unwrap_or(""))),
            Err(_) => None,
        }
    }

    /// Integer prefix of a string, like the C `atoi`.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted,
    /// trailing garbage is ignored and no digit at all gives 0.
    /// Values out of the i32 range saturate.
    #[allow(clippy::cast_possible_truncation)]
    pub fn atoi(input: &str) -> i32 {
        match signed_digits(input) {
            Ok((_, (sign, digits))) => {
                let magnitude = digits.bytes().fold(0_i64, |acc, d| {
                    acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
                });
                let value = if sign == Some('-') { -magnitude } else { magnitude };
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
            Err(_) => 0,
        }
    }

    // nom parsers #############################################################

    // A token is a key, optionally followed by a separator and a value.
    fn token_parser(input: &str) -> IResult<&str, (&str, Option<&str>)> {
        pair(key, opt(preceded(separator, value)))(input)
    }

    fn key(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c != '=' && !c.is_whitespace())(input)
    }

    fn separator(input: &str) -> IResult<&str, char> {
        delimited(multispace0, char('='), multispace0)(input)
    }

    // Either a fully quoted string or everything left.
    fn value(input: &str) -> IResult<&str, &str> {
        alt((all_consuming(quoted), rest))(input)
    }

    fn quoted(input: &str) -> IResult<&str, &str> {
        alt((
            delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
            delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        ))(input)
    }

    fn signed_digits(input: &str) -> IResult<&str, (Option<char>, &str)> {
        preceded(multispace0, tuple((opt(one_of("+-")), digit1)))(input)
    }
}

// TESTS #############################################################
