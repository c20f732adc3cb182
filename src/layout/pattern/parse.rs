// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Compiles a conversion pattern into a sequence of chunks.
//!
//! The syntax of a directive is `%[flags][width][.precision]<code>[{arg}]`,
//! and `%%` escapes a literal percent sign. Structural errors fail the
//! compilation; an unrecognized field code does not, it is resolved (or
//! reported inline) at render time.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::Error;

/// One compiled piece of a conversion pattern, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Chunk {
    Literal(String),
    Field(FieldDirective),
}

/// A `%` directive: the field code plus its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldDirective {
    pub(crate) code: char,
    pub(crate) spec: FormatSpec,
    pub(crate) arg: Option<String>,
}

/// Width and justification modifiers, with printf semantics: values pad
/// right-aligned to `min_width` and truncate at `max_width`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FormatSpec {
    pub(crate) left_align: bool,
    pub(crate) min_width: Option<usize>,
    pub(crate) max_width: Option<usize>,
}

impl FormatSpec {
    /// Whether the resolved value passes through unmodified.
    pub(crate) fn is_plain(&self) -> bool {
        self.min_width.is_none() && self.max_width.is_none()
    }
}

pub(crate) fn parse(pattern: &str) -> Result<Vec<Chunk>, Error> {
    let mut chunks = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        match chars.peek().copied() {
            None => return Err(malformed(pattern, pos, "dangling '%' at end of pattern")),
            Some((_, '%')) => {
                chars.next();
                literal.push('%');
                continue;
            }
            Some(_) => {}
        }
        if !literal.is_empty() {
            chunks.push(Chunk::Literal(std::mem::take(&mut literal)));
        }
        chunks.push(Chunk::Field(parse_directive(pattern, pos, &mut chars)?));
    }
    if !literal.is_empty() {
        chunks.push(Chunk::Literal(literal));
    }
    Ok(chunks)
}

fn parse_directive(
    pattern: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<FieldDirective, Error> {
    let mut spec = FormatSpec::default();
    while matches!(chars.peek(), Some((_, '-'))) {
        chars.next();
        spec.left_align = true;
    }
    if matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
        spec.min_width = Some(parse_number(pattern, start, chars)?);
    }
    if matches!(chars.peek(), Some((_, '.'))) {
        chars.next();
        if !matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
            return Err(malformed(pattern, start, "precision must be followed by digits"));
        }
        spec.max_width = Some(parse_number(pattern, start, chars)?);
    }
    let code = match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => c,
        Some((_, c)) => {
            return Err(malformed(pattern, start, format!("invalid field code '{c}'")));
        }
        None => return Err(malformed(pattern, start, "directive is missing its field code")),
    };
    let arg = if matches!(chars.peek(), Some((_, '{'))) {
        chars.next();
        let mut arg = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => arg.push(c),
                None => return Err(malformed(pattern, start, "unterminated '{' argument")),
            }
        }
        Some(arg)
    } else {
        None
    };
    Ok(FieldDirective { code, spec, arg })
}

fn parse_number(
    pattern: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<usize, Error> {
    let mut number: usize = 0;
    while let Some((_, ch)) = chars.peek().copied() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        chars.next();
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as usize))
            .ok_or_else(|| malformed(pattern, start, "width or precision overflows"))?;
    }
    Ok(number)
}

fn malformed(pattern: &str, position: usize, reason: impl Into<String>) -> Error {
    Error::new("malformed conversion pattern")
        .with_context("pattern", pattern)
        .with_context("position", position)
        .with_context("reason", reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(code: char, spec: FormatSpec, arg: Option<&str>) -> Chunk {
        Chunk::Field(FieldDirective {
            code,
            spec,
            arg: arg.map(str::to_owned),
        })
    }

    fn literal(text: &str) -> Chunk {
        Chunk::Literal(text.to_owned())
    }

    #[test]
    fn test_literal_only() {
        let chunks = parse("plain text, no directives").unwrap();
        assert_eq!(chunks, vec![literal("plain text, no directives")]);
    }

    #[test]
    fn test_percent_escape() {
        let chunks = parse("100%% done").unwrap();
        assert_eq!(chunks, vec![literal("100% done")]);
    }

    #[test]
    fn test_single_directive() {
        let chunks = parse("%m").unwrap();
        assert_eq!(chunks, vec![field('m', FormatSpec::default(), None)]);
    }

    #[test]
    fn test_literals_surround_directives_in_order() {
        let chunks = parse("[%p] %m!").unwrap();
        assert_eq!(
            chunks,
            vec![
                literal("["),
                field('p', FormatSpec::default(), None),
                literal("] "),
                field('m', FormatSpec::default(), None),
                literal("!"),
            ]
        );
    }

    #[test]
    fn test_width_and_precision() {
        let chunks = parse("%-5.3c").unwrap();
        let spec = FormatSpec {
            left_align: true,
            min_width: Some(5),
            max_width: Some(3),
        };
        assert_eq!(chunks, vec![field('c', spec, None)]);
    }

    #[test]
    fn test_precision_without_width() {
        let chunks = parse("%.7m").unwrap();
        let spec = FormatSpec {
            left_align: false,
            min_width: None,
            max_width: Some(7),
        };
        assert_eq!(chunks, vec![field('m', spec, None)]);
    }

    #[test]
    fn test_directive_argument() {
        let chunks = parse("%c{2} %d{%H:%M:%S}").unwrap();
        assert_eq!(
            chunks,
            vec![
                field('c', FormatSpec::default(), Some("2")),
                literal(" "),
                field('d', FormatSpec::default(), Some("%H:%M:%S")),
            ]
        );
    }

    #[test]
    fn test_unknown_code_is_accepted() {
        // deferred to render time, where it reports inline
        let chunks = parse("%Z").unwrap();
        assert_eq!(chunks, vec![field('Z', FormatSpec::default(), None)]);
    }

    #[test]
    fn test_dangling_percent() {
        assert!(parse("%").is_err());
        assert!(parse("tail%").is_err());
    }

    #[test]
    fn test_missing_field_code() {
        assert!(parse("%5").is_err());
        assert!(parse("%-").is_err());
    }

    #[test]
    fn test_invalid_field_code() {
        let err = parse("%5$").unwrap_err();
        assert!(err.to_string().contains("malformed conversion pattern"));
    }

    #[test]
    fn test_bad_precision() {
        assert!(parse("%5.m").is_err());
        assert!(parse("%.").is_err());
    }

    #[test]
    fn test_unterminated_argument() {
        assert!(parse("%d{%H:%M").is_err());
    }

    #[test]
    fn test_number_overflow() {
        assert!(parse("%99999999999999999999999m").is_err());
    }
}
