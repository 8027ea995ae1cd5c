use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

lazy_static! {
    /// Token categories in priority order. Every regex is anchored, so a
    /// match is always a match at the current position.
    static ref PATTERNS: Vec<RegexPattern> = {
        let mut keywords = RESERVED_LOOKUP.iter().copied().collect::<Vec<_>>();
        keywords.sort_unstable();

        vec![
            RegexPattern { regex: Regex::new(&format!("^({})\\b", keywords.join("|"))).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Keyword)},
            RegexPattern { regex: Regex::new("^[a-zA-Z_]\\w*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Identifier)},
            RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer)},
            RegexPattern { regex: Regex::new("^[+\\-*/=<>!]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator)},
            RegexPattern { regex: Regex::new("^[;(){}]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Symbol)},
            RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler},
            RegexPattern { regex: Regex::new("(?s)^.").unwrap(), handler: unknown_handler},
        ]
    };
}

/// What the lexer does with a character that starts no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexPolicy {
    /// Record the character, log it, and keep scanning after it.
    ContinueAndReport,
    /// Stop at the first such character and fail the whole pass.
    #[default]
    AbortOnFirst,
}

/// Output of a tokenizer pass.
#[derive(Debug, Clone)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    /// Unrecognised characters skipped under [`LexPolicy::ContinueAndReport`].
    pub unrecognised: Vec<Error>,
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    unrecognised: Vec<Error>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
    policy: LexPolicy,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>, policy: LexPolicy) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            unrecognised: vec![],
            source,
            pos: 0,
            file: file_name,
            policy,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    // Offsets fit in u32, see `check_source_length`.
    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn unknown_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let error = Error::new(ErrorImpl::UnrecognisedToken { token: matched.to_string() }, lexer.position());

    match lexer.policy {
        LexPolicy::AbortOnFirst => Err(error),
        LexPolicy::ContinueAndReport => {
            warn!(character = matched, offset = lexer.pos, file = %lexer.file, "skipping unrecognised character");
            lexer.unrecognised.push(error);
            lexer.advance_n(matched.len());
            Ok(())
        }
    }
}

/// Tokenizes `source`, failing on the first unrecognised character.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with_policy(source, file, LexPolicy::AbortOnFirst).map(|tokenized| tokenized.tokens)
}

/// Fails when `length` bytes cannot all be addressed by a [`Position`].
pub(crate) fn check_source_length(length: usize, file: &Rc<String>) -> Result<(), Error> {
    match u32::try_from(length) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::new(ErrorImpl::SourceTooLarge { length }, Position(0, Rc::clone(file)))),
    }
}

pub fn tokenize_with_policy(source: &str, file: Option<String>, policy: LexPolicy) -> Result<Tokenized, Error> {
    let mut lex = Lexer::new(source, file, policy);
    check_source_length(source.len(), &lex.file)?;

    while !lex.at_eof() {
        let remaining = lex.remainder();

        // The last pattern matches any character, so some pattern always applies.
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern.regex.find(remaining).map(|matched| (pattern.handler, matched.as_str()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, matched)?,
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: remaining.chars().take(1).collect() }, lex.position()));
            }
        }
    }

    debug!(tokens = lex.tokens.len(), unrecognised = lex.unrecognised.len(), "tokenized {}", lex.file);

    Ok(Tokenized {
        tokens: lex.tokens,
        unrecognised: lex.unrecognised,
    })
}
