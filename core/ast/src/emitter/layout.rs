//! Token stream and line layout.
//!
//! The emitter never writes text directly. It produces [`Token`]s and the
//! [`layout`] function decides on spacing, indentation and line breaks.

use crate::emitter::EmitOptions;
use crate::errors::EmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Identifier, keyword or literal. Two adjacent words are separated by a space.
    Word(String),
    /// Punctuation attached to its neighbours, e.g. `(`, `.` or `;`.
    Punct(&'static str),
    /// Prefix operator. Separated from a preceding word and from an
    /// operator it would otherwise merge with, e.g. `- -x`.
    Prefix(&'static str),
    /// Binary operator padded with spaces.
    Operator(&'static str),
    /// `, `
    Comma,
    /// A single space unless the line is empty or already ends with one.
    Space,
    /// Ends the current line; on an empty line, writes an empty line.
    Newline,
    Indent,
    Dedent,
    /// Verbatim text.
    Raw(String),
    /// Attaches the next word to the previous token, as in `this.<T>foo()`.
    Join,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    LineStart,
    Space,
    Word,
    Open,
    Close,
    Prefix(char),
    Raw,
}

struct LineWriter<'a> {
    options: &'a EmitOptions,
    out: String,
    line: String,
    depth: usize,
    previous: Previous,
}

impl<'a> LineWriter<'a> {
    fn new(options: &'a EmitOptions) -> Self {
        Self {
            options,
            out: String::new(),
            line: String::new(),
            depth: 0,
            previous: Previous::LineStart,
        }
    }

    fn write(&mut self, text: &str) {
        if self.line.is_empty() {
            for _ in 0..self.depth {
                self.line.push_str(&self.options.indent);
            }
        }
        self.line.push_str(text);
    }

    fn space(&mut self) {
        if !self.line.is_empty() && !self.line.ends_with(' ') {
            self.line.push(' ');
        }
    }

    fn end_line(&mut self) {
        self.out.push_str(self.line.trim_end());
        self.out.push_str(&self.options.line_separator);
        self.line.clear();
        self.previous = Previous::LineStart;
    }

    fn push(&mut self, token: &Token) -> Result<(), EmitError> {
        match token {
            Token::Word(word) => {
                let separate = match self.previous {
                    Previous::Word | Previous::Close => true,
                    // `- -5`, not `--5`.
                    Previous::Prefix(last) => {
                        matches!(last, '+' | '-') && word.starts_with(last)
                    }
                    _ => false,
                };
                if separate {
                    self.space();
                }
                self.write(word);
                self.previous = Previous::Word;
            }
            Token::Punct(punct) => {
                self.write(punct);
                self.previous = if matches!(*punct, ")" | "]" | ">") {
                    Previous::Close
                } else {
                    Previous::Open
                };
            }
            Token::Prefix(operator) => {
                let first = operator.chars().next().unwrap_or_default();
                let separate = match self.previous {
                    Previous::Word | Previous::Close => true,
                    Previous::Prefix(last) => last == first,
                    _ => false,
                };
                if separate {
                    self.space();
                }
                self.write(operator);
                self.previous = Previous::Prefix(operator.chars().last().unwrap_or_default());
            }
            Token::Operator(operator) => {
                self.space();
                self.write(operator);
                self.line.push(' ');
                self.previous = Previous::Space;
            }
            Token::Comma => {
                self.write(",");
                self.line.push(' ');
                self.previous = Previous::Space;
            }
            Token::Space => {
                self.space();
                self.previous = Previous::Space;
            }
            Token::Newline => self.end_line(),
            Token::Indent => self.depth += 1,
            Token::Dedent => {
                self.depth = self.depth.checked_sub(1).ok_or_else(|| {
                    EmitError::Internal("indentation dropped below the left margin".to_string())
                })?;
            }
            Token::Raw(text) => {
                self.write(text);
                self.previous = Previous::Raw;
            }
            Token::Join => self.previous = Previous::Open,
        }
        Ok(())
    }

    fn finish(mut self) -> Result<String, EmitError> {
        if self.depth != 0 {
            return Err(EmitError::Internal(format!(
                "{} indentation levels left open",
                self.depth
            )));
        }
        let rest = self.line.trim_end().len();
        self.line.truncate(rest);
        self.out.push_str(&self.line);
        Ok(self.out)
    }
}

/// Lays out `tokens` as text.
///
/// # Errors
///
/// Returns [`EmitError::Internal`] if the indentation of the stream is
/// unbalanced.
pub(crate) fn layout(tokens: &[Token], options: &EmitOptions) -> Result<String, EmitError> {
    let mut writer = LineWriter::new(options);
    for token in tokens {
        writer.push(token)?;
    }
    writer.finish()
}
