//! SVG path data parsing and compact re-serialization.
//!
//! Path grammar: https://www.w3.org/TR/SVG/paths.html#PathDataBNF

use crate::error::SvgError;

/// Parsed path data: one segment per command, implicit repeats made explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    pub segments: Vec<Segment>,
}

/// A single command letter with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub command: char,
    pub args: Vec<f64>,
}

/// Number of arguments taken by a command, `None` for unknown letters.
fn arity(command: char) -> Option<usize> {
    match command.to_ascii_lowercase() {
        'z' => Some(0),
        'h' | 'v' => Some(1),
        'm' | 'l' | 't' => Some(2),
        's' | 'q' => Some(4),
        'c' => Some(6),
        'a' => Some(7),
        _ => None,
    }
}

/// Parse the contents of a `d` attribute.
pub fn parse_path(d: &str) -> Result<PathData, SvgError> {
    let mut lexer = Lexer {
        bytes: d.as_bytes(),
        pos: 0,
    };
    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Option<char> = None;

    loop {
        lexer.skip_separators();
        let Some(b) = lexer.peek() else { break };

        let command = if b.is_ascii_alphabetic() {
            lexer.pos += 1;
            let c = b as char;
            if arity(c).is_none() {
                return Err(SvgError::InvalidPath(format!("unknown command '{}'", c)));
            }
            if segments.is_empty() && !matches!(c, 'M' | 'm') {
                return Err(SvgError::InvalidPath(format!(
                    "path must start with a moveto, found '{}'",
                    c
                )));
            }
            c
        } else {
            // Bare numbers repeat the previous command; a moveto repeats as lineto.
            match current {
                Some('M') => 'L',
                Some('m') => 'l',
                Some('Z' | 'z') | None => {
                    return Err(SvgError::InvalidPath(format!(
                        "expected a command at offset {}",
                        lexer.pos
                    )));
                }
                Some(c) => c,
            }
        };
        current = Some(command);

        let count = arity(command).unwrap_or(0);
        let mut args = Vec::with_capacity(count);
        for i in 0..count {
            lexer.skip_separators();
            let is_flag = matches!(command, 'A' | 'a') && (i == 3 || i == 4);
            args.push(if is_flag { lexer.flag()? } else { lexer.number()? });
        }
        segments.push(Segment { command, args });
    }

    Ok(PathData { segments })
}

/// Serialize path data, rounding every argument to `precision` decimals.
///
/// Command letters are omitted where the grammar allows an implicit repeat and
/// separators are only written where two numbers would otherwise merge.
pub fn serialize_path(path: &PathData, precision: u8) -> String {
    let mut out = String::new();
    let mut prev: Option<char> = None;
    // Whether the last number written already contains a decimal point.
    let mut last_had_point = false;

    for segment in &path.segments {
        let implicit = match (prev, segment.command) {
            (_, 'M' | 'm' | 'Z' | 'z') => false,
            (Some('M'), 'L') | (Some('m'), 'l') => true,
            (Some(p), c) => p == c,
            (None, _) => false,
        };

        if !implicit {
            out.push(segment.command);
            last_had_point = false;
        }

        for &arg in &segment.args {
            let num = format_number(arg, precision);
            let needs_space = match (out.chars().last(), num.chars().next()) {
                (Some(last), Some(first)) => {
                    (last.is_ascii_digit() || last == '.')
                        && (first.is_ascii_digit() || (first == '.' && !last_had_point))
                }
                _ => false,
            };
            if needs_space {
                out.push(' ');
            }
            last_had_point = num.contains('.');
            out.push_str(&num);
        }

        prev = Some(segment.command);
    }

    out
}

/// Format a number rounded to `precision` decimals in its shortest form:
/// no trailing zeros, no leading `0` before the point, no negative zero.
pub fn format_number(n: f64, precision: u8) -> String {
    let factor = 10f64.powi(precision as i32);
    let rounded = (n * factor).round() / factor;

    if rounded == 0.0 {
        return "0".into();
    }

    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }

    let mut buf = ryu::Buffer::new();
    let s = buf.format(rounded);

    if let Some(rest) = s.strip_prefix("0.") {
        format!(".{}", rest)
    } else if let Some(rest) = s.strip_prefix("-0.") {
        format!("-.{}", rest)
    } else {
        s.to_string()
    }
}

struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b',')) {
            self.pos += 1;
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn number(&mut self) -> Result<f64, SvgError> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let mut digits = self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.digits();
        }
        if digits == 0 {
            return Err(SvgError::InvalidPath(format!(
                "expected a number at offset {}",
                start
            )));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                self.pos = mark;
            }
        }

        // The slice is ASCII by construction.
        let text = std::str::from_utf8(&self.bytes[start..self.pos])?;
        text.parse()
            .map_err(|_| SvgError::InvalidPath(format!("invalid number '{}'", text)))
    }

    /// Arc flags are a single `0` or `1` and may be written without separators.
    fn flag(&mut self) -> Result<f64, SvgError> {
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(0.0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1.0)
            }
            _ => Err(SvgError::InvalidPath(format!(
                "expected an arc flag at offset {}",
                self.pos
            ))),
        }
    }
}
