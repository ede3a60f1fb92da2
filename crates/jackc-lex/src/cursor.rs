//! Character cursor for traversing Jack source text.
//!
//! Handles UTF-8 correctly and tracks the 1-based line number the
//! tokenizer needs for diagnostics. CRLF and LF are both folded into a
//! single newline event.

pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0, line: 1 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Character at the cursor, or `'\0'` at end of input.
    pub fn current(&self) -> char {
        self.char_at(0)
    }

    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Lookahead one character past `current`.
    pub fn peek_next(&self) -> char {
        let Some(c) = self.source[self.position..].chars().next() else {
            return '\0';
        };
        self.source[self.position + c.len_utf8()..]
            .chars()
            .next()
            .unwrap_or('\0')
    }

    fn char_at(&self, byte_offset: usize) -> char {
        let pos = self.position + byte_offset;
        if pos >= self.source.len() {
            return '\0';
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consume the current character, tracking a CRLF or LF newline as
    /// a single line increment.
    pub fn advance(&mut self) -> char {
        let c = self.current();
        if c == '\0' {
            return c;
        }
        self.position += c.len_utf8();
        if c == '\r' && self.current() == '\n' {
            self.position += 1;
            self.line += 1;
        } else if c == '\n' {
            self.line += 1;
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_ascii() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.current(), 'a');
        assert_eq!(c.advance(), 'a');
        assert_eq!(c.current(), 'b');
        assert_eq!(c.advance(), 'b');
        assert!(c.is_at_end());
        assert_eq!(c.current(), '\0');
    }

    #[test]
    fn crlf_counts_as_one_line() {
        let mut c = Cursor::new("a\r\nb");
        c.advance(); // a
        assert_eq!(c.line(), 1);
        c.advance(); // \r\n
        assert_eq!(c.line(), 2);
        assert_eq!(c.current(), 'b');
    }

    #[test]
    fn peek_next_looks_two_ahead() {
        let c = Cursor::new("ab");
        assert_eq!(c.peek_next(), 'b');
    }
}
