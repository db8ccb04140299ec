use std::collections::VecDeque;

use crate::token::Token;

/// Streams [`Token`]s over a captured argv, expanding short-flag clusters.
///
/// `-vq` is produced as `-v` followed by `-q` before the next raw string is
/// looked at. The lexer never rejects input.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    raw: Vec<String>,
    pos: usize,
    pending: VecDeque<Token>,
    lookahead: Option<Token>,
}

impl Lexer {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            raw: argv.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.lookahead.is_none() {
            self.lookahead = self.produce();
        }
        self.lookahead.as_ref()
    }

    /// Whether the next token is a flag or option rather than a value.
    pub fn next_is_argument(&mut self) -> bool {
        self.peek().is_some_and(Token::is_argument)
    }

    /// True once every raw string and every exploded character is consumed.
    pub fn at_end(&self) -> bool {
        self.lookahead.is_none() && self.pending.is_empty() && self.pos >= self.raw.len()
    }

    fn produce(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }

        let raw = self.raw.get(self.pos)?;
        self.pos += 1;

        let token = Token::new(raw.as_str());
        if !token.can_explode() {
            return Some(token);
        }

        tracing::trace!(raw = token.raw(), "exploding short flag cluster");
        let mut parts = token.explode().into_iter();
        let first = parts.next();
        self.pending.extend(parts);
        first
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.lookahead.take().or_else(|| self.produce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn keys(lexer: Lexer) -> Vec<String> {
        lexer.map(|t| t.key().to_string()).collect()
    }

    #[test]
    fn empty_input_is_at_end() {
        let mut lexer = Lexer::new(Vec::<String>::new());
        assert!(lexer.at_end());
        assert!(lexer.peek().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn cluster_is_expanded_before_next_raw() {
        let lexer = Lexer::new(["-vq", "file", "--long"]);
        assert_eq!(keys(lexer), ["v", "q", "file", "long"]);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new(["-ab", "c"]);
        assert_eq!(lexer.peek().map(Token::key), Some("a"));
        assert_eq!(lexer.peek().map(Token::key), Some("a"));
        assert_eq!(lexer.next().map(|t| t.key().to_string()).as_deref(), Some("a"));
        assert_eq!(lexer.peek().map(Token::key), Some("b"));
        assert!(!lexer.at_end());
        assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Short));
        assert!(!lexer.next_is_argument());
        assert_eq!(lexer.next().map(|t| t.raw().to_string()).as_deref(), Some("c"));
        assert!(lexer.at_end());
    }

    #[test]
    fn at_end_accounts_for_pending_cluster_characters() {
        let mut lexer = Lexer::new(["-xy"]);
        lexer.next();
        assert!(!lexer.at_end());
        lexer.next();
        assert!(lexer.at_end());
    }

    #[test]
    fn peeked_token_still_counts_as_remaining() {
        let mut lexer = Lexer::new(["last"]);
        assert!(lexer.peek().is_some());
        assert!(!lexer.at_end());
        lexer.next();
        assert!(lexer.at_end());
    }
}
