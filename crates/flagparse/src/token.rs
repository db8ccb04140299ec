/// How a raw argv string was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `--name` (anything starting with two dashes).
    Long,
    /// `-n` or a cluster such as `-vq`.
    Short,
    /// Anything else, including `-` and the empty string.
    Value,
}

/// One classified argument string.
///
/// `kind` is computed once from `raw` when the token is built. Only `key` may
/// change afterwards, when an alias resolves to a definition's primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
    key: String,
    kind: TokenKind,
}

impl Token {
    /// Classify `raw` and strip its leading dashes into `key`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        let key = match kind {
            TokenKind::Long => raw[2..].to_string(),
            TokenKind::Short => raw[1..].to_string(),
            TokenKind::Value => raw.clone(),
        };
        Self { raw, key, kind }
    }

    /// The string as given, unmodified.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The name used for definition lookup.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_long(&self) -> bool {
        self.kind == TokenKind::Long
    }

    pub fn is_short(&self) -> bool {
        self.kind == TokenKind::Short
    }

    /// Whether this token names a flag or option (long or short).
    pub fn is_argument(&self) -> bool {
        self.is_long() || self.is_short()
    }

    pub fn is_value(&self) -> bool {
        !self.is_argument()
    }

    /// A short token carrying more than one character, e.g. `-vq`.
    pub fn can_explode(&self) -> bool {
        self.is_short() && self.key.chars().count() > 1
    }

    /// Split a cluster into one short token per character, left to right.
    ///
    /// Tokens that cannot explode come back unchanged as a single element.
    pub fn explode(self) -> Vec<Token> {
        if !self.can_explode() {
            return vec![self];
        }
        self.key.chars().map(|c| Token::new(format!("-{c}"))).collect()
    }

    pub(crate) fn rename(&mut self, key: &str) {
        if self.key != key {
            self.key = key.to_string();
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn classify(raw: &str) -> TokenKind {
    if raw.starts_with("--") {
        TokenKind::Long
    } else if raw.starts_with('-') && raw != "-" {
        TokenKind::Short
    } else {
        TokenKind::Value
    }
}
