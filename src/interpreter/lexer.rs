use logos::Logos;
use tracing::{debug, trace};

/// The tag of a lexical token.
///
/// Keywords are listed as exact tokens so that they win over the identifier
/// pattern on an equal-length match, while longer words such as `letter` or
/// `exits` remain identifiers. Any character that matches no variant is
/// skipped by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f\x0B]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Identifier tokens; a letter followed by letters or digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// `let`
    #[token("let")]
    Let,
    /// `exit`
    #[token("exit")]
    Exit,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Marks the end of the token sequence. Never matched from source text;
    /// [`tokenize`] appends exactly one.
    EndOfInput,
}

impl TokenKind {
    /// A short human-readable name used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Integer => "integer literal",
            Self::Identifier => "identifier",
            Self::Let => "'let'",
            Self::Exit => "'exit'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Equals => "'='",
            Self::Semicolon => "';'",
            Self::NewLine => "newline",
            Self::EndOfInput => "end of input",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A classified lexical unit together with the text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text; empty for [`TokenKind::EndOfInput`].
    pub text: String,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Creates the end marker.
    #[must_use]
    pub const fn end_of_input(line: usize) -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: String::new(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer | TokenKind::Identifier => {
                write!(f, "{} '{}'", self.kind.describe(), self.text)
            },
            kind => write!(f, "{}", kind.describe()),
        }
    }
}

/// Converts source text into its full token sequence.
///
/// Whitespace is skipped and characters that start no token are silently
/// discarded. The returned vector always ends with exactly one
/// [`TokenKind::EndOfInput`] token.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("let x = 1;").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Equals,
///             TokenKind::Integer,
///             TokenKind::Semicolon,
///             TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), lexer.extras.line)),
            Err(()) => {
                trace!(line = lexer.extras.line,
                       skipped = lexer.slice(),
                       "skipping unrecognized input");
            },
        }
    }

    tokens.push(Token::end_of_input(lexer.extras.line));
    debug!(count = tokens.len(), "tokenized source");
    tokens
}
