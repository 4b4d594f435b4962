//! # Tokens
//!
//! Token types for the Tiny lexer.

use tiny_ast::Location;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source range.
    pub location: Location,
    /// Token text as written.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, location: Location, text: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            text: text.into(),
        }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal like `10`
    Number,
    /// `true`
    True,
    /// `false`
    False,

    /// Identifier like `count`
    Identifier,

    // Keywords
    /// `integer`
    IntegerType,
    /// `boolean`
    BooleanType,
    /// `read`
    Read,
    /// `output`
    Output,
    /// `while`
    While,
    /// `if`
    If,
    /// `else`
    Else,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Special
    /// Character no token starts with.
    Error,
    /// `/*` never closed.
    UnterminatedComment,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Keyword for `text`, if it is one.
    pub fn keyword(text: &str) -> Option<Self> {
        Some(match text {
            "integer" => Self::IntegerType,
            "boolean" => Self::BooleanType,
            "read" => Self::Read,
            "output" => Self::Output,
            "while" => Self::While,
            "if" => Self::If,
            "else" => Self::Else,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        })
    }

    /// Human-readable form for error messages.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Number => "integer",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Identifier => "identifier",
            Self::IntegerType => "'integer'",
            Self::BooleanType => "'boolean'",
            Self::Read => "'read'",
            Self::Output => "'output'",
            Self::While => "'while'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Bang => "'!'",
            Self::Eq => "'='",
            Self::EqEq => "'=='",
            Self::BangEq => "'!='",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::AmpAmp => "'&&'",
            Self::PipePipe => "'||'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Error => "invalid character",
            Self::UnterminatedComment => "unterminated comment",
            Self::Eof => "end of input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("integer"), Some(TokenKind::IntegerType));
        assert_eq!(TokenKind::keyword("While"), None);
        assert_eq!(TokenKind::keyword("count"), None);
    }
}
