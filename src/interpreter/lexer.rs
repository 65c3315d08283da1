use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens, double- or single-quoted, single-line.
    /// The stored text has the quotes stripped.
    #[regex(r#""[^"\r\n]*""#, strip_quotes)]
    #[regex(r"'[^'\r\n]*'", strip_quotes)]
    Text(String),
    /// `daca`
    #[token("daca")]
    Daca,
    /// `atunci`
    #[token("atunci")]
    Atunci,
    /// `altfel`
    #[token("altfel")]
    Altfel,
    /// `sf`
    #[token("sf")]
    Sf,
    /// `pentru`
    #[token("pentru")]
    Pentru,
    /// `executa`
    #[token("executa")]
    Executa,
    /// `cat`
    #[token("cat")]
    Cat,
    /// `timp`
    #[token("timp")]
    Timp,
    /// `repeta`
    #[token("repeta")]
    Repeta,
    /// `pana`
    #[token("pana")]
    Pana,
    /// `cand`
    #[token("cand")]
    Cand,
    /// `citeste`
    #[token("citeste")]
    Citeste,
    /// `scrie`
    #[token("scrie")]
    Scrie,
    /// `sau` (logical or)
    #[token("SAU")]
    #[token("sau")]
    Sau,
    /// `si` (logical and)
    #[token("SI")]
    #[token("si")]
    Si,
    /// `not` (logical not)
    #[token("NOT")]
    #[token("not")]
    Not,
    /// Identifier tokens; variable names such as `x` or `suma`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `<->` or `<-->`
    #[token("<->")]
    #[token("<-->")]
    SwapArrow,
    /// `<-`
    #[token("<-")]
    Arrow,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `√`
    #[token("\u{221a}")]
    Sqrt,
    /// `=`
    #[token("=")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Line breaks; skipped, but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal text without its first and last character.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
