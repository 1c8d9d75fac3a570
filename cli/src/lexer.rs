use logos::Logos;
use reedline::{ValidationResult, Validator};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"#[^\n]*")]
    Comment,

    #[token("true")]
    #[token("false")]
    Bool,

    #[regex(r"0[bB][0-9A-Za-z_]*|0[xXhH][0-9A-Za-z_]*|[0-9][0-9A-Za-z_]*")]
    Number,

    #[regex(r"\|\||&&|==|!=|<=|>=|[-+*/%&|^!<>?:]")]
    Operator,

    #[token(";")]
    Separator,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 1)]
    Word,
}

/// Net number of open parentheses in `buffer`.
///
/// Returns `None` when the buffer contains something the lexer does not know;
/// the parser will report it, so there is no point waiting for more input.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}

/// Keeps the REPL reading while parentheses are still open.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
