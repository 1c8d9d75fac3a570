use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

fn style_of(token: Option<Token>) -> Style {
    let fg = match token {
        Some(Token::Number) | Some(Token::Bool) => Color::Cyan,
        Some(Token::Operator) => Color::Yellow,
        Some(Token::Comment) => Color::DarkGray,
        Some(Token::LParen) | Some(Token::RParen) | Some(Token::Separator) => Color::White,
        // Not part of the language.
        Some(Token::Word) | None => Color::Red,
    };
    Style::new().fg(fg)
}

/// Colours REPL input token by token.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut last = 0;

        let mut lexer = Token::lexer(line);
        while let Some(token) = lexer.next() {
            let span = lexer.span();
            if span.start > last {
                output.push((Style::new(), line[last..span.start].to_string()));
            }
            output.push((style_of(token.ok()), line[span.clone()].to_string()));
            last = span.end;
        }
        if last < line.len() {
            output.push((Style::new(), line[last..].to_string()));
        }

        output
    }
}
