#![deny(warnings)]

use crate::ops::Operator;
use std::str::SplitWhitespace;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RpnToken<'a> {
    Op(Operator),
    // not yet validated, the evaluator decides if it's a number
    Operand(&'a str),
}

impl<'a> RpnToken<'a> {
    pub fn classify(lexeme: &'a str) -> RpnToken<'a> {
        match lexeme.parse::<Operator>() {
            Ok(op) => RpnToken::Op(op),
            Err(_) => RpnToken::Operand(lexeme),
        }
    }
}

/// Splits on runs of whitespace, yielding each lexeme with its token.
pub struct RpnTokenizer<'a> {
    src: SplitWhitespace<'a>,
}

impl<'a> RpnTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        RpnTokenizer{src: source.split_whitespace()}
    }
}

impl<'a> Iterator for RpnTokenizer<'a> {
    type Item = (&'a str, RpnToken<'a>);
    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(|lexeme| (lexeme, RpnToken::classify(lexeme)))
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{RpnToken, RpnTokenizer};
    use crate::ops::Operator;

    #[test]
    fn basic_tokens() {
        let tokens = RpnTokenizer::new("5 1 2 + 4 * + 3 -")
            .map(|(_, t)| t)
            .collect::<Vec<_>>();
        let expect = [
            RpnToken::Operand("5"),
            RpnToken::Operand("1"),
            RpnToken::Operand("2"),
            RpnToken::Op(Operator::Add),
            RpnToken::Operand("4"),
            RpnToken::Op(Operator::Mul),
            RpnToken::Op(Operator::Add),
            RpnToken::Operand("3"),
            RpnToken::Op(Operator::Sub),
        ];
        assert_eq!(tokens, expect);
    }

    #[test]
    fn whitespace_runs() {
        let lexemes = RpnTokenizer::new("  3\t\t4 \n /  ")
            .map(|(lexeme, _)| lexeme)
            .collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["3", "4", "/"]);
        assert_eq!(RpnTokenizer::new("   ").next(), None);
    }

    #[test]
    fn operators_need_exact_text() {
        assert_eq!(RpnToken::classify("-3"), RpnToken::Operand("-3"));
        assert_eq!(RpnToken::classify("+4"), RpnToken::Operand("+4"));
        assert_eq!(RpnToken::classify("**"), RpnToken::Operand("**"));
        assert_eq!(RpnToken::classify("/"), RpnToken::Op(Operator::Div));
    }
}
