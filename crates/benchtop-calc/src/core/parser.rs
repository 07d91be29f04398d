//! Tokenizer and recursive descent parser for keypad expressions

use crate::core::{CalcError, CalcResult, Operation};

/// Deepest nesting of parentheses and unary signs the parser accepts
pub const MAX_DEPTH: usize = 256;

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator (also used for unary signs)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: Self, op: Operation, right: Self) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: Self) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => {
                let op = Operation::from_char(ch)
                    .ok_or_else(|| CalcError::parse(format!("Unexpected character: '{ch}'")))?;
                self.advance();
                Token::Operator(op)
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        if num_str == "." {
            return Err(CalcError::parse("Invalid number: '.'"));
        }
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::parse(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | primary
/// primary    ::= NUMBER | '(' expression ')'
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> CalcResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        Ok(())
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(AstNode::negate(inner))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .cloned()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(n)),
            Token::LeftParen => {
                self.descend()?;
                let expr = self.parse_expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            other => Err(CalcError::parse(format!("Unexpected token: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_single_number() {
        let tokens = Tokenizer::new("42").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn test_tokenize_decimal_forms() {
        assert_eq!(
            Tokenizer::new("3.25").tokenize().unwrap(),
            vec![Token::Number(3.25)]
        );
        assert_eq!(
            Tokenizer::new(".5").tokenize().unwrap(),
            vec![Token::Number(0.5)]
        );
        assert_eq!(
            Tokenizer::new("5.").tokenize().unwrap(),
            vec![Token::Number(5.0)]
        );
    }

    #[test]
    fn test_tokenize_leading_zeros() {
        // the "00" key makes these reachable from the keypad
        assert_eq!(
            Tokenizer::new("007").tokenize().unwrap(),
            vec![Token::Number(7.0)]
        );
    }

    #[test]
    fn test_tokenize_lone_dot_fails() {
        assert!(matches!(
            Tokenizer::new(".").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_double_dot_splits() {
        let tokens = Tokenizer::new("1.2.3").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    #[test]
    fn test_tokenize_operators_and_parens() {
        let tokens = Tokenizer::new("(1+2)*3/4-5").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                Token::Number(1.0),
                Token::Operator(Operation::Add),
                Token::Number(2.0),
                Token::RightParen,
                Token::Operator(Operation::Multiply),
                Token::Number(3.0),
                Token::Operator(Operation::Divide),
                Token::Number(4.0),
                Token::Operator(Operation::Subtract),
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_code() {
        for input in ["__import__('os')", "2 % 3", "2 ** 3", "x + 1", "2 ^ 3"] {
            assert!(
                matches!(
                    Tokenizer::new(input).tokenize(),
                    Err(CalcError::ParseError(_))
                ),
                "{input} should not tokenize"
            );
        }
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_precedence_mul_over_add() {
        let ast = Parser::parse_str("2+3*4").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(2.0),
                Operation::Add,
                AstNode::binary(
                    AstNode::number(3.0),
                    Operation::Multiply,
                    AstNode::number(4.0)
                )
            )
        );
    }

    #[test]
    fn test_parse_left_associative_subtraction() {
        // 10 - 4 - 3 = (10 - 4) - 3
        let ast = Parser::parse_str("10-4-3").unwrap();
        match ast {
            AstNode::BinaryOp {
                left,
                op: Operation::Subtract,
                right,
            } => {
                assert_eq!(*right, AstNode::Number(3.0));
                assert!(matches!(
                    *left,
                    AstNode::BinaryOp {
                        op: Operation::Subtract,
                        ..
                    }
                ));
            }
            other => panic!("Expected Subtract at top level, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_parentheses() {
        let ast = Parser::parse_str("(2+3)*4").unwrap();
        assert!(matches!(
            ast,
            AstNode::BinaryOp {
                op: Operation::Multiply,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_unary_signs() {
        assert_eq!(
            Parser::parse_str("-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::number(5.0));
        assert_eq!(
            Parser::parse_str("--5").unwrap(),
            AstNode::negate(AstNode::negate(AstNode::number(5.0)))
        );
        assert!(Parser::parse_str("3*-2").is_ok());
        assert!(Parser::parse_str("3+-2").is_ok());
    }

    #[test]
    fn test_parse_empty_expression() {
        assert_eq!(Parser::parse_str(""), Err(CalcError::EmptyExpression));
        assert_eq!(Parser::parse_str("   "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["(2+3", "2+3)", "2+", "2+*3", "*2", "()", "2(3)", "(2)3", "1 2"] {
            assert!(
                matches!(Parser::parse_str(input), Err(CalcError::ParseError(_))),
                "{input} should be a parse error"
            );
        }
    }

    #[test]
    fn test_parse_depth_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            Parser::parse_str(&deep),
            Err(CalcError::ParseError(_))
        ));

        let ok = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(Parser::parse_str(&ok).unwrap(), AstNode::Number(1.0));

        let signs = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert!(Parser::parse_str(&signs).is_err());
    }

    #[test]
    fn test_parser_parse_empty_tokens() {
        let mut parser = Parser::new(vec![]);
        assert_eq!(parser.parse(), Err(CalcError::EmptyExpression));
    }
}
