pub mod ast;


use crate::lexer::{Lexer, Span, Token, TokenKind};
use ast::{Node, NodeKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

/// Recursive-descent parser over the scanned token sequence.
///
/// Holds the current token plus one token of lookahead; deeper read-ahead
/// (for block-termination and clause decisions) goes through the lexer's
/// offset peek. Indentation-delimited blocks are resolved by tracking the
/// nesting depth explicitly: a block body expects exactly `depth` `Indent`
/// tokens before each of its statements.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    next: Token,
    ast: Option<Node>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let next = lexer.peek_token(0);
        Self {
            lexer,
            current,
            next,
            ast: None,
        }
    }

    /// Parse a whole program: statements separated by newlines, terminated
    /// by the `run` keyword on its own line.
    pub fn parse(&mut self) -> Result<&Node, ParseError> {
        let mut program = Node::new(NodeKind::Program);

        while self.current.kind != TokenKind::Eof && self.current.text != "run" {
            program.add_child(self.parse_statement(0)?);
            self.eat(TokenKind::Newline)?;
        }
        self.eat(TokenKind::Keyword)?; // run
        self.eat(TokenKind::Newline)?;

        Ok(self.ast.insert(program))
    }

    /// The most recently parsed program root, if any.
    pub fn ast(&self) -> Option<&Node> {
        self.ast.as_ref()
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
        self.next = self.lexer.peek_token(0);
    }

    fn eat(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current.kind == expected {
            self.advance();
            return Ok(());
        }
        Err(ParseError {
            message: format!(
                "Expected {:?}, found {:?} '{}'",
                expected, self.current.kind, self.current.text
            ),
            span: self.current.span,
        })
    }

    fn parse_statement(&mut self, depth: usize) -> Result<Node, ParseError> {
        if self.current.kind == TokenKind::Keyword {
            match self.current.text.as_str() {
                "var" => return self.parse_var_declaration(),
                "print" => return self.parse_print_statement(),
                "if" => return self.parse_if_statement(depth),
                "while" => return self.parse_while_statement(depth),
                _ => {}
            }
        } else if self.current.kind == TokenKind::Identifier {
            return self.parse_assignment();
        }

        Err(ParseError {
            message: format!(
                "Unexpected statement start: {:?} '{}'",
                self.current.kind, self.current.text
            ),
            span: self.current.span,
        })
    }

    fn parse_var_declaration(&mut self) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // var
        let data_type = self.parse_data_type()?;
        let identifier = self.parse_identifier()?;

        let mut node = Node::new(NodeKind::VarDeclaration);
        node.add_child(data_type);
        node.add_child(identifier);

        if self.current.kind == TokenKind::Operator {
            self.eat(TokenKind::Operator)?; // '='
            node.add_child(self.parse_expression()?);
        }

        Ok(node)
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let identifier = self.parse_identifier()?;
        self.eat(TokenKind::Operator)?; // '='
        let expression = self.parse_expression()?;

        let mut node = Node::new(NodeKind::Assignment);
        node.add_child(identifier);
        node.add_child(expression);
        Ok(node)
    }

    fn parse_print_statement(&mut self) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // print

        let mut node = Node::new(NodeKind::PrintStatement);
        if self.current.kind == TokenKind::String {
            node.add_child(Node::with_value(NodeKind::StringLiteral, self.current.text.clone()));
            self.eat(TokenKind::String)?;
        } else {
            node.add_child(self.parse_expression()?);
        }

        Ok(node)
    }

    fn parse_data_type(&mut self) -> Result<Node, ParseError> {
        if self.current.kind != TokenKind::Keyword
            || (self.current.text != "int" && self.current.text != "float")
        {
            return Err(ParseError {
                message: format!(
                    "Expected data type (int or float), found {:?} '{}'",
                    self.current.kind, self.current.text
                ),
                span: self.current.span,
            });
        }
        let node = Node::with_value(NodeKind::DataType, self.current.text.clone());
        self.advance();
        Ok(node)
    }

    fn parse_identifier(&mut self) -> Result<Node, ParseError> {
        if self.current.kind != TokenKind::Identifier {
            return Err(ParseError {
                message: format!(
                    "Expected identifier, found {:?} '{}'",
                    self.current.kind, self.current.text
                ),
                span: self.current.span,
            });
        }
        let node = Node::with_value(NodeKind::Identifier, self.current.text.clone());
        self.advance();
        Ok(node)
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut node = Node::new(NodeKind::Expression);
        node.add_child(self.parse_term()?);

        while self.current.kind == TokenKind::Operator
            && (self.current.text == "+" || self.current.text == "-")
        {
            node.add_child(Node::with_value(NodeKind::Operator, self.current.text.clone()));
            self.advance();
            node.add_child(self.parse_term()?);
        }

        Ok(node)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut node = Node::new(NodeKind::Term);
        node.add_child(self.parse_factor()?);

        while self.current.kind == TokenKind::Operator
            && (self.current.text == "*" || self.current.text == "/")
        {
            node.add_child(Node::with_value(NodeKind::Operator, self.current.text.clone()));
            self.advance();
            node.add_child(self.parse_factor()?);
        }

        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        if self.current.kind == TokenKind::Operator && self.current.text == "-" {
            self.advance();
            let mut node = Node::new(NodeKind::UnaryMinus);
            node.add_child(self.parse_factor()?);
            return Ok(node);
        }

        match self.current.kind {
            TokenKind::Integer | TokenKind::Float => {
                let node = Node::with_value(NodeKind::Literal, self.current.text.clone());
                self.advance();
                Ok(node)
            }
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::Parenthesis => {
                self.eat(TokenKind::Parenthesis)?; // '('
                let node = self.parse_expression()?;
                self.eat(TokenKind::Parenthesis)?; // ')'
                Ok(node)
            }
            _ => Err(ParseError {
                message: format!(
                    "Expected a factor, found {:?} '{}'",
                    self.current.kind, self.current.text
                ),
                span: self.current.span,
            }),
        }
    }

    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_expression()?;
        let comparator = self.parse_comparator()?;
        let right = self.parse_expression()?;

        let mut node = Node::new(NodeKind::Comparison);
        node.add_child(left);
        node.add_child(comparator);
        node.add_child(right);
        Ok(node)
    }

    fn parse_comparator(&mut self) -> Result<Node, ParseError> {
        if self.current.kind != TokenKind::Comparator {
            return Err(ParseError {
                message: format!(
                    "Expected comparator (<, >, ?, or !), found {:?} '{}'",
                    self.current.kind, self.current.text
                ),
                span: self.current.span,
            });
        }
        let node = Node::with_value(NodeKind::Comparator, self.current.text.clone());
        self.advance();
        Ok(node)
    }

    fn parse_if_statement(&mut self, depth: usize) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // if
        self.eat(TokenKind::Parenthesis)?;
        let condition = self.parse_comparison()?;
        self.eat(TokenKind::Parenthesis)?;
        self.eat(TokenKind::Colon)?;
        self.eat(TokenKind::Newline)?;
        let body = self.parse_statement_list(depth)?;

        let mut node = Node::new(NodeKind::IfStatement);
        node.add_child(condition);
        node.add_child(body);

        loop {
            match self.peek_clause_keyword(depth).as_deref() {
                Some("elif") => {
                    self.skip_clause_prefix(depth)?;
                    node.add_child(self.parse_elif_statement(depth)?);
                }
                Some("else") => {
                    self.skip_clause_prefix(depth)?;
                    node.add_child(self.parse_else_statement(depth)?);
                    break; // only one else clause
                }
                _ => break,
            }
        }

        Ok(node)
    }

    fn parse_elif_statement(&mut self, depth: usize) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // elif
        self.eat(TokenKind::Parenthesis)?;
        let condition = self.parse_comparison()?;
        self.eat(TokenKind::Parenthesis)?;
        self.eat(TokenKind::Colon)?;
        self.eat(TokenKind::Newline)?;
        let body = self.parse_statement_list(depth)?;

        let mut node = Node::new(NodeKind::ElifStatement);
        node.add_child(condition);
        node.add_child(body);
        Ok(node)
    }

    fn parse_else_statement(&mut self, depth: usize) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // else
        self.eat(TokenKind::Colon)?;
        self.eat(TokenKind::Newline)?;
        let body = self.parse_statement_list(depth)?;

        let mut node = Node::new(NodeKind::ElseStatement);
        node.add_child(body);
        Ok(node)
    }

    fn parse_while_statement(&mut self, depth: usize) -> Result<Node, ParseError> {
        self.eat(TokenKind::Keyword)?; // while
        self.eat(TokenKind::Parenthesis)?;
        let condition = self.parse_comparison()?;
        self.eat(TokenKind::Parenthesis)?;
        self.eat(TokenKind::Colon)?;
        self.eat(TokenKind::Newline)?;
        let body = self.parse_statement_list(depth)?;

        let mut node = Node::new(NodeKind::WhileStatement);
        node.add_child(condition);
        node.add_child(body);
        Ok(node)
    }

    /// Parse a block body one level deeper than `depth`. Each statement line
    /// must start with exactly the new depth's worth of `Indent` tokens; the
    /// block ends when the line after the pending newline is indented less.
    /// The final newline is left for the enclosing context.
    fn parse_statement_list(&mut self, depth: usize) -> Result<Node, ParseError> {
        let mut node = Node::new(NodeKind::StatementList);
        let depth = depth + 1;

        while self.current.kind == TokenKind::Indent {
            for _ in 0..depth {
                self.eat(TokenKind::Indent)?;
            }

            node.add_child(self.parse_statement(depth)?);

            if self.indent_run_ahead() < depth {
                break;
            }
            self.eat(TokenKind::Newline)?;
        }

        Ok(node)
    }

    /// Number of consecutive `Indent` tokens immediately after the current
    /// token.
    fn indent_run_ahead(&self) -> usize {
        if self.next.kind != TokenKind::Indent {
            return 0;
        }
        let mut run = 1;
        while self.lexer.peek_token(run).kind == TokenKind::Indent {
            run += 1;
        }
        run
    }

    /// If the line after the pending newline consists of exactly `depth`
    /// `Indent` tokens followed by `elif` or `else`, return that keyword.
    /// With an empty body the clause keyword may already be the current
    /// token.
    fn peek_clause_keyword(&self, depth: usize) -> Option<String> {
        if self.current.kind == TokenKind::Keyword {
            if self.current.text == "elif" || self.current.text == "else" {
                return Some(self.current.text.clone());
            }
            return None;
        }

        if self.current.kind != TokenKind::Newline || self.indent_run_ahead() != depth {
            return None;
        }

        let token = self.lexer.peek_token(depth);
        if token.kind == TokenKind::Keyword && (token.text == "elif" || token.text == "else") {
            return Some(token.text);
        }
        None
    }

    fn skip_clause_prefix(&mut self, depth: usize) -> Result<(), ParseError> {
        if self.current.kind == TokenKind::Newline {
            self.eat(TokenKind::Newline)?;
            for _ in 0..depth {
                self.eat(TokenKind::Indent)?;
            }
        }
        Ok(())
    }
}
