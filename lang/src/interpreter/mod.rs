mod environment;


pub use environment::Environment;

use crate::parser::ast::{Node, NodeKind};
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    UndeclaredVariable(String),
    UnassignedVariable(String),
    UnknownComparator(String),
    UnknownOperator(String),
    UnknownStatement(String),
    UnknownNode(String),
    MalformedNode(String),
    InvalidLiteral(String),
    DivisionByZero,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndeclaredVariable(name) => {
                write!(f, "Variable not declared: {}", name)
            }
            RuntimeError::UnassignedVariable(name) => {
                write!(f, "Variable used before assignment: {}", name)
            }
            RuntimeError::UnknownComparator(text) => {
                write!(f, "Invalid comparator '{}' in comparison", text)
            }
            RuntimeError::UnknownOperator(text) => {
                write!(f, "Invalid operator '{}' in expression", text)
            }
            RuntimeError::UnknownStatement(kind) => write!(f, "Unknown statement type: {}", kind),
            RuntimeError::UnknownNode(kind) => write!(f, "Unknown node type: {}", kind),
            RuntimeError::MalformedNode(kind) => write!(f, "Malformed {} node", kind),
            RuntimeError::InvalidLiteral(text) => {
                write!(f, "Invalid numeric literal '{}'", text)
            }
            RuntimeError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Tree-walking evaluator.
///
/// Owns the variable environment for exactly one run and writes `print`
/// output to the injected sink. Every failure mode is fatal to the run;
/// the first error unwinds to the caller.
pub struct Interpreter<W: Write> {
    environment: Environment,
    output: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(output: W) -> Self {
        Self {
            environment: Environment::new(),
            output,
        }
    }

    /// Execute a program root's statements in source order.
    pub fn run(&mut self, root: &Node) -> Result<(), RuntimeError> {
        if root.kind != NodeKind::Program {
            return Err(RuntimeError::UnknownNode(format!("{:?}", root.kind)));
        }
        for statement in &root.children {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, node: &Node) -> Result<(), RuntimeError> {
        match node.kind {
            NodeKind::VarDeclaration => self.execute_var_declaration(node),
            NodeKind::Assignment => self.execute_assignment(node),
            NodeKind::PrintStatement => self.execute_print_statement(node),
            NodeKind::IfStatement => self.execute_if_statement(node),
            NodeKind::WhileStatement => self.execute_while_statement(node),
            kind => Err(RuntimeError::UnknownStatement(format!("{:?}", kind))),
        }
    }

    fn execute_statement_list(&mut self, node: &Node) -> Result<(), RuntimeError> {
        for statement in &node.children {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_var_declaration(&mut self, node: &Node) -> Result<(), RuntimeError> {
        let name = node_value(child(node, 1)?)?;
        self.environment.declare(name);

        if let Some(initializer) = node.children.get(2) {
            let value = self.evaluate(initializer)?;
            self.environment.assign(name, value)?;
        }
        Ok(())
    }

    fn execute_assignment(&mut self, node: &Node) -> Result<(), RuntimeError> {
        let name = node_value(child(node, 0)?)?;
        if !self.environment.is_declared(name) {
            return Err(RuntimeError::UndeclaredVariable(name.to_string()));
        }

        let value = self.evaluate(child(node, 1)?)?;
        self.environment.assign(name, value)
    }

    fn execute_print_statement(&mut self, node: &Node) -> Result<(), RuntimeError> {
        let target = child(node, 0)?;
        if target.kind == NodeKind::StringLiteral {
            writeln!(self.output, "{}", node_value(target)?).ok();
        } else {
            let value = self.evaluate(target)?;
            writeln!(self.output, "> {}", value).ok();
        }
        Ok(())
    }

    fn execute_if_statement(&mut self, node: &Node) -> Result<(), RuntimeError> {
        if self.evaluate_condition(child(node, 0)?)? {
            return self.execute_statement_list(child(node, 1)?);
        }

        for clause in node.children.iter().skip(2) {
            match clause.kind {
                NodeKind::ElifStatement => {
                    if self.evaluate_condition(child(clause, 0)?)? {
                        return self.execute_statement_list(child(clause, 1)?);
                    }
                }
                NodeKind::ElseStatement => {
                    return self.execute_statement_list(child(clause, 0)?);
                }
                kind => return Err(RuntimeError::UnknownNode(format!("{:?}", kind))),
            }
        }
        Ok(())
    }

    fn execute_while_statement(&mut self, node: &Node) -> Result<(), RuntimeError> {
        while self.evaluate_condition(child(node, 0)?)? {
            self.execute_statement_list(child(node, 1)?)?;
        }
        Ok(())
    }

    fn evaluate_condition(&self, node: &Node) -> Result<bool, RuntimeError> {
        let left = self.evaluate(child(node, 0)?)?;
        let comparator = node_value(child(node, 1)?)?;
        let right = self.evaluate(child(node, 2)?)?;

        match comparator {
            "<" => Ok(left < right),
            ">" => Ok(left > right),
            "?" => Ok(left == right),
            "!" => Ok(left != right),
            other => Err(RuntimeError::UnknownComparator(other.to_string())),
        }
    }

    fn evaluate(&self, node: &Node) -> Result<i64, RuntimeError> {
        match node.kind {
            NodeKind::Identifier => self.environment.get(node_value(node)?),
            NodeKind::Expression => self.evaluate_expression(node),
            NodeKind::Term => self.evaluate_term(node),
            NodeKind::Factor => self.evaluate(child(node, 0)?),
            NodeKind::Literal => evaluate_literal(node),
            NodeKind::UnaryMinus => Ok(-self.evaluate(child(node, 0)?)?),
            kind => Err(RuntimeError::UnknownNode(format!("{:?}", kind))),
        }
    }

    /// Left-to-right fold over `first (op term)*` children with `+`/`-`.
    fn evaluate_expression(&self, node: &Node) -> Result<i64, RuntimeError> {
        let mut result = self.evaluate(child(node, 0)?)?;

        for pair in node.children[1..].chunks(2) {
            let (operator, operand) = match pair {
                [operator, operand] => (operator, operand),
                _ => return Err(RuntimeError::MalformedNode(format!("{:?}", node.kind))),
            };
            let right = self.evaluate(operand)?;
            result = match node_value(operator)? {
                "+" => result + right,
                "-" => result - right,
                op => return Err(RuntimeError::UnknownOperator(op.to_string())),
            };
        }

        Ok(result)
    }

    /// Left-to-right fold over `first (op factor)*` children with `*`/`/`.
    fn evaluate_term(&self, node: &Node) -> Result<i64, RuntimeError> {
        let mut result = self.evaluate(child(node, 0)?)?;

        for pair in node.children[1..].chunks(2) {
            let (operator, operand) = match pair {
                [operator, operand] => (operator, operand),
                _ => return Err(RuntimeError::MalformedNode(format!("{:?}", node.kind))),
            };
            let right = self.evaluate(operand)?;
            result = match node_value(operator)? {
                "*" => result * right,
                "/" => {
                    if right == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    // wrapping avoids the i64::MIN / -1 overflow panic
                    result.wrapping_div(right)
                }
                op => return Err(RuntimeError::UnknownOperator(op.to_string())),
            };
        }

        Ok(result)
    }
}

fn evaluate_literal(node: &Node) -> Result<i64, RuntimeError> {
    let text = node_value(node)?;
    // Float literals evaluate as integers: the fractional part is dropped.
    let integer_part = match text.split_once('.') {
        Some((whole, _)) => whole,
        None => text,
    };
    integer_part
        .parse::<i64>()
        .map_err(|_| RuntimeError::InvalidLiteral(text.to_string()))
}

fn child(node: &Node, index: usize) -> Result<&Node, RuntimeError> {
    node.children
        .get(index)
        .ok_or_else(|| RuntimeError::MalformedNode(format!("{:?}", node.kind)))
}

fn node_value(node: &Node) -> Result<&str, RuntimeError> {
    node.value
        .as_deref()
        .ok_or_else(|| RuntimeError::MalformedNode(format!("{:?}", node.kind)))
}
