/// Syntax tree node categories, a closed set mirroring the language
/// constructs. `Factor` is structural only: factors fold directly into
/// their enclosing `Expression`/`Term` during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Expression,
    Term,
    Factor,
    Literal,
    UnaryMinus,
    Operator,
    PrintStatement,
    VarDeclaration,
    Assignment,
    DataType,
    Identifier,
    StringLiteral,
    WhileStatement,
    IfStatement,
    ElifStatement,
    ElseStatement,
    Comparison,
    Comparator,
    StatementList,
}

/// A tagged tree node: category, optional literal text, and exclusively
/// owned children in source order. The parse tree is a strict tree — no
/// node is ever shared between parents.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn with_value(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}
