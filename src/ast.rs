use std::fmt;

/// Bottom-up construction of trees.
///
/// Used by embedders that produce trees programmatically and by the
/// interchange loader.
pub mod builder;
/// The serialized tree form emitted by grammar-driven parsers.
///
/// Parsers describe nodes with string identifiers (`#addition`, `token`, ...).
/// This module decodes that form and converts it into an [`Ast`].
pub mod raw;

pub use builder::{AstBuilder, Pending};
pub use raw::RawNode;

/// The operation or value a node represents.
///
/// The set is closed: evaluation is an exhaustive match over these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Function call. The first child is the identifier token naming the
    /// function, the remaining children are its arguments.
    Function,
    /// Unary negation of the single child.
    Negative,
    /// `left + right`.
    Addition,
    /// `left - right`.
    Subtraction,
    /// `left * right`.
    Multiplication,
    /// `left / right`.
    Division,
    /// `left ^ right`.
    Power,
    /// `left % right`.
    Modulo,
    /// Explicit parenthesisation of the single child.
    Group,
    /// Variable reference. The single child is the identifier token naming
    /// the variable.
    Variable,
    /// Leaf carrying a [`Token`].
    Token,
}

impl NodeKind {
    /// Returns the number of children a node of this kind must have, or
    /// `None` when the count varies.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::Division.arity(), Some(2));
    /// assert_eq!(NodeKind::Function.arity(), None);
    /// ```
    #[must_use]
    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Function => None,
            Self::Negative | Self::Group | Self::Variable => Some(1),
            Self::Addition
            | Self::Subtraction
            | Self::Multiplication
            | Self::Division
            | Self::Power
            | Self::Modulo => Some(2),
            Self::Token => Some(0),
        }
    }

    /// Returns `true` for the six binary arithmetic kinds.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self.arity(), Some(2))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Negative => "negative",
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Power => "power",
            Self::Modulo => "modulo",
            Self::Group => "group",
            Self::Variable => "variable",
            Self::Token => "token",
        };
        write!(f, "{s}")
    }
}

/// Sub-classification of a token leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A numeric literal such as `3.5` or `1e3`.
    Number,
    /// A named constant such as `PI`.
    Constant,
    /// A function or variable name.
    Identifier,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Constant => write!(f, "constant"),
            Self::Identifier => write!(f, "identifier"),
        }
    }
}

/// The payload of a [`NodeKind::Token`] node: its class and raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    class: TokenClass,
    value: String,
}

impl Token {
    /// Creates a token of the given class.
    #[must_use]
    pub fn new(class: TokenClass, value: impl Into<String>) -> Self {
        Self { class,
               value: value.into() }
    }

    /// The token class.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        self.class
    }

    /// The raw token text, exactly as the parser produced it.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Index of a node inside its [`Ast`].
///
/// Identifiers are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single node of the tree.
///
/// Children are stored in order; the parent link is a non-owning index and is
/// `None` only for the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind:     NodeKind,
    children: Vec<NodeId>,
    parent:   Option<NodeId>,
    token:    Option<Token>,
}

impl Node {
    pub(crate) const fn new(kind: NodeKind, children: Vec<NodeId>, token: Option<Token>) -> Self {
        Self { kind,
               children,
               parent: None,
               token }
    }

    /// The kind of the node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The ordered children of the node.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The enclosing node, or `None` at the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The token payload. Present exactly for [`NodeKind::Token`] nodes.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub(crate) const fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}

/// A parsed arithmetic expression.
///
/// The tree owns every node in a flat arena. Nodes refer to each other by
/// [`NodeId`], which keeps parent links free of ownership cycles. Trees are
/// read-only once built; use [`AstBuilder`] or [`Ast::from_json`] to create
/// one.
///
/// # Example
/// ```
/// use reckon::ast::{AstBuilder, NodeKind};
///
/// let mut builder = AstBuilder::new();
/// let three = builder.number("3");
/// let four = builder.number("4");
/// let sum = builder.node(NodeKind::Addition, vec![three, four]);
/// let ast = builder.finish(sum);
///
/// let root = ast.root();
/// assert_eq!(ast.node(root).kind(), NodeKind::Addition);
/// assert_eq!(ast.parent(root), None);
///
/// let right = ast.children(root)[1];
/// assert_eq!(ast.parent(right), Some(root));
/// assert_eq!(ast.child_index(right), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    root:  NodeId,
}

impl Ast {
    pub(crate) const fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The root node of the expression.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given identifier.
    ///
    /// # Panics
    /// Panics if `id` was not issued for this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The ordered children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// The parent of `id`, or `None` at the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// The position of `id` among its parent's children, or `None` at the
    /// root.
    #[must_use]
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    /// Number of nodes stored in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a tree produced by [`AstBuilder::finish`], which
    /// holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
