use crate::ast::{Ast, Node, NodeId, NodeKind, Token, TokenClass};

/// A node that has been created but not yet attached to a parent.
///
/// The handle is deliberately neither `Clone` nor `Copy`: attaching it moves
/// it, so every node ends up with at most one parent.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending node must be attached to a parent or finished as the root"]
pub struct Pending(NodeId);

impl Pending {
    /// The identifier the node will have in the finished tree.
    pub const fn id(&self) -> NodeId {
        self.0
    }
}

/// Builds an [`Ast`] bottom-up.
///
/// Leaves are created first, then combined into interior nodes; parent links
/// are recorded as children are attached. The builder does not check that a
/// node has the number of children its kind requires; the evaluator reports
/// such trees as malformed.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{AstBuilder, NodeKind},
///     context::Context,
///     evaluate,
/// };
///
/// // sum(1, 2) * 3
/// let mut b = AstBuilder::new();
/// let args = vec![b.number("1"), b.number("2")];
/// let call = b.function("sum", args);
/// let three = b.number("3");
/// let product = b.node(NodeKind::Multiplication, vec![call, three]);
/// let ast = b.finish(product);
///
/// assert_eq!(evaluate(&ast, &Context::new()), Ok(9.0));
/// ```
#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<Node>,
}

impl AstBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a token leaf of the given class.
    pub fn token(&mut self, class: TokenClass, value: impl Into<String>) -> Pending {
        self.push(Node::new(NodeKind::Token, Vec::new(), Some(Token::new(class, value))))
    }

    /// Creates a number literal leaf. The text is kept verbatim and parsed
    /// during evaluation.
    pub fn number(&mut self, text: impl Into<String>) -> Pending {
        self.token(TokenClass::Number, text)
    }

    /// Creates a named constant leaf.
    pub fn constant(&mut self, name: impl Into<String>) -> Pending {
        self.token(TokenClass::Constant, name)
    }

    /// Creates an identifier leaf.
    pub fn identifier(&mut self, name: impl Into<String>) -> Pending {
        self.token(TokenClass::Identifier, name)
    }

    /// Creates an interior node of `kind` that owns `children` in order.
    pub fn node(&mut self, kind: NodeKind, children: Vec<Pending>) -> Pending {
        let id = NodeId::new(self.nodes.len());
        let children = children.into_iter()
                               .map(|Pending(child)| {
                                   self.nodes[child.index()].set_parent(id);
                                   child
                               })
                               .collect();
        self.push(Node::new(kind, children, None))
    }

    /// Creates a function call node: an identifier leaf named `name`
    /// followed by `arguments`.
    pub fn function(&mut self, name: impl Into<String>, arguments: Vec<Pending>) -> Pending {
        let mut children = Vec::with_capacity(arguments.len() + 1);
        children.push(self.identifier(name));
        children.extend(arguments);
        self.node(NodeKind::Function, children)
    }

    /// Creates a variable reference node wrapping an identifier leaf.
    pub fn variable(&mut self, name: impl Into<String>) -> Pending {
        let identifier = self.identifier(name);
        self.node(NodeKind::Variable, vec![identifier])
    }

    /// Finishes the tree with `root` as its root node.
    ///
    /// Nodes that were created but never attached stay in the arena, but are
    /// unreachable from the root and never visited.
    #[must_use]
    pub fn finish(self, root: Pending) -> Ast {
        Ast::from_parts(self.nodes, root.0)
    }

    fn push(&mut self, node: Node) -> Pending {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        Pending(id)
    }
}
