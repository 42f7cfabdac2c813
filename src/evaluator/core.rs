use tracing::{debug, trace, warn};

use crate::{
    ast::{Ast, Node, NodeId, NodeKind, TokenClass},
    context::{Context, constants::host_constant},
    error::{EvalError, EvalResult},
    evaluator::options::EvalOptions,
    util::{num::parse_literal, stack},
};

/// Walks a tree and computes its value.
///
/// The evaluator borrows a [`Context`] for name resolution and holds no other
/// state, so one evaluator can be reused for any number of trees and
/// evaluating the same tree twice yields the same result. Trees are never
/// modified.
///
/// ## Usage
///
/// Use [`crate::evaluate`] for the common case. Construct an `Evaluator`
/// directly to change the [`EvalOptions`].
///
/// # Example
/// ```
/// use reckon::{
///     ast::{AstBuilder, NodeKind},
///     context::Context,
///     error::EvalError,
///     evaluator::{EvalOptions, Evaluator},
/// };
///
/// // -(-(-(1)))
/// let mut b = AstBuilder::new();
/// let mut node = b.number("1");
/// for _ in 0..3 {
///     node = b.node(NodeKind::Negative, vec![node]);
/// }
/// let ast = b.finish(node);
///
/// let context = Context::new();
/// assert_eq!(Evaluator::new(&context).evaluate(&ast), Ok(-1.0));
///
/// let shallow = Evaluator::with_options(&context, EvalOptions::default().with_max_depth(2));
/// assert_eq!(shallow.evaluate(&ast),
///            Err(EvalError::RecursionLimitExceeded { max_depth: 2 }));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<'ctx> {
    context: &'ctx Context,
    options: EvalOptions,
}

impl<'ctx> Evaluator<'ctx> {
    /// Creates an evaluator with the default options.
    #[must_use]
    pub fn new(context: &'ctx Context) -> Self {
        Self::with_options(context, EvalOptions::default())
    }

    /// Creates an evaluator with explicit options.
    #[must_use]
    pub const fn with_options(context: &'ctx Context, options: EvalOptions) -> Self {
        Self { context, options }
    }

    /// The context names are resolved against.
    #[must_use]
    pub const fn context(&self) -> &'ctx Context {
        self.context
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluates a whole tree, starting at its root.
    ///
    /// # Errors
    /// The first [`EvalError`] raised anywhere in the tree. No partial result
    /// is produced.
    pub fn evaluate(&self, ast: &Ast) -> EvalResult<f64> {
        debug!(nodes = ast.len(), "evaluating expression");

        let result = self.visit(ast, ast.root(), 0);

        match &result {
            Ok(value) => debug!(value, "evaluation finished"),
            Err(err) => debug!(%err, "evaluation failed"),
        }
        result
    }

    /// Evaluates the subtree rooted at `id`.
    ///
    /// The evaluator dispatches on the node kind. `depth` is the depth of `id`
    /// below the root; children are visited at `depth + 1`.
    ///
    /// # Parameters
    /// - `ast`: The tree `id` belongs to.
    /// - `id`: The node to evaluate.
    /// - `depth`: Depth of `id`, used for the recursion limit.
    ///
    /// # Returns
    /// The value of the subtree.
    pub(crate) fn visit(&self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<f64> {
        stack::guarded(|| self.visit_node(ast, id, depth))
    }

    fn visit_node(&self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<f64> {
        self.enter(depth)?;

        let node = ast.node(id);
        trace!(kind = %node.kind(), depth, "visiting node");

        match node.kind() {
            NodeKind::Token => self.eval_token(node),
            NodeKind::Negative => Ok(-self.eval_only_child(ast, id, depth)?),
            NodeKind::Group => self.eval_only_child(ast, id, depth),
            NodeKind::Variable => self.eval_variable(ast, id),
            NodeKind::Function => self.eval_function_call(ast, id, depth),
            NodeKind::Addition
            | NodeKind::Subtraction
            | NodeKind::Multiplication
            | NodeKind::Division
            | NodeKind::Power
            | NodeKind::Modulo => self.eval_binary_op(ast, id, depth),
        }
    }

    /// Checks the depth limit and the cancellation flag before a node is
    /// visited.
    fn enter(&self, depth: usize) -> EvalResult<()> {
        if depth >= self.options.max_depth {
            warn!(max_depth = self.options.max_depth, "evaluation exceeded the maximum depth");
            return Err(EvalError::RecursionLimitExceeded { max_depth: self.options.max_depth });
        }
        if self.options.is_cancelled() {
            warn!(depth, "evaluation cancelled");
            return Err(EvalError::Cancelled);
        }
        Ok(())
    }

    /// Evaluates a token leaf.
    ///
    /// Numbers are parsed with whitespace removed. Constants resolve to a host
    /// constant first and to the context's constant table otherwise.
    /// Identifiers have no numeric value; they are read by their enclosing
    /// function or variable node through [`Evaluator::identifier`].
    fn eval_token(&self, node: &Node) -> EvalResult<f64> {
        let token = node.token()
                        .ok_or_else(|| EvalError::malformed(NodeKind::Token, "token has no payload"))?;

        match token.class() {
            TokenClass::Number => parse_literal(token.value()),
            TokenClass::Constant => self.eval_constant(token.value()),
            TokenClass::Identifier => {
                Err(EvalError::malformed(NodeKind::Token,
                                         format!("identifier '{}' cannot be used as a value",
                                                 token.value())))
            },
        }
    }

    fn eval_constant(&self, name: &str) -> EvalResult<f64> {
        host_constant(name).map_or_else(|| self.context.get_constant(name), Ok)
    }

    fn eval_variable(&self, ast: &Ast, id: NodeId) -> EvalResult<f64> {
        let [name] = Self::operands(ast, id)?;
        let name = Self::identifier(ast, name, NodeKind::Variable)?;

        self.context.get_variable(name)
    }

    fn eval_only_child(&self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<f64> {
        let [child] = Self::operands(ast, id)?;
        self.visit(ast, child, depth + 1)
    }

    /// Returns the children of `id`, which must number exactly `N`.
    ///
    /// # Errors
    /// [`EvalError::MalformedNode`] for any other child count.
    pub(crate) fn operands<const N: usize>(ast: &Ast, id: NodeId) -> EvalResult<[NodeId; N]> {
        let node = ast.node(id);

        <[NodeId; N]>::try_from(node.children()).map_err(|_| {
            EvalError::malformed(node.kind(),
                                 format!("expected {N} child(ren), found {}",
                                         node.children().len()))
        })
    }

    /// Reads the name carried by an identifier token.
    ///
    /// `owner` is the kind of the node that expects the identifier and is only
    /// used for error reporting.
    ///
    /// # Errors
    /// [`EvalError::MalformedNode`] if `id` is not an identifier token.
    pub(crate) fn identifier(ast: &Ast, id: NodeId, owner: NodeKind) -> EvalResult<&str> {
        ast.node(id)
           .token()
           .filter(|token| token.class() == TokenClass::Identifier)
           .map(|token| token.value())
           .ok_or_else(|| EvalError::malformed(owner, "expected an identifier"))
    }
}
