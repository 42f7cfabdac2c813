use crate::{
    ast::{Ast, NodeId, NodeKind},
    error::{EvalError, EvalResult},
    evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic node.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied:
    /// - `Addition` / `Subtraction` go through [`Evaluator::additive`].
    /// - `Multiplication` is `left * right`.
    /// - `Power` is `left.powf(right)`.
    /// - `Division` is `left / right` and fails for a zero divisor.
    /// - `Modulo` is the truncating remainder `left % right`; its result has
    ///   the sign of `left` (`-7 % 3 == -1`, `5.5 % 2 == 1.5`). It also fails
    ///   for a zero divisor.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] carrying `left` when a division or
    ///   modulo has a zero divisor.
    /// - [`EvalError::MalformedNode`] when the node does not have exactly two
    ///   children or is not a binary node at all.
    pub(crate) fn eval_binary_op(&self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<f64> {
        let kind = ast.node(id).kind();
        let [left, right] = Self::operands(ast, id)?;

        let left = self.visit(ast, left, depth + 1)?;
        let right = self.visit(ast, right, depth + 1)?;

        match kind {
            NodeKind::Addition | NodeKind::Subtraction => {
                Ok(Self::additive(ast, id, kind, left, right))
            },
            NodeKind::Multiplication => Ok(left * right),
            NodeKind::Power => Ok(left.powf(right)),
            NodeKind::Division | NodeKind::Modulo if right == 0.0 => {
                Err(EvalError::DivisionByZero { numerator: left })
            },
            NodeKind::Division => Ok(left / right),
            NodeKind::Modulo => Ok(left % right),
            NodeKind::Function
            | NodeKind::Negative
            | NodeKind::Group
            | NodeKind::Variable
            | NodeKind::Token => Err(EvalError::malformed(kind, "not a binary operation")),
        }
    }

    /// Combines the operands of an addition or subtraction node.
    ///
    /// The grammar nests a chain of `+`/`-` to the right: `a - b - c` arrives
    /// as `a - (b - c)`. Evaluated naively, every operator below a
    /// subtraction would have its sign flipped. The parent of the node
    /// decides how to compensate:
    /// - an addition whose parent is a subtraction subtracts its right
    ///   operand;
    /// - a subtraction that is the right child of a subtraction adds its
    ///   right operand (`left - (-right)`).
    ///
    /// In every other position the operator is applied as written. Together
    /// the two rules reproduce strict left-to-right evaluation for chains of
    /// any length. An explicit group breaks the chain, because the group, not
    /// the subtraction, is then the parent.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{AstBuilder, NodeKind},
    ///     context::Context,
    ///     evaluate,
    /// };
    ///
    /// // 10 - 4 - 3, as the grammar nests it: 10 - (4 - 3)
    /// let mut b = AstBuilder::new();
    /// let (ten, four, three) = (b.number("10"), b.number("4"), b.number("3"));
    /// let inner = b.node(NodeKind::Subtraction, vec![four, three]);
    /// let outer = b.node(NodeKind::Subtraction, vec![ten, inner]);
    /// let ast = b.finish(outer);
    ///
    /// assert_eq!(evaluate(&ast, &Context::new()), Ok(3.0));
    /// ```
    fn additive(ast: &Ast, id: NodeId, kind: NodeKind, left: f64, right: f64) -> f64 {
        let below_subtraction = ast.parent(id)
                                   .is_some_and(|parent| {
                                       ast.node(parent).kind() == NodeKind::Subtraction
                                   });

        match kind {
            NodeKind::Addition if below_subtraction => left - right,
            NodeKind::Addition => left + right,
            _ if below_subtraction && ast.child_index(id) == Some(1) => left - (-right),
            _ => left - right,
        }
    }
}

