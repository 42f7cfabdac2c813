use tracing::trace;

use crate::{
    ast::{Ast, NodeId, NodeKind},
    error::{EvalError, EvalResult},
    evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The first child names the function. The name is resolved before any
    /// argument is evaluated, so an unknown function is reported even when an
    /// argument would fail. The remaining children are then evaluated left to
    /// right and passed to the function, which checks their count against its
    /// arity.
    ///
    /// # Errors
    /// - [`EvalError::UnknownFunction`] if the context has no such function.
    /// - [`EvalError::ArityMismatch`] if the argument count is not accepted.
    /// - [`EvalError::MalformedNode`] if the first child is not an identifier.
    /// - Any error raised by an argument or by the function itself.
    pub(crate) fn eval_function_call(&self,
                                     ast: &Ast,
                                     id: NodeId,
                                     depth: usize)
                                     -> EvalResult<f64> {
        let Some((&callee, arguments)) = ast.children(id).split_first() else {
            return Err(EvalError::malformed(NodeKind::Function, "missing function name"));
        };

        let name = Self::identifier(ast, callee, NodeKind::Function)?;
        let function = self.context().get_function(name)?;

        let args = arguments.iter()
                            .map(|&argument| self.visit(ast, argument, depth + 1))
                            .collect::<EvalResult<Vec<_>>>()?;

        trace!(name, ?args, "calling function");
        function.call(name, &args)
    }
}
