use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{
    ast::{Ast, AstBuilder, NodeKind, Pending, TokenClass},
    error::{EvalError, EvalResult, LoadError},
    util::stack,
};

/// A node in the generic tree form produced by grammar-driven parsers.
///
/// Interior nodes carry a `#`-prefixed identifier and their children; leaves
/// use the identifier `token` together with a token class and the matched
/// text:
///
/// ```json
/// { "id": "#addition", "children": [
///     { "id": "token", "token": "number", "value": "3" },
///     { "id": "token", "token": "number", "value": "4" }
/// ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(remote = "Self")]
pub struct RawNode {
    /// Node identifier, e.g. `#division` or `token`.
    pub id:       String,
    /// Ordered children. Absent for leaves.
    #[serde(default)]
    pub children: Vec<RawNode>,
    /// Token class of a leaf: `number`, `constant` or `id`.
    #[serde(default)]
    pub token:    Option<String>,
    /// Matched text of a leaf.
    #[serde(default)]
    pub value:    Option<String>,
}

// Children decode through this impl, so every nesting level gets a stack
// check.
impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        stack::guarded(|| Self::deserialize(deserializer))
    }
}

/// Maps a parser node identifier onto a [`NodeKind`].
///
/// The grammar historically spells subtraction `#substraction`; both
/// spellings are accepted.
///
/// # Example
/// ```
/// use reckon::ast::{NodeKind, raw::node_kind};
///
/// assert_eq!(node_kind("#division"), Some(NodeKind::Division));
/// assert_eq!(node_kind("#substraction"), Some(NodeKind::Subtraction));
/// assert_eq!(node_kind("#matrix"), None);
/// ```
#[must_use]
pub fn node_kind(id: &str) -> Option<NodeKind> {
    let kind = match id {
        "#function" => NodeKind::Function,
        "#negative" => NodeKind::Negative,
        "#addition" => NodeKind::Addition,
        "#subtraction" | "#substraction" => NodeKind::Subtraction,
        "#multiplication" => NodeKind::Multiplication,
        "#division" => NodeKind::Division,
        "#power" => NodeKind::Power,
        "#modulo" => NodeKind::Modulo,
        "#group" => NodeKind::Group,
        "#variable" => NodeKind::Variable,
        "token" => NodeKind::Token,
        _ => return None,
    };
    Some(kind)
}

/// Maps a parser token class onto a [`TokenClass`].
#[must_use]
pub fn token_class(class: &str) -> Option<TokenClass> {
    match class {
        "number" => Some(TokenClass::Number),
        "constant" => Some(TokenClass::Constant),
        "id" | "identifier" => Some(TokenClass::Identifier),
        _ => None,
    }
}

fn unsupported(kind: &str) -> EvalError {
    EvalError::UnsupportedNodeKind { kind: kind.to_string() }
}

impl RawNode {
    fn attach(&self, builder: &mut AstBuilder) -> EvalResult<Pending> {
        stack::guarded(|| self.attach_node(builder))
    }

    fn attach_node(&self, builder: &mut AstBuilder) -> EvalResult<Pending> {
        let kind = node_kind(&self.id).ok_or_else(|| unsupported(&self.id))?;

        if kind == NodeKind::Token {
            let class = self.token.as_deref().unwrap_or_default();
            let class = token_class(class).ok_or_else(|| unsupported(&format!("token:{class}")))?;
            let value = self.value.as_deref().ok_or_else(|| {
                                                 EvalError::malformed(kind,
                                                                      format!("{class} token has no value"))
                                             })?;
            if !self.children.is_empty() {
                return Err(EvalError::malformed(kind, "tokens cannot have children"));
            }
            return Ok(builder.token(class, value));
        }

        let children = self.children
                           .iter()
                           .map(|child| child.attach(builder))
                           .collect::<EvalResult<Vec<_>>>()?;
        Ok(builder.node(kind, children))
    }
}

impl Ast {
    /// Converts a parser tree into an [`Ast`].
    ///
    /// # Errors
    /// - [`EvalError::UnsupportedNodeKind`] for an identifier or token class
    ///   outside the supported set.
    /// - [`EvalError::MalformedNode`] for a token without text or with
    ///   children.
    ///
    /// The number of children of interior nodes is checked during
    /// evaluation, not here.
    pub fn from_raw(raw: &RawNode) -> EvalResult<Self> {
        let mut builder = AstBuilder::new();
        let root = raw.attach(&mut builder)?;
        let ast = builder.finish(root);
        debug!(nodes = ast.len(), "converted parser tree");
        Ok(ast)
    }

    /// Decodes a parser tree from JSON and converts it into an [`Ast`].
    ///
    /// Nesting is not limited by the decoder; deeply nested documents are
    /// bounded only by the evaluator's depth limit.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::Ast, context::Context, evaluate};
    ///
    /// let json = r##"{
    ///     "id": "#negative",
    ///     "children": [{ "id": "token", "token": "number", "value": "2.5" }]
    /// }"##;
    /// let ast = Ast::from_json(json).unwrap();
    ///
    /// assert_eq!(evaluate(&ast, &Context::new()), Ok(-2.5));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();

        let raw = <RawNode as Deserialize>::deserialize(&mut deserializer)?;
        deserializer.end()?;

        Ok(Self::from_raw(&raw)?)
    }
}
