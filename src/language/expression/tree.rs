use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::language::number::Number;

/// Shared handle to an immutable expression node.
///
/// Rewrites never mutate a node; they build a new root and reuse every unchanged
/// subtree through this handle.
pub type ExprRef = Arc<Expression>;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }
}

/// An arithmetic term.
///
/// Inside a rule, `Variable` nodes are capture slots; inside a term being proved they
/// are free symbols. The two roles share one representation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Expression {
    /// A literal constant
    Number(Number),
    /// A free variable or a pattern metavariable
    Variable(String),
    BinaryOp {
        op: BinaryOperator,
        left: ExprRef,
        right: ExprRef,
    },
    /// Application of a tagged unary operator; only `-` has arithmetic meaning
    UnaryOp { op: String, operand: ExprRef },
}

impl Expression {
    /// Tag of the only unary operator that folds to a number.
    pub const NEGATION: &'static str = "-";

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Expression::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    /// Direct children, left to right. Leaves have none.
    pub fn children(&self) -> Vec<&ExprRef> {
        match self {
            Expression::Number(_) | Expression::Variable(_) => Vec::new(),
            Expression::BinaryOp { left, right, .. } => vec![left, right],
            Expression::UnaryOp { operand, .. } => vec![operand],
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(|child| child.size())
            .sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Names of all variables occurring in the tree.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables<'e>(&'e self, variables: &mut BTreeSet<&'e str>) {
        match self {
            Expression::Variable(name) => {
                variables.insert(name.as_str());
            }
            _ => {
                for child in self.children() {
                    child.collect_variables(variables);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Expression;
    use crate::language::expression::build::{add, div, mul, neg, num, var};

    #[test]
    fn structural_equality() {
        let a = add(var("a"), num(2));
        let b = add(var("a"), num(2));
        assert_eq!(a, b);
        assert_ne!(a, add(num(2), var("a")));
        assert_ne!(a, mul(var("a"), num(2)));
    }

    #[test]
    fn size_and_depth() {
        let expr = mul(add(var("a"), var("b")), neg(num(4)));
        assert_eq!(expr.size(), 6);
        assert_eq!(expr.depth(), 3);
        assert_eq!(num(1).size(), 1);
        assert_eq!(num(1).depth(), 1);
    }

    #[test]
    fn variables() {
        let expr = div(add(var("y"), var("x")), mul(var("y"), num(3)));
        let variables: Vec<_> = expr.variables().into_iter().collect();
        assert_eq!(variables, vec!["x", "y"]);
        assert!(num(3).variables().is_empty());
    }

    #[test]
    fn expression_serialization() {
        let expr = mul(add(var("a"), var("a")), neg(num(4)));
        let serialized = serde_json::to_string(&expr).unwrap();
        let deserialized: Expression = serde_json::from_str(&serialized).unwrap();
        assert_eq!(*expr, deserialized);
    }
}
