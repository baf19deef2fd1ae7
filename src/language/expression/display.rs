use std::fmt;

use super::{BinaryOperator, Expression};

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fully parenthesized rendering: every binary node is wrapped, unary nodes print
/// as `op(operand)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(number) => write!(f, "{number}"),
            Expression::Variable(name) => write!(f, "{name}"),
            Expression::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::UnaryOp { op, operand } => write!(f, "{op}({operand})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::language::expression::build::{add, mul, neg, num, ratio, unary, var};

    #[test]
    fn display_sum() {
        assert_eq!(add(var("a"), num(2)).to_string(), "(a + 2)");
    }

    #[test]
    fn display_nested() {
        let expr = mul(add(var("a"), var("a")), num(4));
        assert_eq!(expr.to_string(), "((a + a) * 4)");
        assert_eq!(expr.to_string(), expr.clone().to_string());
    }

    #[test]
    fn display_unary() {
        assert_eq!(neg(var("x")).to_string(), "-(x)");
        assert_eq!(
            unary("pow", mul(var("x"), var("y"))).to_string(),
            "pow((x * y))"
        );
    }

    #[test]
    fn display_numbers() {
        assert_eq!(num(-4).to_string(), "-4");
        assert_eq!(add(ratio(5, 2).unwrap(), num(1)).to_string(), "(5/2 + 1)");
    }
}
