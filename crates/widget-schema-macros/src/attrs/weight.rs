use darling::FromMeta;
use syn::{Expr, ExprLit, ExprUnary, Lit, UnOp};

/// `#[schema(weight = ...)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weight {
    /// Integer literal, checked at expansion time.
    Int(i64),
    /// Tag text, parsed when the schema is built.
    Tag(String),
}

impl FromMeta for Weight {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => Self::from_value(lit),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr: inner,
                ..
            }) => match Self::from_expr(inner)? {
                Weight::Int(value) => Ok(Weight::Int(-value)),
                Weight::Tag(_) => Err(darling::Error::unexpected_expr_type(expr)),
            },
            Expr::Group(group) => Self::from_expr(&group.expr),
            _ => Err(darling::Error::unexpected_expr_type(expr)),
        }
    }

    fn from_value(lit: &Lit) -> darling::Result<Self> {
        match lit {
            Lit::Int(int) => int
                .base10_parse()
                .map(Weight::Int)
                .map_err(darling::Error::from),
            Lit::Str(text) => Ok(Weight::Tag(text.value())),
            _ => Err(darling::Error::unexpected_lit_type(lit)),
        }
    }
}
