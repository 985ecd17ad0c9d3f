use ast_lua::operator::OperatorName;

use crate::options::RightOperandMode;

/// Wrapper around a precedence value with total ordering.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Prec(u8);

impl Prec {
  pub const LOWEST: Prec = Prec(0);

  pub const fn new(value: u8) -> Self {
    Prec(value)
  }

  pub const fn tighter(self) -> Self {
    Prec(self.0 + 1)
  }

  pub const fn looser(self) -> Self {
    Prec(self.0.saturating_sub(1))
  }
}

#[derive(Clone, Copy, Debug)]
pub enum Side {
  Left,
  Right,
}

pub fn needs_parens(prec: Prec, min_prec: Prec) -> bool {
  prec < min_prec
}

pub fn operator_prec(op: OperatorName) -> Prec {
  Prec::new(op.precedence())
}

/// Precedence a binary expression reports to its parent. Right-associative operators report one
/// less, so a right-nested chain of the same operator is not wrapped.
pub fn binary_prec(op: OperatorName) -> Prec {
  let prec = operator_prec(op);
  if op.is_right_associative() {
    prec.looser()
  } else {
    prec
  }
}

pub fn child_min_prec_for_binary(op: OperatorName, side: Side, mode: RightOperandMode) -> Prec {
  match side {
    Side::Left => operator_prec(op),
    Side::Right => match mode {
      RightOperandMode::Unbounded => Prec::LOWEST,
      RightOperandMode::Bounded => {
        if op.is_right_associative() {
          binary_prec(op)
        } else {
          operator_prec(op).tighter()
        }
      }
    },
  }
}
