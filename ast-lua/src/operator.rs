use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use serde::de::Error as DeError;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum OperatorName {
  // Binary.
  Or,
  And,
  LessThan,
  GreaterThan,
  LessThanOrEqual,
  GreaterThanOrEqual,
  Inequality,
  Equality,
  Concat,
  Addition,
  Subtraction,
  Multiplication,
  Division,
  Remainder,
  Exponentiation,

  // Unary.
  LogicalNot,
  Length,
  UnaryNegation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Associativity {
  Left,
  Right,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arity {
  Unary,
  Binary,
}

#[derive(Clone, Copy, Debug)]
pub struct Operator {
  pub name: OperatorName,
  pub token: &'static str,
  pub arity: Arity,
  pub associativity: Associativity,
  pub precedence: u8,
}

// Levels 4 and 9 are unused.
#[rustfmt::skip]
const OPERATOR_LIST: &[Operator] = &[
  Operator { name: OperatorName::Or, token: "or", arity: Arity::Binary, associativity: Associativity::Left, precedence: 1 },
  Operator { name: OperatorName::And, token: "and", arity: Arity::Binary, associativity: Associativity::Left, precedence: 2 },
  Operator { name: OperatorName::LessThan, token: "<", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::GreaterThan, token: ">", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::LessThanOrEqual, token: "<=", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::GreaterThanOrEqual, token: ">=", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::Inequality, token: "~=", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::Equality, token: "==", arity: Arity::Binary, associativity: Associativity::Left, precedence: 3 },
  Operator { name: OperatorName::Concat, token: "..", arity: Arity::Binary, associativity: Associativity::Right, precedence: 5 },
  Operator { name: OperatorName::Addition, token: "+", arity: Arity::Binary, associativity: Associativity::Left, precedence: 6 },
  Operator { name: OperatorName::Subtraction, token: "-", arity: Arity::Binary, associativity: Associativity::Left, precedence: 6 },
  Operator { name: OperatorName::Multiplication, token: "*", arity: Arity::Binary, associativity: Associativity::Left, precedence: 7 },
  Operator { name: OperatorName::Division, token: "/", arity: Arity::Binary, associativity: Associativity::Left, precedence: 7 },
  Operator { name: OperatorName::Remainder, token: "%", arity: Arity::Binary, associativity: Associativity::Left, precedence: 7 },
  Operator { name: OperatorName::LogicalNot, token: "not", arity: Arity::Unary, associativity: Associativity::Right, precedence: 8 },
  Operator { name: OperatorName::Length, token: "#", arity: Arity::Unary, associativity: Associativity::Right, precedence: 8 },
  Operator { name: OperatorName::UnaryNegation, token: "-", arity: Arity::Unary, associativity: Associativity::Right, precedence: 8 },
  Operator { name: OperatorName::Exponentiation, token: "^", arity: Arity::Binary, associativity: Associativity::Right, precedence: 10 },
];

pub static OPERATORS: Lazy<HashMap<OperatorName, &'static Operator>> = Lazy::new(|| {
  let mut map = HashMap::<OperatorName, &'static Operator>::new();
  for op in OPERATOR_LIST {
    map.insert(op.name, op);
  }
  map
});

const BINARY_OPERATOR_NAMES: &[&str] = &[
  "Or",
  "And",
  "LessThan",
  "GreaterThan",
  "LessThanOrEqual",
  "GreaterThanOrEqual",
  "Inequality",
  "Equality",
  "Concat",
  "Addition",
  "Subtraction",
  "Multiplication",
  "Division",
  "Remainder",
  "Exponentiation",
];

const UNARY_OPERATOR_NAMES: &[&str] = &["LogicalNot", "Length", "UnaryNegation"];

// An operator of the wrong arity is reported like any other tag outside the closed set.
fn deserialize_with_arity<'de, D: Deserializer<'de>>(
  deserializer: D,
  arity: Arity,
) -> Result<OperatorName, D::Error> {
  let name = OperatorName::deserialize(deserializer)?;
  if name.arity() == arity {
    return Ok(name);
  }
  let expected = match arity {
    Arity::Binary => BINARY_OPERATOR_NAMES,
    Arity::Unary => UNARY_OPERATOR_NAMES,
  };
  Err(D::Error::unknown_variant(&format!("{:?}", name), expected))
}

pub fn deserialize_binary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OperatorName, D::Error> {
  deserialize_with_arity(deserializer, Arity::Binary)
}

pub fn deserialize_unary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OperatorName, D::Error> {
  deserialize_with_arity(deserializer, Arity::Unary)
}

impl OperatorName {
  fn operator(self) -> &'static Operator {
    // Every variant has a row in OPERATOR_LIST.
    OPERATORS[&self]
  }

  pub fn token(self) -> &'static str {
    self.operator().token
  }

  pub fn precedence(self) -> u8 {
    self.operator().precedence
  }

  pub fn associativity(self) -> Associativity {
    self.operator().associativity
  }

  pub fn arity(self) -> Arity {
    self.operator().arity
  }

  pub fn is_right_associative(self) -> bool {
    self.associativity() == Associativity::Right
  }
}
