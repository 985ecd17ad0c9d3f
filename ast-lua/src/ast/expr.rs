use derive_more::derive::{From, TryInto};
use derive_visitor::Drive;
use serde::{Deserialize, Serialize};

use crate::operator::{Arity, OperatorName};

use super::stmt::Stmt;

#[derive(Clone, Debug, Drive, From, PartialEq, Serialize, Deserialize, TryInto)]
#[serde(tag = "$t")]
pub enum Expr {
  Binary(BinaryExpr),
  Call(CallExpr),
  Func(FuncExpr),
  Id(IdExpr),
  Index(IndexExpr),
  Member(MemberExpr),
  StringCall(StringCallExpr),
  Table(TableExpr),
  TableCall(TableCallExpr),
  Unary(UnaryExpr),

  // Literals.
  LitBool(LitBoolExpr),
  LitNil(LitNilExpr),
  LitNum(LitNumExpr),
  LitStr(LitStrExpr),
  Vararg(VarargExpr),
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
  /// Set by the scope resolver when the name refers to a local, loop variable or parameter.
  #[drive(skip)]
  pub is_local: bool,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LitBoolExpr {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LitNilExpr {}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LitNumExpr {
  #[drive(skip)]
  pub raw: String, // Exactly as written in the source, e.g. `0x1F` or `1e3`.
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LitStrExpr {
  #[drive(skip)]
  pub raw: String, // Including quotes or long brackets.
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct VarargExpr {}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
  #[drive(skip)]
  #[serde(deserialize_with = "crate::operator::deserialize_binary")]
  pub operator: OperatorName,
  pub left: Box<Expr>,
  pub right: Box<Expr>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
  #[drive(skip)]
  #[serde(deserialize_with = "crate::operator::deserialize_unary")]
  pub operator: OperatorName,
  pub argument: Box<Expr>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
  pub callee: Box<Expr>,
  pub arguments: Vec<Expr>,
}

/// `f{...}`
#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct TableCallExpr {
  pub callee: Box<Expr>,
  pub argument: TableExpr,
}

/// `f"..."`
#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct StringCallExpr {
  pub callee: Box<Expr>,
  pub argument: LitStrExpr,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
  pub object: Box<Expr>,
  pub index: Box<Expr>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Indexer {
  Dot,
  Colon,
}

impl Indexer {
  pub fn token(self) -> &'static str {
    match self {
      Indexer::Dot => ".",
      Indexer::Colon => ":",
    }
  }
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
  pub object: Box<Expr>,
  #[drive(skip)]
  pub indexer: Indexer,
  #[drive(skip)]
  pub name: String,
}

/// Parameter list and body shared by function expressions and function statements.
#[derive(Clone, Debug, Default, Drive, PartialEq, Serialize, Deserialize)]
pub struct Func {
  #[drive(skip)]
  pub parameters: Vec<String>,
  #[drive(skip)]
  #[serde(default)]
  pub is_vararg: bool,
  pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
  pub func: Func,
}

#[derive(Clone, Debug, Default, Drive, PartialEq, Serialize, Deserialize)]
pub struct TableExpr {
  pub fields: Vec<TableField>,
}

#[derive(Clone, Debug, Drive, From, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$t")]
pub enum TableField {
  /// `value`
  Positional(PositionalField),
  /// `[key]=value`
  Keyed(KeyedField),
  /// `name=value`
  Named(NamedField),
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct PositionalField {
  pub value: Expr,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct KeyedField {
  pub key: Expr,
  pub value: Expr,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct NamedField {
  #[drive(skip)]
  pub name: String,
  pub value: Expr,
}

impl Expr {
  pub fn local(name: impl Into<String>) -> Expr {
    Expr::Id(IdExpr {
      name: name.into(),
      is_local: true,
    })
  }

  pub fn global(name: impl Into<String>) -> Expr {
    Expr::Id(IdExpr {
      name: name.into(),
      is_local: false,
    })
  }

  pub fn num(raw: impl Into<String>) -> Expr {
    Expr::LitNum(LitNumExpr { raw: raw.into() })
  }

  /// `raw` must include the delimiters.
  pub fn string(raw: impl Into<String>) -> Expr {
    Expr::LitStr(LitStrExpr { raw: raw.into() })
  }

  pub fn bool(value: bool) -> Expr {
    Expr::LitBool(LitBoolExpr { value })
  }

  pub fn nil() -> Expr {
    Expr::LitNil(LitNilExpr {})
  }

  pub fn vararg() -> Expr {
    Expr::Vararg(VarargExpr {})
  }

  pub fn binary(operator: OperatorName, left: Expr, right: Expr) -> Expr {
    debug_assert_eq!(operator.arity(), Arity::Binary, "{operator:?} is not a binary operator");
    Expr::Binary(BinaryExpr {
      operator,
      left: Box::new(left),
      right: Box::new(right),
    })
  }

  pub fn unary(operator: OperatorName, argument: Expr) -> Expr {
    debug_assert_eq!(operator.arity(), Arity::Unary, "{operator:?} is not a unary operator");
    Expr::Unary(UnaryExpr {
      operator,
      argument: Box::new(argument),
    })
  }

  pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
      callee: Box::new(callee),
      arguments,
    })
  }

  pub fn index(object: Expr, index: Expr) -> Expr {
    Expr::Index(IndexExpr {
      object: Box::new(object),
      index: Box::new(index),
    })
  }

  pub fn member(object: Expr, indexer: Indexer, name: impl Into<String>) -> Expr {
    Expr::Member(MemberExpr {
      object: Box::new(object),
      indexer,
      name: name.into(),
    })
  }

  pub fn func(parameters: Vec<String>, is_vararg: bool, body: Vec<Stmt>) -> Expr {
    Expr::Func(FuncExpr {
      func: Func {
        parameters,
        is_vararg,
        body,
      },
    })
  }

  pub fn table(fields: Vec<TableField>) -> Expr {
    Expr::Table(TableExpr { fields })
  }

  /// Whether Lua accepts this expression unparenthesised as the base of a call, index or member
  /// access.
  pub fn is_prefix(&self) -> bool {
    matches!(
      self,
      Expr::Id(_)
        | Expr::Call(_)
        | Expr::TableCall(_)
        | Expr::StringCall(_)
        | Expr::Index(_)
        | Expr::Member(_)
    )
  }

  /// Whether this is a valid function statement name: `f`, `a.b.f` or `a.b:m`.
  pub fn is_func_name(&self) -> bool {
    match self {
      Expr::Id(_) => true,
      Expr::Member(member) => match member.object.as_ref() {
        Expr::Id(_) => true,
        Expr::Member(inner) => inner.indexer == Indexer::Dot && member.object.is_func_name(),
        _ => false,
      },
      _ => false,
    }
  }
}

impl TableField {
  pub fn positional(value: Expr) -> TableField {
    TableField::Positional(PositionalField { value })
  }

  pub fn keyed(key: Expr, value: Expr) -> TableField {
    TableField::Keyed(KeyedField { key, value })
  }

  pub fn named(name: impl Into<String>, value: Expr) -> TableField {
    TableField::Named(NamedField {
      name: name.into(),
      value,
    })
  }
}
