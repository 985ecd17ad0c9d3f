use derive_more::derive::{From, TryInto};
use derive_visitor::Drive;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

use super::expr::{Expr, Func};

#[derive(Clone, Debug, Drive, From, PartialEq, Serialize, Deserialize, TryInto)]
#[serde(tag = "$t")]
pub enum Stmt {
  Assign(AssignStmt),
  Break(BreakStmt),
  Call(CallStmt),
  Do(DoStmt),
  ForIn(ForInStmt),
  ForNum(ForNumStmt),
  FunctionDecl(FuncDecl),
  Goto(GotoStmt),
  If(IfStmt),
  Label(LabelStmt),
  Local(LocalStmt),
  Repeat(RepeatStmt),
  Return(ReturnStmt),
  While(WhileStmt),
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
  pub targets: Vec<Expr>,
  pub values: Vec<Expr>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct BreakStmt {}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
  pub call: Expr, // Always a Call, TableCall or StringCall.
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct DoStmt {
  pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct ForInStmt {
  #[drive(skip)]
  pub variables: Vec<String>,
  pub iterators: Vec<Expr>,
  pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct ForNumStmt {
  #[drive(skip)]
  pub variable: String,
  pub start: Expr,
  pub end: Expr,
  #[serde(default)]
  pub step: Option<Expr>,
  pub body: Vec<Stmt>,
}

fn deserialize_func_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Expr, D::Error> {
  let target = Expr::deserialize(deserializer)?;
  if !target.is_func_name() {
    return Err(D::Error::custom(
      "function statement name must be a name or a chain of field accesses",
    ));
  }
  Ok(target)
}

/// `function a.b:c() end` or `local function f() end`.
#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
  /// An `Id`, or a chain of `Member` accesses ending in an `Id`.
  #[serde(deserialize_with = "deserialize_func_name")]
  pub target: Expr,
  #[drive(skip)]
  #[serde(default)]
  pub is_local: bool,
  pub func: Func,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct GotoStmt {
  #[drive(skip)]
  pub label: String,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
  pub test: Expr,
  pub consequent: Vec<Stmt>,
  #[serde(default)]
  pub else_ifs: Vec<ElseIfClause>,
  #[serde(default)]
  pub alternate: Option<Vec<Stmt>>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct ElseIfClause {
  pub test: Expr,
  pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LabelStmt {
  #[drive(skip)]
  pub label: String,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct LocalStmt {
  #[drive(skip)]
  pub names: Vec<String>,
  /// Empty when the declaration has no `=`.
  #[serde(default)]
  pub values: Vec<Expr>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct RepeatStmt {
  pub body: Vec<Stmt>,
  pub until: Expr,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
  #[serde(default)]
  pub values: Vec<Expr>,
}

#[derive(Clone, Debug, Drive, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
  pub condition: Expr,
  pub body: Vec<Stmt>,
}

impl Stmt {
  pub fn local(names: Vec<String>, values: Vec<Expr>) -> Stmt {
    Stmt::Local(LocalStmt { names, values })
  }

  pub fn assign(targets: Vec<Expr>, values: Vec<Expr>) -> Stmt {
    Stmt::Assign(AssignStmt { targets, values })
  }

  pub fn call(call: Expr) -> Stmt {
    Stmt::Call(CallStmt { call })
  }

  pub fn ret(values: Vec<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt { values })
  }

  pub fn brk() -> Stmt {
    Stmt::Break(BreakStmt {})
  }
}
