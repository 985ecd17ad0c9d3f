pub mod expr;
pub mod stmt;

use derive_visitor::Drive;
use serde::{Deserialize, Serialize};
use stmt::Stmt;

/// The root of a program tree.
#[derive(Clone, Debug, Default, Drive, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
  pub body: Vec<Stmt>,
  /// Names the scope resolver found to be free (global) references.
  #[drive(skip)]
  #[serde(default)]
  pub globals: Vec<String>,
}

impl Chunk {
  pub fn new(body: Vec<Stmt>) -> Chunk {
    Chunk {
      body,
      globals: Vec::new(),
    }
  }
}
