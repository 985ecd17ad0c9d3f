use ahash::HashSet;
use derive_visitor::{Drive, Visitor};

use crate::ast::expr::IdExpr;
use crate::ast::Chunk;

#[derive(Default, Visitor)]
#[visitor(IdExpr(enter))]
struct FreeNameCollector {
  seen: HashSet<String>,
  names: Vec<String>,
}

impl FreeNameCollector {
  fn enter_id_expr(&mut self, id: &IdExpr) {
    if id.is_local || self.seen.contains(&id.name) {
      return;
    }
    self.seen.insert(id.name.clone());
    self.names.push(id.name.clone());
  }
}

/// Every identifier not flagged as local, in order of first occurrence.
pub fn free_names(chunk: &Chunk) -> Vec<String> {
  let mut collector = FreeNameCollector::default();
  chunk.drive(&mut collector);
  collector.names
}
