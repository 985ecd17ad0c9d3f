//! Rendering of program trees back to source text.
//!
//! Rendering recurses once per level of tree nesting. Trees produced from real source stay far
//! below the stack limit; a renderer driven by an explicit work stack would be needed only for
//! adversarially deep input, and would have to produce identical output.

pub mod join;
pub(crate) mod precedence;

mod expr;
mod stmt;


use crate::options::MinifyOptions;
use crate::rename::NameCompressor;

pub(crate) struct Renderer<'a> {
  names: &'a mut NameCompressor,
  options: &'a MinifyOptions,
}

impl<'a> Renderer<'a> {
  pub fn new(names: &'a mut NameCompressor, options: &'a MinifyOptions) -> Self {
    Renderer { names, options }
  }

  fn local_name(&mut self, name: &str) -> String {
    self.names.assign(name).to_string()
  }
}
