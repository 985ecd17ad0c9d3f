use ast::Chunk;
use error::TreeResult;

pub mod ast;
pub mod error;
pub mod keyword;
pub mod operator;
pub mod visit;

pub use visit::free_names;

/// Loads a program tree serialised as JSON by the parser.
///
/// Every node is an object tagged with `$t`, e.g. `{"$t": "Id", "name": "x", "is_local": true}`.
pub fn from_json(source: &str) -> TreeResult<Chunk> {
  let chunk = serde_json::from_str(source)?;
  Ok(chunk)
}
