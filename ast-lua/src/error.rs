use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// Failure to load a program tree handed over by the parser.
pub enum TreeError {
  /// A node, operator or indexer tag outside the closed set this crate models, or an operator
  /// used with the wrong number of operands.
  UnsupportedNode {
    kind: String,
    line: usize,
    column: usize,
  },
  Malformed(serde_json::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;

// serde reports an unrecognised `$t` tag as "unknown variant `Kind`, expected ...".
fn unknown_variant(message: &str) -> Option<String> {
  let rest = message.split_once("unknown variant `")?.1;
  let (kind, _) = rest.split_once('`')?;
  Some(kind.to_string())
}

impl From<serde_json::Error> for TreeError {
  fn from(err: serde_json::Error) -> Self {
    match unknown_variant(&err.to_string()) {
      Some(kind) => TreeError::UnsupportedNode {
        kind,
        line: err.line(),
        column: err.column(),
      },
      None => TreeError::Malformed(err),
    }
  }
}

impl Debug for TreeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TreeError::UnsupportedNode { line, column, .. } => {
        write!(f, "{} around [{}:{}]", self, line, column)
      }
      TreeError::Malformed(err) => write!(f, "malformed tree: {:?}", err),
    }
  }
}

impl Display for TreeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TreeError::UnsupportedNode { kind, .. } => write!(f, "unsupported tree node kind `{}`", kind),
      TreeError::Malformed(err) => write!(f, "malformed tree: {}", err),
    }
  }
}

impl Error for TreeError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      TreeError::UnsupportedNode { .. } => None,
      TreeError::Malformed(err) => Some(err),
    }
  }
}
