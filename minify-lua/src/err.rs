use ast_lua::error::TreeError;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Debug)]
pub enum MinifyError {
  Tree(TreeError),
}

impl From<TreeError> for MinifyError {
  fn from(value: TreeError) -> Self {
    MinifyError::Tree(value)
  }
}

impl Display for MinifyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      MinifyError::Tree(err) => write!(f, "cannot load program tree: {}", err),
    }
  }
}

impl Error for MinifyError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      MinifyError::Tree(err) => Some(err),
    }
  }
}
