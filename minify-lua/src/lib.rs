use ast_lua::ast::stmt::Stmt;
use ast_lua::ast::Chunk;
use ast_lua::free_names;
use emit::Renderer;
use rename::NameCompressor;
use tracing::{debug, instrument};

pub use ast_lua;
pub use emit::join::{join, join_with, needs_separator};
pub use err::MinifyError;
pub use options::{MinifyOptions, RightOperandMode};

mod emit;
mod err;
mod options;
pub mod rename;

/// Implicit parameter of methods declared with `function t:m() end`.
const METHOD_RECEIVER: &str = "self";

/// State for rendering a single program. Rendering consumes the session, so names assigned in one
/// program can never leak into another.
pub struct Session {
  names: NameCompressor,
  options: MinifyOptions,
}

impl Session {
  pub fn new(options: MinifyOptions) -> Self {
    let mut names = NameCompressor::new();
    names.pin(METHOD_RECEIVER);
    for name in &options.pinned_names {
      names.pin(name);
    }
    Session { names, options }
  }

  /// Creates a session that keeps every name in `free_names` as is.
  pub fn with_free_names<I, S>(options: MinifyOptions, free_names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut session = Session::new(options);
    for name in free_names {
      session.pin(name.as_ref());
    }
    session
  }

  /// Keeps `name` as is. Global references must be pinned, as renaming them would change which
  /// binding they refer to.
  pub fn pin(&mut self, name: &str) {
    self.names.pin(name);
  }

  #[instrument(target = "minify_lua::session", level = "debug", skip_all, fields(statements = body.len()))]
  pub fn render_program(mut self, body: &[Stmt]) -> String {
    let out = Renderer::new(&mut self.names, &self.options).render_block(body);
    debug!(
      target: "minify_lua::session",
      names = self.names.len(),
      output_len = out.len(),
      "rendered program"
    );
    out
  }
}

/// Renders `body` as minimal source, shortening every local name and keeping `free_names` intact.
///
/// # Examples
///
/// ```
/// use minify_lua::ast_lua::ast::expr::Expr;
/// use minify_lua::ast_lua::ast::stmt::Stmt;
/// use minify_lua::render_program;
///
/// let body = vec![
///   Stmt::local(vec!["hello".to_string()], vec![Expr::num("1")]),
///   Stmt::call(Expr::call(Expr::global("print"), vec![Expr::local("hello")])),
/// ];
/// assert_eq!(render_program(&body, ["print"]), "local a=1;print(a)");
/// ```
pub fn render_program<I, S>(body: &[Stmt], free_names: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  Session::with_free_names(MinifyOptions::default(), free_names).render_program(body)
}

/// Minifies a program tree, keeping the chunk's listed globals as well as every identifier not
/// flagged as local.
pub fn minify(chunk: &Chunk, options: &MinifyOptions) -> String {
  let mut session = Session::with_free_names(options.clone(), &chunk.globals);
  for name in free_names(chunk) {
    session.pin(&name);
  }
  session.render_program(&chunk.body)
}

/// Minifies a program tree serialised as JSON by the parser.
pub fn minify_json(source: &str, options: &MinifyOptions) -> Result<String, MinifyError> {
  let chunk = ast_lua::from_json(source)?;
  Ok(minify(&chunk, options))
}
