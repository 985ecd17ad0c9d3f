/// How the right operand of a binary expression is parenthesised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightOperandMode {
  /// The right operand inherits no minimum precedence. Trees from a parser that drops explicit
  /// grouping never need more, but `a-(b-c)` renders as `a-b-c`.
  #[default]
  Unbounded,
  /// The right operand must bind at least as tightly as associativity demands, keeping explicit
  /// grouping such as `a-(b-c)` and `a*(b+c)`.
  Bounded,
}

/// Options for configuring output.
#[derive(Clone, Debug, Default)]
pub struct MinifyOptions {
  pub right_operand: RightOperandMode,
  /// Names never renamed and never handed out, in addition to the program's free names.
  pub pinned_names: Vec<String>,
}

impl MinifyOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_right_operand(mut self, mode: RightOperandMode) -> Self {
    self.right_operand = mode;
    self
  }

  pub fn with_pinned_name(mut self, name: impl Into<String>) -> Self {
    self.pinned_names.push(name.into());
    self
  }
}
