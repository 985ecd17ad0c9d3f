use ast_lua::ast::expr::{BinaryExpr, Expr, Func, TableExpr, TableField, UnaryExpr};
use itertools::Itertools;

use super::join::join;
use super::precedence::{
  binary_prec, child_min_prec_for_binary, needs_parens, operator_prec, Prec, Side,
};
use super::Renderer;

fn parenthesize(text: String) -> String {
  let mut out = String::with_capacity(text.len() + 2);
  out.push('(');
  out.push_str(&text);
  out.push(')');
  out
}

impl Renderer<'_> {
  pub fn render_expr(&mut self, expr: &Expr) -> String {
    self.render_expr_with_min_prec(expr, Prec::LOWEST)
  }

  /// Renders `expr`, parenthesised if it binds looser than `min_prec`.
  pub fn render_expr_with_min_prec(&mut self, expr: &Expr, min_prec: Prec) -> String {
    match expr {
      Expr::Binary(binary) => self.render_binary(binary, min_prec),
      Expr::Unary(unary) => self.render_unary(unary, min_prec),
      Expr::Id(id) => {
        if id.is_local {
          self.local_name(&id.name)
        } else {
          id.name.clone()
        }
      }
      Expr::LitStr(lit) => lit.raw.clone(),
      Expr::LitNum(lit) => lit.raw.clone(),
      Expr::LitBool(lit) => lit.value.to_string(),
      Expr::LitNil(_) => "nil".to_string(),
      Expr::Vararg(_) => "...".to_string(),
      Expr::Call(call) => {
        let mut out = self.render_prefix(&call.callee);
        out.push('(');
        out.push_str(&self.render_list(&call.arguments));
        out.push(')');
        out
      }
      Expr::TableCall(call) => {
        let mut out = self.render_prefix(&call.callee);
        out.push_str(&self.render_table(&call.argument));
        out
      }
      Expr::StringCall(call) => {
        let mut out = self.render_prefix(&call.callee);
        out.push_str(&call.argument.raw);
        out
      }
      Expr::Index(index) => {
        let mut out = self.render_prefix(&index.object);
        let key = self.render_expr(&index.index);
        out.push_str(&join("[".to_string(), &key));
        out.push(']');
        out
      }
      Expr::Member(member) => {
        let mut out = self.render_prefix(&member.object);
        out.push_str(member.indexer.token());
        out.push_str(&member.name);
        out
      }
      Expr::Func(func) => {
        let mut out = "function".to_string();
        out.push_str(&self.render_func(&func.func));
        out
      }
      Expr::Table(table) => self.render_table(table),
    }
  }

  fn render_binary(&mut self, binary: &BinaryExpr, min_prec: Prec) -> String {
    let op = binary.operator;
    let mode = self.options.right_operand;
    let left = self.render_expr_with_min_prec(
      &binary.left,
      child_min_prec_for_binary(op, Side::Left, mode),
    );
    let right = self.render_expr_with_min_prec(
      &binary.right,
      child_min_prec_for_binary(op, Side::Right, mode),
    );
    let out = join(join(left, op.token()), &right);
    if needs_parens(binary_prec(op), min_prec) {
      parenthesize(out)
    } else {
      out
    }
  }

  fn render_unary(&mut self, unary: &UnaryExpr, min_prec: Prec) -> String {
    let prec = operator_prec(unary.operator);
    let argument = self.render_expr_with_min_prec(&unary.argument, prec);
    let out = join(unary.operator.token().to_string(), &argument);
    if needs_parens(prec, min_prec) {
      parenthesize(out)
    } else {
      out
    }
  }

  /// Renders the base of a call, index or member access. Lua only accepts names, calls and
  /// accesses there; anything else (`("x"):rep(2)`, `(function() end)()`) needs parentheses.
  fn render_prefix(&mut self, expr: &Expr) -> String {
    let out = self.render_expr(expr);
    if expr.is_prefix() {
      out
    } else {
      parenthesize(out)
    }
  }

  pub(super) fn render_list(&mut self, exprs: &[Expr]) -> String {
    exprs.iter().map(|expr| self.render_expr(expr)).join(",")
  }

  pub(super) fn render_params(&mut self, func: &Func) -> String {
    let mut params: Vec<String> = func
      .parameters
      .iter()
      .map(|param| self.local_name(param))
      .collect();
    if func.is_vararg {
      params.push("...".to_string());
    }
    params.join(",")
  }

  /// Renders `(params) body end`.
  pub(super) fn render_func(&mut self, func: &Func) -> String {
    let mut out = "(".to_string();
    out.push_str(&self.render_params(func));
    out.push(')');
    let body = self.render_block(&func.body);
    join(join(out, &body), "end")
  }

  fn render_table(&mut self, table: &TableExpr) -> String {
    let fields = table
      .fields
      .iter()
      .map(|field| match field {
        TableField::Positional(field) => self.render_expr(&field.value),
        TableField::Keyed(field) => {
          let key = self.render_expr(&field.key);
          let mut out = join("[".to_string(), &key);
          out.push_str("]=");
          out.push_str(&self.render_expr(&field.value));
          out
        }
        TableField::Named(field) => {
          let mut out = field.name.clone();
          out.push('=');
          out.push_str(&self.render_expr(&field.value));
          out
        }
      })
      .join(",");
    let mut out = "{".to_string();
    out.push_str(&fields);
    out.push('}');
    out
  }
}
