use ast_lua::ast::stmt::{FuncDecl, IfStmt, Stmt};
use itertools::Itertools;

use super::join::{join, join_with};
use super::Renderer;

/// Preferred separator between statements, used only where the joiner requires one.
const STATEMENT_SEPARATOR: char = ';';

impl Renderer<'_> {
  pub fn render_block(&mut self, body: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in body {
      let rendered = self.render_stmt(stmt);
      // `f()` followed by `(g)()` would otherwise be read as `f()(g)()`.
      if !out.is_empty() && rendered.starts_with('(') {
        out.push(STATEMENT_SEPARATOR);
        out.push_str(&rendered);
      } else {
        out = join_with(out, &rendered, STATEMENT_SEPARATOR);
      }
    }
    out
  }

  pub fn render_stmt(&mut self, stmt: &Stmt) -> String {
    match stmt {
      Stmt::Assign(assign) => {
        let mut out = self.render_list(&assign.targets);
        out.push('=');
        out.push_str(&self.render_list(&assign.values));
        out
      }
      Stmt::Local(local) => {
        let names = local
          .names
          .iter()
          .map(|name| self.local_name(name))
          .join(",");
        let mut out = join("local".to_string(), &names);
        if !local.values.is_empty() {
          out.push('=');
          out.push_str(&self.render_list(&local.values));
        }
        out
      }
      Stmt::Call(call) => self.render_expr(&call.call),
      Stmt::If(if_stmt) => self.render_if(if_stmt),
      Stmt::While(while_stmt) => {
        let condition = self.render_expr(&while_stmt.condition);
        let body = self.render_block(&while_stmt.body);
        let out = join(join("while".to_string(), &condition), "do");
        join(join(out, &body), "end")
      }
      Stmt::Do(do_stmt) => {
        let body = self.render_block(&do_stmt.body);
        join(join("do".to_string(), &body), "end")
      }
      Stmt::Return(ret) => {
        let values = self.render_list(&ret.values);
        join("return".to_string(), &values)
      }
      Stmt::Break(_) => "break".to_string(),
      Stmt::Repeat(repeat) => {
        let body = self.render_block(&repeat.body);
        let until = self.render_expr(&repeat.until);
        join(join(join("repeat".to_string(), &body), "until"), &until)
      }
      Stmt::FunctionDecl(decl) => self.render_func_decl(decl),
      Stmt::ForIn(for_in) => {
        let variables = for_in
          .variables
          .iter()
          .map(|name| self.local_name(name))
          .join(",");
        let iterators = self.render_list(&for_in.iterators);
        let body = self.render_block(&for_in.body);
        let out = join(join("for".to_string(), &variables), "in");
        let out = join(join(out, &iterators), "do");
        join(join(out, &body), "end")
      }
      Stmt::ForNum(for_num) => {
        let mut header = self.local_name(&for_num.variable);
        header.push('=');
        header.push_str(&self.render_expr(&for_num.start));
        header.push(',');
        header.push_str(&self.render_expr(&for_num.end));
        if let Some(step) = &for_num.step {
          header.push(',');
          header.push_str(&self.render_expr(step));
        }
        let body = self.render_block(&for_num.body);
        let out = join(join("for".to_string(), &header), "do");
        join(join(out, &body), "end")
      }
      Stmt::Label(label) => format!("::{}::", self.local_name(&label.label)),
      Stmt::Goto(goto) => {
        let label = self.local_name(&goto.label);
        join("goto".to_string(), &label)
      }
    }
  }

  fn render_if(&mut self, if_stmt: &IfStmt) -> String {
    let test = self.render_expr(&if_stmt.test);
    let consequent = self.render_block(&if_stmt.consequent);
    let mut out = join(join("if".to_string(), &test), "then");
    out = join(out, &consequent);
    for clause in &if_stmt.else_ifs {
      let test = self.render_expr(&clause.test);
      let body = self.render_block(&clause.body);
      out = join(join(join(out, "elseif"), &test), "then");
      out = join(out, &body);
    }
    if let Some(alternate) = &if_stmt.alternate {
      let body = self.render_block(alternate);
      out = join(join(out, "else"), &body);
    }
    join(out, "end")
  }

  fn render_func_decl(&mut self, decl: &FuncDecl) -> String {
    debug_assert!(decl.target.is_func_name(), "invalid function name {:?}", decl.target);
    let mut out = if decl.is_local {
      "local".to_string()
    } else {
      String::new()
    };
    out = join(out, "function");
    let target = self.render_expr(&decl.target);
    out = join(out, &target);
    out.push_str(&self.render_func(&decl.func));
    out
  }
}
