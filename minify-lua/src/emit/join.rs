//! Token-boundary joining of rendered fragments.
//!
//! Every place two rendered fragments meet goes through [`join`] or [`join_with`], which insert a
//! separator only when the concatenation would otherwise lex differently from the two fragments
//! on their own: `return` + `1` must not become `return1`, `-` + `-2` must not open a comment, and
//! `1` + `..` must not become the malformed number `1..`.

fn is_word_char(ch: char) -> bool {
  ch.is_ascii_alphanumeric() || ch == '_'
}

/// Whether `b` appended directly to `a` would fuse tokens across the boundary.
pub fn needs_separator(a: &str, b: &str) -> bool {
  let (Some(last), Some(first)) = (a.chars().next_back(), b.chars().next()) else {
    return false;
  };

  if is_word_char(last) {
    let word = &a[a.trim_end_matches(is_word_char).len()..];
    if word.starts_with(|ch: char| ch.is_ascii_digit()) {
      // A numeral keeps consuming `.` and word chars: `1` + `..` and `0xFF` + `..` would read as
      // one malformed number. `1` + `+` and `1` + `(` are fine.
      return first == '.' || is_word_char(first);
    }
    // `local a` + `local b`, `while` + `1`; but `not` + `(`, `x` + `^` are fine.
    return is_word_char(first);
  }
  // `--` starts a comment, `[[` a long string, and `..` + `.` reads as `...`.
  last == first && matches!(last, '-' | '[' | '.')
}

/// Appends `b` to `a`, inserting `separator` only if the two would otherwise fuse.
pub fn join_with(mut a: String, b: &str, separator: char) -> String {
  if needs_separator(&a, b) {
    a.push(separator);
  }
  a.push_str(b);
  a
}

pub fn join(a: String, b: &str) -> String {
  join_with(a, b, ' ')
}
