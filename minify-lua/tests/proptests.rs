use ahash::HashSet;
use minify_lua::ast_lua::ast::expr::Expr;
use minify_lua::ast_lua::ast::stmt::Stmt;
use minify_lua::ast_lua::keyword::is_keyword;
use minify_lua::rename::NameCompressor;
use minify_lua::{join, render_program};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
  const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz_";
  prop::collection::vec(prop::sample::select(CHARS.to_vec()), 1..6)
    .prop_map(|bytes| String::from_utf8(bytes).unwrap())
    .prop_filter("keywords cannot be names", |name| {
      !is_keyword(name) && name != "self"
    })
}

fn fragment() -> impl Strategy<Value = String> {
  prop::sample::select(vec![
    "", "-", "--x", "-2", "a-", "x", "_", "end", "local", "1", "0x1F", ".5", "..", "...", "a..",
    "[", "[[s]]", "[=[s]=]", "t[", "(", ")", "{", "}", "=", "==", "~=", "^", "#", "'s'", "\"s\"",
  ])
  .prop_map(|s| s.to_string())
}

proptest! {
  #![proptest_config(ProptestConfig {
    cases: 64,
    .. ProptestConfig::default()
  })]

  #[test]
  fn compressed_names_are_distinct_and_valid(
    originals in prop::collection::vec(ident(), 1..200),
    pinned in prop::collection::vec(ident(), 0..8),
  ) {
    let mut names = NameCompressor::new();
    for name in &pinned {
      names.pin(name);
    }
    let pinned: HashSet<&String> = pinned.iter().collect();
    let mut seen = HashSet::default();
    let mut assigned = Vec::new();
    for original in &originals {
      let short = names.assign(original).to_string();
      prop_assert_eq!(names.assign(original), short.as_str());
      assigned.push((original.clone(), short));
    }
    for (original, short) in &assigned {
      if pinned.contains(original) {
        prop_assert_eq!(original, short);
        continue;
      }
      prop_assert!(!is_keyword(short), "{} is a keyword", short);
      prop_assert!(!pinned.contains(short), "{} is pinned", short);
      prop_assert!(!short.starts_with(|c: char| c.is_ascii_digit()), "{} starts with a digit", short);
      // One short name per original.
      seen.insert((original.clone(), short.clone()));
    }
    let shorts: HashSet<&String> = seen.iter().map(|(_, short)| short).collect();
    prop_assert_eq!(shorts.len(), seen.len());
  }

  #[test]
  fn join_never_fuses_tokens(a in fragment(), b in fragment()) {
    let out = join(a.clone(), &b);
    let fused = format!("{}{}", a, b);
    let separated = format!("{} {}", a, b);
    prop_assert!(out == fused || out == separated, "{:?}", out);
    let spaced = out == separated && !b.is_empty();
    if matches!(a.as_str(), "1" | "0x1F" | ".5") && b.starts_with('.') {
      // `0x1F..` or `1..` would lex as one malformed number.
      prop_assert!(spaced, "{:?}", out);
    }
    if a.ends_with('-') && b.starts_with('-') {
      prop_assert!(spaced, "{:?}", out);
    }
    if a.ends_with('[') && b.starts_with('[') {
      prop_assert!(spaced, "{:?}", out);
    }
    if a.ends_with(|c: char| c.is_ascii_alphanumeric()) && b.starts_with(|c: char| c.is_ascii_alphabetic()) {
      prop_assert!(spaced, "{:?}", out);
    }
  }

  #[test]
  fn rendering_shortened_output_is_stable(
    originals in prop::collection::hash_set(ident(), 1..40),
  ) {
    let originals: Vec<String> = originals.into_iter().collect();
    let values = (0..originals.len()).map(|i| Expr::num(i.to_string())).collect::<Vec<_>>();
    let first = render_program(&[Stmt::local(originals.clone(), values.clone())], ["print"]);

    let mut names = NameCompressor::new();
    names.pin("self");
    names.pin("print");
    let shortened: Vec<String> = originals.iter().map(|name| names.assign(name).to_string()).collect();
    let second = render_program(&[Stmt::local(shortened, values)], ["print"]);
    prop_assert_eq!(first, second);
  }
}
