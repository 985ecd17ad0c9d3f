use ahash::HashSet;
use ahash::HashSetExt;
use once_cell::sync::Lazy;

/// Reserved words of Lua 5.2; none of them may be used as a name.
pub const KEYWORDS: &[&str] = &[
  "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
  "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
  let mut set = HashSet::with_capacity(KEYWORDS.len());
  set.extend(KEYWORDS.iter().copied());
  set
});

pub fn is_keyword(name: &str) -> bool {
  KEYWORD_SET.contains(name)
}
