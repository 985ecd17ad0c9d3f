use ahash::{HashMap, HashSet};
use ast_lua::keyword::is_keyword;
use tracing::trace;


const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
const FIRST_LETTER: usize = 10;
const LAST: usize = ALPHABET.len() - 1;

/// Maps original local names to the shortest names not yet handed out.
///
/// Names are generated by an odometer over `0-9a-zA-Z_`: the least significant position is
/// incremented with carry, and when every position overflows a new most significant `a` is added.
/// The most significant position therefore never holds a digit. Candidates that are keywords or
/// pinned names are skipped.
///
/// The mapping is keyed by original name only, so every binding of `x` anywhere in the program gets
/// the same short name. Distinct originals always get distinct names, which keeps shadowing intact.
#[derive(Debug)]
pub struct NameCompressor {
  assigned: HashMap<String, String>,
  pinned: HashSet<String>,
  // Alphabet indices, most significant first.
  odometer: Vec<usize>,
}

impl Default for NameCompressor {
  fn default() -> Self {
    NameCompressor {
      assigned: HashMap::default(),
      pinned: HashSet::default(),
      // Starts just below `a` so the first name handed out is `a`.
      odometer: vec![FIRST_LETTER - 1],
    }
  }
}

impl NameCompressor {
  pub fn new() -> Self {
    Self::default()
  }

  /// Keeps `name` as is and never hands it out. Must be called before any name is assigned.
  pub fn pin(&mut self, name: &str) {
    self.pinned.insert(name.to_string());
    self.assigned.insert(name.to_string(), name.to_string());
  }

  pub fn is_pinned(&self, name: &str) -> bool {
    self.pinned.contains(name)
  }

  /// Returns the short name for `original`, generating one on first sight.
  pub fn assign(&mut self, original: &str) -> &str {
    if !self.assigned.contains_key(original) {
      let short = self.next_name();
      trace!(target: "minify_lua::rename", original, short = %short, "assigned");
      self.assigned.insert(original.to_string(), short);
    }
    &self.assigned[original]
  }

  /// Number of names mapped so far, pinned ones included.
  pub fn len(&self) -> usize {
    self.assigned.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assigned.is_empty()
  }

  fn next_name(&mut self) -> String {
    loop {
      self.advance();
      let candidate = self.current();
      if is_keyword(&candidate) || self.is_pinned(&candidate) {
        trace!(target: "minify_lua::rename", candidate = %candidate, "skipped reserved candidate");
        continue;
      }
      return candidate;
    }
  }

  fn advance(&mut self) {
    for pos in (0..self.odometer.len()).rev() {
      if self.odometer[pos] != LAST {
        self.odometer[pos] += 1;
        for digit in &mut self.odometer[pos + 1..] {
          *digit = 0;
        }
        return;
      }
    }
    let len = self.odometer.len();
    self.odometer.clear();
    self.odometer.push(FIRST_LETTER);
    self.odometer.resize(len + 1, 0);
  }

  fn current(&self) -> String {
    self
      .odometer
      .iter()
      .map(|&idx| ALPHABET[idx] as char)
      .collect()
  }
}
