//! Explicit cursor over the unconsumed portion of a report body
//!
//! Extraction steps only ever remove tokens (from the front, the back, or by
//! scanning and removing specific matches); surviving tokens keep their
//! order. The cursor makes that contract explicit instead of mutating a bare
//! list in place.

/// An ordered, mutable sequence of report tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCursor {
    tokens: Vec<String>,
}

impl TokenCursor {
    /// Wrap an existing token sequence
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Split a report body on single spaces
    ///
    /// Empty tokens from doubled spaces are kept here; the sanitize pass
    /// drops them.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split(' ').map(str::to_string).collect(),
        }
    }

    /// Number of unconsumed tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when every token has been consumed
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The front token, if any
    pub fn peek_front(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The back token, if any
    pub fn peek_back(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Token at an arbitrary index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Consume and return the front token
    pub fn take_front(&mut self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.remove(0))
        }
    }

    /// Consume and return the back token
    pub fn take_back(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Consume and return the token at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; scan loops always pass indices
    /// obtained from the cursor itself.
    pub fn remove_at(&mut self, index: usize) -> String {
        self.tokens.remove(index)
    }

    /// Replace the token at `index` in place
    pub fn replace(&mut self, index: usize, token: String) {
        self.tokens[index] = token;
    }

    /// Insert a token at `index`, shifting later tokens back
    pub fn insert(&mut self, index: usize, token: String) {
        self.tokens.insert(index, token);
    }

    /// True if any unconsumed token equals `token`
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Index of the first unconsumed token equal to `token`
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// View of the unconsumed tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the cursor, yielding the surviving tokens
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

/// True for non-empty all-ASCII-digit strings
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
