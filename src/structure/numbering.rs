//! Example numbering
//!
//! `(x)` takes the next number in sequence; `(xN)` pins the number to N and
//! later `(x)` examples continue from N + 1.

#[derive(Debug, Clone, Default)]
pub struct ExampleNumbering {
    last: u32,
}

impl ExampleNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number for an example id (`x` or `x` followed by digits)
    pub fn next(&mut self, id: &str) -> u32 {
        let pinned = id
            .strip_prefix('x')
            .filter(|digits| !digits.is_empty())
            .and_then(|digits| digits.parse::<u32>().ok());
        self.last = pinned.unwrap_or(self.last.saturating_add(1));
        self.last
    }

    /// `(N)` as shown in the number column
    pub fn label(number: u32) -> String {
        format!("({})", number)
    }
}
