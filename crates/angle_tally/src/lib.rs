// crates/angle_tally/src/lib.rs

use std::fmt;

/// Counts of `<` and `>` characters in a piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AngleTally {
    pub left: usize,
    pub right: usize,
}

impl AngleTally {
    /// True when the text moves the pointer left as often as right.
    pub fn is_balanced(&self) -> bool {
        self.left == self.right
    }

    /// Net pointer movement: positive means drift to the right.
    pub fn net(&self) -> isize {
        self.right as isize - self.left as isize
    }
}

/// Renders as `(left, right)`, e.g. `(2, 1)`.
impl fmt::Display for AngleTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// Tallies `<` and `>` in `text`. No matching or nesting is considered.
pub fn count_angles(text: &str) -> AngleTally {
    text.bytes().fold(AngleTally::default(), |mut tally, b| {
        match b {
            b'<' => tally.left += 1,
            b'>' => tally.right += 1,
            _ => {}
        }
        tally
    })
}
