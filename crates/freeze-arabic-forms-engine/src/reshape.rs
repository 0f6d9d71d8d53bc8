//! Line reshaping: freezes every Arabic letter in its contextual form.
//!
//! A [`SEPARATOR_MARK`] goes between every pair of adjacent Arabic
//! characters (letters or marks) so segmenters never merge two letters into
//! one cluster. When a dual-joining letter is followed by another joining
//! letter, a [`JOIN_MARK`] is placed straight after it and another right
//! before the following letter, which keeps both in their joined forms even
//! with separators in between.
//!
//! ```text
//! ب ا  →  ب ZWJ WJ ZWJ ا
//! ا ب  →  ا WJ ب
//! ```

use crate::tables::{Category, category};

/// ZERO WIDTH JOINER. Forces the adjacent letter into its joined form.
pub const JOIN_MARK: char = '\u{200D}';

/// WORD JOINER. Invisible, non-joining and not a line break opportunity.
pub const SEPARATOR_MARK: char = '\u{2060}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing seen yet.
    Start,
    /// The last non-mark character was not a joining letter.
    AfterOther,
    /// The last non-mark character was a joining letter of the given kind.
    /// Marks seen since then do not change this.
    AfterJoining { anchor: Category },
}

/// Single-line scanner.
///
/// While in [`State::AfterJoining`] the anchor letter is the last character
/// of `out`; separators and marks that follow it wait in `tail` until we know
/// whether the anchor needs a [`JOIN_MARK`] after it.
struct LineReshaper {
    out: Vec<char>,
    tail: Vec<char>,
    state: State,
}

impl LineReshaper {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            // A letter brings at most three markers with it, a mark one.
            out: Vec::with_capacity(capacity * 4),
            tail: Vec::new(),
            state: State::Start,
        }
    }

    fn push(&mut self, c: char) {
        let kind = category(c);
        self.state = match (self.state, kind) {
            (State::Start, _) => {
                self.out.push(c);
                Self::state_after(kind)
            }
            (State::AfterJoining { anchor }, _) if kind.is_joining() => {
                let attaching = anchor == Category::DualJoining;
                if attaching {
                    self.out.push(JOIN_MARK);
                }
                self.out.append(&mut self.tail);
                self.out.push(SEPARATOR_MARK);
                if attaching {
                    self.out.push(JOIN_MARK);
                }
                self.out.push(c);
                State::AfterJoining { anchor: kind }
            }
            (State::AfterJoining { anchor }, Category::Mark) => {
                self.tail.push(SEPARATOR_MARK);
                self.tail.push(c);
                State::AfterJoining { anchor }
            }
            (State::AfterOther, Category::Mark) => {
                self.out.push(c);
                State::AfterOther
            }
            (_, _) => {
                self.out.append(&mut self.tail);
                self.out.push(c);
                Self::state_after(kind)
            }
        };
    }

    fn state_after(kind: Category) -> State {
        if kind.is_joining() {
            State::AfterJoining { anchor: kind }
        } else {
            State::AfterOther
        }
    }

    fn finish(mut self) -> Vec<char> {
        self.out.append(&mut self.tail);
        self.out
    }
}

/// Reshape one line of text given as codepoints.
///
/// Lines are independent: a newline is an ordinary non-Arabic character and
/// resets the joining state, so passing a whole text works too.
pub fn reshape(line: &[char]) -> Vec<char> {
    let mut reshaper = LineReshaper::with_capacity(line.len());
    for &c in line {
        reshaper.push(c);
    }
    reshaper.finish()
}

/// [`reshape`] over a UTF-8 string.
pub fn reshape_str(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    reshape(&chars).into_iter().collect()
}

/// Reshape a multi-line text one line at a time, keeping line terminators.
pub fn reshape_text(text: &str) -> String {
    text.split_inclusive('\n').map(reshape_str).collect()
}
