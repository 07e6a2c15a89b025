//! # Vertex Ordering
//!
//! Every vertex of a [`RelationGraph`](crate::graph::RelationGraph) needs two things:
//! equality, used for set membership, and a total order, used to break ties when
//! choosing roots and to fix the order in which siblings are visited.
//!
//! - **[`Vertex`]**: blanket trait collecting the bounds the graph relies on.
//! - **[`Label`]**: the reference vertex type, a positive integer that is written and
//!   read as text but compared by numeric value, so `"2" < "10"`.

use std::{fmt::Debug, hash::Hash, str::FromStr};

use duplicate::duplicate;
use thiserror::Error;

/// Bounds required of a vertex.
///
/// `Ord` provides the numeric order used for roots and neighbour expansion, `Hash`
/// backs the visited set of the traversals.
pub trait Vertex: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Vertex for T {}

/// A positive integer vertex label.
///
/// Labels compare by value rather than lexicographically:
///
/// ```
/// use relgraph::vertex::Label;
///
/// let two: Label = "2".parse().unwrap();
/// let ten: Label = "10".parse().unwrap();
/// assert!(two < ten);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(u64);

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Label {
    /// Creates a label, rejecting zero.
    pub fn new(value: u64) -> Result<Self, LabelError> {
        if value == 0 {
            return Err(LabelError::NotPositive(value.to_string()));
        }
        Ok(Label(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("empty vertex label")]
    Empty,
    #[error("vertex label {0:?} is not a positive integer")]
    NotPositive(String),
    #[error("vertex label {0:?} is not numeric")]
    Invalid(String),
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LabelError::Empty);
        }
        // `u64::from_str` would accept a sign; labels are bare digits.
        if s.starts_with('+') {
            return Err(LabelError::Invalid(s.to_owned()));
        }
        if let Some(digits) = s.strip_prefix('-') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(LabelError::NotPositive(s.to_owned()));
            }
        }
        let value = s
            .parse::<u64>()
            .map_err(|_| LabelError::Invalid(s.to_owned()))?;
        if value == 0 {
            return Err(LabelError::NotPositive(s.to_owned()));
        }
        Ok(Label(value))
    }
}

duplicate! {
    [
        types widen;
        [u8] [u64::from(value)];
        [u16] [u64::from(value)];
        [u32] [u64::from(value)];
        [u64] [value];
        [usize] [u64::try_from(value).map_err(|_| LabelError::Invalid(value.to_string()))?];
    ]

    impl TryFrom<types> for Label {
        type Error = LabelError;

        fn try_from(value: types) -> Result<Self, Self::Error> {
            Label::new(widen)
        }
    }
}
