//! A reachable outcome of moving one piece

use serde::{Deserialize, Serialize};

use super::Pos;

/// One reachable outcome for a piece: either a plain step to a free cell
/// or the endpoint of a capture chain, together with everything the move
/// sweeps up along the way.
///
/// For captures, `captured` and `intermediate` are ordered oldest-first,
/// so animating the move is a straight walk over `intermediate` ending at
/// `pos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Final landing cell of the move.
    pub pos: Pos,
    /// Enemy pieces removed by this move, oldest capture first.
    pub captured: Vec<Pos>,
    /// Landing cells visited before the final one, oldest first.
    pub intermediate: Vec<Pos>,
}

impl Destination {
    /// A plain, non-capturing step.
    pub fn step(pos: Pos) -> Self {
        Self {
            pos,
            captured: Vec::new(),
            intermediate: Vec::new(),
        }
    }

    /// Whether reaching this destination captures anything.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Number of enemy pieces this move removes.
    #[inline]
    pub fn capture_len(&self) -> usize {
        self.captured.len()
    }
}
