use strum::VariantArray;

use crate::location::Location;

/// The four directions a slide may happen in.
///
/// The variant order is the order neighbors are probed in during successor
/// generation, so it is part of the deterministic move enumeration order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps far out of range, so the
    /// result always answers `None` to a bounds-checked cell lookup rather
    /// than aliasing a real cell.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}
