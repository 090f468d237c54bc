//! Change flags returned by state-changing operations

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what an operation changed
    ///
    /// Consumers use these to decide whether the wireframe, the score
    /// display or the screen (play / game over) needs refreshing.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changes: u8 {
        /// Nothing changed
        const NONE = 0;
        /// The block set changed; geometry must be regenerated
        const GEOMETRY = 1 << 0;
        /// The score changed
        const SCORE = 1 << 1;
        /// The play/over flags changed
        const PHASE = 1 << 2;
        /// Everything
        const ALL = Self::GEOMETRY.bits() | Self::SCORE.bits() | Self::PHASE.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Changes::default().is_empty());
        assert_eq!(Changes::default(), Changes::NONE);
    }

    #[test]
    fn test_all_contains_each() {
        assert!(Changes::ALL.contains(Changes::GEOMETRY));
        assert!(Changes::ALL.contains(Changes::SCORE | Changes::PHASE));
    }
}
