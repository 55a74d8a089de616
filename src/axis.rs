/// The two screen axes, used to index velocity and position components
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Get axis index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1]);
    }
}
