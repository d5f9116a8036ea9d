//! Approaches and axes

/// One of the four directional lanes feeding the intersection
///
/// The discriminant is the approach's position in the LED bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Approach {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Approach {
    /// All approaches in LED bank order
    pub const ALL: [Approach; 4] = [
        Approach::North,
        Approach::East,
        Approach::South,
        Approach::West,
    ];

    /// Position of this approach in per-approach arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The road this approach belongs to
    pub const fn axis(self) -> Axis {
        match self {
            Approach::North | Approach::South => Axis::NorthSouth,
            Approach::East | Approach::West => Axis::EastWest,
        }
    }
}

/// One of the two roads; both approaches of an axis always share a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    NorthSouth,
    EastWest,
}

impl Axis {
    /// The two approaches on this road
    pub const fn approaches(self) -> [Approach; 2] {
        match self {
            Axis::NorthSouth => [Approach::North, Approach::South],
            Axis::EastWest => [Approach::East, Approach::West],
        }
    }

    /// The perpendicular road
    pub const fn cross(self) -> Axis {
        match self {
            Axis::NorthSouth => Axis::EastWest,
            Axis::EastWest => Axis::NorthSouth,
        }
    }
}

/// A small set of approaches, stored as a bitmask
///
/// Used for "which buttons produced an arrival this tick" and
/// "which approaches had a car cleared this tick".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApproachSet(u8);

impl ApproachSet {
    /// The empty set
    pub const EMPTY: ApproachSet = ApproachSet(0);

    /// Create an empty set
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Add an approach to the set
    pub fn insert(&mut self, approach: Approach) {
        self.0 |= 1 << approach.index();
    }

    /// Check membership
    pub const fn contains(&self, approach: Approach) -> bool {
        self.0 & (1 << approach.index()) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in LED bank order
    pub fn iter(&self) -> impl Iterator<Item = Approach> + '_ {
        Approach::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl FromIterator<Approach> for ApproachSet {
    fn from_iter<I: IntoIterator<Item = Approach>>(iter: I) -> Self {
        let mut set = ApproachSet::new();
        for approach in iter {
            set.insert(approach);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_membership() {
        for approach in Approach::ALL {
            assert!(approach.axis().approaches().contains(&approach));
            assert!(!approach.axis().cross().approaches().contains(&approach));
        }
    }

    #[test]
    fn test_cross_is_involution() {
        assert_eq!(Axis::NorthSouth.cross().cross(), Axis::NorthSouth);
        assert_eq!(Axis::EastWest.cross(), Axis::NorthSouth);
    }

    #[test]
    fn test_bank_order() {
        let indices: [usize; 4] = Approach::ALL.map(Approach::index);
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_approach_set() {
        let mut set = ApproachSet::new();
        assert!(set.is_empty());

        set.insert(Approach::West);
        set.insert(Approach::North);
        set.insert(Approach::West);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Approach::North));
        assert!(!set.contains(Approach::East));

        let members: heapless::Vec<Approach, 4> = set.iter().collect();
        assert_eq!(members.as_slice(), &[Approach::North, Approach::West]);
    }

    #[test]
    fn test_approach_set_from_iter() {
        let set: ApproachSet = Axis::EastWest.approaches().into_iter().collect();
        assert!(set.contains(Approach::East));
        assert!(set.contains(Approach::West));
        assert_eq!(set.len(), 2);
    }
}
