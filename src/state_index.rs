/// Maps raw grid positions to the dense state numbering that excludes
/// obstacle cells.
///
/// A raw position's state index is the position minus the number of
/// obstacles at smaller positions. The mapping is monotone: it is a
/// bijection from non-obstacle positions onto `0..rows*cols-num_obstacles`.
#[derive(Clone, Debug)]
pub struct StateIndexer {
    /// Obstacle positions in ascending order
    obstacles: Vec<i32>,
}

impl StateIndexer {
    pub fn new(mut obstacles: Vec<i32>) -> Self {
        obstacles.sort_unstable();
        StateIndexer { obstacles }
    }

    /// Obstacle positions in ascending order
    pub fn obstacles(&self) -> &[i32] {
        &self.obstacles
    }

    /// Check if a raw position is an obstacle
    pub fn is_obstacle(&self, pos: i32) -> bool {
        self.obstacles.binary_search(&pos).is_ok()
    }

    /// Count obstacles in the inclusive range [lo, hi].
    pub fn obstacles_within(&self, lo: i32, hi: i32) -> i32 {
        let mut count = 0;
        for &pos in &self.obstacles {
            if pos < lo {
                continue;
            }
            if pos > hi {
                break;
            }
            count += 1;
        }
        count
    }

    /// Compact state index of a non-obstacle raw position.
    ///
    /// Calling this on an obstacle position is a bug in the caller and
    /// fails loudly rather than producing a misnumbered state.
    pub fn compact(&self, pos: i32) -> i32 {
        assert!(
            !self.is_obstacle(pos),
            "state index requested for obstacle position {}",
            pos
        );
        pos - self.obstacles_within(0, pos)
    }
}
