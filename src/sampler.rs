use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerateError;
use crate::grid::{Agent, Cell, Grid};
use crate::reachability::is_reachable;
use crate::state_index::StateIndexer;

/// Fixed raw positions derived from the grid dimensions.
///
/// Agent endpoints sit one cell in from each corner so differently sized
/// mazes keep the same shape; the beacon sits near the right edge of the
/// middle row with an influence range scaled to the grid.
#[derive(Clone, Copy, Debug)]
pub struct MazeLayout {
    pub rows: i32,
    pub cols: i32,
    pub a_start: i32,
    pub a_goal: i32,
    pub b_start: i32,
    pub b_goal: i32,
    pub beacon_pos: i32,
    pub beacon_range: i32,
}

impl MazeLayout {
    pub fn new(rows: i32, cols: i32) -> Self {
        MazeLayout {
            rows,
            cols,
            a_start: cols + 1,
            a_goal: (rows - 1) * cols - 2,
            b_start: 2 * cols - 2,
            b_goal: (rows - 2) * cols + 1,
            beacon_pos: ((rows + 1) / 2) * cols - 2,
            beacon_range: (rows + cols) / 2 / 2,
        }
    }

    /// The four agent endpoint positions
    pub fn endpoints(&self) -> [i32; 4] {
        [self.a_start, self.a_goal, self.b_start, self.b_goal]
    }
}

/// A finalized maze: obstacle placement validated for both agents.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: Grid,
    pub layout: MazeLayout,
    /// Obstacle positions in ascending order
    pub obstacles: Vec<i32>,
}

impl Maze {
    /// State indexer over this maze's obstacle set
    pub fn indexer(&self) -> StateIndexer {
        StateIndexer::new(self.obstacles.clone())
    }

    /// Number of states after obstacle removal
    pub fn num_states(&self) -> i32 {
        self.layout.rows * self.layout.cols - self.obstacles.len() as i32
    }
}

/// Reject dimension/obstacle combinations before any randomness is
/// consumed. The obstacle ceiling reserves the 4 endpoints plus at least
/// one free cell.
pub fn validate_request(rows: i32, cols: i32, num_obstacles: i32) -> Result<(), GenerateError> {
    if rows < 4 || cols < 4 {
        return Err(GenerateError::BadDimensions { rows, cols });
    }
    let max = rows * cols - 5;
    if num_obstacles < 0 || num_obstacles > max {
        return Err(GenerateError::TooManyObstacles {
            requested: num_obstacles,
            max,
        });
    }
    Ok(())
}

/// Build the candidate grid for one obstacle placement.
/// The beacon is only drawn when its cell is still empty; on very small
/// grids the beacon position coincides with an agent endpoint.
fn build_grid(layout: &MazeLayout, obstacles: &[i32]) -> Grid {
    let mut grid = Grid::new(layout.rows, layout.cols);
    for &pos in obstacles {
        grid.set_cell_id(pos, Cell::Obstacle);
    }
    grid.set_cell_id(layout.a_start, Cell::Start(Agent::A));
    grid.set_cell_id(layout.a_goal, Cell::Goal(Agent::A));
    grid.set_cell_id(layout.b_start, Cell::Start(Agent::B));
    grid.set_cell_id(layout.b_goal, Cell::Goal(Agent::B));
    if grid.get_cell_id(layout.beacon_pos) == Cell::Empty {
        grid.set_cell_id(layout.beacon_pos, Cell::Beacon(layout.beacon_range));
    }
    grid
}

/// Sample obstacle placements until a grid validates for both agents.
///
/// Each attempt draws `num_obstacles` distinct positions uniformly from
/// the pool (every cell except the agent endpoints and the beacon cell),
/// rebuilds the grid and checks reachability for both start/goal pairs.
/// The first valid grid wins. Exhausting `max_attempts` is reported as an
/// explicit error, never as an empty maze.
pub fn sample_maze<R: Rng>(
    rows: i32,
    cols: i32,
    num_obstacles: i32,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Maze, GenerateError> {
    validate_request(rows, cols, num_obstacles)?;
    let layout = MazeLayout::new(rows, cols);

    let mut pool: Vec<i32> = (0..rows * cols).collect();
    pool.retain(|pos| !layout.endpoints().contains(pos));
    // When the beacon coincides with an endpoint it is already gone
    pool.retain(|&pos| pos != layout.beacon_pos);

    for _ in 0..max_attempts {
        let mut obstacles: Vec<i32> = pool
            .choose_multiple(rng, num_obstacles as usize)
            .copied()
            .collect();
        obstacles.sort_unstable();

        let grid = build_grid(&layout, &obstacles);
        if is_reachable(&grid, layout.a_start, layout.a_goal)
            && is_reachable(&grid, layout.b_start, layout.b_goal)
        {
            return Ok(Maze {
                grid,
                layout,
                obstacles,
            });
        }
    }

    Err(GenerateError::Exhausted {
        attempts: max_attempts,
    })
}
