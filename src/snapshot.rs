use serde::{Deserialize, Serialize};
use std::fs;

use crate::grid::{Agent, Cell, Grid};
use crate::sampler::{Maze, MazeLayout};

/// Snapshot of a finalized maze for saving/loading as JSON.
///
/// Stores the obstacle placement and the fixed positions verbatim rather
/// than re-deriving them, so a snapshot stays valid even if the layout
/// rule changes between versions.
#[derive(Debug, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub rows: i32,
    pub cols: i32,
    /// Obstacle positions (stored as cell IDs, ascending)
    pub obstacle_cells: Vec<i32>,
    pub a_start: i32,
    pub a_goal: i32,
    pub b_start: i32,
    pub b_goal: i32,
    pub beacon_pos: i32,
    pub beacon_range: i32,
}

impl MazeSnapshot {
    /// Create a snapshot from a finalized maze
    pub fn from_maze(maze: &Maze) -> Self {
        MazeSnapshot {
            rows: maze.layout.rows,
            cols: maze.layout.cols,
            obstacle_cells: maze.obstacles.clone(),
            a_start: maze.layout.a_start,
            a_goal: maze.layout.a_goal,
            b_start: maze.layout.b_start,
            b_goal: maze.layout.b_goal,
            beacon_pos: maze.layout.beacon_pos,
            beacon_range: maze.layout.beacon_range,
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize maze snapshot: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write snapshot file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read snapshot file: {}", e))?;

        let snapshot: MazeSnapshot =
            serde_json::from_str(&json).map_err(|e| format!("Failed to parse snapshot file: {}", e))?;

        Ok(snapshot)
    }

    /// Rebuild the maze from this snapshot
    pub fn restore_maze(&self) -> Maze {
        let layout = MazeLayout {
            rows: self.rows,
            cols: self.cols,
            a_start: self.a_start,
            a_goal: self.a_goal,
            b_start: self.b_start,
            b_goal: self.b_goal,
            beacon_pos: self.beacon_pos,
            beacon_range: self.beacon_range,
        };

        let mut grid = Grid::new(self.rows, self.cols);
        for &pos in &self.obstacle_cells {
            grid.set_cell_id(pos, Cell::Obstacle);
        }
        grid.set_cell_id(layout.a_start, Cell::Start(Agent::A));
        grid.set_cell_id(layout.a_goal, Cell::Goal(Agent::A));
        grid.set_cell_id(layout.b_start, Cell::Start(Agent::B));
        grid.set_cell_id(layout.b_goal, Cell::Goal(Agent::B));
        if grid.get_cell_id(layout.beacon_pos) == Cell::Empty {
            grid.set_cell_id(layout.beacon_pos, Cell::Beacon(layout.beacon_range));
        }

        let mut obstacles = self.obstacle_cells.clone();
        obstacles.sort_unstable();

        Maze {
            grid,
            layout,
            obstacles,
        }
    }
}
