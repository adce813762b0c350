use std::collections::HashMap;

use open_world_gen::sampler::{Maze, MazeLayout};
use open_world_gen::snapshot::MazeSnapshot;
use open_world_gen::{Action, Transition};

/// Build a finalized maze fixture from ASCII art.
///
/// '#' marks an obstacle, any other character is free. Agent endpoints and
/// the beacon are placed at their standard positions for the drawn
/// dimensions, so fixtures only need to draw the obstacle layout.
#[allow(dead_code)]
pub fn maze_from_ascii(art: &str) -> Maze {
    let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
    assert!(!lines.is_empty(), "fixture art must contain grid rows");

    let rows = lines.len() as i32;
    let cols = lines[0].chars().count() as i32;

    let mut obstacle_cells = Vec::new();
    for (y, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count() as i32,
            cols,
            "fixture rows must all have the same width"
        );
        for (x, ch) in line.chars().enumerate() {
            if ch == '#' {
                obstacle_cells.push(x as i32 + (y as i32) * cols);
            }
        }
    }

    let layout = MazeLayout::new(rows, cols);
    MazeSnapshot {
        rows,
        cols,
        obstacle_cells,
        a_start: layout.a_start,
        a_goal: layout.a_goal,
        b_start: layout.b_start,
        b_goal: layout.b_goal,
        beacon_pos: layout.beacon_pos,
        beacon_range: layout.beacon_range,
    }
    .restore_maze()
}

/// Sum of outgoing probability per (source state, action) pair
#[allow(dead_code)]
pub fn mass_by_state_action(table: &[Transition]) -> HashMap<(i32, Action), f64> {
    let mut mass: HashMap<(i32, Action), f64> = HashMap::new();
    for t in table {
        *mass.entry((t.from, t.action)).or_insert(0.0) += t.prob;
    }
    mass
}

/// All entries for one (source state, action) pair, in emission order
#[allow(dead_code)]
pub fn entries_for(table: &[Transition], from: i32, action: Action) -> Vec<Transition> {
    table
        .iter()
        .filter(|t| t.from == from && t.action == action)
        .copied()
        .collect()
}
