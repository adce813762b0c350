use std::fs;
use std::path::Path;

use crate::error::GenerateError;
use crate::sampler::Maze;
use crate::transitions::{format_transitions, transition_table};

/// Prose note reproduced in every generated file, describing the
/// stochastic movement model.
const MOVEMENT_NOTE: &str = "\
# The actions, NSEW, have the expected result 80% of the time, and
# transition in a direction perpendicular to the intended one with a 10%
# probability for each direction. Movement into a wall returns the agent
# to its original state.\n\n";

/// Base name of the model file for a given request
pub fn model_file_name(rows: i32, cols: i32, num_obstacles: i32) -> String {
    format!("open_world_{}_{}_{}.POMDP", rows, cols, num_obstacles)
}

/// Assemble the complete model document: header comments, declarations,
/// start/end states, holes, beacons and the transition table, in that
/// fixed order.
pub fn render_model(maze: &Maze, discount: f64) -> String {
    let layout = &maze.layout;
    let indexer = maze.indexer();
    let num_obstacles = maze.obstacles.len() as i32;

    let mut out = String::new();

    out.push_str(&format!(
        "# file_name: open_world_{}_{}_{}\n\n",
        layout.rows, layout.cols, num_obstacles
    ));
    out.push_str(&format!(
        "# A randomly-generated open-world problem with 2 agents a, b, with {} walls\n\n",
        num_obstacles
    ));
    out.push_str("# The maze looks like this:\n#   <num>: Beacon with influence range of num, <lower-case letter>: start position of <letter>, <upper-case letter>: end position of <letter> - positive\n\n");

    for line in maze.grid.render_maze().lines() {
        out.push_str("#   ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str(MOVEMENT_NOTE);

    out.push_str(&format!("rows: {}\n", layout.rows));
    out.push_str(&format!("cols: {}\n", layout.cols));
    out.push_str(&format!("discount: {}\n", discount));
    out.push_str("values: reward\n");
    out.push_str(&format!("states: {}\n", maze.num_states()));
    out.push_str("actions: n s e w noop\n\n");

    out.push_str("start_states:\n");
    out.push_str(&format!("a {}\n", indexer.compact(layout.a_start)));
    out.push_str(&format!("b {}\n\n", indexer.compact(layout.b_start)));

    out.push_str("end_states:\n");
    out.push_str(&format!("a {}\n", indexer.compact(layout.a_goal)));
    out.push_str(&format!("b {}\n\n", indexer.compact(layout.b_goal)));

    out.push_str("holes:\n");
    for &pos in &maze.obstacles {
        let (x, y) = maze.grid.get_coords(pos);
        out.push_str(&format!("{} {}\n", y, x));
    }

    let (bx, by) = maze.grid.get_coords(layout.beacon_pos);
    out.push_str("\nbeacons:\n");
    out.push_str(&format!("{} {} : {}\n\n", by, bx, layout.beacon_range));

    let table = transition_table(layout.rows, layout.cols, &indexer);
    out.push_str(&format_transitions(&table));

    out
}

/// Render the model and write it in a single call, so a failure never
/// leaves a partial file behind.
pub fn write_model(path: &Path, maze: &Maze, discount: f64) -> Result<(), GenerateError> {
    let text = render_model(maze, discount);
    fs::write(path, text)?;
    Ok(())
}
