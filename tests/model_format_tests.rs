mod common;

use common::maze_from_ascii;
use open_world_gen::model::{model_file_name, render_model};

/// 5x5 interior with obstacles at positions 2, 10 and 14
const THREE_WALLS: &str = "
..#..
.....
#...#
.....
.....
";

#[test]
fn sections_appear_in_fixed_order() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.99);

    let sections = [
        "# file_name: open_world_5_5_3",
        "# A randomly-generated open-world problem with 2 agents a, b, with 3 walls",
        "# The maze looks like this:",
        "# The actions, NSEW",
        "rows: 5",
        "cols: 5",
        "discount: 0.99",
        "values: reward",
        "states: 22",
        "actions: n s e w noop",
        "start_states:",
        "end_states:",
        "holes:",
        "beacons:",
        "T: n   :",
        "T: noop   :",
    ];

    let mut last = 0;
    for section in sections {
        let at = model
            .find(section)
            .unwrap_or_else(|| panic!("missing section {:?}", section));
        assert!(at >= last, "section {:?} out of order", section);
        last = at;
    }
}

#[test]
fn maze_rendering_is_embedded_as_comments() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.99);

    for line in maze.grid.render_maze().lines() {
        let commented = format!("#   {}", line);
        assert!(
            model.contains(&commented),
            "maze line {:?} missing from header",
            line
        );
    }
}

#[test]
fn start_and_goal_states_use_compact_indices() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.99);

    // One obstacle (position 2) precedes the starts, two precede the goals
    assert!(model.contains("start_states:\na 5\nb 7\n"));
    assert!(model.contains("end_states:\na 15\nb 13\n"));
}

#[test]
fn holes_are_listed_as_row_col_in_ascending_order() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.99);

    assert!(model.contains("holes:\n0 2\n2 0\n2 4\n"));
}

#[test]
fn beacon_line_has_position_and_range() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.99);

    assert!(model.contains("beacons:\n2 3 : 2\n"));
}

#[test]
fn obstacle_free_maze_has_empty_holes_section() {
    let maze = maze_from_ascii("....\n....\n....\n....");
    let model = render_model(&maze, 0.99);

    assert!(model.contains("states: 16"));
    assert!(
        model.contains("holes:\n\nbeacons:"),
        "holes section stays empty with no obstacles"
    );
}

#[test]
fn discount_is_taken_from_the_caller() {
    let maze = maze_from_ascii(THREE_WALLS);
    let model = render_model(&maze, 0.95);

    assert!(model.contains("discount: 0.95\n"));
}

#[test]
fn model_file_name_matches_request() {
    assert_eq!(model_file_name(5, 5, 3), "open_world_5_5_3.POMDP");
    assert_eq!(model_file_name(10, 8, 20), "open_world_10_8_20.POMDP");
}
