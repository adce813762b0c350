use crate::state_index::StateIndexer;

/// The five model actions. The four directional actions move with the
/// 0.8/0.1/0.1 distribution; `noop` always stays in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Noop,
}

impl Action {
    /// Label used in the serialized table
    pub fn label(&self) -> &'static str {
        match self {
            Action::North => "n",
            Action::South => "s",
            Action::East => "e",
            Action::West => "w",
            Action::Noop => "noop",
        }
    }
}

/// One row of the transition table, in compact state numbering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub action: Action,
    pub from: i32,
    pub to: i32,
    pub prob: f64,
}

/// Compact destination state for a unit step from raw position `pos`
/// (compact state `state`), or None when the step is blocked by the grid
/// boundary or an obstacle.
///
/// Horizontal steps land on the numerically adjacent state: an open
/// neighbor means no obstacle sits between the two positions. Vertical
/// steps span a whole row, so the offset is corrected by the obstacle
/// count strictly between source and destination.
fn destination(
    rows: i32,
    cols: i32,
    indexer: &StateIndexer,
    step: Action,
    pos: i32,
    state: i32,
) -> Option<i32> {
    match step {
        Action::North => {
            if pos < cols || indexer.is_obstacle(pos - cols) {
                None
            } else {
                Some(state - cols + indexer.obstacles_within(pos - cols, pos))
            }
        }
        Action::South => {
            if pos >= rows * cols - cols || indexer.is_obstacle(pos + cols) {
                None
            } else {
                Some(state + cols - indexer.obstacles_within(pos, pos + cols))
            }
        }
        Action::East => {
            if pos % cols == cols - 1 || indexer.is_obstacle(pos + 1) {
                None
            } else {
                Some(state + 1)
            }
        }
        Action::West => {
            if pos % cols == 0 || indexer.is_obstacle(pos - 1) {
                None
            } else {
                Some(state - 1)
            }
        }
        Action::Noop => Some(state),
    }
}

/// Emit the outgoing distribution for one cell under one directional
/// action: 0.8 on the intended direction, 0.1 on each perpendicular, with
/// blocked mass folded into a trailing self-transition. A self-transition
/// is only emitted when some mass was actually folded.
fn push_moves(
    table: &mut Vec<Transition>,
    rows: i32,
    cols: i32,
    indexer: &StateIndexer,
    action: Action,
    pos: i32,
    state: i32,
) {
    let steps = match action {
        Action::North => [Action::North, Action::West, Action::East],
        Action::South => [Action::South, Action::West, Action::East],
        Action::East => [Action::East, Action::North, Action::South],
        Action::West => [Action::West, Action::North, Action::South],
        Action::Noop => unreachable!("noop has no directional distribution"),
    };

    let mut stay = 0.0;
    let mut moved = 0.0;
    for (i, step) in steps.iter().enumerate() {
        let prob = if i == 0 { 0.8 } else { 0.1 };
        match destination(rows, cols, indexer, *step, pos, state) {
            Some(to) => {
                table.push(Transition {
                    action,
                    from: state,
                    to,
                    prob,
                });
                moved += prob;
            }
            None => stay += prob,
        }
    }
    if stay != 0.0 {
        table.push(Transition {
            action,
            from: state,
            to: state,
            prob: stay,
        });
    }
    debug_assert!(
        (moved + stay - 1.0).abs() < 1e-9,
        "transition mass for state {} under {:?} sums to {}",
        state,
        action,
        moved + stay
    );
}

/// Full transition table for a finalized obstacle layout, in the
/// serialization order: one block per directional action over all
/// non-obstacle cells, then the noop self-loops.
///
/// Pure function of the layout: the same input always yields the same
/// table.
pub fn transition_table(rows: i32, cols: i32, indexer: &StateIndexer) -> Vec<Transition> {
    let mut table = Vec::new();

    for action in [Action::North, Action::South, Action::East, Action::West] {
        let mut state = 0;
        for pos in 0..rows * cols {
            if indexer.is_obstacle(pos) {
                continue;
            }
            push_moves(&mut table, rows, cols, indexer, action, pos, state);
            state += 1;
        }
    }

    let num_states = rows * cols - indexer.obstacles().len() as i32;
    for state in 0..num_states {
        table.push(Transition {
            action: Action::Noop,
            from: state,
            to: state,
            prob: 1.0,
        });
    }

    table
}

/// Render the table as `T: <action> : <from> : <to> <prob>` lines, with a
/// blank line after each source state's directional entries and wider gaps
/// between action blocks.
pub fn format_transitions(table: &[Transition]) -> String {
    let mut out = String::new();
    for (i, t) in table.iter().enumerate() {
        out.push_str(&format!(
            "T: {}   : {}          : {}        {:?}\n",
            t.action.label(),
            t.from,
            t.to,
            t.prob
        ));

        if t.action == Action::Noop {
            continue;
        }
        let next = table.get(i + 1);
        let group_end = match next {
            Some(n) => n.action != t.action || n.from != t.from,
            None => true,
        };
        if group_end {
            out.push('\n');
            if next.map_or(true, |n| n.action != t.action) {
                out.push_str("\n\n");
            }
        }
    }
    out
}
