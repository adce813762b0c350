/// Counts collision events in a solver track log.
///
/// A run of consecutive lines containing "collide" counts as a single
/// event, so one collision reported across several log lines is not
/// counted more than once.

use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <track_log.txt>", args[0]);
        eprintln!("Counts collision events recorded in a solver track log");
        process::exit(1);
    }

    let filename = &args[1];
    let contents = match fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read {}: {}", filename, e);
            process::exit(1);
        }
    };

    println!("{}", count_collisions(&contents));
}

/// Count runs of consecutive lines containing "collide"
fn count_collisions(log: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for line in log.lines() {
        let hit = line.contains("collide");
        if hit && !in_run {
            count += 1;
        }
        in_run = hit;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::count_collisions;

    #[test]
    fn counts_separate_events() {
        let log = "step 1\nagents collide at 4\nstep 2\nagents collide at 9\n";
        assert_eq!(count_collisions(log), 2);
    }

    #[test]
    fn consecutive_lines_count_once() {
        let log = "agents collide at 4\ncollide resolved\nstep 2\n";
        assert_eq!(count_collisions(log), 1);
    }

    #[test]
    fn empty_log_has_no_events() {
        assert_eq!(count_collisions(""), 0);
    }
}
