use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process;

use open_world_gen::config::Config;
use open_world_gen::model::{model_file_name, write_model};
use open_world_gen::sampler::sample_maze;
use open_world_gen::snapshot::MazeSnapshot;

/// Generate a random two-agent open-world maze and write it as a POMDP
/// model file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid rows (at least 4)
    rows: i32,

    /// Grid columns (at least 4)
    columns: i32,

    /// Number of wall cells to place
    obstacles: i32,

    /// Random seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory (overrides config)
    #[arg(long)]
    output: Option<String>,

    /// Also write a JSON snapshot of the maze to this path
    #[arg(long)]
    snapshot: Option<String>,
}

fn main() {
    let args = Args::parse();
    let config = Config::load();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let maze = match sample_maze(
        args.rows,
        args.columns,
        args.obstacles,
        config.sampler.max_attempts,
        &mut rng,
    ) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!("{}\n", maze.grid.render_maze());

    let dir = args.output.unwrap_or(config.output.dir);
    let file_name = model_file_name(args.rows, args.columns, maze.obstacles.len() as i32);
    let path = PathBuf::from(dir).join(&file_name);

    if let Err(e) = write_model(&path, &maze, config.model.discount) {
        eprintln!("{}", e);
        process::exit(1);
    }
    println!("wrote {}", path.display());

    if let Some(snapshot_path) = args.snapshot {
        let snapshot = MazeSnapshot::from_maze(&maze);
        if let Err(e) = snapshot.save_to_file(&snapshot_path) {
            eprintln!("{}", e);
            process::exit(1);
        }
        println!("wrote {}", snapshot_path);
    }
}
