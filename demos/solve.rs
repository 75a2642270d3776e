//! Generate a maze and run every search strategy over it.
//!
//! Run: cargo run --bin maze-solve -- [width] [height] [seed]

use maze_core::Point;
use maze_demos::overlay;
use maze_gen::MazeGen;
use maze_paths::{astar_exploration, list_strategies, search};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn arg<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> Result<T, String> {
    match args.get(i) {
        Some(s) => s.parse().map_err(|_| format!("invalid argument \u{201c}{s}\u{201d}")),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: i32 = arg(&args, 0, 16)?;
    let height: i32 = arg(&args, 1, 8)?;
    let seed: u64 = arg(&args, 2, 1)?;

    let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
    let maze = mg.generate(width, height, ((width * height).max(0) / 10) as usize);
    let from = Point::ZERO;
    let to = Point::new(width - 1, height - 1);

    for &strategy in list_strategies() {
        let result = search(&maze, from, to, strategy);
        let (explored, path) = if strategy.is_explore() {
            (result.as_slice(), &[][..])
        } else {
            (&[][..], result.as_slice())
        };
        println!("{strategy}: {} points", result.len());
        println!("{}", overlay(&maze, from, to, explored, path));
    }

    let e = astar_exploration(&maze, from, to);
    println!(
        "A* expanded {} cells for a {}-move path",
        e.explored.len(),
        e.path.len()
    );
    println!("{}", overlay(&maze, from, to, &e.explored, &e.path));
    Ok(())
}
