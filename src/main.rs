use std::env;
use std::fs;
use std::process;

use anyhow::{bail, Context};

use huarong::{Algorithm, Board};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <inputfile> <outputfile> <astar|dfs>", args[0]);
        process::exit(2);
    }

    let algorithm: Algorithm = args[3].parse()?;
    let text = fs::read_to_string(&args[1]).with_context(|| format!("failed to read {}", args[1]))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("malformed puzzle in {}", args[1]))?;

    let solution = board.solve(algorithm);
    let Some(solved) = solution.solved_board() else {
        bail!("no solution");
    };

    // the initial configuration, a blank line, then the goal configuration
    fs::write(&args[2], format!("{board}\n{solved}"))
        .with_context(|| format!("failed to write {}", args[2]))?;

    println!("{:?}", solution);

    Ok(())
}
