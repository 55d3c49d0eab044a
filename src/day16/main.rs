mod cube;
mod error;
mod grid;
mod instruction;
mod metrics;
mod parse;
mod twist;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use crate::cube::CubeState;
use crate::instruction::Propagation;
use crate::parse::Puzzle;

type Result<T> = std::result::Result<T, anyhow::Error>;

const MAX_FACE_SIZE: i64 = 1024;

#[derive(Parser)]
#[command(name = "day16")]
#[command(about = "Roll the cube through its instructions and twists")]
struct Cmd {
    /// Puzzle input; read from stdin when omitted
    input: Option<PathBuf>,

    /// Side length of every face
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=MAX_FACE_SIZE))]
    face_size: u16,

    /// Log every step and dump all faces after it
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct Answers {
    top_two_absorption: u128,
    dominant_product: u128,
    wraparound_dominant_product: u128,
}

fn run(puzzle: &Puzzle, size: usize, propagation: Propagation) -> Result<CubeState> {
    let mut cube = CubeState::new(size);

    for (step, (ins, twist)) in puzzle.steps().enumerate() {
        tracing::debug!(
            step,
            face = cube.current_face().id(),
            ?ins,
            ?twist,
            ?propagation,
            "step"
        );
        cube.apply_instruction(ins, propagation)
            .with_context(|| format!("instruction {} ({:?})", step + 1, ins))?;
        cube.twist(twist);

        if tracing::enabled!(Level::DEBUG) {
            for face in cube.faces() {
                tracing::debug!(
                    face = face.id(),
                    role = ?cube.role_of(face.id()),
                    absorption = %cube.absorption(face.id()),
                    "\n{}",
                    face.show()
                );
            }
        }
    }

    Ok(cube)
}

fn solve(puzzle: &Puzzle, size: usize) -> Result<Answers> {
    let cube = run(puzzle, size, Propagation::CurrentFace)?;
    let wrapped = run(puzzle, size, Propagation::Wraparound)?;

    Ok(Answers {
        top_two_absorption: cube.top_two_absorption_product()?,
        dominant_product: cube.dominant_product(),
        wraparound_dominant_product: wrapped.dominant_product(),
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();

    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let buffer = read_input(cmd.input.as_ref())?;
    let puzzle = Puzzle::parse(&buffer).context("parsing puzzle input")?;
    let size = usize::from(cmd.face_size);

    tracing::info!(
        size,
        instructions = puzzle.instructions.len(),
        twists = puzzle.twists.len(),
        "loaded puzzle"
    );

    let answers = solve(&puzzle, size)?;
    tracing::info!(?answers, "solved");

    println!("Answer part 1: {}", answers.top_two_absorption);
    println!("Answer part 2: {}", answers.dominant_product);
    println!("Answer part 3: {}", answers.wraparound_dominant_product);

    Ok(())
}
