//! Terminal knight board.
//!
//! Run: cargo run --bin knight-board -- --size 8

use clap::Parser;

use knight_board::BoardConfig;

#[derive(Parser)]
#[command(name = "knight-board", version, about = "Shortest knight path between two clicked cells")]
struct Cli {
    /// Side length of the board.
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(i32).range(1..))]
    size: i32,

    /// Select cells with the keyboard only.
    #[arg(long)]
    no_mouse: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = BoardConfig {
        size: cli.size,
        mouse: !cli.no_mouse,
    };

    if let Err(e) = knight_board::term::run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
