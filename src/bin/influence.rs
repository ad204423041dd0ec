use anyhow::Result;
use clap::Parser;
use pgn_uci::influence::square_influence;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess};

#[derive(Parser, Debug)]
#[command(
    name = "pgn-uci-influence",
    about = "Print the attackers of every square for a position"
)]
struct Args {
    /// Position in FEN; defaults to the standard start position
    fen: Option<String>,
}

fn main() -> Result<()> {
    pgn_uci::log::init();
    let args = Args::parse();

    let pos: Chess = match args.fen {
        Some(fen) => fen
            .parse::<Fen>()
            .map_err(|e| anyhow::anyhow!("Invalid FEN string: {e}"))?
            .into_position(CastlingMode::Standard)
            .map_err(|e| anyhow::anyhow!("Illegal position: {e}"))?,
        None => Chess::default(),
    };

    for (square, attackers) in square_influence(&pos) {
        let list: Vec<String> = attackers.iter().map(ToString::to_string).collect();
        println!("{square}: {}", list.join(" "));
    }
    Ok(())
}
