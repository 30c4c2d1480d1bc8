use clap::{Parser, ValueEnum};
use tictactoe::{init_logging, Board, Chip, PathQualityQuery, QualityRequest};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Chip {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Chip::X,
            PlayerArg::O => Chip::O,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Rank every legal tic-tac-toe move by its losing continuations")]
struct Cli {
    /// Board as 9 row-major characters: X, O and . for empty (e.g. "XOX.O....")
    #[arg(long)]
    board: String,
    /// Player to evaluate for.
    #[arg(long, value_enum, default_value_t = PlayerArg::X)]
    player: PlayerArg,
    /// Emit the raw response as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let board: Board = cli.board.parse()?;
    let player = Chip::from(cli.player);
    let request = QualityRequest {
        request_id: 0,
        board,
        player,
    };
    let response = PathQualityQuery::new(request).run().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", board);
        println!(
            "Ranked moves for {} ({} paths, {} ms):",
            player,
            response.paths.len(),
            response.elapsed_ms
        );
        for path in &response.paths {
            println!(
                "  {}  lost {:>5}  won {:>5}  draw {:>5}",
                path.coordinate, path.quality.lost, path.quality.won, path.quality.draw
            );
        }
    }
    Ok(())
}
