use clap::Parser;
use holdem_equity::cards::parse_cards;
use holdem_equity::equity::{scenario_count, Enumerator};
use holdem_equity::hand::HoleCards;
use holdem_equity::situation::{GameSituation, Street};
use log::{error, info};
use std::error::Error;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(version, about = "Exact heads-up Texas Hold'em equity")]
struct Cli {
    /// The player's two hole cards, e.g. "Jh Qh".
    #[clap(long, short = 'H')]
    hole: HoleCards,
    /// Known community cards (3, 4 or 5), e.g. "Kh Th 6d".
    #[clap(long, short, default_value = "")]
    board: String,
    /// Enumerate on the calling thread only.
    #[clap(long)]
    sequential: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let board = parse_cards(&cli.board)?;
    let situation = GameSituation::try_new(cli.hole, board)?;
    info!("{situation}");

    if situation.street() == Street::River {
        info!("best hand {}", situation.best_hand()?);
    }

    let enumerator = Enumerator::new().parallel(!cli.sequential);
    let start = Instant::now();
    let tally = situation.tally_with(&enumerator)?;
    info!(
        "{} scenarios on the {} in {:.2?}",
        scenario_count(situation.community().len()),
        situation.street(),
        start.elapsed()
    );

    let equity = tally.equity();
    println!("wins {} ties {} losses {}", tally.wins, tally.ties, tally.losses);
    println!("{equity}");
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
