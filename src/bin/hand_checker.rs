use std::process::ExitCode;

use clap::Parser;
use poker_hand_checker::PokerHandsChecker;
use poker_hand_checker::core::{FlatDeck, HAND_SIZE, Hand, PokerHandError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "hand-checker")]
#[command(about = "Classify two five card poker hands and say which one wins")]
struct Cli {
    /// Deal two random hands instead of reading them
    #[arg(short, long, conflicts_with_all = ["left", "right"])]
    random: bool,

    /// Left hand, e.g. "As Kd Qc Ts 2s"
    #[arg(required_unless_present = "random")]
    left: Option<String>,

    /// Right hand, e.g. "2c 2d 7s 9c Tc"
    #[arg(required_unless_present = "random")]
    right: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PokerHandError> {
    let (left, right) = if cli.random {
        let mut deck = FlatDeck::default();
        let left: Hand = (0..HAND_SIZE).filter_map(|_| deck.deal()).collect();
        let right: Hand = (0..HAND_SIZE).filter_map(|_| deck.deal()).collect();
        (left, right)
    } else {
        (
            Hand::new_from_str(cli.left.as_deref().unwrap_or_default())?,
            Hand::new_from_str(cli.right.as_deref().unwrap_or_default())?,
        )
    };

    let checker = PokerHandsChecker::new();
    for (side, hand) in [("left", &left), ("right", &right)] {
        println!(
            "{side:>5}: [{hand}] {} (valid: {})",
            checker.category(hand),
            checker.is_valid_hand(hand)
        );
    }

    let outcome = checker.compare_hands(&left, &right)?;
    println!("{outcome}");
    Ok(())
}
