//! holdem-equity: Texas Hold'em hand ranking and exact heads-up equity
//!
//! Goals:
//! - Deterministic, exhaustive enumeration; no sampling
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: equity on the river
//! ```
//! use holdem_equity::cards::parse_cards;
//! use holdem_equity::evaluator::Category;
//! use holdem_equity::situation::GameSituation;
//!
//! let hole = "2h 5s".parse().unwrap();
//! let board = parse_cards("4d 3s 6d Jc Qs").unwrap();
//! let situation = GameSituation::try_new(hole, board).unwrap();
//!
//! assert_eq!(situation.best_hand().unwrap().category(), Category::Straight);
//! let p = situation.probabilities().unwrap();
//! assert!((p.win - 0.9788).abs() < 1e-4);
//! ```
//!
//! ## CLI
//! Run the enumerator from a shell with:
//! ```sh
//! cargo run --release --bin holdem-equity -- --hole "Jh Qh" --board "Kh Th 6d"
//! ```

pub mod cards;
pub mod combinations;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod situation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
