mod config;

use anyhow::bail;
use clap::{Parser, Subcommand};
use config::SwissConfig;
use swiss_core::compute_pairings;
use swiss_store::{init_db, MatchRepo, PlayerRepo, TournamentRepo};

#[derive(Parser)]
#[command(name = "swiss")]
#[command(about = "Swiss-system tournament tracker")]
struct Cli {
    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a tournament
    Create {
        /// Declared player capacity
        #[arg(short, long, default_value = "8")]
        capacity: i64,
    },
    /// Register a player into a tournament
    Register {
        /// Tournament id
        tournament: i64,
        /// Player display name
        name: String,
    },
    /// Count the players enrolled in a tournament
    Count {
        /// Tournament id
        tournament: i64,
    },
    /// Show standings, ranked by wins
    Standings {
        /// Tournament id
        tournament: i64,
    },
    /// Compute next-round pairings from the current records
    Pairings {
        /// Tournament id
        tournament: i64,
    },
    /// Report a match result
    Report {
        /// Tournament id
        tournament: i64,
        /// Winner's player id
        winner: i64,
        /// Loser's player id
        loser: i64,
    },
    /// Clear a tournament's matches and enrollments
    Reset {
        /// Tournament id
        tournament: i64,
    },
    /// Delete a tournament (its matches and enrollments go with it)
    Delete {
        /// Tournament id
        tournament: i64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = SwissConfig::load().unwrap_or_default();

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let db = init_db(&config.db_path)?;
    let tournaments = TournamentRepo::new(db.clone());
    let players = PlayerRepo::new(db.clone());
    let matches = MatchRepo::new(db);

    match cli.command {
        Commands::Create { capacity } => {
            let id = tournaments.create(capacity)?;
            tracing::info!("created tournament {id} (capacity {capacity})");
            println!("Created tournament {id}");
        }
        Commands::Register { tournament, name } => {
            ensure_tournament(&tournaments, tournament)?;
            let id = players.register(&name, tournament)?;
            tracing::info!("registered player {id} into tournament {tournament}");
            println!("Registered {name} as player {id}");
        }
        Commands::Count { tournament } => {
            ensure_tournament(&tournaments, tournament)?;
            println!("{}", players.count(tournament)?);
        }
        Commands::Standings { tournament } => {
            ensure_tournament(&tournaments, tournament)?;
            let standings = tournaments.standings(tournament)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                println!("{:>6}  {:<24} {:>5} {:>8}", "id", "name", "wins", "matches");
                for s in &standings {
                    println!(
                        "{:>6}  {:<24} {:>5} {:>8}",
                        s.id, s.name, s.wins, s.matches_played
                    );
                }
            }
        }
        Commands::Pairings { tournament } => {
            ensure_tournament(&tournaments, tournament)?;
            let ranking = tournaments.pairing_ranking(tournament)?;
            let pairings = compute_pairings(&ranking)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                for p in &pairings {
                    println!(
                        "{} ({}) vs {} ({})",
                        p.first_name, p.first_id, p.second_name, p.second_id
                    );
                }
            }
        }
        Commands::Report {
            tournament,
            winner,
            loser,
        } => {
            ensure_tournament(&tournaments, tournament)?;
            let id = matches.report(winner, loser, tournament)?;
            tracing::info!("reported match {id}: {winner} beat {loser}");
            println!("Recorded match {id}");
        }
        Commands::Reset { tournament } => {
            ensure_tournament(&tournaments, tournament)?;
            matches.clear(tournament)?;
            players.clear(tournament)?;
            tracing::info!("reset tournament {tournament}");
            println!("Reset tournament {tournament}");
        }
        Commands::Delete { tournament } => {
            ensure_tournament(&tournaments, tournament)?;
            tournaments.delete(tournament)?;
            tracing::info!("deleted tournament {tournament}");
            println!("Deleted tournament {tournament}");
        }
    }

    Ok(())
}

fn ensure_tournament(repo: &TournamentRepo, id: i64) -> anyhow::Result<()> {
    if repo.get(id)?.is_none() {
        bail!("no such tournament: {id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_create_with_capacity() {
        let cli = Cli::try_parse_from(["swiss", "create", "--capacity", "16"]).unwrap();
        match cli.command {
            Commands::Create { capacity } => assert_eq!(capacity, 16),
            _ => panic!("Expected create command"),
        }
    }

    #[test]
    fn test_cli_create_capacity_defaults_to_eight() {
        let cli = Cli::try_parse_from(["swiss", "create"]).unwrap();
        match cli.command {
            Commands::Create { capacity } => assert_eq!(capacity, 8),
            _ => panic!("Expected create command"),
        }
    }

    #[test]
    fn test_cli_parses_register_command() {
        let cli = Cli::try_parse_from(["swiss", "register", "3", "Chandra Nalaar"]).unwrap();
        match cli.command {
            Commands::Register { tournament, name } => {
                assert_eq!(tournament, 3);
                assert_eq!(name, "Chandra Nalaar");
            }
            _ => panic!("Expected register command"),
        }
    }

    #[test]
    fn test_cli_parses_report_command() {
        let cli = Cli::try_parse_from(["swiss", "report", "1", "7", "9"]).unwrap();
        match cli.command {
            Commands::Report {
                tournament,
                winner,
                loser,
            } => {
                assert_eq!(tournament, 1);
                assert_eq!(winner, 7);
                assert_eq!(loser, 9);
            }
            _ => panic!("Expected report command"),
        }
    }

    #[test]
    fn test_cli_json_flag_is_global() {
        let cli = Cli::try_parse_from(["swiss", "standings", "1", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Standings { tournament } => assert_eq!(tournament, 1),
            _ => panic!("Expected standings command"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_tournament_argument() {
        assert!(Cli::try_parse_from(["swiss", "pairings"]).is_err());
    }
}
