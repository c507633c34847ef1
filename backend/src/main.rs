use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use clap::Parser;

const MIGRATIONS: diesel_async_migrations::EmbeddedMigrations =
    diesel_async_migrations::embed_migrations!("../migrations/");

async fn run_migrations(connection: &mut diesel_async::AsyncPgConnection) {
    MIGRATIONS.run_pending_migrations(connection).await.unwrap();
}

#[derive(Debug, clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Fetch the current hiscore snapshot for each player and store it
    Ingest {
        /// Player names to ingest
        #[arg(required = true)]
        players: Vec<String>,
        /// Concurrent player runs, bounded to stay within the feed's informal rate limits
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
    /// Recompute the weekly summary tables from the stored history
    Summarize,
    /// Print the stored current-state rows for one player
    Show {
        player: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("decoder")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    let args = Args::parse();

    tracing::info!("Starting...");

    if let Err(name) = decoder::categories::verify_partition() {
        panic!("{:?} is in both the raid and the boss set", name);
    }

    tracing::info!("Applying Migrations");
    run_migrations(&mut backend::db_connection().await.unwrap()).await;
    tracing::info!("Completed Migrations");

    match args.command {
        Command::Ingest { players, workers } => {
            let client = backend::hiscores::Client::new();

            let results = backend::ingest::run_batch(&client, players, workers).await;

            let mut failed = 0;
            for (player_name, result) in results.iter() {
                match result {
                    Ok(()) => {
                        tracing::info!("Stored snapshot for {:?}", player_name);
                    }
                    Err(e) => {
                        failed += 1;
                        tracing::error!("Ingesting {:?}: {:?}", player_name, e);
                    }
                }
            }
            tracing::info!("Ingested {}/{} players", results.len() - failed, results.len());

            if failed == results.len() {
                std::process::exit(1);
            }
        }
        Command::Summarize => {
            if let Err(e) = backend::summary::update_weekly_summaries().await {
                tracing::error!("Updating weekly summaries: {:?}", e);
                std::process::exit(1);
            }
        }
        Command::Show { player } => {
            let (mut skills, mut activities) = match backend::query::player_state(&player).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!("Loading state for {:?}: {:?}", player, e);
                    std::process::exit(1);
                }
            };

            // Print in feed order rather than whatever the store returns
            skills.sort_by_key(|row| decoder::feed::SKILLS.iter().position(|s| *s == row.skill));
            activities
                .sort_by_key(|row| decoder::feed::ACTIVITIES.iter().position(|a| *a == row.activity));

            println!("Skills for {}:", player);
            for row in skills.iter() {
                println!(
                    "  {}: rank {}, level {}, experience {}",
                    row.skill, row.rank, row.level, row.experience
                );
            }

            println!("Activities for {}:", player);
            for row in activities.iter() {
                println!("  {}: rank {}, score {}", row.activity, row.rank, row.score);
            }
        }
    }
}
