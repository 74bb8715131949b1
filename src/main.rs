use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use courtside::cli::{
    CourtCommands, PersonCommands, QueueCommands, exit_code, run_court_create, run_court_list,
    run_court_remove, run_court_show, run_court_update, run_init, run_move, run_person_add,
    run_person_list, run_person_remove, run_person_show, run_person_update, run_queue_show,
    run_queue_update,
};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Court and queue roster manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, counter and empty queue
    Init {
        /// Data directory for roster records
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Capacity of every court (overrides courtside.toml)
        #[arg(long)]
        players_per_court: Option<usize>,
    },

    /// Manage people
    Person {
        #[command(subcommand)]
        command: PersonCommands,
    },

    /// Manage courts
    Court {
        #[command(subcommand)]
        command: CourtCommands,
    },

    /// Inspect or edit the queue
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },

    /// Move players between courts and the queue
    Move {
        /// Data directory for roster records
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Where the players are now: `queue` or `court:<id>`
        #[arg(long)]
        from: String,

        /// Where the players go: `queue` or `court:<id>`
        #[arg(long)]
        to: String,

        /// Player ids to move
        #[arg(required = true)]
        players: Vec<String>,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init {
            data_dir,
            players_per_court,
        } => run_init(data_dir, players_per_court),
        Commands::Person { command } => match command {
            PersonCommands::Add {
                data_dir,
                id,
                first_name,
                last_name,
                email,
                password,
                player,
                non_interactive,
            } => run_person_add(
                data_dir,
                id,
                first_name,
                last_name,
                email,
                password,
                player,
                non_interactive,
            ),
            PersonCommands::List { data_dir, json } => run_person_list(data_dir, json),
            PersonCommands::Show { data_dir, id, json } => run_person_show(data_dir, id, json),
            PersonCommands::Remove {
                data_dir,
                id,
                non_interactive,
                yes,
            } => run_person_remove(data_dir, id, non_interactive, yes),
            PersonCommands::Update {
                data_dir,
                id,
                acting_as,
                password,
                fields,
                non_interactive,
            } => run_person_update(data_dir, id, acting_as, password, fields, non_interactive),
        },
        Commands::Court { command } => match command {
            CourtCommands::Create { data_dir, name } => run_court_create(data_dir, name),
            CourtCommands::List { data_dir, json } => run_court_list(data_dir, json),
            CourtCommands::Show { data_dir, id, json } => run_court_show(data_dir, id, json),
            CourtCommands::Remove {
                data_dir,
                id,
                non_interactive,
                yes,
            } => run_court_remove(data_dir, id, non_interactive, yes),
            CourtCommands::Update {
                data_dir,
                id,
                fields,
            } => run_court_update(data_dir, id, fields),
        },
        Commands::Queue { command } => match command {
            QueueCommands::Show { data_dir, json } => run_queue_show(data_dir, json),
            QueueCommands::Update { data_dir, fields } => run_queue_update(data_dir, fields),
        },
        Commands::Move {
            data_dir,
            from,
            to,
            players,
        } => run_move(data_dir, from, to, players),
    }
}

fn main() -> ExitCode {
    let filter = match "courtside=info".parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = u8::try_from(exit_code(&err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
