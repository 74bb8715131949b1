use clap::Subcommand;

#[derive(Subcommand)]
pub enum PersonCommands {
    /// Register a new person (the first one becomes admin)
    Add {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Identifier for the new person
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Mark the person as a player
        #[arg(long)]
        player: bool,

        /// Skip interactive prompts (requires every field as a flag)
        #[arg(long)]
        non_interactive: bool,
    },

    /// List registered people
    List {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one person
    Show {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a person
    Remove {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        id: String,

        /// Skip interactive prompts (requires --yes)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Change fields of a person, acting as a signed-in person
    Update {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Person to change
        #[arg(long)]
        id: String,

        /// Person performing the change
        #[arg(long = "as")]
        acting_as: String,

        /// Password of the acting person (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,

        /// JSON object of fields, e.g. '{"Email": "a@b.c", "Status": "admin"}'
        #[arg(long)]
        fields: String,

        /// Skip interactive prompts (requires --password)
        #[arg(long)]
        non_interactive: bool,
    },
}

#[derive(Subcommand)]
pub enum CourtCommands {
    /// Create a court under the next free id
    Create {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// List courts
    List {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one court
    Show {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a court
    Remove {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        id: String,

        /// Skip interactive prompts (requires --yes)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Change a court's name or players
    Update {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        id: String,

        /// JSON object of fields, e.g. '{"Name": "Center", "Players": ["p1"]}'
        #[arg(long)]
        fields: String,
    },
}

#[derive(Subcommand)]
pub enum QueueCommands {
    /// Show the queue
    Show {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the queue's name or players
    Update {
        /// Data directory holding the roster
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// JSON object of fields, e.g. '{"Container": {"Players": ["p1"]}}'
        #[arg(long)]
        fields: String,
    },
}
