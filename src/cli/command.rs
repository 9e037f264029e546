use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Create a user account with its profile",
        long_about = "Insert a new account row (the id is assigned by the store) and the\nprofile row that belongs to it. Usernames are unique, compared\ncase-insensitively, and stored lowercase."
    )]
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    #[command(about = "Delete a user account and its profile by id")]
    Delete {
        #[arg(long)]
        id: i64,
    },
    #[command(about = "List all users with their profile data")]
    List {
        #[arg(long, default_value_t = false, help = "Print records as JSON")]
        json: bool,
    },
    #[command(
        about = "Update the profile of an existing user",
        long_about = "Rewrite name, surname, and description for the user with the given\nusername. The username itself cannot be changed."
    )]
    Update {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}
