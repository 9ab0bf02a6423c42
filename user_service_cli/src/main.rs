use clap::{Args, Parser, Subcommand};
use serde_json::json;

use server::models::user::User;
use user_service_cli::UserClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Command line client for the user service", long_about = None)]
struct Cli {
    /// Address of the user service
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    addr: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct UserFields {
    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    password: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    role: String,
}

impl UserFields {
    fn into_user(self, username: String) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            username,
            password: self.password,
            email: self.email,
            role: self.role,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new user
    Post {
        username: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Fetch a user
    Get { username: String },
    /// Create or replace a user
    Put {
        username: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Partially update a user; omitted fields stay as they are
    Patch {
        username: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Remove a user
    Delete { username: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let client = UserClient::new(&args.addr)?;

    match args.command {
        Command::Post { username, fields } => {
            client.post_user(&fields.into_user(username)).await?;
            println!("{}", json!({}));
        }
        Command::Get { username } => {
            let user = client.get_user(&username).await?;
            println!("{}", serde_json::to_string_pretty(&json!({ "user": user }))?);
        }
        Command::Put { username, fields } => {
            let user = fields.into_user(username.clone());
            client.put_user(&username, &user).await?;
            println!("{}", json!({}));
        }
        Command::Patch { username, fields } => {
            let user = fields.into_user(username.clone());
            client.patch_user(&username, &user).await?;
            println!("{}", json!({}));
        }
        Command::Delete { username } => {
            client.delete_user(&username).await?;
            println!("{}", json!({}));
        }
    }

    Ok(())
}
