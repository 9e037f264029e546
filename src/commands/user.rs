use anyhow::{Context, Result};

use crate::app::App;
use crate::cli::Command;
use crate::storage::{UserRecord, UserStore};

pub fn run(cmd: &Command, app: &App) -> Result<()> {
    match cmd {
        Command::Add {
            username,
            name,
            surname,
            description,
        } => {
            let record = UserRecord {
                id: 0,
                username: username.clone(),
                name: name.clone(),
                surname: surname.clone(),
                description: description.clone(),
            }
            .normalized();
            app.store.add_user(&record).context("adding user")?;
            log::info!("added user {}", record.username);
            Ok(())
        }
        Command::Delete { id } => {
            app.store.delete_user(*id).context("deleting user")?;
            log::info!("deleted user id={id}");
            Ok(())
        }
        Command::List { json } => {
            let users = app.store.list_users().context("listing users")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                for user in &users {
                    println!(
                        "{}\t{}\t{} {}\t{}",
                        user.id, user.username, user.name, user.surname, user.description
                    );
                }
            }
            log::info!("listed {} users", users.len());
            Ok(())
        }
        Command::Update {
            username,
            name,
            surname,
            description,
        } => {
            let record = UserRecord {
                id: 0,
                username: username.clone(),
                name: name.clone(),
                surname: surname.clone(),
                description: description.clone(),
            }
            .normalized();
            app.store.update_user(&record).context("updating user")?;
            log::info!("updated user {}", record.username);
            Ok(())
        }
    }
}
