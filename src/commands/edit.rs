use anyhow::Result;
use eventdesk::Client;
use owo_colors::OwoColorize;

use crate::commands::form::{self, FieldArgs};

/// Fetch the event, let the user change any field, then replace it.
pub async fn run(client: &Client, id: &str, args: FieldArgs) -> Result<()> {
    let current = client.get_event(id).await?;
    let fields = form::fill(args, Some(&current.fields))?;

    let event = client.update_event(id, fields).await?;
    println!("{}", format!("  Updated: {}", event).yellow());

    Ok(())
}
