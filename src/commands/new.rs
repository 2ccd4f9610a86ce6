use anyhow::Result;
use eventdesk::Client;
use owo_colors::OwoColorize;

use crate::commands::form::{self, FieldArgs};

pub async fn run(client: &Client, args: FieldArgs) -> Result<()> {
    let fields = form::fill(args, None)?;
    let event = client.create_event(fields).await?;

    println!("{}", format!("  Created: {}", event).green());
    println!("  {}", format!("id: {}", event.id).dimmed());

    Ok(())
}
