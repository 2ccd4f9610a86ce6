use anyhow::Result;
use dialoguer::Confirm;
use eventdesk::{Client, Operation};
use owo_colors::OwoColorize;

pub async fn run(client: &Client, id: &str, yes: bool) -> Result<()> {
    if !yes {
        // Fetched only to name the event in the prompt; a failure here is
        // still a failed delete.
        let event = client
            .get_event(id)
            .await
            .map_err(|e| e.during(Operation::DeleteEvent))?;

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"? This cannot be undone", event))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let confirmation = client.delete_event(id).await?;
    println!("{}", format!("  {}", confirmation.message).red());

    Ok(())
}
