use anyhow::Result;
use eventdesk::Client;
use eventdesk::render::render_list_row;
use owo_colors::OwoColorize;

pub async fn run(client: &Client) -> Result<()> {
    let events = client.list_events().await?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", render_list_row(event));
    }

    Ok(())
}
