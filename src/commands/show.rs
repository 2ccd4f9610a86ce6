use anyhow::Result;
use eventdesk::Client;
use eventdesk::render::Render;

pub async fn run(client: &Client, id: &str) -> Result<()> {
    let event = client.get_event(id).await?;
    println!("{}", event.render());
    Ok(())
}
