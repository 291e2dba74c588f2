use genesis::{GenesisBuilder, Pagination};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let page = std::env::var("GENESIS_PAGE")
        .ok()
        .map(|raw| raw.parse::<u32>())
        .transpose()?;

    let client = GenesisBuilder::from_env()?.build()?;
    let pagination = page.map(Pagination::page);
    let response = client.secure_fax().company().list(pagination).await?;

    println!("status: {}, body: {}", response.status(), response.body());

    Ok(())
}
