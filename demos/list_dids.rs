use std::io;

use genesis::GenesisBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let company_id = std::env::var("GENESIS_COMPANY_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GENESIS_COMPANY_ID environment variable is required",
        )
    })?;

    let client = GenesisBuilder::from_env()?.build()?;
    let list = client.secure_fax().did().list(company_id).await?;

    println!("total: {}", list.total);
    for did in &list.dids {
        println!(
            "{} {} {}",
            did.id,
            did.number,
            did.description.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
