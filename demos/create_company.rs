use std::io;

use genesis::{GenesisBuilder, GenesisError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::var("GENESIS_COMPANY_NAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GENESIS_COMPANY_NAME environment variable is required",
        )
    })?;

    let client = GenesisBuilder::from_env()?.build()?;
    match client.secure_fax().company().create(name).await {
        Ok(company) => println!(
            "id: {}, name: {}, timezone: {}, locked: {}",
            company.id, company.name, company.timezone, company.locked
        ),
        Err(GenesisError::Api(failure)) => {
            eprintln!("API error ({}): {}", failure.status(), failure.message());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
