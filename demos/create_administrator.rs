use std::io;

use genesis::GenesisBuilder;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = required("GENESIS_ADMIN_EMAIL")?;
    let password = required("GENESIS_ADMIN_PASSWORD")?;
    let company_id = required("GENESIS_COMPANY_ID")?;
    let full_name = std::env::var("GENESIS_ADMIN_NAME").ok();

    let client = GenesisBuilder::from_env()?.build()?;
    let user = client
        .secure_fax()
        .users()
        .manager()
        .create(full_name, email, password, company_id)
        .await?;

    println!(
        "id: {}, email: {}, admin: {}, role: {:?}",
        user.id, user.email, user.admin, user.role_id
    );

    Ok(())
}
