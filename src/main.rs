//! Demo driver: issue one token from environment configuration and print
//! the JSON record and the embeddable meta tags.

use anyhow::Result;
use fcs_token::Config;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .json()
        .init();

    info!("Starting frontend token generator");

    let config = Config::from_env()?;
    let issuer = config.issuer()?;
    let record = issuer.generate()?;

    info!(
        public_key = %record.public_key,
        expiry = record.expiry,
        "Issued frontend token"
    );

    println!("{}", record.to_json()?);
    println!();
    println!("{}", record.to_meta_tags());

    Ok(())
}
