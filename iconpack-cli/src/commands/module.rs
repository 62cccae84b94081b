//! `iconpack module`: print the virtual module body.

use iconpack::{BuildPlugin, IntegrationConfig, VirtualModuleProvider, VIRTUAL_MODULE_ID};

use crate::error::CliError;

pub async fn run(config: IntegrationConfig) -> Result<(), CliError> {
    let provider = VirtualModuleProvider::from_config(config)?;

    let id = provider
        .resolve_id(VIRTUAL_MODULE_ID)
        .ok_or_else(|| CliError::ModuleUnavailable(VIRTUAL_MODULE_ID.to_string()))?;
    let body = provider
        .load(&id)
        .await?
        .ok_or_else(|| CliError::ModuleUnavailable(id.clone()))?;

    println!("{}", body);
    Ok(())
}
