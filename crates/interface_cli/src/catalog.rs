//! Template catalog files
//!
//! A catalog file lists templates under a `templates` key, in TOML or JSON
//! (picked by file extension):
//!
//! ```toml
//! [[templates]]
//! id = "rent"
//! name = "Rent Payment"
//!
//! [[templates.lines]]
//! account = "Rent Expense"
//! isDebit = true
//! percentage = 100
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use domain_ledger::{ProformaExpander, Template, TemplateCatalog};
use crate::config::PreviewConfig;
use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<Template>,
}

/// Reads a catalog file
pub fn load_catalog(path: &Path) -> Result<TemplateCatalog, CliError> {
    load_catalog_from(config::File::from(path))
}

/// Reads a catalog from any `config` source
pub fn load_catalog_from<S>(source: S) -> Result<TemplateCatalog, CliError>
where
    S: config::Source + Send + Sync + 'static,
{
    let file: CatalogFile = config::Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize()?;
    TemplateCatalog::new(file.templates).map_err(CliError::Catalog)
}

/// Builds the expander the configuration asks for
pub fn expander_for(config: &PreviewConfig) -> Result<ProformaExpander, CliError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            info!(path = %path.display(), templates = catalog.len(), "Loaded template catalog");
            catalog
        }
        None => TemplateCatalog::standard(),
    };
    Ok(ProformaExpander::new(catalog))
}
