//! Planning - from a loaded definition to the target set to check
//!
//! Compiles every check pattern first so a bad regex aborts the run before
//! anything is expanded or fetched, then expands target entries and binds
//! assertions to each concrete target.

use log::{info, warn};

use crate::core::models::TargetSet;
use crate::core::services::bind_target;
use crate::definition::LoadedDefinition;
use crate::error::ConfigError;
use crate::expand::{Expanded, expand_identifiers};

/// Build the target set for a definition
pub fn plan(loaded: &LoadedDefinition) -> Result<TargetSet, ConfigError> {
    let templates = loaded.definition.templates()?;

    let targets: TargetSet = expand_identifiers(loaded.definition.identifiers(), &loaded.base_dir)
        .into_iter()
        .map(|expanded| match expanded {
            Expanded::Concrete(identifier) => bind_target(&templates, identifier),
            Expanded::Invalid { raw, error } => {
                let mut target = bind_target(&templates, raw);
                target.fail_fetch(&error);
                target
            },
        })
        .collect();

    if targets.is_empty() {
        warn!("no targets to check");
    }
    info!(
        "planned {} targets with {} checks from {} patterns",
        targets.target_count(),
        targets.assertion_count(),
        templates.len()
    );
    Ok(targets)
}
