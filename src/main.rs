use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use fieldedit::cli::{ensure_unique_keys, Assignment, CliArgs, Command};
use fieldedit::field::{EntityId, FieldKind};
use fieldedit::manifest::PageManifest;
use fieldedit::model::{EditableField, FieldId, PageModel, PageSettings};
use fieldedit::persistence::HttpPersistence;
use fieldedit::runtime::{EditStart, Runtime, TerminalHost};
use fieldedit::view::render_page;
use fieldedit::FieldEditConfig;

/// How long to wait for outstanding saves before giving up
const SAVE_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    fieldedit::tracing::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => FieldEditConfig::load_from(path),
        None => FieldEditConfig::load(),
    };
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    match args.command {
        Command::Set {
            entity,
            key,
            kind,
            options,
            current,
            value,
        } => {
            if kind == FieldKind::Enumerated && options.is_empty() {
                bail!("enumerated field {} needs at least one --option", key);
            }
            let settings = PageSettings::from_config(&config, EntityId::parse_cli(&entity));
            let mut page = PageModel::new(settings);
            let id = page.add_field(EditableField::new(key, kind, &current).with_options(options));
            run_edits(&config, page, vec![(id, value)])
        }
        Command::Apply { page, assignments } => {
            let manifest = PageManifest::load(&page)
                .with_context(|| format!("loading {}", page.display()))?;
            let page = manifest.into_page(&config);
            let edits = resolve_assignments(&page, assignments)?;
            run_edits(&config, page, edits)
        }
        Command::DateFormat => {
            println!("{}", config.date_format.resolve().name());
            Ok(())
        }
        Command::InitConfig => {
            match &args.config {
                Some(path) => config.save_to(path),
                None => config.save(),
            }
            .map_err(|e| anyhow!(e))?;
            Ok(())
        }
    }
}

fn resolve_assignments(
    page: &PageModel,
    assignments: Vec<Assignment>,
) -> Result<Vec<(FieldId, String)>> {
    ensure_unique_keys(&assignments).map_err(|e| anyhow!(e))?;
    assignments
        .into_iter()
        .map(|a| {
            let id = page
                .find(&a.key)
                .ok_or_else(|| anyhow!("page has no field {}", a.key))?;
            Ok((id, a.value))
        })
        .collect()
}

/// Start every edit, wait for the saves, print the page
fn run_edits(
    config: &FieldEditConfig,
    page: PageModel,
    edits: Vec<(FieldId, String)>,
) -> Result<()> {
    let persistence = HttpPersistence::new(config.endpoint.clone())?;
    tracing::debug!(
        endpoint = persistence.endpoint(),
        edits = edits.len(),
        "starting edits"
    );

    let mut runtime = Runtime::new(page, Arc::new(persistence), TerminalHost::default());
    let mut discarded = 0;
    for (id, value) in edits {
        match runtime.edit(id, value.clone()) {
            EditStart::Saving | EditStart::Rejected => {}
            EditStart::Aborted | EditStart::Ignored => {
                let key = runtime.model().field(id).map(|f| f.key.to_string());
                let key = key.unwrap_or_else(|| id.to_string());
                tracing::warn!(field = %key, %value, "edit discarded");
                eprintln!("! {}: '{}' is not a valid value, edit discarded", key, value);
                discarded += 1;
            }
        }
    }

    if !runtime.wait_idle(SAVE_TIMEOUT) {
        bail!(
            "{} save(s) still pending after {}s",
            runtime.in_flight(),
            SAVE_TIMEOUT.as_secs()
        );
    }

    for view in render_page(runtime.model()) {
        println!("{}", view);
    }

    let failed = runtime.host().alerts.len() + discarded;
    if failed > 0 {
        bail!("{} edit(s) did not go through", failed);
    }
    Ok(())
}
