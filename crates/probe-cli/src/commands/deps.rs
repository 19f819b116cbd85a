//! `probe deps`: resolve a check and verify its packages.

use probe_graph::{Dependencies, NativeRuntime, ResolveError};
use serde::Serialize;

use crate::cli::DepsArgs;
use crate::commands::utils::{absolutize, current_dir, load_config};
use crate::error::Result;
use crate::ui;

/// JSON shape printed by `probe deps --json`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum DepsReport<'a> {
    Ok {
        #[serde(flatten)]
        dependencies: &'a Dependencies,
    },
    Failed {
        #[serde(flatten)]
        errors: &'a probe_graph::GraphErrors,
    },
}

pub async fn execute(args: DepsArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config(&cwd, args.config.as_deref())?;
    let entry = absolutize(&cwd, &args.entry);

    let resolver = config.resolver();
    tracing::info!(entry = %entry.display(), runtime = resolver.allow_list().runtime(), "Checking dependencies");

    match resolver.resolve(&entry, &NativeRuntime::new()).await {
        Ok(dependencies) => {
            if args.json {
                print_json(&DepsReport::Ok {
                    dependencies: &dependencies,
                })?;
            } else {
                for file in &dependencies {
                    println!("{}", file.display());
                }
                ui::success(&format!(
                    "{} local {} resolved for {}",
                    dependencies.len(),
                    if dependencies.len() == 1 { "dependency" } else { "dependencies" },
                    entry.display()
                ));
            }
            Ok(())
        }
        Err(ResolveError::Graph(errors)) => {
            if args.json {
                print_json(&DepsReport::Failed { errors: &errors })?;
            }
            Err(ResolveError::Graph(errors).into())
        }
        Err(other) => Err(other.into()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
