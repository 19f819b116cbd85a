//! `probe packages`: print the effective allow-list.

use serde::Serialize;

use crate::cli::PackagesArgs;
use crate::commands::utils::{current_dir, load_config};
use crate::error::Result;
use crate::ui;

#[derive(Debug, Serialize)]
struct PackagesReport<'a> {
    runtime: &'a str,
    packages: Vec<&'a str>,
}

pub fn execute(args: PackagesArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config(&cwd, args.config.as_deref())?;
    let allow_list = config.allow_list();

    let report = PackagesReport {
        runtime: allow_list.runtime(),
        packages: allow_list.sorted(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for name in &report.packages {
            println!("{name}");
        }
        ui::info(&format!(
            "{} packages available in runtime {}",
            report.packages.len(),
            report.runtime
        ));
    }

    Ok(())
}
