use clap::Args;
use serde::Serialize;

use armature::config::AppConfig;
use armature::local_files;
use armature::project::{self, Project};
use armature::scaffold;
use armature::{log_status, Error};

use super::CmdResult;

#[derive(Args)]
pub struct InitArgs {
    /// Target package name (e.g. acme/hugo); derived from ./Cargo.toml when unset
    #[arg(long, short = 't', default_value = "")]
    pub package: String,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub command: &'static str,
    pub app_name: String,
    pub package: String,
    pub files: Vec<String>,
    pub message: String,
}

pub fn run_json(args: InitArgs) -> CmdResult<InitOutput> {
    let working_dir = std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })?;

    let config = AppConfig::load()?;
    let package = project::resolve_package(&args.package, &working_dir)?;
    let project = Project::new(&working_dir, package, &config)?;

    log_status!(
        "init",
        "Scaffolding {} in {}",
        project.app_name,
        working_dir.display()
    );

    let written = scaffold::init_project(&project, &local_files::local())?;

    let files: Vec<String> = written
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    let message = format!(
        "{} initialized at {}",
        project.app_name,
        working_dir.display()
    );

    Ok((
        InitOutput {
            command: "init",
            app_name: project.app_name,
            package: project.pkg_name,
            files,
            message,
        },
        0,
    ))
}
