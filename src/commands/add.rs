use clap::Args;
use serde::Serialize;

use armature::config::AppConfig;
use armature::local_files;
use armature::project::{self, CommandScaffold, Project};
use armature::scaffold;
use armature::{log_status, Error};

use super::CmdResult;

#[derive(Args)]
pub struct AddArgs {
    /// Name of the command to generate (dashes/underscores become case shifts)
    pub name: Option<String>,

    /// Target package name (e.g. acme/hugo); derived from ./Cargo.toml when unset
    #[arg(long, short = 't', default_value = "")]
    pub package: String,

    /// Name of the parent command the new command registers under
    #[arg(long, short = 'p', default_value = "rootCmd")]
    pub parent: String,
}

#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub command: &'static str,
    pub cmd_name: String,
    pub cmd_parent: String,
    pub package: String,
    pub target_dir: String,
    pub file: String,
    pub message: String,
}

pub fn run_json(args: AddArgs) -> CmdResult<AddOutput> {
    let name = args.name.ok_or_else(|| {
        Error::validation_missing_argument(
            "add needs a name for the command",
            vec!["name".to_string()],
        )
    })?;

    let working_dir = std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })?;

    let config = AppConfig::load()?;
    let package = project::resolve_package(&args.package, &working_dir)?;
    let project = Project::new(&working_dir, package, &config)?;
    let command = CommandScaffold::new(&name, args.parent, project)?;

    log_status!(
        "add",
        "Generating {} in {}",
        command.cmd_name,
        command.project.absolute_path.display()
    );

    let file = scaffold::create_command(&command, &local_files::local())?;

    let target_dir = command.project.absolute_path.to_string_lossy().to_string();
    let message = format!("{} created at {}", command.cmd_name, target_dir);

    Ok((
        AddOutput {
            command: "add",
            cmd_name: command.cmd_name,
            cmd_parent: command.cmd_parent,
            package: command.project.pkg_name,
            target_dir,
            file: file.to_string_lossy().to_string(),
            message,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_is_fatal_before_any_generation() {
        let args = AddArgs {
            name: None,
            package: String::new(),
            parent: "rootCmd".to_string(),
        };

        let err = run_json(args).unwrap_err();
        assert_eq!(err.code, armature::ErrorCode::ValidationMissingArgument);
        assert_eq!(err.message, "add needs a name for the command");
    }
}
