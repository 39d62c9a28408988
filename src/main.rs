use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{add, config, init};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "armature")]
#[command(version = VERSION)]
#[command(about = "Generator for clap-based CLI applications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a command to an existing application (run inside your crate's src/)
    #[command(visible_alias = "command")]
    Add(add::AddArgs),
    /// Scaffold a new application in the current directory
    Init(init::InitArgs),
    /// Show the effective user configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);
    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_defaults_parent_to_root_cmd() {
        let cli = Cli::try_parse_from(["armature", "add", "server-admin"]).unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.name.as_deref(), Some("server-admin"));
        assert_eq!(args.parent, "rootCmd");
        assert_eq!(args.package, "");
    }

    #[test]
    fn command_alias_reaches_add() {
        let cli = Cli::try_parse_from(["armature", "command", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Add(_)));
    }

    #[test]
    fn package_flag_short_form() {
        let cli = Cli::try_parse_from(["armature", "add", "server", "-t", "acme/hugo"]).unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.package, "acme/hugo");
    }

    #[test]
    fn exit_code_clamped() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(2), 2);
        assert_eq!(exit_code_to_u8(400), 255);
    }
}
