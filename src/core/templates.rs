//! Embedded bodies for generated source files.
//!
//! `{{licenseBanner}}` expands to a `//` comment block (or nothing for the
//! `none` license); the remaining placeholders are plain text substitutions.
//! See `template::TemplateVars` for the variable names.

pub const COMMAND_TEMPLATE: &str = r#"{{licenseBanner}}use clap::{ArgMatches, Command};

/// Build the `{{cmdUse}}` subcommand definition.
///
/// Attach it to `{{cmdParent}}` where the parent command is assembled:
///
///     {{cmdParent}}().subcommand({{cmdName}}::command())
pub fn command() -> Command {
    Command::new("{{cmdUse}}")
        .about("A brief description of your command")
        .long_about(
            "A longer description that spans multiple lines and likely contains \
examples and usage of using your command.",
        )
}

#[allow(unused_variables)]
pub fn run(matches: &ArgMatches) {
    println!("{{cmdUse}} called");
}
"#;

pub const ROOT_TEMPLATE: &str = r#"{{licenseBanner}}use clap::{ArgMatches, Command};

/// Build the root command for {{appName}}.
pub fn rootCmd() -> Command {
    Command::new("{{cmdUse}}")
        .about("A brief description of your application")
        .long_about(
            "A longer description that spans multiple lines and likely contains \
examples and usage of using your application.",
        )
}

pub fn execute() {
    let matches = rootCmd().get_matches();
    run(&matches);
}

#[allow(unused_variables)]
pub fn run(matches: &ArgMatches) {}
"#;

pub const MOD_TEMPLATE: &str = r#"//! Command definitions for {{appName}}.
//!
//! Generated command modules keep their normalized names, which are not
//! snake_case by convention of this layout.
#![allow(non_snake_case)]

pub mod root;
"#;

pub const MAIN_TEMPLATE: &str = r#"{{licenseBanner}}mod cmd;

fn main() {
    cmd::root::execute();
}
"#;
