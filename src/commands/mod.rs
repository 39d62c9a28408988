pub type CmdResult<T> = armature::Result<(T, i32)>;

pub mod add;
pub mod config;
pub mod init;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (armature::Result<serde_json::Value>, i32) {
    crate::tty::status("armature is working...");

    match command {
        crate::Commands::Add(args) => dispatch!(args, add),
        crate::Commands::Init(args) => dispatch!(args, init),
        crate::Commands::Config(args) => dispatch!(args, config),
    }
}
