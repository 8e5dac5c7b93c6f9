mod commands;
mod handlers;

pub use commands::{AddArgs, Cli, Commands, ListArgs, SessionCommand, ShellCommand, ShellLine};
pub use handlers::{
    draft_from_args, handle_add, handle_list, handle_query, handle_shell, handle_show,
    handle_stats, list_params, run_session_command,
};
