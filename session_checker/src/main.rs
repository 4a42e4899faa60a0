use std::{path::PathBuf, process::ExitCode};

use bot_commons::start_everything;
use session_checker::{Status, DEFAULT_CONFIG_PATH};

fn main() -> ExitCode {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let status = match start_everything(session_checker::entry(path)) {
        Ok(status) => status,
        Err(e) => Status::error(e),
    };

    println!("{status}");
    ExitCode::from(status.exit_code())
}
