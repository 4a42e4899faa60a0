//! Boilerplate shared by the tools in this workspace: logger setup
//! and the async runtime they run on.

use std::future::Future;

/// Initialize logging and run the `closure` to completion in an async runtime,
/// returning whatever it produced.
///
/// Logging is enabled by default on level `info` unless overridden
/// by environment variable `RUST_LOG`. This uses the crate
/// [pretty_env_logger][] internally, see its documentation for more details.
/// Logs go to stderr, so stdout stays free for whatever the tool prints.
///
/// # Errors
/// Returns an error if the runtime could not be built.
///
/// [pretty_env_logger]: https://docs.rs/pretty_env_logger
pub fn start_everything<T>(closure: impl Future<Output = T>) -> std::io::Result<T> {
    init_logger();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    Ok(runtime.block_on(closure))
}

fn init_logger() {
    let log_level = std::env::var_os("RUST_LOG")
        .unwrap_or_else(|| std::ffi::OsString::from("info"))
        .into_string()
        .unwrap_or_else(|_| String::from("info"));

    let running_as_systemd_service = std::env::var_os("JOURNAL_STREAM").is_some();

    let mut builder = match running_as_systemd_service {
        true => pretty_env_logger::formatted_builder(),
        false => pretty_env_logger::formatted_timed_builder(),
    };

    builder.parse_filters(&log_level);

    if builder.try_init().is_err() {
        log::debug!("Logger was already initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::start_everything;

    #[test]
    fn returns_closure_output() {
        let out = start_everything(async { 2 + 2 }).unwrap();
        assert_eq!(out, 4);
    }

    #[test]
    fn can_start_twice() {
        // Second call must not trip over the already-installed logger.
        start_everything(async {}).unwrap();
        let out = start_everything(async { "hi" }).unwrap();
        assert_eq!(out, "hi");
    }
}
