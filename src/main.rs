use std::io::Write;
use tracing_subscriber::EnvFilter;
use tslpatch::installer::CommandBackend;
use tslpatch::FAULT_EXIT_CODE;

const LOG_ENV: &str = "TSLPATCH_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let backend = CommandBackend::new();
    match tslpatch::run(std::env::args_os().skip(1), &backend) {
        Ok(code) => code.into(),
        Err(fault) => {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "Error: {fault:#}");
            let _ = err.flush();
            std::process::ExitCode::from(FAULT_EXIT_CODE)
        }
    }
}
