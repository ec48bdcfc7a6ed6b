use std::path::Path;
use std::process::ExitCode;

use radicle_mirror_lib::config::CONFIG_FILE;

#[tokio::main]
async fn main() -> ExitCode {
    radicle_mirror_lib::init_logging();

    match radicle_mirror_lib::run_backup(Path::new(CONFIG_FILE)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Backup aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
