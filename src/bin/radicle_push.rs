use std::path::Path;
use std::process::ExitCode;

use radicle_mirror_lib::config::CONFIG_FILE;

fn main() -> ExitCode {
    radicle_mirror_lib::init_logging();

    match radicle_mirror_lib::run_publish(Path::new(CONFIG_FILE)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Radicle push aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
