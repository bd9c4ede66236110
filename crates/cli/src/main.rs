use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = larder_cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
