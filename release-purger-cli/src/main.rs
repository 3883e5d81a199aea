use std::process::ExitCode;

fn main() -> ExitCode {
    match release_purger_cli::run_cli() {
        Ok(code) => code,
        Err(err) => {
            println!("{}", release_purger_cli::render_error(&err));
            ExitCode::FAILURE
        }
    }
}
