use std::io;
use std::process::ExitCode;

use rematch::run;

mod cli;

fn main() -> ExitCode {
    let cfg = cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cfg, &mut out) {
        // Exit 0 whether or not anything matched.
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rematch: {}", err);
            ExitCode::from(2)
        }
    }
}
