//! fib-runner — sweep a Fibonacci executable over N.

use fibbench_cli::ui::print_error;
use fibbench_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    let config = config::RunnerConfig::parse();
    let code = match app::run_runner(&config) {
        Ok(code) => code,
        Err(err) => {
            print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
