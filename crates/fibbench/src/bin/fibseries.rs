//! fibseries — Fibonacci series with three algorithms, timed.

use fibbench_cli::ui::print_error;
use fibbench_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    let config = config::SeriesConfig::parse();
    let code = match app::run_series(&config) {
        Ok(code) => code,
        Err(err) => {
            print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
