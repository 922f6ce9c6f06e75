//! fib-plot — comparative charts from two implementations' sweeps.

use fibbench_cli::ui::print_error;
use fibbench_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    let config = config::PlotConfig::parse();
    let code = match app::run_plot(&config) {
        Ok(code) => code,
        Err(err) => {
            print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
