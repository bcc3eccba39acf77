use std::io;

fn main() {
    cardsim_cli::logging::init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = cardsim_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
