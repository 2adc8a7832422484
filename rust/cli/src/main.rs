use std::io;

fn main() {
    if let Err(e) = tablestakes_cli::logging::init_logging() {
        let _ = tablestakes_cli::ui::display_warning(&mut io::stderr(), &e.to_string());
    }
    let code = tablestakes_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
