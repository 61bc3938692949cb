//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tripwise_cli::run() {
        eprintln!("tripwise: {err}");
        std::process::exit(1);
    }
}
