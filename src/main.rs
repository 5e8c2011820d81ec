fn main() {
    if let Err(e) = hostblock::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
