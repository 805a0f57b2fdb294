fn main() {
    if let Err(e) = wardbook::cli::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
