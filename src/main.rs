fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = pawn_cli::run() {
        eprintln!("terminal error: {err}");
        std::process::exit(1);
    }
}
