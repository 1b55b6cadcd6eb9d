fn main() {
    if let Err(e) = caredash_lib::run() {
        tracing::error!(error = %e, "caredash failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
