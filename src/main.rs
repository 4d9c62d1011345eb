fn main() {
    if let Err(err) = eyecore_test_app::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
