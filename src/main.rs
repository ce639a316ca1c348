fn main() {
    std::process::exit(foo_report::cli::run_cli());
}
