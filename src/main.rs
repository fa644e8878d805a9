fn main() -> std::io::Result<()> {
    chess_rules::cli::run()
}
