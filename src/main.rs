fn main() -> Result<(), Box<dyn std::error::Error>> {
    seek::cli::main()
}
