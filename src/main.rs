fn main() -> anyhow::Result<()> {
    prompt_journal::cli::run()
}
