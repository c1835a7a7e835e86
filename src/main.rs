fn main() -> anyhow::Result<()> {
    content_cache::cli::run()
}
