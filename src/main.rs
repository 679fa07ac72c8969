use dayjournal::Cli;

fn main() -> anyhow::Result<()> {
    Cli::run()
}
