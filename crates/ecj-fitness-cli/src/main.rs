mod command;
mod util;

fn main() -> anyhow::Result<()> {
    util::setup_logging();
    command::run()
}
