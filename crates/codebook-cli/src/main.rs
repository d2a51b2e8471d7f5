mod input;
mod run;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    run::run()
}
