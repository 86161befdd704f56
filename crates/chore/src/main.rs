use clap::Parser;

mod cli;
mod config;
mod logging;

use cli::app::App;

fn main() -> anyhow::Result<()> {
    let app = App::parse();

    let config = config::Config::load(app.config.as_deref());
    let level = config.as_ref().ok().and_then(|c| c.logging.level.as_deref());
    logging::init(app.debug, level);

    app.run(&config?)
}
