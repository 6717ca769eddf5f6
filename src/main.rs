use preguntas::app::{App, Tui};
use preguntas::config::QuizConfig;
use preguntas::stats::StatisticsStore;
use preguntas::{logging, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = QuizConfig::load()?;

    // A missing log file should not keep the quiz from starting
    match logging::init(&config) {
        Ok(path) => info!(log = %path.display(), "logging initialised"),
        Err(err) => eprintln!("warning: {}", err),
    }

    let statistics = StatisticsStore::open_or_in_memory(&config);
    let mut app = App::new(config.clone(), statistics)?;

    let mut tui = Tui::new(config.tick_rate())?;
    tui.init()?;
    let result = app.run(&mut tui);
    if !app.should_quit() {
        // loop ended on an error; still flush the open session
        warn!("main loop aborted");
        app.quit();
    }
    tui.restore()?;

    info!("quiz closed");
    result
}
