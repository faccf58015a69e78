use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};

pub fn setup_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("rustls", LevelFilter::Warn.min(level))
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}
