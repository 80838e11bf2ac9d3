use log::LevelFilter;

/// Sends log records to stderr as `[LEVEL target] message`.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

pub fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value.parse::<LevelFilter>().map_err(|_| {
        format!(
            "unknown log level '{}', expected one of ERROR, WARN, INFO, DEBUG, TRACE",
            value
        )
    })
}
