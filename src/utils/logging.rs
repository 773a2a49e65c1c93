#[cfg(feature = "logging")]
pub fn init_logger(
    min_level: log::LevelFilter, debug_file_name: &std::path::Path,
) -> Result<(), fern::InitError> {
    use time::{format_description::FormatItem, macros::format_description};

    // The weird "[[[" is because we need to escape a bracket ("[[") to show one "[".
    // See https://time-rs.github.io/book/api/format-description.html
    const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
        "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
    );

    fern::Dispatch::new()
        .format(|out, message, record| {
            // UTC only; local offsets can't be read safely once threads exist.
            let now = time::OffsetDateTime::now_utc();
            let timestamp = now.format(TIMESTAMP_FORMAT).unwrap_or_default();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                timestamp,
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(debug_file_name)?)
        .apply()?;

    Ok(())
}
