//! Runtime log level control

use std::str::FromStr;

use wasm_bindgen::prelude::*;

/// Set the maximum log level: `off`, `error`, `warn`, `info`, `debug` or `trace`
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level).ok_or_else(|| JsValue::from_str(&format!("unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}

fn parse_level(level: &str) -> Option<log::LevelFilter> {
    log::LevelFilter::from_str(level.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn"), Some(log::LevelFilter::Warn));
        assert_eq!(parse_level(" DEBUG "), Some(log::LevelFilter::Debug));
        assert_eq!(parse_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
