use log::warn;

use crate::error::DomError;

/// Opens `url` in a new browsing context. Failures are logged and dropped.
pub fn open_external(url: &str) {
    if let Err(err) = try_open(url) {
        warn!("could not open {url}: {err}");
    }
}

fn try_open(url: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    // A blocked popup comes back as Ok(None); nothing to do about it.
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(DomError::js)?;
    Ok(())
}
