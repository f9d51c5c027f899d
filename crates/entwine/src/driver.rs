use crate::Result;

pub use entwine_core::driver::{Capability, Driver};

use entwine_core::Error;
use url::Url;

/// Connects a driver from a connection url, dispatching on the scheme.
pub(crate) async fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed =
        Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

    match parsed.scheme() {
        "mem" => connect_mem(&parsed),
        scheme => Err(Error::invalid_connection_url(
            url,
            format!("unsupported database scheme `{scheme}`"),
        )),
    }
}

#[cfg(feature = "mem")]
fn connect_mem(url: &Url) -> Result<Box<dyn Driver>> {
    let driver = entwine_driver_mem::Mem::connect(url.as_str())?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mem"))]
fn connect_mem(url: &Url) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(
        url.as_str(),
        "`mem` feature not enabled",
    ))
}
