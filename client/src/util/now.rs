//! Current wall-clock time, as whole Unix seconds.
//!
//! Domain functions take `now` as a parameter; this is the single place the
//! client actually reads a clock (the JS clock in the browser, the system
//! clock during SSR).

/// Whole seconds since the Unix epoch.
#[must_use]
pub fn unix_seconds() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0).floor() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or_default())
            .unwrap_or_default()
    }
}
