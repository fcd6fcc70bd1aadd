/// Control loop error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A conversion did not complete within the configured timeout.
    ConversionTimeout { after_ms: u32 },
}

/// Implementation of the `Display` trait for `Error`.
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ConversionTimeout { after_ms } => {
                write!(f, "Conversion did not complete within {after_ms} ms")
            }
        }
    }
}
