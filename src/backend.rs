/// DpmsBackend trait for DPMS extension requests
///
/// This trait is the seam between the [`Dpms`](crate::Dpms) handle and the
/// display transport. Each method is exactly one DPMS request and one round
/// trip to the server.
///
/// Implementations:
/// - X11 backend: `x11rb` `RustConnection` with the `dpms` extension module
/// - Test backends: in-process fakes that model the server's acceptance rules
use crate::error::Error;
use crate::power::{ExtensionInfo, Info, PowerLevel, Timeouts, Version};

/// DpmsBackend interface for monitor power management
///
/// Queries take `&self`; state-changing requests take `&mut self` so that
/// commands on one connection are serialized by the borrow checker.
pub trait DpmsBackend {
    /// Look up the DPMS extension on the server
    ///
    /// # Returns
    /// - `Ok(ExtensionInfo)` with `supported = false` if the extension is absent
    /// - `Err(Error::Connection)` if the connection is broken
    fn query_extension(&self) -> Result<ExtensionInfo, Error>;

    /// Query the extension version
    fn get_version(&self) -> Result<Version, Error>;

    /// Whether the display hardware supports DPMS
    fn capable(&self) -> Result<bool, Error>;

    /// Query the (standby, suspend, off) timeouts
    fn get_timeouts(&self) -> Result<Timeouts, Error>;

    /// Set the (standby, suspend, off) timeouts
    ///
    /// # Returns
    /// - `Ok(())` if the server accepted the values
    /// - `Err(Error::InvalidArgument)` if the server rejected them
    fn set_timeouts(&mut self, timeouts: Timeouts) -> Result<(), Error>;

    /// Enable DPMS
    fn enable(&mut self) -> Result<(), Error>;

    /// Disable DPMS
    fn disable(&mut self) -> Result<(), Error>;

    /// Force the monitor into the given power level
    fn force_level(&mut self, level: PowerLevel) -> Result<(), Error>;

    /// Query the current power level and enabled state
    fn info(&self) -> Result<Info, Error>;
}
