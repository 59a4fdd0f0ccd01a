//! The DPMS handle: one owned display connection plus the DPMS command surface.
use std::fmt;

use tracing::{debug, info, warn};

use crate::backend::DpmsBackend;
use crate::display::resolve_display_name;
use crate::error::Error;
use crate::power::{ExtensionInfo, Info, PowerLevel, Timeouts, UnknownLevel, Version};
use crate::x11::X11Backend;

/// An open connection to a display server with DPMS operations over it
///
/// The connection is released exactly once, by [`Dpms::close`] or on drop,
/// whichever comes first. Every operation on a closed handle fails with
/// [`Error::Connection`].
///
/// The handle does no locking. State-changing operations take `&mut self`;
/// callers sharing a handle across threads must serialize access themselves.
pub struct Dpms<B: DpmsBackend = X11Backend> {
    display: String,
    backend: Option<B>,
}

impl Dpms<X11Backend> {
    /// Open a connection to an X display
    ///
    /// # Arguments
    /// * `display_name` - e.g. `":0"` or `"host:0.0"`; `None` or empty uses
    ///   the `DISPLAY` environment variable
    ///
    /// # Returns
    /// - `Ok(Dpms)` holding the live connection
    /// - `Err(Error::Connection)` if the display cannot be opened
    ///
    /// # Example
    /// ```no_run
    /// # use xdpms::{Dpms, PowerLevel};
    /// let mut dpms = Dpms::open(Some(":0"))?;
    /// dpms.force_level(PowerLevel::Off)?;
    /// # Ok::<(), xdpms::Error>(())
    /// ```
    pub fn open(display_name: Option<&str>) -> Result<Self, Error> {
        let backend = X11Backend::connect(display_name)?;
        let handle = Self::with_backend(resolve_display_name(display_name), backend);
        info!(display = %handle.display, "Opened display");
        Ok(handle)
    }
}

impl<B: DpmsBackend> Dpms<B> {
    /// Wrap an already connected backend
    pub fn with_backend(display_name: impl Into<String>, backend: B) -> Self {
        Self {
            display: display_name.into(),
            backend: Some(backend),
        }
    }

    /// Resolved name of the display this handle was opened on
    pub fn display_name(&self) -> &str {
        &self.display
    }

    pub fn is_open(&self) -> bool {
        self.backend.is_some()
    }

    /// Release the connection; a no-op if already closed
    pub fn close(&mut self) {
        if let Some(backend) = self.backend.take() {
            drop(backend);
            info!(display = %self.display, "Closed display");
        }
    }

    fn backend(&self) -> Result<&B, Error> {
        self.backend.as_ref().ok_or_else(|| closed(&self.display))
    }

    fn backend_mut(&mut self) -> Result<&mut B, Error> {
        self.backend.as_mut().ok_or_else(|| closed(&self.display))
    }

    /// Look up the DPMS extension on the server
    ///
    /// An absent extension is reported as `supported = false`, not an error.
    pub fn query_extension(&self) -> Result<ExtensionInfo, Error> {
        self.backend()?.query_extension()
    }

    /// DPMS extension version implemented by the server
    pub fn get_version(&self) -> Result<Version, Error> {
        self.backend()?.get_version()
    }

    /// Whether the display hardware supports DPMS
    pub fn capable(&self) -> Result<bool, Error> {
        self.backend()?.capable()
    }

    pub fn get_timeouts(&self) -> Result<Timeouts, Error> {
        self.backend()?.get_timeouts()
    }

    /// Set the idle timeouts and return the values the server now holds
    ///
    /// # Returns
    /// - `Ok(Timeouts)` re-queried from the server after the change
    /// - `Err(Error::InvalidArgument)` if the server rejected the combination;
    ///   the previous timeouts stay in effect
    pub fn set_timeouts(
        &mut self,
        standby: u16,
        suspend: u16,
        off: u16,
    ) -> Result<Timeouts, Error> {
        let requested = Timeouts::new(standby, suspend, off);
        self.backend_mut()?.set_timeouts(requested)?;

        let current = self.get_timeouts()?;
        if current != requested {
            debug!(?requested, ?current, "Server normalized timeouts");
        }
        Ok(current)
    }

    pub fn enable(&mut self) -> Result<(), Error> {
        self.backend_mut()?.enable()
    }

    pub fn disable(&mut self) -> Result<(), Error> {
        self.backend_mut()?.disable()
    }

    /// Force the monitor into a power level
    ///
    /// `level` is a DPMS mode code; [`PowerLevel`] converts into one.
    ///
    /// # Returns
    /// - `Err(Error::InvalidArgument)` if `level` is not On, Standby, Suspend
    ///   or Off; nothing is sent to the server
    /// - `Err(Error::OperationFailed)` if the server refused, e.g. because
    ///   DPMS is disabled
    pub fn force_level(&mut self, level: impl Into<u16>) -> Result<(), Error> {
        let level = PowerLevel::try_from(level.into()).map_err(|UnknownLevel(code)| {
            Error::InvalidArgument(format!(
                "Bad level {code}, expected On (0), Standby (1), Suspend (2) or Off (3)"
            ))
        })?;
        self.backend_mut()?.force_level(level)
    }

    /// Current power level and whether DPMS is enabled
    pub fn info(&self) -> Result<Info, Error> {
        let info = self.backend()?.info()?;
        if info.level().is_none() {
            warn!(
                code = info.power_level,
                "Server reported unknown power level"
            );
        }
        Ok(info)
    }
}

fn closed(display: &str) -> Error {
    Error::Connection(format!("Display '{display}' is closed"))
}

impl<B: DpmsBackend> Drop for Dpms<B> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<B: DpmsBackend> fmt::Display for Dpms<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DPMS(display={})", self.display)
    }
}

impl<B: DpmsBackend> fmt::Debug for Dpms<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dpms")
            .field("display", &self.display)
            .field("open", &self.is_open())
            .finish()
    }
}
