//! Client library for the X11 DPMS (Display Power Management Signaling)
//! extension.
//!
//! Open a [`Dpms`] handle on a display, then query or change monitor power
//! state. Each operation is one request to the X server.
//!
//! ```no_run
//! use xdpms::{Dpms, PowerLevel};
//!
//! let mut dpms = Dpms::open(None)?;
//! if dpms.capable()? {
//!     dpms.enable()?;
//!     dpms.set_timeouts(600, 900, 1200)?;
//!     dpms.force_level(PowerLevel::Standby)?;
//! }
//! # Ok::<(), xdpms::Error>(())
//! ```
pub mod backend;
pub mod display;
pub mod error;
pub mod handle;
pub mod power;
pub mod x11;

pub use backend::DpmsBackend;
pub use error::{Error, ErrorKind};
pub use handle::Dpms;
pub use power::{
    DPMS_MODE_OFF, DPMS_MODE_ON, DPMS_MODE_STANDBY, DPMS_MODE_SUSPEND, ExtensionInfo, Info,
    PowerLevel, Timeouts, UnknownLevel, Version,
};
pub use x11::X11Backend;
