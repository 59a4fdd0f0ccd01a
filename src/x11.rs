/// X11 backend for DPMS control
///
/// This module implements the DpmsBackend trait on top of an `x11rb`
/// `RustConnection` and the DPMS extension requests from
/// `x11rb::protocol::dpms`.
///
/// Void requests (set timeouts, enable, disable, force level) are checked so
/// that a server-side rejection surfaces as an error on the call that caused
/// it rather than asynchronously on some later request.
use crate::backend::DpmsBackend;
use crate::display::resolve_display_name;
use crate::error::{Error, ErrorKind};
use crate::power::{ExtensionInfo, Info, PowerLevel, Timeouts, Version};

use tracing::debug;
use x11rb::connection::RequestConnection;
use x11rb::errors::{ConnectionError, ReplyError};
use x11rb::protocol::ErrorKind as X11ErrorKind;
use x11rb::protocol::dpms::{self, ConnectionExt as _, DPMSMode};
use x11rb::rust_connection::RustConnection;

/// Client version announced in GetVersion, matching libXext
const CLIENT_MAJOR_VERSION: u16 = 1;
const CLIENT_MINOR_VERSION: u16 = 1;

/// X11 backend implementing DpmsBackend trait
pub struct X11Backend {
    connection: RustConnection,
}

impl X11Backend {
    /// Connect to an X server
    ///
    /// `None` (or an empty name) uses the `DISPLAY` environment variable.
    ///
    /// # Returns
    /// - `Ok(X11Backend)` if the connection succeeds
    /// - `Err(Error::Connection)` if the display cannot be opened
    pub fn connect(display_name: Option<&str>) -> Result<Self, Error> {
        let name = display_name.filter(|n| !n.is_empty());
        let (connection, _screen) = RustConnection::connect(name).map_err(|e| {
            Error::Connection(format!(
                "Cannot open display '{}': {}",
                resolve_display_name(name),
                e
            ))
        })?;

        Ok(Self { connection })
    }
}

/// Map a transport error, treating a missing extension as a failure of `kind`
fn connection_error(err: ConnectionError, kind: ErrorKind, request: &str) -> Error {
    match err {
        ConnectionError::UnsupportedExtension => {
            Error::new(kind, format!("{request}: DPMS extension not present"))
        }
        other => Error::Connection(format!("{request}: {other}")),
    }
}

/// Map a request error
///
/// X11 `BadValue` replies become `on_bad_value`; every other X11 error becomes
/// `kind`.
fn reply_error(
    err: ReplyError,
    kind: ErrorKind,
    on_bad_value: ErrorKind,
    request: &str,
) -> Error {
    match err {
        ReplyError::ConnectionError(e) => connection_error(e, kind, request),
        ReplyError::X11Error(e) => {
            let kind = if e.error_kind == X11ErrorKind::Value {
                on_bad_value
            } else {
                kind
            };
            Error::new(
                kind,
                format!(
                    "{request}: server replied {:?} (bad value {})",
                    e.error_kind, e.bad_value
                ),
            )
        }
    }
}

/// Map a query error; queries have no argument to reject
fn query_error(err: ReplyError, request: &str) -> Error {
    reply_error(err, ErrorKind::Protocol, ErrorKind::Protocol, request)
}

/// Map an error of a command without arguments; any rejection is a failure
fn toggle_error(err: ReplyError, request: &str) -> Error {
    reply_error(
        err,
        ErrorKind::OperationFailed,
        ErrorKind::OperationFailed,
        request,
    )
}

/// Map an error of a command with arguments; `BadValue` means one was malformed
fn command_error(err: ReplyError, request: &str) -> Error {
    reply_error(
        err,
        ErrorKind::OperationFailed,
        ErrorKind::InvalidArgument,
        request,
    )
}

/// Interpret a Capable reply; a server-side rejection means "not capable"
fn capable_from_reply(reply: Result<bool, ReplyError>) -> Result<bool, Error> {
    match reply {
        Ok(capable) => Ok(capable),
        Err(ReplyError::X11Error(e)) => {
            debug!(
                "DPMSCapable rejected with {:?}, reporting not capable",
                e.error_kind
            );
            Ok(false)
        }
        Err(ReplyError::ConnectionError(e)) => {
            Err(Error::Connection(format!("DPMSCapable: {e}")))
        }
    }
}

impl DpmsBackend for X11Backend {
    fn query_extension(&self) -> Result<ExtensionInfo, Error> {
        debug!("QueryExtension {}", dpms::X11_EXTENSION_NAME);
        let info = self
            .connection
            .extension_information(dpms::X11_EXTENSION_NAME)
            .map_err(|e| Error::Connection(format!("QueryExtension: {e}")))?;

        Ok(match info {
            Some(ext) => ExtensionInfo {
                supported: true,
                event_base: ext.first_event.into(),
                error_base: ext.first_error.into(),
            },
            None => ExtensionInfo::ABSENT,
        })
    }

    fn get_version(&self) -> Result<Version, Error> {
        debug!("DPMSGetVersion");
        let reply = self
            .connection
            .dpms_get_version(CLIENT_MAJOR_VERSION, CLIENT_MINOR_VERSION)
            .map_err(|e| connection_error(e, ErrorKind::Protocol, "DPMSGetVersion"))?
            .reply()
            .map_err(|e| query_error(e, "DPMSGetVersion"))?;

        Ok(Version {
            major: reply.server_major_version,
            minor: reply.server_minor_version,
        })
    }

    fn capable(&self) -> Result<bool, Error> {
        debug!("DPMSCapable");
        let cookie = match self.connection.dpms_capable() {
            Ok(cookie) => cookie,
            // No extension means no DPMS hardware support, not a failure
            Err(ConnectionError::UnsupportedExtension) => return Ok(false),
            Err(e) => return Err(Error::Connection(format!("DPMSCapable: {e}"))),
        };

        capable_from_reply(cookie.reply().map(|reply| reply.capable))
    }

    fn get_timeouts(&self) -> Result<Timeouts, Error> {
        debug!("DPMSGetTimeouts");
        let reply = self
            .connection
            .dpms_get_timeouts()
            .map_err(|e| connection_error(e, ErrorKind::Protocol, "DPMSGetTimeouts"))?
            .reply()
            .map_err(|e| query_error(e, "DPMSGetTimeouts"))?;

        Ok(Timeouts {
            standby: reply.standby_timeout,
            suspend: reply.suspend_timeout,
            off: reply.off_timeout,
        })
    }

    fn set_timeouts(&mut self, timeouts: Timeouts) -> Result<(), Error> {
        debug!(
            standby = timeouts.standby,
            suspend = timeouts.suspend,
            off = timeouts.off,
            "DPMSSetTimeouts"
        );
        self.connection
            .dpms_set_timeouts(timeouts.standby, timeouts.suspend, timeouts.off)
            .map_err(|e| connection_error(e, ErrorKind::OperationFailed, "DPMSSetTimeouts"))?
            .check()
            .map_err(|e| command_error(e, "DPMSSetTimeouts"))
    }

    fn enable(&mut self) -> Result<(), Error> {
        debug!("DPMSEnable");
        self.connection
            .dpms_enable()
            .map_err(|e| connection_error(e, ErrorKind::OperationFailed, "DPMSEnable"))?
            .check()
            .map_err(|e| toggle_error(e, "DPMSEnable"))
    }

    fn disable(&mut self) -> Result<(), Error> {
        debug!("DPMSDisable");
        self.connection
            .dpms_disable()
            .map_err(|e| connection_error(e, ErrorKind::OperationFailed, "DPMSDisable"))?
            .check()
            .map_err(|e| toggle_error(e, "DPMSDisable"))
    }

    fn force_level(&mut self, level: PowerLevel) -> Result<(), Error> {
        debug!(%level, "DPMSForceLevel");
        self.connection
            .dpms_force_level(DPMSMode::from(u16::from(level)))
            .map_err(|e| connection_error(e, ErrorKind::OperationFailed, "DPMSForceLevel"))?
            .check()
            .map_err(|e| command_error(e, "DPMSForceLevel"))
    }

    fn info(&self) -> Result<Info, Error> {
        debug!("DPMSInfo");
        let reply = self
            .connection
            .dpms_info()
            .map_err(|e| connection_error(e, ErrorKind::Protocol, "DPMSInfo"))?
            .reply()
            .map_err(|e| query_error(e, "DPMSInfo"))?;

        Ok(Info {
            power_level: u16::from(reply.power_level),
            enabled: reply.state,
        })
    }
}
