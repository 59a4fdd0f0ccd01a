use serde_json::json;

use xdpms::{Dpms, DpmsBackend, Error, ExtensionInfo, Info, Timeouts, Version};

/// Everything `xdpms status` reports about a display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub display: String,
    pub extension: ExtensionInfo,
    pub capable: bool,
    /// Present only when the server has the DPMS extension
    pub details: Option<Details>,
}

/// State only a server with the DPMS extension can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Details {
    pub version: Version,
    pub info: Info,
    pub timeouts: Timeouts,
}

impl Status {
    /// Query every DPMS property of an open handle
    pub fn collect<B: DpmsBackend>(dpms: &Dpms<B>) -> Result<Self, Error> {
        let extension = dpms.query_extension()?;
        let capable = dpms.capable()?;

        let details = if extension.supported {
            Some(Details {
                version: dpms.get_version()?,
                info: dpms.info()?,
                timeouts: dpms.get_timeouts()?,
            })
        } else {
            None
        };

        Ok(Status {
            display: dpms.display_name().to_string(),
            extension,
            capable,
            details,
        })
    }
}

/// Format status output
pub fn format_status(status: &Status, json: bool) -> String {
    if json {
        format_status_json(status)
    } else {
        format_status_text(status)
    }
}

fn format_status_text(status: &Status) -> String {
    let ext = &status.extension;
    let mut out = format!(
        "Display         : {}\n\
         Query Extension : {} (event base {}, error base {})\n\
         Capable         : {}\n",
        status.display, ext.supported, ext.event_base, ext.error_base, status.capable
    );

    if let Some(details) = &status.details {
        out.push_str(&format!(
            "Version         : {}\n\
             DPMS enabled    : {}\n\
             Current Level   : {}\n",
            details.version,
            details.info.enabled,
            level_text(&details.info)
        ));
        out.push_str(&format_timeouts_text(&details.timeouts));
    }

    out
}

fn level_text(info: &Info) -> String {
    match info.level() {
        Some(level) => format!("{} ({})", level, info.power_level),
        None => info.level_name(),
    }
}

fn format_status_json(status: &Status) -> String {
    let mut value = json!({
        "display": status.display,
        "extension": status.extension,
        "capable": status.capable,
    });

    if let Some(details) = &status.details {
        value["version"] = json!(details.version);
        value["enabled"] = json!(details.info.enabled);
        value["level"] = json!({
            "code": details.info.power_level,
            "name": details.info.level_name(),
        });
        value["timeouts"] = json!(details.timeouts);
    }

    value.to_string()
}

/// Format timeout output
pub fn format_timeouts(timeouts: &Timeouts, json: bool) -> String {
    if json {
        json!(timeouts).to_string()
    } else {
        format_timeouts_text(timeouts)
    }
}

fn format_timeouts_text(timeouts: &Timeouts) -> String {
    format!(
        "Timeouts\n  Standby       : {}\n  Suspend       : {}\n  Off           : {}\n",
        timeouts.standby, timeouts.suspend, timeouts.off
    )
}
