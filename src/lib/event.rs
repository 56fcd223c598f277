//! Labels for flow event codes.

use cfg_if::cfg_if;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const UNKNOWN: &str = "UNKNOWN";

/// Numbering scheme used by the exporter for firewall events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FwEventTaxonomy {
    /// NSEL style: one code per event kind, 0 to 5.
    Standard,
    /// Junos style: several codes per event plus NAT port events.
    Junos,
}

impl Default for FwEventTaxonomy {
    fn default() -> Self {
        let taxonomy;
        cfg_if! {
            if #[cfg(feature = "junos")] {
                taxonomy = FwEventTaxonomy::Junos;
            } else {
                taxonomy = FwEventTaxonomy::Standard;
            }
        }
        taxonomy
    }
}

impl FromStr for FwEventTaxonomy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("standard") {
            Ok(FwEventTaxonomy::Standard)
        } else if s.eq_ignore_ascii_case("junos") {
            Ok(FwEventTaxonomy::Junos)
        } else {
            Err(Error::UnknownTaxonomy(s.to_string()))
        }
    }
}

impl fmt::Display for FwEventTaxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FwEventTaxonomy::Standard => f.pad("standard"),
            FwEventTaxonomy::Junos => f.pad("junos"),
        }
    }
}

/// Label for a firewall event under `taxonomy`.
pub fn fw_event_string(event: u32, taxonomy: FwEventTaxonomy) -> &'static str {
    match taxonomy {
        FwEventTaxonomy::Standard => match event {
            0 => "IGNORE",
            1 => "CREATE",
            2 => "DELETE",
            3 => "DENIED",
            4 => "ALERT",
            5 => "UPDATE",
            _ => UNKNOWN,
        },
        FwEventTaxonomy::Junos => match event {
            0 => "IGNORE",
            1 | 4 | 6 | 8 | 12 => "CREATE",
            2 | 5 | 7 | 9 | 13 => "DELETE",
            3 | 10 => "EXHAUSTED",
            11 => "QUOTA EXCEED",
            14 => "NAT PORT ALLOC",
            15 => "NAT PORT RELEASE",
            16 => "NAT PORT ACTIVE",
            _ => UNKNOWN,
        },
    }
}

/// Label for a NAT/flow event.
pub fn event_string(event: u32) -> &'static str {
    match event {
        0 => "INVALID",
        1 => "ADD",
        2 => "DELETE",
        _ => UNKNOWN,
    }
}

/// Label for an extended firewall event. Unnamed codes render as decimal.
pub fn event_x_string(xevent: u32) -> String {
    match xevent {
        0 => "Ignore".to_string(),
        1001 => "I-ACL".to_string(),
        1002 => "E-ACL".to_string(),
        1003 => "Adap".to_string(),
        1004 => "No Syn".to_string(),
        _ => xevent.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_string() {
        assert_eq!(event_string(0), "INVALID");
        assert_eq!(event_string(1), "ADD");
        assert_eq!(event_string(2), "DELETE");
        assert_eq!(event_string(3), "UNKNOWN");
        assert_eq!(event_string(99), "UNKNOWN");
    }

    #[test]
    fn test_event_x_string() {
        assert_eq!(event_x_string(0), "Ignore");
        assert_eq!(event_x_string(1001), "I-ACL");
        assert_eq!(event_x_string(1002), "E-ACL");
        assert_eq!(event_x_string(1003), "Adap");
        assert_eq!(event_x_string(1004), "No Syn");
        assert_eq!(event_x_string(42), "42");
        assert_eq!(event_x_string(1005), "1005");
        assert_eq!(event_x_string(u32::MAX), "4294967295");
    }

    #[test]
    fn test_fw_event_standard() {
        let t = FwEventTaxonomy::Standard;
        let labels: Vec<&str> = (0..=6).map(|e| fw_event_string(e, t)).collect();
        assert_eq!(
            labels,
            ["IGNORE", "CREATE", "DELETE", "DENIED", "ALERT", "UPDATE", "UNKNOWN"]
        );
    }

    #[test]
    fn test_fw_event_junos() {
        let t = FwEventTaxonomy::Junos;
        assert_eq!(fw_event_string(0, t), "IGNORE");
        for e in [1, 4, 6, 8, 12] {
            assert_eq!(fw_event_string(e, t), "CREATE");
        }
        for e in [2, 5, 7, 9, 13] {
            assert_eq!(fw_event_string(e, t), "DELETE");
        }
        assert_eq!(fw_event_string(3, t), "EXHAUSTED");
        assert_eq!(fw_event_string(10, t), "EXHAUSTED");
        assert_eq!(fw_event_string(11, t), "QUOTA EXCEED");
        assert_eq!(fw_event_string(14, t), "NAT PORT ALLOC");
        assert_eq!(fw_event_string(15, t), "NAT PORT RELEASE");
        assert_eq!(fw_event_string(16, t), "NAT PORT ACTIVE");
        assert_eq!(fw_event_string(17, t), "UNKNOWN");
    }

    #[test]
    fn test_taxonomies_differ() {
        assert_eq!(fw_event_string(3, FwEventTaxonomy::Standard), "DENIED");
        assert_eq!(fw_event_string(3, FwEventTaxonomy::Junos), "EXHAUSTED");
    }

    #[test]
    fn test_taxonomy_from_str() {
        assert_eq!("junos".parse::<FwEventTaxonomy>(), Ok(FwEventTaxonomy::Junos));
        assert_eq!("Standard".parse::<FwEventTaxonomy>(), Ok(FwEventTaxonomy::Standard));
        assert_eq!(
            "asa".parse::<FwEventTaxonomy>(),
            Err(Error::UnknownTaxonomy("asa".to_string()))
        );
        assert_eq!(FwEventTaxonomy::Junos.to_string(), "junos");
    }
}
