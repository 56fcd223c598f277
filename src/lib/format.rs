use std::net::IpAddr;

use crate::addr;
use crate::event::{self, FwEventTaxonomy};
use crate::flags;
use crate::proto;

/// Field formatting settings chosen once when output starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFormatter {
    pub taxonomy: FwEventTaxonomy,
    /// Print IPv6 addresses in full instead of condensing them.
    pub long_addrs: bool,
}

impl FieldFormatter {
    pub fn new(taxonomy: FwEventTaxonomy) -> Self {
        Self {
            taxonomy,
            long_addrs: false,
        }
    }

    pub fn with_long_addrs(mut self, long_addrs: bool) -> Self {
        self.long_addrs = long_addrs;
        self
    }

    pub fn proto(&self, proto: proto::IpProto) -> String {
        proto::proto_string(proto)
    }

    pub fn flags(&self, flags: u8) -> String {
        flags::flags_string(flags)
    }

    pub fn addr(&self, addr: IpAddr) -> String {
        addr::ip_string(addr, self.long_addrs)
    }

    pub fn fw_event(&self, event: u32) -> &'static str {
        event::fw_event_string(event, self.taxonomy)
    }

    pub fn event(&self, event: u32) -> &'static str {
        event::event_string(event)
    }

    pub fn event_x(&self, xevent: u32) -> String {
        event::event_x_string(xevent)
    }
}
