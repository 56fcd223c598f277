//! Application layer protocol names reported by zone based firewalls.

use tracing::debug;

use crate::error::{Error, Result};

/// Number of entries in the application protocol table.
pub const NUM_L7_PROTOS: usize = 207;

/// Application protocol names, indexed by the firewall's protocol id.
///
/// Entries 181 and 183 are both `citriximaclient`. Downstream consumers key
/// on the id, so the duplicate stays.
static L7_PROTO_LIST: [&str; NUM_L7_PROTOS] = [
    "unknown_proto", "tcp", "udp", "icmp", "ftp", "smtp",
    "esmtp", "realaudio", "netshow", "vdolive", "rpc", "msrpc",
    "rcmd", "exec", "login", "shell", "streamworks", "cuseeme",
    "http", "sqlnet", "tftp", "rtsp", "sip", "mgcp",
    "skinny", "dns", "h323", "h245", "h225", "h225_ras",
    "pop3", "imap", "ymsgr", "aim", "msnmgr", "test",
    "netbios ns", "netbios dgm", "netbios ssn", "gtvp0", "gtpv1", "test66",
    "test64", "gtp data", "granular", "ctrl max", "ftp data", "realaudio data",
    "netshow data", "vdolive data", "rpc data", "msrpc data", "rcmd data", "streamworks data",
    "cuseeme data", "sqlnet data", "tftp data", "rtsp data", "sip rtp data", "sip rtcp data",
    "mgcp data", "skinny data", "h323  rtp audio", "h323 rtcp audio", "h323 rtp video", "h323 rtcp video",
    "h323 rtp data", "h323 rtcp data", "test data", "max prot w stats", "telnet", "tacacs",
    "https", "gopher", "finger", "kerberos", "pop2", "nntp",
    "snmp", "ldap", "ms sql", "sybase sql", "nfs", "lotusnote",
    "sap", "echo", "discard", "daytime", "netstat", "ssh",
    "time", "tacacs ds", "bootps", "bootpc", "dnsix", "rtelnet",
    "ident", "sqlserv", "ntp", "pwdgen", "cisco fna", "cisco tna",
    "cisco sys", "sqlsrv", "snmptrap", "rsvd", "send", "xdmcp",
    "bgp", "irc", "qmtp", "ipx", "dbase", "imap3",
    "rsvp tunnel", "hp collector", "hp managed node", "hp alarm mgr", "microsoft ds", "creativeserver",
    "creativepartnr", "appleqtc", "igmpv3lit", "isakmp", "biff", "who",
    "syslog", "router", "ncp", "timed", "irc serv", "uucp",
    "syslog conn", "sshell", "ldaps", "dhcp failover", "msexch routing", "entrust svcs",
    "entrust svc handler", "nisco tdp", "webster", "gdoi", "iscsi", "cddbp",
    "ftps", "telnets", "imaps", "ircs", "pop3s", "socks",
    "kazaa", "ms sql m", "ms sna", "wins", "ica", "orasrv",
    "rdb dbs disp", "vqp", "icabrowser", "kermit", "rsvp encap", "l2tp",
    "pptp", "h323gatestat", "r winsock", "radius", "hsrp", "net8 cman",
    "oracle em vp", "oraclenames", "oracle", "cisco svcs", "cisco net mgmt", "stun",
    "tr rsrb", "ddns v3", "ace svr", "giop", "ttc", "ipass",
    "clp", "citriximaclient", "sms", "citriximaclient", "realsecure", "lotussmtap",
    "cifs", "ms dotnetster", "tarantella", "fcip port", "ssp", "iscsi target",
    "mysql", "ms cluster net", "ldap admin", "802.11 iapp", "oem agent", "rtc pm port",
    "dbcontrol agent", "ipsec msft", "sip tls", "pcanywheredata", "pcanywherestat", "x11",
    "ircu", "n2h2server", "h323callsigalt",
];

/// Name of application protocol `id`.
pub fn l7_proto_string(id: usize) -> Result<&'static str> {
    L7_PROTO_LIST.get(id).copied().ok_or_else(|| {
        debug!(id, "application protocol id out of range");
        Error::L7ProtoOutOfRange {
            id,
            max: NUM_L7_PROTOS,
        }
    })
}

/// Id of the first application protocol called `name`, ignoring case.
pub fn l7_proto_num(name: &str) -> Option<usize> {
    L7_PROTO_LIST
        .iter()
        .position(|entry| entry.eq_ignore_ascii_case(name))
}

/// All `(id, name)` pairs in table order.
pub fn l7_protocols() -> impl Iterator<Item = (usize, &'static str)> {
    L7_PROTO_LIST.iter().copied().enumerate()
}
