use tracing::debug;

pub trait ProtoResolver {
    fn resolve(&self) -> String;
}

/* IP Next Proto/Header */
pub type IpProto = u8;

pub const ICMP: IpProto = 1;
pub const TCP: IpProto = 6;
pub const UDP: IpProto = 17;
pub const ICMPV6: IpProto = 58;

/// Number of entries in the IP protocol name table.
pub const NUM_PROTOS: usize = 138;

/// Longest name `proto_num` will try to match.
const MAX_NAME_LEN: usize = 5;

/// Display names for IP protocol numbers 0..NUM_PROTOS.
///
/// Reserved or private numbers carry their decimal value as the name. The
/// strings are a display contract for scripts parsing our output, so they
/// must not be renamed or deduplicated.
static PROTO_LIST: [&str; NUM_PROTOS] = [
    "0", "ICMP", "IGMP", "GGP", "IPIP", "ST", "TCP", "CBT", "EGP", "IGP",
    "BBN", "NVPII", "PUP", "ARGUS", "ENCOM", "XNET", "CHAOS", "UDP", "MUX", "DCN",
    "HMP", "PRM", "XNS", "Trnk1", "Trnk2", "Leaf1", "Leaf2", "RDP", "IRTP", "ISO-4",
    "NETBK", "MFESP", "MEINP", "DCCP", "3PC", "IDPR", "XTP", "DDP", "IDPR", "TP++",
    "IL", "IPv6", "SDRP", "Rte6", "Frag6", "IDRP", "RSVP", "GRE", "MHRP", "BNA",
    "ESP", "AH", "INLSP", "SWIPE", "NARP", "MOBIL", "TLSP", "SKIP", "ICMP6", "NOHE6",
    "OPTS6", "HOST", "CFTP", "NET", "SATNT", "KLAN", "RVD", "IPPC", "FS", "SATM",
    "VISA", "IPCV", "CPNX", "CPHB", "WSN", "PVP", "BSATM", "SUNND", "WBMON", "WBEXP",
    "ISOIP", "VMTP", "SVMTP", "VINES", "TTP", "NSIGP", "DGP", "TCF", "EIGRP", "OSPF",
    "S-RPC", "LARP", "MTP", "AX.25", "IPIP", "MICP", "SCCSP", "ETHIP", "ENCAP", "99",
    "GMTP", "IFMP", "PNNI", "PIM", "ARIS", "SCPS", "QNX", "A/N", "IPcmp", "SNP",
    "CpqPP", "IPXIP", "VRRP", "PGM", "0hop", "L2TP", "DDX", "IATP", "STP", "SRP",
    "UTI", "SMP", "SM", "PTP", "ISIS4", "FIRE", "CRTP", "CRUDP", "128", "IPLT",
    "SPS", "PIPE", "SCTP", "FC", "134", "MHEAD", "UDP-L", "MPLS",
];

impl ProtoResolver for IpProto {
    fn resolve(&self) -> String {
        proto_string(*self)
    }
}

/// Name of IP protocol `proto`.
///
/// Numbers past the end of the table are rendered as decimal, left aligned
/// in a 5 character field, e.g. `"200  "`.
pub fn proto_string(proto: IpProto) -> String {
    match PROTO_LIST.get(proto as usize) {
        Some(name) => name.to_string(),
        None => format!("{proto:<5}"),
    }
}

/// Protocol number for `name`, compared case-insensitively.
///
/// The lowest matching number wins, so duplicated names such as `IPIP`
/// always map to their first entry. Names of 6 or more characters never
/// match.
pub fn proto_num(name: &str) -> Option<IpProto> {
    if name.len() > MAX_NAME_LEN {
        debug!(name, "protocol name too long");
        return None;
    }

    let num = PROTO_LIST
        .iter()
        .position(|entry| entry.eq_ignore_ascii_case(name))
        .map(|i| i as IpProto);
    if num.is_none() {
        debug!(name, "unknown protocol name");
    }
    num
}

/// All `(number, name)` pairs in table order.
pub fn protocols() -> impl Iterator<Item = (IpProto, &'static str)> {
    PROTO_LIST
        .iter()
        .enumerate()
        .map(|(i, name)| (i as IpProto, *name))
}
