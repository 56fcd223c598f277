//! IP address text helpers.

use std::net::{IpAddr, Ipv6Addr};

/// Longest address text left as is by `condense_v6`.
const CONDENSED_LEN: usize = 16;

/// Characters kept from each end of a condensed address.
const KEEP: usize = 7;

/// Shorten IPv6 address text to 16 characters for column output.
///
/// Text of 16 characters or less comes back unchanged. Longer text keeps its
/// first and last 7 characters joined by `..`:
///
/// ```
/// use flowfmt::addr::condense_v6;
///
/// assert_eq!(
///     condense_v6("2001:620:1000:cafe:20e:35ff:fec0:fed5"),
///     "2001:62..c0:fed5"
/// );
/// assert_eq!(condense_v6("fe80::1"), "fe80::1");
/// ```
///
/// This is purely textual; the input is not parsed or validated.
pub fn condense_v6(addr: &str) -> String {
    let len = addr.chars().count();
    if len <= CONDENSED_LEN {
        return addr.to_string();
    }

    let mut condensed = String::with_capacity(CONDENSED_LEN);
    condensed.extend(addr.chars().take(KEEP));
    condensed.push_str("..");
    condensed.extend(addr.chars().skip(len - KEEP));
    condensed
}

/// Build an IPv6 address from the two 64 bit halves stored in flow records.
pub fn ipv6_from_words(high: u64, low: u64) -> Ipv6Addr {
    Ipv6Addr::from((u128::from(high) << 64) | u128::from(low))
}

/// Format an address for display.
///
/// IPv6 addresses are condensed unless `long` is set.
pub fn ip_string(addr: IpAddr, long: bool) -> String {
    match addr {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) if long => v6.to_string(),
        IpAddr::V6(v6) => condense_v6(&v6.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_condense_v6() {
        let condensed = condense_v6("2001:620:1000:cafe:20e:35ff:fec0:fed5");
        assert_eq!(condensed, "2001:62..c0:fed5");
        assert_eq!(condensed.len(), CONDENSED_LEN);

        let condensed = condense_v6("2001:0620:1000:cafe:020e:35ff:fec0:fed5");
        assert_eq!(condensed, "2001:06..c0:fed5");
    }

    #[test]
    fn test_condense_v6_short_input() {
        assert_eq!(condense_v6(""), "");
        assert_eq!(condense_v6("::1"), "::1");
        assert_eq!(condense_v6("2001:db8::1:2:3"), "2001:db8::1:2:3");
        // exactly 16 characters
        assert_eq!(condense_v6("2001:db8:1:2::10"), "2001:db8:1:2::10");
    }

    #[test]
    fn test_condense_v6_boundary() {
        let condensed = condense_v6("2001:db8:1:2::100");
        assert_eq!(condensed, "2001:db..:2::100");
        assert_eq!(condensed.len(), CONDENSED_LEN);
    }

    #[test]
    fn test_condense_v6_non_ascii() {
        let condensed = condense_v6("ääääääääääääääääää");
        assert_eq!(condensed.chars().count(), CONDENSED_LEN);
    }

    #[test]
    fn test_ipv6_from_words() {
        let addr = ipv6_from_words(0x2001_0620_1000_cafe, 0x020e_35ff_fec0_fed5);
        assert_eq!(addr.to_string(), "2001:620:1000:cafe:20e:35ff:fec0:fed5");
    }

    #[test]
    fn test_ip_string() {
        let v4 = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(ip_string(v4, false), "192.168.1.1");

        let v6 = IpAddr::V6(ipv6_from_words(0x2001_0620_1000_cafe, 0x020e_35ff_fec0_fed5));
        assert_eq!(ip_string(v6, false), "2001:62..c0:fed5");
        assert_eq!(ip_string(v6, true), "2001:620:1000:cafe:20e:35ff:fec0:fed5");

        let short: IpAddr = "fe80::1".parse().unwrap();
        assert_eq!(ip_string(short, false), "fe80::1");
    }
}
