//! Renderers turning raw field values into display strings.
//!
//! Every renderer accepts spans of any length, including empty ones, and
//! falls back to hex when the span does not have the expected shape.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

/// Reduce a big-endian value to an unsigned integer.
///
/// Only the leading 8 bytes are used for longer spans.
pub fn to_u64(data: &[u8]) -> u64 {
    data.iter()
        .take(8)
        .fold(0u64, |num, byte| (num << 8) | u64::from(*byte))
}

/// Unsigned decimal
pub fn uint(data: &[u8]) -> String {
    if data.len() > 8 {
        return "uint64 overflow".to_string();
    }
    to_u64(data).to_string()
}

/// Lowercase hex with a `0x` prefix
pub fn hex(data: &[u8]) -> String {
    format!("0x{}", ::hex::encode(data))
}

pub fn ascii(data: &[u8]) -> String {
    String::from_utf8_lossy(data)
        .trim_end_matches('\0')
        .to_string()
}

/// IPv4 or IPv6 address depending on the value length
pub fn ip(data: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(data) {
        Ipv4Addr::from(octets).to_string()
    } else if let Ok(octets) = <[u8; 16]>::try_from(data) {
        Ipv6Addr::from(octets).to_string()
    } else {
        hex(data)
    }
}

pub fn mac(data: &[u8]) -> String {
    if data.is_empty() {
        return hex(data);
    }
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Cumulative TCP flags, one column per flag from CWR down to FIN
pub fn tcp_flags(data: &[u8]) -> String {
    const FLAGS: [(u8, char); 8] = [
        (0x80, 'C'),
        (0x40, 'E'),
        (0x20, 'U'),
        (0x10, 'A'),
        (0x08, 'P'),
        (0x04, 'R'),
        (0x02, 'S'),
        (0x01, 'F'),
    ];

    let Some(&bits) = data.last() else {
        return hex(data);
    };
    FLAGS
        .iter()
        .map(|(mask, flag)| if bits & mask != 0 { *flag } else { ' ' })
        .collect()
}

/// ICMP `type/code`
pub fn icmp_type_code(data: &[u8]) -> String {
    match data {
        [icmp_type, code] => format!("{}/{}", icmp_type, code),
        _ => hex(data),
    }
}

/// Milliseconds of system uptime
pub fn msec_duration(data: &[u8]) -> String {
    format!("{:?}", Duration::from_millis(to_u64(data)))
}

pub fn sampling_interval(data: &[u8]) -> String {
    format!("1 out of {}", uint(data))
}

pub fn sampling_algorithm(data: &[u8]) -> String {
    match data.first() {
        Some(0x01) => "Deterministic",
        Some(0x02) => "Random",
        _ => "Unknown",
    }
    .to_string()
}

pub fn engine_type(data: &[u8]) -> String {
    match data.first() {
        Some(0x00) => "Routing Processor",
        Some(0x01) => "Linecard",
        _ => "Unknown",
    }
    .to_string()
}

pub fn mpls_top_label_type(data: &[u8]) -> String {
    match data.first() {
        Some(0x01) => "TE-MIDPT",
        Some(0x02) => "ATOM",
        Some(0x03) => "VPN",
        Some(0x04) => "BGP",
        Some(0x05) => "LDP",
        _ => "UNKNOWN",
    }
    .to_string()
}

pub fn direction(data: &[u8]) -> String {
    match data.first() {
        Some(0) => "Ingress",
        Some(1) => "Egress",
        _ => "Unknown",
    }
    .to_string()
}

/// MPLS label stack entry as `label/exp/bottom-of-stack`
pub fn mpls_label(data: &[u8]) -> String {
    let [b0, b1, b2] = data else {
        return hex(data);
    };
    let label = (u32::from(*b0) << 12) | (u32::from(*b1) << 4) | (u32::from(*b2) >> 4);
    let exp = (b2 & 0x0e) >> 1;
    let bottom = b2 & 0x01;
    format!("{}/{}/{}", label, exp, bottom)
}
