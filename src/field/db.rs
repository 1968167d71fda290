//! Static metadata for the NetFlow V9 field types defined by RFC 3954 and
//! Cisco's NetFlow Version 9 Flow-Record Format documentation.

use super::FieldLength;
use super::format;

const VARIABLE: FieldLength = FieldLength::Variable;

/// Metadata describing one field type code
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    /// Short identifier, e.g. `IPV4_SRC_ADDR`
    pub name: &'static str,
    /// Length mandated by the protocol documentation
    pub length: FieldLength,
    /// Renders a raw value of this type for display
    pub render: fn(&[u8]) -> String,
    pub description: &'static str,
}

fn info(
    name: &'static str,
    length: FieldLength,
    render: fn(&[u8]) -> String,
    description: &'static str,
) -> FieldInfo {
    FieldInfo {
        name,
        length,
        render,
        description,
    }
}

/// Look up the metadata of a field type code
pub fn lookup(field_type: u16) -> Option<FieldInfo> {
    let entry = match field_type {
        1 => info(
            "IN_BYTES",
            VARIABLE,
            format::uint,
            "Incoming counter with length N x 8 bits for the number of bytes associated with an IP Flow. By default N is 4.",
        ),
        2 => info(
            "IN_PKTS",
            VARIABLE,
            format::uint,
            "Incoming counter with length N x 8 bits for the number of packets associated with an IP Flow. By default N is 4.",
        ),
        3 => info(
            "FLOWS",
            VARIABLE,
            format::uint,
            "Number of Flows that were aggregated; by default N is 4.",
        ),
        4 => info(
            "PROTOCOL",
            FieldLength::Fixed(1),
            format::hex,
            "IP protocol byte.",
        ),
        5 => info(
            "SRC_TOS",
            FieldLength::Fixed(1),
            format::hex,
            "Type of service byte setting when entering the incoming interface.",
        ),
        6 => info(
            "TCP_FLAGS",
            FieldLength::Fixed(1),
            format::tcp_flags,
            "TCP flags; cumulative of all the TCP flags seen in this Flow.",
        ),
        7 => info(
            "L4_SRC_PORT",
            FieldLength::Fixed(2),
            format::uint,
            "TCP/UDP source port number (for example, FTP, Telnet, or equivalent).",
        ),
        8 => info(
            "IPV4_SRC_ADDR",
            FieldLength::Fixed(4),
            format::ip,
            "IPv4 source address.",
        ),
        9 => info(
            "SRC_MASK",
            FieldLength::Fixed(1),
            format::uint,
            "The number of contiguous bits in the source subnet mask (i.e., the mask in slash notation).",
        ),
        10 => info(
            "INPUT_SNMP",
            VARIABLE,
            format::uint,
            "Input interface index. By default N is 2, but higher values can be used.",
        ),
        11 => info(
            "L4_DST_PORT",
            FieldLength::Fixed(2),
            format::uint,
            "TCP/UDP destination port number (for example, FTP, Telnet, or equivalent).",
        ),
        12 => info(
            "IPV4_DST_ADDR",
            FieldLength::Fixed(4),
            format::ip,
            "IPv4 destination address.",
        ),
        13 => info(
            "DST_MASK",
            FieldLength::Fixed(1),
            format::uint,
            "The number of contiguous bits in the destination subnet mask (i.e., the mask in slash notation).",
        ),
        14 => info(
            "OUTPUT_SNMP",
            VARIABLE,
            format::uint,
            "Output interface index. By default N is 2, but higher values can be used.",
        ),
        15 => info(
            "IPV4_NEXT_HOP",
            FieldLength::Fixed(4),
            format::ip,
            "IPv4 address of the next-hop router.",
        ),
        16 => info(
            "SRC_AS",
            VARIABLE,
            format::uint,
            "Source BGP autonomous system number where N could be 2 or 4. By default N is 2.",
        ),
        17 => info(
            "DST_AS",
            VARIABLE,
            format::uint,
            "Destination BGP autonomous system number where N could be 2 or 4. By default N is 2.",
        ),
        18 => info(
            "BGP_IPV4_NEXT_HOP",
            FieldLength::Fixed(4),
            format::ip,
            "Next-hop router's IP address in the BGP domain.",
        ),
        19 => info(
            "MUL_DST_PKTS",
            VARIABLE,
            format::uint,
            "IP multicast outgoing packet counter with length N x 8 bits for packets associated with the IP Flow. By default N is 4.",
        ),
        20 => info(
            "MUL_DST_BYTES",
            VARIABLE,
            format::uint,
            "IP multicast outgoing Octet (byte) counter with length N x 8 bits for the number of bytes associated with the IP Flow. By default N is 4.",
        ),
        21 => info(
            "LAST_SWITCHED",
            FieldLength::Fixed(4),
            format::msec_duration,
            "sysUptime in msec at which the last packet of this Flow was switched.",
        ),
        22 => info(
            "FIRST_SWITCHED",
            FieldLength::Fixed(4),
            format::msec_duration,
            "sysUptime in msec at which the first packet of this Flow was switched.",
        ),
        23 => info(
            "OUT_BYTES",
            VARIABLE,
            format::uint,
            "Outgoing counter with length N x 8 bits for the number of bytes associated with an IP Flow. By default N is 4.",
        ),
        24 => info(
            "OUT_PKTS",
            VARIABLE,
            format::uint,
            "Outgoing counter with length N x 8 bits for the number of packets associated with an IP Flow. By default N is 4.",
        ),
        25 => info(
            "MIN_PKT_LNGTH",
            FieldLength::Fixed(2),
            format::uint,
            "Minimum IP packet length on incoming packets of the flow.",
        ),
        26 => info(
            "MAX_PKT_LNGTH",
            FieldLength::Fixed(2),
            format::uint,
            "Maximum IP packet length on incoming packets of the flow.",
        ),
        27 => info(
            "IPV6_SRC_ADDR",
            FieldLength::Fixed(16),
            format::ip,
            "IPv6 source address.",
        ),
        28 => info(
            "IPV6_DST_ADDR",
            FieldLength::Fixed(16),
            format::ip,
            "IPv6 destination address.",
        ),
        29 => info(
            "IPV6_SRC_MASK",
            FieldLength::Fixed(1),
            format::uint,
            "Length of the IPv6 source mask in contiguous bits.",
        ),
        30 => info(
            "IPV6_DST_MASK",
            FieldLength::Fixed(1),
            format::uint,
            "Length of the IPv6 destination mask in contiguous bits.",
        ),
        31 => info(
            "IPV6_FLOW_LABEL",
            FieldLength::Fixed(3),
            format::hex,
            "IPv6 flow label as per RFC 2460 definition.",
        ),
        32 => info(
            "ICMP_TYPE",
            FieldLength::Fixed(2),
            format::icmp_type_code,
            "Internet Control Message Protocol (ICMP) packet type; reported as ICMP Type * 256 + ICMP code.",
        ),
        33 => info(
            "MUL_IGMP_TYPE",
            FieldLength::Fixed(1),
            format::uint,
            "Internet Group Management Protocol (IGMP) packet type.",
        ),
        34 => info(
            "SAMPLING_INTERVAL",
            FieldLength::Fixed(4),
            format::sampling_interval,
            "When using sampled NetFlow, the rate at which packets are sampled; for example, a value of 100 indicates that one of every hundred packets is sampled.",
        ),
        35 => info(
            "SAMPLING_ALGORITHM",
            FieldLength::Fixed(1),
            format::sampling_algorithm,
            "For sampled NetFlow platform-wide: 0x01 deterministic sampling, 0x02 random sampling. Use in connection with SAMPLING_INTERVAL.",
        ),
        36 => info(
            "FLOW_ACTIVE_TIMEOUT",
            FieldLength::Fixed(2),
            format::uint,
            "Timeout value (in seconds) for active flow entries in the NetFlow cache.",
        ),
        37 => info(
            "FLOW_INACTIVE_TIMEOUT",
            FieldLength::Fixed(2),
            format::uint,
            "Timeout value (in seconds) for inactive Flow entries in the NetFlow cache.",
        ),
        38 => info(
            "ENGINE_TYPE",
            FieldLength::Fixed(1),
            format::engine_type,
            "Type of Flow switching engine (route processor, linecard, etc...).",
        ),
        39 => info(
            "ENGINE_ID",
            FieldLength::Fixed(1),
            format::uint,
            "ID number of the Flow switching engine.",
        ),
        40 => info(
            "TOTAL_BYTES_EXP",
            VARIABLE,
            format::uint,
            "Counter with length N x 8 bits for the number of bytes exported by the Observation Domain. By default N is 4.",
        ),
        41 => info(
            "TOTAL_PKTS_EXP",
            VARIABLE,
            format::uint,
            "Counter with length N x 8 bits for the number of packets exported by the Observation Domain. By default N is 4.",
        ),
        42 => info(
            "TOTAL_FLOWS_EXP",
            VARIABLE,
            format::uint,
            "Counter with length N x 8 bits for the number of Flows exported by the Observation Domain. By default N is 4.",
        ),
        43 => info(
            "VENDOR_PROPRIETARY_43",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        44 => info(
            "IPV4_SRC_PREFIX",
            FieldLength::Fixed(4),
            format::ip,
            "IPv4 source address prefix (specific for Catalyst architecture).",
        ),
        45 => info(
            "IPV4_DST_PREFIX",
            FieldLength::Fixed(4),
            format::ip,
            "IPv4 destination address prefix (specific for Catalyst architecture).",
        ),
        46 => info(
            "MPLS_TOP_LABEL_TYPE",
            FieldLength::Fixed(1),
            format::mpls_top_label_type,
            "MPLS Top Label Type: 0x00 UNKNOWN, 0x01 TE-MIDPT, 0x02 ATOM, 0x03 VPN, 0x04 BGP, 0x05 LDP.",
        ),
        47 => info(
            "MPLS_TOP_LABEL_IP_ADDR",
            FieldLength::Fixed(4),
            format::ip,
            "Forwarding Equivalent Class corresponding to the MPLS Top Label.",
        ),
        48 => info(
            "FLOW_SAMPLER_ID",
            VARIABLE,
            format::uint,
            "Identifier shown in \"show flow-sampler\". By default N is 4.",
        ),
        49 => info(
            "FLOW_SAMPLER_MODE",
            FieldLength::Fixed(1),
            format::sampling_algorithm,
            "The type of algorithm used for sampling data: 0x02 random sampling. Use in connection with FLOW_SAMPLER_RANDOM_INTERVAL.",
        ),
        50 => info(
            "FLOW_SAMPLER_RANDOM_INTERVAL",
            FieldLength::Fixed(4),
            format::uint,
            "Packet interval at which to sample. Use in connection with FLOW_SAMPLER_MODE.",
        ),
        51 => info(
            "VENDOR_PROPRIETARY_51",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        52 => info(
            "MIN_TTL",
            FieldLength::Fixed(1),
            format::uint,
            "Minimum TTL on incoming packets of the flow.",
        ),
        53 => info(
            "MAX_TTL",
            FieldLength::Fixed(1),
            format::uint,
            "Maximum TTL on incoming packets of the flow.",
        ),
        54 => info(
            "IPV4_IDENT",
            FieldLength::Fixed(2),
            format::hex,
            "The IP v4 identification field.",
        ),
        55 => info(
            "DST_TOS",
            FieldLength::Fixed(1),
            format::hex,
            "Type of Service byte setting when exiting outgoing interface.",
        ),
        56 => info(
            "IN_SRC_MAC",
            FieldLength::Fixed(6),
            format::mac,
            "Source MAC Address.",
        ),
        57 => info(
            "OUT_DST_MAC",
            FieldLength::Fixed(6),
            format::mac,
            "Destination MAC Address.",
        ),
        58 => info(
            "SRC_VLAN",
            FieldLength::Fixed(2),
            format::uint,
            "Virtual LAN identifier associated with ingress interface.",
        ),
        59 => info(
            "DST_VLAN",
            FieldLength::Fixed(2),
            format::uint,
            "Virtual LAN identifier associated with egress interface.",
        ),
        60 => info(
            "IP_PROTOCOL_VERSION",
            FieldLength::Fixed(1),
            format::uint,
            "Internet Protocol Version. Set to 4 for IPv4, set to 6 for IPv6. If not present in the template, then version 4 is assumed.",
        ),
        61 => info(
            "DIRECTION",
            FieldLength::Fixed(1),
            format::direction,
            "Flow direction: 0 - ingress flow, 1 - egress flow.",
        ),
        62 => info(
            "IPV6_NEXT_HOP",
            FieldLength::Fixed(16),
            format::ip,
            "IPv6 address of the next-hop router.",
        ),
        63 => info(
            "BGP_IPV6_NEXT_HOP",
            FieldLength::Fixed(16),
            format::ip,
            "Next-hop router in the BGP domain.",
        ),
        64 => info(
            "IPV6_OPTIONS_HEADERS",
            FieldLength::Fixed(4),
            format::hex,
            "Bit-encoded field identifying IPv6 option headers found in the flow.",
        ),
        65 => info(
            "VENDOR_PROPRIETARY_65",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        66 => info(
            "VENDOR_PROPRIETARY_66",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        67 => info(
            "VENDOR_PROPRIETARY_67",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        68 => info(
            "VENDOR_PROPRIETARY_68",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        69 => info(
            "VENDOR_PROPRIETARY_69",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        70 => info(
            "MPLS_LABEL_1",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 1 in the stack.",
        ),
        71 => info(
            "MPLS_LABEL_2",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 2 in the stack.",
        ),
        72 => info(
            "MPLS_LABEL_3",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 3 in the stack.",
        ),
        73 => info(
            "MPLS_LABEL_4",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 4 in the stack.",
        ),
        74 => info(
            "MPLS_LABEL_5",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 5 in the stack.",
        ),
        75 => info(
            "MPLS_LABEL_6",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 6 in the stack.",
        ),
        76 => info(
            "MPLS_LABEL_7",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 7 in the stack.",
        ),
        77 => info(
            "MPLS_LABEL_8",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 8 in the stack.",
        ),
        78 => info(
            "MPLS_LABEL_9",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 9 in the stack.",
        ),
        79 => info(
            "MPLS_LABEL_10",
            FieldLength::Fixed(3),
            format::mpls_label,
            "MPLS label at position 10 in the stack.",
        ),
        80 => info(
            "IN_DST_MAC",
            FieldLength::Fixed(6),
            format::mac,
            "Incoming destination MAC address.",
        ),
        81 => info(
            "OUT_SRC_MAC",
            FieldLength::Fixed(6),
            format::mac,
            "Outgoing source MAC address.",
        ),
        82 => info(
            "IF_NAME",
            VARIABLE,
            format::ascii,
            "Shortened interface name i.e.: \"FE1/0\".",
        ),
        83 => info(
            "IF_DESC",
            VARIABLE,
            format::ascii,
            "Full interface name i.e.: \"FastEthernet 1/0\".",
        ),
        84 => info(
            "SAMPLER_NAME",
            VARIABLE,
            format::ascii,
            "Name of the flow sampler.",
        ),
        85 => info(
            "IN_PERMANENT_BYTES",
            VARIABLE,
            format::uint,
            "Running byte counter for a permanent flow. By default N is 4.",
        ),
        86 => info(
            "IN_PERMANENT_PKTS",
            VARIABLE,
            format::uint,
            "Running packet counter for a permanent flow. By default N is 4.",
        ),
        87 => info(
            "VENDOR_PROPRIETARY_87",
            VARIABLE,
            format::hex,
            "*Vendor Proprietary*",
        ),
        88 => info(
            "FRAGMENT_OFFSET",
            FieldLength::Fixed(2),
            format::uint,
            "The fragment-offset value from fragmented IP packets.",
        ),
        89 => info(
            "FORWARDING_STATUS",
            FieldLength::Fixed(1),
            format::hex,
            "Forwarding status is encoded on 1 byte with the 2 left bits giving the status and the 6 remaining bits giving the reason code.",
        ),
        90 => info(
            "MPLS_PAL_RD",
            FieldLength::Fixed(8),
            format::hex,
            "MPLS PAL Route Distinguisher.",
        ),
        91 => info(
            "MPLS_PREFIX_LEN",
            FieldLength::Fixed(1),
            format::uint,
            "Number of consecutive bits in the MPLS prefix length.",
        ),
        92 => info(
            "SRC_TRAFFIC_INDEX",
            FieldLength::Fixed(4),
            format::uint,
            "BGP Policy Accounting Source Traffic Index.",
        ),
        93 => info(
            "DST_TRAFFIC_INDEX",
            FieldLength::Fixed(4),
            format::uint,
            "BGP Policy Accounting Destination Traffic Index.",
        ),
        94 => info(
            "APPLICATION_DESCRIPTION",
            VARIABLE,
            format::ascii,
            "Application description.",
        ),
        95 => info(
            "APPLICATION_TAG",
            VARIABLE,
            format::hex,
            "8 bits of engine ID, followed by n bits of classification.",
        ),
        96 => info(
            "APPLICATION_NAME",
            VARIABLE,
            format::ascii,
            "Name associated with a classification.",
        ),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_types() {
        let src = lookup(8).unwrap();
        assert_eq!(src.name, "IPV4_SRC_ADDR");
        assert_eq!(src.length, FieldLength::Fixed(4));
        assert_eq!((src.render)(&[10, 0, 0, 1]), "10.0.0.1");

        let bytes = lookup(1).unwrap();
        assert_eq!(bytes.name, "IN_BYTES");
        assert_eq!(bytes.length, FieldLength::Variable);
    }

    #[test]
    fn test_lookup_covers_contiguous_range() {
        assert!((1..=96).all(|code| lookup(code).is_some()));
        assert!(lookup(0).is_none());
        assert!(lookup(97).is_none());
        assert!(lookup(40000).is_none());
    }

    #[test]
    fn test_declared_lengths_match_renderers() {
        assert_eq!(lookup(27).unwrap().length, FieldLength::Fixed(16));
        assert_eq!(lookup(56).unwrap().length, FieldLength::Fixed(6));
        assert_eq!(lookup(70).unwrap().length, FieldLength::Fixed(3));
        assert_eq!((lookup(56).unwrap().render)(&[0, 1, 2, 3, 4, 5]), "00:01:02:03:04:05");
    }
}
