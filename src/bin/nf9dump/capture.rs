use crate::error::{NetflowError, Result};
use pcap_file::DataLink;
use pcap_file::pcap::PcapReader;
use std::fs::File;
use std::io::Read;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::Path;
use tracing::{debug, trace};

const ETHERNET_HEADER_LEN: usize = 14;
const VLAN_TAG_LEN: usize = 4;
const IPV4_MIN_HEADER_LEN: usize = 20;
const IPV6_HEADER_LEN: usize = 40;
const UDP_HEADER_LEN: usize = 8;

const ETHERTYPE_IPV4: u16 = 0x0800;
const ETHERTYPE_IPV6: u16 = 0x86DD;
const ETHERTYPE_VLAN: u16 = 0x8100;
const IP_PROTOCOL_UDP: u8 = 17;

/// UDP payload pulled out of a captured Ethernet frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    /// Address of the exporter that sent the datagram
    pub source: SocketAddr,
    pub destination_port: u16,
    pub payload: Vec<u8>,
}

/// Reads the UDP datagrams addressed to a set of ports out of a pcap
/// capture
pub struct CaptureReader<R: Read> {
    reader: PcapReader<R>,
    ports: Vec<u16>,
}

impl CaptureReader<File> {
    /// Open a pcap capture file
    pub fn open(path: &Path, ports: &[u16]) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file, ports)
    }
}

impl<R: Read> CaptureReader<R> {
    pub fn new(reader: R, ports: &[u16]) -> Result<Self> {
        let reader = PcapReader::new(reader)?;

        let datalink = reader.header().datalink;
        if datalink != DataLink::ETHERNET {
            return Err(NetflowError::UnsupportedCapture(format!(
                "link type {:?}, only Ethernet captures are supported",
                datalink
            )));
        }

        Ok(Self {
            reader,
            ports: ports.to_vec(),
        })
    }

    /// Next datagram sent to one of the configured ports, skipping every
    /// other frame
    pub fn next_datagram(&mut self) -> Option<Result<Datagram>> {
        while let Some(packet) = self.reader.next_packet() {
            let packet = match packet {
                Ok(packet) => packet,
                Err(e) => return Some(Err(e.into())),
            };

            match parse_udp_frame(&packet.data) {
                Some(datagram) if self.ports.contains(&datagram.destination_port) => {
                    trace!(
                        source = %datagram.source,
                        len = datagram.payload.len(),
                        "captured datagram"
                    );
                    return Some(Ok(datagram));
                }
                Some(datagram) => trace!(
                    port = datagram.destination_port,
                    "skipping datagram to unconfigured port"
                ),
                None => trace!(len = packet.data.len(), "skipping non-UDP frame"),
            }
        }
        None
    }
}

/// Unwrap Ethernet, IP and UDP headers.
///
/// Fragments, IP options past the header length and non-UDP protocols
/// yield `None`. The UDP length field bounds the payload so Ethernet
/// trailer padding is never handed to the decoder.
fn parse_udp_frame(frame: &[u8]) -> Option<Datagram> {
    let mut ethertype = u16::from_be_bytes([*frame.get(12)?, *frame.get(13)?]);
    let mut offset = ETHERNET_HEADER_LEN;
    if ethertype == ETHERTYPE_VLAN {
        ethertype = u16::from_be_bytes([*frame.get(16)?, *frame.get(17)?]);
        offset += VLAN_TAG_LEN;
    }

    let ip = frame.get(offset..)?;
    let (source_ip, udp) = match ethertype {
        ETHERTYPE_IPV4 => parse_ipv4(ip)?,
        ETHERTYPE_IPV6 => parse_ipv6(ip)?,
        _ => return None,
    };

    let header = udp.get(..UDP_HEADER_LEN)?;
    let source_port = u16::from_be_bytes([header[0], header[1]]);
    let destination_port = u16::from_be_bytes([header[2], header[3]]);
    let udp_length = usize::from(u16::from_be_bytes([header[4], header[5]]));
    let payload = udp.get(UDP_HEADER_LEN..udp_length)?;

    Some(Datagram {
        source: SocketAddr::new(source_ip, source_port),
        destination_port,
        payload: payload.to_vec(),
    })
}

fn parse_ipv4(ip: &[u8]) -> Option<(IpAddr, &[u8])> {
    let header = ip.get(..IPV4_MIN_HEADER_LEN)?;
    let header_len = usize::from(header[0] & 0x0f) * 4;
    let fragment = u16::from_be_bytes([header[6], header[7]]);
    // More-fragments flag or a non-zero fragment offset
    if fragment & 0x3fff != 0 {
        debug!("skipping fragmented IPv4 datagram");
        return None;
    }
    if header[9] != IP_PROTOCOL_UDP || header_len < IPV4_MIN_HEADER_LEN {
        return None;
    }

    let source = Ipv4Addr::new(header[12], header[13], header[14], header[15]);
    Some((IpAddr::V4(source), ip.get(header_len..)?))
}

fn parse_ipv6(ip: &[u8]) -> Option<(IpAddr, &[u8])> {
    let header = ip.get(..IPV6_HEADER_LEN)?;
    if header[6] != IP_PROTOCOL_UDP {
        return None;
    }

    let source: [u8; 16] = header[8..24].try_into().ok()?;
    Some((IpAddr::V6(Ipv6Addr::from(source)), ip.get(IPV6_HEADER_LEN..)?))
}
