use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::flowset::{DataFlowSet, FlowSet, parse_flow_set};
use crate::options::DecodeOptions;
use crate::template::{OptionsTemplateRecord, TemplateRecord};
use tracing::{debug, trace};

/// The only NetFlow version this crate decodes
pub const VERSION: u16 = 9;
/// Size of the fixed packet header
pub const PACKET_HEADER_LEN: usize = 20;

/// A decoded NetFlow V9 export packet.
///
/// The version field is not stored: a `Packet` only ever exists for
/// version 9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Total number of records the exporter claims to have put in the
    /// packet. Only used to bound the flowset loop.
    pub count: u16,
    /// Milliseconds since the exporting device booted
    pub sys_up_time: u32,
    /// Seconds since the UNIX epoch at which the packet left the exporter
    pub unix_secs: u32,
    /// Incremental counter of all export packets sent by the observation
    /// domain
    pub sequence_number: u32,
    /// Identifies the exporter observation domain. Template ids are unique
    /// per (exporter address, source id).
    pub source_id: u32,
    pub flow_sets: Vec<FlowSet>,
}

impl Packet {
    pub fn version(&self) -> u16 {
        VERSION
    }

    /// All Data FlowSets, in packet order
    pub fn data_flow_sets(&self) -> impl Iterator<Item = &DataFlowSet> {
        self.flow_sets.iter().filter_map(|set| match set {
            FlowSet::Data(set) => Some(set),
            FlowSet::Template(_) | FlowSet::OptionsTemplate(_) => None,
        })
    }

    /// All Template Records of all Template FlowSets, in packet order
    pub fn template_records(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.flow_sets.iter().flat_map(|set| match set {
            FlowSet::Template(set) => set.records.as_slice(),
            FlowSet::OptionsTemplate(_) | FlowSet::Data(_) => &[][..],
        })
    }

    /// All Options Template Records of all Options Template FlowSets, in
    /// packet order
    pub fn options_template_records(&self) -> impl Iterator<Item = &OptionsTemplateRecord> {
        self.flow_sets.iter().flat_map(|set| match set {
            FlowSet::OptionsTemplate(set) => set.records.as_slice(),
            FlowSet::Template(_) | FlowSet::Data(_) => &[][..],
        })
    }
}

/// Decode a single NetFlow V9 packet with the default options.
///
/// `data` must be exactly one export packet, typically the payload of one
/// UDP datagram. No state is kept between calls: Data FlowSets are returned
/// raw and must be matched against templates by the caller.
pub fn decode(data: &[u8]) -> Result<Packet> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode a single NetFlow V9 packet.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Packet> {
    decode_packet(data, options).inspect_err(|e| debug!(len = data.len(), "decode failed: {}", e))
}

fn decode_packet(data: &[u8], options: &DecodeOptions) -> Result<Packet> {
    let mut cursor = Cursor::new(data);

    let header: [u8; PACKET_HEADER_LEN] = cursor
        .take_array()
        .map_err(DecodeError::TruncatedHeader)?;
    let version = u16::from_be_bytes([header[0], header[1]]);
    let count = u16::from_be_bytes([header[2], header[3]]);
    let sys_up_time = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
    let unix_secs = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);
    let sequence_number = u32::from_be_bytes([header[12], header[13], header[14], header[15]]);
    let source_id = u32::from_be_bytes([header[16], header[17], header[18], header[19]]);

    if version != VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    // Exporters are known to misreport count, so it only bounds the loop.
    let mut flow_sets = Vec::with_capacity(usize::from(count));
    while !cursor.is_empty() && flow_sets.len() < usize::from(count) {
        flow_sets.push(parse_flow_set(&mut cursor, options)?);
    }

    if !cursor.is_empty() {
        return Err(DecodeError::TrailingBytes(cursor.remaining()));
    }

    trace!(
        source_id,
        sequence_number,
        flow_sets = flow_sets.len(),
        "decoded packet"
    );

    Ok(Packet {
        count,
        sys_up_time,
        unix_secs,
        sequence_number,
        source_id,
        flow_sets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::flowset::FlowSetHeader;
    use crate::testutil::{
        data_flow_set, encode_packet, options_template_flow_set, template_flow_set,
    };

    const HEADER: [u8; 20] = [
        0x00, 0x09, // Version
        0x00, 0x00, // Records count
        0x00, 0x00, 0x01, 0x00, // System uptime in milliseconds (256)
        0x00, 0x00, 0x02, 0x00, // Timestamp (512)
        0x00, 0x00, 0x04, 0x00, // Sequence number (1024)
        0x00, 0x00, 0x08, 0x00, // Source ID (2048)
    ];

    fn header_with_count(count: u16) -> Vec<u8> {
        let mut bytes = HEADER.to_vec();
        bytes[2..4].copy_from_slice(&count.to_be_bytes());
        bytes
    }

    #[test]
    fn test_decode_valid_header() {
        let packet = decode(&HEADER).unwrap();
        assert_eq!(
            packet,
            Packet {
                count: 0,
                sys_up_time: 256,
                unix_secs: 512,
                sequence_number: 1024,
                source_id: 2048,
                flow_sets: vec![],
            }
        );
        assert_eq!(packet.version(), 9);
    }

    #[test]
    fn test_decode_incomplete_header() {
        assert_eq!(
            decode(&HEADER[..19]),
            Err(DecodeError::TruncatedHeader(1))
        );
    }

    #[test]
    fn test_decode_empty_packet() {
        assert_eq!(decode(&[]), Err(DecodeError::TruncatedHeader(20)));
    }

    #[test]
    fn test_decode_short_inputs_are_truncated() {
        for len in 0..PACKET_HEADER_LEN {
            assert!(matches!(
                decode(&HEADER[..len]),
                Err(DecodeError::TruncatedHeader(_))
            ));
        }
    }

    #[test]
    fn test_decode_rejects_other_versions() {
        for version in [1u16, 5, 7, 8, 10] {
            let mut bytes = header_with_count(1);
            bytes[0..2].copy_from_slice(&version.to_be_bytes());
            bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x04]);
            assert_eq!(decode(&bytes), Err(DecodeError::UnsupportedVersion(version)));
        }
    }

    #[test]
    fn test_decode_template_and_data() {
        let mut bytes = header_with_count(2);
        bytes.extend_from_slice(&[
            0x00, 0x00, 0x00, 0x10, // template flowset
            0x01, 0x00, 0x00, 0x02, 0x00, 0x08, 0x00, 0x04, 0x00, 0x0C, 0x00, 0x04,
            0x01, 0x00, 0x00, 0x0C, // data flowset for template 256
            192, 168, 1, 10, 10, 0, 0, 50,
        ]);

        let packet = decode(&bytes).unwrap();
        assert_eq!(packet.flow_sets.len(), 2);

        let templates: Vec<_> = packet.template_records().collect();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].fields,
            vec![Field::new(8, 4), Field::new(12, 4)]
        );

        let data: Vec<_> = packet.data_flow_sets().collect();
        assert_eq!(data.len(), 1);
        let records = templates[0].project(data[0]);
        assert_eq!(records.len(), 1);
        assert_eq!(templates[0].fields[0].render(&records[0].values[0]), "192.168.1.10");
        assert_eq!(templates[0].fields[1].render(&records[0].values[1]), "10.0.0.50");
    }

    #[test]
    fn test_count_bounds_the_flow_set_loop() {
        // One flowset parsed, the second one is left over
        let mut bytes = header_with_count(1);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 1, 2, 3, 4]);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 5, 6, 7, 8]);
        assert_eq!(decode(&bytes), Err(DecodeError::TrailingBytes(8)));
    }

    #[test]
    fn test_overstated_count_stops_at_end_of_data() {
        let mut bytes = header_with_count(10);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 1, 2, 3, 4]);
        let packet = decode(&bytes).unwrap();
        assert_eq!(packet.count, 10);
        assert_eq!(packet.flow_sets.len(), 1);
    }

    #[test]
    fn test_zero_count_with_flow_sets_is_trailing() {
        let mut bytes = HEADER.to_vec();
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 1, 2, 3, 4]);
        assert_eq!(decode(&bytes), Err(DecodeError::TrailingBytes(8)));
    }

    #[test]
    fn test_flow_set_error_aborts_decode() {
        let mut bytes = header_with_count(2);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 1, 2, 3, 4]);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x20, 1, 2]);
        assert_eq!(decode(&bytes), Err(DecodeError::TruncatedBody(26)));
    }

    #[test]
    fn test_strict_options_reject_misaligned_options_template() {
        let mut bytes = header_with_count(1);
        bytes.extend_from_slice(&[
            0x00, 0x01, 0x00, 0x10, // options template flowset, length 16
            0x01, 0x04, 0x00, 0x02, 0x00, 0x04, // scope length 2
            0x00, 0x01, 0x00, 0x22, 0x00, 0x04,
        ]);
        assert!(decode(&bytes).is_ok());
        assert_eq!(
            decode_with(&bytes, &DecodeOptions::strict()),
            Err(DecodeError::MisalignedFieldRegion {
                template_id: 260,
                scope_length: 2,
                option_length: 4,
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let packet = Packet {
            count: 4,
            sys_up_time: 360000,
            unix_secs: 1_700_000_000,
            sequence_number: 42,
            source_id: 1,
            flow_sets: vec![
                template_flow_set(vec![
                    TemplateRecord::new(256, vec![Field::new(8, 4), Field::new(12, 4)]),
                    TemplateRecord::new(257, vec![Field::new(27, 16), Field::new(4, 1)]),
                ]),
                options_template_flow_set(vec![OptionsTemplateRecord::new(
                    260,
                    vec![Field::new(1, 4)],
                    vec![Field::new(34, 4), Field::new(35, 1)],
                )]),
                data_flow_set(256, vec![192, 168, 1, 10, 10, 0, 0, 50]),
                data_flow_set(257, vec![0; 17]),
            ],
        };

        let bytes = encode_packet(&packet);
        assert_eq!(decode(&bytes), Ok(packet));
    }

    #[test]
    fn test_accessors_filter_by_kind() {
        let packet = Packet {
            count: 3,
            sys_up_time: 0,
            unix_secs: 0,
            sequence_number: 0,
            source_id: 7,
            flow_sets: vec![
                data_flow_set(300, vec![1, 2, 3, 4]),
                template_flow_set(vec![TemplateRecord::new(300, vec![Field::new(2, 4)])]),
                options_template_flow_set(vec![OptionsTemplateRecord::new(
                    301,
                    vec![Field::new(2, 2)],
                    vec![Field::new(10, 2)],
                )]),
            ],
        };

        assert_eq!(
            packet
                .data_flow_sets()
                .map(|set| set.header)
                .collect::<Vec<_>>(),
            vec![FlowSetHeader { id: 300, length: 8 }]
        );
        assert_eq!(
            packet
                .template_records()
                .map(|t| t.template_id)
                .collect::<Vec<_>>(),
            vec![300]
        );
        assert_eq!(
            packet
                .options_template_records()
                .map(|t| t.template_id)
                .collect::<Vec<_>>(),
            vec![301]
        );
    }
}
