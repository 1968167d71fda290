//! Wire encoder for building test fixtures.

use crate::field::{FIELD_DESCRIPTOR_LEN, Field};
use crate::flowset::{
    DataFlowSet, FLOW_SET_HEADER_LEN, FlowSet, FlowSetHeader, OPTIONS_TEMPLATE_FLOW_SET_ID,
    OptionsTemplateFlowSet, TEMPLATE_FLOW_SET_ID, TemplateFlowSet,
};
use crate::packet::{Packet, VERSION};
use crate::template::{OptionsTemplateRecord, TemplateRecord};

/// Flowset length for a body, padded to a multiple of 4
fn padded_length(body_len: usize) -> u16 {
    let len = FLOW_SET_HEADER_LEN + body_len;
    u16::try_from(len.next_multiple_of(4)).expect("flowset length exceeds u16::MAX")
}

pub(crate) fn template_flow_set(records: Vec<TemplateRecord>) -> FlowSet {
    let body_len = records
        .iter()
        .map(|r| 4 + r.fields.len() * FIELD_DESCRIPTOR_LEN)
        .sum();
    FlowSet::Template(TemplateFlowSet {
        header: FlowSetHeader {
            id: TEMPLATE_FLOW_SET_ID,
            length: padded_length(body_len),
        },
        records,
    })
}

pub(crate) fn options_template_flow_set(records: Vec<OptionsTemplateRecord>) -> FlowSet {
    let body_len = records
        .iter()
        .map(|r| 6 + (r.scopes.len() + r.options.len()) * FIELD_DESCRIPTOR_LEN)
        .sum();
    FlowSet::OptionsTemplate(OptionsTemplateFlowSet {
        header: FlowSetHeader {
            id: OPTIONS_TEMPLATE_FLOW_SET_ID,
            length: padded_length(body_len),
        },
        records,
    })
}

/// Data flowset holding `data` verbatim, without extra padding
pub(crate) fn data_flow_set(template_id: u16, data: Vec<u8>) -> FlowSet {
    FlowSet::Data(DataFlowSet {
        header: FlowSetHeader {
            id: template_id,
            length: u16::try_from(FLOW_SET_HEADER_LEN + data.len())
                .expect("flowset length exceeds u16::MAX"),
        },
        data,
    })
}

pub(crate) fn encode_packet(packet: &Packet) -> Vec<u8> {
    let mut bytes = Vec::new();

    // V9 Header (20 bytes)
    bytes.extend_from_slice(&VERSION.to_be_bytes());
    bytes.extend_from_slice(&packet.count.to_be_bytes());
    bytes.extend_from_slice(&packet.sys_up_time.to_be_bytes());
    bytes.extend_from_slice(&packet.unix_secs.to_be_bytes());
    bytes.extend_from_slice(&packet.sequence_number.to_be_bytes());
    bytes.extend_from_slice(&packet.source_id.to_be_bytes());

    for set in &packet.flow_sets {
        bytes.extend_from_slice(&encode_flow_set(set));
    }
    bytes
}

/// Encode a flowset, zero padding the body up to the declared length
pub(crate) fn encode_flow_set(set: &FlowSet) -> Vec<u8> {
    let header = set.header();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&header.id.to_be_bytes());
    bytes.extend_from_slice(&header.length.to_be_bytes());

    match set {
        FlowSet::Template(set) => {
            for record in &set.records {
                bytes.extend_from_slice(&record.template_id.to_be_bytes());
                bytes.extend_from_slice(&record.field_count.to_be_bytes());
                encode_fields(&mut bytes, &record.fields);
            }
        }
        FlowSet::OptionsTemplate(set) => {
            for record in &set.records {
                bytes.extend_from_slice(&record.template_id.to_be_bytes());
                bytes.extend_from_slice(&record.scope_length.to_be_bytes());
                bytes.extend_from_slice(&record.option_length.to_be_bytes());
                encode_fields(&mut bytes, &record.scopes);
                encode_fields(&mut bytes, &record.options);
            }
        }
        FlowSet::Data(set) => bytes.extend_from_slice(&set.data),
    }

    bytes.resize(bytes.len().max(usize::from(header.length)), 0);
    bytes
}

fn encode_fields(bytes: &mut Vec<u8>, fields: &[Field]) {
    for field in fields {
        bytes.extend_from_slice(&field.field_type.to_be_bytes());
        bytes.extend_from_slice(&field.length.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netflow_parser::{NetflowPacket, NetflowParser};

    #[test]
    fn test_template_flow_set_is_padded() {
        let set = options_template_flow_set(vec![OptionsTemplateRecord::new(
            260,
            vec![Field::new(1, 4)],
            vec![Field::new(34, 4)],
        )]);
        // 4 header + 6 record header + 8 fields, padded from 18 to 20
        assert_eq!(set.length(), 20);
        assert_eq!(encode_flow_set(&set).len(), 20);
    }

    /// Verify packet bytes can be parsed by an independent implementation
    fn assert_valid_v9(bytes: &[u8]) {
        let mut parser = NetflowParser::default();
        let packets = parser.parse_bytes(bytes);
        assert_eq!(packets.len(), 1, "{:?}", packets);
        for packet in &packets {
            assert!(
                matches!(packet, NetflowPacket::V9(_)),
                "expected V9 packet, got {:?}",
                packet
            );
        }
    }

    #[test]
    fn test_encoded_template_packet_is_valid_v9() {
        let packet = Packet {
            count: 1,
            sys_up_time: 360000,
            unix_secs: 1_700_000_000,
            sequence_number: 0,
            source_id: 1,
            flow_sets: vec![template_flow_set(vec![TemplateRecord::new(
                256,
                vec![Field::new(8, 4), Field::new(12, 4), Field::new(1, 4)],
            )])],
        };

        assert_valid_v9(&encode_packet(&packet));
    }

    #[test]
    fn test_encoded_mixed_packet_is_valid_v9() {
        let packet = Packet {
            count: 4,
            sys_up_time: 360000,
            unix_secs: 1_700_000_000,
            sequence_number: 7,
            source_id: 1,
            flow_sets: vec![
                template_flow_set(vec![TemplateRecord::new(
                    256,
                    vec![Field::new(8, 4), Field::new(12, 4), Field::new(1, 4)],
                )]),
                options_template_flow_set(vec![OptionsTemplateRecord::new(
                    260,
                    vec![Field::new(1, 4)],
                    vec![Field::new(34, 4)],
                )]),
                data_flow_set(
                    256,
                    vec![192, 168, 1, 10, 10, 0, 0, 50, 0x00, 0x00, 0xFD, 0xE8],
                ),
                data_flow_set(260, vec![0, 0, 0, 1, 0, 0, 0, 100]),
            ],
        };
        let bytes = encode_packet(&packet);

        assert_valid_v9(&bytes);
        assert_eq!(crate::decode(&bytes), Ok(packet));
    }
}
