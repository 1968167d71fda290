use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::options::DecodeOptions;
use crate::template::{MIN_RECORD_LEN, OptionsTemplateRecord, TemplateRecord};
use tracing::trace;

/// FlowSet id of Template FlowSets
pub const TEMPLATE_FLOW_SET_ID: u16 = 0;
/// FlowSet id of Options Template FlowSets
pub const OPTIONS_TEMPLATE_FLOW_SET_ID: u16 = 1;
/// Size of the id + length header in front of every flowset
pub const FLOW_SET_HEADER_LEN: usize = 4;

/// Fields shared by every flowset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSetHeader {
    /// 0 for Template FlowSets, 1 for Options Template FlowSets, otherwise
    /// the template id a Data FlowSet must be matched against
    pub id: u16,
    /// Total length of the flowset including this header and padding
    pub length: u16,
}

/// Collection of templates describing Flow Data Records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFlowSet {
    pub header: FlowSetHeader,
    pub records: Vec<TemplateRecord>,
}

/// Collection of templates describing Options Data Records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsTemplateFlowSet {
    pub header: FlowSetHeader,
    pub records: Vec<OptionsTemplateRecord>,
}

/// Flow Data Records or Options Data Records in raw form.
///
/// The layout is only known once a template with the same id is available,
/// see [`TemplateRecord::project`] and [`OptionsTemplateRecord::project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFlowSet {
    pub header: FlowSetHeader,
    /// Flowset body including any trailing padding
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowSet {
    Template(TemplateFlowSet),
    OptionsTemplate(OptionsTemplateFlowSet),
    Data(DataFlowSet),
}

impl FlowSet {
    pub fn header(&self) -> &FlowSetHeader {
        match self {
            FlowSet::Template(set) => &set.header,
            FlowSet::OptionsTemplate(set) => &set.header,
            FlowSet::Data(set) => &set.header,
        }
    }

    pub fn id(&self) -> u16 {
        self.header().id
    }

    pub fn length(&self) -> u16 {
        self.header().length
    }
}

/// Parse the flowset at the front of `cursor`, consuming exactly its
/// declared length.
pub(crate) fn parse_flow_set(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<FlowSet> {
    let raw: [u8; FLOW_SET_HEADER_LEN] = cursor
        .take_array()
        .map_err(DecodeError::TruncatedHeader)?;
    let header = FlowSetHeader {
        id: u16::from_be_bytes([raw[0], raw[1]]),
        length: u16::from_be_bytes([raw[2], raw[3]]),
    };

    let body_len = usize::from(header.length)
        .checked_sub(FLOW_SET_HEADER_LEN)
        .ok_or(DecodeError::InvalidFlowSetLength(header.length))?;
    let body = cursor.take(body_len).map_err(DecodeError::TruncatedBody)?;

    trace!(id = header.id, length = header.length, "parsing flowset");

    let set = match header.id {
        TEMPLATE_FLOW_SET_ID => FlowSet::Template(parse_template_flow_set(header, body)?),
        OPTIONS_TEMPLATE_FLOW_SET_ID => {
            FlowSet::OptionsTemplate(parse_options_template_flow_set(header, body, options)?)
        }
        _ => FlowSet::Data(DataFlowSet {
            header,
            data: body.to_vec(),
        }),
    };
    Ok(set)
}

fn parse_template_flow_set(header: FlowSetHeader, body: &[u8]) -> Result<TemplateFlowSet> {
    let mut cursor = Cursor::new(body);
    let mut records = Vec::new();
    while cursor.remaining() >= MIN_RECORD_LEN {
        records.push(TemplateRecord::parse(&mut cursor)?);
    }
    Ok(TemplateFlowSet { header, records })
}

fn parse_options_template_flow_set(
    header: FlowSetHeader,
    body: &[u8],
    options: &DecodeOptions,
) -> Result<OptionsTemplateFlowSet> {
    let mut cursor = Cursor::new(body);
    let mut records = Vec::new();
    while cursor.remaining() >= MIN_RECORD_LEN {
        records.push(OptionsTemplateRecord::parse(&mut cursor, options)?);
    }
    Ok(OptionsTemplateFlowSet { header, records })
}
