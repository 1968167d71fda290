use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};
use crate::field::{FIELD_DESCRIPTOR_LEN, Field};
use crate::flowset::DataFlowSet;
use crate::options::{DecodeOptions, FieldAlignment};
use tracing::{debug, trace};

/// Records shorter than this cannot be told apart from the zero padding
/// that aligns flowsets to a 4-byte boundary.
pub(crate) const MIN_RECORD_LEN: usize = 4;

const TEMPLATE_HEADER_LEN: usize = 4;
const OPTIONS_TEMPLATE_HEADER_LEN: usize = 6;

/// Template describing the layout of Flow Data Records whose Data FlowSet id
/// equals `template_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Unique within the exporter's observation domain, 256 and above
    pub template_id: u16,
    /// Number of fields, marks where the next template record starts
    pub field_count: u16,
    pub fields: Vec<Field>,
}

/// Template describing the layout of Options Data Records, split into scope
/// fields and option fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsTemplateRecord {
    pub template_id: u16,
    /// Length in bytes of all scope field descriptors
    pub scope_length: u16,
    /// Length in bytes of all option field descriptors
    pub option_length: u16,
    pub scopes: Vec<Field>,
    pub options: Vec<Field>,
}

/// One row of a Data FlowSet decoded with a [`TemplateRecord`]. Values are
/// raw bytes in template field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDataRecord {
    pub values: Vec<Vec<u8>>,
}

/// One row of a Data FlowSet decoded with an [`OptionsTemplateRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsDataRecord {
    pub scope_values: Vec<Vec<u8>>,
    pub option_values: Vec<Vec<u8>>,
}

impl TemplateRecord {
    /// Template with `field_count` derived from `fields`.
    ///
    /// The wire format caps `field_count` at `u16::MAX`. Longer field lists
    /// saturate it, and such a template cannot be encoded faithfully.
    pub fn new(template_id: u16, fields: Vec<Field>) -> Self {
        Self {
            template_id,
            field_count: u16::try_from(fields.len()).unwrap_or(u16::MAX),
            fields,
        }
    }

    pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
        let header: [u8; TEMPLATE_HEADER_LEN] = cursor
            .take_array()
            .map_err(DecodeError::TruncatedTemplateHeader)?;
        let template_id = u16::from_be_bytes([header[0], header[1]]);
        let field_count = u16::from_be_bytes([header[2], header[3]]);

        let fields_len = usize::from(field_count) * FIELD_DESCRIPTOR_LEN;
        let fields = cursor
            .take(fields_len)
            .map_err(DecodeError::TruncatedFields)?;

        trace!(template_id, field_count, "parsed template record");

        Ok(Self {
            template_id,
            field_count,
            fields: parse_field_list(fields),
        })
    }

    /// Total byte length of one data record described by this template
    pub fn record_length(&self) -> usize {
        row_length(&self.fields)
    }

    /// Decode a Data FlowSet into Flow Data Records.
    ///
    /// Returns no records when the flowset id does not match this template,
    /// which is how callers probe their template cache. Trailing data too
    /// short to form a whole record is dropped silently: it is padding, or
    /// the exporter's data does not line up with this template.
    pub fn project(&self, set: &DataFlowSet) -> Vec<FlowDataRecord> {
        if set.header.id != self.template_id || self.record_length() == 0 {
            return Vec::new();
        }

        let mut cursor = Cursor::new(&set.data);
        let mut records = Vec::new();
        while cursor.remaining() >= MIN_RECORD_LEN {
            let available = cursor.remaining();
            let Some(values) = take_values(&mut cursor, &self.fields) else {
                debug!(
                    template_id = self.template_id,
                    dropped = available,
                    "dropping partial trailing data record"
                );
                break;
            };
            records.push(FlowDataRecord { values });
        }
        records
    }
}

impl OptionsTemplateRecord {
    /// Options template with region lengths derived from `scopes` and
    /// `options`.
    ///
    /// Each region length saturates at `u16::MAX` bytes, i.e. past 16383
    /// descriptors.
    pub fn new(template_id: u16, scopes: Vec<Field>, options: Vec<Field>) -> Self {
        let region_length = |fields: &[Field]| {
            u16::try_from(fields.len() * FIELD_DESCRIPTOR_LEN).unwrap_or(u16::MAX)
        };
        Self {
            template_id,
            scope_length: region_length(&scopes),
            option_length: region_length(&options),
            scopes,
            options,
        }
    }

    pub(crate) fn parse(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Self> {
        let header: [u8; OPTIONS_TEMPLATE_HEADER_LEN] = cursor
            .take_array()
            .map_err(DecodeError::TruncatedTemplateHeader)?;
        let template_id = u16::from_be_bytes([header[0], header[1]]);
        let scope_length = u16::from_be_bytes([header[2], header[3]]);
        let option_length = u16::from_be_bytes([header[4], header[5]]);

        let region = cursor
            .take(usize::from(scope_length) + usize::from(option_length))
            .map_err(DecodeError::TruncatedFields)?;

        let aligned = usize::from(scope_length) % FIELD_DESCRIPTOR_LEN == 0
            && usize::from(option_length) % FIELD_DESCRIPTOR_LEN == 0;
        if !aligned {
            match options.field_alignment {
                FieldAlignment::Strict => {
                    return Err(DecodeError::MisalignedFieldRegion {
                        template_id,
                        scope_length,
                        option_length,
                    });
                }
                FieldAlignment::Lenient => debug!(
                    template_id,
                    scope_length, option_length, "ignoring partial field descriptors"
                ),
            }
        }

        let (scopes, option_fields) = region.split_at(usize::from(scope_length));

        trace!(
            template_id,
            scope_length, option_length, "parsed options template record"
        );

        Ok(Self {
            template_id,
            scope_length,
            option_length,
            scopes: parse_field_list(scopes),
            options: parse_field_list(option_fields),
        })
    }

    /// Total byte length of one options data record described by this
    /// template
    pub fn record_length(&self) -> usize {
        row_length(&self.scopes) + row_length(&self.options)
    }

    /// Decode a Data FlowSet into Options Data Records, with the same id
    /// matching and trailing data rules as [`TemplateRecord::project`].
    pub fn project(&self, set: &DataFlowSet) -> Vec<OptionsDataRecord> {
        if set.header.id != self.template_id || self.record_length() == 0 {
            return Vec::new();
        }

        let mut cursor = Cursor::new(&set.data);
        let mut records = Vec::new();
        while cursor.remaining() >= MIN_RECORD_LEN {
            let available = cursor.remaining();
            let row = take_values(&mut cursor, &self.scopes)
                .zip(take_values(&mut cursor, &self.options));
            let Some((scope_values, option_values)) = row else {
                debug!(
                    template_id = self.template_id,
                    dropped = available,
                    "dropping partial trailing options data record"
                );
                break;
            };
            records.push(OptionsDataRecord {
                scope_values,
                option_values,
            });
        }
        records
    }
}

/// Whole field descriptors in `bytes`, a partial trailing descriptor is
/// ignored
fn parse_field_list(bytes: &[u8]) -> Vec<Field> {
    bytes
        .chunks_exact(FIELD_DESCRIPTOR_LEN)
        .map(|chunk| Field::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

fn row_length(fields: &[Field]) -> usize {
    fields.iter().map(|f| usize::from(f.length)).sum()
}

/// Values of one record, or `None` once a value runs past the end
fn take_values(cursor: &mut Cursor<'_>, fields: &[Field]) -> Option<Vec<Vec<u8>>> {
    fields
        .iter()
        .map(|field| {
            cursor
                .take(usize::from(field.length))
                .ok()
                .map(<[u8]>::to_vec)
        })
        .collect()
}
