pub mod db;
pub mod format;

use std::fmt;

/// On-wire size of one field descriptor (type + length)
pub const FIELD_DESCRIPTOR_LEN: usize = 4;

/// Describes the type and length of a single value in a data record.
///
/// A field does not carry the value itself. Metadata lookups never fail:
/// unknown type codes, which are common for vendor proprietary fields,
/// degrade to sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Numeric field type code
    pub field_type: u16,
    /// Actual length in bytes of this field for the owning template
    pub length: u16,
}

/// Expected length of a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLength {
    Fixed(u16),
    Variable,
}

impl fmt::Display for FieldLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLength::Fixed(len) => write!(f, "{}", len),
            FieldLength::Variable => f.write_str("var"),
        }
    }
}

impl Field {
    pub fn new(field_type: u16, length: u16) -> Self {
        Self { field_type, length }
    }

    pub(crate) fn from_bytes(bytes: [u8; FIELD_DESCRIPTOR_LEN]) -> Self {
        Self {
            field_type: u16::from_be_bytes([bytes[0], bytes[1]]),
            length: u16::from_be_bytes([bytes[2], bytes[3]]),
        }
    }

    /// Short type identifier, `UNKNOWN_TYPE` for unknown type codes
    pub fn name(&self) -> &'static str {
        db::lookup(self.field_type).map_or("UNKNOWN_TYPE", |info| info.name)
    }

    pub fn description(&self) -> &'static str {
        db::lookup(self.field_type).map_or("Unknown type", |info| info.description)
    }

    /// Length mandated for this field type, variable for variable length
    /// and unknown types
    pub fn default_length(&self) -> FieldLength {
        db::lookup(self.field_type).map_or(FieldLength::Variable, |info| info.length)
    }

    /// Render a value of this field for display, `n/a` for unknown types
    pub fn render(&self, data: &[u8]) -> String {
        db::lookup(self.field_type).map_or_else(|| "n/a".to_string(), |info| (info.render)(data))
    }

    /// Interpret a value as a big-endian unsigned integer regardless of the
    /// field type. Only the leading 8 bytes of longer values are used.
    pub fn to_u64(&self, data: &[u8]) -> u64 {
        format::to_u64(data)
    }

    // Scope fields of options templates use their own type vocabulary.

    pub fn scope_name(&self) -> &'static str {
        match self.field_type {
            1 => "System",
            2 => "Interface",
            3 => "Line Card",
            4 => "Cache",
            5 => "Template",
            _ => "Unknown",
        }
    }

    pub fn scope_description(&self) -> &'static str {
        "The relevant portion of the Exporter/NetFlow process to which the Options Template Record refers."
    }

    pub fn scope_default_length(&self) -> FieldLength {
        FieldLength::Variable
    }

    pub fn render_scope(&self, data: &[u8]) -> String {
        format::hex(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_field_metadata() {
        let field = Field::new(12, 4);
        assert_eq!(field.name(), "IPV4_DST_ADDR");
        assert_eq!(field.description(), "IPv4 destination address.");
        assert_eq!(field.default_length(), FieldLength::Fixed(4));
        assert_eq!(field.render(&[10, 0, 0, 50]), "10.0.0.50");
    }

    #[test]
    fn test_unknown_field_degrades_to_sentinels() {
        let field = Field::new(40000, 2);
        assert_eq!(field.name(), "UNKNOWN_TYPE");
        assert_eq!(field.description(), "Unknown type");
        assert_eq!(field.default_length(), FieldLength::Variable);
        assert_eq!(field.render(&[0x01, 0x02]), "n/a");
        assert_eq!(field.to_u64(&[0x01, 0x02]), 258);
    }

    #[test]
    fn test_variable_length_counter_renders_actual_width() {
        let field = Field::new(1, 8);
        assert_eq!(field.default_length(), FieldLength::Variable);
        assert_eq!(field.render(&[0, 0, 0, 1, 0, 0, 0, 0]), "4294967296");
    }

    #[test]
    fn test_scope_vocabulary() {
        assert_eq!(Field::new(2, 4).scope_name(), "Interface");
        assert_eq!(Field::new(9, 4).scope_name(), "Unknown");
        assert_eq!(Field::new(1, 4).scope_default_length(), FieldLength::Variable);
        assert_eq!(Field::new(1, 2).render_scope(&[0x00, 0x2a]), "0x002a");
    }

    #[test]
    fn test_field_length_display() {
        assert_eq!(FieldLength::Fixed(16).to_string(), "16");
        assert_eq!(FieldLength::Variable.to_string(), "var");
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(Field::from_bytes([0x00, 0x08, 0x00, 0x04]), Field::new(8, 4));
    }
}
