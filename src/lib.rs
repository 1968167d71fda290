//! Decoder for Cisco NetFlow V9 export packets (RFC 3954).
//!
//! Decoding works on a single packet and keeps no state between calls:
//!
//! ```text
//! +--------+--------------------------------------------------------+
//! |        | +----------+ +---------+     +-----------+ +---------+ |
//! | Packet | | Template | | Data    |     | Options   | | Data    | |
//! | Header | | FlowSet  | | FlowSet | ... | Template  | | FlowSet | |
//! |        | |          | |         |     | FlowSet   | |         | |
//! |        | +----------+ +---------+     +-----------+ +---------+ |
//! +--------+--------------------------------------------------------+
//! ```
//!
//! Data FlowSets can only be decoded once a template with the same id is
//! known, and that template may have arrived in an earlier packet. Keeping
//! templates around is up to the caller; template ids are scoped by the
//! exporter address and the packet's source id.
//!
//! ```
//! use netflow_v9_decoder::decode;
//!
//! let bytes = [
//!     0x00, 0x09, 0x00, 0x02, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00,
//!     0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x08, 0x00, // header
//!     0x00, 0x00, 0x00, 0x0C, 0x01, 0x00, 0x00, 0x01, 0x00, 0x08, 0x00, 0x04, // template 256
//!     0x01, 0x00, 0x00, 0x08, 0x0A, 0x00, 0x00, 0x01, // data for template 256
//! ];
//!
//! let packet = decode(&bytes)?;
//! let template = packet.template_records().next().unwrap();
//! for set in packet.data_flow_sets() {
//!     for record in template.project(set) {
//!         let field = &template.fields[0];
//!         assert_eq!(field.name(), "IPV4_SRC_ADDR");
//!         assert_eq!(field.render(&record.values[0]), "10.0.0.1");
//!     }
//! }
//! # Ok::<(), netflow_v9_decoder::DecodeError>(())
//! ```

mod cursor;
pub mod error;
pub mod field;
pub mod flowset;
pub mod options;
pub mod packet;
pub mod template;

#[cfg(test)]
mod testutil;

pub use error::{DecodeError, Result};
pub use field::{Field, FieldLength};
pub use flowset::{DataFlowSet, FlowSet, FlowSetHeader, OptionsTemplateFlowSet, TemplateFlowSet};
pub use options::{DecodeOptions, FieldAlignment};
pub use packet::{Packet, decode, decode_with};
pub use template::{FlowDataRecord, OptionsDataRecord, OptionsTemplateRecord, TemplateRecord};
