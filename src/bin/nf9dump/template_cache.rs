use netflow_v9_decoder::{OptionsTemplateRecord, Packet, TemplateRecord};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Template ids are only unique per exporter address and observation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub exporter: SocketAddr,
    pub source_id: u32,
    pub template_id: u16,
}

/// Template seen for a key, whichever kind was sent last
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedTemplate {
    Template(TemplateRecord),
    OptionsTemplate(OptionsTemplateRecord),
}

/// Cache of templates seen in earlier packets.
///
/// A redefinition replaces the previous template for the same key.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: HashMap<TemplateKey, CachedTemplate>,
}

impl TemplateCache {
    /// Create a new empty template cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store every template and options template carried by a packet
    pub fn update(&mut self, exporter: SocketAddr, packet: &Packet) {
        for template in packet.template_records() {
            let key = TemplateKey {
                exporter,
                source_id: packet.source_id,
                template_id: template.template_id,
            };
            self.templates
                .insert(key, CachedTemplate::Template(template.clone()));
        }

        for template in packet.options_template_records() {
            let key = TemplateKey {
                exporter,
                source_id: packet.source_id,
                template_id: template.template_id,
            };
            self.templates
                .insert(key, CachedTemplate::OptionsTemplate(template.clone()));
        }
    }

    pub fn get(&self, key: &TemplateKey) -> Option<&CachedTemplate> {
        self.templates.get(key)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}
