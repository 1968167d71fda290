//! Plain-text rendering of templates and decoded data records.

use crate::template_cache::{CachedTemplate, TemplateCache, TemplateKey};
use netflow_v9_decoder::{DataFlowSet, Field, Packet};
use std::io::{self, Write};
use std::net::SocketAddr;
use tracing::debug;

/// Print the field layout of every template in a packet
pub fn write_templates<W: Write>(
    out: &mut W,
    exporter: SocketAddr,
    packet: &Packet,
) -> io::Result<()> {
    for template in packet.template_records() {
        writeln!(
            out,
            "==== {}, SourceId: {}, TemplateId: {} ====",
            exporter, packet.source_id, template.template_id
        )?;
        writeln!(out, "--- Field name (actual length / default length) description ---")?;
        for field in &template.fields {
            write_field_line(
                out,
                field.name(),
                field.length,
                &field.default_length().to_string(),
                field.description(),
            )?;
        }
        writeln!(out)?;
    }

    for template in packet.options_template_records() {
        writeln!(
            out,
            "==== {}, SourceId: {}, OptionsTemplateId: {} ====",
            exporter, packet.source_id, template.template_id
        )?;
        writeln!(out, "--- Scopes ---")?;
        for field in &template.scopes {
            write_field_line(
                out,
                field.scope_name(),
                field.length,
                &field.scope_default_length().to_string(),
                field.scope_description(),
            )?;
        }
        writeln!(out, "--- Options ---")?;
        for field in &template.options {
            write_field_line(
                out,
                field.name(),
                field.length,
                &field.default_length().to_string(),
                field.description(),
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn write_field_line<W: Write>(
    out: &mut W,
    name: &str,
    length: u16,
    default_length: &str,
    description: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} ({:>3} / {:>3}) {}",
        name, length, default_length, description
    )
}

/// Print the data records of a packet decodable with cached templates.
///
/// Data flowsets without a cached template are skipped: their template
/// may simply not have been exported yet.
pub fn write_data<W: Write>(
    out: &mut W,
    exporter: SocketAddr,
    packet: &Packet,
    cache: &TemplateCache,
) -> io::Result<()> {
    for set in packet.data_flow_sets() {
        let key = TemplateKey {
            exporter,
            source_id: packet.source_id,
            template_id: set.header.id,
        };
        match cache.get(&key) {
            Some(CachedTemplate::Template(template)) => {
                let rows = template
                    .project(set)
                    .into_iter()
                    .map(|record| render_values(&template.fields, &record.values, Field::render))
                    .collect::<Vec<_>>();
                let header = template.fields.iter().map(Field::name).collect::<Vec<_>>();
                write_table(out, &header, &rows)?;
            }
            Some(CachedTemplate::OptionsTemplate(template)) => {
                let rows = template
                    .project(set)
                    .into_iter()
                    .map(|record| {
                        let mut row = render_values(
                            &template.scopes,
                            &record.scope_values,
                            Field::render_scope,
                        );
                        row.extend(render_values(
                            &template.options,
                            &record.option_values,
                            Field::render,
                        ));
                        row
                    })
                    .collect::<Vec<_>>();
                let header = template
                    .scopes
                    .iter()
                    .map(Field::scope_name)
                    .chain(template.options.iter().map(Field::name))
                    .collect::<Vec<_>>();
                write_table(out, &header, &rows)?;
            }
            None => log_unknown_template(set),
        }
    }
    Ok(())
}

fn log_unknown_template(set: &DataFlowSet) {
    debug!(
        template_id = set.header.id,
        len = set.data.len(),
        "no template for data flowset yet"
    );
}

fn render_values(
    fields: &[Field],
    values: &[Vec<u8>],
    render: fn(&Field, &[u8]) -> String,
) -> Vec<String> {
    fields
        .iter()
        .zip(values)
        .map(|(field, value)| render(field, value))
        .collect()
}

/// Print rows as a table with one column per field, each column as wide as
/// the field name
fn write_table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    write!(out, "|")?;
    for name in header {
        write!(out, " {} |", name)?;
    }
    writeln!(out)?;

    for row in rows {
        write!(out, "|")?;
        for (value, name) in row.iter().zip(header) {
            write!(out, " {:>width$} |", value, width = name.len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}
