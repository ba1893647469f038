use std::io::{IsTerminal, Write};

use bytes::Bytes;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct PduOutput<'a> {
    index: usize,
    size: usize,
    payload_hex: &'a str,
}

pub fn print_pdu(index: usize, payload: &Bytes, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let encoded = hex::encode(payload);
            let out = PduOutput {
                index,
                size: payload.len(),
                payload_hex: &encoded,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PDU", "SIZE", "PAYLOAD"])
                .add_row(vec![
                    index.to_string(),
                    payload.len().to_string(),
                    hex::encode(payload),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "pdu={} size={} payload={}",
                index,
                payload.len(),
                hex::encode(payload)
            );
        }
        OutputFormat::Raw => {
            print_raw(payload.as_ref());
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
