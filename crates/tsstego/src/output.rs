use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tsstego::codec::Mode;
use tsstego::{CapacityReport, DecodeReport, EncodeReport};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
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
struct EncodeOutput<'a> {
    kind: &'a str,
    payload_size: usize,
    capacity: usize,
    channels_used: usize,
    width: u32,
    height: u32,
    mode: &'a str,
    encrypted: bool,
}

#[derive(Serialize)]
struct DecodeOutput<'a> {
    kind: &'a str,
    payload_size: usize,
    mode: &'a str,
    encrypted: bool,
}

#[derive(Serialize)]
struct CapacityOutput<'a> {
    kind: &'a str,
    width: u32,
    height: u32,
    pixels: usize,
    max_payload: usize,
}

pub fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Overwrite => "overwrite",
        Mode::Xor => "xor",
    }
}

pub fn print_encode(report: &EncodeReport, format: OutputFormat) {
    let out = EncodeOutput {
        kind: "encode",
        payload_size: report.payload_len,
        capacity: report.capacity,
        channels_used: report.channels_used,
        width: report.width,
        height: report.height,
        mode: mode_name(report.mode),
        encrypted: report.encrypted,
    };
    let rows = vec![
        ("payload", out.payload_size.to_string()),
        ("capacity", out.capacity.to_string()),
        ("channels", out.channels_used.to_string()),
        ("image", format!("{}x{}", out.width, out.height)),
        ("mode", out.mode.to_string()),
        ("encrypted", out.encrypted.to_string()),
    ];
    emit(&out, &rows, format);
}

pub fn print_decode(report: &DecodeReport, format: OutputFormat) {
    let out = DecodeOutput {
        kind: "decode",
        payload_size: report.payload_len,
        mode: if report.xor { "xor" } else { "overwrite" },
        encrypted: report.encrypted,
    };
    let rows = vec![
        ("payload", out.payload_size.to_string()),
        ("mode", out.mode.to_string()),
        ("encrypted", out.encrypted.to_string()),
    ];
    emit(&out, &rows, format);
}

pub fn print_capacity(report: &CapacityReport, format: OutputFormat) {
    let out = CapacityOutput {
        kind: "capacity",
        width: report.width,
        height: report.height,
        pixels: report.pixels,
        max_payload: report.max_payload,
    };
    let rows = vec![
        ("image", format!("{}x{}", out.width, out.height)),
        ("pixels", out.pixels.to_string()),
        ("max payload", out.max_payload.to_string()),
    ];
    emit(&out, &rows, format);
}

fn emit<T: Serialize>(out: &T, rows: &[(&str, String)], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in rows {
                table.add_row(vec![field.to_string(), value.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let line: Vec<String> = rows
                .iter()
                .map(|(field, value)| format!("{}={value}", field.replace(' ', "_")))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}
