use std::fs;
use std::path::Path;

use bytes::Bytes;
use serde::Deserialize;
use syncframe_deframe::{AccessCode, ExtractorConfig, FrameExtractor, MarkerKind, SyncMarker};

use crate::cmd::ExtractArgs;
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_pdu, OutputFormat};

#[derive(Deserialize, Debug)]
struct MarkerRecord {
    offset: u64,
    kind: String,
}

pub fn run(args: ExtractArgs, format: OutputFormat) -> CliResult<i32> {
    if args.chunk_size == 0 {
        return Err(CliError::new(USAGE, "chunk size must be at least 1 bit"));
    }

    let bits = fs::read(&args.path).map_err(|err| io_error("reading bit capture failed", err))?;
    let markers = load_markers(&args.markers)?;
    let config = build_config(&args)?;

    let mut extractor = FrameExtractor::with_config(config);
    let mut pdus: Vec<Bytes> = Vec::new();

    for chunk in bits.chunks(args.chunk_size) {
        extractor.process(chunk, &markers, &mut pdus);
    }
    tracing::info!(bits = bits.len(), pdus = pdus.len(), "capture processed");

    for (index, pdu) in pdus.iter().enumerate() {
        print_pdu(index, pdu, format);
    }

    Ok(SUCCESS)
}

fn load_markers(path: &Path) -> CliResult<Vec<SyncMarker>> {
    let raw =
        fs::read_to_string(path).map_err(|err| io_error("reading marker file failed", err))?;
    let records: Vec<MarkerRecord> = serde_json::from_str(&raw).map_err(|err| {
        CliError::new(DATA_INVALID, format!("marker file is not valid JSON: {err}"))
    })?;
    Ok(records
        .into_iter()
        .map(|record| SyncMarker {
            offset: record.offset,
            kind: match record.kind.as_str() {
                "frame-start" => MarkerKind::FrameStart,
                _ => MarkerKind::Other,
            },
        })
        .collect())
}

fn build_config(args: &ExtractArgs) -> CliResult<ExtractorConfig> {
    let mut config = ExtractorConfig::default();
    if let Some(code) = &args.access_code {
        let bytes = hex::decode(code)
            .map_err(|err| CliError::new(USAGE, format!("access code is not valid hex: {err}")))?;
        config.access_code = AccessCode::try_from(bytes.as_slice())
            .map_err(|err| CliError::new(USAGE, err.to_string()))?;
    }
    if let Some(max) = args.max_frame_bytes {
        config.max_frame_bytes = max;
    }
    Ok(config)
}
