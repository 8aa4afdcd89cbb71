use std::fs;

use ledpipe::frame::FrameWriter;

use crate::cmd::SendArgs;
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: SendArgs) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let mut writer =
        FrameWriter::connect(&args.path).map_err(|err| frame_error("connect failed", err))?;
    writer
        .send(args.command, &payload)
        .map_err(|err| frame_error("send failed", err))?;
    writer
        .flush()
        .map_err(|err| frame_error("flush failed", err))?;

    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Ok(Vec::new())
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            "--hex needs an even number of hex digits",
        ));
    }

    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .map_err(|_| CliError::new(USAGE, format!("--hex is not valid hex: {input}")))
        })
        .collect()
}
