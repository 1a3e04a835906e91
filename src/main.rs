mod config;

use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::Context;
use byteorder::{BigEndian, LittleEndian};
use clap::Parser;
use log::{info, warn};
use status_bits::{code_dump, codec, log_codec_error, CodecError, FlagSpec, StatusCode};

use crate::config::{Command, Config};

fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let spec = FlagSpec::new(config.flags.iter().map(|name| name.trim()))
        .map_err(|err| report(err, "flag table"))
        .context("invalid flag table")?;
    info!("loaded {} flags", spec.len());

    match config.command {
        Command::Encode { names } => {
            let code = codec::encode(&spec, &names).map_err(|err| report(err, "encode"))?;
            println!("{}", describe(&spec, code, config.width)?);
        }
        Command::Decode { code } => {
            let code = StatusCode::from_bits(code);
            println!("{}", describe(&spec, code, config.width)?);
        }
        Command::Check { code, name } => {
            let set = codec::is_set(&spec, StatusCode::from_bits(code), &name)
                .map_err(|err| report(err, "check"))?;
            println!("{set}");
        }
        Command::Combine { codes } => {
            let code = codec::combine(codes.into_iter().map(StatusCode::from_bits));
            println!("{}", describe(&spec, code, config.width)?);
        }
        Command::Dump {
            path,
            little_endian,
        } => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let lines = describe_dump(&spec, BufReader::new(file), little_endian, config.width)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!("read {} codes from {}", lines.len(), path.display());
            for line in lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn report(err: CodecError, context: &str) -> CodecError {
    log_codec_error(&err, context);
    err
}

/// Code, its declared bits and the flags set. Reserved bits are logged, not rendered.
fn describe(spec: &FlagSpec, code: StatusCode, width: u32) -> Result<String, CodecError> {
    let digits = spec
        .render(code, width)
        .map_err(|err| report(err, "render"))?;
    let names = codec::decode_ordered(spec, code);
    let flags = if names.is_empty() {
        "success".to_string()
    } else {
        names.join(" | ")
    };
    let extra = codec::unknown_bits(spec, code);
    if extra != 0 {
        warn!("status code {} has reserved bits set: {:#b}", code, extra);
    }
    Ok(format!("{:>10} {}\n  {}", code.bits(), digits, flags))
}

fn describe_dump<R: Read>(
    spec: &FlagSpec,
    reader: R,
    little_endian: bool,
    width: u32,
) -> Result<Vec<String>, anyhow::Error> {
    let codes = if little_endian {
        code_dump::read_codes::<LittleEndian, _>(reader)?
    } else {
        code_dump::read_codes::<BigEndian, _>(reader)?
    };
    let lines = codes
        .into_iter()
        .map(|code| describe(spec, code, width))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
