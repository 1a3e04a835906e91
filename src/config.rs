use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(name = "status-bits", about = "Encode and inspect bit-flag status codes")]
pub struct Config {
    /// Comma separated flag names, first name at bit 0.
    #[clap(long, env = "STATUS_FLAGS", value_delimiter = ',', required = true)]
    pub flags: Vec<String>,

    /// Number of binary digits to print.
    #[clap(long, env = "STATUS_WIDTH", default_value_t = 32)]
    pub width: u32,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Pack flag names into a status code
    Encode { names: Vec<String> },
    /// List the flags set in a status code
    Decode {
        #[clap(value_parser = parse_code)]
        code: u32,
    },
    /// Test a single flag
    Check {
        #[clap(value_parser = parse_code)]
        code: u32,
        name: String,
    },
    /// OR several status codes together
    Combine {
        #[clap(value_parser = parse_code, required = true)]
        codes: Vec<u32>,
    },
    /// Decode every code in a raw 4-byte-per-code dump
    Dump {
        path: PathBuf,
        #[clap(long)]
        little_endian: bool,
    },
}

/// Accepts decimal, `0x` hex and `0b` binary.
pub fn parse_code(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = raw.strip_prefix("0b").or_else(|| raw.strip_prefix("0B")) {
        u32::from_str_radix(bin, 2)
    } else {
        raw.parse::<u32>()
    };
    parsed.map_err(|err| format!("invalid status code '{}': {}", raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_code_radixes() {
        assert_eq!(parse_code("10"), Ok(10));
        assert_eq!(parse_code("0xA"), Ok(10));
        assert_eq!(parse_code("0b1010"), Ok(10));
        assert!(parse_code("ten").is_err());
        assert!(parse_code("0x1_0000_0000").is_err());
    }

    #[test]
    fn test_parse_encode_command() {
        let config = Config::try_parse_from([
            "status-bits",
            "--flags",
            "a,b,c,d",
            "--width",
            "8",
            "encode",
            "b",
            "d",
        ])
        .unwrap();
        assert_eq!(config.flags, vec!["a", "b", "c", "d"]);
        assert_eq!(config.width, 8);
        match config.command {
            Command::Encode { names } => assert_eq!(names, vec!["b", "d"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_decode_hex() {
        let config =
            Config::try_parse_from(["status-bits", "--flags", "a,b", "decode", "0x3"]).unwrap();
        assert!(matches!(config.command, Command::Decode { code: 3 }));
    }
}
