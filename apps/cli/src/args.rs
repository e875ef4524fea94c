use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub help: bool,
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data-dir".to_string())?;
                parsed.data_dir = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                parsed.help = true;
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Cost Manager\n\n\
Usage:\n  cost-manager [--port <port>] [--data-dir <path>]\n\n\
Options:\n  --port <port>      Override the configured port for this run only\n  --data-dir <path>  Keep the cost store in <path> instead of the default data dir\n  -h, --help         Show this help message\n\n\
Logging is controlled with RUST_LOG (default: info).\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn parses_port_and_data_dir() {
        let parsed = parse(&["--port", "4000", "--data-dir", "/tmp/costs"]).expect("args");
        assert_eq!(parsed.port, Some(4000));
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/costs")));
        assert!(!parsed.help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--port"]).is_err());
        assert!(parse(&["--port", "seventy"]).is_err());
        assert!(parse(&["--data-dir"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn help_flag() {
        assert!(parse(&["-h"]).expect("args").help);
        assert_eq!(parse(&[]).expect("args"), CliArgs::default());
    }
}
