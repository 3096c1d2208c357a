use std::io::{self, BufReader, BufWriter};
use std::process;

use bitmaprle::{compress, expand, BitReader, BitWriter};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bitmaprle", about = "Compress or expand a binary bitmap stream")]
struct Cli {
    /// "-" compresses standard input, "+" expands it
    #[arg(allow_hyphen_values = true, value_parser = parse_mode)]
    mode: Mode,
}

#[derive(Clone, Copy)]
enum Mode {
    Compress,
    Expand,
}

fn parse_mode(arg: &str) -> Result<Mode, String> {
    match arg {
        "-" => Ok(Mode::Compress),
        "+" => Ok(Mode::Expand),
        other => Err(format!("illegal mode {other:?}, expected \"-\" or \"+\"")),
    }
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = BitReader::new(BufReader::new(stdin.lock()));
    let mut output = BitWriter::new(BufWriter::new(stdout.lock()));

    let result = match cli.mode {
        Mode::Compress => compress(&mut input, &mut output),
        Mode::Expand => expand(&mut input, &mut output),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_mode, Mode};

    #[test]
    fn mode_selectors() {
        assert!(matches!(parse_mode("-"), Ok(Mode::Compress)));
        assert!(matches!(parse_mode("+"), Ok(Mode::Expand)));
        assert!(parse_mode("x").is_err());
        assert!(parse_mode("-x").is_err());
        assert!(parse_mode("").is_err());
    }
}
