// src/bin/cli.rs
use color_eyre::eyre::Result;
use rfc_digest::cli::{self, Parsed};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Parsed::Help => eprintln!("{}", cli::HELP),
        Parsed::Run(opts) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = cli::run(&opts, &mut out) {
                rfc_digest::loge!("{e}");
                return Err(e.into());
            }
        }
    }
    Ok(())
}
