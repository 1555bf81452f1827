use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use elf_scan::{DetectBroken, ScanOptions, Verdict};

mod logger;

/// Scans files for structurally broken 32-bit ELF binaries.
#[derive(Parser, Debug)]
#[command(name = "elfscan", version, about)]
struct Cli {
    /// Report broken executables as detections (`enabled` or `disabled`).
    #[arg(long, default_value_t = DetectBroken::Disabled)]
    detect_broken: DetectBroken,

    /// Increase log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Files to scan.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Overall result of a run, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Status {
    Clean,
    Found,
    Error,
}

impl From<Verdict> for Status {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Clean => Self::Clean,
            Verdict::Suspicious { .. } => Self::Found,
            Verdict::FormatError | Verdict::ResourceError => Self::Error,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Clean => Self::SUCCESS,
            Status::Found => Self::from(1_u8),
            Status::Error => Self::from(2_u8),
        }
    }
}

fn scan_path(path: &Path, options: ScanOptions) -> Status {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("{}: {e} ERROR", path.display());
            return Status::Error;
        }
    };

    log::info!("scanning {}", path.display());
    let verdict = elf_scan::scan_elf_logged(&mut BufReader::new(file), options);
    println!("{}: {verdict}", path.display());
    verdict.into()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("failed to initialize logger: {e}");
    }

    let options = ScanOptions::default().with_detect_broken(cli.detect_broken);
    cli.files
        .iter()
        .map(|path| scan_path(path, options))
        .fold(Status::Clean, Status::max)
        .into()
}
