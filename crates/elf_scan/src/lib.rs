//! Structural scanner for 32-bit ELF files.
//!
//! A scan reads the file header, checks that it describes a 32-bit ELF file
//! with a sane section header table, and then reads every section header.
//! Nothing but the headers is interpreted.
//!
//! Each scan ends in a [`Verdict`]:
//!
//! | condition                                         | broken detection disabled | enabled          |
//! |---------------------------------------------------|---------------------------|------------------|
//! | not a 32-bit ELF file                             | `Clean`                   | `Clean`          |
//! | too many sections, wrong section header size      | `FormatError`             | `Suspicious`     |
//! | section header table missing or truncated         | `Clean`                   | `Suspicious`     |
//! | section header table can't be allocated           | `ResourceError`           | `ResourceError`  |
//! | all section headers read                          | `Clean`                   | `Clean`          |
//!
//! The byte order of a file is determined per scan and passed explicitly to
//! every field access, so concurrent scans of files with different byte
//! orders don't interfere.

use std::io::{Read, Seek};

pub use self::{
    error::{Anomaly, NotElfReason, ScanError},
    header::FileHeaderInfo,
    options::{DetectBroken, ScanOptions},
    sections::{SectionInfo, SectionIter, SectionTable},
    sink::{DiagnosticSink, LogSink},
    verdict::Verdict,
};

mod error;
mod header;
mod options;
mod sections;
mod sink;
mod verdict;

/// Structural metadata of a 32-bit ELF file.
#[derive(Debug, Clone)]
pub struct ElfReport {
    pub header: FileHeaderInfo,
    pub sections: SectionTable,
}

/// Reads the file header and the section header table of `reader`.
///
/// `reader` must be positioned at the start of the file.
pub fn inspect<R, S>(reader: &mut R, sink: &mut S) -> Result<ElfReport, ScanError>
where
    R: Read + Seek + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let result = read_headers(reader, sink);
    if let Err(err) = &result {
        sink.rejected(err);
    }
    result
}

fn read_headers<R, S>(reader: &mut R, sink: &mut S) -> Result<ElfReport, ScanError>
where
    R: Read + Seek + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let header = header::read_file_header(reader, sink)?;
    let sections = sections::read_section_table(reader, &header, sink)?;
    Ok(ElfReport { header, sections })
}

/// Scans `reader`, reporting diagnostics to `sink`.
pub fn scan_elf<R, S>(reader: &mut R, options: ScanOptions, sink: &mut S) -> Verdict
where
    R: Read + Seek + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    match inspect(reader, sink) {
        Ok(_) => Verdict::Clean,
        Err(err) => err.verdict(options),
    }
}

/// Scans `reader`, reporting diagnostics to the [`log`] facade.
pub fn scan_elf_logged<R>(reader: &mut R, options: ScanOptions) -> Verdict
where
    R: Read + Seek + ?Sized,
{
    log::debug!("in scan_elf");
    scan_elf(reader, options, &mut LogSink)
}
