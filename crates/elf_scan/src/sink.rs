//! Diagnostic output of the scanner.
//!
//! Diagnostics are advisory: they never change the verdict of a scan.

use elf32_types::ByteOrder;

use crate::{
    error::{NotElfReason, ScanError},
    header::FileHeaderInfo,
    sections::SectionInfo,
};

/// Receiver of the structural information found while scanning.
pub trait DiagnosticSink {
    /// Called once the byte order of the file is known.
    fn byte_order(&mut self, _order: ByteOrder) {}

    /// Called once the file header has been decoded, before it is validated.
    fn file_header(&mut self, _header: &FileHeaderInfo) {}

    /// Called for each section header read.
    fn section(&mut self, _section: &SectionInfo) {}

    /// Called when the scan stops early.
    fn rejected(&mut self, _error: &ScanError) {}
}

impl DiagnosticSink for () {}

impl<S> DiagnosticSink for &mut S
where
    S: DiagnosticSink + ?Sized,
{
    fn byte_order(&mut self, order: ByteOrder) {
        (**self).byte_order(order);
    }

    fn file_header(&mut self, header: &FileHeaderInfo) {
        (**self).file_header(header);
    }

    fn section(&mut self, section: &SectionInfo) {
        (**self).section(section);
    }

    fn rejected(&mut self, error: &ScanError) {
        (**self).rejected(error);
    }
}

/// [`DiagnosticSink`] writing to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn byte_order(&mut self, order: ByteOrder) {
        if order.needs_swap() {
            log::debug!("ELF: File is {order} - data conversion enabled");
        } else {
            log::debug!("ELF: File is {order} - conversion not required");
        }
    }

    fn file_header(&mut self, header: &FileHeaderInfo) {
        log::debug!("ELF: File type: {}", header.file_type);
        log::debug!("ELF: Machine type: {}", header.machine);
        log::debug!("ELF: Entry point address: {:#010x}", header.entry);
        let offset = header.entry_offset();
        let signed = offset as i32;
        log::debug!("ELF: Entry point offset: {offset:#010x} ({signed})");
        log::debug!("ELF: Number of sections: {}", header.shnum);
        log::debug!("ELF: Section header table offset: {}", header.shoff);
    }

    fn section(&mut self, section: &SectionInfo) {
        log::debug!("ELF: Section {}", section.index);
        log::debug!("ELF: Section offset: {}", section.offset);
        log::debug!("ELF: Section type: {}", section.ty);
        for desc in section.flags.descriptions() {
            log::debug!("ELF: {desc}");
        }
    }

    fn rejected(&mut self, error: &ScanError) {
        match error {
            ScanError::NotElf(NotElfReason::UnsupportedClass(_)) => {
                log::debug!("ELF: {error}, only 32-bit binaries are supported");
            }
            ScanError::NotElf(_) => log::debug!("ELF: {error}"),
            ScanError::Anomaly(anomaly) if anomaly.is_format_error() => {
                log::error!("ELF: {error}");
            }
            ScanError::Anomaly(_) => {
                log::debug!("ELF: {error}");
                log::debug!("ELF: Possibly broken ELF file");
            }
            ScanError::OutOfMemory(_) => log::error!("ELF: {error}"),
        }
    }
}
