//! Validation of the ELF32 file header.

use std::io::{Read, Seek, SeekFrom};

use dataview::PodMethods as _;
use elf32_types::{
    ByteOrder, ELFCLASS32, Elf32FileHeader, Elf32SectionHeader, FileType, Machine,
};
use elfscan_params::{BIG_ENDIAN_IMAGE_BASE, LITTLE_ENDIAN_IMAGE_BASE, MAX_SECTIONS};

use crate::{
    DiagnosticSink,
    error::{Anomaly, NotElfReason, ScanError},
};

/// File header fields of a 32-bit ELF file, in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeaderInfo {
    pub byte_order: ByteOrder,
    pub file_type: FileType,
    pub machine: Machine,
    pub entry: u32,
    pub shoff: u32,
    pub shentsize: u16,
    pub shnum: u16,
}

impl FileHeaderInfo {
    #[must_use]
    pub fn decode(hdr: &Elf32FileHeader, order: ByteOrder) -> Self {
        Self {
            byte_order: order,
            file_type: hdr.file_type(order),
            machine: hdr.machine(order),
            entry: hdr.entry(order),
            shoff: hdr.shoff(order),
            shentsize: hdr.shentsize(order),
            shnum: hdr.shnum(order),
        }
    }

    /// Returns the conventional image base for the byte order of the file.
    #[must_use]
    pub fn image_base(&self) -> u32 {
        match self.byte_order {
            ByteOrder::Little => LITTLE_ENDIAN_IMAGE_BASE,
            ByteOrder::Big => BIG_ENDIAN_IMAGE_BASE,
        }
    }

    /// Returns the offset of the entry point from the image base.
    #[must_use]
    pub fn entry_offset(&self) -> u32 {
        self.entry.wrapping_sub(self.image_base())
    }
}

/// Reads and validates the file header, leaving `reader` positioned at the
/// section header table.
pub(crate) fn read_file_header<R, S>(reader: &mut R, sink: &mut S) -> Result<FileHeaderInfo, ScanError>
where
    R: Read + Seek + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let mut hdr = Elf32FileHeader::zeroed();
    reader
        .read_exact(hdr.as_bytes_mut())
        .map_err(|e| NotElfReason::ShortHeader(e.kind()))?;

    if !hdr.has_magic() {
        return Err(NotElfReason::BadMagic.into());
    }
    if hdr.class() != ELFCLASS32 {
        return Err(NotElfReason::UnsupportedClass(hdr.class()).into());
    }

    let order = hdr.byte_order();
    sink.byte_order(order);

    let info = FileHeaderInfo::decode(&hdr, order);
    sink.file_header(&info);

    if usize::from(info.shnum) > MAX_SECTIONS {
        return Err(Anomaly::ExcessiveSectionCount { count: info.shnum }.into());
    }
    if usize::from(info.shentsize) != Elf32SectionHeader::SIZE {
        return Err(Anomaly::MalformedSectionHeaderSize {
            size: info.shentsize,
        }
        .into());
    }

    seek_section_table(reader, info.shoff)?;
    Ok(info)
}

fn seek_section_table<R>(reader: &mut R, shoff: u32) -> Result<(), Anomaly>
where
    R: Seek + ?Sized,
{
    let offset = u64::from(shoff);
    let end = reader.seek(SeekFrom::End(0)).ok();
    let pos = reader.seek(SeekFrom::Start(offset)).ok();
    match (end, pos) {
        (Some(end), Some(pos)) if offset <= end && pos == offset => Ok(()),
        _ => Err(Anomaly::TruncatedSectionTable { offset: shoff }),
    }
}
