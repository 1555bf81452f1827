//! Walking of the ELF32 section header table.

use std::{io::Read, iter, slice};

use dataview::PodMethods as _;
use elf32_types::{ByteOrder, Elf32SectionHeader, SectionFlags, SectionType};

use crate::{
    DiagnosticSink,
    error::{Anomaly, ScanError},
    header::FileHeaderInfo,
};

/// Section header fields, in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub index: usize,
    pub offset: u32,
    pub ty: SectionType,
    pub flags: SectionFlags,
    pub addr: u32,
    pub size: u32,
}

impl SectionInfo {
    #[must_use]
    pub fn decode(index: usize, sh: &Elf32SectionHeader, order: ByteOrder) -> Self {
        Self {
            index,
            offset: sh.offset(order),
            ty: sh.section_type(order),
            flags: sh.section_flags(order),
            addr: sh.addr(order),
            size: sh.size(order),
        }
    }
}

/// Section header table read from a file.
///
/// The entries are kept in file byte order.
#[derive(Debug, Clone)]
pub struct SectionTable {
    order: ByteOrder,
    entries: Vec<Elf32SectionHeader>,
}

impl SectionTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<SectionInfo> {
        self.entries
            .get(index)
            .map(|sh| SectionInfo::decode(index, sh, self.order))
    }

    pub fn iter(&self) -> SectionIter<'_> {
        SectionIter {
            order: self.order,
            entries: self.entries.iter().enumerate(),
        }
    }
}

impl<'a> IntoIterator for &'a SectionTable {
    type Item = SectionInfo;
    type IntoIter = SectionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct SectionIter<'a> {
    order: ByteOrder,
    entries: iter::Enumerate<slice::Iter<'a, Elf32SectionHeader>>,
}

impl Iterator for SectionIter<'_> {
    type Item = SectionInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, sh) = self.entries.next()?;
        Some(SectionInfo::decode(index, sh, self.order))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for SectionIter<'_> {}

/// Reads `header.shnum` section headers from the current position of
/// `reader`.
///
/// The entry size must already have been checked against
/// [`Elf32SectionHeader::SIZE`].
pub(crate) fn read_section_table<R, S>(
    reader: &mut R,
    header: &FileHeaderInfo,
    sink: &mut S,
) -> Result<SectionTable, ScanError>
where
    R: Read + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let order = header.byte_order;
    let count = usize::from(header.shnum);

    // `shnum * shentsize` bytes
    let mut entries = Vec::new();
    entries.try_reserve_exact(count)?;

    for index in 0..count {
        let mut sh = Elf32SectionHeader::zeroed();
        reader
            .read_exact(sh.as_bytes_mut())
            .map_err(|e| Anomaly::TruncatedSectionHeader {
                index,
                kind: e.kind(),
            })?;
        sink.section(&SectionInfo::decode(index, &sh, order));
        entries.push(sh);
    }

    Ok(SectionTable { order, entries })
}
