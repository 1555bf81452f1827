//! Synthetic ELF32 images and a recording diagnostic sink.

#![allow(dead_code)]

use dataview::PodMethods as _;
use elf_scan::{DiagnosticSink, FileHeaderInfo, ScanError, SectionInfo};
use elf32_types::{
    ByteOrder, EI_CLASS, EI_DATA, EI_VERSION, ELF_MAGIC, ELFCLASS32, ELFDATA2LSB, ELFDATA2MSB,
    EV_CURRENT, Elf32FileHeader, Elf32SectionHeader,
};

pub const HEADER_SIZE: usize = size_of::<Elf32FileHeader>();
pub const SECTION_SIZE: usize = Elf32SectionHeader::SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub ty: u32,
    pub flags: u32,
    pub offset: u32,
}

impl Section {
    pub const fn new(ty: u32, flags: u32, offset: u32) -> Self {
        Self { ty, flags, offset }
    }
}

/// Builder of an ELF32 file consisting of a file header immediately followed
/// by the section header table.
#[derive(Debug, Clone)]
pub struct ElfImage {
    pub order: ByteOrder,
    pub class: u8,
    pub file_type: u16,
    pub machine: u16,
    pub entry: u32,
    pub shentsize: u16,
    /// Declared section count. Defaults to `sections.len()`.
    pub shnum: Option<u16>,
    /// Declared section table offset. Defaults to right after the header.
    pub shoff: Option<u32>,
    pub sections: Vec<Section>,
}

impl ElfImage {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            class: ELFCLASS32,
            file_type: 2,
            machine: 3,
            entry: 0x0804_8080,
            shentsize: 40,
            shnum: None,
            shoff: None,
            sections: vec![
                Section::new(0, 0, 0),
                Section::new(1, 0x6, 0x80),
                Section::new(1, 0x3, 0x100),
                Section::new(8, 0x3, 0x180),
                Section::new(3, 0, 0x180),
            ],
        }
    }

    pub fn header(&self) -> Elf32FileHeader {
        let order = self.order;
        let mut hdr = Elf32FileHeader::zeroed();
        hdr.ident[..4].copy_from_slice(&ELF_MAGIC);
        hdr.ident[EI_CLASS] = self.class;
        hdr.ident[EI_DATA] = match order {
            ByteOrder::Little => ELFDATA2LSB,
            ByteOrder::Big => ELFDATA2MSB,
        };
        hdr.ident[EI_VERSION] = EV_CURRENT;
        hdr.ty = order.raw_u16(self.file_type);
        hdr.machine = order.raw_u16(self.machine);
        hdr.version = order.raw_u32(EV_CURRENT.into());
        hdr.entry = order.raw_u32(self.entry);
        hdr.shoff = order.raw_u32(self.shoff.unwrap_or(52));
        hdr.ehsize = order.raw_u16(52);
        hdr.shentsize = order.raw_u16(self.shentsize);
        let shnum = self
            .shnum
            .unwrap_or_else(|| u16::try_from(self.sections.len()).unwrap());
        hdr.shnum = order.raw_u16(shnum);
        hdr
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let order = self.order;
        let mut bytes = self.header().as_bytes().to_vec();
        for section in &self.sections {
            let mut sh = Elf32SectionHeader::zeroed();
            sh.ty = order.raw_u32(section.ty);
            sh.flags = order.raw_u32(section.flags);
            sh.offset = order.raw_u32(section.offset);
            sh.size = order.raw_u32(0x80);
            bytes.extend_from_slice(sh.as_bytes());
        }
        bytes
    }
}

/// Records everything reported by a scan.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub byte_order: Option<ByteOrder>,
    pub header: Option<FileHeaderInfo>,
    pub sections: Vec<SectionInfo>,
    pub rejected: Option<String>,
}

impl RecordingSink {
    /// Returns the classification labels reported, independent of byte order.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = vec![];
        if let Some(header) = &self.header {
            labels.push(format!("type: {}", header.file_type));
            labels.push(format!("machine: {}", header.machine));
            labels.push(format!("entry: {:#x}", header.entry));
        }
        for section in &self.sections {
            labels.push(format!(
                "section {}: {} {} {:?}",
                section.index,
                section.ty.name(),
                section.offset,
                section.flags
            ));
        }
        labels
    }
}

impl DiagnosticSink for RecordingSink {
    fn byte_order(&mut self, order: ByteOrder) {
        self.byte_order = Some(order);
    }

    fn file_header(&mut self, header: &FileHeaderInfo) {
        self.header = Some(*header);
    }

    fn section(&mut self, section: &SectionInfo) {
        self.sections.push(*section);
    }

    fn rejected(&mut self, error: &ScanError) {
        self.rejected = Some(error.to_string());
    }
}
