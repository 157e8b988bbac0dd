use std::fmt;

/// The fixed 10 byte header in front of every ID3v2 tag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub revision: u8,

    pub is_unsynchronized: bool,
    pub has_extended_header: bool,
    pub is_experimental: bool,
    pub has_footer: bool,

    // in bytes, excluding the header itself; goes up to 256 mb
    pub size: u32,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID3v2.{}.{}, {} bytes",
            self.version, self.revision, self.size
        )?;
        let flags = [
            (self.is_unsynchronized, "unsynchronized"),
            (self.has_extended_header, "extended header"),
            (self.is_experimental, "experimental"),
            (self.has_footer, "footer"),
        ];
        for (_, name) in flags.iter().filter(|(set, _)| *set) {
            write!(f, ", {}", name)?;
        }
        Ok(())
    }
}

/// Per-frame flags; ID3v2.2 frames have none
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameFlags {
    pub tag_alter_preservation: bool,
    pub file_alter_preservation: bool,
    pub read_only: bool,
    pub grouping: bool,
    pub compression: bool,
    pub encryption: bool,
    // v2.4 only
    pub unsynchronization: bool,
    pub data_length_indicator: bool,
}

impl FrameFlags {
    // %abc00000 %ijk00000
    pub fn from_v3(flags: [u8; 2]) -> Self {
        FrameFlags {
            tag_alter_preservation: flags[0] & 0b1000_0000 != 0,
            file_alter_preservation: flags[0] & 0b0100_0000 != 0,
            read_only: flags[0] & 0b0010_0000 != 0,
            compression: flags[1] & 0b1000_0000 != 0,
            encryption: flags[1] & 0b0100_0000 != 0,
            grouping: flags[1] & 0b0010_0000 != 0,
            ..Default::default()
        }
    }

    // %0abc0000 %0h00kmnp
    pub fn from_v4(flags: [u8; 2]) -> Self {
        FrameFlags {
            tag_alter_preservation: flags[0] & 0b0100_0000 != 0,
            file_alter_preservation: flags[0] & 0b0010_0000 != 0,
            read_only: flags[0] & 0b0001_0000 != 0,
            grouping: flags[1] & 0b0100_0000 != 0,
            compression: flags[1] & 0b0000_1000 != 0,
            encryption: flags[1] & 0b0000_0100 != 0,
            unsynchronization: flags[1] & 0b0000_0010 != 0,
            data_length_indicator: flags[1] & 0b0000_0001 != 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameHeader {
    pub name: String,
    pub size: u32,
    pub flags: FrameFlags,
}
