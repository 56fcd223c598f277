use std::fmt;

/// Glyphs for TCP flag bits, most significant bit first.
const FLAG_GLYPHS: [char; 8] = ['C', 'E', 'U', 'A', 'P', 'R', 'S', 'F'];

pub const FIN: u8 = 0x01;
pub const SYN: u8 = 0x02;
pub const RST: u8 = 0x04;
pub const PSH: u8 = 0x08;
pub const ACK: u8 = 0x10;
pub const URG: u8 = 0x20;
pub const ECE: u8 = 0x40;
pub const CWR: u8 = 0x80;

/// TCP flags byte as carried in a flow record.
///
/// Displays as 8 characters, one per bit from CWR down to FIN, with `.` for
/// a clear bit: `0x12` is `"...A..S."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TcpFlags(pub u8);

impl TcpFlags {
    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }
}

impl From<u8> for TcpFlags {
    fn from(val: u8) -> Self {
        TcpFlags(val)
    }
}

impl fmt::Display for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = FLAG_GLYPHS
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                if self.0 & (CWR >> i) != 0 {
                    *glyph
                } else {
                    '.'
                }
            })
            .collect();
        f.pad(&s)
    }
}

pub fn flags_string(flags: u8) -> String {
    TcpFlags(flags).to_string()
}
