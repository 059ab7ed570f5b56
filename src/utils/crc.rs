/// CRC32 as used by the Ogg page checksum
/// Polynomial: x32 + x26 + x23 + x22 + x16 + x12 + x11 + x10 + x8 + x7 + x5 + x4 + x2 + x + 1
/// Initial value: 0, no reflection, no final xor

const CRC32_OGG: u32 = 0x04C11DB7;

/// Ogg CRC32 calculator used for page validation
///
/// The checksum of a page is computed over the whole page (header, lacing
/// table and body) with the 4 CRC bytes of the header set to zero.
pub struct Crc32Ogg {
    /// Lookup table for fast CRC calculation
    table: [u32; 256],
}

impl Crc32Ogg {
    /// Creates a new CRC32 calculator with pre-computed lookup table
    pub fn new() -> Self {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = (i as u32) << 24;
            for _ in 0..8 {
                crc = if (crc & 0x80000000) != 0 {
                    (crc << 1) ^ CRC32_OGG
                } else {
                    crc << 1
                };
            }
            *entry = crc;
        }
        Self { table }
    }

    /// Calculates the checksum of `data` from a zero initial value
    ///
    /// # Examples
    ///
    /// ```
    /// use ogginfo::utils::Crc32Ogg;
    ///
    /// let crc = Crc32Ogg::new();
    /// assert_eq!(crc.calculate(b"123456789"), 0x89A1897F);
    /// ```
    pub fn calculate(&self, data: &[u8]) -> u32 {
        self.update(0, data)
    }

    /// Continues a running checksum over more data
    pub fn update(&self, mut crc: u32, data: &[u8]) -> u32 {
        for &byte in data {
            let index = ((crc >> 24) ^ (byte as u32)) & 0xFF;
            crc = (crc << 8) ^ self.table[index as usize];
        }
        crc
    }
}

impl Default for Crc32Ogg {
    fn default() -> Self {
        Self::new()
    }
}
