use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Reflected IEEE 802.3 polynomial (the one used by zlib and PNG).
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Exact per-byte CRC-32 remainder, shifting one bit at a time.
fn crc32_entry(byte: u32) -> u32 {
    let mut crc = byte;
    for _ in 0..8 {
        if crc & 1 == 1 {
            crc = (crc >> 1) ^ POLYNOMIAL;
        } else {
            crc >>= 1;
        }
    }
    crc
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("crc32_table.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate CRC32_TABLE (256 entries, one per byte value)
    writeln!(file, "/// Lookup table for byte-wise CRC-32 (reflected, poly 0xEDB88320)").unwrap();
    writeln!(file, "/// Index: (crc ^ byte) & 0xFF, Value: remainder to xor in").unwrap();
    writeln!(file, "pub static CRC32_TABLE: [u32; 256] = [").unwrap();
    for i in 0..256u32 {
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    0x{:08X},", crc32_entry(i)).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
