//! Minimal JPEG byte streams for tests.
//!
//! Only the marker layout nom-exif scans is present: SOI, an optional APP1
//! EXIF segment, an SOS header with a few bytes of scan data, EOI.

/// Rational as `(numerator, denominator)`.
pub type Rational = (u32, u32);

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

/// JPEG with a JFIF header and no EXIF segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    // APP0 "JFIF\0", version 1.1, no units, 1x1 density, no thumbnail
    out.extend_from_slice(&[
        0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00,
        0x01, 0x00, 0x00,
    ]);
    push_scan(&mut out);
    out
}

/// JPEG whose EXIF carries `Make = "Canon"` and a GPS IFD with both axes.
pub fn jpeg_with_gps(
    latitude: [Rational; 3],
    latitude_ref: u8,
    longitude: [Rational; 3],
    longitude_ref: u8,
) -> Vec<u8> {
    let tiff = tiff_with_gps(latitude, latitude_ref, longitude, longitude_ref);

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let len = (2 + 6 + tiff.len()) as u16;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    push_scan(&mut out);
    out
}

/// SOS header (one component, full spectral range) plus scan bytes and EOI.
fn push_scan(out: &mut Vec<u8>) {
    out.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    out.extend_from_slice(&[0x12, 0x34, 0x56]);
    out.extend_from_slice(&[0xFF, 0xD9]);
}

/// Little-endian TIFF block: IFD0 { Make, GPSInfo } → GPS IFD { refs, angles }.
fn tiff_with_gps(
    latitude: [Rational; 3],
    latitude_ref: u8,
    longitude: [Rational; 3],
    longitude_ref: u8,
) -> Vec<u8> {
    const IFD0_AT: u32 = 8;
    const MAKE_AT: u32 = IFD0_AT + 2 + 2 * 12 + 4;
    const GPS_IFD_AT: u32 = MAKE_AT + 6;
    const LATITUDE_AT: u32 = GPS_IFD_AT + 2 + 4 * 12 + 4;
    const LONGITUDE_AT: u32 = LATITUDE_AT + 3 * 8;

    let mut t = Vec::new();
    t.extend_from_slice(b"II");
    t.extend_from_slice(&42u16.to_le_bytes());
    t.extend_from_slice(&IFD0_AT.to_le_bytes());

    t.extend_from_slice(&2u16.to_le_bytes());
    push_entry(&mut t, 0x010F, TYPE_ASCII, 6, MAKE_AT.to_le_bytes());
    push_entry(&mut t, 0x8825, TYPE_LONG, 1, GPS_IFD_AT.to_le_bytes());
    t.extend_from_slice(&0u32.to_le_bytes());
    t.extend_from_slice(b"Canon\0");

    t.extend_from_slice(&4u16.to_le_bytes());
    push_entry(&mut t, 0x0001, TYPE_ASCII, 2, [latitude_ref, 0, 0, 0]);
    push_entry(&mut t, 0x0002, TYPE_RATIONAL, 3, LATITUDE_AT.to_le_bytes());
    push_entry(&mut t, 0x0003, TYPE_ASCII, 2, [longitude_ref, 0, 0, 0]);
    push_entry(&mut t, 0x0004, TYPE_RATIONAL, 3, LONGITUDE_AT.to_le_bytes());
    t.extend_from_slice(&0u32.to_le_bytes());

    for (num, den) in latitude.iter().chain(longitude.iter()) {
        t.extend_from_slice(&num.to_le_bytes());
        t.extend_from_slice(&den.to_le_bytes());
    }

    t
}

fn push_entry(t: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    t.extend_from_slice(&tag.to_le_bytes());
    t.extend_from_slice(&kind.to_le_bytes());
    t.extend_from_slice(&count.to_le_bytes());
    t.extend_from_slice(&value);
}

/// The Sydney Opera House fixture used across tests: 33°51'35"S 151°12'36"E.
pub fn sydney_jpeg() -> Vec<u8> {
    jpeg_with_gps(
        [(33, 1), (51, 1), (3500, 100)],
        b'S',
        [(151, 1), (12, 1), (36, 1)],
        b'E',
    )
}
