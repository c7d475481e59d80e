//! Big-endian loads and stores at fixed-width byte spans.
//!
//! MessagePack stores every multi-byte number in network byte order. These
//! helpers work the same on any host; signed and float variants reinterpret
//! the bits of the unsigned ones.

// Floats are moved as their IEEE 754 bit patterns. Refuse to build on a
// target whose native float layout would not round-trip through them.
const _: () = {
    assert!(f32::to_bits(1.0) == 0x3f80_0000);
    assert!(f64::to_bits(1.0) == 0x3ff0_0000_0000_0000);
    assert!(f32::to_bits(-2.5) == 0xc020_0000);
};

#[inline]
pub fn load_u8(p: &[u8; 1]) -> u8 {
    p[0]
}

#[inline]
pub fn load_u16(p: &[u8; 2]) -> u16 {
    u16::from_be_bytes(*p)
}

#[inline]
pub fn load_u32(p: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*p)
}

#[inline]
pub fn load_u64(p: &[u8; 8]) -> u64 {
    u64::from_be_bytes(*p)
}

#[inline]
pub fn load_i8(p: &[u8; 1]) -> i8 {
    load_u8(p) as i8
}

#[inline]
pub fn load_i16(p: &[u8; 2]) -> i16 {
    load_u16(p) as i16
}

#[inline]
pub fn load_i32(p: &[u8; 4]) -> i32 {
    load_u32(p) as i32
}

#[inline]
pub fn load_i64(p: &[u8; 8]) -> i64 {
    load_u64(p) as i64
}

#[inline]
pub fn load_f32(p: &[u8; 4]) -> f32 {
    f32::from_bits(load_u32(p))
}

#[inline]
pub fn load_f64(p: &[u8; 8]) -> f64 {
    f64::from_bits(load_u64(p))
}

#[inline]
pub fn store_u8(p: &mut [u8; 1], val: u8) {
    p[0] = val;
}

#[inline]
pub fn store_u16(p: &mut [u8; 2], val: u16) {
    *p = val.to_be_bytes();
}

#[inline]
pub fn store_u32(p: &mut [u8; 4], val: u32) {
    *p = val.to_be_bytes();
}

#[inline]
pub fn store_u64(p: &mut [u8; 8], val: u64) {
    *p = val.to_be_bytes();
}

#[inline]
pub fn store_i8(p: &mut [u8; 1], val: i8) {
    store_u8(p, val as u8);
}

#[inline]
pub fn store_i16(p: &mut [u8; 2], val: i16) {
    store_u16(p, val as u16);
}

#[inline]
pub fn store_i32(p: &mut [u8; 4], val: i32) {
    store_u32(p, val as u32);
}

#[inline]
pub fn store_i64(p: &mut [u8; 8], val: i64) {
    store_u64(p, val as u64);
}

#[inline]
pub fn store_f32(p: &mut [u8; 4], val: f32) {
    store_u32(p, val.to_bits());
}

#[inline]
pub fn store_f64(p: &mut [u8; 8], val: f64) {
    store_u64(p, val.to_bits());
}
