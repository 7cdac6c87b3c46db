//! # CIDR Notation Parsing
//!
//! Parses dotted-decimal-with-prefix notation (e.g. `192.168.1.0/24`)
//! into a [`Network`]: a prefix length, the mask derived from it, and the
//! base address with all host bits cleared.
//!
//! The scan is deliberately permissive, matching classic fixed-width
//! behaviour: octets accumulate in eight bits with wrapping arithmetic
//! (`999` reads as 231) and a missing or non-numeric prefix reads as 0.
//! Only an empty string and a prefix above 32 are rejected.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::network::format::dotted;

/// Number of bits in an IPv4 address; the largest valid prefix length.
pub const MAX_PREFIX: u8 = 32;

/// An IPv4 network: a base address plus the prefix length fixing its
/// leading bits.
///
/// `mask` is derived from `prefix` alone, and `addr` keeps only the bits
/// the mask covers, so `addr & mask == addr` holds for every constructed
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    /// Prefix length, 0..=32.
    pub prefix: u8,
    /// Top `prefix` bits set.
    pub mask: u32,
    /// Base address with all host bits cleared.
    pub addr: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNetworkError {
    #[error("empty network string")]
    Empty,
    #[error("prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u32),
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNetworkError::Empty);
        }

        let (raw_addr, prefix_str) = scan_addr(s);
        let prefix = scan_prefix(prefix_str);
        trace!("scanned raw address {raw_addr:#010x}, prefix {prefix}");

        if prefix > u32::from(MAX_PREFIX) {
            return Err(ParseNetworkError::PrefixOutOfRange(prefix));
        }

        let prefix = prefix as u8;
        let mask = mask_from_prefix(prefix);
        Ok(Network {
            prefix,
            mask,
            addr: raw_addr & mask,
        })
    }
}

impl Network {
    pub fn base_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", dotted(self.base_addr()), self.prefix)
    }
}

/// Mask with the top `prefix` bits set.
///
/// Widens to 64 bits so the shift count stays in range for prefixes 0 and
/// 32, where shifting a 32-bit value by 32 would be undefined.
pub fn mask_from_prefix(prefix: u8) -> u32 {
    debug_assert!(prefix <= MAX_PREFIX);
    let host_bits = u32::from(MAX_PREFIX - prefix);
    ((u64::from(u32::MAX) >> host_bits) << host_bits) as u32
}

/// Scans the dotted-decimal part left to right, returning the raw 32-bit
/// address and the text following a `/` separator (empty when there is
/// none).
///
/// Each `.` shifts the running value left by eight bits and merges the
/// completed octet; one final merge after the scan produces the low-order
/// byte, whether or not the text ended with a `.`. Octets accumulate
/// modulo 256 and non-digit bytes coerce through the same wrapping
/// arithmetic.
fn scan_addr(s: &str) -> (u32, &str) {
    let mut running: u32 = 0;
    let mut octet: u8 = 0;
    let mut rest = "";

    for (i, byte) in s.bytes().enumerate() {
        match byte {
            b'/' => {
                rest = &s[i + 1..];
                break;
            }
            b'.' => {
                running = (running << 8) | u32::from(octet);
                octet = 0;
            }
            _ => octet = octet.wrapping_mul(10).wrapping_add(byte.wrapping_sub(b'0')),
        }
    }

    ((running << 8) | u32::from(octet), rest)
}

/// Permissive decimal parse of the prefix text: leading whitespace is
/// skipped, leading digits are taken, anything else reads as 0.
fn scan_prefix(s: &str) -> u32 {
    s.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
        })
}
