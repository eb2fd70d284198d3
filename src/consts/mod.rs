//! Named constant tables for the libm sin/cos stubs.
//!
//! Each table lives in `static` storage wrapped in a `#[repr(align(N))]` type,
//! so the alignment a code generator relies on for its loads holds before any
//! address is handed out. [`TableId`] is the closed set of names and
//! [`ConstTable`] a read-only view over one table.

mod data;
pub mod layout;

pub use data::{
    CTABLE, NEG_ZERO, ONE, ONEHALF, P_1, P_2, P_3, PI_4, PI_INV_TABLE, PI32INV, SC_1, SC_2, SC_3,
    SC_4, SHIFTER, SIGN_MASK, TWO_POW_55, TWO_POW_M55, ZERO,
};

use crate::error::TableError;
use core::fmt;
use core::str::FromStr;

// ========= aligned storage =========

/// Storage aligned to 4 bytes.
#[derive(Debug)]
#[repr(C, align(4))]
pub struct Aligned4<T>(pub T);

/// Storage aligned to 8 bytes, for scalar double loads.
#[derive(Debug)]
#[repr(C, align(8))]
pub struct Aligned8<T>(pub T);

/// Storage aligned to 16 bytes, for 128-bit vector loads.
#[derive(Debug)]
#[repr(C, align(16))]
pub struct Aligned16<T>(pub T);

const _: () = {
    assert!(core::mem::align_of::<Aligned4<[u32; 2]>>() == 4);
    assert!(core::mem::align_of::<Aligned8<[u32; 2]>>() == 8);
    assert!(core::mem::align_of::<Aligned16<[u32; 4]>>() == 16);
    assert!(core::mem::size_of::<Aligned16<[u32; 512]>>() == 2048);
};

// ========= bit helpers =========

#[inline(always)]
pub(crate) const fn lo_word(x: f64) -> u32 {
    (x.to_bits() & 0xffff_ffffu64) as u32
}

#[inline(always)]
pub(crate) const fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | (lo as u64))
}

/// First double of a table (words 0 and 1).
#[inline(always)]
pub(crate) const fn first_lane(words: &[u32]) -> f64 {
    with_hi_lo(words[1], words[0])
}

/// First double of a table as raw bits.
#[inline(always)]
pub(crate) const fn first_lane_bits(words: &[u32]) -> u64 {
    ((words[1] as u64) << 32) | (words[0] as u64)
}

// ========= table identity =========

/// Closed enumeration of every table the stub generator may reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableId {
    One,
    OneHalf,
    SignMask,
    TwoPow55,
    TwoPowM55,
    Shifter,
    Zero,
    Sc1,
    Sc2,
    Sc3,
    Sc4,
    Pi4,
    Pi32Inv,
    NegZero,
    P1,
    P2,
    P3,
    PiInvTable,
    Ctable,
}

impl TableId {
    /// Every table, in declaration order.
    pub const ALL: [TableId; 19] = [
        TableId::One,
        TableId::OneHalf,
        TableId::SignMask,
        TableId::TwoPow55,
        TableId::TwoPowM55,
        TableId::Shifter,
        TableId::Zero,
        TableId::Sc1,
        TableId::Sc2,
        TableId::Sc3,
        TableId::Sc4,
        TableId::Pi4,
        TableId::Pi32Inv,
        TableId::NegZero,
        TableId::P1,
        TableId::P2,
        TableId::P3,
        TableId::PiInvTable,
        TableId::Ctable,
    ];

    /// Canonical symbol for the table.
    pub const fn name(self) -> &'static str {
        match self {
            TableId::One => "ONE",
            TableId::OneHalf => "ONEHALF",
            TableId::SignMask => "SIGN_MASK",
            TableId::TwoPow55 => "TWO_POW_55",
            TableId::TwoPowM55 => "TWO_POW_M55",
            TableId::Shifter => "SHIFTER",
            TableId::Zero => "ZERO",
            TableId::Sc1 => "SC_1",
            TableId::Sc2 => "SC_2",
            TableId::Sc3 => "SC_3",
            TableId::Sc4 => "SC_4",
            TableId::Pi4 => "PI_4",
            TableId::Pi32Inv => "PI32INV",
            TableId::NegZero => "NEG_ZERO",
            TableId::P1 => "P_1",
            TableId::P2 => "P_2",
            TableId::P3 => "P_3",
            TableId::PiInvTable => "PI_INV_TABLE",
            TableId::Ctable => "Ctable",
        }
    }

    /// Minimum byte alignment the generated loads require.
    pub const fn alignment(self) -> usize {
        match self {
            TableId::Zero => 4,
            TableId::One
            | TableId::SignMask
            | TableId::TwoPow55
            | TableId::TwoPowM55
            | TableId::Pi4
            | TableId::Pi32Inv
            | TableId::NegZero
            | TableId::P1
            | TableId::P3 => 8,
            TableId::OneHalf
            | TableId::Shifter
            | TableId::Sc1
            | TableId::Sc2
            | TableId::Sc3
            | TableId::Sc4
            | TableId::P2
            | TableId::PiInvTable
            | TableId::Ctable => 16,
        }
    }

    /// Backing words of the table.
    pub fn words(self) -> &'static [u32] {
        match self {
            TableId::One => &ONE.0,
            TableId::OneHalf => &ONEHALF.0,
            TableId::SignMask => &SIGN_MASK.0,
            TableId::TwoPow55 => &TWO_POW_55.0,
            TableId::TwoPowM55 => &TWO_POW_M55.0,
            TableId::Shifter => &SHIFTER.0,
            TableId::Zero => &ZERO.0,
            TableId::Sc1 => &SC_1.0,
            TableId::Sc2 => &SC_2.0,
            TableId::Sc3 => &SC_3.0,
            TableId::Sc4 => &SC_4.0,
            TableId::Pi4 => &PI_4.0,
            TableId::Pi32Inv => &PI32INV.0,
            TableId::NegZero => &NEG_ZERO.0,
            TableId::P1 => &P_1.0,
            TableId::P2 => &P_2.0,
            TableId::P3 => &P_3.0,
            TableId::PiInvTable => &PI_INV_TABLE.0,
            TableId::Ctable => &CTABLE.0,
        }
    }

    pub fn word_count(self) -> usize {
        self.words().len()
    }

    pub fn table(self) -> ConstTable {
        ConstTable {
            id: self,
            words: self.words(),
        }
    }

    /// Base address of the table, for embedding as an instruction operand.
    #[inline]
    pub fn address(self) -> *const u8 {
        self.words().as_ptr().cast()
    }

    /// Looks a table up by its canonical symbol.
    pub fn from_name(name: &str) -> Result<Self, TableError> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or(TableError::UnknownName)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableId {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Base address of `id`'s backing storage.
#[inline]
pub fn table_address(id: TableId) -> *const u8 {
    id.address()
}

/// Checks that every table sits at its documented alignment.
///
/// Meant to run once before the code generator starts embedding addresses.
pub fn verify_tables() -> Result<(), TableError> {
    for id in TableId::ALL {
        id.table().check_alignment()?;
    }
    Ok(())
}

// ========= table view =========

/// Read-only view of one table: base pointer, length and alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstTable {
    id: TableId,
    words: &'static [u32],
}

impl ConstTable {
    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn words(&self) -> &'static [u32] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn byte_len(&self) -> usize {
        core::mem::size_of_val(self.words)
    }

    pub fn alignment(&self) -> usize {
        self.id.alignment()
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.words.as_ptr()
    }

    /// Numeric address of the first word; [`TableId::address`] gives the raw pointer.
    pub fn addr(&self) -> usize {
        self.words.as_ptr() as usize
    }

    /// The table's bytes exactly as they sit in memory.
    pub fn as_bytes(&self) -> &'static [u8] {
        // SAFETY: `u32` has no padding and every byte pattern is a valid `u8`;
        // the slice covers the same static allocation as `self.words`.
        unsafe { core::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.byte_len()) }
    }

    /// Number of whole doubles in the table.
    pub fn lane_count(&self) -> usize {
        self.words.len() / 2
    }

    /// The `i`-th double (words `2i` and `2i + 1`, low word first).
    pub fn lane(&self, i: usize) -> Option<f64> {
        let lo = *self.words.get(2 * i)?;
        let hi = *self.words.get(2 * i + 1)?;
        Some(with_hi_lo(hi, lo))
    }

    pub fn lanes(&self) -> impl Iterator<Item = f64> + 'static {
        self.words.chunks_exact(2).map(|w| with_hi_lo(w[1], w[0]))
    }

    pub fn check_alignment(&self) -> Result<(), TableError> {
        let address = self.addr();
        let alignment = self.alignment();
        if address % alignment != 0 {
            return Err(TableError::Misaligned {
                name: self.name(),
                alignment,
                address,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use std::string::ToString;

    fn bits(id: TableId, lane: usize) -> u64 {
        id.table().lane(lane).unwrap().to_bits()
    }

    #[test]
    fn scalar_reinterpretations() {
        assert_eq!(TableId::One.table().lane(0), Some(1.0));
        assert_eq!(bits(TableId::Zero, 0), 0);
        assert_eq!(bits(TableId::NegZero, 0), 0x8000_0000_0000_0000);
        assert_eq!(bits(TableId::SignMask, 0), 0x8000_0000_0000_0000);
        assert_eq!(TableId::TwoPow55.table().lane(0), Some(36028797018963968.0));
        assert_eq!(
            TableId::TwoPowM55.table().lane(0),
            Some(1.0 / 36028797018963968.0)
        );
        assert_eq!(TableId::Shifter.table().lane(1), Some(6755399441055744.0));
        assert_eq!(
            TableId::OneHalf.table().lanes().collect::<std::vec::Vec<_>>(),
            [0.5, 0.5]
        );
        let neg_zero = TableId::NegZero.table().lane(0).unwrap();
        assert!(neg_zero == 0.0 && neg_zero.is_sign_negative());
    }

    #[test]
    fn pi_constants() {
        let pi4 = TableId::Pi4.table();
        let hi = pi4.lane(0).unwrap();
        let lo = pi4.lane(1).unwrap();
        let want = core::f64::consts::FRAC_PI_4;
        // The pair sums to pi/4; the high lane alone is truncated.
        assert_eq!(hi + lo, want);
        assert_eq!(lo_word(hi), 0x4000_0000);
        assert!(hi.to_bits().trailing_zeros() >= 30);
        assert!(lo.abs() < 1e-7);
        assert_eq!(
            TableId::Pi32Inv.table().lane(0).unwrap(),
            32.0 / core::f64::consts::PI
        );

        let p1 = first_lane(&P_1.0);
        let p2 = first_lane(&P_2.0);
        let p3 = first_lane(&P_3.0);
        assert_eq!(p1 + p2 + p3, core::f64::consts::PI / 32.0);
        // Cody-Waite parts keep enough trailing zeros for exact products.
        assert!(first_lane_bits(&P_1.0).trailing_zeros() >= 21);
        assert!(first_lane_bits(&P_2.0).trailing_zeros() >= 21);
        assert_eq!(P_2.0[..2], P_2.0[2..]);
    }

    #[test]
    fn alignment_is_documented_minimum() {
        for id in TableId::ALL {
            let table = id.table();
            assert_eq!(
                table.addr() % id.alignment(),
                0,
                "{} misaligned",
                id.name()
            );
            assert!(table.check_alignment().is_ok());
        }
        assert!(verify_tables().is_ok());
        assert_eq!(core::mem::align_of_val(&ZERO), 4);
        assert_eq!(core::mem::align_of_val(&ONE), 8);
        assert_eq!(core::mem::align_of_val(&CTABLE), 16);
    }

    #[test]
    fn names_round_trip() {
        for id in TableId::ALL {
            assert_eq!(TableId::from_name(id.name()), Ok(id));
            assert_eq!(id.to_string().parse::<TableId>(), Ok(id));
            assert_eq!(table_address(id), id.address());
        }
        assert_eq!(
            TableId::from_name("CTABLE"),
            Err(TableError::UnknownName)
        );
        assert_eq!("".parse::<TableId>(), Err(TableError::UnknownName));
    }

    #[test]
    fn misaligned_error_message() {
        let err = TableError::Misaligned {
            name: "SC_1",
            alignment: 16,
            address: 0x1008,
        };
        assert_eq!(
            format!("{err}"),
            "table SC_1 at 0x1008 is not 16-byte aligned"
        );
    }

    #[test]
    fn word_counts() {
        assert_eq!(TableId::Ctable.word_count(), 512);
        assert_eq!(TableId::PiInvTable.word_count(), 41);
        assert_eq!(TableId::Pi4.word_count(), 4);
        assert_eq!(TableId::PiInvTable.table().lane(20), None);
        for id in TableId::ALL {
            let table = id.table();
            assert_eq!(table.byte_len(), 4 * table.len());
            assert_eq!(table.as_bytes().len(), table.byte_len());
            assert!(!table.is_empty());
        }
    }
}
