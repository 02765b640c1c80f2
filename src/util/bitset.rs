//! Byte-backed bit set with checked indexing.

use crate::util::UtilError;

/// A fixed-width set of bits packed into bytes.
///
/// Bit `i` lives in byte `i / 8` at position `i % 8`. All bits start clear.
/// Every accessor bounds-checks the index and reports
/// [`UtilError::IndexOutOfRange`] rather than touching neighbouring storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    bytes: Vec<u8>,
    bits: usize,
}

impl BitSet {
    /// Create a set of `bits` bits, all clear.
    pub fn new(bits: usize) -> Result<Self, UtilError> {
        if bits == 0 {
            return Err(UtilError::ZeroCapacity);
        }
        Ok(Self {
            bytes: vec![0; (bits + 7) / 8],
            bits,
        })
    }

    /// Number of addressable bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    fn check(&self, index: usize) -> Result<(), UtilError> {
        if index >= self.bits {
            return Err(UtilError::IndexOutOfRange {
                index,
                len: self.bits,
            });
        }
        Ok(())
    }

    /// Set bit `index`.
    pub fn set(&mut self, index: usize) -> Result<(), UtilError> {
        self.check(index)?;
        self.bytes[index / 8] |= 1 << (index % 8);
        Ok(())
    }

    /// Clear bit `index`.
    pub fn clear(&mut self, index: usize) -> Result<(), UtilError> {
        self.check(index)?;
        self.bytes[index / 8] &= !(1 << (index % 8));
        Ok(())
    }

    /// Read bit `index`.
    pub fn get(&self, index: usize) -> Result<bool, UtilError> {
        self.check(index)?;
        Ok(self.bytes[index / 8] & (1 << (index % 8)) != 0)
    }

    /// Number of set bits.
    pub fn count_set(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let mut s = BitSet::new(10).unwrap();
        assert_eq!(s.get(9), Ok(false));
        s.set(9).unwrap();
        assert_eq!(s.get(9), Ok(true));
        // Neighbours stay clear across the byte boundary.
        assert_eq!(s.get(8), Ok(false));
        assert_eq!(s.get(7), Ok(false));
        s.clear(9).unwrap();
        assert_eq!(s.get(9), Ok(false));
    }

    #[test]
    fn bounds_are_checked() {
        assert_eq!(BitSet::new(0), Err(UtilError::ZeroCapacity));
        let mut s = BitSet::new(8).unwrap();
        assert_eq!(
            s.set(8),
            Err(UtilError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert!(s.get(100).is_err());
        assert!(s.clear(8).is_err());
    }

    #[test]
    fn counts_set_bits() {
        let mut s = BitSet::new(20).unwrap();
        assert_eq!(s.count_set(), 0);
        for i in [0, 7, 8, 19] {
            s.set(i).unwrap();
        }
        assert_eq!(s.count_set(), 4);
        // Setting twice is idempotent.
        s.set(0).unwrap();
        assert_eq!(s.count_set(), 4);
    }
}
