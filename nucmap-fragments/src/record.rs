use nucmap_core::Strand;

use crate::consts::{FLAG_MASK, SAME_REFERENCE};

///
/// One decoded alignment, as handed over by a decoder.
///
/// Records are consumed by the fragment pipeline and never kept around.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub name: String,
    pub chr: String,
    pub strand: Option<Strand>,
    /// 1-based leftmost position
    pub pos: u32,
    pub width: u32,
    /// raw flag, before masking
    pub flag: u16,
    /// `None` or `"="` mean the mate sits on the same reference
    pub mate_chr: Option<String>,
    pub mate_pos: u32,
}

impl AlignmentRecord {
    pub fn normalized_flag(&self) -> u16 {
        self.flag & FLAG_MASK
    }

    ///
    /// Reference the mate is reported on, resolving the `=` shorthand.
    ///
    pub fn mate_reference(&self) -> &str {
        match self.mate_chr.as_deref() {
            None | Some(SAME_REFERENCE) => &self.chr,
            Some(chr) => chr,
        }
    }

    ///
    /// One past the last aligned base, i.e. `pos + width`.
    ///
    pub fn end_exclusive(&self) -> i64 {
        self.pos as i64 + self.width as i64
    }
}
