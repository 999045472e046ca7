//! Layout view
//!
//! The layout is the sole configuration surface touching the codec core.
//! It supplies the order and presence of the top-level sections, the
//! bitmap transcription mode and the parse-time padding treatment. It is
//! read once per serialize/parse call.

use crate::bitmap::BitmapMode;

/// Top-level message section
///
/// The bitmap is inseparable from the data section: parsing the data
/// requires the bitmap immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Message type indicator
    Mti,
    /// Optional fixed-length header fields
    Header,
    /// Bitmap followed by the present data fields
    BitmapAndData,
}

/// Snapshot of the wire-layout options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Whether the header section is emitted and parsed
    pub use_header: bool,
    /// Rank of the MTI section
    pub mti_position: u8,
    /// Rank of the header section
    pub header_position: u8,
    /// Rank of the bitmap+data section
    pub bitmap_and_message_position: u8,
    /// Hex instead of binary bitmap transcription
    pub use_hex_bitmap: bool,
    /// Strip left-zero / right-space padding from parsed values
    pub remove_padding_on_parse: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            use_header: false,
            mti_position: 0,
            header_position: 1,
            bitmap_and_message_position: 2,
            use_hex_bitmap: false,
            remove_padding_on_parse: false,
        }
    }
}

impl Layout {
    /// The process-wide default layout: `[MTI, Header?, Bitmap+Data]`,
    /// binary bitmap, padding retained on parse
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the header section
    pub fn with_header(mut self, use_header: bool) -> Self {
        self.use_header = use_header;
        self
    }

    /// Select hex or binary bitmap transcription
    pub fn with_hex_bitmap(mut self, use_hex: bool) -> Self {
        self.use_hex_bitmap = use_hex;
        self
    }

    /// Strip padding from parsed values
    pub fn with_padding_removal(mut self, remove: bool) -> Self {
        self.remove_padding_on_parse = remove;
        self
    }

    /// Assign section ranks
    pub fn with_positions(mut self, mti: u8, header: u8, bitmap_and_message: u8) -> Self {
        self.mti_position = mti;
        self.header_position = header;
        self.bitmap_and_message_position = bitmap_and_message;
        self
    }

    /// Bitmap transcription mode for this layout
    pub fn bitmap_mode(&self) -> BitmapMode {
        if self.use_hex_bitmap {
            BitmapMode::Hex
        } else {
            BitmapMode::Binary
        }
    }

    /// Sections in wire order: ranks sorted ascending, header omitted
    /// when disabled
    pub fn sections(&self) -> Vec<Section> {
        let mut ranked = vec![
            (self.mti_position, Section::Mti),
            (self.bitmap_and_message_position, Section::BitmapAndData),
        ];
        if self.use_header {
            ranked.push((self.header_position, Section::Header));
        }
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, section)| section).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let layout = Layout::new();
        assert_eq!(layout.sections(), vec![Section::Mti, Section::BitmapAndData]);
        assert_eq!(layout.bitmap_mode(), BitmapMode::Binary);
    }

    #[test]
    fn test_header_inserted_by_rank() {
        let layout = Layout::new().with_header(true);
        assert_eq!(
            layout.sections(),
            vec![Section::Mti, Section::Header, Section::BitmapAndData]
        );
    }

    #[test]
    fn test_custom_ranks_reorder_sections() {
        let layout = Layout::new().with_header(true).with_positions(2, 0, 1);
        assert_eq!(
            layout.sections(),
            vec![Section::Header, Section::BitmapAndData, Section::Mti]
        );
    }

    #[test]
    fn test_hex_mode() {
        let layout = Layout::new().with_hex_bitmap(true);
        assert_eq!(layout.bitmap_mode(), BitmapMode::Hex);
    }
}
