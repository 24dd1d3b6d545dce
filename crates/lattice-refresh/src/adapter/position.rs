//! Translation between adapter positions and content indices.
//!
//! The adapter's index space is the content sequence with up to two sentinels
//! spliced in: a header at position 0 and a footer at the last position.
//!
//! ```text
//! header  footer  len  item_count  layout
//! on      on      3    5           [H] 0 1 2 [F]
//! on      off     3    4           [H] 0 1 2
//! off     on      3    4           0 1 2 [F]
//! on      on      0    1           [H]
//! off     on      0    0           (empty)
//! ```
//!
//! The mapper holds only the two enablement flags. Every query takes the
//! current content length, so counts are recomputed on each call.

use crate::error::{RefreshError, Result};

/// What kind of row lives at an adapter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// The pull-to-refresh header sentinel.
    Header,
    /// The load-more footer sentinel.
    Footer,
    /// A content item.
    Item,
}

impl ViewType {
    /// Returns `true` for the header and footer sentinels.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        !matches!(self, Self::Item)
    }
}

/// Maps adapter positions to view types and content indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMapper {
    header_enabled: bool,
    footer_enabled: bool,
}

impl Default for PositionMapper {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl PositionMapper {
    /// Creates a mapper with the given sentinel flags.
    pub fn new(header_enabled: bool, footer_enabled: bool) -> Self {
        Self {
            header_enabled,
            footer_enabled,
        }
    }

    /// Whether the header sentinel is injected.
    #[inline]
    pub fn header_enabled(&self) -> bool {
        self.header_enabled
    }

    /// Whether the footer sentinel is injected.
    #[inline]
    pub fn footer_enabled(&self) -> bool {
        self.footer_enabled
    }

    /// Enable or disable the header sentinel.
    pub fn set_header_enabled(&mut self, enabled: bool) {
        self.header_enabled = enabled;
    }

    /// Enable or disable the footer sentinel.
    pub fn set_footer_enabled(&mut self, enabled: bool) {
        self.footer_enabled = enabled;
    }

    /// Number of positions before the first content item.
    #[inline]
    pub fn header_offset(&self) -> usize {
        usize::from(self.header_enabled)
    }

    /// Total number of adapter positions for `len` content items.
    ///
    /// An empty list shows the header alone; the footer only appears once
    /// there is content to follow.
    pub fn item_count(&self, len: usize) -> usize {
        if len == 0 {
            return self.header_offset();
        }
        len + self.header_offset() + usize::from(self.footer_enabled)
    }

    /// The view type at `index`.
    pub fn view_type_at(&self, index: usize, len: usize) -> Result<ViewType> {
        let count = self.item_count(len);
        if index >= count {
            return Err(RefreshError::IndexOutOfRange { index, count });
        }

        if self.header_enabled && index == 0 {
            Ok(ViewType::Header)
        } else if self.footer_enabled && len > 0 && index == count - 1 {
            Ok(ViewType::Footer)
        } else {
            Ok(ViewType::Item)
        }
    }

    /// The content index at `index`, which must be an item position.
    pub fn data_index_at(&self, index: usize, len: usize) -> Result<usize> {
        match self.view_type_at(index, len)? {
            ViewType::Item => Ok(index - self.header_offset()),
            view_type => Err(RefreshError::NotAnItem { index, view_type }),
        }
    }

    /// The adapter position of content index `data_index`.
    ///
    /// This is a pure offset and does not check bounds, so it can translate
    /// rows that were just inserted.
    #[inline]
    pub fn adapter_position(&self, data_index: usize) -> usize {
        data_index + self.header_offset()
    }

    /// Whether the row at `index` must span the full cross axis.
    pub fn is_full_span(&self, index: usize, len: usize) -> Result<bool> {
        Ok(self.view_type_at(index, len)?.is_sentinel())
    }

    /// Span of the row at `index` in a grid with `span_count` columns.
    pub fn span_size(&self, index: usize, len: usize, span_count: usize) -> Result<usize> {
        Ok(if self.is_full_span(index, len)? {
            span_count.max(1)
        } else {
            1
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(mapper: &PositionMapper, len: usize) -> Vec<ViewType> {
        (0..mapper.item_count(len))
            .map(|i| mapper.view_type_at(i, len).unwrap())
            .collect()
    }

    #[test]
    fn test_item_count_formula() {
        for header in [false, true] {
            for footer in [false, true] {
                let mapper = PositionMapper::new(header, footer);
                for len in 0..6 {
                    let expected = if len == 0 {
                        usize::from(header)
                    } else {
                        len + usize::from(header) + usize::from(footer)
                    };
                    assert_eq!(mapper.item_count(len), expected, "{header} {footer} {len}");
                }
            }
        }
    }

    #[test]
    fn test_sentinel_positions() {
        use ViewType::*;

        let both = PositionMapper::new(true, true);
        assert_eq!(layout(&both, 2), vec![Header, Item, Item, Footer]);
        assert_eq!(layout(&both, 0), vec![Header]);

        let footer_only = PositionMapper::new(false, true);
        assert_eq!(layout(&footer_only, 2), vec![Item, Item, Footer]);
        assert_eq!(layout(&footer_only, 1), vec![Item, Footer]);
        assert!(layout(&footer_only, 0).is_empty());

        let header_only = PositionMapper::new(true, false);
        assert_eq!(layout(&header_only, 1), vec![Header, Item]);
    }

    #[test]
    fn test_pass_through_when_disabled() {
        let mapper = PositionMapper::new(false, false);
        assert_eq!(mapper.item_count(4), 4);
        for i in 0..4 {
            assert_eq!(mapper.view_type_at(i, 4).unwrap(), ViewType::Item);
            assert_eq!(mapper.data_index_at(i, 4).unwrap(), i);
        }
        assert_eq!(mapper.item_count(0), 0);
    }

    #[test]
    fn test_data_index_shift() {
        let mapper = PositionMapper::default();
        assert_eq!(mapper.data_index_at(1, 3).unwrap(), 0);
        assert_eq!(mapper.data_index_at(3, 3).unwrap(), 2);
        assert_eq!(mapper.adapter_position(2), 3);

        let err = mapper.data_index_at(4, 3).unwrap_err();
        assert!(matches!(
            err,
            RefreshError::NotAnItem {
                index: 4,
                view_type: ViewType::Footer
            }
        ));
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mapper = PositionMapper::default();
        let err = mapper.view_type_at(5, 3).unwrap_err();
        assert!(matches!(
            err,
            RefreshError::IndexOutOfRange { index: 5, count: 5 }
        ));
        assert!(mapper.view_type_at(0, 0).is_ok());
        assert!(mapper.view_type_at(1, 0).is_err());
    }

    #[test]
    fn test_span_lookup() {
        let mapper = PositionMapper::default();
        assert_eq!(mapper.span_size(0, 4, 3).unwrap(), 3);
        assert_eq!(mapper.span_size(1, 4, 3).unwrap(), 1);
        assert_eq!(mapper.span_size(5, 4, 3).unwrap(), 3);
        assert!(mapper.is_full_span(5, 4).unwrap());
        assert!(!mapper.is_full_span(2, 4).unwrap());
        assert_eq!(mapper.span_size(0, 4, 0).unwrap(), 1);
    }

    #[test]
    fn test_flags_take_effect_on_next_query() {
        let mut mapper = PositionMapper::default();
        assert_eq!(mapper.item_count(3), 5);
        mapper.set_header_enabled(false);
        assert_eq!(mapper.item_count(3), 4);
        mapper.set_footer_enabled(false);
        assert_eq!(mapper.item_count(3), 3);
        assert!(!mapper.header_enabled() && !mapper.footer_enabled());
    }
}
