// src/domain/disclosure.rs

/// How many matching records a collapsed card shows inline.
pub const MAX_INLINE: usize = 3;

/// The slice of `filtered` a card should render.
///
/// Collapsed cards show at most `MAX_INLINE` records; expanded cards show all.
pub fn visible<T>(filtered: &[T], expanded: bool) -> &[T] {
    if !expanded && filtered.len() > MAX_INLINE {
        &filtered[..MAX_INLINE]
    } else {
        filtered
    }
}

/// Whether an expand/collapse affordance is needed at all.
pub fn has_more(filtered_len: usize) -> bool {
    filtered_len > MAX_INLINE
}

/// Records hidden while collapsed.
pub fn remainder(filtered_len: usize) -> usize {
    filtered_len.saturating_sub(MAX_INLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_shows_everything() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(visible(&items, true), &items);
    }

    #[test]
    fn collapsed_truncates_long_lists() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(visible(&items, false), &[1, 2, 3]);
        assert!(has_more(items.len()));
        assert_eq!(remainder(items.len()), 2);
    }

    #[test]
    fn collapsed_short_lists_are_untouched() {
        let items = [1, 2, 3];
        assert_eq!(visible(&items, false), &items);
        assert!(!has_more(items.len()));
        assert_eq!(remainder(items.len()), 0);

        let empty: [u8; 0] = [];
        assert!(visible(&empty, false).is_empty());
        assert!(!has_more(0));
    }
}
