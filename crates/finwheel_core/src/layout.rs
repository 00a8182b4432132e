//! Column arrangement for the category list

/// Up to this many categories fit in a single column
pub const MAX_SINGLE_COLUMN: usize = 5;

/// How ranked categories are distributed over columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSplit {
    Single(usize),
    /// Sizes of the left and right column; the left one takes the extra row
    /// when the count is odd.
    Double(usize, usize),
}

pub fn column_split(count: usize) -> ColumnSplit {
    if count <= MAX_SINGLE_COLUMN {
        ColumnSplit::Single(count)
    } else {
        let first = count.div_ceil(2);
        ColumnSplit::Double(first, count - first)
    }
}

/// Split ranked items into their columns, preserving rank order.
pub fn columns<T>(items: &[T]) -> Vec<&[T]> {
    match column_split(items.len()) {
        ColumnSplit::Single(_) => vec![items],
        ColumnSplit::Double(first, _) => {
            let (left, right) = items.split_at(first);
            vec![left, right]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_or_fewer_stay_single_column() {
        assert_eq!(column_split(0), ColumnSplit::Single(0));
        assert_eq!(column_split(1), ColumnSplit::Single(1));
        assert_eq!(column_split(5), ColumnSplit::Single(5));
    }

    #[test]
    fn test_even_count_splits_evenly() {
        assert_eq!(column_split(6), ColumnSplit::Double(3, 3));
        assert_eq!(column_split(10), ColumnSplit::Double(5, 5));
    }

    #[test]
    fn test_odd_count_gives_first_column_extra() {
        assert_eq!(column_split(7), ColumnSplit::Double(4, 3));
    }

    #[test]
    fn test_columns_preserve_rank_order() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let cols = columns(&items);
        assert_eq!(cols, vec![&[1, 2, 3, 4][..], &[5, 6, 7][..]]);
        assert_eq!(columns(&items[..3]), vec![&[1, 2, 3][..]]);
    }
}
