use std::cmp;
use crate::core::bookstore::PaginatedResult;

pub(crate) const MAX_PAGE_SIZE: usize = 500;

// parses the offset token produced by a previous page
pub(crate) fn to_offset(page: Option<&str>) -> usize {
    if let Some(page) = page {
        if let Ok(offset) = page.parse::<usize>() {
            return offset;
        }
    }
    0
}

// slices matched records into the requested page, next_page carries the offset of the
// following record when more records remain
pub(crate) fn to_page<T>(page: Option<&str>, page_size: usize, records: Vec<T>) -> PaginatedResult<T> {
    let limit = cmp::min(cmp::max(page_size, 1), MAX_PAGE_SIZE);
    let offset = cmp::min(to_offset(page), records.len());
    let end = cmp::min(offset + limit, records.len());
    let next_page = if end < records.len() {
        Some(end.to_string())
    } else {
        None
    };
    let records = records.into_iter().skip(offset).take(limit).collect();
    PaginatedResult::new(page, page_size, next_page, records)
}

#[cfg(test)]
mod tests {
    use crate::utils::paging::{to_offset, to_page};

    #[tokio::test]
    async fn test_should_parse_offset_token() {
        assert_eq!(0, to_offset(None));
        assert_eq!(0, to_offset(Some("junk")));
        assert_eq!(20, to_offset(Some("20")));
    }

    #[tokio::test]
    async fn test_should_page_empty_records() {
        let res = to_page::<String>(None, 10, vec![]);
        assert_eq!(0, res.records.len());
        assert_eq!(None, res.next_page);
    }

    #[tokio::test]
    async fn test_should_page_all_records() {
        let records = (0..50).collect::<Vec<i32>>();
        let mut next_page = None;
        let mut total = 0;
        loop {
            let res = to_page(next_page.as_deref(), 20, records.clone());
            total += res.records.len();
            next_page = res.next_page;
            if next_page == None {
                break;
            }
        }
        assert_eq!(50, total);
    }

    #[tokio::test]
    async fn test_should_stop_after_last_page() {
        let records = (0..10).collect::<Vec<i32>>();
        let res = to_page(Some("10"), 20, records);
        assert_eq!(0, res.records.len());
        assert_eq!(None, res.next_page);
    }
}
