use chrono::{DateTime, Duration, Utc};

/// Minimum body length in characters, after trimming.
pub const COMMENT_BODY_MIN_LEN: usize = 6;

/// Comment reads return at most this many rows.
pub const COMMENTS_PAGE_SIZE: u64 = 30;

/// A topic whose `updated_at` is older than this is not bumped by new comments.
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentBodyError {
    #[error("Comment body must be at least {COMMENT_BODY_MIN_LEN} characters")]
    TooShort,
}

/// Trims and length-checks a comment body.
pub fn normalize_body(body: &str) -> Result<String, CommentBodyError> {
    let body = body.trim();
    if body.chars().count() < COMMENT_BODY_MIN_LEN {
        return Err(CommentBodyError::TooShort);
    }
    Ok(body.to_string())
}

/// `count` is taken before the new row is inserted.
pub fn comments_count_after_create(count: i64) -> i64 {
    count.max(0) + 1
}

/// `count` is taken while the row being deleted still exists.
pub fn comments_count_after_delete(count: i64) -> i64 {
    (count - 1).max(0)
}

pub fn is_recently_active(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    updated_at + Duration::days(RECENT_ACTIVITY_WINDOW_DAYS) > now
}

/// Cursor for the next page of a newest-first read: the `created_at` of the
/// last (oldest) row of a full page.
pub fn next_page_offset(created_at: &[DateTime<Utc>]) -> Option<DateTime<Utc>> {
    if (created_at.len() as u64) < COMMENTS_PAGE_SIZE {
        return None;
    }
    created_at.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_trimmed() {
        assert_eq!(normalize_body("  hello!  ").unwrap(), "hello!");
    }

    #[test]
    fn short_body_rejected_regardless_of_padding() {
        assert_eq!(
            normalize_body("     hi     "),
            Err(CommentBodyError::TooShort)
        );
        assert_eq!(normalize_body("12345"), Err(CommentBodyError::TooShort));
        assert_eq!(normalize_body("\n\t \n"), Err(CommentBodyError::TooShort));
    }

    #[test]
    fn body_length_counts_characters() {
        assert!(normalize_body("héllo!").is_ok());
        assert_eq!(normalize_body("ééééé"), Err(CommentBodyError::TooShort));
    }

    #[test]
    fn create_adds_one_to_pre_insert_count() {
        assert_eq!(comments_count_after_create(0), 1);
        assert_eq!(comments_count_after_create(9), 10);
    }

    #[test]
    fn delete_never_goes_negative() {
        assert_eq!(comments_count_after_delete(1), 0);
        assert_eq!(comments_count_after_delete(0), 0);
        assert_eq!(comments_count_after_delete(5), 4);
    }

    #[test]
    fn recent_activity_window() {
        let now = Utc::now();
        assert!(is_recently_active(now - Duration::days(29), now));
        assert!(!is_recently_active(now - Duration::days(31), now));
    }

    #[test]
    fn next_offset_only_for_full_pages() {
        let now = Utc::now();
        let partial: Vec<_> = (0..3).map(|i| now + Duration::seconds(i)).collect();
        assert_eq!(next_page_offset(&partial), None);

        let full: Vec<_> = (0..COMMENTS_PAGE_SIZE as i64)
            .map(|i| now + Duration::seconds(i))
            .collect();
        assert_eq!(next_page_offset(&full), full.last().copied());
    }
}
