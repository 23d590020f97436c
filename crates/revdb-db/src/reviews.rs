//! Paginated approved reviews for a single business.

use chrono::{DateTime, Utc};
use revdb_search::{Page, ReviewPageQuery, ReviewSort};
use serde::Serialize;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A review joined to its author and optional owner reply.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: i64,
    pub business_id: i64,
    pub rating: i16,
    pub title: Option<String>,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub reply_id: Option<i64>,
    pub reply_content: Option<String>,
    pub reply_created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReply {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The public shape of a review in a review page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: i64,
    pub business_id: i64,
    pub rating: i16,
    pub title: Option<String>,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user: ReviewAuthor,
    pub reply: Option<ReviewReply>,
}

impl From<ReviewRow> for ReviewItem {
    fn from(row: ReviewRow) -> Self {
        let reply = match (row.reply_id, row.reply_content, row.reply_created_at) {
            (Some(id), Some(content), Some(created_at)) => Some(ReviewReply {
                id,
                content,
                created_at,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            business_id: row.business_id,
            rating: row.rating,
            title: row.title,
            content: row.content,
            status: row.status,
            created_at: row.created_at,
            user: ReviewAuthor {
                id: row.user_id,
                name: row.user_name,
                image: row.user_image,
            },
            reply,
        }
    }
}

fn order_clause(sort: ReviewSort) -> &'static str {
    match sort {
        ReviewSort::Newest => "r.created_at DESC, r.id DESC",
        ReviewSort::Oldest => "r.created_at ASC, r.id ASC",
        ReviewSort::Highest => "r.rating DESC, r.created_at DESC, r.id DESC",
        ReviewSort::Lowest => "r.rating ASC, r.created_at DESC, r.id DESC",
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// One page of approved reviews for `business_id`, with the total count of
/// approved reviews matching the rating filter.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if either query fails.
pub async fn list_review_page(
    pool: &PgPool,
    business_id: i64,
    query: &ReviewPageQuery,
) -> Result<Page<ReviewItem>, DbError> {
    let rating = query.rating.map(i16::from);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reviews r \
         WHERE r.business_id = $1 AND r.status = 'APPROVED' \
           AND ($2::SMALLINT IS NULL OR r.rating = $2)",
    )
    .bind(business_id)
    .bind(rating)
    .fetch_one(pool)
    .await?;

    let limit = i64::try_from(query.window.limit()).unwrap_or(i64::MAX);
    let offset = i64::try_from(query.window.offset()).unwrap_or(i64::MAX);

    let rows = sqlx::query_as::<_, ReviewRow>(&format!(
        "SELECT r.id, r.business_id, r.rating, r.title, r.content, r.status, r.created_at, \
                u.id AS user_id, u.name AS user_name, u.image AS user_image, \
                rr.id AS reply_id, rr.content AS reply_content, rr.created_at AS reply_created_at \
         FROM reviews r \
         JOIN users u ON u.id = r.user_id \
         LEFT JOIN review_replies rr ON rr.review_id = r.id \
         WHERE r.business_id = $1 AND r.status = 'APPROVED' \
           AND ($2::SMALLINT IS NULL OR r.rating = $2) \
         ORDER BY {} \
         LIMIT $3 OFFSET $4",
        order_clause(query.sort)
    ))
    .bind(business_id)
    .bind(rating)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let items = rows.into_iter().map(ReviewItem::from).collect();
    Ok(Page::from_window(
        items,
        usize::try_from(total).unwrap_or(0),
        query.window,
    ))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row() -> ReviewRow {
        ReviewRow {
            id: 1,
            business_id: 2,
            rating: 5,
            title: Some("Great".to_string()),
            content: "Fast and friendly".to_string(),
            status: "APPROVED".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            user_id: 9,
            user_name: Some("Ada".to_string()),
            user_image: None,
            reply_id: None,
            reply_content: None,
            reply_created_at: None,
        }
    }

    #[test]
    fn missing_reply_columns_yield_no_reply() {
        let item = ReviewItem::from(row());
        assert!(item.reply.is_none());
        assert_eq!(item.user.id, 9);
    }

    #[test]
    fn reply_is_nested() {
        let mut r = row();
        r.reply_id = Some(4);
        r.reply_content = Some("Thanks!".to_string());
        r.reply_created_at = Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        let json = serde_json::to_value(ReviewItem::from(r)).expect("serialize");
        assert_eq!(json["reply"]["content"], "Thanks!");
        assert_eq!(json["user"]["name"], "Ada");
        assert_eq!(json["businessId"], 2);
    }

    #[test]
    fn rating_sorts_break_ties_newest_first() {
        assert!(order_clause(ReviewSort::Highest).starts_with("r.rating DESC, r.created_at DESC"));
        assert!(order_clause(ReviewSort::Lowest).starts_with("r.rating ASC, r.created_at DESC"));
    }
}
