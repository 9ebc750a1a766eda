// src/models/request.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::utils::form::{blank_as_default, blank_as_none};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Body of the batch delete endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdsReq {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// Query parameters for listing questions.
///
/// Kept flat (no `#[serde(flatten)]`) so numeric parameters still parse from
/// the query string. Blank values (`categoryId=`) count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BaikeSearch {
    /// 1-based page number.
    #[serde(deserialize_with = "blank_as_default")]
    pub page: i64,
    #[serde(deserialize_with = "blank_as_default")]
    pub page_size: i64,

    /// Matched against the question text and all four options.
    pub keyword: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub category_id: Option<i64>,

    /// Substring match on the question text.
    pub question: Option<String>,

    /// Exact match on the answer.
    pub answer: Option<String>,

    /// Only applied together with `endCreatedAt`.
    #[serde(deserialize_with = "blank_as_none")]
    pub start_created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "blank_as_none")]
    pub end_created_at: Option<DateTime<Utc>>,
}

impl BaikeSearch {
    /// Clamps page and page size into the range the list query accepts.
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = 1;
        }
        if self.page_size < 1 {
            self.page_size = DEFAULT_PAGE_SIZE;
        } else if self.page_size > MAX_PAGE_SIZE {
            self.page_size = MAX_PAGE_SIZE;
        }
        self
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Saturates instead of overflowing for absurd page numbers; such a page
    /// is simply empty.
    pub fn offset(&self) -> i64 {
        self.page_size.saturating_mul(self.page.saturating_sub(1))
    }

    pub fn keyword(&self) -> Option<&str> {
        non_blank(&self.keyword)
    }

    pub fn question(&self) -> Option<&str> {
        non_blank(&self.question)
    }

    pub fn answer(&self) -> Option<&str> {
        non_blank(&self.answer)
    }

    /// The creation-time window, present only when both ends are given.
    pub fn created_between(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.start_created_at.zip(self.end_created_at)
    }
}

// `?question=` arrives as Some(""), which means no filter.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Paginated list payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub list: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
