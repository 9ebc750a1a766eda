// src/models/baike.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppError,
    utils::{
        form::{blank_as_default, blank_as_none},
        verify::first_violation,
    },
};

/// Represents the 'baike' table: one multiple-choice question.
///
/// Every field falls back to its zero value when missing from the payload,
/// so the same type binds create/update bodies, delete bodies (only `ID`
/// matters) and the `findBaike` query string.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Baike {
    #[serde(rename = "ID", deserialize_with = "blank_as_default")]
    pub id: i64,

    #[serde(rename = "CreatedAt", deserialize_with = "blank_as_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "UpdatedAt", deserialize_with = "blank_as_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Category the question belongs to. Absent, blank and `0` are all empty.
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "CategoryId值不能为空"),
        range(min = 1, message = "CategoryId值不能为空")
    )]
    pub category_id: Option<i64>,

    #[validate(length(min = 1, message = "Question值不能为空"))]
    pub question: String,

    #[validate(length(min = 1, message = "OptionA值不能为空"))]
    pub option_a: String,

    #[validate(length(min = 1, message = "OptionB值不能为空"))]
    pub option_b: String,

    #[validate(length(min = 1, message = "OptionC值不能为空"))]
    pub option_c: String,

    #[validate(length(min = 1, message = "OptionD值不能为空"))]
    pub option_d: String,

    /// Expected to name one of the options, but any non-empty text is accepted here.
    #[validate(length(min = 1, message = "Answer值不能为空"))]
    pub answer: String,
}

impl Baike {
    /// Fields that must be non-empty on create and update, in reporting order.
    pub const REQUIRED_FIELDS: [&'static str; 7] = [
        "category_id",
        "question",
        "option_a",
        "option_b",
        "option_c",
        "option_d",
        "answer",
    ];

    /// Runs the required-field rules and reports the first violation.
    pub fn verify(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| AppError::Validation(first_violation(&errors, &Self::REQUIRED_FIELDS)))
    }
}
