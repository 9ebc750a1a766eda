// src/handlers/baike.rs

use axum::extract::State;
use serde_json::json;

use crate::{
    error::AppError,
    models::{
        baike::Baike,
        request::{BaikeSearch, IdsReq, PageResult},
    },
    response::Envelope,
    state::DynBaikeService,
    utils::extract::{BindJson, BindQuery},
};

/// Creates a question.
///
/// All seven content fields must be filled in; the id and timestamps in the
/// body are ignored.
#[utoipa::path(
    post,
    path = "/baike/createBaike",
    tag = "Baike",
    request_body = Baike,
    responses((status = 200, description = "创建Baike", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn create_baike(
    State(service): State<DynBaikeService>,
    BindJson(baike): BindJson<Baike>,
) -> Result<Envelope, AppError> {
    baike.verify()?;

    service
        .create_baike(baike)
        .await
        .map_err(|e| AppError::service("创建失败", e))?;

    Ok(Envelope::ok_with_message("创建成功"))
}

/// Deletes the question whose `ID` is in the body.
#[utoipa::path(
    delete,
    path = "/baike/deleteBaike",
    tag = "Baike",
    request_body = Baike,
    responses((status = 200, description = "删除Baike", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn delete_baike(
    State(service): State<DynBaikeService>,
    BindJson(baike): BindJson<Baike>,
) -> Result<Envelope, AppError> {
    service
        .delete_baike(baike)
        .await
        .map_err(|e| AppError::service("删除失败", e))?;

    Ok(Envelope::ok_with_message("删除成功"))
}

/// Deletes every question listed in `ids`; unknown ids are skipped.
#[utoipa::path(
    delete,
    path = "/baike/deleteBaikeByIds",
    tag = "Baike",
    request_body = IdsReq,
    responses((status = 200, description = "批量删除Baike", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn delete_baike_by_ids(
    State(service): State<DynBaikeService>,
    BindJson(ids): BindJson<IdsReq>,
) -> Result<Envelope, AppError> {
    service
        .delete_baike_by_ids(ids)
        .await
        .map_err(|e| AppError::service("批量删除失败", e))?;

    Ok(Envelope::ok_with_message("批量删除成功"))
}

/// Overwrites the question whose `ID` is in the body.
/// Same field rules as create.
#[utoipa::path(
    put,
    path = "/baike/updateBaike",
    tag = "Baike",
    request_body = Baike,
    responses((status = 200, description = "更新Baike", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn update_baike(
    State(service): State<DynBaikeService>,
    BindJson(baike): BindJson<Baike>,
) -> Result<Envelope, AppError> {
    baike.verify()?;

    service
        .update_baike(baike)
        .await
        .map_err(|e| AppError::service("更新失败", e))?;

    Ok(Envelope::ok_with_message("更新成功"))
}

/// Fetches one question by the `ID` query parameter.
/// The record is returned under `data.rebaike`.
#[utoipa::path(
    get,
    path = "/baike/findBaike",
    tag = "Baike",
    params(("ID" = i64, Query, description = "Baike id")),
    responses((status = 200, description = "用id查询Baike", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn find_baike(
    State(service): State<DynBaikeService>,
    BindQuery(baike): BindQuery<Baike>,
) -> Result<Envelope, AppError> {
    let rebaike = service
        .get_baike(baike.id)
        .await
        .map_err(|e| AppError::service("查询失败", e))?;

    Ok(Envelope::ok_with_data(json!({ "rebaike": rebaike })))
}

/// Lists questions page by page.
///
/// Page and page size are clamped before the query runs. The response echoes
/// the clamped values, not the raw request ones: `page=0&pageSize=1000` comes
/// back as page 1 with page size 100.
#[utoipa::path(
    get,
    path = "/baike/getBaikeList",
    tag = "Baike",
    params(BaikeSearch),
    responses((status = 200, description = "分页获取Baike列表", body = Envelope)),
    security(("ApiKeyAuth" = []))
)]
pub async fn get_baike_list(
    State(service): State<DynBaikeService>,
    BindQuery(search): BindQuery<BaikeSearch>,
) -> Result<Envelope, AppError> {
    let search = search.normalized();

    let (list, total) = service
        .get_baike_info_list(&search)
        .await
        .map_err(|e| AppError::service("获取失败", e))?;

    let page = PageResult {
        list,
        total,
        page: search.page,
        page_size: search.page_size,
    };

    Ok(Envelope::ok_with_detailed(json!(page), "获取成功"))
}
