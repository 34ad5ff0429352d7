//! Board CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    BoardListResponse, BoardResponse, CreateBoardRequest, PageMeta, PageParams,
    UpdateBoardRequest,
};
use crate::app_state::AppState;
use crate::error::{BoardError, ErrorResponse};

/// `POST /boards` — Create a new board.
///
/// # Errors
///
/// Returns [`BoardError::Validation`] when a field is blank.
#[utoipa::path(
    post,
    path = "/api/v1/boards",
    tag = "Boards",
    summary = "Create a board",
    description = "Creates a board from title, content, and writer. The server assigns the identity and both audit timestamps.",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = BoardResponse),
        (status = 400, description = "Blank or missing field", body = ErrorResponse),
    )
)]
pub async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let board = state
        .board_service
        .create_board(&req.title, &req.content, &req.writer)
        .await?;

    Ok((StatusCode::CREATED, Json(BoardResponse::from(board))))
}

/// `GET /boards` — List boards with paging and sorting.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSortField`] for an unknown sort column.
#[utoipa::path(
    get,
    path = "/api/v1/boards",
    tag = "Boards",
    summary = "List boards",
    description = "Returns one page of boards ordered by the requested field. Page index is zero-based; size is clamped to the configured maximum.",
    params(PageParams),
    responses(
        (status = 200, description = "Paginated board list", body = BoardListResponse),
        (status = 400, description = "Bad paging parameters", body = ErrorResponse),
    )
)]
pub async fn list_boards(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, BoardError> {
    let request =
        params.into_request(state.config.default_page_size, state.config.max_page_size)?;
    let page = state.board_service.list_boards(&request).await?;

    let pagination = PageMeta::from(&page);
    let data = page.into_content().into_iter().map(BoardResponse::from).collect();

    Ok(Json(BoardListResponse { data, pagination }))
}

/// `GET /boards/:bno` — Get a single board.
///
/// # Errors
///
/// Returns [`BoardError::BoardNotFound`] if the board does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/boards/{bno}",
    tag = "Boards",
    summary = "Get a board",
    description = "Returns the board stored under the given identity.",
    params(
        ("bno" = i64, Path, description = "Board identity"),
    ),
    responses(
        (status = 200, description = "Board details", body = BoardResponse),
        (status = 404, description = "Board not found", body = ErrorResponse),
    )
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(bno): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
    let board = state.board_service.get_board(bno).await?;
    Ok(Json(BoardResponse::from(board)))
}

/// `PUT /boards/:bno` — Replace title and content.
///
/// # Errors
///
/// Returns [`BoardError::BoardNotFound`] if the board does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/boards/{bno}",
    tag = "Boards",
    summary = "Update a board",
    description = "Replaces title and content of an existing board. Writer, identity, and creation timestamp are unchanged; the modification timestamp is refreshed.",
    params(
        ("bno" = i64, Path, description = "Board identity"),
    ),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Updated board", body = BoardResponse),
        (status = 404, description = "Board not found", body = ErrorResponse),
    )
)]
pub async fn update_board(
    State(state): State<AppState>,
    Path(bno): Path<i64>,
    Json(req): Json<UpdateBoardRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let board = state
        .board_service
        .update_board(bno, &req.title, &req.content)
        .await?;
    Ok(Json(BoardResponse::from(board)))
}

/// `DELETE /boards/:bno` — Remove a board.
///
/// # Errors
///
/// Returns [`BoardError::Storage`] only on backend failure; deleting an
/// absent identity still responds 204.
#[utoipa::path(
    delete,
    path = "/api/v1/boards/{bno}",
    tag = "Boards",
    summary = "Delete a board",
    description = "Removes the board permanently. Idempotent: repeating the delete is not an error.",
    params(
        ("bno" = i64, Path, description = "Board identity"),
    ),
    responses(
        (status = 204, description = "Board deleted"),
    )
)]
pub async fn delete_board(
    State(state): State<AppState>,
    Path(bno): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
    state.board_service.delete_board(bno).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Board management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/boards", post(create_board).get(list_boards))
        .route(
            "/boards/{bno}",
            get(get_board).put(update_board).delete(delete_board),
        )
}
