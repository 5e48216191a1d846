use crate::calendar::Month;
use crate::errors::AppError;
use crate::meta::PageMeta;
use crate::models::{DayQuery, SpecialDayRecord};
use crate::navigator::Cursor;
use crate::state::AppState;
use crate::ui::{self, PageMode};
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

/// Home page: today's special day, no day navigation.
pub async fn today_page(State(state): State<AppState>) -> Html<String> {
    let cursor = Cursor::today();
    let url = format!("{}/", state.site_url);

    match cursor.resolve(&state.dataset) {
        Some(record) => {
            let meta = PageMeta::for_record(record, &url);
            Html(ui::render_day(PageMode::Today, record, cursor, &meta))
        }
        None => {
            let meta = PageMeta::not_found(cursor.month(), cursor.day(), &url);
            Html(ui::render_not_found(PageMode::Today, cursor, &meta))
        }
    }
}

/// Browse page. Valid `month`/`day` parameters seed the cursor; anything
/// else falls back to today. The address bar always reflects the rendered
/// cursor: missing or clamped parameters redirect to the canonical URL.
pub async fn day_page(State(state): State<AppState>, Query(query): Query<DayQuery>) -> Response {
    let requested = parse_day_query(&query);
    let cursor = match requested {
        Some((month, day)) => Cursor::new(month, day),
        None => Cursor::today(),
    };

    let canonical =
        requested.is_some_and(|(month, day)| month == cursor.month() && day == cursor.day());
    if !canonical {
        return Redirect::to(&format!("/day?{}", cursor.query_string())).into_response();
    }

    let url = format!("{}/day?{}", state.site_url, cursor.query_string());
    match cursor.resolve(&state.dataset) {
        Some(record) => {
            let meta = PageMeta::for_record(record, &url);
            Html(ui::render_day(PageMode::Browse, record, cursor, &meta)).into_response()
        }
        None => {
            let meta = PageMeta::not_found(cursor.month(), cursor.day(), &url);
            Html(ui::render_not_found(PageMode::Browse, cursor, &meta)).into_response()
        }
    }
}

pub async fn api_today(
    State(state): State<AppState>,
) -> Result<Json<SpecialDayRecord>, AppError> {
    lookup(&state, Cursor::today())
}

pub async fn api_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<SpecialDayRecord>, AppError> {
    let month_name = query
        .month
        .as_deref()
        .ok_or_else(|| AppError::bad_request("month and day are required"))?;
    let month = Month::from_name(month_name)
        .ok_or_else(|| AppError::bad_request("month must be a canonical month name"))?;
    let day = query
        .day
        .as_deref()
        .and_then(|value| value.parse::<u32>().ok())
        .ok_or_else(|| AppError::bad_request("day must be an integer"))?;

    lookup(&state, Cursor::new(month, day))
}

fn lookup(state: &AppState, cursor: Cursor) -> Result<Json<SpecialDayRecord>, AppError> {
    cursor
        .resolve(&state.dataset)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "no special day for {} {}",
                cursor.month(),
                cursor.day()
            ))
        })
}

fn parse_day_query(query: &DayQuery) -> Option<(Month, u32)> {
    let month = Month::from_name(query.month.as_deref()?)?;
    let day = query.day.as_deref()?.parse::<u32>().ok()?;
    Some((month, day))
}
