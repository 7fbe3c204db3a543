//! Browser-facing pages and form posts

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tracing::warn;

use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::types::{TieForm, VoteForm};
use crate::web::render;

/// Comparison page, or the degraded message when no pair can be drawn
pub async fn index(State(state): State<Arc<WebServerState>>) -> Html<String> {
    match state.arena.present_pair().await {
        Ok((left, right)) => Html(render::comparison_page(&left, &right)),
        Err(e) => {
            warn!(error = %e, "Cannot present a pair");
            Html(render::degraded_page(render::NOT_ENOUGH_ITEMS))
        }
    }
}

pub async fn submit_vote(
    State(state): State<Arc<WebServerState>>,
    Form(form): Form<VoteForm>,
) -> WebServerResult<Redirect> {
    state.arena.submit_win(&form.winner, &form.loser).await?;
    Ok(Redirect::to("/"))
}

pub async fn submit_tie(
    State(state): State<Arc<WebServerState>>,
    Form(form): Form<TieForm>,
) -> WebServerResult<Redirect> {
    state.arena.submit_tie(&form.id1, &form.id2).await?;
    Ok(Redirect::to("/"))
}

pub async fn admin(State(state): State<Arc<WebServerState>>) -> Html<String> {
    let report = state.arena.report().await;
    Html(render::report_page(&report))
}
