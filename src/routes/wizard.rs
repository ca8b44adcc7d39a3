//! Wizard session route handlers
//!
//! One generic set of handlers serves every [`WizardFlow`]; each flow gets
//! its own [`SessionStore`] as router state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::cache::{SessionStore, SharedWizard};
use crate::error::{AppError, Result};
use crate::wizard::{FieldError, SubmissionReceipt, Wizard, WizardFlow};

/// Snapshot of a wizard session for the client
#[derive(Serialize)]
#[serde(bound = "")]
pub struct WizardView<F: WizardFlow> {
    pub id: Uuid,
    pub flow: &'static str,
    /// Current step; null once submitted.
    pub step: Option<F::Step>,
    pub submitted: bool,
    pub step_index: usize,
    pub furthest_index: usize,
    pub steps: &'static [F::Step],
    pub can_advance: bool,
    pub can_submit: bool,
    pub errors: Vec<FieldError>,
    pub draft: F::Draft,
    pub preview: Option<F::Preview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
}

impl<F: WizardFlow> WizardView<F> {
    pub fn new(id: Uuid, wizard: &Wizard<F>) -> Self {
        Self {
            id,
            flow: F::NAME,
            step: wizard.current_step(),
            submitted: wizard.is_submitted(),
            step_index: wizard.step_index(),
            furthest_index: wizard.furthest_index(),
            steps: F::STEPS,
            can_advance: wizard.can_advance(),
            can_submit: wizard.can_submit(),
            errors: wizard.errors(),
            draft: wizard.draft().clone(),
            preview: wizard.preview(),
            receipt: wizard.receipt().cloned(),
        }
    }
}

/// Routes for one flow, meant to be nested under a prefix.
pub fn router<F, S>(store: SessionStore<F>) -> Router<S>
where
    F: WizardFlow,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(start::<F>))
        .route("/:id", get(show::<F>).delete(cancel::<F>))
        .route("/:id/draft", put(update_draft::<F>))
        .route("/:id/next", post(next::<F>))
        .route("/:id/back", post(back::<F>))
        .route("/:id/steps/:index", post(go_to::<F>))
        .route("/:id/submit", post(submit::<F>))
        .with_state(store)
}

async fn session<F: WizardFlow>(store: &SessionStore<F>, id: Uuid) -> Result<SharedWizard<F>> {
    match store.get(&id).await {
        Some(wizard) => Ok(wizard),
        None => {
            tracing::debug!("Cache MISS for {} session: {}", F::NAME, id);
            Err(AppError::NotFound(format!("{} session {}", F::NAME, id)))
        }
    }
}

/// POST / - open a new session
async fn start<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
) -> (StatusCode, Json<WizardView<F>>) {
    let (id, wizard) = store.start().await;
    tracing::info!(flow = F::NAME, %id, "wizard session started");
    let view = WizardView::new(id, &*wizard.lock().await);
    (StatusCode::CREATED, Json(view))
}

/// GET /:id
async fn show<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let wizard = wizard.lock().await;
    Ok(Json(WizardView::new(id, &wizard)))
}

/// DELETE /:id - abandon a session
async fn cancel<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    session(&store, id).await?;
    store.remove(&id).await;
    tracing::info!(flow = F::NAME, %id, "wizard session cancelled");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /:id/draft - replace the form data
async fn update_draft<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<F::Draft>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let mut wizard = wizard.lock().await;
    wizard.update_draft(draft)?;
    Ok(Json(WizardView::new(id, &wizard)))
}

/// POST /:id/next
async fn next<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let mut wizard = wizard.lock().await;
    wizard.advance()?;
    Ok(Json(WizardView::new(id, &wizard)))
}

/// POST /:id/back
async fn back<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let mut wizard = wizard.lock().await;
    wizard.back()?;
    Ok(Json(WizardView::new(id, &wizard)))
}

/// POST /:id/steps/:index - return to a step already reached
async fn go_to<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let mut wizard = wizard.lock().await;
    wizard.go_to(index)?;
    Ok(Json(WizardView::new(id, &wizard)))
}

/// POST /:id/submit
///
/// Nothing leaves the process; the submission is only recorded on the session.
async fn submit<F: WizardFlow>(
    State(store): State<SessionStore<F>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView<F>>> {
    let wizard = session(&store, id).await?;
    let mut wizard = wizard.lock().await;
    let reference = wizard.submit()?.reference;
    tracing::info!(flow = F::NAME, %id, %reference, "wizard submitted");
    Ok(Json(WizardView::new(id, &wizard)))
}
