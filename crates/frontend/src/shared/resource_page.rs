//! Shared list page pattern for remote resources.
//!
//! A page owns the authoritative in-memory list of one resource type and
//! drives it through the API: fetch, create/update via an edit modal,
//! delete via a confirmation modal, and a full re-fetch after every
//! successful mutation. The state lives in [`ResourceState`]; the async
//! operations below mutate it through a [`StateCell`].

use crate::shared::api_client::ApiError;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::state_cell::StateCell;
use async_trait::async_trait;
use leptos::prelude::*;
use std::fmt::Debug;

// ============================================================================
// Resource & API seams
// ============================================================================

/// Entity managed by a resource page
pub trait Resource: Searchable + Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Editable form representation
    type Draft: Clone + PartialEq + Default + Debug + Send + Sync + 'static;

    /// Banner text when the list cannot be fetched
    const LOAD_ERROR: &'static str;
    /// Banner text when create/update fails
    const SAVE_ERROR: &'static str;
    /// Banner text when delete fails
    const DELETE_ERROR: &'static str;

    fn id(&self) -> &str;

    /// Name substituted into the delete confirmation; `None` falls back
    /// to the generic message
    fn display_name(&self) -> Option<String>;

    fn to_draft(&self) -> Self::Draft;
}

pub type Draft<E> = <E as Resource>::Draft;

/// CRUD surface of one REST collection
#[async_trait(?Send)]
pub trait ResourceApi {
    type Entity: Resource;

    async fn fetch_all(&self) -> Result<Vec<Self::Entity>, ApiError>;

    async fn fetch_by_id(&self, id: &str) -> Result<Self::Entity, ApiError>;

    async fn create(&self, draft: &Draft<Self::Entity>) -> Result<(), ApiError>;

    async fn update(&self, id: &str, draft: &Draft<Self::Entity>) -> Result<(), ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

// ============================================================================
// Editor (create / edit / view modal)
// ============================================================================

/// Identity of an editor session. The modal re-seeds its working draft
/// whenever this key changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorKey {
    pub open: bool,
    pub editing: bool,
    pub target_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState<E: Resource> {
    pub open: bool,
    /// `true` for create/edit, `false` for read-only view
    pub editing: bool,
    /// Entity being edited or viewed; `None` when creating
    pub target: Option<E>,
    /// Seed for the modal's working draft. Holds the last submitted draft
    /// after a failed save so the user can retry.
    pub draft: Draft<E>,
}

impl<E: Resource> Default for EditorState<E> {
    fn default() -> Self {
        Self {
            open: false,
            editing: true,
            target: None,
            draft: Default::default(),
        }
    }
}

impl<E: Resource> EditorState<E> {
    pub fn open_create(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, entity: E) {
        self.open_with(entity, true);
    }

    pub fn open_view(&mut self, entity: E) {
        self.open_with(entity, false);
    }

    fn open_with(&mut self, entity: E, editing: bool) {
        self.draft = entity.to_draft();
        self.target = Some(entity);
        self.editing = editing;
        self.open = true;
    }

    /// Close and discard the draft
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target.as_ref().map(Resource::id)
    }

    /// An existing entity shown without edit rights: inputs disabled,
    /// primary action hidden
    pub fn is_view_only(&self) -> bool {
        self.target.is_some() && !self.editing
    }

    /// Id the modal hands to the save callback: only in editing mode
    pub fn submit_id(&self) -> Option<String> {
        if self.editing {
            self.target_id().map(str::to_string)
        } else {
            None
        }
    }

    pub fn sync_key(&self) -> EditorKey {
        EditorKey {
            open: self.open,
            editing: self.editing,
            target_id: self.target_id().map(str::to_string),
        }
    }
}

// ============================================================================
// Page state
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<E: Resource> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub editor: EditorState<E>,
    /// Target of the open delete confirmation
    pub pending_delete: Option<E>,
}

impl<E: Resource> Default for ResourceState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            editor: EditorState::default(),
            pending_delete: None,
        }
    }
}

impl<E: Resource> ResourceState<E> {
    /// Items matching the current search term, in API order
    pub fn visible_items(&self) -> Vec<E> {
        filter_list(&self.items, &self.search)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn open_delete(&mut self, entity: E) {
        self.pending_delete = Some(entity);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn is_delete_open(&self) -> bool {
        self.pending_delete.is_some()
    }
}

/// Page state that embeds a [`ResourceState`] (possibly with extra fields)
pub trait PageState<E: Resource> {
    fn resource(&self) -> &ResourceState<E>;
    fn resource_mut(&mut self) -> &mut ResourceState<E>;
}

impl<E: Resource> PageState<E> for ResourceState<E> {
    fn resource(&self) -> &ResourceState<E> {
        self
    }

    fn resource_mut(&mut self) -> &mut ResourceState<E> {
        self
    }
}

/// Editor slice of a page signal for the modal. Writes to the list, the
/// search or the banners leave it untouched, so the open form keeps its
/// inputs and focus.
pub fn editor_memo<E, S>(state: RwSignal<S>) -> Memo<EditorState<E>>
where
    E: Resource,
    S: PageState<E> + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| s.resource().editor.clone()))
}

// ============================================================================
// Operations
// ============================================================================

/// Mark a list fetch as started
pub fn begin_load<E, S, C>(cell: &C)
where
    E: Resource,
    S: PageState<E>,
    C: StateCell<S>,
{
    cell.update_state(|s| s.resource_mut().loading = true);
}

/// Apply the outcome of a list fetch. On failure the previous list stays
/// on screen. Clears the loading flag either way.
pub fn finish_load<E, S, C>(cell: &C, result: Result<Vec<E>, ApiError>)
where
    E: Resource,
    S: PageState<E>,
    C: StateCell<S>,
{
    cell.update_state(|s| {
        let state = s.resource_mut();
        match result {
            Ok(items) => {
                log::debug!("loaded {} items", items.len());
                state.items = items;
                state.error = None;
            }
            Err(e) => {
                log::error!("list fetch failed: {e}");
                state.error = Some(E::LOAD_ERROR.to_string());
            }
        }
        state.loading = false;
    });
}

/// Re-fetch the whole list
pub async fn refresh<A, S, C>(api: &A, cell: &C)
where
    A: ResourceApi + ?Sized,
    S: PageState<A::Entity>,
    C: StateCell<S>,
{
    begin_load::<A::Entity, S, C>(cell);
    let result = api.fetch_all().await;
    finish_load::<A::Entity, S, C>(cell, result);
}

/// Create (`id == None`) or update the entity. On success the editor is
/// closed and the list re-fetched; on failure the editor stays open with
/// the submitted draft preserved.
pub async fn save<A, S, C>(
    api: &A,
    cell: &C,
    draft: Draft<A::Entity>,
    id: Option<String>,
) -> Result<(), ApiError>
where
    A: ResourceApi + ?Sized,
    S: PageState<A::Entity>,
    C: StateCell<S>,
{
    cell.update_state(|s| s.resource_mut().editor.draft = draft.clone());

    let result = match id.as_deref() {
        Some(id) => api.update(id, &draft).await,
        None => api.create(&draft).await,
    };

    match result {
        Ok(()) => {
            cell.update_state(|s| s.resource_mut().editor.close());
            refresh::<A, S, C>(api, cell).await;
            Ok(())
        }
        Err(e) => {
            log::error!("save failed (id: {id:?}): {e}");
            cell.update_state(|s| {
                s.resource_mut().error = Some(<A::Entity as Resource>::SAVE_ERROR.to_string())
            });
            Err(e)
        }
    }
}

/// Delete the entity held by the confirmation modal.
///
/// The modal closes whether or not the call succeeds. Does nothing when no
/// confirmation is open, so a second click cannot issue a second delete.
pub async fn confirm_delete<A, S, C>(api: &A, cell: &C) -> Result<(), ApiError>
where
    A: ResourceApi + ?Sized,
    S: PageState<A::Entity>,
    C: StateCell<S>,
{
    let mut target = None;
    cell.update_state(|s| target = s.resource_mut().pending_delete.take());
    let Some(target) = target else {
        return Ok(());
    };

    match api.delete(target.id()).await {
        Ok(()) => {
            refresh::<A, S, C>(api, cell).await;
            Ok(())
        }
        Err(e) => {
            log::error!("delete of {} failed: {e}", target.id());
            cell.update_state(|s| {
                s.resource_mut().error = Some(<A::Entity as Resource>::DELETE_ERROR.to_string())
            });
            Err(e)
        }
    }
}

// ============================================================================
// In-memory API for tests
// ============================================================================
