use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::story::{Story, StoryContent, StoryType, Visibility};
use crate::store::traits::DataStore;

/// Input for [`StoryService::create`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDraft {
    pub title: String,
    pub content: StoryContent,
    pub story_type: StoryType,
    pub visibility: Visibility,
}

/// Creates and reads stories.
///
/// Creation enforces required-field presence only, matching the entry form:
/// no dedup, no content validation beyond a non-empty title and description.
pub struct StoryService;

impl StoryService {
    pub fn new() -> Self {
        Self
    }

    /// Create a story for a user. Returns the generated id.
    pub async fn create(
        &self,
        store: &dyn DataStore,
        user_id: Uuid,
        draft: StoryDraft,
    ) -> Result<Uuid, CoreError> {
        if draft.title.trim().is_empty() {
            return Err(CoreError::ValidationError("Story title is required".into()));
        }
        if draft.content.description.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Story description is required".into(),
            ));
        }

        let story = Story::new(
            user_id,
            draft.title,
            draft.content,
            draft.story_type,
            draft.visibility,
        );
        let id = story.id;
        store.insert_story(story).await?;
        Ok(id)
    }

    /// All of a user's stories, newest first.
    pub async fn list(&self, store: &dyn DataStore, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        store.stories_newest_first(user_id).await
    }

    /// A single story by id.
    pub async fn get(&self, store: &dyn DataStore, story_id: Uuid) -> Result<Story, CoreError> {
        store
            .story(story_id)
            .await?
            .ok_or_else(|| CoreError::StoryNotFound(story_id.to_string()))
    }
}

impl Default for StoryService {
    fn default() -> Self {
        Self::new()
    }
}
