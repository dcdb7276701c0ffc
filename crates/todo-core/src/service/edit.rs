//! Inline title editing
//!
//! A blank draft deletes the todo, an unchanged draft is a no-op,
//! anything else renames it.

use super::TodoService;
use crate::api::TodoApi;
use crate::error::TodoResult;
use crate::models::Todo;

/// What committing a draft will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPlan {
    Keep,
    Rename(String),
    Delete,
}

impl EditPlan {
    pub fn for_draft(todo: &Todo, draft: &str) -> Self {
        let title = draft.trim();
        if title.is_empty() {
            EditPlan::Delete
        } else if title == todo.title {
            EditPlan::Keep
        } else {
            EditPlan::Rename(title.to_string())
        }
    }
}

/// What committing a draft did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Unchanged,
    Renamed(Todo),
    Deleted,
}

/// Per-item editor state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleEditor {
    editing: bool,
    draft: String,
}

impl TitleEditor {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Open the editor prefilled with the current title
    pub fn begin(&mut self, todo: &Todo) {
        self.editing = true;
        self.draft = todo.title.clone();
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Escape: discard the draft, no request
    pub fn cancel(&mut self) {
        self.editing = false;
        self.draft.clear();
    }

    /// Close on success, stay open on failure; returns whether it closed
    pub fn settle(&mut self, result: &TodoResult<EditAction>) -> bool {
        if result.is_ok() {
            self.editing = false;
            self.draft.clear();
        }
        !self.editing
    }
}

impl<A: TodoApi> TodoService<A> {
    pub async fn commit_edit(&self, todo: &Todo, draft: &str) -> TodoResult<EditAction> {
        match EditPlan::for_draft(todo, draft) {
            EditPlan::Keep => Ok(EditAction::Unchanged),
            EditPlan::Delete => {
                self.delete_todo(todo.id).await?;
                Ok(EditAction::Deleted)
            }
            EditPlan::Rename(title) => {
                let changed = self.change_todo(todo.with_title(title)).await?;
                Ok(EditAction::Renamed(changed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, TodoError};

    fn todo() -> Todo {
        Todo { id: 4, user_id: 1, title: "Buy milk".to_string(), completed: false }
    }

    #[test]
    fn test_plan_for_draft() {
        assert_eq!(EditPlan::for_draft(&todo(), "   "), EditPlan::Delete);
        assert_eq!(EditPlan::for_draft(&todo(), ""), EditPlan::Delete);
        assert_eq!(EditPlan::for_draft(&todo(), "  Buy milk "), EditPlan::Keep);
        assert_eq!(
            EditPlan::for_draft(&todo(), " Buy bread "),
            EditPlan::Rename("Buy bread".to_string())
        );
    }

    #[test]
    fn test_editor_lifecycle() {
        let mut editor = TitleEditor::default();
        assert!(!editor.is_editing());

        editor.begin(&todo());
        assert!(editor.is_editing());
        assert_eq!(editor.draft(), "Buy milk");

        editor.set_draft("Buy bread");
        let failed: TodoResult<EditAction> = Err(TodoError::Network(NetworkError::Status(500)));
        assert!(!editor.settle(&failed));
        assert!(editor.is_editing());
        assert_eq!(editor.draft(), "Buy bread");

        assert!(editor.settle(&Ok(EditAction::Unchanged)));
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = TitleEditor::default();
        editor.begin(&todo());
        editor.set_draft("something else");
        editor.cancel();

        assert!(!editor.is_editing());
        assert!(editor.draft().is_empty());
    }
}
