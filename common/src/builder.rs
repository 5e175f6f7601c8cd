//! Workflow state of the meme builder page.
//!
//! `MemeBuilder` is a plain state machine: the component feeds it user events
//! and the results of remote calls, and it hands back the requests the
//! component should send. Feedback for the user goes through any [`Notify`]
//! sink, so the page and the tests drive it the same way.
//!
//! Flow: catalog loaded -> template selected (preview requested) -> boxes
//! edited -> submitted -> generated image shown -> reset.

use crate::error::ApiError;
use crate::model::notification::NotificationRequest;
use crate::model::template::MemeTemplate;
use crate::notifications::Notify;
use crate::requests::CaptionRequest;

const LOAD_ERROR: &str = "Load error";
const CATALOG_FAILED: &str = "Something went wrong getting the memes template";
const PREVIEW_FAILED: &str = "Could not load preview";
const SERVER_ERROR: &str = "Server error";
const SUBMIT_FAILED: &str = "Something went generating your meme";
const GENERATED: &str = "Meme generated!";
const GENERATED_DESCRIPTION: &str = "Meme successfully generated";

/// Preview call to issue after a selection, tagged with the selection it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub generation: u64,
    pub caption: CaptionRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemeBuilder {
    templates: Vec<MemeTemplate>,
    selected: Option<MemeTemplate>,
    draft: Vec<String>,
    preview: Option<String>,
    generated: Option<String>,
    loading_preview: bool,
    /// Bumped on every selection and reset. Preview responses carrying an
    /// older value are dropped.
    generation: u64,
}

impl MemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn templates(&self) -> &[MemeTemplate] {
        &self.templates
    }

    pub fn selected(&self) -> Option<&MemeTemplate> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, template_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|t| t.id == template_id)
    }

    pub fn draft(&self) -> &[String] {
        &self.draft
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    pub fn is_loading_preview(&self) -> bool {
        self.loading_preview
    }

    /// The picker (and the caption form) is hidden while a generated image is shown.
    pub fn is_picker_visible(&self) -> bool {
        self.generated.is_none()
    }

    /// Placeholder labels for the inputs of the selected template.
    pub fn placeholders(&self) -> Vec<String> {
        self.selected
            .as_ref()
            .map(MemeTemplate::placeholders)
            .unwrap_or_default()
    }

    pub fn catalog_loaded<N: Notify>(
        &mut self,
        result: Result<Vec<MemeTemplate>, ApiError>,
        notifier: &mut N,
    ) {
        match result {
            Ok(templates) => self.templates = templates,
            Err(_) => {
                self.templates.clear();
                notifier.notify(NotificationRequest::error(LOAD_ERROR, CATALOG_FAILED));
            }
        }
    }

    /// Selects `template`, discarding the draft and any preview, and returns
    /// the preview call filled with placeholder texts.
    pub fn select_template(&mut self, template: MemeTemplate) -> PreviewRequest {
        self.draft = vec![String::new(); template.box_count as usize];
        self.preview = None;
        self.loading_preview = true;
        self.generation += 1;

        let caption = CaptionRequest {
            template_id: template.id.clone(),
            boxes: template.placeholders(),
        };
        self.selected = Some(template);

        PreviewRequest {
            generation: self.generation,
            caption,
        }
    }

    /// Applies the outcome of a preview call. Returns `false` when the
    /// response belongs to a superseded selection and was ignored.
    pub fn preview_loaded<N: Notify>(
        &mut self,
        generation: u64,
        result: Result<String, ApiError>,
        notifier: &mut N,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading_preview = false;
        match result {
            Ok(url) => self.preview = Some(url),
            Err(_) => {
                notifier.notify(NotificationRequest::error(LOAD_ERROR, PREVIEW_FAILED));
            }
        }
        true
    }

    /// Sets the text of caption box `index`. Indices outside the draft are ignored.
    pub fn edit_box(&mut self, index: usize, text: String) -> bool {
        match self.draft.get_mut(index) {
            Some(slot) => {
                *slot = text;
                true
            }
            None => false,
        }
    }

    /// Request for the final image, or `None` while nothing is selected.
    pub fn submission(&self) -> Option<CaptionRequest> {
        self.selected.as_ref().map(|template| CaptionRequest {
            template_id: template.id.clone(),
            boxes: self.draft.clone(),
        })
    }

    pub fn submission_finished<N: Notify>(
        &mut self,
        result: Result<String, ApiError>,
        notifier: &mut N,
    ) {
        match result {
            Ok(url) => {
                self.generated = Some(url);
                notifier.notify(NotificationRequest::success(GENERATED, GENERATED_DESCRIPTION));
            }
            Err(_) => {
                notifier.notify(NotificationRequest::error(SERVER_ERROR, SUBMIT_FAILED));
            }
        }
    }

    /// Back to the picker: clears the generated image, draft, selection and preview.
    pub fn reset(&mut self) {
        self.generated = None;
        self.draft.clear();
        self.selected = None;
        self.preview = None;
        self.loading_preview = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::Severity;
    use crate::notifications::NotificationStore;

    fn template(id: &str, box_count: u32) -> MemeTemplate {
        MemeTemplate::new(id, format!("Template {}", id), format!("http://x/{}.jpg", id), box_count)
    }

    fn severities(store: &NotificationStore) -> Vec<Severity> {
        store.iter().map(|n| n.severity).collect()
    }

    #[test]
    fn catalog_success_populates_templates() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();

        builder.catalog_loaded(Ok(vec![template("1", 2), template("2", 3)]), &mut store);

        assert_eq!(builder.templates().len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn catalog_failure_notifies_once_and_leaves_list_empty() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();

        builder.catalog_loaded(Err(ApiError::Status(500)), &mut store);

        assert!(builder.templates().is_empty());
        assert_eq!(severities(&store), vec![Severity::Error]);
        let notification = &store.as_slice()[0];
        assert_eq!(notification.title, "Load error");
        assert_eq!(notification.description.as_deref(), Some(CATALOG_FAILED));
    }

    #[test]
    fn selecting_clears_draft_and_preview_before_requesting() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let first = builder.select_template(template("1", 2));
        builder.preview_loaded(first.generation, Ok("http://x/preview1.png".to_string()), &mut store);
        builder.edit_box(0, "old text".to_string());

        let second = builder.select_template(template("2", 3));

        assert_eq!(builder.draft(), &["", "", ""]);
        assert_eq!(builder.preview(), None);
        assert!(builder.is_loading_preview());
        assert!(builder.is_selected("2"));
        assert_eq!(second.caption.template_id, "2");
        assert_eq!(second.caption.boxes, vec!["TEXT #1", "TEXT #2", "TEXT #3"]);
    }

    #[test]
    fn placeholders_match_box_count() {
        for box_count in 0..6 {
            let mut builder = MemeBuilder::new();
            builder.select_template(template("t", box_count));
            let placeholders = builder.placeholders();
            assert_eq!(placeholders.len(), box_count as usize);
            assert_eq!(builder.draft().len(), box_count as usize);
            for (index, label) in placeholders.iter().enumerate() {
                assert_eq!(label, &format!("TEXT #{}", index + 1));
            }
        }
    }

    #[test]
    fn preview_success_stores_url_and_stops_loading() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let request = builder.select_template(template("1", 1));

        assert!(builder.preview_loaded(request.generation, Ok("http://x/p.png".to_string()), &mut store));

        assert_eq!(builder.preview(), Some("http://x/p.png"));
        assert!(!builder.is_loading_preview());
        assert!(store.is_empty());
    }

    #[test]
    fn preview_failure_notifies_and_stops_loading() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let request = builder.select_template(template("1", 2));

        builder.preview_loaded(request.generation, Err(ApiError::Network("offline".to_string())), &mut store);

        assert!(!builder.is_loading_preview());
        assert_eq!(builder.preview(), None);
        assert_eq!(severities(&store), vec![Severity::Error]);
        assert_eq!(store.as_slice()[0].description.as_deref(), Some(PREVIEW_FAILED));
    }

    #[test]
    fn stale_preview_response_is_ignored() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let first = builder.select_template(template("1", 1));
        let second = builder.select_template(template("2", 1));

        assert!(builder.preview_loaded(second.generation, Ok("http://x/2.png".to_string()), &mut store));
        assert!(!builder.preview_loaded(first.generation, Ok("http://x/1.png".to_string()), &mut store));
        assert!(!builder.preview_loaded(first.generation, Err(ApiError::Status(502)), &mut store));

        assert_eq!(builder.preview(), Some("http://x/2.png"));
        assert!(store.is_empty());
    }

    #[test]
    fn stale_response_keeps_spinner_for_current_selection() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let first = builder.select_template(template("1", 1));
        builder.select_template(template("2", 1));

        builder.preview_loaded(first.generation, Ok("http://x/1.png".to_string()), &mut store);

        assert!(builder.is_loading_preview());
        assert_eq!(builder.preview(), None);
    }

    #[test]
    fn editing_one_box_leaves_the_others() {
        let mut builder = MemeBuilder::new();
        builder.select_template(template("1", 3));
        builder.edit_box(0, "a".to_string());
        builder.edit_box(2, "c".to_string());

        assert!(builder.edit_box(1, "b".to_string()));
        assert_eq!(builder.draft(), &["a", "b", "c"]);

        assert!(builder.edit_box(1, String::new()));
        assert_eq!(builder.draft(), &["a", "", "c"]);
    }

    #[test]
    fn editing_outside_the_draft_is_ignored() {
        let mut builder = MemeBuilder::new();
        builder.select_template(template("1", 1));
        assert!(!builder.edit_box(5, "x".to_string()));
        assert_eq!(builder.draft(), &[""]);
    }

    #[test]
    fn nothing_to_submit_without_selection() {
        assert_eq!(MemeBuilder::new().submission(), None);
    }

    #[test]
    fn zero_box_template_submits_empty_list() {
        let mut builder = MemeBuilder::new();
        builder.select_template(template("0", 0));
        let request = builder.submission().unwrap();
        assert!(request.boxes.is_empty());
        assert_eq!(request.template_id, "0");
    }

    #[test]
    fn submission_failure_keeps_form_visible() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        builder.select_template(template("1", 1));

        builder.submission_finished(Err(ApiError::Rejected("bad".to_string())), &mut store);

        assert_eq!(builder.generated(), None);
        assert!(builder.is_picker_visible());
        assert_eq!(store.len(), 1);
        let notification = &store.as_slice()[0];
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.title, "Server error");
    }

    #[test]
    fn reset_restores_the_picker() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let request = builder.select_template(template("1", 2));
        builder.preview_loaded(request.generation, Ok("http://x/p.png".to_string()), &mut store);
        builder.edit_box(1, "text".to_string());
        builder.submission_finished(Ok("http://x/final.png".to_string()), &mut store);
        assert!(!builder.is_picker_visible());

        builder.reset();

        assert_eq!(builder.generated(), None);
        assert_eq!(builder.preview(), None);
        assert!(builder.selected().is_none());
        assert!(builder.draft().is_empty());
        assert!(builder.is_picker_visible());
    }

    #[test]
    fn reset_drops_in_flight_preview() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        let request = builder.select_template(template("1", 1));
        builder.reset();

        assert!(!builder.preview_loaded(request.generation, Ok("http://x/p.png".to_string()), &mut store));
        assert_eq!(builder.preview(), None);
        assert!(!builder.is_loading_preview());
    }

    #[test]
    fn hello_scenario() {
        let mut builder = MemeBuilder::new();
        let mut store = NotificationStore::new();
        builder.catalog_loaded(Ok(vec![template("1", 2)]), &mut store);

        let chosen = builder.templates()[0].clone();
        builder.select_template(chosen);
        assert_eq!(builder.placeholders(), vec!["TEXT #1", "TEXT #2"]);

        builder.edit_box(0, "Hello".to_string());
        assert_eq!(builder.draft(), &["Hello", ""]);

        let request = builder.submission().unwrap();
        assert_eq!(request.template_id, "1");
        assert_eq!(request.boxes, vec!["Hello", ""]);

        builder.submission_finished(Ok("http://x/img.png".to_string()), &mut store);
        assert_eq!(builder.generated(), Some("http://x/img.png"));
        assert!(!builder.is_picker_visible());
        assert_eq!(severities(&store), vec![Severity::Success]);
        assert_eq!(store.as_slice()[0].title, "Meme generated!");
    }
}
