//! Component state for the meme builder page.

use common::builder::MemeBuilder;
use common::model::notification::NotificationRequest;
use common::notifications::Notify;
use yew::Callback;

pub struct MemeBuilderComponent {
    /// Workflow state: catalog, selection, draft, preview and result.
    pub flow: MemeBuilder,

    /// Guard to fetch the catalog only on the first render.
    pub loaded: bool,
}

impl MemeBuilderComponent {
    pub fn new() -> Self {
        Self {
            flow: MemeBuilder::new(),
            loaded: false,
        }
    }
}

/// Lets the workflow report through the `notify` prop.
pub struct Notifier<'a>(pub &'a Callback<NotificationRequest>);

impl Notify for Notifier<'_> {
    fn notify(&mut self, request: NotificationRequest) {
        self.0.emit(request);
    }
}
