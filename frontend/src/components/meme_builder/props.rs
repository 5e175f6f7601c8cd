//! Properties for the `MemeBuilderComponent`.

use common::model::notification::NotificationRequest;
use common::requests::ApiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MemeBuilderProps {
    /// Endpoints and credentials for the captioning API, loaded by the shell.
    pub config: ApiConfig,

    /// Forwards user feedback to the owner of the notification store.
    pub notify: Callback<NotificationRequest>,
}
