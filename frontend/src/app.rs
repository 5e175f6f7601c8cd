//! Application shell.
//!
//! `App` owns the notification store and the client configuration. Children
//! get the active notifications and a `notify` callback as props instead of
//! reaching for a shared context. Each added notification schedules its own
//! removal after `DISPLAY_DURATION_MS`.

use common::error::ApiError;
use common::model::notification::{NotificationId, NotificationRequest};
use common::notifications::{NotificationStore, DISPLAY_DURATION_MS};
use common::requests::ApiConfig;
use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::meme_builder::MemeBuilderComponent;
use crate::components::toast::ToastContainer;

pub enum Msg {
    ConfigLoaded(Result<ApiConfig, ApiError>),
    Notify(NotificationRequest),
    Dismiss(NotificationId),
}

pub struct App {
    notifications: NotificationStore,
    config: Option<ApiConfig>,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            notifications: NotificationStore::new(),
            config: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(result) => {
                if let Err(e) = &result {
                    error!(format!("loading configuration failed: {}", e));
                }
                let (config, failure) = resolve_config(result);
                if let Some(request) = failure {
                    ctx.link().send_message(Msg::Notify(request));
                }
                self.config = Some(config);
                true
            }
            Msg::Notify(request) => {
                let id = self.notifications.add(request);
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(DISPLAY_DURATION_MS).await;
                    link.send_message(Msg::Dismiss(id));
                });
                true
            }
            // Expired and dismissed toasts both land here; the second removal is a no-op.
            Msg::Dismiss(id) => self.notifications.remove(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app-root">
                <ToastContainer
                    notifications={self.notifications.as_slice().to_vec()}
                    on_dismiss={link.callback(Msg::Dismiss)}
                />
                {
                    if let Some(config) = &self.config {
                        html! {
                            <MemeBuilderComponent
                                config={config.clone()}
                                notify={link.callback(Msg::Notify)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ConfigLoaded(api::fetch_config().await));
            });
        }
    }
}

/// Without the server configuration the builder still mounts with the
/// defaults: the catalog needs no credentials, and caption calls then fail
/// through their own notifications.
fn resolve_config(
    result: Result<ApiConfig, ApiError>,
) -> (ApiConfig, Option<NotificationRequest>) {
    match result {
        Ok(config) => (config, None),
        Err(_) => (
            ApiConfig::default(),
            Some(NotificationRequest::error(
                "Configuration error",
                "Could not load the application configuration",
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::notification::Severity;
    use common::requests::Credentials;

    #[test]
    fn loaded_config_is_used_as_is() {
        let config = ApiConfig {
            api_base: "http://localhost:9000".to_string(),
            credentials: Credentials {
                username: "user".to_string(),
                password: "secret".to_string(),
            },
        };

        let (resolved, failure) = resolve_config(Ok(config.clone()));

        assert_eq!(resolved, config);
        assert!(failure.is_none());
    }

    #[test]
    fn failed_config_falls_back_to_defaults_and_reports() {
        let (resolved, failure) = resolve_config(Err(ApiError::Status(404)));

        assert_eq!(resolved, ApiConfig::default());
        assert_eq!(resolved.catalog_url(), "https://api.imgflip.com/get_memes");
        let request = failure.unwrap();
        assert_eq!(request.severity, Severity::Error);
        assert_eq!(request.title, "Configuration error");
    }
}
