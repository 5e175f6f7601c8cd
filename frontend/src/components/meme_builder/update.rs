//! Update function for the meme builder page.
//!
//! Elm-style: mutates the component from a `Msg` and returns whether the view
//! must re-render. Remote calls are spawned here and report back with a new
//! message once they settle. Failures are written to the console with their
//! cause; the user only sees the notification raised by the workflow.

use common::error::ApiError;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{MemeBuilderComponent, Notifier};

pub fn update(
    component: &mut MemeBuilderComponent,
    ctx: &Context<MemeBuilderComponent>,
    msg: Msg,
) -> bool {
    let notify = &ctx.props().notify;

    match msg {
        Msg::CatalogLoaded(result) => {
            log_failure("loading templates", &result);
            component.flow.catalog_loaded(result, &mut Notifier(notify));
            true
        }
        Msg::SelectTemplate(template) => {
            let request = component.flow.select_template(template);

            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            spawn_local(async move {
                let result = api::caption_image(&config, &request.caption).await;
                link.send_message(Msg::PreviewLoaded {
                    generation: request.generation,
                    result,
                });
            });
            true
        }
        Msg::PreviewLoaded { generation, result } => {
            log_failure("loading preview", &result);
            component
                .flow
                .preview_loaded(generation, result, &mut Notifier(notify))
        }
        Msg::EditBox { index, text } => component.flow.edit_box(index, text),
        Msg::Submit => {
            if let Some(request) = component.flow.submission() {
                let link = ctx.link().clone();
                let config = ctx.props().config.clone();
                spawn_local(async move {
                    let result = api::caption_image(&config, &request).await;
                    link.send_message(Msg::SubmissionFinished(result));
                });
            }
            false
        }
        Msg::SubmissionFinished(result) => {
            log_failure("generating meme", &result);
            component
                .flow
                .submission_finished(result, &mut Notifier(notify));
            true
        }
        Msg::Reset => {
            component.flow.reset();
            true
        }
    }
}

fn log_failure<T>(action: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        error!(format!("{} failed: {}", action, e));
    }
}
