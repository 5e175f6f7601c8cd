use common::model::notification::{Notification, NotificationId};
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<NotificationId>,
}

/// One notification panel. Colors come from the severity; without a
/// description the content is centered and the icon loses its top margin.
pub struct Toast;

impl Component for Toast {
    type Message = ();
    type Properties = ToastProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Toast
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let notification = &props.notification;
        let colors = notification.severity.style();
        let has_description = notification.has_description();

        let container_style = format!(
            "width:360px;position:relative;padding:16px 30px 16px 16px;border-radius:10px;\
             box-shadow:2px 2px 8px rgba(0,0,0,0.2);display:flex;align-items:{};\
             background:{};color:{};animation:toast-in 0.3s ease-out;",
            if has_description { "flex-start" } else { "center" },
            colors.background,
            colors.foreground,
        );
        let icon_style = format!(
            "margin:{};font-size:20px;",
            if has_description { "4px 12px 0 0" } else { "0 12px 0 0" }
        );

        let on_close = {
            let id = notification.id;
            props.on_dismiss.reform(move |_: MouseEvent| id)
        };

        html! {
            <div class={classes_for(notification)} style={container_style}>
                <i class="material-icons" style={icon_style}>{ notification.severity.icon() }</i>
                <div style="flex:1;">
                    <strong>{ notification.title.clone() }</strong>
                    {
                        if let Some(description) = &notification.description {
                            html! {
                                <p style="margin-top:4px;font-size:14px;opacity:0.8;line-height:20px;">
                                    { description.clone() }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <button
                    type="button"
                    title="Close"
                    onclick={on_close}
                    style="position:absolute;right:16px;top:19px;border:0;background:transparent;color:inherit;cursor:pointer;"
                >
                    <i class="material-icons" style="font-size:18px;">{"close"}</i>
                </button>
            </div>
        }
    }
}

fn classes_for(notification: &Notification) -> String {
    format!("toast toast-{}", notification.severity)
}
