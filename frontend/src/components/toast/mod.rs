//! Toast presenter: a fixed stack of dismissible notifications.
//!
//! Pure presentation. The notifications and the dismiss action come from the
//! owner of the `NotificationStore` through props.

mod panel;

use common::model::notification::{Notification, NotificationId};
use yew::{html, Callback, Component, Context, Html, Properties};

pub use panel::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastContainerProps {
    /// Active notifications, oldest first.
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<NotificationId>,
}

pub struct ToastContainer;

impl Component for ToastContainer {
    type Message = ();
    type Properties = ToastContainerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ToastContainer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div
                class="toast-container"
                style="position:fixed;top:0;right:0;padding:30px;display:flex;flex-direction:column;gap:8px;z-index:10000;overflow:hidden;"
            >
                <style>{r#"
                    @keyframes toast-in { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
                "#}</style>
                { for props.notifications.iter().map(|notification| html! {
                    <Toast
                        key={notification.id.to_string()}
                        notification={notification.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                }) }
            </div>
        }
    }
}
