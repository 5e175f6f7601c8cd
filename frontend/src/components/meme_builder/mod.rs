//! Meme builder page: template picker, preview, caption form and result.
//!
//! The `Component` implementation only wires Yew to the `common::builder::MemeBuilder`
//! state machine. `update` forwards messages to it and spawns the remote calls,
//! `view` renders whatever state it is in. The catalog is fetched once, on the
//! first render.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MemeBuilderProps;
pub use state::MemeBuilderComponent;

use crate::api;

impl Component for MemeBuilderComponent {
    type Message = Msg;
    type Properties = MemeBuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MemeBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            spawn_local(async move {
                let result = api::fetch_templates(&config).await;
                link.send_message(Msg::CatalogLoaded(result));
            });
        }
    }
}
