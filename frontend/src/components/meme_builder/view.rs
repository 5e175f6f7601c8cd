//! View rendering for the meme builder page.
//!
//! The card shows either the generated meme with a way back, or the picker
//! (template grid, preview or spinner, caption form). Never both.

use common::model::template::MemeTemplate;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::MemeBuilderComponent;

const ACCENT: &str = "#FC771D";

pub fn view(component: &MemeBuilderComponent, ctx: &Context<MemeBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="meme-root" style="display:flex;flex-direction:column;align-items:center;padding:40px 20px;font-family:Arial, sans-serif;">
            <h1 style={format!("color:{};margin-bottom:24px;", ACCENT)}>{"Meme Maker"}</h1>
            <div class="card" style="width:100%;max-width:700px;background:#fff;border-radius:10px;padding:24px;box-shadow:0 0 8px #ccc;">
                {
                    match component.flow.generated() {
                        Some(url) => build_generated(url, link),
                        None => build_picker(component, link),
                    }
                }
            </div>
        </div>
    }
}

fn build_generated(url: &str, link: &Scope<MemeBuilderComponent>) -> Html {
    html! {
        <div class="generated-meme" style="display:flex;flex-direction:column;align-items:center;">
            <img src={url.to_string()} alt="generated-meme" width="500" />
            { action_button("button", "Go back and make more memes!", Some(link.callback(|_| Msg::Reset))) }
        </div>
    }
}

fn build_picker(component: &MemeBuilderComponent, link: &Scope<MemeBuilderComponent>) -> Html {
    html! {
        <>
            <h2>{"Select your template:"}</h2>
            <div class="templates" style="display:grid;grid-template-columns:repeat(auto-fill, minmax(100px, 1fr));gap:8px;max-height:400px;overflow-y:auto;">
                { for component.flow.templates().iter().map(|template| template_button(component, template, link)) }
            </div>
            { build_preview(component) }
            {
                if component.flow.selected().is_some() {
                    build_form(component, link)
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn template_button(
    component: &MemeBuilderComponent,
    template: &MemeTemplate,
    link: &Scope<MemeBuilderComponent>,
) -> Html {
    let selected = component.flow.is_selected(&template.id);
    let border = if selected { ACCENT } else { "transparent" };
    let onclick = {
        let template = template.clone();
        link.callback(move |_: MouseEvent| Msg::SelectTemplate(template.clone()))
    };

    html! {
        <button
            key={template.id.clone()}
            type="button"
            class={classes!(selected.then_some("selected-template"))}
            title={template.name.clone()}
            style={format!("border:3px solid {};border-radius:6px;padding:0;background:transparent;cursor:pointer;height:100px;overflow:hidden;", border)}
            {onclick}
        >
            <img src={template.url.clone()} alt={template.name.clone()} style="width:100%;height:100%;object-fit:cover;" />
        </button>
    }
}

/// Spinner while the preview is loading, otherwise the preview if there is one.
fn build_preview(component: &MemeBuilderComponent) -> Html {
    let content = if component.flow.is_loading_preview() {
        spinner()
    } else if let Some(url) = component.flow.preview() {
        html! { <img src={url.to_string()} alt="preview-meme" width="300" /> }
    } else {
        return html! {};
    };

    html! {
        <div class="preview-meme" style="display:flex;justify-content:center;margin:24px 0;min-height:60px;">
            { content }
        </div>
    }
}

fn build_form(component: &MemeBuilderComponent, link: &Scope<MemeBuilderComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let draft = component.flow.draft();

    html! {
        <>
            <h2>{"Texts:"}</h2>
            <form {onsubmit} style="display:flex;flex-direction:column;gap:8px;">
                {
                    for component.flow.placeholders().into_iter().enumerate().map(|(index, placeholder)| {
                        let value = draft.get(index).cloned().unwrap_or_default();
                        html! {
                            <input
                                key={index}
                                placeholder={placeholder}
                                value={value}
                                oninput={link.callback(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::EditBox { index, text: input.value() }
                                })}
                                style="padding:12px;border:1px solid #ddd;border-radius:6px;font-size:16px;"
                            />
                        }
                    })
                }
                { action_button("submit", "Make my meme!", None) }
            </form>
        </>
    }
}

fn action_button(kind: &'static str, label: &'static str, onclick: Option<Callback<MouseEvent>>) -> Html {
    html! {
        <button
            type={kind}
            {onclick}
            style={format!("margin-top:16px;padding:12px 24px;border:0;border-radius:6px;background:{};color:#fff;font-size:16px;cursor:pointer;", ACCENT)}
        >
            { label }
        </button>
    }
}

fn spinner() -> Html {
    html! {
        <>
            <div class="spin" style={format!("width:48px;height:48px;border:6px solid #ccc;border-top-color:{};border-radius:50%;animation:spin 1s linear infinite;", ACCENT)}></div>
            <style>{r#"
                    @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                "#}</style>
        </>
    }
}
