use yew::prelude::*;

use crate::ActiveView;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_view: ActiveView,
    pub on_show_list: Callback<()>,
    pub on_create_new: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let tab_class = |active: bool| if active { "active" } else { "" };

    html! {
        <>
            <header class="header">
                <h1>{"Bill Splitter"}</h1>
            </header>
            <nav class="nav">
                <button
                    class={tab_class(props.active_view == ActiveView::List)}
                    onclick={props.on_show_list.reform(|_: MouseEvent| ())}
                >
                    {"My Bills"}
                </button>
                <button
                    class={tab_class(props.active_view == ActiveView::Create)}
                    onclick={props.on_create_new.reform(|_: MouseEvent| ())}
                >
                    {"Create New"}
                </button>
            </nav>
        </>
    }
}
