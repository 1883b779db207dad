use crate::frontend::pages::Page;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="inner">
            <ul>
                <li>
                    <A href={Page::Home.path()}>"Home"</A>
                </li>
            </ul>
        </nav>
    }
}
