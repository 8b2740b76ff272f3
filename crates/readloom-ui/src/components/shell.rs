//! Top-level navigation chrome with the theme toggle.

use crate::app::Route;
use crate::core::theme::ThemeMode;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub active: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let on_toggle = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };
    let theme_label = if props.theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <span class="brand">{"Readloom"}</span>
                <nav class="app-nav">
                    {nav_link(&props.active, Route::Home, "Dashboard")}
                    {nav_link(&props.active, Route::Library, "Library")}
                    {nav_link(&props.active, Route::Calendar, "Calendar")}
                    {nav_link(&props.active, Route::Authors, "Authors")}
                    {nav_link(&props.active, Route::Collections, "Collections")}
                    {nav_link(&props.active, Route::Settings, "Settings")}
                </nav>
                <button class="btn btn-ghost" aria-label={theme_label} onclick={on_toggle}>
                    {if props.theme.is_dark() { "🌙" } else { "☀" }}
                </button>
            </header>
            <main class="app-main">
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn nav_link(active: &Route, to: Route, label: &str) -> Html {
    let class = classes!("nav-link", (*active == to).then_some("active"));
    html! {
        <Link<Route> classes={class} to={to}>{label}</Link<Route>>
    }
}
