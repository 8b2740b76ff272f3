//! App shell: boot, contexts, routing, and global hosts.
//!
//! # Design
//! - One `ApiCtx` and one `ConfirmService` per boot, shared via contexts.
//! - The theme lives in `ThemeStore` (persistence + DOM attribute) and is
//!   mirrored into the app store so components re-render on toggle.
//! - `ToastHost` and `ConfirmDialog` mount once here; pages only write to the
//!   store slices those hosts render.

use crate::components::confirm::ConfirmDialog;
use crate::components::dashboard::DashboardPage;
use crate::components::library::LibraryPage;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::storage::LocalStore;
use crate::core::store::AppStore;
use crate::core::theme::{ThemeMode, ThemeStore};
use crate::services::confirm::ConfirmService;
use api::ApiCtx;
use preferences::{api_base_url, system_prefers_dark};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(ReadloomApp)]
pub fn readloom_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let confirm = use_memo(|_| ConfirmService::new(), ());
    let theme_store = use_mut_ref(|| ThemeStore::new(LocalStore, system_prefers_dark()));
    let theme = use_selector(|store: &AppStore| store.theme);

    {
        let dispatch = dispatch.clone();
        let theme_store = theme_store.clone();
        use_effect_with_deps(
            move |_| {
                let boot_theme = theme_store.borrow().current_theme();
                dispatch.reduce_mut(|store| store.theme = boot_theme);
                || ()
            },
            (),
        );
    }

    let on_toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            let current = {
                let mut store = theme_store.borrow_mut();
                store.toggle_theme();
                store.current_theme()
            };
            dispatch.reduce_mut(|store| store.theme = current);
        })
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<ConfirmService> context={(*confirm).clone()}>
                <BrowserRouter>
                    <AppContent
                        theme={*theme}
                        on_toggle_theme={on_toggle_theme}
                        confirm={(*confirm).clone()}
                    />
                </BrowserRouter>
            </ContextProvider<ConfirmService>>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct AppContentProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub confirm: ConfirmService,
}

// Separate from the root so `use_route` runs inside the router context.
#[function_component(AppContent)]
fn app_content(props: &AppContentProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <>
            <AppShell
                theme={props.theme}
                on_toggle_theme={props.on_toggle_theme.clone()}
                active={current_route}
            >
                <Switch<Route> render={switch} />
            </AppShell>
            <ToastHost />
            <ConfirmDialog service={props.confirm.clone()} />
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <DashboardPage /> },
        Route::Library => html! { <LibraryPage /> },
        Route::SeriesDetail { id } => html! {
            <Placeholder
                title={format!("Series #{id}")}
                body={"Full series pages are reached from the library detail sheets.".to_string()}
            />
        },
        Route::Calendar => html! {
            <Placeholder
                title={"Calendar".to_string()}
                body={"Month view of upcoming releases.".to_string()}
            />
        },
        Route::Authors => html! {
            <Placeholder
                title={"Authors".to_string()}
                body={"Browse the library by author.".to_string()}
            />
        },
        Route::Collections => html! {
            <Placeholder
                title={"Collections".to_string()}
                body={"Group series and link root folders.".to_string()}
            />
        },
        Route::Settings => html! {
            <Placeholder
                title={"Settings".to_string()}
                body={"Root folders, metadata providers, and import.".to_string()}
            />
        },
        Route::NotFound => html! {
            <Placeholder
                title={"Not found".to_string()}
                body={"Use the navigation to return to a supported view.".to_string()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    pub title: String,
    pub body: String,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{props.title.clone()}</h2>
            <p class="muted">{props.body.clone()}</p>
        </div>
    }
}

/// Mount the application, preferring a `#root` element when the host page
/// provides one.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReadloomApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReadloomApp>::new().render();
    }
}
