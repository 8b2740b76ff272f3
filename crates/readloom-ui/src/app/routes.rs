//! Routing definitions for the Readloom UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/library")]
    Library,
    #[at("/series/:id")]
    SeriesDetail { id: i64 },
    #[at("/calendar")]
    Calendar,
    #[at("/authors")]
    Authors,
    #[at("/collections")]
    Collections,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
