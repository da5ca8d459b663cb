// frontend_jalsetu/src/router.rs
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::report::Report;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/report")]
    Report,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <Switch<Route> render={switch} />
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Report => html! { <Report /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Report.to_path(), "/report");
        assert_eq!(Route::recognize("/report"), Some(Route::Report));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
