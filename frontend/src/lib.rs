use yew::prelude::*;
use yew_router::prelude::*;

pub mod animation;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
