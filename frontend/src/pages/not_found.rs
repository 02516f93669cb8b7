use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page-section container centered not-found">
            <h1 class="section-title">{"Page not found"}</h1>
            <p class="lead">{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to Home"}
            </Link<Route>>
        </section>
    }
}
