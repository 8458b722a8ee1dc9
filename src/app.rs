//! Application shell: session context, router, and chrome.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::container_detail::ContainerDetailPage;
use crate::pages::containers::ContainerListPage;
use crate::pages::game_server_detail::GameServerDetailPage;
use crate::pages::game_servers::GameServerListPage;
use crate::pages::login::LoginPage;
use crate::pages::mods::ModListPage;
use crate::pages::oauth_callback::OAuthCallbackPage;
use crate::pages::register::RegisterPage;
use crate::state::session::Session;

/// Root component: restores the session from localStorage, provides it via
/// context, and mounts the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = Session::restore();
    provide_context(session);

    view! {
        <Title text="Sabakan" />
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomeRedirect />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/oauth/callback") view=OAuthCallbackPage />
                    <Route path=path!("/containers") view=ContainerListPage />
                    <Route path=path!("/containers/:id") view=ContainerDetailPage />
                    <Route path=path!("/game-servers") view=GameServerListPage />
                    <Route path=path!("/game-servers/:slug") view=GameServerDetailPage />
                    <Route path=path!("/mods") view=ModListPage />
                </Routes>
            </main>
        </Router>
    }
}

/// The dashboard's landing route is the container list.
#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path="/containers" /> }
}

/// Top navigation, shown only while signed in.
///
/// Logout does not navigate by itself: clearing the session flips the
/// authenticated flag and the current page's guard performs the redirect.
#[component]
fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();

    let username = move || {
        session
            .current_user()
            .map_or_else(|| "account".to_owned(), |user| user.username)
    };

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::auth::logout(session).await {
                log::warn!("logout request failed: {e}");
            }
        });
    });

    view! {
        <Show when=move || session.is_authenticated()>
            <header class="nav">
                <span class="nav__brand">"Sabakan"</span>
                <a class="nav__link" href="/containers">"Containers"</a>
                <a class="nav__link" href="/game-servers">"Game Servers"</a>
                <a class="nav__link" href="/mods">"Mods"</a>
                <span class="nav__spacer"></span>
                <span class="nav__user">{username}</span>
                <button class="btn nav__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </header>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__detail">"Page not found"</p>
            <a class="btn" href="/">"Go Home"</a>
        </div>
    }
}
