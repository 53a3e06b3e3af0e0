use crate::client::BoardClientGloo;
use crate::comments::CommentSection;
use board_core::view::{LikeIcon, LikeMode, PostDetailView, PostListView, RenderOptions};
use board_core::{CancellationToken, Locale, Notice, PostId, UserSession};
use chrono::{Local, Offset, Utc};
use dioxus::prelude::*;

mod client;
mod comments;
mod error;

const API_URL: &str = match option_env!("BOARD_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8080",
};
const LIKE_MODE: LikeMode = LikeMode::IncreaseOnly;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        PostList {},
        #[route("/post/:id")]
        PostPage { id: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let _ = dioxus::logger::init(tracing::Level::INFO);
    dioxus::launch(App);
}

/// Picks the Korean or English variant of a UI label.
pub fn text(locale: Locale, ko: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Ko => ko,
        Locale::En => en,
    }
}

/// Cancelled when the calling component unmounts, so in-flight requests of a
/// page that is gone are dropped.
pub fn use_cancel_on_drop() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.cancel());
    token
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(UserSession::anonymous()));
    use_context_provider(|| Signal::new(Locale::default()));
    let client = use_hook(|| BoardClientGloo::connect(API_URL).map_err(|e| e.to_string()));

    match client {
        Ok(client) => {
            provide_context(client);
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                Router::<Route> {}
            }
        }
        Err(e) => rsx! {
            p { class: "fatal", "Invalid BOARD_API_URL: {e}" }
        },
    }
}

#[component]
fn Navbar() -> Element {
    let mut session = use_context::<Signal<UserSession>>();
    let mut locale = use_context::<Signal<Locale>>();
    let mut user_input = use_signal(String::new);

    let current_user = session.read().user_id().map(|u| u.to_string());
    let lang = locale();
    let brand = text(lang, "게시판", "Board");
    let sign_out = text(lang, "로그아웃", "Sign out");
    let sign_in = text(lang, "로그인", "Sign in");

    let on_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = user_input.read().clone();
        let next = UserSession::from_raw(Some(raw.as_str()));
        if next.is_signed_in() {
            session.set(next);
            user_input.set(String::new());
        }
    };

    rsx! {
        nav { class: "navbar",
            Link { to: Route::PostList {}, class: "brand", "{brand}" }
            div { class: "navbar-right",
                match current_user {
                    Some(user) => rsx! {
                        span { class: "whoami", "ID: {user}" }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| session.write().sign_out(),
                            "{sign_out}"
                        }
                    },
                    None => rsx! {
                        form { class: "sign-in", onsubmit: on_sign_in,
                            input {
                                r#type: "text",
                                placeholder: text(lang, "사용자 ID", "User ID"),
                                value: "{user_input}",
                                oninput: move |evt| user_input.set(evt.value()),
                            }
                            button { class: "btn", r#type: "submit", "{sign_in}" }
                        }
                    },
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        let next = match locale() {
                            Locale::Ko => Locale::En,
                            Locale::En => Locale::Ko,
                        };
                        locale.set(next);
                    },
                    "{lang}"
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn PostList() -> Element {
    let client = use_context::<BoardClientGloo>();
    let locale = use_context::<Signal<Locale>>();
    let token = use_cancel_on_drop();
    let title = text(locale(), "게시판", "Board");

    let posts = use_resource(move || {
        let client = client.clone();
        let token = token.clone();
        async move { PostListView::load(&client, &token).await }
    });

    rsx! {
        div { class: "board",
            h1 { class: "board-title", "{title}" }
            match posts.read().as_ref() {
                Some(Ok(view)) if !view.is_empty() => rsx! {
                    main { class: "card-grid",
                        for card in view.cards() {
                            Link {
                                key: "{card.id}",
                                to: Route::PostPage { id: card.id.to_string() },
                                div { class: "card",
                                    h2 { class: "card-title", "{card.title}" }
                                    p { class: "card-excerpt", "{card.excerpt}" }
                                }
                            }
                        }
                    }
                },
                _ => rsx! {},
            }
        }
    }
}

#[component]
fn PostPage(id: String) -> Element {
    let client = use_context::<BoardClientGloo>();
    let session = use_context::<Signal<UserSession>>();
    let locale = use_context::<Signal<Locale>>();
    let token = use_cancel_on_drop();

    let mut view = use_signal(PostDetailView::loading);
    let mut notice = use_signal(|| None::<Notice>);
    let mut liking = use_signal(|| false);

    let load_client = client.clone();
    let load_token = token.clone();
    let post_id = PostId::new(id.clone());
    use_future(move || {
        let client = load_client.clone();
        let token = load_token.clone();
        let post_id = post_id.clone();
        async move {
            // Session changes must not reload the page, that would count the view again.
            let session = session.peek().clone();
            let Ok(load) = PostDetailView::load(&client, &session, &post_id, &token).await else {
                return;
            };
            view.set(load.view);
            // Sent after the page is shown so it never holds up rendering.
            if let Some(increment) = load.view_increment {
                let _ = increment.send(&client, &token).await;
            }
        }
    });

    let on_like = move |_| {
        if liking() {
            return;
        }
        notice.set(None);
        let request = match view.read().like_request(&session.read(), LIKE_MODE) {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(rejected) => {
                notice.set(Some(rejected));
                return;
            }
        };

        let client = client.clone();
        let token = token.clone();
        liking.set(true);
        spawn(async move {
            match request.send(&client, &token).await {
                Ok(refetched) => {
                    view.write().apply_like(refetched);
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    tracing::error!(post_id = %request.post_id, error = %e, "like failed");
                    notice.set(Some(Notice::ActionFailed));
                }
            }
            liking.set(false);
        });
    };

    let lang = locale();
    if view.read().is_loading() {
        return rsx! {
            div { class: "loading", div { class: "spinner" } }
        };
    }

    let options = RenderOptions {
        now: Utc::now(),
        offset: Local::now().offset().fix(),
        locale: lang,
    };
    let Some(post) = view.read().render(&options) else {
        return rsx! { NotHavePost {} };
    };

    let toast = notice().map(|n| {
        let message = n.message(lang);
        rsx! {
            div { class: "toast toast-error", onclick: move |_| notice.set(None), "{message}" }
        }
    });
    let like_class = match post.like_icon {
        LikeIcon::Filled => "like-icon liked",
        LikeIcon::Outline => "like-icon",
    };
    let like_glyph = match post.like_icon {
        LikeIcon::Filled => "♥",
        LikeIcon::Outline => "♡",
    };

    rsx! {
        div { class: "post-page",
            {toast}
            main { class: "post",
                div { class: "post-header",
                    h1 { class: "post-title", "{post.title}" }
                    div { class: "post-meta",
                        div { "ID: {post.author}" }
                        div { class: "post-date", "{post.created_at}" }
                        div { class: "post-stats",
                            button {
                                class: "like-button",
                                disabled: liking(),
                                onclick: on_like,
                                span { class: like_class, "{like_glyph}" }
                                span { "{post.recommend_count}" }
                            }
                            span { class: "views", "👁 {post.view_count}" }
                            span { class: "ago", "{post.created_ago}" }
                        }
                    }
                }
                div { class: "post-content", dangerous_inner_html: "{post.content_html}" }
            }
            CommentSection { post_id: post.id.to_string() }
        }
    }
}

#[component]
fn NotHavePost() -> Element {
    let locale = use_context::<Signal<Locale>>();
    let message = Notice::PostNotFound.message(locale());
    let back = text(locale(), "목록으로", "Back to the board");
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
            Link { to: Route::PostList {}, class: "btn", "{back}" }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = use_context::<Signal<Locale>>();
    let message = Notice::PageNotFound.message(locale());
    let home = text(locale(), "처음으로", "Home");
    let path = segments.join("/");
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
            p { class: "path", "/{path}" }
            Link { to: Route::PostList {}, class: "btn", "{home}" }
        }
    }
}
