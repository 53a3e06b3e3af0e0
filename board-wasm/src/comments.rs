use crate::client::BoardClientGloo;
use crate::{text, use_cancel_on_drop};
use board_core::view::{CommentListView, SubmitOutcome, submit_comment};
use board_core::{Locale, Notice, PostId, UserSession};
use chrono::Utc;
use dioxus::prelude::*;

#[component]
pub fn CommentSection(post_id: String) -> Element {
    let client = use_context::<BoardClientGloo>();
    let session = use_context::<Signal<UserSession>>();
    let locale = use_context::<Signal<Locale>>();
    let token = use_cancel_on_drop();

    let mut comments = use_signal(CommentListView::default);
    let mut draft = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut submitting = use_signal(|| false);
    let post_id = use_hook(|| PostId::new(post_id));

    let load_client = client.clone();
    let load_token = token.clone();
    let load_post = post_id.clone();
    use_future(move || {
        let client = load_client.clone();
        let token = load_token.clone();
        let post_id = load_post.clone();
        async move {
            if let Ok(list) = CommentListView::load(&client, &post_id, &token).await {
                comments.set(list);
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        notice.set(None);

        let client = client.clone();
        let token = token.clone();
        let post_id = post_id.clone();
        let session = session.read().clone();
        let content = draft.read().clone();
        submitting.set(true);
        spawn(async move {
            match submit_comment(&client, &session, &post_id, &content, &token).await {
                Ok(SubmitOutcome::Posted(list)) => {
                    comments.set(list);
                    draft.set(String::new());
                }
                Ok(SubmitOutcome::Rejected(rejected)) => notice.set(Some(rejected)),
                Err(_) => {}
            }
            submitting.set(false);
        });
    };

    let lang = locale();
    let rendered = comments.read().render(Utc::now(), lang);
    let placeholder = text(lang, "댓글을 입력하세요", "Write a comment");
    let submit_label = text(lang, "등록", "Post");
    let toast = notice().map(|n| {
        let message = n.message(lang);
        rsx! {
            div { class: "toast toast-error", onclick: move |_| notice.set(None), "{message}" }
        }
    });

    rsx! {
        section { class: "comments",
            ul { class: "comment-list",
                for comment in rendered {
                    li { key: "{comment.id}", class: "comment",
                        div { class: "comment-meta",
                            span { class: "comment-author", "{comment.author}" }
                            span { class: "ago", "{comment.created_ago}" }
                        }
                        p { class: "comment-body", "{comment.content}" }
                    }
                }
            }
            {toast}
            form { class: "comment-form", onsubmit: on_submit,
                textarea {
                    placeholder,
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "btn", r#type: "submit", disabled: submitting(), "{submit_label}" }
            }
        }
    }
}
