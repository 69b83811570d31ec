use dioxus::prelude::*;

use gazeta_api::catalog;
use gazeta_api::dates::format_long_date;
use gazeta_api::ApiError;

#[component]
pub fn CommentThread(article_id: i64) -> Element {
    let client = crate::use_api();
    let mut session = crate::use_session();
    let lang = crate::use_current_lang();

    let mut draft = use_signal(String::new);
    let mut err = use_signal(String::new);
    let mut posting = use_signal(|| false);

    let list_client = client.clone();
    let mut comments = use_resource(move || {
        let client = list_client.clone();
        async move { catalog::article_comments(&client, article_id).await }
    });

    let signed_in = session.read().is_authenticated();

    rsx! {
        div { class: "panel",
            h2 { {crate::t(lang, "comments.title")} }

            if !signed_in {
                p { class: "hint", {crate::t(lang, "comments.signin_required")} }
                a { class: "btn primary", href: "/auth/login", {crate::t(lang, "nav.login")} }
            } else {
                textarea {
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    placeholder: crate::t(lang, "comments.placeholder"),
                    rows: 4,
                }
                button {
                    class: "btn primary",
                    disabled: posting(),
                    onclick: move |_| {
                        err.set(String::new());
                        let client = client.clone();
                        let body = draft();
                        spawn(async move {
                            let text = body.trim();
                            if text.is_empty() {
                                err.set(crate::t(lang, "comments.empty_error"));
                                return;
                            }
                            posting.set(true);
                            match client.add_comment(article_id, text).await {
                                Ok(_) => {
                                    draft.set(String::new());
                                    comments.restart();
                                }
                                Err(ApiError::Unauthorized) => {
                                    session.write().logout();
                                    err.set(crate::t(lang, "comments.signin_required"));
                                }
                                Err(e) => {
                                    tracing::error!("comments.post: article_id={article_id} err={e}");
                                    err.set(crate::t(lang, "comments.post_error"));
                                }
                            }
                            posting.set(false);
                        });
                    },
                    {crate::t(lang, "comments.post")}
                }
                if !err().is_empty() {
                    p { class: "error", "{err}" }
                }
            }

            match comments() {
                None => rsx! {
                    p { {crate::t(lang, "common.loading")} }
                },
                Some(items) => rsx! {
                    if items.is_empty() {
                        p { class: "hint", {crate::t(lang, "comments.empty")} }
                    }
                    for c in items {
                        div { key: "{c.id}", class: "comment",
                            div { class: "comment_meta",
                                span { class: "comment_author", {c.author_name().to_string()} }
                                span { class: "hint", {format_long_date(&c.created_at, lang)} }
                            }
                            p { class: "body", "{c.content}" }
                        }
                    }
                },
            }
        }
    }
}
