use dioxus::prelude::*;

use gazeta_api::normalize_external_url;
use gazeta_api::types::{ProfileUpdate, User};
use gazeta_api::{ApiError, Session};

use crate::media::avatar_initial;

#[component]
pub fn ProfileEditPage() -> Element {
    let session = crate::use_session();
    let lang = crate::use_current_lang();

    let view = ProfileView::of(&session.read());

    match view {
        ProfileView::Ready(user) => rsx! {
            ProfileForm { key: "{user.id}", user }
        },
        ProfileView::Loading => rsx! {
            div { class: "panel",
                p { {crate::t(lang, "common.loading")} }
            }
        },
        ProfileView::SignedOut => rsx! {
            div { class: "panel",
                p { {crate::t(lang, "auth.required")} }
                a { class: "btn primary", href: "/auth/login", {crate::t(lang, "nav.login")} }
            }
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ProfileView {
    SignedOut,
    /// Token restored, profile still being fetched.
    Loading,
    Ready(User),
}

impl ProfileView {
    fn of(session: &Session) -> Self {
        match session.user() {
            Some(user) => ProfileView::Ready(user.clone()),
            None if session.is_authenticated() => ProfileView::Loading,
            None => ProfileView::SignedOut,
        }
    }
}

/// Initial `(full name, email, avatar)` form values.
fn form_fields(user: &User) -> (String, String, String) {
    (
        user.full_name.clone(),
        user.email.clone(),
        user.avatar.clone().unwrap_or_default(),
    )
}

/// Edit form seeded from the loaded `user`.
#[component]
fn ProfileForm(user: User) -> Element {
    let mut session = crate::use_session();
    let lang = crate::use_current_lang();

    let (name0, email0, avatar0) = use_hook(|| form_fields(&user));
    let mut full_name = use_signal(|| name0);
    let mut email = use_signal(|| email0);
    let mut avatar = use_signal(|| avatar0);
    let mut status = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let avatar_src = normalize_external_url(Some(&avatar()));
    let display_name = full_name();
    let initial = avatar_initial(if display_name.trim().is_empty() {
        &user.full_name
    } else {
        &display_name
    });
    let joined = gazeta_api::dates::format_long_date(&user.created_at, lang);

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "profile.title")} }
                p { class: "hint", "{user.role} • {joined}" }
            }

            div { class: "panel",
                div { class: "avatar",
                    match avatar_src {
                        Some(src) => rsx! { img { src: "{src}", alt: "{full_name}" } },
                        None => rsx! { span { "{initial}" } },
                    }
                }

                label { {crate::t(lang, "profile.full_name")} }
                input { value: "{full_name}", oninput: move |e| full_name.set(e.value()) }
                label { {crate::t(lang, "profile.email")} }
                input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
                label { {crate::t(lang, "profile.avatar")} }
                input { value: "{avatar}", oninput: move |e| avatar.set(e.value()) }

                button {
                    class: "btn primary",
                    disabled: saving(),
                    onclick: move |_| {
                        let update = ProfileUpdate::from_form(&full_name(), &email(), &avatar());
                        status.set(String::new());
                        saving.set(true);
                        spawn(async move {
                            let (client, token) = {
                                let current = session.peek();
                                (current.client().clone(), current.client().token())
                            };
                            let result = client.update_profile(&update).await;
                            let applied = session.write().apply_profile_update(token.as_deref(), result);
                            match applied {
                                Ok(()) => status.set(crate::t(lang, "profile.saved")),
                                Err(ApiError::Unauthorized) => {
                                    status.set(crate::t(lang, "auth.required"));
                                }
                                Err(e) => {
                                    tracing::error!("profile.save: err={e}");
                                    status.set(crate::t(lang, "profile.save_failed"));
                                }
                            }
                            saving.set(false);
                        });
                    },
                    if saving() {
                        {crate::t(lang, "profile.saving")}
                    } else {
                        {crate::t(lang, "profile.save")}
                    }
                }

                if !status().is_empty() {
                    p { class: "hint", "{status}" }
                }
            }
        }
    }
}
