use dioxus::prelude::*;
use gazeta_api::{ApiClient, Session};

/// Provide the shared [`ApiClient`] and a `Signal<Session>` restored from the
/// device store. A saved token is checked against the profile endpoint after
/// mount; a rejected token signs the session out.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let client = use_hook(ApiClient::from_env);
    let session = use_signal({
        let client = client.clone();
        move || Session::restore(client, crate::device_store())
    });
    use_context_provider(|| client.clone());
    use_context_provider(|| session);

    use_future(move || async move {
        let mut session = session;
        let client = session.peek().client().clone();
        let Some(token) = client.token() else {
            return;
        };
        let result = client.profile().await;
        let mut current = session.write();
        current.apply_bootstrap(&token, result);
        tracing::debug!("auth.bootstrap: user_id={:?}", current.user().map(|u| u.id));
    });

    rsx! { {children} }
}

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Render `children` only for signed-in readers.
#[component]
pub fn AuthGate(children: Element) -> Element {
    let session = use_session();
    let lang = crate::use_current_lang();

    if !session.read().is_authenticated() {
        return rsx! {
            div { class: "auth_gate",
                h2 { {crate::t(lang, "auth.required")} }
                a { class: "btn", href: "/auth/login", {crate::t(lang, "nav.login")} }
            }
        };
    }

    rsx! {
        {children}
    }
}
