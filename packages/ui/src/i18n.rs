use dioxus::prelude::*;
use gazeta_api::{Lang, LanguageState, MemoryStore};

/// Provide `Signal<LanguageState>` to the component tree, loaded from the
/// device store (Uzbek unless a valid choice was saved).
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let state = use_signal(|| LanguageState::load(crate::device_store()));
    use_context_provider(|| state);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<LanguageState> {
    if let Some(sig) = try_use_context::<Signal<LanguageState>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n.use_lang: missing I18nProvider context, using unsaved Uzbek state");
    use_signal(|| LanguageState::load(MemoryStore::shared()))
}

/// The current language, subscribing the calling component to changes.
pub fn use_current_lang() -> Lang {
    use_lang().read().language()
}

/// Switch language and persist the choice.
pub fn set_lang(mut state: Signal<LanguageState>, lang: Lang) {
    state.write().set_language(lang);
}

/// Navbar button flipping between Uzbek and Russian.
#[component]
pub fn LanguageToggle() -> Element {
    let mut state = use_lang();
    let lang = state.read().language();
    let aria = t(lang, "lang.switch");

    rsx! {
        button {
            class: "lang_toggle",
            "aria-label": "{aria}",
            onclick: move |_| {
                let next = state.write().toggle();
                tracing::debug!("i18n.toggle: lang={next}");
            },
            {lang.label()}
        }
    }
}

/// Interface strings. Falls back to Uzbek, then to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::Uz, "app.name") => "Gazeta".to_string(),
        (Lang::Uz, "nav.home") => "Bosh sahifa".to_string(),
        (Lang::Ru, "nav.home") => "Главная".to_string(),
        (Lang::Uz, "nav.newspapers") => "Gazetalar".to_string(),
        (Lang::Ru, "nav.newspapers") => "Газеты".to_string(),
        (Lang::Uz, "nav.profile") => "Profil".to_string(),
        (Lang::Ru, "nav.profile") => "Профиль".to_string(),
        (Lang::Uz, "nav.login") => "Kirish".to_string(),
        (Lang::Ru, "nav.login") => "Войти".to_string(),
        (Lang::Uz, "nav.logout") => "Chiqish".to_string(),
        (Lang::Ru, "nav.logout") => "Выйти".to_string(),
        (Lang::Uz, "nav.search") => "Qidirish...".to_string(),
        (Lang::Ru, "nav.search") => "Поиск...".to_string(),
        (Lang::Uz, "lang.switch") => "Rus tiliga o'tish".to_string(),
        (Lang::Ru, "lang.switch") => "Переключить на узбекский".to_string(),
        (Lang::Uz, "common.loading") => "Yuklanmoqda...".to_string(),
        (Lang::Ru, "common.loading") => "Загрузка...".to_string(),
        (Lang::Uz, "common.back") => "Orqaga".to_string(),
        (Lang::Ru, "common.back") => "Назад".to_string(),

        // Articles
        (Lang::Uz, "article.not_found") => "Maqola topilmadi".to_string(),
        (Lang::Ru, "article.not_found") => "Статья не найдена".to_string(),
        (Lang::Uz, "article.views") => "ko'rishlar".to_string(),
        (Lang::Ru, "article.views") => "просмотров".to_string(),

        // Comments
        (Lang::Uz, "comments.title") => "Izohlar".to_string(),
        (Lang::Ru, "comments.title") => "Комментарии".to_string(),
        (Lang::Uz, "comments.placeholder") => "Izohingizni yozing...".to_string(),
        (Lang::Ru, "comments.placeholder") => "Напишите комментарий...".to_string(),
        (Lang::Uz, "comments.post") => "Yuborish".to_string(),
        (Lang::Ru, "comments.post") => "Отправить".to_string(),
        (Lang::Uz, "comments.empty") => "Hozircha izohlar yo'q".to_string(),
        (Lang::Ru, "comments.empty") => "Комментариев пока нет".to_string(),
        (Lang::Uz, "comments.empty_error") => "Izoh bo'sh bo'lmasligi kerak".to_string(),
        (Lang::Ru, "comments.empty_error") => "Комментарий не может быть пустым".to_string(),
        (Lang::Uz, "comments.signin_required") => "Izoh qoldirish uchun tizimga kirish kerak".to_string(),
        (Lang::Ru, "comments.signin_required") => "Чтобы оставить комментарий, нужно войти в систему".to_string(),
        (Lang::Uz, "comments.post_error") => "Izoh qo'shishda xatolik yuz berdi".to_string(),
        (Lang::Ru, "comments.post_error") => "Произошла ошибка при добавлении комментария".to_string(),

        // Newspapers
        (Lang::Uz, "newspapers.open") => "O'qish".to_string(),
        (Lang::Ru, "newspapers.open") => "Читать".to_string(),
        (Lang::Uz, "newspapers.download") => "PDF yuklab olish".to_string(),
        (Lang::Ru, "newspapers.download") => "Скачать PDF".to_string(),
        (Lang::Uz, "newspapers.no_pdf") => "PDF mavjud emas".to_string(),
        (Lang::Ru, "newspapers.no_pdf") => "PDF недоступен".to_string(),

        // Auth / profile
        (Lang::Uz, "auth.required") => "Tizimga kirish talab qilinadi".to_string(),
        (Lang::Ru, "auth.required") => "Требуется вход в систему".to_string(),
        (Lang::Uz, "profile.title") => "Profil".to_string(),
        (Lang::Ru, "profile.title") => "Профиль".to_string(),
        (Lang::Uz, "profile.full_name") => "To'liq ism".to_string(),
        (Lang::Ru, "profile.full_name") => "Полное имя".to_string(),
        (Lang::Uz, "profile.email") => "Email".to_string(),
        (Lang::Uz, "profile.avatar") => "Avatar URL".to_string(),
        (Lang::Uz, "profile.save") => "Saqlash".to_string(),
        (Lang::Ru, "profile.save") => "Сохранить".to_string(),
        (Lang::Uz, "profile.saving") => "Saqlanmoqda...".to_string(),
        (Lang::Ru, "profile.saving") => "Сохранение...".to_string(),
        (Lang::Uz, "profile.saved") => "Saqlandi".to_string(),
        (Lang::Ru, "profile.saved") => "Сохранено".to_string(),
        (Lang::Uz, "profile.save_failed") => "Saqlab bo'lmadi".to_string(),
        (Lang::Ru, "profile.save_failed") => "Не удалось сохранить".to_string(),

        // Fallback: use the Uzbek string if present, else show key.
        (Lang::Ru, k) => t(Lang::Uz, k),
        (Lang::Uz, _) => key.to_string(),
    }
}
