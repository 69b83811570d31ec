use dioxus::prelude::*;
use gazeta_api::dates::format_month_year;
use gazeta_api::types::Newspaper;

use crate::media::image_src;

#[component]
pub fn NewspaperCard(newspaper: Newspaper) -> Element {
    let lang = crate::use_current_lang();
    let title = newspaper.title(lang).to_string();
    let cover = image_src(newspaper.cover_image.as_deref());
    let issue = format_month_year(&newspaper.issue_date, lang);
    let href = format!("/newspapers/{}", newspaper.id);
    let pdf = newspaper.pdf_url();

    rsx! {
        div { class: "newspaper_card",
            a { href: "{href}",
                img { class: "newspaper_cover", src: "{cover}", alt: "{title}" }
                h3 { "{title}" }
            }
            p { class: "hint", "{issue}" }
            match pdf {
                Some(url) => rsx! {
                    a { class: "btn", href: "{url}", download: "true", target: "_blank", rel: "noopener noreferrer",
                        {crate::t(lang, "newspapers.download")}
                    }
                },
                None => rsx! {
                    p { class: "hint", {crate::t(lang, "newspapers.no_pdf")} }
                },
            }
        }
    }
}
